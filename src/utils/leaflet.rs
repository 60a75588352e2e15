//! Typed wrappers around the Leaflet map loaded from CDN.
//!
//! Leaflet ships as plain JS (no wasm bindings in this stack), so the map
//! is driven through a `js_sys::eval` bridge: a poll loop waits for the
//! library and the container to exist, and the click handler reports back
//! through a callback exposed as a global.

use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;

const PICK_CALLBACK: &str = "__irrigationMapPick";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
fn call_js(code: &str) {
    let wrapped = format!("try {{ {code} }} catch(e) {{ console.warn('Map JS call failed:', e); }}");
    let _ = js_sys::eval(&wrapped);
}

/// Keeps the click closure (and the map it feeds) alive for the lifetime
/// of the picker component. Dropping it tears both down.
pub struct MapHandle {
    container_id: String,
    _on_pick: Closure<dyn FnMut(f64, f64)>,
}

impl Drop for MapHandle {
    fn drop(&mut self) {
        let _ = js_sys::Reflect::delete_property(
            &js_sys::global(),
            &JsValue::from_str(PICK_CALLBACK),
        );
        destroy_map(&self.container_id);
    }
}

/// Mounts a Leaflet picker into `container_id` once both the library and
/// the container element exist.
///
/// Clicks keep a single marker (the most recent pick) and report the raw
/// coordinate pair to `on_pick`; formatting is the caller's concern.
pub fn mount_picker(
    container_id: &str,
    center: (f64, f64),
    zoom: u8,
    on_pick: impl FnMut(f64, f64) + 'static,
) -> MapHandle {
    let closure = Closure::wrap(Box::new(on_pick) as Box<dyn FnMut(f64, f64)>);
    let _ = js_sys::Reflect::set(
        &js_sys::global(),
        &JsValue::from_str(PICK_CALLBACK),
        closure.as_ref(),
    );

    let (lat, lng) = center;
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (typeof L === 'undefined' || !document.getElementById('{container_id}')) {{ return; }}
                clearInterval(poll);
                var map = L.map('{container_id}').setView([{lat}, {lng}], {zoom});
                L.tileLayer('https://{{s}}.tile.openstreetmap.org/{{z}}/{{x}}/{{y}}.png', {{
                    attribution: '&copy; OpenStreetMap contributors'
                }}).addTo(map);
                var marker = null;
                map.on('click', function(e) {{
                    if (marker) {{ marker.setLatLng(e.latlng); }}
                    else {{ marker = L.marker(e.latlng).addTo(map); }}
                    if (globalThis.{PICK_CALLBACK}) {{ globalThis.{PICK_CALLBACK}(e.latlng.lat, e.latlng.lng); }}
                }});
                globalThis.__irrigationMaps = globalThis.__irrigationMaps || {{}};
                globalThis.__irrigationMaps['{container_id}'] = map;
            }}, 100);
        }})();
        "#
    ));

    MapHandle {
        container_id: container_id.to_string(),
        _on_pick: closure,
    }
}

/// Tear down the map instance for the given container, if one exists.
fn destroy_map(container_id: &str) {
    call_js(&format!(
        "if (globalThis.__irrigationMaps && globalThis.__irrigationMaps['{container_id}']) {{ \
         globalThis.__irrigationMaps['{container_id}'].remove(); \
         delete globalThis.__irrigationMaps['{container_id}']; }}"
    ));
}

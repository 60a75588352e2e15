use yew::prelude::*;

use crate::config::Config;
use crate::utils::leaflet::mount_picker;

const MAP_CONTAINER_ID: &str = "location-map";

#[derive(Properties, PartialEq)]
pub struct MapPickerProps {
    /// Receives the clicked (latitude, longitude) pair
    pub on_select: Callback<(f64, f64)>,
}

/// Leaflet map for choosing field coordinates.
#[function_component(MapPicker)]
pub fn map_picker(props: &MapPickerProps) -> Html {
    {
        let on_select = props.on_select.clone();

        use_effect_with((), move |_| {
            let handle = mount_picker(
                MAP_CONTAINER_ID,
                Config::MAP_CENTER,
                Config::MAP_ZOOM,
                move |lat, lng| on_select.emit((lat, lng)),
            );

            move || drop(handle)
        });
    }

    html! {
        <div class="map-picker">
            <div id={MAP_CONTAINER_ID} class="map-container"></div>
            <p class="map-hint">{"Click on the map to select a location for your field"}</p>
        </div>
    }
}

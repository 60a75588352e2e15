use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::map_picker::MapPicker;
use crate::hooks::use_draft::use_draft;
use crate::models::catalog::{Crop, Soil};
use crate::models::decision::DecisionRequest;

#[derive(Properties, PartialEq)]
pub struct InputFormProps {
    pub crops: Vec<Crop>,
    pub soils: Vec<Soil>,
    /// Disables the controls while a submission is in flight
    #[prop_or_default]
    pub busy: bool,
    /// Submission failure from the backend, shown in the same banner as
    /// local validation errors
    #[prop_or_default]
    pub submit_error: Option<String>,
    /// Receives only validated requests; a draft with a missing field
    /// never leaves this component
    pub on_submit: Callback<DecisionRequest>,
}

#[function_component(InputForm)]
pub fn input_form(props: &InputFormProps) -> Html {
    let draft = use_draft();
    let show_map = use_state(|| false);
    let validation_error = use_state(|| None::<String>);

    let on_crop_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.crop_type = target.value();
            draft.set(next);
        })
    };

    let on_soil_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.soil_type = target.value();
            draft.set(next);
        })
    };

    let on_latitude_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.latitude = target.value();
            draft.set(next);
        })
    };

    let on_longitude_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.longitude = target.value();
            draft.set(next);
        })
    };

    // A map pick fills both coordinates and closes the panel; only the
    // most recent click matters.
    let on_location_select = {
        let draft = draft.clone();
        let show_map = show_map.clone();
        Callback::from(move |(lat, lng): (f64, f64)| {
            let mut next = (*draft).clone();
            next.set_location(lat, lng);
            draft.set(next);
            show_map.set(false);
        })
    };

    let on_toggle_map = {
        let show_map = show_map.clone();
        Callback::from(move |_: MouseEvent| show_map.set(!*show_map))
    };

    let onsubmit = {
        let draft = draft.clone();
        let validation_error = validation_error.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match draft.validate() {
                Ok(request) => {
                    validation_error.set(None);
                    on_submit.emit(request);
                }
                Err(error) => validation_error.set(Some(error.to_string())),
            }
        })
    };

    let banner = (*validation_error)
        .clone()
        .or_else(|| props.submit_error.clone());

    html! {
        <div class="panel input-form">
            <h2>{"Irrigation Parameters"}</h2>

            if let Some(message) = banner {
                <div class="banner error"><p>{message}</p></div>
            }

            <form {onsubmit}>
                <div class="form-group">
                    <label for="crop_type">{"Crop Type"}</label>
                    <select id="crop_type" onchange={on_crop_change} disabled={props.busy}>
                        <option value="" selected={draft.crop_type.is_empty()}>{"Select Crop Type"}</option>
                        {
                            props.crops.iter().map(|crop| {
                                let selected = crop.name == draft.crop_type;
                                html! {
                                    <option value={crop.name.clone()} {selected}>{crop.display_name()}</option>
                                }
                            }).collect::<Html>()
                        }
                    </select>
                </div>

                <div class="form-group">
                    <label for="soil_type">{"Soil Type"}</label>
                    <select id="soil_type" onchange={on_soil_change} disabled={props.busy}>
                        <option value="" selected={draft.soil_type.is_empty()}>{"Select Soil Type"}</option>
                        {
                            props.soils.iter().map(|soil| {
                                let selected = soil.name == draft.soil_type;
                                html! {
                                    <option value={soil.name.clone()} {selected}>{&soil.name}</option>
                                }
                            }).collect::<Html>()
                        }
                    </select>
                </div>

                <div class="form-group">
                    <label>{"Location"}</label>
                    <div class="coordinate-row">
                        <input
                            type="text"
                            placeholder="Latitude"
                            value={draft.latitude.clone()}
                            oninput={on_latitude_input}
                            disabled={props.busy}
                        />
                        <input
                            type="text"
                            placeholder="Longitude"
                            value={draft.longitude.clone()}
                            oninput={on_longitude_input}
                            disabled={props.busy}
                        />
                    </div>
                    <button type="button" class="link-button" onclick={on_toggle_map}>
                        { if *show_map { "Hide Map" } else { "Pick Location on Map" } }
                    </button>
                </div>

                if *show_map {
                    <MapPicker on_select={on_location_select} />
                }

                <button type="submit" class="submit-button" disabled={props.busy}>
                    { if props.busy { "Processing..." } else { "Calculate Irrigation" } }
                </button>
            </form>
        </div>
    }
}

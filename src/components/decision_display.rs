use std::rc::Rc;
use yew::prelude::*;

use crate::models::decision::DecisionResponse;
use crate::utils::format::{format_reading, format_timestamp};

#[derive(Properties, PartialEq)]
pub struct DecisionDisplayProps {
    /// Latest decision, if any has been computed this session
    #[prop_or_default]
    pub data: Option<Rc<DecisionResponse>>,
}

/// Read-only cards for the latest decision. Every value shown here comes
/// from the server response; nothing is derived client-side.
#[function_component(DecisionDisplay)]
pub fn decision_display(props: &DecisionDisplayProps) -> Html {
    let Some(data) = &props.data else {
        return html! {
            <div class="panel decision-display empty">
                <p>{"Submit irrigation parameters to see results"}</p>
            </div>
        };
    };

    let plan = &data.decision;
    let badge_class = format!("status-badge {}", plan.status.css_class());

    html! {
        <div class="panel decision-display">
            <h2>{"Irrigation Decision"}</h2>

            <div class="card-grid">
                <div class="card sensor-card">
                    <h3>{"Sensor Data"}</h3>
                    <div class="card-row">
                        <span>{"Soil Moisture:"}</span>
                        <span class="card-value">{format!("{}%", format_reading(data.sensor_data.soil_moisture))}</span>
                    </div>
                    <div class="card-row">
                        <span>{"Temperature:"}</span>
                        <span class="card-value">{format!("{}\u{b0}C", format_reading(data.sensor_data.temperature))}</span>
                    </div>
                    <div class="card-row">
                        <span>{"Humidity:"}</span>
                        <span class="card-value">{format!("{}%", format_reading(data.sensor_data.humidity))}</span>
                    </div>
                </div>

                <div class="card weather-card">
                    <h3>{"Weather Data"}</h3>
                    <div class="card-row">
                        <span>{"Temperature:"}</span>
                        <span class="card-value">{format!("{}\u{b0}C", format_reading(data.weather_data.temperature))}</span>
                    </div>
                    <div class="card-row">
                        <span>{"Humidity:"}</span>
                        <span class="card-value">{format!("{}%", format_reading(data.weather_data.humidity))}</span>
                    </div>
                    <div class="card-row">
                        <span>{"Rain Probability:"}</span>
                        <span class="card-value">{format!("{}%", format_reading(data.weather_data.rain_probability))}</span>
                    </div>
                </div>

                <div class="card plan-card">
                    <h3>{"Irrigation Plan"}</h3>
                    <div class="card-row">
                        <span>{"Water Amount:"}</span>
                        <span class="card-value">{format!("{} L/h", plan.water_amount)}</span>
                    </div>
                    <div class="card-row">
                        <span>{"Duration:"}</span>
                        <span class="card-value">{format!("{} hours", plan.duration)}</span>
                    </div>
                    <div class="card-row">
                        <span>{"Status:"}</span>
                        <span class={badge_class}>{plan.status.label()}</span>
                    </div>
                </div>
            </div>

            <div class="decision-summary">
                <h3>{"Decision Summary"}</h3>
                <p>{plan.summary()}</p>
                <p class="generated-at">{format!("Generated on {}", format_timestamp(&data.timestamp))}</p>
            </div>
        </div>
    }
}

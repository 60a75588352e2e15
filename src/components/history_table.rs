use std::rc::Rc;
use yew::prelude::*;

use crate::models::history::History;
use crate::utils::format::format_timestamp;

#[derive(Properties, PartialEq)]
pub struct HistoryTableProps {
    pub history: Rc<History>,
}

/// Tabular projection of the decision log, rendered in server order
/// (newest first). The chart re-sorts; this view does not.
#[function_component(HistoryTable)]
pub fn history_table(props: &HistoryTableProps) -> Html {
    if props.history.is_empty() {
        return html! {
            <p class="table-placeholder">{"No irrigation records yet"}</p>
        };
    }

    html! {
        <div class="table-wrapper">
            <table class="history-table">
                <thead>
                    <tr>
                        <th>{"Date"}</th>
                        <th>{"Crop"}</th>
                        <th>{"Soil"}</th>
                        <th>{"Water Amount (L/h)"}</th>
                        <th>{"Duration (h)"}</th>
                        <th>{"Status"}</th>
                    </tr>
                </thead>
                <tbody>
                    {
                        props.history.entries().iter().map(|entry| {
                            let badge_class = format!("status-badge {}", entry.decision.status.css_class());
                            html! {
                                <tr>
                                    <td>{format_timestamp(&entry.timestamp)}</td>
                                    <td>{&entry.crop_type}</td>
                                    <td>{&entry.soil_type}</td>
                                    <td>{entry.decision.water_amount}</td>
                                    <td>{entry.decision.duration}</td>
                                    <td><span class={badge_class}>{entry.decision.status.label()}</span></td>
                                </tr>
                            }
                        }).collect::<Html>()
                    }
                </tbody>
            </table>
        </div>
    }
}

use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Legend, Title},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, ItemStyle, LineStyle, LineStyleType,
        SplitLine, TextStyle, Tooltip, Trigger,
    },
    renderer::WasmRenderer,
    series::Line,
};
use gloo::events::EventListener;
use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::models::error::AppError;
use crate::models::history::{History, HistorySeries};

const CHART_ID: &str = "history-chart";

const WATER_COLOR: &str = "#35a2eb";
const MOISTURE_COLOR: &str = "#4bc0c0";
const RAIN_COLOR: &str = "#ff6384";

#[derive(Properties, PartialEq)]
pub struct HistoryChartProps {
    pub history: Rc<History>,
}

#[function_component(HistoryChart)]
pub fn history_chart(props: &HistoryChartProps) -> Html {
    let container_ref = use_node_ref();
    let series_data = use_memo(props.history.clone(), |history| history.series_data());

    {
        let container_ref = container_ref.clone();

        use_effect_with(
            (series_data, container_ref),
            |(series_data, container_ref)| {
                let listener = container_ref.cast::<HtmlElement>().map(|container| {
                    render_chart(&container, series_data);

                    let series_data = series_data.clone();
                    EventListener::new(&web_sys::window().unwrap(), "resize", move |_| {
                        render_chart(&container, &series_data);
                    })
                });

                move || drop(listener)
            },
        );
    }

    // A chart is only derived from a non-empty log
    if props.history.is_empty() {
        return html! {
            <div class="chart-placeholder">
                <p>{"No data available for chart visualization"}</p>
            </div>
        };
    }

    html! {
        <div class="chart-container" ref={container_ref}>
            <div id={CHART_ID} />
        </div>
    }
}

fn render_chart(container: &HtmlElement, series_data: &Result<HistorySeries, AppError>) {
    let width = container.client_width().cast_unsigned();
    let height = container.client_height().cast_unsigned();

    if width == 0 || height == 0 {
        return;
    }

    match series_data {
        Ok(series) => {
            let chart = build_chart(series);
            if let Err(e) = WasmRenderer::new(width, height).render(CHART_ID, &chart) {
                web_sys::console::error_1(&format!("Render error: {e:?}").into());
            }
        }
        Err(e) => web_sys::console::error_1(&format!("Series data error: {e}").into()),
    }
}

fn build_chart(series: &HistorySeries) -> CharmingChart {
    CharmingChart::new()
        .title(
            Title::new()
                .text("Irrigation History")
                .left("center")
                .text_style(TextStyle::new().font_size(16).color("#1f2937")),
        )
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Line)),
        )
        .legend(Legend::new().bottom("2%"))
        .grid(
            Grid::new()
                .left("8%")
                .right("4%")
                .bottom("22%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(series.labels.clone())
                .axis_label(AxisLabel::new().rotate(45).color("#6b7280")),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().color("#6b7280"))
                .split_line(
                    SplitLine::new().line_style(
                        LineStyle::new()
                            .color("#e5e7eb")
                            .type_(LineStyleType::Dashed),
                    ),
                ),
        )
        .series(
            Line::new()
                .name("Water Amount (L/h)")
                .data(series.water_amount.clone())
                .item_style(ItemStyle::new().color(WATER_COLOR))
                .line_style(LineStyle::new().color(WATER_COLOR)),
        )
        .series(
            Line::new()
                .name("Soil Moisture (%)")
                .data(series.soil_moisture.clone())
                .item_style(ItemStyle::new().color(MOISTURE_COLOR))
                .line_style(LineStyle::new().color(MOISTURE_COLOR)),
        )
        .series(
            Line::new()
                .name("Rain Probability (%)")
                .data(series.rain_probability.clone())
                .item_style(ItemStyle::new().color(RAIN_COLOR))
                .line_style(LineStyle::new().color(RAIN_COLOR)),
        )
}

use analytics::{ChartData, ChartKind, HistoryAnalytics, Theme};
use common::{CategoryCount, RadarPoint, SoilSeriesPoint};
use plotly::common::{Line, Mode};
use plotly::Scatter;
use serde_json::{json, Value};
use std::rc::Rc;
use std::str::FromStr;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlSelectElement};
use yew::prelude::*;

use crate::common::error::EmptyState;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);
}

/// Plotly traces and layout for one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSpec {
    pub data: Value,
    pub layout: Value,
}

pub fn plot_spec(chart: &ChartData, theme: Theme) -> PlotSpec {
    let data = match chart {
        ChartData::CropDistribution(counts) => pie_traces(counts, theme),
        ChartData::SoilSeries(points) => soil_traces(points, theme),
        ChartData::FertilizerDistribution(counts) => bar_traces(counts, theme),
        ChartData::Radar(points) => radar_traces(points, theme),
    };

    let mut layout = base_layout(theme);
    if let ChartData::Radar(points) = chart {
        let ceiling = points.iter().map(|p| p.full_mark).fold(0.0, f64::max);
        layout["polar"] = json!({
            "bgcolor": "rgba(0,0,0,0)",
            "radialaxis": {"visible": true, "range": [0.0, ceiling]}
        });
    }

    PlotSpec { data, layout }
}

fn base_layout(theme: Theme) -> Value {
    let (font, grid) = match theme {
        Theme::Light => ("#333333", "#eeeeee"),
        Theme::Dark => ("#e0e0e0", "#444444"),
    };
    json!({
        "margin": {"t": 20, "r": 20, "l": 50, "b": 50},
        "paper_bgcolor": "rgba(0,0,0,0)",
        "plot_bgcolor": "rgba(0,0,0,0)",
        "font": {"color": font},
        "xaxis": {"showgrid": false},
        "yaxis": {"showgrid": true, "gridcolor": grid},
        "showlegend": true,
        "legend": {"orientation": "h", "y": -0.2}
    })
}

fn category_colors(counts: &[CategoryCount], theme: Theme) -> Vec<&'static str> {
    (0..counts.len()).map(|i| theme.color(i)).collect()
}

fn pie_traces(counts: &[CategoryCount], theme: Theme) -> Value {
    let labels: Vec<&str> = counts.iter().map(|c| c.name.as_str()).collect();
    let values: Vec<usize> = counts.iter().map(|c| c.value).collect();
    json!([{
        "type": "pie",
        "labels": labels,
        "values": values,
        "textinfo": "label+percent",
        "marker": {"colors": category_colors(counts, theme)}
    }])
}

fn bar_traces(counts: &[CategoryCount], theme: Theme) -> Value {
    let names: Vec<&str> = counts.iter().map(|c| c.name.as_str()).collect();
    let values: Vec<usize> = counts.iter().map(|c| c.value).collect();
    json!([{
        "type": "bar",
        "x": names,
        "y": values,
        "name": "Recommendations",
        "marker": {"color": category_colors(counts, theme)}
    }])
}

fn soil_traces(points: &[SoilSeriesPoint], theme: Theme) -> Value {
    let dates: Vec<String> = points.iter().map(|p| p.name.clone()).collect();
    let series: [(&str, fn(&SoilSeriesPoint) -> f64); 4] = [
        ("Nitrogen", |p| p.nitrogen),
        ("Phosphorus", |p| p.phosphorus),
        ("Potassium", |p| p.potassium),
        ("pH (x10)", |p| p.ph),
    ];

    let traces: Vec<Value> = series
        .iter()
        .enumerate()
        .map(|(index, (name, pick))| {
            let values: Vec<f64> = points.iter().map(pick).collect();
            let trace = Scatter::new(dates.clone(), values)
                .mode(Mode::LinesMarkers)
                .name(*name)
                .line(Line::new().color(theme.color(index)).width(2.0));
            serde_json::to_value(&trace).unwrap_or(Value::Null)
        })
        .collect();
    Value::Array(traces)
}

fn radar_traces(points: &[RadarPoint], theme: Theme) -> Value {
    // Repeat the first axis so the polygon closes.
    let mut r: Vec<f64> = points.iter().map(|p| p.value).collect();
    let mut theta: Vec<&str> = points.iter().map(|p| p.subject.as_str()).collect();
    if let (Some(&first_r), Some(&first_theta)) = (r.first(), theta.first()) {
        r.push(first_r);
        theta.push(first_theta);
    }
    json!([{
        "type": "scatterpolar",
        "r": r,
        "theta": theta,
        "fill": "toself",
        "name": "Soil Parameters",
        "line": {"color": theme.color(0)},
        "fillcolor": theme.color(0),
        "opacity": 0.6
    }])
}

/// Plain JS object from a JSON value, as Plotly expects.
fn to_js(value: &Value) -> Result<JsValue, JsValue> {
    js_sys::JSON::parse(&value.to_string())
}

#[derive(Properties, PartialEq)]
pub struct ChartSelectorProps {
    pub selected: ChartKind,
    pub on_select: Callback<ChartKind>,
}

#[function_component(ChartSelector)]
pub fn chart_selector(props: &ChartSelectorProps) -> Html {
    let onchange = {
        let on_select = props.on_select.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match ChartKind::from_str(&select.value()) {
                Ok(kind) => on_select.emit(kind),
                Err(err) => log::warn!("{}", err),
            }
        })
    };

    html! {
        <div class="form-control w-full max-w-xs">
            <label class="label" for="chartType">
                <span class="label-text">{"Select Chart Type:"}</span>
            </label>
            <select id="chartType" class="select select-bordered select-sm" {onchange}>
                { for ChartKind::ALL.iter().map(|kind| html! {
                    <option value={kind.as_str()} selected={*kind == props.selected}>{kind.label()}</option>
                }) }
            </select>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct HistoryChartProps {
    pub history: Rc<HistoryAnalytics>,
    pub chart: ChartKind,
    pub theme: Theme,
}

#[function_component(HistoryChart)]
pub fn history_chart(props: &HistoryChartProps) -> Html {
    let chart_ref = use_node_ref();
    let projection = props.history.project(props.chart);
    let div_id = format!("history-chart-{}", props.chart.as_str());

    use_effect_with(
        (chart_ref.clone(), projection.clone(), props.theme),
        move |(chart_ref, projection, theme)| {
            if let (Some(element), Some(projection)) = (chart_ref.cast::<Element>(), projection) {
                let spec = plot_spec(projection, *theme);
                let config = json!({"responsive": true, "displayModeBar": false});

                let div_id = element.id();
                match (to_js(&spec.data), to_js(&spec.layout), to_js(&config)) {
                    (Ok(data), Ok(layout), Ok(config)) => newPlot(&div_id, data, layout, config),
                    _ => log::error!("Failed to convert chart {} for Plotly", div_id),
                }
            }
            || ()
        },
    );

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h3 class="card-title text-lg">{props.chart.title()}</h3>
                if projection.is_some() {
                    <div ref={chart_ref} id={div_id} class="chart-container" style="width:100%; height:400px;"></div>
                } else {
                    <EmptyState message="Nothing to chart yet." icon="fas fa-chart-pie" />
                }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(items: &[(&str, usize)]) -> Vec<CategoryCount> {
        items
            .iter()
            .map(|(name, value)| CategoryCount {
                name: name.to_string(),
                value: *value,
            })
            .collect()
    }

    #[test]
    fn test_pie_colors_cycle_through_palette() {
        let names: Vec<String> = (0..8).map(|i| format!("Crop{}", i)).collect();
        let items: Vec<(&str, usize)> = names.iter().map(|n| (n.as_str(), 1)).collect();
        let spec = plot_spec(&ChartData::CropDistribution(counts(&items)), Theme::Light);

        let colors = spec.data[0]["marker"]["colors"].as_array().unwrap();
        assert_eq!(colors.len(), 8);
        assert_eq!(colors[0], "#3498db");
        assert_eq!(colors[6], "#3498db");
        assert_eq!(colors[7], "#2ecc71");
        assert_eq!(spec.data[0]["type"], "pie");
    }

    #[test]
    fn test_bar_uses_theme_palette() {
        let spec = plot_spec(
            &ChartData::FertilizerDistribution(counts(&[("Urea", 3), ("DAP", 1)])),
            Theme::Dark,
        );
        assert_eq!(spec.data[0]["x"], json!(["Urea", "DAP"]));
        assert_eq!(spec.data[0]["y"], json!([3, 1]));
        assert_eq!(spec.data[0]["marker"]["color"], json!(["#59a5f5", "#6deca9"]));
        assert_eq!(spec.layout["font"]["color"], "#e0e0e0");
    }

    #[test]
    fn test_soil_series_has_four_lines() {
        let points = vec![SoilSeriesPoint {
            name: "6/1/2024".to_string(),
            nitrogen: 90.0,
            phosphorus: 42.0,
            potassium: 43.0,
            ph: 65.0,
        }];
        let spec = plot_spec(&ChartData::SoilSeries(points), Theme::Light);

        let traces = spec.data.as_array().unwrap();
        let names: Vec<&str> = traces.iter().map(|t| t["name"].as_str().unwrap()).collect();
        assert_eq!(names, vec!["Nitrogen", "Phosphorus", "Potassium", "pH (x10)"]);
        assert_eq!(traces[3]["y"], json!([65.0]));
        assert_eq!(traces[1]["line"]["color"], "#2ecc71");
    }

    #[test]
    fn test_radar_polygon_is_closed() {
        let points = vec![
            RadarPoint {
                subject: "Nitrogen".to_string(),
                value: 90.0,
                full_mark: 150.0,
            },
            RadarPoint {
                subject: "Rainfall".to_string(),
                value: 202.9,
                full_mark: 300.0,
            },
        ];
        let spec = plot_spec(&ChartData::Radar(points), Theme::Light);

        assert_eq!(spec.data[0]["r"], json!([90.0, 202.9, 90.0]));
        assert_eq!(spec.data[0]["theta"], json!(["Nitrogen", "Rainfall", "Nitrogen"]));
        assert_eq!(spec.layout["polar"]["radialaxis"]["range"], json!([0.0, 300.0]));
    }
}

use serde::Serialize;

use crate::model::Settings;
use crate::pipeline::stage5_report::{ChartView, ReportModel};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ChartDocument<'a> {
    title: &'a str,
    view: ChartView,
    labels: &'a [Vec<String>],
    percent_axis_max: f64,
    datasets: [ChartDataset<'a>; 2],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ChartDataset<'a> {
    label: &'static str,
    data: &'a [f64],
    raw_data: &'a [String],
    background_color: Vec<&'static str>,
}

const TARGET_COLOR: &str = "rgba(30,64,175,0.9)";

pub fn render_report_json(model: &ReportModel) -> serde_json::Result<String> {
    serde_json::to_string_pretty(model)
}

/// Chart-ready document for one view: bar data, annotations and colors.
pub fn render_chart_json(
    model: &ReportModel,
    view: ChartView,
    settings: &Settings,
) -> serde_json::Result<String> {
    let series = model.chart.series(view);
    let doc = ChartDocument {
        title: &model.title,
        view,
        labels: &model.chart.wrapped_labels,
        percent_axis_max: series.percent_axis_max(settings),
        datasets: [
            ChartDataset {
                label: "Target",
                data: &series.target,
                raw_data: &series.target_raw,
                background_color: vec![TARGET_COLOR; series.target.len()],
            },
            ChartDataset {
                label: "Accomplishment",
                data: &series.accomp,
                raw_data: &series.accomp_raw,
                background_color: series.accomp_colors(),
            },
        ],
    };
    serde_json::to_string_pretty(&doc)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/json.rs"]
mod tests;

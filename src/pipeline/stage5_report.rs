use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use tracing::debug;

use crate::error::ParseError;
use crate::model::category::is_reserved_indicator;
use crate::model::{Category, Quarter, Record, Settings, Status};
use crate::pipeline::stage3_matrix::{DroppedRecord, IndicatorCell, build_matrix};
use crate::pipeline::stage4_metrics::{IndicatorMetrics, Measure, derive_indicator, roll_up_remarks};
use crate::report::{LABEL_WORDS_PER_LINE, round_to, wrap_label};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartView {
    Overall,
    Quarter(Quarter),
}

impl Serialize for ChartView {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl fmt::Display for ChartView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartView::Overall => f.write_str("overall"),
            ChartView::Quarter(q) => write!(f, "{q}"),
        }
    }
}

impl FromStr for ChartView {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("overall") {
            return Ok(ChartView::Overall);
        }
        s.parse::<Quarter>()
            .map(ChartView::Quarter)
            .map_err(|_| ParseError::UnknownView(s.to_string()))
    }
}

/// Parallel arrays for one chart view; index `i` belongs to label `i`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    pub view: ChartView,
    pub target: Vec<f64>,
    pub accomp: Vec<f64>,
    pub target_raw: Vec<String>,
    pub accomp_raw: Vec<String>,
    pub accomp_status: Vec<Status>,
}

impl ChartSeries {
    fn new(view: ChartView, capacity: usize) -> Self {
        Self {
            view,
            target: Vec::with_capacity(capacity),
            accomp: Vec::with_capacity(capacity),
            target_raw: Vec::with_capacity(capacity),
            accomp_raw: Vec::with_capacity(capacity),
            accomp_status: Vec::with_capacity(capacity),
        }
    }

    // Undefined percentages plot as zero-height bars.
    fn push(&mut self, target: &Measure, accomp: &Measure, status: Status, decimals: u32) {
        let precision = decimals.saturating_add(1);
        self.target.push(round_to(target.ratio.percent().unwrap_or(0.0), precision));
        self.accomp.push(round_to(accomp.ratio.percent().unwrap_or(0.0), precision));
        self.target_raw.push(target.ratio.raw_label());
        self.accomp_raw.push(accomp.ratio.raw_label());
        self.accomp_status.push(status);
    }

    pub fn accomp_colors(&self) -> Vec<&'static str> {
        self.accomp_status.iter().map(|s| s.color()).collect()
    }

    /// Percent-axis ceiling: 20% headroom rounded up to a multiple of ten.
    pub fn percent_axis_max(&self, settings: &Settings) -> f64 {
        let max = self
            .target
            .iter()
            .chain(self.accomp.iter())
            .copied()
            .fold(0.0, f64::max);
        if max > 0.0 {
            (max * 1.2 / 10.0).ceil() * 10.0
        } else {
            settings.chart_max_y
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub labels: Vec<String>,
    pub wrapped_labels: Vec<Vec<String>>,
    pub overall: ChartSeries,
    pub quarterly: Vec<ChartSeries>,
}

impl ChartData {
    pub fn series(&self, view: ChartView) -> &ChartSeries {
        match view {
            ChartView::Overall => &self.overall,
            ChartView::Quarter(q) => &self.quarterly[q.index()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportModel {
    pub category: Category,
    pub title: String,
    pub settings: Settings,
    pub record_count: usize,
    pub dropped: Vec<DroppedRecord>,
    pub rows: Vec<IndicatorMetrics>,
    pub chart: ChartData,
}

impl ReportModel {
    pub fn status_line(&self) -> String {
        let key = self.category.dataset_key().to_ascii_uppercase();
        if self.record_count == 0 {
            format!("No data — dataset: {key}")
        } else {
            format!("{} row(s) — dataset: {key}", self.record_count)
        }
    }
}

pub fn assemble(category: Category, records: &[Record], settings: &Settings) -> ReportModel {
    let settings = &settings.clone().clamped();
    let built = build_matrix(records, category);
    let mut remarks = roll_up_remarks(records, category);

    let indicators: Vec<String> = if category.def().preseed {
        category
            .canonical_indicators()
            .iter()
            .map(|s| s.to_string())
            .collect()
    } else {
        built
            .matrix
            .indicators()
            .filter(|name| !is_reserved_indicator(name))
            .map(str::to_string)
            .collect()
    };

    let empty = IndicatorCell::default();
    let rows: Vec<IndicatorMetrics> = indicators
        .iter()
        .map(|name| {
            let cell = built.matrix.get(name).unwrap_or(&empty);
            let notes = remarks.remove(name).unwrap_or_default();
            derive_indicator(name, cell, category, settings, notes)
        })
        .collect();

    let chart = build_chart(&rows, settings.decimals);
    debug!(
        "{}: assembled {} row(s) from {} record(s)",
        category,
        rows.len(),
        records.len()
    );

    ReportModel {
        category,
        title: category.title().to_string(),
        settings: settings.clone(),
        record_count: records.len(),
        dropped: built.dropped,
        rows,
        chart,
    }
}

fn build_chart(rows: &[IndicatorMetrics], decimals: u32) -> ChartData {
    let n = rows.len();
    let mut overall = ChartSeries::new(ChartView::Overall, n);
    let mut quarterly: Vec<ChartSeries> = Quarter::ALL
        .iter()
        .map(|&q| ChartSeries::new(ChartView::Quarter(q), n))
        .collect();

    for row in rows {
        overall.push(&row.total_target, &row.total_accomp, row.status, decimals);
        for (series, q) in quarterly.iter_mut().zip(row.quarters.iter()) {
            series.push(&q.target, &q.accomp, q.status, decimals);
        }
    }

    ChartData {
        labels: rows.iter().map(|r| r.indicator.clone()).collect(),
        wrapped_labels: rows
            .iter()
            .map(|r| wrap_label(&r.indicator, LABEL_WORDS_PER_LINE))
            .collect(),
        overall,
        quarterly,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_report.rs"]
mod tests;

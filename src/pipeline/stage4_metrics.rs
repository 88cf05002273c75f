use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::settings::MAX_DECIMALS;
use crate::model::{Category, Quarter, Record, Settings, Status};
use crate::pipeline::stage1_normalize::resolve;
use crate::pipeline::stage2_denominator::{DenominatorMode, aggregate};
use crate::pipeline::stage3_matrix::IndicatorCell;
use crate::report::{PLACEHOLDER, format_denominator, format_number, format_percent, round_to};

/// A numerator with its recorded denominator and the denominator used for display.
///
/// For no-denominator indicators a zero denominator with a positive numerator
/// is displayed as the numerator itself, so the ratio reads 100%.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ratio {
    pub numerator: f64,
    pub denominator: f64,
    pub effective_denominator: f64,
}

impl Ratio {
    pub fn new(numerator: f64, denominator: f64, no_denominator: bool) -> Self {
        let effective_denominator = if denominator == 0.0 && no_denominator && numerator > 0.0 {
            numerator
        } else {
            denominator
        };
        Self {
            numerator,
            denominator,
            effective_denominator,
        }
    }

    pub fn percent(&self) -> Option<f64> {
        if self.effective_denominator > 0.0 {
            Some(self.numerator / self.effective_denominator * 100.0)
        } else {
            None
        }
    }

    pub fn is_blank(&self) -> bool {
        self.numerator == 0.0 && self.effective_denominator == 0.0
    }

    /// "num/den" annotation; "-" when nothing was recorded.
    pub fn raw_label(&self) -> String {
        if self.is_blank() {
            return PLACEHOLDER.to_string();
        }
        format!(
            "{}/{}",
            format_number(self.numerator),
            format_denominator(self.effective_denominator)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Measure {
    pub ratio: Ratio,
    pub percent: Option<f64>,
    pub display: String,
    pub percent_display: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuarterMetrics {
    pub quarter: Quarter,
    pub target: Measure,
    pub accomp: Measure,
    pub status: Status,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorMetrics {
    pub indicator: String,
    pub no_denominator: bool,
    pub quarters: Vec<QuarterMetrics>,
    pub total_target: Measure,
    pub total_accomp: Measure,
    pub status: Status,
    /// Raw count comparison of the totals, independent of percentages.
    pub count_status: Status,
    pub remarks: Vec<String>,
}

impl IndicatorMetrics {
    pub fn quarter(&self, quarter: Quarter) -> &QuarterMetrics {
        &self.quarters[quarter.index()]
    }

    pub fn remarks_text(&self) -> String {
        if self.remarks.is_empty() {
            PLACEHOLDER.to_string()
        } else {
            self.remarks.join("; ")
        }
    }
}

pub fn judge(target_percent: f64, accomp_percent: f64, tolerance: f64) -> Status {
    if accomp_percent + tolerance >= target_percent {
        Status::OnTrack
    } else {
        Status::Behind
    }
}

pub fn classify(target: &Ratio, accomp: &Ratio, tolerance: f64) -> Status {
    if target.is_blank() {
        return Status::NotApplicable;
    }
    match (target.percent(), accomp.percent()) {
        (Some(t), Some(a)) => judge(t, a, tolerance),
        (Some(_), None) => Status::Behind,
        (None, _) => Status::NotApplicable,
    }
}

fn count_status(target: &Ratio, accomp: &Ratio) -> Status {
    if accomp.is_blank() {
        Status::NotApplicable
    } else if accomp.numerator < target.numerator {
        Status::Behind
    } else {
        Status::OnTrack
    }
}

fn quarter_measure(ratio: Ratio, no_denominator: bool, decimals: u32) -> Measure {
    let raw = ratio.percent();
    let percent_display = format_percent(raw, decimals);
    let display = if no_denominator {
        if ratio.numerator == 0.0 {
            PLACEHOLDER.to_string()
        } else {
            format_number(ratio.numerator)
        }
    } else if ratio.denominator == 0.0 && ratio.numerator == 0.0 {
        PLACEHOLDER.to_string()
    } else {
        format!(
            "{}/{} ({})",
            format_number(ratio.numerator),
            format_denominator(ratio.denominator),
            percent_display
        )
    };
    Measure {
        ratio,
        percent: raw.map(|p| round_to(p, decimals)),
        display,
        percent_display,
    }
}

fn total_measure(ratio: Ratio, decimals: u32) -> Measure {
    let raw = ratio.percent();
    Measure {
        ratio,
        percent: raw.map(|p| round_to(p, decimals)),
        display: ratio.raw_label(),
        percent_display: format_percent(raw, decimals),
    }
}

pub fn derive_indicator(
    indicator: &str,
    cell: &IndicatorCell,
    category: Category,
    settings: &Settings,
    remarks: Vec<String>,
) -> IndicatorMetrics {
    let no_denom = category.is_no_denominator(indicator);
    let decimals = settings.decimals.min(MAX_DECIMALS);

    let quarters = Quarter::ALL
        .iter()
        .map(|&quarter| {
            let q = quarter.index();
            let target = Ratio::new(cell.target[q], cell.target_denom[q], no_denom);
            let accomp = Ratio::new(cell.accomp[q], cell.accomp_denom[q], no_denom);
            QuarterMetrics {
                quarter,
                target: quarter_measure(target, no_denom, decimals),
                accomp: quarter_measure(accomp, no_denom, decimals),
                status: classify(&target, &accomp, settings.tolerance),
            }
        })
        .collect();

    let total_target = Ratio::new(
        cell.target.iter().sum(),
        aggregate(&cell.target_denom, DenominatorMode::Auto),
        no_denom,
    );
    let total_accomp = Ratio::new(
        cell.accomp.iter().sum(),
        aggregate(&cell.accomp_denom, DenominatorMode::Auto),
        no_denom,
    );

    IndicatorMetrics {
        indicator: indicator.to_string(),
        no_denominator: no_denom,
        quarters,
        total_target: total_measure(total_target, decimals),
        total_accomp: total_measure(total_accomp, decimals),
        status: classify(&total_target, &total_accomp, settings.tolerance),
        count_status: count_status(&total_target, &total_accomp),
        remarks,
    }
}

/// Distinct non-empty remarks per canonical indicator, in first-seen order.
pub fn roll_up_remarks(records: &[Record], category: Category) -> BTreeMap<String, Vec<String>> {
    let mut out: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for record in records {
        let Some(name) = resolve(category, &record.indicator).accepted().map(str::to_string)
        else {
            continue;
        };
        let remark = record.remarks.trim();
        if remark.is_empty() {
            continue;
        }
        let list = out.entry(name).or_default();
        if !list.iter().any(|r| r == remark) {
            list.push(remark.to_string());
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_metrics.rs"]
mod tests;

use std::fmt::Write;

use crate::model::{Category, Quarter, Record};
use crate::pipeline::stage1_normalize::resolve;
use crate::pipeline::stage4_metrics::{IndicatorMetrics, Measure, QuarterMetrics};
use crate::pipeline::stage5_report::ReportModel;
use crate::report::{format_denominator, format_number};

const LABEL_WIDTH: usize = 16;
const CELL_WIDTH: usize = 18;

pub fn render_report_text(model: &ReportModel) -> String {
    let mut out = String::new();

    out.push_str(&model.title);
    out.push('\n');
    out.push_str(&"=".repeat(model.title.chars().count()));
    out.push_str("\n\n");
    out.push_str(&model.status_line());
    out.push('\n');
    let _ = writeln!(
        out,
        "Tolerance: {} pp, decimals: {}",
        model.settings.tolerance, model.settings.decimals
    );
    if !model.dropped.is_empty() {
        let _ = writeln!(out, "Excluded records: {}", model.dropped.len());
    }
    out.push('\n');

    if model.rows.is_empty() {
        out.push_str("No indicators to report.\n");
        return out;
    }

    let mut header = pad("", LABEL_WIDTH);
    for q in Quarter::ALL {
        header.push_str(&pad(q.as_str(), CELL_WIDTH));
    }
    header.push_str(&pad("Total", CELL_WIDTH));
    header.push_str(&pad("%", 10));
    header.push_str("Status");

    for row in &model.rows {
        render_row(&mut out, row, &header);
    }
    out
}

fn render_row(out: &mut String, row: &IndicatorMetrics, header: &str) {
    out.push_str(&row.indicator);
    out.push('\n');
    out.push_str(header.trim_end());
    out.push('\n');

    out.push_str(&line(
        "Target",
        &row.quarters,
        |q| &q.target,
        &row.total_target,
        "",
    ));
    let status = format!("{} (count: {})", row.status.tag(), row.count_status.tag());
    let tags = row
        .quarters
        .iter()
        .map(|q| format!("{}={}", q.quarter, q.status.tag()))
        .collect::<Vec<_>>()
        .join(" ");
    out.push_str(&line(
        "Accomplishment",
        &row.quarters,
        |q| &q.accomp,
        &row.total_accomp,
        &status,
    ));
    let _ = writeln!(out, "{}{}", pad("Quarters", LABEL_WIDTH), tags);
    let _ = writeln!(out, "{}{}", pad("Remarks", LABEL_WIDTH), row.remarks_text());
    out.push('\n');
}

fn line(
    label: &str,
    quarters: &[QuarterMetrics],
    pick: impl Fn(&QuarterMetrics) -> &Measure,
    total: &Measure,
    status: &str,
) -> String {
    let mut out = pad(label, LABEL_WIDTH);
    for q in quarters {
        out.push_str(&pad(&pick(q).display, CELL_WIDTH));
    }
    out.push_str(&pad(&total.display, CELL_WIDTH));
    out.push_str(&pad(&total.percent_display, 10));
    out.push_str(status);
    let mut out = out.trim_end().to_string();
    out.push('\n');
    out
}

/// One line per reportable record, in storage order, under its normalized name.
/// Records the matrix would exclude are left out.
pub fn render_record_list(category: Category, records: &[Record]) -> String {
    let mut out = String::new();
    for r in records {
        let Some(indicator) = resolve(category, &r.indicator).accepted().map(str::to_string)
        else {
            continue;
        };
        let _ = writeln!(
            out,
            "{:<8}{:<4}{}  target {}/{}  accomp {}/{}  {}",
            r.id,
            r.quarter.as_str(),
            indicator,
            format_number(r.target),
            format_denominator(r.target_denom),
            format_number(r.accomp),
            format_denominator(r.accomp_denom),
            r.remarks,
        );
    }
    if out.is_empty() {
        return "No records.\n".to_string();
    }
    out.lines().map(|l| format!("{}\n", l.trim_end())).collect()
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len + 1 >= width {
        format!("{text} ")
    } else {
        format!("{text}{}", " ".repeat(width - len))
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;

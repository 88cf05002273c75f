use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{AppResult, StoreError};
use crate::model::{Category, Settings};
use crate::pipeline::stage5_report::{ChartView, ReportModel, assemble};
use crate::report::json::{render_chart_json, render_report_json};
use crate::report::text::render_report_text;
use crate::store::RecordStore;

pub const REPORT_TEXT_FILE: &str = "report.txt";
pub const REPORT_JSON_FILE: &str = "report.json";
pub const CHART_JSON_FILE: &str = "chart.json";

/// Writes the text report, the JSON model and the overall chart into `out_dir`.
pub fn write_reports(model: &ReportModel, out_dir: &Path, settings: &Settings) -> AppResult<()> {
    fs::create_dir_all(out_dir)?;

    let report = render_report_text(model);
    write_text(&out_dir.join(REPORT_TEXT_FILE), &report)?;

    let json = render_report_json(model)?;
    write_text(&out_dir.join(REPORT_JSON_FILE), &json)?;

    let chart = render_chart_json(model, ChartView::Overall, settings)?;
    write_text(&out_dir.join(CHART_JSON_FILE), &chart)?;

    info!("{}: reports written to {}", model.category, out_dir.display());
    Ok(())
}

/// Loads and reports every category into `<out_dir>/<category>/`.
pub fn export_all(
    store: &RecordStore,
    categories: &[Category],
    out_dir: &Path,
    settings: &Settings,
) -> AppResult<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(categories.len());
    for &category in categories {
        let records = store.load(category)?;
        let model = assemble(category, &records, settings);
        let dir = out_dir.join(category.to_string());
        write_reports(&model, &dir, settings)?;
        written.push(dir);
    }
    Ok(written)
}

fn write_text(path: &Path, contents: &str) -> AppResult<()> {
    let file = File::create(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut w = BufWriter::new(file);
    w.write_all(contents.as_bytes())?;
    if !contents.ends_with('\n') {
        w.write_all(b"\n")?;
    }
    w.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage6_export.rs"]
mod tests;

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::SettingsError;
use crate::model::Settings;

/// Flag values that override the settings file when present.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SettingsOverrides {
    pub tolerance: Option<f64>,
    pub decimals: Option<u32>,
    pub chart_max_y: Option<f64>,
}

impl SettingsOverrides {
    pub fn apply(&self, mut settings: Settings) -> Settings {
        if let Some(tolerance) = self.tolerance {
            settings.tolerance = tolerance;
        }
        if let Some(decimals) = self.decimals {
            settings.decimals = decimals;
        }
        if let Some(chart_max_y) = self.chart_max_y {
            settings.chart_max_y = chart_max_y;
        }
        settings
    }
}

pub fn read_settings_file(path: &Path) -> Result<Settings, SettingsError> {
    let text = fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| SettingsError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Defaults, then the optional file, then flags; the result is clamped.
pub fn resolve_settings(
    file: Option<&Path>,
    overrides: &SettingsOverrides,
) -> Result<Settings, SettingsError> {
    let base = match file {
        Some(path) => read_settings_file(path)?,
        None => Settings::default(),
    };
    let settings = overrides.apply(base).clamped();
    debug!(
        "settings: tolerance={} decimals={} chartMaxY={}",
        settings.tolerance, settings.decimals, settings.chart_max_y
    );
    Ok(settings)
}

#[cfg(test)]
#[path = "../tests/src_inline/config/tests.rs"]
mod tests;

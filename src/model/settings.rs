use serde::{Deserialize, Serialize};

pub const MAX_DECIMALS: u32 = 6;

/// Display and judging parameters shared by every category report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Percentage points of slack when comparing accomplishment to target.
    pub tolerance: f64,
    pub decimals: u32,
    pub chart_max_y: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tolerance: 0.5,
            decimals: 1,
            chart_max_y: 120.0,
        }
    }
}

impl Settings {
    pub fn clamped(mut self) -> Self {
        self.decimals = self.decimals.min(MAX_DECIMALS);
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            self.tolerance = 0.0;
        }
        if !self.chart_max_y.is_finite() || self.chart_max_y <= 0.0 {
            self.chart_max_y = Settings::default().chart_max_y;
        }
        self
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DenominatorMode {
    /// Constant when every non-zero quarter repeats the same value, sum otherwise.
    #[default]
    Auto,
    Sum,
    Constant,
    Max,
    Average,
}

pub fn aggregate(denoms: &[f64; 4], mode: DenominatorMode) -> f64 {
    let values: Vec<f64> = denoms.iter().copied().filter(|v| *v > 0.0).collect();
    let Some(&first) = values.first() else {
        return 0.0;
    };
    let sum: f64 = values.iter().sum();
    let constant = values.iter().all(|v| *v == first);

    match mode {
        DenominatorMode::Auto if constant => first,
        DenominatorMode::Auto | DenominatorMode::Sum => sum,
        DenominatorMode::Constant => first,
        DenominatorMode::Max => values.iter().copied().fold(first, f64::max),
        DenominatorMode::Average => (sum / values.len() as f64).round(),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_denominator.rs"]
mod tests;

pub mod json;
pub mod text;

use crate::model::settings::MAX_DECIMALS;

pub const PLACEHOLDER: &str = "-";
pub const LABEL_WORDS_PER_LINE: usize = 4;

/// Rounds half away from zero; precision is capped at `MAX_DECIMALS + 1`.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals.min(MAX_DECIMALS + 1) as i32);
    (value * factor).round() / factor
}

/// Whole numbers print without a fractional part ("40"), others as-is ("2.5").
pub fn format_number(value: f64) -> String {
    format!("{}", value)
}

/// Formats the value as rounded by `round_to`, so text and number agree on ties.
pub fn format_percent(value: Option<f64>, decimals: u32) -> String {
    let decimals = decimals.min(MAX_DECIMALS);
    match value {
        Some(v) => format!("{:.*}%", decimals as usize, round_to(v, decimals)),
        None => PLACEHOLDER.to_string(),
    }
}

pub fn format_denominator(value: f64) -> String {
    if value == 0.0 {
        PLACEHOLDER.to_string()
    } else {
        format_number(value)
    }
}

pub fn wrap_label(text: &str, words_per_line: usize) -> Vec<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() || words_per_line == 0 {
        return vec![String::new()];
    }
    words
        .chunks(words_per_line)
        .map(|chunk| chunk.join(" "))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;

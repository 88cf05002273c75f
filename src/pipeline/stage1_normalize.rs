use std::sync::LazyLock;

use regex::Regex;

use crate::model::Category;
use crate::model::category::{
    COMPLETED_RESEARCH, RESEARCH_PUBLISHED, RESEARCH_UTILIZATION, is_reserved_indicator,
};

/// Ordered research aliases; the first matching pattern wins.
pub const RESEARCH_RULES: &[(&str, &str)] = &[
    (r"(?i)utiliz", RESEARCH_UTILIZATION),
    (r"(?i)^oc1\b", RESEARCH_UTILIZATION),
    (r"(?i)complet", COMPLETED_RESEARCH),
    (r"(?i)^op1\b", COMPLETED_RESEARCH),
    (r"(?i)publish", RESEARCH_PUBLISHED),
    (r"(?i)^op2\b", RESEARCH_PUBLISHED),
];

const EXTENSION_CODE_PREFIX: &str = r"(?i)^(?:OC|OP)\d+\s*[-:]?\s*";

static RESEARCH_MATCHERS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    RESEARCH_RULES
        .iter()
        .map(|(pattern, canonical)| {
            let re = Regex::new(pattern).expect("research alias pattern must compile");
            (re, *canonical)
        })
        .collect()
});

static EXTENSION_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(EXTENSION_CODE_PREFIX).expect("extension prefix pattern must compile")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Accepted(String),
    Unrecognized(String),
    Reserved(String),
}

impl Resolution {
    pub fn accepted(&self) -> Option<&str> {
        match self {
            Resolution::Accepted(name) => Some(name),
            _ => None,
        }
    }
}

pub fn normalize(category: Category, raw: &str) -> String {
    match category {
        Category::Primary => raw.to_string(),
        Category::Research => normalize_research(raw),
        Category::Extension => strip_code_prefix(raw),
    }
}

/// Normalizes `raw` and applies the category's membership rules.
pub fn resolve(category: Category, raw: &str) -> Resolution {
    let name = normalize(category, raw);
    match category {
        Category::Primary => Resolution::Accepted(name),
        Category::Research => {
            if category.canonical_indicators().contains(&name.as_str()) {
                Resolution::Accepted(name)
            } else {
                Resolution::Unrecognized(name)
            }
        }
        Category::Extension => {
            if is_reserved_indicator(&name) {
                Resolution::Reserved(name)
            } else {
                Resolution::Accepted(name)
            }
        }
    }
}

fn normalize_research(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    for (re, canonical) in RESEARCH_MATCHERS.iter() {
        if re.is_match(trimmed) {
            return (*canonical).to_string();
        }
    }
    trimmed.to_string()
}

fn strip_code_prefix(raw: &str) -> String {
    EXTENSION_PREFIX.replace(raw.trim(), "").trim().to_string()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_normalize.rs"]
mod tests;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[serde(alias = "ched")]
    Primary,
    Research,
    Extension,
}

#[derive(Debug, Clone, Copy)]
pub struct CategoryDef {
    pub id: &'static str,
    pub dataset_key: &'static str,
    pub storage_key: &'static str,
    pub title: &'static str,
    pub canonical: &'static [&'static str],
    pub no_denominator: &'static [&'static str],
    pub preseed: bool,
}

pub const RESEARCH_UTILIZATION: &str = "Research Utilization";
pub const COMPLETED_RESEARCH: &str = "Completed Research";
pub const RESEARCH_PUBLISHED: &str = "Research Published";

const PRIMARY_INDICATORS: &[&str] = &["Licensure", "Employability", "CHED-RDC", "Accreditation"];
const RESEARCH_INDICATORS: &[&str] =
    &[RESEARCH_UTILIZATION, COMPLETED_RESEARCH, RESEARCH_PUBLISHED];

// Research Published keeps its denominator.
const RESEARCH_NO_DENOM: &[&str] = &[RESEARCH_UTILIZATION, COMPLETED_RESEARCH];
const EXTENSION_NO_DENOM: &[&str] = &[
    "Number of active partnerships as a result of extension activities",
    "Number of trainees weighted by the length of experience",
    "Number of extension programs with the SUC's mandated and priority programs",
];

const PRIMARY: CategoryDef = CategoryDef {
    id: "primary",
    dataset_key: "ched",
    storage_key: "chedData",
    title: "CHED Performance",
    canonical: PRIMARY_INDICATORS,
    no_denominator: &[],
    preseed: true,
};

const RESEARCH: CategoryDef = CategoryDef {
    id: "research",
    dataset_key: "research",
    storage_key: "researchData",
    title: "Research Program",
    canonical: RESEARCH_INDICATORS,
    no_denominator: RESEARCH_NO_DENOM,
    preseed: true,
};

const EXTENSION: CategoryDef = CategoryDef {
    id: "extension",
    dataset_key: "extension",
    storage_key: "extensionData",
    title: "Extension Services",
    canonical: &[],
    no_denominator: EXTENSION_NO_DENOM,
    preseed: false,
};

impl Category {
    pub const ALL: [Category; 3] = [Category::Primary, Category::Research, Category::Extension];

    pub fn def(self) -> &'static CategoryDef {
        match self {
            Category::Primary => &PRIMARY,
            Category::Research => &RESEARCH,
            Category::Extension => &EXTENSION,
        }
    }

    pub fn canonical_indicators(self) -> &'static [&'static str] {
        self.def().canonical
    }

    pub fn is_no_denominator(self, indicator: &str) -> bool {
        self.def().no_denominator.contains(&indicator)
    }

    pub fn title(self) -> &'static str {
        self.def().title
    }

    pub fn dataset_key(self) -> &'static str {
        self.def().dataset_key
    }
}

/// Names owned by the primary category; other categories may not reuse them.
pub fn is_reserved_indicator(indicator: &str) -> bool {
    PRIMARY_INDICATORS.contains(&indicator)
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.def().id)
    }
}

impl FromStr for Category {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "primary" | "ched" => Ok(Category::Primary),
            "research" => Ok(Category::Research),
            "extension" => Ok(Category::Extension),
            _ => Err(ParseError::UnknownCategory(s.to_string())),
        }
    }
}

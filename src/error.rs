use std::path::PathBuf;

use thiserror::Error;

use crate::model::RecordId;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("unknown category: {0} (use primary|research|extension)")]
    UnknownCategory(String),
    #[error("unknown chart view: {0} (use overall|Q1|Q2|Q3|Q4)")]
    UnknownView(String),
}

#[derive(Debug, Error, PartialEq)]
pub enum EntryError {
    #[error("indicator required")]
    MissingIndicator,
    #[error("invalid quarter: {0} (use Q1|Q2|Q3|Q4)")]
    InvalidQuarter(String),
    #[error("research indicator not recognized: {indicator} (use one of: {allowed})")]
    UnknownResearchIndicator { indicator: String, allowed: String },
    #[error("indicator {0} is reserved for CHED performance and cannot be used here")]
    ReservedIndicator(String),
    #[error("{field} must be a non-negative number, got {value}")]
    InvalidValue { field: &'static str, value: f64 },
    #[error("no record with id {0}")]
    UnknownRecord(RecordId),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed record list in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot read settings {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed settings {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Entry(#[from] EntryError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;

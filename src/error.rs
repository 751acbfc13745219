//! Errors raised while loading assumption tables and profile files
//!
//! The projection engine itself never fails; only the data boundary does.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("could not parse {field} value {value:?} as a number")]
    InvalidNumber { field: String, value: String },

    #[error("unknown {field}: {value:?}")]
    UnknownValue { field: &'static str, value: String },

    #[error("missing required key {0:?}")]
    MissingKey(&'static str),

    #[error("invalid table: {0}")]
    InvalidTable(String),
}

impl DataError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        DataError::Io {
            path: path.display().to_string(),
            source,
        }
    }

    pub(crate) fn number(field: impl Into<String>, value: &str) -> Self {
        DataError::InvalidNumber {
            field: field.into(),
            value: value.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DataError>;

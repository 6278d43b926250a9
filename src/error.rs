//! Error types for the crop advisor library
//!
//! The recommendation engine has exactly one failure mode (`InvalidInput`).
//! Catalog loading errors belong to the loader and never surface from
//! filtering or scoring.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum AdvisorError {
    /// Required numeric inputs (temperature, humidity) missing or non-numeric
    #[error("{0}")]
    InvalidInput(String),

    #[error("failed to read catalog {path}: {source}")]
    CatalogLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog: {0}")]
    CatalogParse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AdvisorError>;

//! Crop Advisor
//!
//! Farm-advisory core: a static crop catalog, a rule-based crop suitability
//! engine, simple climate classification and a disease lookup, with an optional Axum API
//! (`--features api`) exposing them as JSON endpoints.
//!
//! - `catalog`: Crop records loaded from `crops_database.json`
//! - `suitability`: Filtering, scoring and ranking of candidate crops
//! - `climate`: Climate zone + farming season helpers
//! - `disease`: Disease catalog, rule-based disease lookup and advice tables
//! - `config`: Environment-driven server configuration

pub mod error;
pub mod catalog;
pub mod suitability;
pub mod climate;
pub mod disease;
pub mod config;

#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use error::{AdvisorError, Result};
pub use catalog::{CropCatalog, CropRecord};
pub use suitability::{
    filter_candidates, recommend, recommend_raw, score, ObservedConditions, RankedCrop,
    RawConditions, Recommendation, DEFAULT_TOP_N,
};
pub use disease::{DiseaseCatalog, DiseaseRecord, DiseaseReport};
pub use config::ServerConfig;

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};

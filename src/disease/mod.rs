//! Disease lookup
//!
//! - `catalog.rs` - DiseaseCatalog loaded from `diseases_database.json`
//! - `detect.rs` - Crop to likely disease rules + report assembly
//! - `advice.rs` - Generic disease details, fertilizer and irrigation advice

pub mod catalog;
pub mod detect;
pub mod advice;

pub use catalog::{DiseaseCatalog, DiseaseRecord, Treatment};
pub use detect::{common_diseases, detect, DiseaseReport};
pub use advice::{default_disease_info, DiseaseInfo};

//! Crop Suitability Engine
//!
//! Given observed climate conditions and optional filters, returns a ranked,
//! capped list of matching crops from the catalog, each annotated with a
//! 0-100 suitability score.
//!
//! ## Architecture
//! - `conditions.rs` - ObservedConditions + validation of untyped requests
//! - `filter.rs` - Hard range/season/soil criteria
//! - `scoring.rs` - Fixed linear suitability formula
//! - `ranking.rs` - Stable ranking, truncation and the response envelope

pub mod conditions;
pub mod filter;
pub mod scoring;
pub mod ranking;

// Re-export public API
pub use conditions::{ConditionsEcho, ObservedConditions, RawConditions};
pub use filter::{filter_candidates, is_candidate};
pub use scoring::{score, score_breakdown, ScoreBreakdown};
pub use ranking::{recommend, recommend_raw, rank_candidates, RankedCrop, Recommendation, DEFAULT_TOP_N};

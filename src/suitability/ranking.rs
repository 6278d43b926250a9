//! Recommendation: filter, score, rank, truncate
//!
//! Pure function over a read-only catalog. Ranking is a stable descending
//! sort on the score, so equal scores keep catalog order. An empty result is
//! a successful outcome carrying an explanatory message.

use serde::Serialize;

use crate::catalog::CropRecord;
use crate::error::Result;
use super::conditions::{ConditionsEcho, ObservedConditions, RawConditions};
use super::filter::filter_candidates;
use super::scoring::score;

pub const DEFAULT_TOP_N: usize = 5;

pub const MSG_FOUND: &str = "Crop recommendations generated successfully";
pub const MSG_NONE_FOUND: &str = "No suitable crops found for current conditions";

/// Catalog record annotated with its suitability score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedCrop {
    #[serde(flatten)]
    pub crop: CropRecord,
    pub suitability_score: u8,
}

/// Outcome of a recommendation request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub location: Option<String>,
    pub conditions: ConditionsEcho,
    /// Candidate count before truncation
    pub total_suitable_crops: usize,
    pub recommendations: Vec<RankedCrop>,
    pub message: String,
}

impl Recommendation {
    pub fn is_empty(&self) -> bool {
        self.recommendations.is_empty()
    }
}

/// Score every candidate and sort descending (stable)
pub fn rank_candidates(candidates: &[&CropRecord], conditions: &ObservedConditions) -> Vec<RankedCrop> {
    let mut ranked: Vec<RankedCrop> = candidates
        .iter()
        .map(|crop| RankedCrop {
            crop: (*crop).clone(),
            suitability_score: score(crop, conditions),
        })
        .collect();

    ranked.sort_by(|a, b| b.suitability_score.cmp(&a.suitability_score));
    ranked
}

/// Top `top_n` crops for validated conditions
pub fn recommend(catalog: &[CropRecord], conditions: &ObservedConditions, top_n: usize) -> Recommendation {
    let candidates = filter_candidates(catalog, conditions);
    let total_suitable_crops = candidates.len();

    tracing::debug!(
        "{} of {} crops admit conditions (t={}, h={}, rain={:?})",
        total_suitable_crops,
        catalog.len(),
        conditions.temperature,
        conditions.humidity,
        conditions.rainfall
    );

    let mut recommendations = rank_candidates(&candidates, conditions);
    recommendations.truncate(top_n);

    let message = if total_suitable_crops == 0 { MSG_NONE_FOUND } else { MSG_FOUND };

    Recommendation {
        location: conditions.area.clone(),
        conditions: conditions.echo(),
        total_suitable_crops,
        recommendations,
        message: message.to_string(),
    }
}

/// Validate an untyped request, then recommend
pub fn recommend_raw(catalog: &[CropRecord], raw: RawConditions, top_n: usize) -> Result<Recommendation> {
    let conditions = ObservedConditions::from_raw(raw)?;
    Ok(recommend(catalog, &conditions, top_n))
}

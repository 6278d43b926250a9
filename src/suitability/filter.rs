//! Candidate filtering
//!
//! A crop survives when every hard criterion holds:
//! temperature and humidity inside their closed ranges, plus rainfall,
//! season and soil when those filters are set. Unset filters never exclude.

use crate::catalog::CropRecord;
use super::conditions::ObservedConditions;

/// Check a single crop against all hard criteria
pub fn is_candidate(crop: &CropRecord, conditions: &ObservedConditions) -> bool {
    let req = &crop.climate_requirements;

    let temp_match = req.temperature.contains(conditions.temperature);
    let humidity_match = req.humidity.contains(conditions.humidity);

    let rainfall_match = conditions
        .rainfall
        .map_or(true, |rain| req.rainfall.contains(rain));

    let season_match = conditions
        .season
        .as_deref()
        .map_or(true, |season| crop.matches_season(season));

    let soil_match = conditions
        .soil_type
        .as_deref()
        .map_or(true, |soil| crop.accepts_soil(soil));

    temp_match && humidity_match && rainfall_match && season_match && soil_match
}

/// All catalog entries admitting the observed conditions, in catalog order
pub fn filter_candidates<'a>(
    catalog: &'a [CropRecord],
    conditions: &ObservedConditions,
) -> Vec<&'a CropRecord> {
    catalog
        .iter()
        .filter(|crop| is_candidate(crop, conditions))
        .collect()
}

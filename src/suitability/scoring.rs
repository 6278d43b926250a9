//! Suitability Scoring
//!
//! Fixed linear formula, three additive components:
//! - Temperature (max 40): closeness to the crop's optimum
//! - Humidity (max 30): closeness to the midpoint of the humidity range
//! - Rainfall (max 30): closeness to the midpoint of the rainfall range,
//!   or a flat 15 when rainfall was not observed
//!
//! Each component is floored at 0. The rounded sum is clamped to 0-100.

use serde::Serialize;

use crate::catalog::CropRecord;
use super::conditions::ObservedConditions;

pub const TEMPERATURE_MAX_POINTS: f64 = 40.0;
pub const HUMIDITY_MAX_POINTS: f64 = 30.0;
pub const RAINFALL_MAX_POINTS: f64 = 30.0;

/// Rainfall component when no rainfall was observed
pub const RAINFALL_DEFAULT_POINTS: f64 = 15.0;

/// Points lost per °C away from the optimum
const TEMPERATURE_PENALTY_PER_DEGREE: f64 = 2.0;
/// Humidity difference (%) is divided by this before subtracting
const HUMIDITY_DIVISOR: f64 = 2.0;
/// Rainfall difference (mm) is divided by this before subtracting
const RAINFALL_DIVISOR: f64 = 100.0;

/// Per-component points before rounding
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub temperature: f64,
    pub humidity: f64,
    pub rainfall: f64,
    /// Rounded and clamped sum
    pub total: u8,
}

pub fn temperature_points(crop: &CropRecord, temperature: f64) -> f64 {
    let optimal = crop.climate_requirements.temperature.optimal;
    let diff = (temperature - optimal).abs();
    (TEMPERATURE_MAX_POINTS - diff * TEMPERATURE_PENALTY_PER_DEGREE).max(0.0)
}

pub fn humidity_points(crop: &CropRecord, humidity: f64) -> f64 {
    let avg = crop.climate_requirements.humidity.midpoint();
    let diff = (humidity - avg).abs();
    (HUMIDITY_MAX_POINTS - diff / HUMIDITY_DIVISOR).max(0.0)
}

pub fn rainfall_points(crop: &CropRecord, rainfall: Option<f64>) -> f64 {
    match rainfall {
        Some(rain) => {
            let avg = crop.climate_requirements.rainfall.midpoint();
            let diff = (rain - avg).abs();
            (RAINFALL_MAX_POINTS - diff / RAINFALL_DIVISOR).max(0.0)
        }
        None => RAINFALL_DEFAULT_POINTS,
    }
}

/// Score with the individual components kept for display
pub fn score_breakdown(crop: &CropRecord, conditions: &ObservedConditions) -> ScoreBreakdown {
    let temperature = temperature_points(crop, conditions.temperature);
    let humidity = humidity_points(crop, conditions.humidity);
    let rainfall = rainfall_points(crop, conditions.rainfall);

    let total = (temperature + humidity + rainfall).round().clamp(0.0, 100.0) as u8;

    ScoreBreakdown {
        temperature,
        humidity,
        rainfall,
        total,
    }
}

/// Suitability score in 0-100
pub fn score(crop: &CropRecord, conditions: &ObservedConditions) -> u8 {
    score_breakdown(crop, conditions).total
}

//! Observed conditions and the input validation gate
//!
//! Request bodies arrive untyped (`RawConditions`). `ObservedConditions::from_raw`
//! is the only place a recommendation can fail: temperature and humidity must
//! be present and numeric. Everything optional collapses to `None` when blank,
//! so an absent filter is never confused with zero or an empty-string match.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AdvisorError, Result};

pub const MISSING_REQUIRED_MESSAGE: &str = "Temperature and humidity are required";

/// Untyped request shape, as posted by the client
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConditions {
    #[serde(default)]
    pub temperature: Option<Value>,
    #[serde(default)]
    pub humidity: Option<Value>,
    #[serde(default)]
    pub rainfall: Option<Value>,
    #[serde(default)]
    pub season: Option<Value>,
    #[serde(default)]
    pub soil_type: Option<Value>,
    #[serde(default)]
    pub area: Option<Value>,
}

/// Validated per-request conditions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObservedConditions {
    /// °C
    pub temperature: f64,
    /// %
    pub humidity: f64,
    /// mm; `None` disables the rainfall filter and uses the neutral score
    pub rainfall: Option<f64>,
    pub season: Option<String>,
    pub soil_type: Option<String>,
    /// Echoed back only
    pub area: Option<String>,
}

impl ObservedConditions {
    /// Conditions with only the required fields set
    pub fn new(temperature: f64, humidity: f64) -> Self {
        Self {
            temperature,
            humidity,
            rainfall: None,
            season: None,
            soil_type: None,
            area: None,
        }
    }

    pub fn with_rainfall(mut self, rainfall: f64) -> Self {
        self.rainfall = Some(rainfall);
        self
    }

    pub fn with_season(mut self, season: &str) -> Self {
        self.season = non_blank(season);
        self
    }

    pub fn with_soil_type(mut self, soil_type: &str) -> Self {
        self.soil_type = non_blank(soil_type);
        self
    }

    pub fn with_area(mut self, area: &str) -> Self {
        self.area = non_blank(area);
        self
    }

    /// Validate an untyped request
    ///
    /// Numbers may be JSON numbers or numeric strings. Required fields that
    /// are missing, null, blank, non-numeric or non-finite yield `InvalidInput`.
    pub fn from_raw(raw: RawConditions) -> Result<Self> {
        let temperature = raw.temperature.as_ref().and_then(parse_number);
        let humidity = raw.humidity.as_ref().and_then(parse_number);

        let (temperature, humidity) = match (temperature, humidity) {
            (Some(t), Some(h)) => (t, h),
            _ => return Err(AdvisorError::InvalidInput(MISSING_REQUIRED_MESSAGE.to_string())),
        };

        Ok(Self {
            temperature,
            humidity,
            rainfall: raw.rainfall.as_ref().and_then(parse_number),
            season: raw.season.as_ref().and_then(parse_text),
            soil_type: raw.soil_type.as_ref().and_then(parse_text),
            area: raw.area.as_ref().and_then(parse_text),
        })
    }

    /// Display echo with units appended
    pub fn echo(&self) -> ConditionsEcho {
        ConditionsEcho {
            temperature: format!("{}°C", self.temperature),
            humidity: format!("{}%", self.humidity),
            rainfall: self
                .rainfall
                .map(|r| format!("{} mm", r))
                .unwrap_or_else(|| "N/A".to_string()),
            season: self.season.clone().unwrap_or_else(|| "All seasons".to_string()),
            soil_type: self.soil_type.clone().unwrap_or_else(|| "Any soil".to_string()),
        }
    }
}

/// Conditions as shown back to the user
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConditionsEcho {
    pub temperature: String,
    pub humidity: String,
    pub rainfall: String,
    pub season: String,
    pub soil_type: String,
}

fn parse_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

fn parse_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => non_blank(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn non_blank(s: &str) -> Option<String> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

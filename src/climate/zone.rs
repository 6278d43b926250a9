//! Climate Zone Classification
//!
//! Coarse four-zone grouping from a single temperature/humidity reading.
//! Rules are evaluated in order; the first match wins.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ClimateZoneKind {
    /// temp >= 25°C and humidity >= 60%
    Tropical,

    /// temp >= 20°C and humidity < 40%
    Arid,

    /// 10°C <= temp < 25°C
    Temperate,

    /// temp < 10°C
    Cold,

    /// Hot with mid-range humidity (temp >= 25°C, 40% <= humidity < 60%)
    Unclassified,
}

impl ClimateZoneKind {
    pub fn classify(temperature: f64, humidity: f64) -> Self {
        if temperature >= 25.0 && humidity >= 60.0 {
            ClimateZoneKind::Tropical
        } else if temperature >= 20.0 && humidity < 40.0 {
            ClimateZoneKind::Arid
        } else if (10.0..25.0).contains(&temperature) {
            ClimateZoneKind::Temperate
        } else if temperature < 10.0 {
            ClimateZoneKind::Cold
        } else {
            ClimateZoneKind::Unclassified
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ClimateZoneKind::Tropical => "Tropical",
            ClimateZoneKind::Arid => "Arid",
            ClimateZoneKind::Temperate => "Temperate",
            ClimateZoneKind::Cold => "Cold",
            ClimateZoneKind::Unclassified => "",
        }
    }

    pub fn characteristics(&self) -> &'static [&'static str] {
        match self {
            ClimateZoneKind::Tropical => &[
                "High temperature year-round",
                "Abundant rainfall",
                "High humidity",
                "Suitable for rice, sugarcane, tropical fruits",
            ],
            ClimateZoneKind::Arid => &[
                "Low rainfall",
                "High temperature variation",
                "Low humidity",
                "Suitable for drought-resistant crops: bajra, jowar",
            ],
            ClimateZoneKind::Temperate => &[
                "Moderate temperature",
                "Four distinct seasons",
                "Suitable for wheat, barley, vegetables",
            ],
            ClimateZoneKind::Cold => &[
                "Low temperature",
                "Short growing season",
                "Limited crop variety",
            ],
            ClimateZoneKind::Unclassified => &[],
        }
    }

    /// Arid counts as farmable (with irrigation)
    pub fn suitable_for_farming(&self) -> bool {
        matches!(
            self,
            ClimateZoneKind::Tropical | ClimateZoneKind::Arid | ClimateZoneKind::Temperate
        )
    }
}

/// Climate zone as reported to clients
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClimateZone {
    pub name: String,
    #[serde(rename = "type")]
    pub zone_type: String,
    pub characteristics: Vec<String>,
    pub suitable_for_farming: bool,
}

impl ClimateZone {
    fn new(kind: ClimateZoneKind, zone_type: &str) -> Self {
        Self {
            name: kind.display_name().to_string(),
            zone_type: zone_type.to_string(),
            characteristics: kind.characteristics().iter().map(|s| s.to_string()).collect(),
            suitable_for_farming: kind.suitable_for_farming(),
        }
    }
}

/// Every zone `classify_zone` can report, one entry per zone type
const ZONE_TYPES: &[(ClimateZoneKind, &str)] = &[
    (ClimateZoneKind::Tropical, "Tropical Wet"),
    (ClimateZoneKind::Tropical, "Tropical Dry"),
    (ClimateZoneKind::Arid, "Desert/Semi-arid"),
    (ClimateZoneKind::Temperate, "Moderate climate"),
    (ClimateZoneKind::Cold, "Alpine/Mountain"),
];

/// Classify a temperature (°C) / humidity (%) reading
pub fn classify_zone(temperature: f64, humidity: f64) -> ClimateZone {
    let kind = ClimateZoneKind::classify(temperature, humidity);

    let zone_type = match kind {
        ClimateZoneKind::Tropical if humidity >= 80.0 => "Tropical Wet",
        ClimateZoneKind::Tropical => "Tropical Dry",
        ClimateZoneKind::Arid => "Desert/Semi-arid",
        ClimateZoneKind::Temperate => "Moderate climate",
        ClimateZoneKind::Cold => "Alpine/Mountain",
        ClimateZoneKind::Unclassified => "",
    };

    ClimateZone::new(kind, zone_type)
}

/// Reference table of the named climate zones
pub fn zone_table() -> Vec<ClimateZone> {
    ZONE_TYPES
        .iter()
        .map(|&(kind, zone_type)| ClimateZone::new(kind, zone_type))
        .collect()
}

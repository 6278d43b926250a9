//! Indian farming seasons by calendar month

use chrono::Datelike;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FarmingSeason {
    /// March-June
    Zaid,
    /// July-October
    Kharif,
    /// November-February
    Rabi,
}

impl FarmingSeason {
    /// Month is 1-12; anything outside 3-10 falls into Rabi
    pub fn for_month(month: u32) -> Self {
        match month {
            3..=6 => FarmingSeason::Zaid,
            7..=10 => FarmingSeason::Kharif,
            _ => FarmingSeason::Rabi,
        }
    }

    /// Season for today's date in local time
    pub fn current() -> Self {
        Self::for_month(chrono::Local::now().month())
    }

    /// Weather season name
    pub fn name(&self) -> &'static str {
        match self {
            FarmingSeason::Zaid => "Summer",
            FarmingSeason::Kharif => "Monsoon",
            FarmingSeason::Rabi => "Winter",
        }
    }

    pub fn farming_season(&self) -> &'static str {
        match self {
            FarmingSeason::Zaid => "Zaid (March-June)",
            FarmingSeason::Kharif => "Kharif (June-October)",
            FarmingSeason::Rabi => "Rabi (October-March)",
        }
    }

    /// Typical crops sown in this season
    pub fn crops(&self) -> &'static [&'static str] {
        match self {
            FarmingSeason::Zaid => &["Watermelon", "Cucumber", "Muskmelon", "Pumpkin"],
            FarmingSeason::Kharif => &["Rice", "Maize", "Cotton", "Soybean", "Groundnut"],
            FarmingSeason::Rabi => &["Wheat", "Barley", "Mustard", "Chickpea", "Potato"],
        }
    }

    pub fn info(&self) -> SeasonInfo {
        SeasonInfo {
            name: self.name().to_string(),
            farming_season: self.farming_season().to_string(),
            crops: self.crops().iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonInfo {
    pub name: String,
    pub farming_season: String,
    pub crops: Vec<String>,
}

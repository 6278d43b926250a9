//! Climate helpers for the advisory service
//!
//! - `zone.rs` - Temperature/humidity climate zone classification
//! - `season.rs` - Month to Indian farming season (Zaid/Kharif/Rabi)

pub mod zone;
pub mod season;

pub use zone::{classify_zone, zone_table, ClimateZone, ClimateZoneKind};
pub use season::{FarmingSeason, SeasonInfo};

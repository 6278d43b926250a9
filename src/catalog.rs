//! Crop Catalog - In-memory read-only table of crop requirement records
//!
//! Loaded once at startup from `crops_database.json` (`{ "crops": [...] }`)
//! and shared by reference. Keeps file order, which is also the tie-break
//! order for ranking. Name lookups go through an FxHashMap index.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

use crate::error::{AdvisorError, Result};

/// Numeric range with an optimum (used for temperature)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptimalRange {
    pub min: f64,
    pub max: f64,
    pub optimal: f64,
}

/// Closed numeric interval `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    /// Inclusive on both ends
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

impl OptimalRange {
    /// The `[min, max]` interval without the optimum
    pub fn range(&self) -> Range {
        Range { min: self.min, max: self.max }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.range().contains(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClimateRequirements {
    /// Degrees Celsius
    pub temperature: OptimalRange,
    /// Relative humidity (%)
    pub humidity: Range,
    /// Millimetres
    pub rainfall: Range,
}

/// One entry in the crop catalog
///
/// Descriptive fields (description, key points, climate zone label, ...) are
/// not used for filtering or scoring; they are kept in `extra` and passed
/// through to responses unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropRecord {
    pub name: String,
    /// Free-text season label, e.g. "Kharif", "Rabi", "Kharif/Rabi"
    pub season: String,
    /// Accepted soil types
    #[serde(default)]
    pub soil: Vec<String>,
    pub climate_requirements: ClimateRequirements,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CropRecord {
    /// Case-insensitive substring match on the season label
    pub fn matches_season(&self, season: &str) -> bool {
        self.season.to_lowercase().contains(&season.to_lowercase())
    }

    /// Case-insensitive exact match against any accepted soil type
    pub fn accepts_soil(&self, soil_type: &str) -> bool {
        let wanted = soil_type.to_lowercase();
        self.soil.iter().any(|s| s.to_lowercase() == wanted)
    }
}

#[derive(Deserialize)]
struct CatalogFile {
    crops: Vec<CropRecord>,
}

/// Ordered crop catalog with case-insensitive name index
#[derive(Debug, Clone, Default)]
pub struct CropCatalog {
    crops: Vec<CropRecord>,
    by_name: FxHashMap<String, usize>,
}

impl CropCatalog {
    pub fn from_records(crops: Vec<CropRecord>) -> Self {
        let mut by_name = FxHashMap::default();
        for (idx, crop) in crops.iter().enumerate() {
            // First occurrence wins on duplicate names
            by_name.entry(crop.name.to_lowercase()).or_insert(idx);
        }
        Self { crops, by_name }
    }

    /// Parse a `{ "crops": [...] }` document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Ok(Self::from_records(file.crops))
    }

    /// Load the catalog from a JSON file on disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = read_catalog_file(path)?;

        let catalog = Self::from_json_str(&contents)?;
        tracing::info!("Loaded {} crops from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    pub fn records(&self) -> &[CropRecord] {
        &self.crops
    }

    pub fn len(&self) -> usize {
        self.crops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.crops.is_empty()
    }

    /// Case-insensitive exact name lookup
    pub fn find_by_name(&self, name: &str) -> Option<&CropRecord> {
        self.by_name
            .get(&name.trim().to_lowercase())
            .map(|&idx| &self.crops[idx])
    }
}

/// Read a catalog document, tagging IO failures with the path
pub(crate) fn read_catalog_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| AdvisorError::CatalogLoad {
        path: path.to_path_buf(),
        source,
    })
}

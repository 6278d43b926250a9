//! Disease Catalog - read-only table of known crop diseases
//!
//! Loaded from `diseases_database.json` (`{ "diseases": [...] }`).
//! Lookups by numeric id go through an FxHashMap index; lookups by
//! disease name + crop are a linear scan (the table is small).

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

use crate::catalog::read_catalog_file;
use crate::error::Result;

/// Organic and chemical treatment options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Treatment {
    #[serde(default)]
    pub organic: Vec<String>,
    #[serde(default)]
    pub chemical: Vec<String>,
}

/// One entry in the disease catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiseaseRecord {
    pub id: u32,
    pub name: String,
    /// Crop the disease affects, e.g. "Tomato"
    pub crop: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub immediate_action: Option<String>,
    #[serde(default)]
    pub treatment: Treatment,
    #[serde(default)]
    pub prevention: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Deserialize)]
struct CatalogFile {
    diseases: Vec<DiseaseRecord>,
}

#[derive(Debug, Clone, Default)]
pub struct DiseaseCatalog {
    diseases: Vec<DiseaseRecord>,
    by_id: FxHashMap<u32, usize>,
}

impl DiseaseCatalog {
    pub fn from_records(diseases: Vec<DiseaseRecord>) -> Self {
        let mut by_id = FxHashMap::default();
        for (idx, disease) in diseases.iter().enumerate() {
            by_id.entry(disease.id).or_insert(idx);
        }
        Self { diseases, by_id }
    }

    /// Parse a `{ "diseases": [...] }` document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Ok(Self::from_records(file.diseases))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = read_catalog_file(path)?;

        let catalog = Self::from_json_str(&contents)?;
        tracing::info!("Loaded {} diseases from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    pub fn records(&self) -> &[DiseaseRecord] {
        &self.diseases
    }

    pub fn len(&self) -> usize {
        self.diseases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diseases.is_empty()
    }

    pub fn find_by_id(&self, id: u32) -> Option<&DiseaseRecord> {
        self.by_id.get(&id).map(|&idx| &self.diseases[idx])
    }

    /// Case-insensitive match on both disease name and crop
    pub fn find_for_crop(&self, disease_name: &str, crop: &str) -> Option<&DiseaseRecord> {
        let name = disease_name.trim().to_lowercase();
        let crop = crop.trim().to_lowercase();
        self.diseases
            .iter()
            .find(|d| d.name.to_lowercase() == name && d.crop.to_lowercase() == crop)
    }
}

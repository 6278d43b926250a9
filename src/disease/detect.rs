//! Rule-based disease lookup
//!
//! Maps a crop to its common diseases and reports the first one the catalog
//! describes for that crop (or the first listed disease, with generic
//! details). Crops without a rule fall back to the tomato list.

use serde::Serialize;

use super::advice::{
    default_disease_info, fertilizer_advice, irrigation_advice, DiseaseInfo, FertilizerAdvice,
    IrrigationAdvice, DEFAULT_IMMEDIATE_ACTION,
};
use super::catalog::{DiseaseCatalog, Treatment};

const FALLBACK_CROP: &str = "tomato";

/// Common diseases per crop, most likely first
const COMMON_DISEASES: &[(&str, &[&str])] = &[
    ("tomato", &["Early Blight", "Late Blight", "Leaf Spot"]),
    ("potato", &["Late Blight", "Early Blight", "Bacterial Wilt"]),
    ("rice", &["Brown Spot", "Blast", "Bacterial Leaf Blight"]),
    ("wheat", &["Rust", "Powdery Mildew", "Leaf Blight"]),
    ("corn", &["Gray Leaf Spot", "Northern Leaf Blight", "Common Rust"]),
];

/// Diseases commonly seen on `crop`; unknown crops use the tomato list
pub fn common_diseases(crop: &str) -> &'static [&'static str] {
    let crop = crop.trim().to_lowercase();
    let lookup = |key: &str| {
        COMMON_DISEASES
            .iter()
            .find(|(c, _)| *c == key)
            .map(|(_, diseases)| *diseases)
    };
    lookup(&crop)
        .or_else(|| lookup(FALLBACK_CROP))
        .unwrap_or(&[])
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Detection {
    pub disease_name: String,
    /// Crop as given, or "Unknown"
    pub crop: String,
    pub possible_diseases: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreatmentPlan {
    pub immediate_action: String,
    pub treatment: Treatment,
    pub prevention: Vec<String>,
    pub fertilizer_advice: FertilizerAdvice,
    pub irrigation_advice: IrrigationAdvice,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiseaseReport {
    pub detection: Detection,
    pub disease_info: DiseaseInfo,
    pub recommendations: TreatmentPlan,
}

/// Look up the likely disease for a crop
///
/// Catalog details are matched against the crop as given, so a missing crop
/// name still gets a disease from the fallback list but only generic details.
pub fn detect(catalog: &DiseaseCatalog, crop_name: Option<&str>) -> DiseaseReport {
    let crop_name = crop_name.map(str::trim).filter(|c| !c.is_empty());
    let candidates = common_diseases(crop_name.unwrap_or(FALLBACK_CROP));

    let record = crop_name.and_then(|crop| {
        candidates
            .iter()
            .find_map(|disease| catalog.find_for_crop(disease, crop))
    });

    let disease_name = record
        .map(|r| r.name.clone())
        .or_else(|| candidates.first().map(|d| d.to_string()))
        .unwrap_or_default();

    tracing::debug!(
        "Disease lookup for {:?}: {} (catalog match: {})",
        crop_name,
        disease_name,
        record.is_some()
    );

    let recommendations = TreatmentPlan {
        immediate_action: record
            .and_then(|r| r.immediate_action.clone())
            .unwrap_or_else(|| DEFAULT_IMMEDIATE_ACTION.to_string()),
        treatment: record.map(|r| r.treatment.clone()).unwrap_or_default(),
        prevention: record.map(|r| r.prevention.clone()).unwrap_or_default(),
        fertilizer_advice: fertilizer_advice(),
        irrigation_advice: irrigation_advice(),
    };

    let disease_info = match record {
        Some(r) => DiseaseInfo::from(r),
        None => default_disease_info(&disease_name),
    };

    DiseaseReport {
        detection: Detection {
            disease_name,
            crop: crop_name.unwrap_or("Unknown").to_string(),
            possible_diseases: candidates.iter().map(|d| d.to_string()).collect(),
        },
        disease_info,
        recommendations,
    }
}

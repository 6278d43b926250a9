//! Fixed advice tables
//!
//! Generic disease information for diseases missing from the catalog, and
//! the standard fertilizer and irrigation guidance attached to every report.

use serde::Serialize;

use super::catalog::{DiseaseRecord, Treatment};

/// Disease details as shown to the user
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiseaseInfo {
    /// Set only when the details come from the catalog
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crop: Option<String>,
    pub name: String,
    pub description: String,
    pub symptoms: Vec<String>,
    pub immediate_action: String,
    pub treatment: Treatment,
    pub prevention: Vec<String>,
}

impl From<&DiseaseRecord> for DiseaseInfo {
    fn from(record: &DiseaseRecord) -> Self {
        Self {
            id: Some(record.id),
            crop: Some(record.crop.clone()),
            name: record.name.clone(),
            description: record.description.clone(),
            symptoms: record.symptoms.clone(),
            immediate_action: record
                .immediate_action
                .clone()
                .unwrap_or_else(|| DEFAULT_IMMEDIATE_ACTION.to_string()),
            treatment: record.treatment.clone(),
            prevention: record.prevention.clone(),
        }
    }
}

/// Shown when a catalog entry carries no immediate action
pub const DEFAULT_IMMEDIATE_ACTION: &str = "Remove infected parts";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Generic details for a disease the catalog does not describe
pub fn default_disease_info(disease_name: &str) -> DiseaseInfo {
    DiseaseInfo {
        id: None,
        crop: None,
        name: disease_name.to_string(),
        description: format!(
            "{} is a common plant disease that affects crop health and yield.",
            disease_name
        ),
        symptoms: strings(&[
            "Discoloration of leaves",
            "Wilting or drooping",
            "Spots or lesions on plant parts",
        ]),
        immediate_action: "Remove and destroy infected plant parts to prevent spread".to_string(),
        treatment: Treatment {
            organic: strings(&["Neem oil spray", "Garlic extract", "Baking soda solution"]),
            chemical: strings(&["Copper-based fungicide", "Systemic fungicide as per label"]),
        },
        prevention: strings(&[
            "Use disease-resistant varieties",
            "Maintain proper spacing for air circulation",
            "Avoid overhead watering",
            "Practice crop rotation",
        ]),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FertilizerAdvice {
    pub recommendation: String,
    pub dosage: String,
    pub timing: String,
    pub additional: Vec<String>,
    pub notes: String,
}

pub fn fertilizer_advice() -> FertilizerAdvice {
    FertilizerAdvice {
        recommendation: "Balanced NPK fertilizer".to_string(),
        dosage: "10-10-10 NPK @ 2kg per 100 sq.m".to_string(),
        timing: "Apply after disease treatment".to_string(),
        additional: strings(&[
            "Add compost for soil health",
            "Use micronutrient spray if deficiency observed",
            "Avoid over-fertilization which can worsen disease",
        ]),
        notes: "Healthy plants resist diseases better. Maintain soil fertility.".to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IrrigationAdvice {
    pub frequency: String,
    pub method: String,
    pub amount: String,
    pub timing: String,
    pub notes: Vec<String>,
}

pub fn irrigation_advice() -> IrrigationAdvice {
    IrrigationAdvice {
        frequency: "Once every 3-4 days depending on soil moisture".to_string(),
        method: "Drip irrigation recommended to avoid leaf wetness".to_string(),
        amount: "20-25mm per irrigation".to_string(),
        timing: "Early morning preferred".to_string(),
        notes: strings(&[
            "Avoid waterlogging which promotes disease",
            "Reduce watering during rainy season",
            "Ensure proper drainage",
        ]),
    }
}

//! Patient attribute types collected by the intake surface.
//!
//! Categorical fields are closed enumerations; the cancer type additionally
//! accepts unrecognized keys (they resolve to the default treatment set
//! downstream, never an error). Mutation symbols stay an open string set
//! since rules only test membership.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

// ---------------------------------------------------------------------------
// Cancer type
// ---------------------------------------------------------------------------

/// Cancer type keyed by the hyphenated form vocabulary (e.g. "breast-cancer").
/// Unknown keys are preserved verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CancerType {
    Breast,
    Lung,
    Colorectal,
    Prostate,
    Melanoma,
    Leukemia,
    Lymphoma,
    Ovarian,
    Other(String),
}

impl CancerType {
    /// Parse a hyphenated key. Exact match only; anything else is `Other`.
    pub fn from_key(key: &str) -> Self {
        match key {
            "breast-cancer"     => CancerType::Breast,
            "lung-cancer"       => CancerType::Lung,
            "colorectal-cancer" => CancerType::Colorectal,
            "prostate-cancer"   => CancerType::Prostate,
            "melanoma"          => CancerType::Melanoma,
            "leukemia"          => CancerType::Leukemia,
            "lymphoma"          => CancerType::Lymphoma,
            "ovarian-cancer"    => CancerType::Ovarian,
            other               => CancerType::Other(other.to_string()),
        }
    }

    /// The hyphenated wire key.
    pub fn as_key(&self) -> &str {
        match self {
            CancerType::Breast     => "breast-cancer",
            CancerType::Lung       => "lung-cancer",
            CancerType::Colorectal => "colorectal-cancer",
            CancerType::Prostate   => "prostate-cancer",
            CancerType::Melanoma   => "melanoma",
            CancerType::Leukemia   => "leukemia",
            CancerType::Lymphoma   => "lymphoma",
            CancerType::Ovarian    => "ovarian-cancer",
            CancerType::Other(key) => key,
        }
    }

    /// Human-readable name: the key title-cased per hyphen segment
    /// ("breast-cancer" → "Breast Cancer"). Empty keys render "Unknown".
    pub fn display_name(&self) -> String {
        let key = self.as_key();
        if key.is_empty() {
            return "Unknown".to_string();
        }
        key.split('-')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The recognized intake vocabulary, in form order.
    pub fn known() -> [CancerType; 8] {
        [
            CancerType::Breast,
            CancerType::Lung,
            CancerType::Colorectal,
            CancerType::Prostate,
            CancerType::Melanoma,
            CancerType::Leukemia,
            CancerType::Lymphoma,
            CancerType::Ovarian,
        ]
    }
}

impl From<String> for CancerType {
    fn from(key: String) -> Self {
        CancerType::from_key(&key)
    }
}

impl From<CancerType> for String {
    fn from(cancer: CancerType) -> Self {
        cancer.as_key().to_string()
    }
}

// ---------------------------------------------------------------------------
// Other categorical fields
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CancerStage {
    #[serde(rename = "stage-i")]
    StageI,
    #[serde(rename = "stage-ii")]
    StageII,
    #[serde(rename = "stage-iii")]
    StageIII,
    #[serde(rename = "stage-iv")]
    StageIV,
}

impl CancerStage {
    pub const ALL: [CancerStage; 4] = [
        CancerStage::StageI,
        CancerStage::StageII,
        CancerStage::StageIII,
        CancerStage::StageIV,
    ];

    pub fn display(&self) -> &'static str {
        match self {
            CancerStage::StageI   => "Stage I",
            CancerStage::StageII  => "Stage II",
            CancerStage::StageIII => "Stage III",
            CancerStage::StageIV  => "Stage IV",
        }
    }
}

/// Expression level reported per panel gene. Display-only; no rule reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpressionLevel {
    Low,
    Medium,
    High,
}

impl ExpressionLevel {
    pub const ALL: [ExpressionLevel; 3] =
        [ExpressionLevel::Low, ExpressionLevel::Medium, ExpressionLevel::High];
}

/// Response to previous treatment (RECIST-style categories).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TreatmentResponse {
    Complete,
    Partial,
    Stable,
    Progressive,
    Unknown,
}

impl TreatmentResponse {
    pub const ALL: [TreatmentResponse; 5] = [
        TreatmentResponse::Complete,
        TreatmentResponse::Partial,
        TreatmentResponse::Stable,
        TreatmentResponse::Progressive,
        TreatmentResponse::Unknown,
    ];
}

// ---------------------------------------------------------------------------
// Patient attributes
// ---------------------------------------------------------------------------

/// One patient's intake record, immutable for the duration of a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientAttributes {
    pub patient_id: String,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub gender: Option<Gender>,
    pub cancer_type: CancerType,
    #[serde(default)]
    pub cancer_stage: Option<CancerStage>,
    /// Mutation symbols, loosely drawn from the panel vocabulary. Free-form
    /// entries are accepted and simply match no rule.
    #[serde(default)]
    pub mutations: BTreeSet<String>,
    /// Free text, display-only.
    #[serde(default)]
    pub other_mutations: String,
    /// Gene symbol → reported expression level. Display-only.
    #[serde(default)]
    pub expression_levels: BTreeMap<String, ExpressionLevel>,
    /// Free text, e.g. "chemotherapy, radiation".
    #[serde(default)]
    pub previous_treatments: String,
    #[serde(default)]
    pub treatment_response: Option<TreatmentResponse>,
}

impl PatientAttributes {
    pub fn has_mutation(&self, symbol: &str) -> bool {
        self.mutations.contains(symbol)
    }
}

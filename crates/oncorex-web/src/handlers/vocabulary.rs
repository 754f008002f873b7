//! Vocabulary API — the fixed option lists an intake surface needs.

use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use oncorex_common::vocabulary::{EXPRESSION_PANEL, MUTATION_PANEL};
use oncorex_common::{CancerStage, CancerType, ExpressionLevel, TreatmentResponse};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CancerTypeEntry {
    pub key: String,
    pub display_name: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyResponse {
    pub cancer_types: Vec<CancerTypeEntry>,
    pub mutation_panel: Vec<&'static str>,
    pub expression_panel: Vec<&'static str>,
    pub expression_levels: Vec<ExpressionLevel>,
    pub cancer_stages: Vec<CancerStage>,
    pub treatment_responses: Vec<TreatmentResponse>,
}

/// GET /api/vocabulary
pub async fn vocabulary() -> impl IntoResponse {
    let cancer_types = CancerType::known()
        .iter()
        .map(|cancer| CancerTypeEntry {
            key: cancer.as_key().to_string(),
            display_name: cancer.display_name(),
        })
        .collect();

    Json(VocabularyResponse {
        cancer_types,
        mutation_panel: MUTATION_PANEL.to_vec(),
        expression_panel: EXPRESSION_PANEL.to_vec(),
        expression_levels: ExpressionLevel::ALL.to_vec(),
        cancer_stages: CancerStage::ALL.to_vec(),
        treatment_responses: TreatmentResponse::ALL.to_vec(),
    })
}

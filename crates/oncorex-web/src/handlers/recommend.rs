//! Recommendation API — runs the ranking engine over a submitted patient record.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use oncorex_common::{ApiError, PatientAttributes, TreatmentRecord};
use oncorex_ranker::{generate_insights, select_treatments};

use crate::state::SharedState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedTreatment {
    /// 1-based display position.
    pub rank: usize,
    #[serde(flatten)]
    pub record: TreatmentRecord,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResponse {
    pub patient_id: String,
    pub cancer_type: String,
    pub cancer_display_name: String,
    pub generated_at: DateTime<Utc>,
    pub treatments: Vec<RankedTreatment>,
    pub insights: Vec<String>,
}

/// POST /api/recommend — rank treatments and generate insights for a patient.
///
/// The required-field checks live here, on the intake boundary; the engine
/// itself accepts any well-formed record.
pub async fn recommend(
    State(state): State<SharedState>,
    Json(patient): Json<PatientAttributes>,
) -> Result<impl IntoResponse, ApiError> {
    if patient.patient_id.trim().is_empty() {
        return Err(ApiError::bad_request("patientId must not be empty"));
    }
    if patient.cancer_type.as_key().trim().is_empty() {
        return Err(ApiError::bad_request("cancerType must not be empty"));
    }

    let ranked = select_treatments(&patient);
    let insights = generate_insights(&patient, &ranked);

    let display_count = state.config.recommendation.display_count;
    let treatments: Vec<RankedTreatment> = ranked
        .into_iter()
        .take(display_count)
        .enumerate()
        .map(|(idx, record)| RankedTreatment { rank: idx + 1, record })
        .collect();

    info!(
        patient = %patient.patient_id,
        cancer = patient.cancer_type.as_key(),
        treatments = treatments.len(),
        insights = insights.len(),
        "generated recommendation"
    );

    Ok(Json(RecommendationResponse {
        patient_id: patient.patient_id.clone(),
        cancer_type: patient.cancer_type.as_key().to_string(),
        cancer_display_name: patient.cancer_type.display_name(),
        generated_at: Utc::now(),
        treatments,
        insights,
    }))
}

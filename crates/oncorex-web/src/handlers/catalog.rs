//! Catalog API — exposes the unadjusted base treatment sets.

use axum::extract::Path;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use oncorex_common::{ApiError, CancerType, TreatmentRecord};
use oncorex_ranker::catalog;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse {
    pub cancer_type: String,
    pub display_name: String,
    pub treatments: Vec<TreatmentRecord>,
}

/// GET /api/catalog/{cancer_type} — base treatments for a cancer-type key.
/// Unrecognized keys resolve to the default set rather than 404.
pub async fn catalog_for_type(
    Path(cancer_type): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let cancer = CancerType::from_key(&cancer_type);
    let treatments = catalog::base_for(&cancer);

    Ok(Json(CatalogResponse {
        cancer_type: cancer.as_key().to_string(),
        display_name: cancer.display_name(),
        treatments,
    }))
}

//! Axum router — maps all URL paths to handlers.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{
    catalog::catalog_for_type,
    recommend::recommend,
    system::health,
    vocabulary::vocabulary,
};
use crate::state::{AppState, SharedState};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        .route("/api/recommend", post(recommend))
        .route("/api/catalog/{cancer_type}", get(catalog_for_type))
        .route("/api/vocabulary", get(vocabulary))
        .route("/api/health", get(health))

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}

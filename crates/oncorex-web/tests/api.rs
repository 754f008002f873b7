//! HTTP-level tests driving the full router with in-memory requests.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use oncorex_web::config::Config;
use oncorex_web::router::build_router;
use oncorex_web::state::AppState;

fn app() -> Router {
    build_router(AppState::new(Config::default()))
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn recommend_ranks_egfr_lung_patient() {
    let request = post_json(
        "/api/recommend",
        json!({
            "patientId": "PT-0001",
            "cancerType": "lung-cancer",
            "mutations": ["EGFR"]
        }),
    );
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["cancerDisplayName"], "Lung Cancer");
    assert!(body["generatedAt"].is_string());

    let treatments = body["treatments"].as_array().unwrap();
    assert_eq!(treatments.len(), 3);
    assert_eq!(treatments[0]["rank"], 1);
    assert_eq!(treatments[0]["name"], "Osimertinib");
    assert!((treatments[0]["efficacyScore"].as_f64().unwrap() - 0.95).abs() < 1e-9);

    let insights = body["insights"].as_array().unwrap();
    assert!(insights
        .iter()
        .any(|s| s.as_str().unwrap().contains("EGFR tyrosine kinase inhibitors")));
}

#[tokio::test]
async fn recommend_puts_parp_inhibitor_first_for_brca_breast_patient() {
    let request = post_json(
        "/api/recommend",
        json!({
            "patientId": "PT-0002",
            "cancerType": "breast-cancer",
            "mutations": ["BRCA1"]
        }),
    );
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let treatments = body["treatments"].as_array().unwrap();
    // Four candidates ranked, truncated to the display count of three.
    assert_eq!(treatments.len(), 3);
    assert_eq!(treatments[0]["name"], "PARP Inhibitor (Olaparib)");
    assert!((treatments[0]["efficacyScore"].as_f64().unwrap() - 0.86).abs() < 1e-9);
    assert!((treatments[0]["confidenceScore"].as_f64().unwrap() - 0.80).abs() < 1e-9);
}

#[tokio::test]
async fn recommend_rejects_blank_patient_id() {
    let request = post_json(
        "/api/recommend",
        json!({ "patientId": "   ", "cancerType": "melanoma" }),
    );
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("patientId"));
}

#[tokio::test]
async fn recommend_without_cancer_type_is_unprocessable() {
    let request = post_json("/api/recommend", json!({ "patientId": "PT-0003" }));
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn recommend_unrecognized_cancer_type_uses_default_set() {
    let request = post_json(
        "/api/recommend",
        json!({ "patientId": "PT-0004", "cancerType": "unknown-xyz" }),
    );
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["cancerType"], "unknown-xyz");
    assert_eq!(body["cancerDisplayName"], "Unknown Xyz");
    let treatments = body["treatments"].as_array().unwrap();
    assert_eq!(treatments[0]["name"], "Cisplatin");
    // Nothing matched a rule, so exactly the fallback pair comes back.
    assert_eq!(body["insights"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn catalog_returns_base_set_without_adjustments() {
    let response = app().oneshot(get("/api/catalog/lung-cancer")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["displayName"], "Lung Cancer");
    let treatments = body["treatments"].as_array().unwrap();
    assert_eq!(treatments.len(), 3);
    assert_eq!(treatments[0]["name"], "Osimertinib");
    assert!((treatments[0]["efficacyScore"].as_f64().unwrap() - 0.85).abs() < 1e-9);
}

#[tokio::test]
async fn catalog_unknown_type_falls_back() {
    let response = app().oneshot(get("/api/catalog/chordoma")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["cancerType"], "chordoma");
    assert_eq!(body["treatments"][0]["name"], "Cisplatin");
}

#[tokio::test]
async fn vocabulary_lists_full_panels() {
    let response = app().oneshot(get("/api/vocabulary")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["cancerTypes"].as_array().unwrap().len(), 8);
    assert_eq!(body["mutationPanel"].as_array().unwrap().len(), 10);
    assert_eq!(body["expressionPanel"].as_array().unwrap().len(), 5);
    assert!(body["cancerStages"]
        .as_array()
        .unwrap()
        .contains(&json!("stage-iv")));
    assert!(body["treatmentResponses"]
        .as_array()
        .unwrap()
        .contains(&json!("progressive")));
}

#[tokio::test]
async fn health_reports_ok() {
    let response = app().oneshot(get("/api/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
}

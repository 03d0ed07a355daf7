//! Integration tests for the HTTP prediction API.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

use corsa::artifact::{MemoryArtifactStore, demo_bundle};
use corsa::explain::ExplanationMethod;
use corsa::inference::{InferenceEngine, PredictionResult};
use corsa::server::create_router;

fn demo_app() -> Router {
    let engine = InferenceEngine::with_bundle(demo_bundle().unwrap());
    create_router(Arc::new(engine))
}

fn empty_app() -> Router {
    let engine = InferenceEngine::with_store(Arc::new(MemoryArtifactStore::empty()));
    create_router(Arc::new(engine))
}

fn predict_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/predict")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let response = demo_app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body, serde_json::json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_predict_returns_recommendation() {
    let response = demo_app()
        .oneshot(predict_request(r#"{"interests": "nlp, transformers"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let result: PredictionResult = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(result.recommended_course, "nlp");
    assert!(result.probability > 0.0 && result.probability <= 1.0);
    assert_eq!(result.explanation.method, ExplanationMethod::CoefContributions);
    for token in result.explanation.top_contributing_tokens.keys() {
        assert!(["nlp", "transformers"].contains(&token.as_str()));
    }
}

#[tokio::test]
async fn test_predict_probability_is_rounded_on_the_wire() {
    let response = demo_app()
        .oneshot(predict_request(r#"{"interests": "python, ml"}"#))
        .await
        .unwrap();

    let body = response_json(response).await;
    let probability = body["probability"].as_f64().unwrap();

    // Four decimal places survive the JSON roundtrip unchanged.
    assert_eq!(probability, (probability * 10_000.0).round() / 10_000.0);
}

#[tokio::test]
async fn test_predict_without_model_returns_500_detail() {
    let response = empty_app()
        .oneshot(predict_request(r#"{"interests": "python, ml"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response_json(response).await;
    let detail = body["detail"].as_str().unwrap();
    assert!(detail.starts_with("Model not loaded"), "got {detail}");
}

#[tokio::test]
async fn test_predict_rejects_malformed_body() {
    let response = demo_app()
        .oneshot(predict_request(r#"{"hobbies": "python"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

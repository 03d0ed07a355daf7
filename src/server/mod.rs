//! HTTP API over the inference engine.
//!
//! Exposes two routes: `POST /predict` runs the recommendation pipeline on
//! a JSON interest payload, and `GET /health` answers liveness probes. Any
//! pipeline error maps to a 500 response with a JSON `detail` field.

use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use crate::error::{CorsaError, Result};
use crate::inference::{InferenceEngine, PredictionResult};

/// Shared state handed to every handler.
pub type AppState = Arc<InferenceEngine>;

/// Body of a prediction request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictRequest {
    /// Comma-separated free-text interests.
    pub interests: String,
}

/// Body of the health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the process is serving.
    pub status: String,
}

/// Body of an error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable failure description.
    pub detail: String,
}

struct ApiError(CorsaError);

impl From<CorsaError> for ApiError {
    fn from(e: CorsaError) -> Self {
        ApiError(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody {
                detail: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

/// Build the application router.
pub fn create_router(engine: AppState) -> Router {
    Router::new()
        .route("/predict", post(predict))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(engine)
}

/// Bind and serve the API until the process is stopped.
pub async fn serve(engine: AppState, host: &str, port: u16) -> Result<()> {
    let app = create_router(engine);
    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("listening on {addr}");
    axum::serve(listener, app).await?;
    Ok(())
}

async fn predict(
    State(engine): State<AppState>,
    Json(request): Json<PredictRequest>,
) -> std::result::Result<Json<PredictionResult>, ApiError> {
    let result = engine.predict(&request.interests)?;
    Ok(Json(result))
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

//! Health check handler

use axum::{extract::State, Json};
use serde::Serialize;

use heart_risk_core::features::{layout_hash, FEATURE_VERSION};

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    environment: String,
    model_method: &'static str,
    feature_version: u8,
    layout_hash: String,
    timestamp: i64,
}

/// Liveness plus the model/layout pair being served
pub async fn check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        environment: state.config.environment.clone(),
        model_method: state.engine.method(),
        feature_version: FEATURE_VERSION,
        layout_hash: format!("{:08x}", layout_hash()),
        timestamp: chrono::Utc::now().timestamp(),
    })
}

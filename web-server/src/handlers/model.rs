//! Model status handler

use axum::{extract::State, Json};

use heart_risk_core::features::LayoutInfo;

use crate::models::ModelInfoResponse;
use crate::AppState;

/// Loaded model, inference counters and feature layout
pub async fn status(State(state): State<AppState>) -> Json<ModelInfoResponse> {
    Json(ModelInfoResponse {
        status: state.engine.status(),
        metadata: state.engine.metadata().clone(),
        layout: LayoutInfo::current(),
    })
}

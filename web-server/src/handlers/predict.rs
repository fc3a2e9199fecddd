//! Prediction handlers
//!
//! Both routes run the same cycle: parse, check domains, assemble the
//! vector, call the classifier synchronously, map the label.

use std::collections::HashMap;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Html,
    Form, Json,
};

use heart_risk_core::{ClinicalFeatures, PredictionResult};

use crate::models::{FormValues, PredictResponse};
use crate::views::{render_page, Outcome};
use crate::{AppResult, AppState};

fn run_prediction(state: &AppState, features: &ClinicalFeatures) -> AppResult<PredictionResult> {
    let vector = features.to_vector();
    tracing::debug!(features = %vector.to_log_entry(), "Running prediction");

    let result = state.engine.predict(&vector)?;
    tracing::info!(
        label = result.raw_label,
        risk = %result.label,
        inference_time_us = result.inference_time_us,
        "Prediction complete"
    );

    Ok(result)
}

/// Form submit from the page
pub async fn submit_form(
    State(state): State<AppState>,
    Form(fields): Form<HashMap<String, String>>,
) -> (StatusCode, Html<String>) {
    let mut values = FormValues::from_submission(&fields);

    let (status, outcome) = match values.parse() {
        Err(err) => {
            tracing::warn!("Rejected form submission: {}", err);
            (err.status(), Outcome::Invalid(err.to_string()))
        }
        Ok(features) => {
            // Widgets show the values the classifier actually saw
            values = FormValues::from_features(&features);
            match run_prediction(&state, &features) {
                Ok(result) => (StatusCode::OK, Outcome::Prediction(result.label)),
                Err(err) => {
                    tracing::error!("Prediction error: {}", err);
                    (err.status(), Outcome::Failed)
                }
            }
        }
    };

    let html = render_page(&values, Some(&outcome), state.engine.metadata());
    (status, Html(html))
}

/// JSON variant for programmatic callers
pub async fn predict_json(
    State(state): State<AppState>,
    payload: Result<Json<ClinicalFeatures>, JsonRejection>,
) -> AppResult<Json<PredictResponse>> {
    let Json(features) = payload?;
    features.validate()?;

    let result = run_prediction(&state, &features)?;
    Ok(Json(result.into()))
}

//! Error handling

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use heart_risk_core::{DomainError, InferenceError};

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    // Input errors
    #[error("{0}")]
    ValidationError(String),

    // Body could not be read as JSON (content type, syntax)
    #[error("{1}")]
    BadRequest(StatusCode, String),

    // Classifier errors
    #[error("prediction failed: {0}")]
    PredictionFailed(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::BadRequest(status, _) => *status,
            AppError::PredictionFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_message = match &self {
            AppError::ValidationError(msg) | AppError::BadRequest(_, msg) => msg.as_str(),
            AppError::PredictionFailed(msg) => {
                tracing::error!("Prediction error: {}", msg);
                "Prediction failed"
            }
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

impl From<InferenceError> for AppError {
    fn from(err: InferenceError) -> Self {
        AppError::PredictionFailed(err.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(err: JsonRejection) -> Self {
        match &err {
            // Well-formed JSON that does not fit `ClinicalFeatures`
            JsonRejection::JsonDataError(_) => AppError::ValidationError(err.body_text()),
            _ => AppError::BadRequest(err.status(), err.body_text()),
        }
    }
}

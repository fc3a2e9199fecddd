//! Prediction API models

use serde::Serialize;

use heart_risk_core::features::LayoutInfo;
use heart_risk_core::{EngineStatus, ModelMetadata, PredictionResult, RiskLabel};

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub label: i64,
    pub risk: RiskLabel,
    pub headline: &'static str,
    pub message: &'static str,
    pub inference_time_us: u64,
}

impl From<PredictionResult> for PredictResponse {
    fn from(result: PredictionResult) -> Self {
        Self {
            label: result.raw_label,
            risk: result.label,
            headline: result.label.headline(),
            message: result.label.message(),
            inference_time_us: result.inference_time_us,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ModelInfoResponse {
    pub status: EngineStatus,
    pub metadata: ModelMetadata,
    pub layout: LayoutInfo,
}

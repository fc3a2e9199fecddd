//! Prediction Engine - timed, counted calls into the loaded classifier
//!
//! Built once at startup and shared read-only. The counters are the only
//! mutable data and exist for the status endpoint.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use serde::{Deserialize, Serialize};

use super::artifact::{LoadedModel, ModelFormat, ModelMetadata};
use super::inference::InferenceError;
use super::label::RiskLabel;
use crate::features::FeatureVector;

/// Prediction output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResult {
    pub raw_label: i64,
    pub label: RiskLabel,
    pub inference_time_us: u64,
    pub method: String,
}

/// Engine Status for the status endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineStatus {
    pub model_loaded: bool,
    pub model_name: String,
    pub format: ModelFormat,
    pub avg_latency_ms: f32,
    pub inference_count: u64,
    pub failure_count: u64,
}

pub struct PredictionEngine {
    model: LoadedModel,
    latency_sum_us: AtomicU64,
    inference_count: AtomicU64,
    failure_count: AtomicU64,
}

impl PredictionEngine {
    pub fn new(model: LoadedModel) -> Self {
        Self {
            model,
            latency_sum_us: AtomicU64::new(0),
            inference_count: AtomicU64::new(0),
            failure_count: AtomicU64::new(0),
        }
    }

    /// Run the classifier on one vector
    pub fn predict(&self, vector: &FeatureVector) -> Result<PredictionResult, InferenceError> {
        self.predict_slice(vector.as_slice())
    }

    /// Run the classifier on a raw slice (no shape guarantee)
    pub fn predict_slice(&self, features: &[f64]) -> Result<PredictionResult, InferenceError> {
        let start_time = Instant::now();

        let raw_label = match self.model.classifier.predict(features) {
            Ok(label) => label,
            Err(e) => {
                self.failure_count.fetch_add(1, Ordering::Relaxed);
                log::warn!("Prediction failed: {}", e);
                return Err(e);
            }
        };

        let inference_time_us = start_time.elapsed().as_micros() as u64;
        self.latency_sum_us.fetch_add(inference_time_us, Ordering::Relaxed);
        self.inference_count.fetch_add(1, Ordering::Relaxed);

        Ok(PredictionResult {
            raw_label,
            label: RiskLabel::from_raw(raw_label),
            inference_time_us,
            method: self.method().to_string(),
        })
    }

    /// Backend name of the wrapped classifier
    pub fn method(&self) -> &'static str {
        self.model.classifier.method()
    }

    pub fn metadata(&self) -> &ModelMetadata {
        &self.model.metadata
    }

    pub fn status(&self) -> EngineStatus {
        let sum = self.latency_sum_us.load(Ordering::Relaxed);
        let count = self.inference_count.load(Ordering::Relaxed);
        let avg = if count > 0 {
            (sum as f32 / count as f32) / 1000.0
        } else {
            0.0
        };

        EngineStatus {
            model_loaded: true,
            model_name: self.model.metadata.model_path.clone(),
            format: self.model.metadata.format,
            avg_latency_ms: avg,
            inference_count: count,
            failure_count: self.failure_count.load(Ordering::Relaxed),
        }
    }
}

//! Shared fixtures for router and startup tests

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request};
use heart_risk_core::features::layout_hash;
use heart_risk_core::{Classifier, InferenceError, LoadedModel, ModelFormat};
use heart_risk_web::{AppState, Config};

/// Lower-bound inputs; the fixture model scores these low
pub const LOWER_BOUND_FORM: &str =
    "age=1&sex=0&cp=0&trestbps=50&chol=100&fbs=0&restecg=0&thalach=50&exang=0&oldpeak=0.0&slope=0&ca=0&thal=3";

/// Upper-bound inputs; the fixture model scores these high
pub const UPPER_BOUND_FORM: &str =
    "age=120&sex=1&cp=3&trestbps=250&chol=600&fbs=1&restecg=2&thalach=250&exang=1&oldpeak=10.0&slope=2&ca=3&thal=7";

/// Logistic regression artifact used across tests
pub fn artifact_json() -> String {
    serde_json::json!({
        "format_version": 1,
        "algorithm": "Logistic Regression",
        "dataset": "UCI Heart Disease Dataset",
        "reported_accuracy": 0.85,
        "evaluation_metrics": ["Precision", "Recall", "F1-score"],
        "feature_names": [
            "age", "sex", "cp", "trestbps", "chol", "fbs", "restecg",
            "thalach", "exang", "oldpeak", "slope", "ca", "thal"
        ],
        "layout_hash": layout_hash(),
        "coefficients": [0.02, 1.2, 0.8, 0.01, 0.003, 0.1, 0.3, -0.03, 0.9, 0.5, 0.4, 0.9, 0.4],
        "intercept": -1.0,
        "classes": [0, 1]
    })
    .to_string()
}

/// Write the fixture artifact and return its path (dir must outlive it)
pub fn write_artifact(dir: &tempfile::TempDir) -> PathBuf {
    let path = dir.path().join("heart_disease_model.json");
    std::fs::write(&path, artifact_json()).unwrap();
    path
}

pub fn config_for(path: &std::path::Path, sha256: Option<&str>) -> Config {
    let path = path.display().to_string();
    let sha256 = sha256.map(str::to_string);
    Config::from_lookup(move |key| match key {
        "MODEL_PATH" => Some(path.clone()),
        "MODEL_SHA256" => sha256.clone(),
        _ => None,
    })
}

/// Classifier that always errors
pub struct BrokenClassifier;

impl Classifier for BrokenClassifier {
    fn predict(&self, _features: &[f64]) -> Result<i64, InferenceError> {
        Err(InferenceError::Backend("session crashed".to_string()))
    }

    fn feature_count(&self) -> usize {
        13
    }

    fn method(&self) -> &'static str {
        "broken"
    }
}

/// Classifier that returns a fixed raw label
pub struct ConstantClassifier(pub i64);

impl Classifier for ConstantClassifier {
    fn predict(&self, features: &[f64]) -> Result<i64, InferenceError> {
        if features.len() != 13 {
            return Err(InferenceError::ShapeMismatch {
                expected: 13,
                actual: features.len(),
            });
        }
        Ok(self.0)
    }

    fn feature_count(&self) -> usize {
        13
    }

    fn method(&self) -> &'static str {
        "constant"
    }
}

pub fn state_with(classifier: Arc<dyn Classifier>) -> AppState {
    let config = Config::from_lookup(|_| None);
    AppState::new(
        LoadedModel::from_classifier(classifier, ModelFormat::LogisticJson),
        config,
    )
}

pub fn form_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/predict")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn json_request(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

//! Model Artifact Loading
//!
//! Loads the serialized classifier once at startup. Any failure here is
//! fatal for the caller: there is no fallback model.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

use super::inference::Classifier;
use super::logistic::LogisticClassifier;

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("model artifact not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to read model artifact {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed model artifact: {0}")]
    Malformed(String),

    #[error("model artifact incompatible with feature layout: {0}")]
    SchemaMismatch(String),

    #[error("model artifact checksum mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch { expected: String, actual: String },

    #[error("unsupported model format: {0}")]
    UnsupportedFormat(String),

    #[error("inference backend failed to load model: {0}")]
    Backend(String),
}

// ============================================================================
// FORMAT & METADATA
// ============================================================================

/// Serialized model formats, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelFormat {
    /// `*.json` logistic regression export
    LogisticJson,
    /// `*.onnx` graph run through ONNX Runtime
    Onnx,
}

impl ModelFormat {
    pub fn from_path(path: &Path) -> Result<Self, ArtifactError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("json") => Ok(ModelFormat::LogisticJson),
            Some("onnx") => Ok(ModelFormat::Onnx),
            Some(other) => Err(ArtifactError::UnsupportedFormat(format!(".{}", other))),
            None => Err(ArtifactError::UnsupportedFormat(format!(
                "{} has no file extension",
                path.display()
            ))),
        }
    }
}

/// Model metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetadata {
    pub model_path: String,
    pub format: ModelFormat,
    pub sha256: String,
    pub features: usize,
    pub loaded_at: DateTime<Utc>,
    pub algorithm: Option<String>,
    pub dataset: Option<String>,
    pub reported_accuracy: Option<f64>,
    pub evaluation_metrics: Vec<String>,
}

/// A classifier ready to serve, plus what we know about it
#[derive(Clone)]
pub struct LoadedModel {
    pub classifier: Arc<dyn Classifier>,
    pub metadata: ModelMetadata,
}

impl LoadedModel {
    /// Wrap an already-built classifier (tests, embedded models)
    pub fn from_classifier(classifier: Arc<dyn Classifier>, format: ModelFormat) -> Self {
        let metadata = ModelMetadata {
            model_path: "<memory>".to_string(),
            format,
            sha256: String::new(),
            features: classifier.feature_count(),
            loaded_at: Utc::now(),
            algorithm: None,
            dataset: None,
            reported_accuracy: None,
            evaluation_metrics: Vec::new(),
        };
        Self { classifier, metadata }
    }
}

impl std::fmt::Debug for LoadedModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadedModel")
            .field("method", &self.classifier.method())
            .field("metadata", &self.metadata)
            .finish()
    }
}

// ============================================================================
// LOADING
// ============================================================================

/// Hex-encoded SHA-256 of the artifact bytes
pub fn artifact_checksum(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// Load the classifier at `path`
///
/// When `expected_sha256` is given, the artifact bytes must hash to it.
pub fn load_classifier(
    path: impl AsRef<Path>,
    expected_sha256: Option<&str>,
) -> Result<LoadedModel, ArtifactError> {
    let path = path.as_ref();
    log::info!("Loading model artifact from: {}", path.display());

    if !path.exists() {
        return Err(ArtifactError::NotFound(path.to_path_buf()));
    }

    let format = ModelFormat::from_path(path)?;

    let bytes = std::fs::read(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let sha256 = artifact_checksum(&bytes);
    if let Some(expected) = expected_sha256 {
        let expected = expected.trim().to_ascii_lowercase();
        if expected != sha256 {
            return Err(ArtifactError::ChecksumMismatch {
                expected,
                actual: sha256,
            });
        }
        log::info!("Model checksum verified");
    }

    let mut metadata = ModelMetadata {
        model_path: path.display().to_string(),
        format,
        sha256,
        features: 0,
        loaded_at: Utc::now(),
        algorithm: None,
        dataset: None,
        reported_accuracy: None,
        evaluation_metrics: Vec::new(),
    };

    let classifier: Arc<dyn Classifier> = match format {
        ModelFormat::LogisticJson => {
            let (classifier, artifact) = LogisticClassifier::from_bytes(&bytes)?;
            metadata.algorithm = artifact.algorithm;
            metadata.dataset = artifact.dataset;
            metadata.reported_accuracy = artifact.reported_accuracy;
            metadata.evaluation_metrics = artifact.evaluation_metrics;
            Arc::new(classifier)
        }
        ModelFormat::Onnx => load_onnx(&bytes)?,
    };
    metadata.features = classifier.feature_count();

    log::info!(
        "Model loaded: {} ({} features, sha256 {})",
        classifier.method(),
        metadata.features,
        &metadata.sha256[..12]
    );

    Ok(LoadedModel {
        classifier,
        metadata,
    })
}

#[cfg(feature = "onnx")]
fn load_onnx(bytes: &[u8]) -> Result<Arc<dyn Classifier>, ArtifactError> {
    Ok(Arc::new(super::onnx::OnnxClassifier::from_bytes(bytes)?))
}

#[cfg(not(feature = "onnx"))]
fn load_onnx(_bytes: &[u8]) -> Result<Arc<dyn Classifier>, ArtifactError> {
    Err(ArtifactError::UnsupportedFormat(
        ".onnx (build with the `onnx` feature)".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::ARTIFACT_FORMAT_VERSION;
    use crate::features::{layout_hash, FEATURE_COUNT};
    use std::io::Write;

    fn artifact_json() -> String {
        serde_json::json!({
            "format_version": ARTIFACT_FORMAT_VERSION,
            "algorithm": "Logistic Regression",
            "dataset": "UCI Heart Disease Dataset",
            "reported_accuracy": 0.85,
            "evaluation_metrics": ["Precision", "Recall", "F1-score"],
            "layout_hash": layout_hash(),
            "coefficients": vec![0.01; FEATURE_COUNT],
            "intercept": -3.0,
            "classes": [0, 1],
        })
        .to_string()
    }

    fn write_artifact(dir: &tempfile::TempDir, name: &str, body: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(body.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_json_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_artifact(&dir, "model.json", &artifact_json());

        let model = load_classifier(&path, None).unwrap();
        assert_eq!(model.metadata.format, ModelFormat::LogisticJson);
        assert_eq!(model.metadata.features, FEATURE_COUNT);
        assert_eq!(model.metadata.algorithm.as_deref(), Some("Logistic Regression"));
        assert_eq!(model.metadata.reported_accuracy, Some(0.85));
        assert_eq!(model.metadata.sha256.len(), 64);
        assert_eq!(model.classifier.method(), "logistic");
    }

    #[test]
    fn test_missing_artifact_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_classifier(dir.path().join("absent.json"), None).unwrap_err();
        assert!(matches!(err, ArtifactError::NotFound(_)));
    }

    #[test]
    fn test_corrupt_artifact_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_artifact(&dir, "model.json", "{\"coefficients\": [1, 2");
        assert!(matches!(
            load_classifier(&path, None),
            Err(ArtifactError::Malformed(_))
        ));
    }

    #[test]
    fn test_checksum_verification() {
        let dir = tempfile::tempdir().unwrap();
        let body = artifact_json();
        let path = write_artifact(&dir, "model.json", &body);

        let good = artifact_checksum(body.as_bytes()).to_uppercase();
        assert!(load_classifier(&path, Some(good.as_str())).is_ok());

        let bad = "0".repeat(64);
        assert!(matches!(
            load_classifier(&path, Some(bad.as_str())),
            Err(ArtifactError::ChecksumMismatch { .. })
        ));
    }

    #[test]
    fn test_unknown_extension_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_artifact(&dir, "model.pkl", "binary");
        assert!(matches!(
            load_classifier(&path, None),
            Err(ArtifactError::UnsupportedFormat(_))
        ));
    }

    #[cfg(not(feature = "onnx"))]
    #[test]
    fn test_onnx_requires_feature() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_artifact(&dir, "model.onnx", "graph");
        assert!(matches!(
            load_classifier(&path, None),
            Err(ArtifactError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            ModelFormat::from_path(Path::new("a/heart.JSON")).unwrap(),
            ModelFormat::LogisticJson
        );
        assert_eq!(ModelFormat::from_path(Path::new("m.onnx")).unwrap(), ModelFormat::Onnx);
        assert!(ModelFormat::from_path(Path::new("model")).is_err());
    }
}

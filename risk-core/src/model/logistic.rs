//! Logistic Regression Classifier - JSON artifact backend
//!
//! Holds the exported coefficients of a binary logistic regression and
//! predicts the way scikit-learn does: positive decision → `classes[1]`.

use serde::{Deserialize, Serialize};

use super::artifact::ArtifactError;
use super::inference::{check_shape, Classifier, InferenceError};
use crate::constants::ARTIFACT_FORMAT_VERSION;
use crate::features::{layout_hash, FEATURE_COUNT, FEATURE_LAYOUT};

// ============================================================================
// ARTIFACT
// ============================================================================

/// On-disk form of the model (`*.json`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticArtifact {
    pub format_version: u32,
    #[serde(default)]
    pub algorithm: Option<String>,
    #[serde(default)]
    pub dataset: Option<String>,
    #[serde(default)]
    pub reported_accuracy: Option<f64>,
    #[serde(default)]
    pub evaluation_metrics: Vec<String>,
    /// Feature order the model was trained with
    #[serde(default)]
    pub feature_names: Option<Vec<String>>,
    #[serde(default)]
    pub layout_hash: Option<u32>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    pub classes: Vec<i64>,
}

impl LogisticArtifact {
    /// Check the artifact against the current feature layout
    pub fn check_schema(&self) -> Result<(), ArtifactError> {
        if self.format_version != ARTIFACT_FORMAT_VERSION {
            return Err(ArtifactError::SchemaMismatch(format!(
                "format_version {} not supported (expected {})",
                self.format_version, ARTIFACT_FORMAT_VERSION
            )));
        }

        if self.coefficients.len() != FEATURE_COUNT {
            return Err(ArtifactError::SchemaMismatch(format!(
                "model has {} coefficients, layout has {} features",
                self.coefficients.len(),
                FEATURE_COUNT
            )));
        }

        if self.coefficients.iter().any(|c| !c.is_finite()) || !self.intercept.is_finite() {
            return Err(ArtifactError::SchemaMismatch(
                "coefficients must be finite numbers".to_string(),
            ));
        }

        if self.classes.len() != 2 || self.classes[0] == self.classes[1] {
            return Err(ArtifactError::SchemaMismatch(format!(
                "expected two distinct classes, got {:?}",
                self.classes
            )));
        }

        if let Some(names) = &self.feature_names {
            if names.iter().map(String::as_str).ne(FEATURE_LAYOUT.iter().copied()) {
                return Err(ArtifactError::SchemaMismatch(format!(
                    "feature order {:?} does not match layout {:?}",
                    names, FEATURE_LAYOUT
                )));
            }
        }

        if let Some(hash) = self.layout_hash {
            let current = layout_hash();
            if hash != current {
                return Err(ArtifactError::SchemaMismatch(format!(
                    "layout hash {:08x} does not match current layout {:08x}",
                    hash, current
                )));
            }
        }

        Ok(())
    }
}

// ============================================================================
// CLASSIFIER
// ============================================================================

/// Binary logistic regression, immutable after load
#[derive(Debug, Clone)]
pub struct LogisticClassifier {
    coefficients: Vec<f64>,
    intercept: f64,
    classes: [i64; 2],
}

impl LogisticClassifier {
    /// Build from a parsed artifact after schema checks
    pub fn from_artifact(artifact: &LogisticArtifact) -> Result<Self, ArtifactError> {
        artifact.check_schema()?;

        Ok(Self {
            coefficients: artifact.coefficients.clone(),
            intercept: artifact.intercept,
            classes: [artifact.classes[0], artifact.classes[1]],
        })
    }

    /// Parse and build from the raw JSON bytes of an artifact
    pub fn from_bytes(bytes: &[u8]) -> Result<(Self, LogisticArtifact), ArtifactError> {
        let artifact: LogisticArtifact = serde_json::from_slice(bytes)
            .map_err(|e| ArtifactError::Malformed(e.to_string()))?;
        let classifier = Self::from_artifact(&artifact)?;
        Ok((classifier, artifact))
    }

    /// Linear decision value `intercept + Σ coef·x`
    pub fn decision_function(&self, features: &[f64]) -> Result<f64, InferenceError> {
        check_shape(self.coefficients.len(), features)?;

        if let Some(index) = features.iter().position(|v| !v.is_finite()) {
            return Err(InferenceError::NonFinite { index });
        }

        let dot: f64 = self
            .coefficients
            .iter()
            .zip(features.iter())
            .map(|(w, x)| w * x)
            .sum();

        Ok(dot + self.intercept)
    }
}

/// Logistic sigmoid: probability of `classes[1]` for a decision value
fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

impl Classifier for LogisticClassifier {
    fn predict(&self, features: &[f64]) -> Result<i64, InferenceError> {
        let decision = self.decision_function(features)?;
        log::debug!(
            "Logistic decision value: {:.4} (p[class {}] = {:.4})",
            decision,
            self.classes[1],
            sigmoid(decision)
        );

        Ok(if decision > 0.0 {
            self.classes[1]
        } else {
            self.classes[0]
        })
    }

    fn feature_count(&self) -> usize {
        self.coefficients.len()
    }

    fn method(&self) -> &'static str {
        "logistic"
    }
}

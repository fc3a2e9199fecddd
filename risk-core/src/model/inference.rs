//! Inference Contract
//!
//! One operation: a 13-element vector in, a raw class label out.

use thiserror::Error;

/// Errors raised by a single prediction call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InferenceError {
    #[error("feature vector has {actual} elements, model expects {expected}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("feature {index} is not a finite number")]
    NonFinite { index: usize },

    #[error("inference backend failed: {0}")]
    Backend(String),
}

/// A loaded, immutable binary classifier
///
/// Implementations pass the vector through unchanged: no validation of
/// clinical domains, no scaling, no re-encoding.
pub trait Classifier: Send + Sync {
    /// Predict the raw class label for one vector
    fn predict(&self, features: &[f64]) -> Result<i64, InferenceError>;

    /// Number of features the model was trained on
    fn feature_count(&self) -> usize;

    /// Short backend name for logs and status ("logistic", "onnx", ...)
    fn method(&self) -> &'static str;
}

/// Reject vectors whose length differs from what the model expects
pub fn check_shape(expected: usize, features: &[f64]) -> Result<(), InferenceError> {
    if features.len() != expected {
        return Err(InferenceError::ShapeMismatch {
            expected,
            actual: features.len(),
        });
    }
    Ok(())
}

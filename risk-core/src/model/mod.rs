//! Model Module - Prediction Adapter
//!
//! Wraps one pre-trained binary classifier behind [`Classifier`].
//! Concrete formats live in their own modules; the form never sees them.

pub mod artifact;
pub mod engine;
pub mod inference;
pub mod label;
pub mod logistic;
#[cfg(feature = "onnx")]
pub mod onnx;

// Re-export common types
pub use artifact::{load_classifier, ArtifactError, LoadedModel, ModelFormat, ModelMetadata};
pub use engine::{EngineStatus, PredictionEngine, PredictionResult};
pub use inference::{Classifier, InferenceError};
pub use label::RiskLabel;
pub use logistic::{LogisticArtifact, LogisticClassifier};

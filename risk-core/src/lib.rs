//! Heart Disease Predictor - Core
//!
//! Feature layout for the 13 clinical inputs and the prediction adapter
//! that wraps the pre-trained classifier.

pub mod constants;
pub mod features;
pub mod model;

pub use features::{ClinicalFeatures, DomainError, FeatureVector, FEATURE_COUNT};
pub use model::{
    load_classifier, ArtifactError, Classifier, EngineStatus, InferenceError, LoadedModel,
    ModelFormat, ModelMetadata, PredictionEngine, PredictionResult, RiskLabel,
};

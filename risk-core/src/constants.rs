//! Central Constants
//!
//! Single source of truth for defaults shared by the adapter and the form.

/// Default model artifact path (relative to the working directory)
pub const DEFAULT_MODEL_PATH: &str = "heart_disease_model.json";

/// Artifact format version understood by the JSON loader
pub const ARTIFACT_FORMAT_VERSION: u32 = 1;

/// Raw label that means "high risk"
pub const HIGH_RISK_LABEL: i64 = 1;

/// App name
pub const APP_NAME: &str = "Heart Disease Predictor";

// ============================================
// Model info fallbacks (shown when the artifact carries no metadata)
// ============================================

/// Algorithm the shipped artifact was trained with
pub const FALLBACK_ALGORITHM: &str = "Logistic Regression";

/// Dataset the shipped artifact was trained on
pub const FALLBACK_DATASET: &str = "UCI Heart Disease Dataset";

/// Accuracy on held-out test data, as reported at training time
pub const FALLBACK_ACCURACY: f64 = 0.85;

/// Metrics used during evaluation
pub const FALLBACK_METRICS: &[&str] = &["Precision", "Recall", "F1-score"];

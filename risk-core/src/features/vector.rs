//! Feature Vector - Core data structure for ML input
//!
//! `ClinicalFeatures` is what the form collects; `FeatureVector` is what the
//! classifier sees. Values pass through unchanged: no scaling, no re-mapping.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::layout::{FieldDomain, FEATURE_COUNT, FEATURE_LAYOUT, FIELD_SPECS};

// ============================================================================
// CLINICAL INPUTS
// ============================================================================

/// The thirteen clinical parameters, as entered by the user
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClinicalFeatures {
    pub age: i64,
    pub sex: i64,
    pub cp: i64,
    pub trestbps: i64,
    pub chol: i64,
    pub fbs: i64,
    pub restecg: i64,
    pub thalach: i64,
    pub exang: i64,
    pub oldpeak: f64,
    pub slope: i64,
    pub ca: i64,
    pub thal: i64,
}

/// A submitted value outside its field's domain
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{field} = {value} is outside the allowed domain ({domain})")]
pub struct DomainError {
    pub field: &'static str,
    pub value: f64,
    pub domain: FieldDomain,
}

impl ClinicalFeatures {
    /// Every field at its widget default (range minimum / first choice)
    pub fn defaults() -> Self {
        let d = |i: usize| FIELD_SPECS[i].domain.min_value();
        Self {
            age: d(0) as i64,
            sex: d(1) as i64,
            cp: d(2) as i64,
            trestbps: d(3) as i64,
            chol: d(4) as i64,
            fbs: d(5) as i64,
            restecg: d(6) as i64,
            thalach: d(7) as i64,
            exang: d(8) as i64,
            oldpeak: d(9),
            slope: d(10) as i64,
            ca: d(11) as i64,
            thal: d(12) as i64,
        }
    }

    /// Build from layout-ordered values, checking each against its domain
    ///
    /// Integer fields are only accepted when their value is a whole number,
    /// so the casts below never truncate.
    pub fn try_from_values(values: [f64; FEATURE_COUNT]) -> Result<Self, DomainError> {
        for (spec, &value) in FIELD_SPECS.iter().zip(values.iter()) {
            if !spec.domain.contains(value) {
                return Err(DomainError {
                    field: spec.name,
                    value,
                    domain: spec.domain,
                });
            }
        }

        Ok(Self {
            age: values[0] as i64,
            sex: values[1] as i64,
            cp: values[2] as i64,
            trestbps: values[3] as i64,
            chol: values[4] as i64,
            fbs: values[5] as i64,
            restecg: values[6] as i64,
            thalach: values[7] as i64,
            exang: values[8] as i64,
            oldpeak: values[9],
            slope: values[10] as i64,
            ca: values[11] as i64,
            thal: values[12] as i64,
        })
    }

    /// Values in layout order
    fn values(&self) -> [f64; FEATURE_COUNT] {
        [
            self.age as f64,
            self.sex as f64,
            self.cp as f64,
            self.trestbps as f64,
            self.chol as f64,
            self.fbs as f64,
            self.restecg as f64,
            self.thalach as f64,
            self.exang as f64,
            self.oldpeak,
            self.slope as f64,
            self.ca as f64,
            self.thal as f64,
        ]
    }

    /// Check every field against its domain, reporting the first violation
    pub fn validate(&self) -> Result<(), DomainError> {
        Self::try_from_values(self.values()).map(|_| ())
    }

    /// Assemble the fixed-order vector handed to the classifier
    pub fn to_vector(&self) -> FeatureVector {
        FeatureVector::from_values(self.values())
    }
}

impl Default for ClinicalFeatures {
    fn default() -> Self {
        Self::defaults()
    }
}

// ============================================================================
// FEATURE VECTOR
// ============================================================================

/// Fixed-length, fixed-order numeric encoding of one submission
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    values: [f64; FEATURE_COUNT],
}

impl FeatureVector {
    /// Create from raw values
    pub fn from_values(values: [f64; FEATURE_COUNT]) -> Self {
        Self { values }
    }

    /// Get values as array reference
    pub fn as_array(&self) -> &[f64; FEATURE_COUNT] {
        &self.values
    }

    /// Get values as slice
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Get feature by index
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    /// Get feature by name
    pub fn get_by_name(&self, name: &str) -> Option<f64> {
        super::layout::feature_index(name).and_then(|i| self.get(i))
    }

    /// Convert to JSON-serializable format for logging
    pub fn to_log_entry(&self) -> serde_json::Value {
        let named: serde_json::Map<String, serde_json::Value> = FEATURE_LAYOUT
            .iter()
            .zip(self.values.iter())
            .map(|(name, value)| (name.to_string(), serde_json::json!(value)))
            .collect();

        serde_json::json!({
            "feature_version": super::layout::FEATURE_VERSION,
            "values": self.values,
            "named_values": named,
        })
    }
}

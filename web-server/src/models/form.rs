//! Form submission model
//!
//! Keeps the submitted text of all 13 widgets so the page can be re-rendered
//! with the user's values, and turns them into `ClinicalFeatures`.

use std::collections::HashMap;

use heart_risk_core::features::{FieldDomain, FieldSpec, FEATURE_COUNT, FIELD_SPECS};
use heart_risk_core::ClinicalFeatures;

use crate::AppError;

/// Widget values as text, in layout order
#[derive(Debug, Clone, PartialEq)]
pub struct FormValues {
    values: [String; FEATURE_COUNT],
}

/// Render a numeric value the way its widget displays it
pub fn format_value(spec: &FieldSpec, value: f64) -> String {
    match spec.domain {
        FieldDomain::FloatRange { .. } => format!("{:.1}", value),
        _ => format!("{}", value as i64),
    }
}

impl FormValues {
    /// Widget defaults (range minimum / first choice)
    pub fn defaults() -> Self {
        Self::from_features(&ClinicalFeatures::defaults())
    }

    pub fn from_features(features: &ClinicalFeatures) -> Self {
        let vector = features.to_vector();
        Self {
            values: std::array::from_fn(|i| format_value(&FIELD_SPECS[i], vector.as_array()[i])),
        }
    }

    /// Take the submitted fields; absent fields stay empty
    pub fn from_submission(fields: &HashMap<String, String>) -> Self {
        Self {
            values: std::array::from_fn(|i| {
                fields
                    .get(FIELD_SPECS[i].name)
                    .map(|v| v.trim().to_string())
                    .unwrap_or_default()
            }),
        }
    }

    pub fn get(&self, index: usize) -> &str {
        self.values.get(index).map(String::as_str).unwrap_or("")
    }

    /// Parse every field and check it against its domain
    pub fn parse(&self) -> Result<ClinicalFeatures, AppError> {
        let mut numbers = [0.0f64; FEATURE_COUNT];

        for (i, spec) in FIELD_SPECS.iter().enumerate() {
            let raw = self.values[i].as_str();
            if raw.is_empty() {
                return Err(AppError::ValidationError(format!(
                    "{} is required",
                    spec.name
                )));
            }
            numbers[i] = raw.parse::<f64>().map_err(|_| {
                AppError::ValidationError(format!("{} must be a number, got '{}'", spec.name, raw))
            })?;
        }

        Ok(ClinicalFeatures::try_from_values(numbers)?)
    }
}

impl Default for FormValues {
    fn default() -> Self {
        Self::defaults()
    }
}

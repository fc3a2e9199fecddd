//! Feature Layout - Centralized Feature Definition
//!
//! **This file controls the feature schema the classifier was trained on.**
//!
//! ## Rules:
//! 1. Add feature → increment FEATURE_VERSION
//! 2. Change order → increment FEATURE_VERSION
//! 3. Remove feature → increment FEATURE_VERSION
//!
//! A model artifact may carry the layout hash it was exported against;
//! the loader refuses artifacts whose hash differs from [`layout_hash`].

use crc32fast::Hasher;
use serde::{Deserialize, Serialize};

// ============================================================================
// FEATURE VERSION
// ============================================================================

/// Current feature layout version
pub const FEATURE_VERSION: u8 = 1;

// ============================================================================
// FEATURE LAYOUT (Authoritative source)
// ============================================================================

/// Feature names in exact order they appear in the vector
pub const FEATURE_LAYOUT: &[&str] = &[
    "age",      // 0: years
    "sex",      // 1: 0 = female, 1 = male
    "cp",       // 2: chest pain type
    "trestbps", // 3: resting blood pressure (mm Hg)
    "chol",     // 4: serum cholesterol (mg/dl)
    "fbs",      // 5: fasting blood sugar > 120 mg/dl
    "restecg",  // 6: resting ECG result
    "thalach",  // 7: max heart rate achieved
    "exang",    // 8: exercise induced angina
    "oldpeak",  // 9: ST depression induced by exercise
    "slope",    // 10: slope of peak exercise ST segment
    "ca",       // 11: number of major vessels colored by fluoroscopy
    "thal",     // 12: 3 = normal, 6 = fixed defect, 7 = reversible defect
];

/// Total number of features
/// IMPORTANT: Must match FEATURE_LAYOUT.len()!
pub const FEATURE_COUNT: usize = 13;

// ============================================================================
// FIELD DOMAINS
// ============================================================================

/// Allowed values for one position of the vector
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldDomain {
    /// Whole numbers in `min..=max`
    IntRange { min: i64, max: i64 },
    /// Decimals in `min..=max` on a `step` grid anchored at `min`
    FloatRange { min: f64, max: f64, step: f64 },
    /// One of an enumerated set of codes
    Choice { options: &'static [i64] },
}

const STEP_TOLERANCE: f64 = 1e-6;

impl FieldDomain {
    /// Check whether `value` may be submitted for this field
    pub fn contains(&self, value: f64) -> bool {
        if !value.is_finite() {
            return false;
        }

        match *self {
            FieldDomain::IntRange { min, max } => {
                value.fract() == 0.0 && value >= min as f64 && value <= max as f64
            }
            FieldDomain::FloatRange { min, max, step } => {
                if value < min || value > max {
                    return false;
                }
                let steps = (value - min) / step;
                (steps - steps.round()).abs() < STEP_TOLERANCE
            }
            FieldDomain::Choice { options } => {
                value.fract() == 0.0 && options.contains(&(value as i64))
            }
        }
    }

    /// Smallest allowed value (the widget default)
    pub fn min_value(&self) -> f64 {
        match *self {
            FieldDomain::IntRange { min, .. } => min as f64,
            FieldDomain::FloatRange { min, .. } => min,
            FieldDomain::Choice { options } => options.first().copied().unwrap_or(0) as f64,
        }
    }

    /// Largest allowed value
    pub fn max_value(&self) -> f64 {
        match *self {
            FieldDomain::IntRange { max, .. } => max as f64,
            FieldDomain::FloatRange { max, .. } => max,
            FieldDomain::Choice { options } => options.last().copied().unwrap_or(0) as f64,
        }
    }
}

impl std::fmt::Display for FieldDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldDomain::IntRange { min, max } => write!(f, "integer {}-{}", min, max),
            FieldDomain::FloatRange { min, max, step } => {
                write!(f, "{:.1}-{:.1} in steps of {}", min, max, step)
            }
            FieldDomain::Choice { options } => {
                let codes: Vec<String> = options.iter().map(|o| o.to_string()).collect();
                write!(f, "one of {{{}}}", codes.join(","))
            }
        }
    }
}

/// Name, label and domain of one input field
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub domain: FieldDomain,
}

/// Field specifications, in vector order
pub static FIELD_SPECS: [FieldSpec; FEATURE_COUNT] = [
    FieldSpec {
        name: "age",
        label: "Age",
        domain: FieldDomain::IntRange { min: 1, max: 120 },
    },
    FieldSpec {
        name: "sex",
        label: "Sex (0 = Female, 1 = Male)",
        domain: FieldDomain::Choice { options: &[0, 1] },
    },
    FieldSpec {
        name: "cp",
        label: "Chest Pain Type (0-3)",
        domain: FieldDomain::Choice { options: &[0, 1, 2, 3] },
    },
    FieldSpec {
        name: "trestbps",
        label: "Resting Blood Pressure (mm Hg)",
        domain: FieldDomain::IntRange { min: 50, max: 250 },
    },
    FieldSpec {
        name: "chol",
        label: "Cholesterol (mg/dl)",
        domain: FieldDomain::IntRange { min: 100, max: 600 },
    },
    FieldSpec {
        name: "fbs",
        label: "Fasting Blood Sugar > 120 mg/dl (1 = Yes, 0 = No)",
        domain: FieldDomain::Choice { options: &[0, 1] },
    },
    FieldSpec {
        name: "restecg",
        label: "Resting ECG Results (0-2)",
        domain: FieldDomain::Choice { options: &[0, 1, 2] },
    },
    FieldSpec {
        name: "thalach",
        label: "Max Heart Rate Achieved",
        domain: FieldDomain::IntRange { min: 50, max: 250 },
    },
    FieldSpec {
        name: "exang",
        label: "Exercise Induced Angina (1 = Yes, 0 = No)",
        domain: FieldDomain::Choice { options: &[0, 1] },
    },
    FieldSpec {
        name: "oldpeak",
        label: "ST Depression (Oldpeak)",
        domain: FieldDomain::FloatRange { min: 0.0, max: 10.0, step: 0.1 },
    },
    FieldSpec {
        name: "slope",
        label: "Slope of Peak Exercise ST (0-2)",
        domain: FieldDomain::Choice { options: &[0, 1, 2] },
    },
    FieldSpec {
        name: "ca",
        label: "Number of Major Vessels (0-3)",
        domain: FieldDomain::Choice { options: &[0, 1, 2, 3] },
    },
    FieldSpec {
        name: "thal",
        label: "Thal (3 = Normal, 6 = Fixed Defect, 7 = Reversible Defect)",
        domain: FieldDomain::Choice { options: &[3, 6, 7] },
    },
];

// ============================================================================
// LAYOUT HASH
// ============================================================================

/// CRC32 over the layout version and the ordered feature names
pub fn layout_hash() -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(&[FEATURE_VERSION]);
    for name in FEATURE_LAYOUT {
        hasher.update(name.as_bytes());
        hasher.update(&[0]);
    }
    hasher.finalize()
}

// ============================================================================
// LAYOUT INFO
// ============================================================================

/// Complete layout information for serialization/logging
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutInfo {
    pub version: u8,
    pub hash: u32,
    pub feature_count: usize,
    pub feature_names: Vec<String>,
}

impl LayoutInfo {
    pub fn current() -> Self {
        Self {
            version: FEATURE_VERSION,
            hash: layout_hash(),
            feature_count: FEATURE_COUNT,
            feature_names: FEATURE_LAYOUT.iter().map(|s| s.to_string()).collect(),
        }
    }
}

// ============================================================================
// FEATURE INDEX LOOKUP
// ============================================================================

/// Get feature index by name
pub fn feature_index(name: &str) -> Option<usize> {
    FEATURE_LAYOUT.iter().position(|&n| n == name)
}

/// Get feature name by index
pub fn feature_name(index: usize) -> Option<&'static str> {
    FEATURE_LAYOUT.get(index).copied()
}

/// Get field spec by name
pub fn field_spec(name: &str) -> Option<&'static FieldSpec> {
    feature_index(name).map(|i| &FIELD_SPECS[i])
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_count() {
        assert_eq!(FEATURE_COUNT, 13);
        assert_eq!(FEATURE_LAYOUT.len(), FEATURE_COUNT);
        assert_eq!(FIELD_SPECS.len(), FEATURE_COUNT);
    }

    #[test]
    fn test_specs_follow_layout_order() {
        for (i, spec) in FIELD_SPECS.iter().enumerate() {
            assert_eq!(spec.name, FEATURE_LAYOUT[i], "spec {} out of order", i);
        }
    }

    #[test]
    fn test_layout_hash_consistency() {
        assert_eq!(layout_hash(), layout_hash());
        assert_ne!(layout_hash(), 0);
    }

    #[test]
    fn test_feature_index() {
        assert_eq!(feature_index("age"), Some(0));
        assert_eq!(feature_index("oldpeak"), Some(9));
        assert_eq!(feature_index("thal"), Some(12));
        assert_eq!(feature_index("nonexistent"), None);
    }

    #[test]
    fn test_feature_name() {
        assert_eq!(feature_name(0), Some("age"));
        assert_eq!(feature_name(12), Some("thal"));
        assert_eq!(feature_name(13), None);
    }

    #[test]
    fn test_int_range_domain() {
        let age = field_spec("age").unwrap().domain;
        assert!(age.contains(1.0));
        assert!(age.contains(120.0));
        assert!(!age.contains(0.0));
        assert!(!age.contains(121.0));
        assert!(!age.contains(40.5));
    }

    #[test]
    fn test_float_range_domain_respects_step() {
        let oldpeak = field_spec("oldpeak").unwrap().domain;
        assert!(oldpeak.contains(0.0));
        assert!(oldpeak.contains(2.3));
        assert!(oldpeak.contains(10.0));
        assert!(!oldpeak.contains(1.25));
        assert!(!oldpeak.contains(10.1));
        assert!(!oldpeak.contains(-0.1));
        assert!(!oldpeak.contains(f64::NAN));
    }

    #[test]
    fn test_float_range_bounds_are_exact() {
        let oldpeak = field_spec("oldpeak").unwrap().domain;
        assert!(!oldpeak.contains(10.00000005));
        assert!(!oldpeak.contains(-0.00000005));
        // Float noise inside the range still lands on the grid
        assert!(oldpeak.contains(0.1 + 0.2));
        assert!(oldpeak.contains(9.9));
    }

    #[test]
    fn test_choice_domain() {
        let thal = field_spec("thal").unwrap().domain;
        assert!(thal.contains(3.0));
        assert!(thal.contains(6.0));
        assert!(thal.contains(7.0));
        assert!(!thal.contains(4.0));
        assert!(!thal.contains(0.0));
        assert_eq!(thal.min_value(), 3.0);
        assert_eq!(thal.max_value(), 7.0);
    }

    #[test]
    fn test_domain_display() {
        assert_eq!(FIELD_SPECS[0].domain.to_string(), "integer 1-120");
        assert_eq!(FIELD_SPECS[12].domain.to_string(), "one of {3,6,7}");
    }

    #[test]
    fn test_layout_info() {
        let info = LayoutInfo::current();
        assert_eq!(info.version, FEATURE_VERSION);
        assert_eq!(info.feature_count, FEATURE_COUNT);
        assert_eq!(info.feature_names[9], "oldpeak");
    }
}

//! Integration Tests for the Feature Layout and Vector Assembly
//!
//! Exercises the form-side record against the layout at its boundaries.

#[cfg(test)]
mod integration_tests {
    use crate::features::{ClinicalFeatures, FEATURE_COUNT, FEATURE_LAYOUT, FIELD_SPECS};

    fn lower_bound() -> ClinicalFeatures {
        ClinicalFeatures {
            age: 1,
            sex: 0,
            cp: 0,
            trestbps: 50,
            chol: 100,
            fbs: 0,
            restecg: 0,
            thalach: 50,
            exang: 0,
            oldpeak: 0.0,
            slope: 0,
            ca: 0,
            thal: 3,
        }
    }

    fn upper_bound() -> ClinicalFeatures {
        ClinicalFeatures {
            age: 120,
            sex: 1,
            cp: 3,
            trestbps: 250,
            chol: 600,
            fbs: 1,
            restecg: 2,
            thalach: 250,
            exang: 1,
            oldpeak: 10.0,
            slope: 2,
            ca: 3,
            thal: 7,
        }
    }

    /// Lower-bound submission becomes the exact expected vector
    #[test]
    fn test_lower_bound_vector() {
        let features = lower_bound();
        assert!(features.validate().is_ok());

        let vector = features.to_vector();
        assert_eq!(
            vector.as_array(),
            &[1.0, 0.0, 0.0, 50.0, 100.0, 0.0, 0.0, 50.0, 0.0, 0.0, 0.0, 0.0, 3.0]
        );
    }

    /// Upper-bound submission is accepted and kept in order
    #[test]
    fn test_upper_bound_vector() {
        let features = upper_bound();
        assert!(features.validate().is_ok());

        let vector = features.to_vector();
        assert_eq!(
            vector.as_array(),
            &[120.0, 1.0, 3.0, 250.0, 600.0, 1.0, 2.0, 250.0, 1.0, 10.0, 2.0, 3.0, 7.0]
        );
    }

    /// Every position of the vector matches the field of the same name
    #[test]
    fn test_vector_order_matches_layout() {
        let vector = upper_bound().to_vector();
        assert_eq!(vector.as_slice().len(), FEATURE_COUNT);

        for (i, name) in FEATURE_LAYOUT.iter().enumerate() {
            assert_eq!(vector.get(i), vector.get_by_name(name));
        }
    }

    /// Domain maximum of every field validates; one past it does not
    #[test]
    fn test_each_field_rejects_past_maximum() {
        for spec in FIELD_SPECS.iter() {
            assert!(spec.domain.contains(spec.domain.max_value()), "{} max", spec.name);
            assert!(!spec.domain.contains(spec.domain.max_value() + 1.0), "{} max+1", spec.name);
            assert!(!spec.domain.contains(spec.domain.min_value() - 1.0), "{} min-1", spec.name);
        }
    }

    /// Vectors from a grid of valid inputs always have 13 elements
    #[test]
    fn test_valid_grid_has_fixed_length() {
        for age in [1, 45, 120] {
            for thal in [3, 6, 7] {
                for oldpeak in [0.0, 1.4, 10.0] {
                    let features = ClinicalFeatures {
                        age,
                        thal,
                        oldpeak,
                        ..lower_bound()
                    };
                    assert!(features.validate().is_ok());
                    assert_eq!(features.to_vector().as_slice().len(), 13);
                }
            }
        }
    }
}

//! Features Module - Clinical Feature Layout & Vector
//!
//! Owns the 13-position schema shared by the form and the classifier.

pub mod layout;
pub mod vector;

#[cfg(test)]
mod tests;

// Re-export common types
pub use layout::{
    feature_index, feature_name, field_spec, layout_hash, FieldDomain, FieldSpec, LayoutInfo,
    FEATURE_COUNT, FEATURE_LAYOUT, FEATURE_VERSION, FIELD_SPECS,
};
pub use vector::{ClinicalFeatures, DomainError, FeatureVector};

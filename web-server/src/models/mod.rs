//! Request/response models

pub mod form;
pub mod prediction;

pub use form::FormValues;
pub use prediction::{ModelInfoResponse, PredictResponse};

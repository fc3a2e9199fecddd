//! ONNX Classifier - ONNX Runtime backend
//!
//! Runs a binary classifier exported to ONNX (e.g. skl2onnx). Input is a
//! `[1, 13]` f32 tensor; the label is read from the `label` output, or the
//! first output when no output carries that name.

use ndarray::Array2;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Value;
use parking_lot::Mutex;

use super::artifact::ArtifactError;
use super::inference::{check_shape, Classifier, InferenceError};
use crate::features::FEATURE_COUNT;

const LABEL_OUTPUT: &str = "label";

pub struct OnnxClassifier {
    // `Session::run` needs exclusive access
    session: Mutex<Session>,
    label_output: String,
}

impl OnnxClassifier {
    /// Build a session from the artifact bytes
    pub fn from_bytes(model_bytes: &[u8]) -> Result<Self, ArtifactError> {
        log::info!("Loading ONNX model from memory ({} bytes)", model_bytes.len());

        let session = Session::builder()
            .map_err(|e| ArtifactError::Backend(format!("Session builder error: {}", e)))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| ArtifactError::Backend(format!("Optimization error: {}", e)))?
            .commit_from_memory(model_bytes)
            .map_err(|e| ArtifactError::Backend(format!("Load from memory error: {}", e)))?;

        if session.inputs.len() != 1 {
            return Err(ArtifactError::SchemaMismatch(format!(
                "expected one model input, found {}",
                session.inputs.len()
            )));
        }

        let label_output = session
            .outputs
            .iter()
            .find(|o| o.name == LABEL_OUTPUT)
            .or_else(|| session.outputs.first())
            .map(|o| o.name.clone())
            .ok_or_else(|| ArtifactError::SchemaMismatch("No output defined".to_string()))?;

        log::info!("ONNX model loaded, reading labels from output '{}'", label_output);

        Ok(Self {
            session: Mutex::new(session),
            label_output,
        })
    }
}

impl Classifier for OnnxClassifier {
    fn predict(&self, features: &[f64]) -> Result<i64, InferenceError> {
        check_shape(FEATURE_COUNT, features)?;

        let input_data: Vec<f32> = features.iter().map(|&v| v as f32).collect();
        let input_array = Array2::<f32>::from_shape_vec((1, FEATURE_COUNT), input_data)
            .map_err(|e| InferenceError::Backend(format!("Array error: {}", e)))?;

        let input_tensor = Value::from_array(input_array)
            .map_err(|e| InferenceError::Backend(format!("Tensor error: {}", e)))?;

        let mut session = self.session.lock();
        let outputs = session
            .run(ort::inputs![input_tensor])
            .map_err(|e| InferenceError::Backend(format!("Inference failed: {}", e)))?;

        let output = outputs
            .get(&self.label_output)
            .ok_or_else(|| InferenceError::Backend("No output".to_string()))?;

        let (_, labels) = output
            .try_extract_tensor::<i64>()
            .map_err(|e| InferenceError::Backend(format!("Extract error: {}", e)))?;

        labels
            .first()
            .copied()
            .ok_or_else(|| InferenceError::Backend("Empty label tensor".to_string()))
    }

    fn feature_count(&self) -> usize {
        FEATURE_COUNT
    }

    fn method(&self) -> &'static str {
        "onnx"
    }
}

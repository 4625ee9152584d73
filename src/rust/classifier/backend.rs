use std::collections::HashMap;
use std::fmt;

use ndarray::Array4;
use ort::session::Session;
use ort::value::{Tensor, ValueType};

use super::error::ClassifierError;
use super::preprocess::InputSize;

/// A forward pass over a single-image batch.
///
/// The classifier only needs two things from a model: the input size it was
/// exported with, and the raw output scores for one normalized image. The
/// ONNX Runtime session is the production implementation; anything else that
/// can produce one score per label (a test double, another runtime) fits too.
pub trait InferenceBackend: Send + Sync + fmt::Debug {
    /// The image size and layout the model expects
    fn input_size(&self) -> InputSize;

    /// Runs the model and returns the raw output scores, one per class.
    ///
    /// # Errors
    /// - `ShapeError` if `input` does not match [`Self::input_size`]
    /// - `ModelError` if the model fails to run or its output cannot be read
    fn forward(&self, input: &Array4<f32>) -> Result<Vec<f32>, ClassifierError>;
}

/// An image classification model loaded into ONNX Runtime.
///
/// The model is expected to:
/// - Accept one float input of rank 4 with fixed spatial dimensions
/// - Output class scores of shape `[1, num_classes]`
#[derive(Debug)]
pub struct OnnxBackend {
    session: Session,
    input_name: String,
    input_size: InputSize,
}

impl OnnxBackend {
    /// Wraps a committed session after checking its input/output structure.
    ///
    /// # Errors
    /// - `ModelError` if the model does not have exactly one input
    /// - `ModelError` if the model has no outputs
    /// - `ShapeError` if the input is not a fixed-size rank-4 tensor
    pub fn new(session: Session) -> Result<Self, ClassifierError> {
        let inputs = &session.inputs;
        if inputs.len() != 1 {
            return Err(ClassifierError::ModelError(format!(
                "Model must have exactly 1 image input, found {}",
                inputs.len()
            )));
        }
        if session.outputs.is_empty() {
            return Err(ClassifierError::ModelError(
                "Model must have at least 1 output for class scores".to_string(),
            ));
        }

        let input = &inputs[0];
        let dims = match &input.input_type {
            ValueType::Tensor { dimensions, .. } => dimensions.clone(),
            other => {
                return Err(ClassifierError::ModelError(format!(
                    "Model input '{}' is not a tensor: {:?}",
                    input.name, other
                )))
            }
        };
        let input_size = InputSize::from_shape(&dims)?;
        let input_name = input.name.clone();

        Ok(Self {
            session,
            input_name,
            input_size,
        })
    }
}

impl InferenceBackend for OnnxBackend {
    fn input_size(&self) -> InputSize {
        self.input_size
    }

    fn forward(&self, input: &Array4<f32>) -> Result<Vec<f32>, ClassifierError> {
        let expected = self.input_size.batch_shape();
        if input.shape() != expected {
            return Err(ClassifierError::ShapeError(format!(
                "Input shape {:?} does not match model input {:?}",
                input.shape(),
                expected
            )));
        }

        let input_dyn = input.view().into_dyn();
        let pixels = input_dyn.as_standard_layout();

        let mut input_tensors = HashMap::new();
        input_tensors.insert(
            self.input_name.as_str(),
            Tensor::from_array(&pixels).map_err(|e| {
                ClassifierError::ModelError(format!("Failed to create input tensor: {}", e))
            })?,
        );

        let outputs = self
            .session
            .run(input_tensors)
            .map_err(|e| ClassifierError::ModelError(format!("Failed to run model: {}", e)))?;
        let scores = outputs[0].try_extract_tensor::<f32>().map_err(|e| {
            ClassifierError::ModelError(format!("Failed to extract output tensor: {}", e))
        })?;

        Ok(scores.iter().cloned().collect())
    }
}

use std::sync::Arc;

use log::warn;
use ndarray::Array4;

use super::backend::InferenceBackend;
use super::error::ClassifierError;
use super::labels::LabelList;
use super::model::{ClassifierInfo, Prediction};
use super::preprocess::{normalize, InputSize};
use super::utils::{argmax, softmax};

/// A thread-safe image classifier: an inference backend plus the ordered
/// label list that names its outputs.
///
/// # Thread Safety
///
/// The backend and labels are immutable after construction and held in
/// `Arc`s, so one classifier can be shared by every message handler:
///
/// ```no_run
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use bytesight::{ImageClassifier, LabelList};
/// use std::sync::Arc;
///
/// let classifier = Arc::new(
///     ImageClassifier::builder()
///         .with_model_file("converted_keras/keras_model.onnx")?
///         .with_labels(LabelList::load_or_default("converted_keras/labels.txt"))
///         .build()?,
/// );
///
/// let bytes = std::fs::read("gpu.jpg")?;
/// let shared = Arc::clone(&classifier);
/// std::thread::spawn(move || shared.predict_bytes(&bytes));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ImageClassifier {
    pub model_path: String,
    backend: Arc<dyn InferenceBackend>,
    labels: Arc<LabelList>,
}

// Compile-time verification of thread-safety
const _: () = {
    fn assert_send_sync<T: Send + Sync>() {}
    fn verify_thread_safety() {
        assert_send_sync::<ImageClassifier>();
    }
};

impl ImageClassifier {
    /// Creates a new ImageClassifierBuilder for fluent construction
    pub fn builder() -> super::builder::ImageClassifierBuilder {
        super::builder::ImageClassifierBuilder::new()
    }

    /// Wraps an already constructed backend.
    pub fn from_backend(
        model_path: impl Into<String>,
        backend: Arc<dyn InferenceBackend>,
        labels: LabelList,
    ) -> Self {
        Self {
            model_path: model_path.into(),
            backend,
            labels: Arc::new(labels),
        }
    }

    pub fn input_size(&self) -> InputSize {
        self.backend.input_size()
    }

    pub fn labels(&self) -> &LabelList {
        &self.labels
    }

    pub fn info(&self) -> ClassifierInfo {
        ClassifierInfo {
            model_path: self.model_path.clone(),
            num_classes: self.labels.len(),
            class_labels: self.labels.iter().map(str::to_string).collect(),
            input_size: self.input_size(),
        }
    }

    /// Runs inference on a normalized image batch and returns the top label.
    ///
    /// # Errors
    /// - Forwards `ShapeError` and `ModelError` from the backend
    /// - `PredictionError` if the model produced no scores, a NaN or infinite
    ///   score, or the top index has no label
    pub fn try_predict(&self, input: &Array4<f32>) -> Result<Prediction, ClassifierError> {
        let logits = self.backend.forward(input)?;
        let probabilities = softmax(&logits).ok_or_else(|| {
            ClassifierError::PredictionError(format!(
                "Model produced non-finite class scores: {:?}",
                logits
            ))
        })?;

        let (index, confidence) = argmax(&probabilities).ok_or_else(|| {
            ClassifierError::PredictionError("Model produced no class scores".into())
        })?;
        let label = self.labels.get(index).ok_or_else(|| {
            ClassifierError::PredictionError(format!(
                "Output index {} has no label ({} labels loaded)",
                index,
                self.labels.len()
            ))
        })?;

        Ok(Prediction {
            label: label.to_string(),
            confidence,
        })
    }

    /// Like [`Self::try_predict`], but a failure is logged and reported as
    /// `None` so callers can answer with a soft "could not process" reply.
    pub fn predict(&self, input: &Array4<f32>) -> Option<Prediction> {
        match self.try_predict(input) {
            Ok(prediction) => Some(prediction),
            Err(e) => {
                warn!("Could not classify image: {}", e);
                None
            }
        }
    }

    /// Decodes and normalizes raw image bytes, then classifies them.
    pub fn predict_bytes(&self, bytes: &[u8]) -> Option<Prediction> {
        match normalize(bytes, self.input_size()) {
            Ok(input) => self.predict(&input),
            Err(e) => {
                warn!("Could not process image: {}", e);
                None
            }
        }
    }
}

use std::path::Path;
use std::sync::Arc;

use log::{error, info, warn};

use super::backend::{InferenceBackend, OnnxBackend};
use super::classifier::ImageClassifier;
use super::error::ClassifierError;
use super::labels::LabelList;
use crate::runtime::{create_session_builder, RuntimeConfig};

/// A builder for constructing an ImageClassifier with a fluent interface.
#[derive(Default, Debug)]
pub struct ImageClassifierBuilder {
    model_path: Option<String>,
    backend: Option<Arc<dyn InferenceBackend>>,
    labels: Option<LabelList>,
    runtime_config: RuntimeConfig,
}

impl ImageClassifierBuilder {
    /// Creates a new empty builder with the default runtime configuration
    ///
    /// # Example
    /// ```
    /// use bytesight::ImageClassifierBuilder;
    ///
    /// let builder = ImageClassifierBuilder::new();
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the runtime configuration for ONNX model execution.
    ///
    /// Must be called before [`Self::with_model_file`] to take effect.
    pub fn with_runtime_config(mut self, config: RuntimeConfig) -> Self {
        self.runtime_config = config;
        self
    }

    /// Loads an ONNX image classification model from disk.
    ///
    /// # Returns
    /// * `Result<Self, ClassifierError>` - The builder instance if successful, or an error if:
    ///   - The path is empty or a model is already set
    ///   - The file doesn't exist
    ///   - ONNX Runtime cannot load the file
    ///   - The model structure is invalid
    ///
    /// # Example
    /// ```no_run
    /// use bytesight::ImageClassifierBuilder;
    ///
    /// let builder = ImageClassifierBuilder::new()
    ///     .with_model_file("converted_keras/keras_model.onnx");
    /// ```
    pub fn with_model_file<P: AsRef<Path>>(mut self, model_path: P) -> Result<Self, ClassifierError> {
        let model_path = model_path.as_ref();
        if model_path.as_os_str().is_empty() {
            return Err(ClassifierError::BuildError("Model path cannot be empty".to_string()));
        }
        if self.backend.is_some() {
            return Err(ClassifierError::BuildError("Model already set".to_string()));
        }
        if !model_path.exists() {
            return Err(ClassifierError::BuildError(format!(
                "Model file not found: {}",
                model_path.display()
            )));
        }

        let session = create_session_builder(&self.runtime_config)?
            .commit_from_file(model_path)
            .map_err(|e| {
                error!("Failed to load model from {}: {}", model_path.display(), e);
                ClassifierError::BuildError(format!("Failed to load model: {}", e))
            })?;

        let backend = OnnxBackend::new(session)?;
        info!(
            "Model structure validated successfully (input {:?})",
            backend.input_size()
        );

        self.model_path = Some(model_path.to_string_lossy().to_string());
        self.backend = Some(Arc::new(backend));
        Ok(self)
    }

    /// Uses an already constructed inference backend instead of a model file.
    pub fn with_backend(mut self, backend: Arc<dyn InferenceBackend>) -> Result<Self, ClassifierError> {
        if self.backend.is_some() {
            return Err(ClassifierError::BuildError("Model already set".to_string()));
        }
        self.model_path = Some("<in-memory>".to_string());
        self.backend = Some(backend);
        Ok(self)
    }

    /// Sets the label list naming the model outputs. Defaults to
    /// [`LabelList::default`] when never called.
    pub fn with_labels(mut self, labels: LabelList) -> Self {
        self.labels = Some(labels);
        self
    }

    /// Builds and returns the final ImageClassifier instance
    ///
    /// # Returns
    /// * `Result<ImageClassifier, ClassifierError>` - an error if no model has been set
    pub fn build(self) -> Result<ImageClassifier, ClassifierError> {
        let backend = self
            .backend
            .ok_or_else(|| ClassifierError::BuildError("Model must be set".to_string()))?;
        let model_path = self.model_path.unwrap_or_default();
        let labels = self.labels.unwrap_or_default();
        if labels.is_empty() {
            warn!("Classifier built with an empty label list; every prediction will fail");
        }

        Ok(ImageClassifier::from_backend(model_path, backend, labels))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_without_model_fails() {
        let result = ImageClassifierBuilder::new()
            .with_labels(LabelList::default())
            .build();
        assert!(matches!(result, Err(ClassifierError::BuildError(_))));
    }

    #[test]
    fn test_missing_model_file() {
        let result = ImageClassifierBuilder::new().with_model_file("/nonexistent/keras_model.onnx");
        assert!(matches!(result, Err(ClassifierError::BuildError(msg)) if msg.contains("not found")));
    }

    #[test]
    fn test_empty_model_path() {
        assert!(ImageClassifierBuilder::new().with_model_file("").is_err());
    }

    #[test]
    fn test_corrupt_model_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("keras_model.onnx");
        std::fs::write(&path, b"not an onnx graph").unwrap();
        assert!(ImageClassifierBuilder::new().with_model_file(&path).is_err());
    }
}

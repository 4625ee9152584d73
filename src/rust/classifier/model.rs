use std::fmt;

use super::preprocess::InputSize;

/// The top class for one image and its softmax probability.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub label: String,
    /// Probability in `[0, 1]`
    pub confidence: f32,
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2})", self.label, self.confidence)
    }
}

/// Summary of a loaded classifier, logged at startup.
#[derive(Debug, Clone)]
pub struct ClassifierInfo {
    pub model_path: String,
    pub num_classes: usize,
    pub class_labels: Vec<String>,
    pub input_size: InputSize,
}

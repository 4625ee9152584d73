mod backend;
mod builder;
mod classifier;
mod error;
pub mod labels;
mod model;
pub mod preprocess;
mod utils;

pub use backend::{InferenceBackend, OnnxBackend};
pub use builder::ImageClassifierBuilder;
pub use classifier::ImageClassifier;
pub use error::ClassifierError;
pub use labels::{LabelList, DEFAULT_LABELS};
pub use model::{ClassifierInfo, Prediction};
pub use preprocess::{normalize, InputSize, TensorLayout};

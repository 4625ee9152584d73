//! A Discord bot that recognises PC hardware parts in photos.
//!
//! Users send `$predict` with an image attached (or `$net_predict <url>`),
//! the image is normalized and run through an ONNX image classifier, and the
//! bot replies with the predicted part and its confidence. `$info <part>`
//! answers from a small static knowledge base that understands English and
//! Turkish part names.
//!
//! # Basic Usage
//!
//! ```no_run
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use bytesight::{BotConfig, BotContext, Dispatcher, ImageClassifier, IncomingMessage, LabelList};
//! use std::sync::Arc;
//!
//! let config = BotConfig::from_env()?;
//! let classifier = ImageClassifier::builder()
//!     .with_model_file(config.model_path())?
//!     .with_labels(LabelList::load_or_default(config.labels_path()))
//!     .build()?;
//!
//! let dispatcher = Dispatcher::new(BotContext::new(Arc::new(classifier), &config.prefix));
//! let message = IncomingMessage {
//!     content: "$info ekran kartı".into(),
//!     ..Default::default()
//! };
//! for reply in dispatcher.handle(&message).await.unwrap_or_default() {
//!     println!("{}", reply);
//! }
//! # Ok(())
//! # }
//! ```

pub mod bot;
pub mod classifier;
pub mod config;
pub mod knowledge;
mod runtime;

pub use bot::{Attachment, BotContext, Command, Dispatcher, FetchError, ImageFetcher, IncomingMessage};
pub use classifier::{
    ClassifierError, ClassifierInfo, ImageClassifier, ImageClassifierBuilder, InferenceBackend,
    InputSize, LabelList, OnnxBackend, Prediction, TensorLayout,
};
pub use config::{BotConfig, ConfigError};
pub use knowledge::{Category, KnowledgeBase};
pub use runtime::{create_session_builder, RuntimeConfig};

/// Initialises `env_logger`, showing `info` and above unless `RUST_LOG` says otherwise.
pub fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

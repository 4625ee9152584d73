use std::sync::Arc;

use log::{debug, error};

use crate::classifier::{ImageClassifier, Prediction};
use crate::knowledge::KnowledgeBase;

use super::commands::{self, Command};
use super::fetch::{FetchError, ImageFetcher};
use super::replies;

/// A file attached to a chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub filename: String,
    /// MIME type declared by the platform, if any
    pub content_type: Option<String>,
    /// Where the file bytes can be downloaded from
    pub url: String,
}

impl Attachment {
    pub fn is_image(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|ct| ct.starts_with("image/"))
    }
}

/// An inbound chat message, already unpacked by the platform adapter.
#[derive(Debug, Clone, Default)]
pub struct IncomingMessage {
    pub content: String,
    pub attachments: Vec<Attachment>,
    /// Display name of the bot's own user, used in greetings
    pub bot_name: String,
}

/// Everything the handlers read. Built once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct BotContext {
    pub classifier: Arc<ImageClassifier>,
    pub knowledge: KnowledgeBase,
    pub fetcher: ImageFetcher,
    pub prefix: String,
}

impl BotContext {
    pub fn new(classifier: Arc<ImageClassifier>, prefix: impl Into<String>) -> Self {
        Self {
            classifier,
            knowledge: KnowledgeBase::new(),
            fetcher: ImageFetcher::new(),
            prefix: prefix.into(),
        }
    }
}

/// Routes command messages to their handlers.
///
/// Each call is independent: the dispatcher keeps no per-user or
/// per-channel state, and every outcome (including failures) is returned as
/// reply text.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    context: BotContext,
}

impl Dispatcher {
    pub fn new(context: BotContext) -> Self {
        Self { context }
    }

    /// Handles one message. Returns `None` when the message is not a known
    /// command, otherwise the replies to send in order.
    pub async fn handle(&self, message: &IncomingMessage) -> Option<Vec<String>> {
        let parsed = commands::parse(&message.content, &self.context.prefix)?;
        debug!("Dispatching {:?} (args: {:?})", parsed.command, parsed.args);

        let out = match parsed.command {
            Command::Hello => vec![replies::hello(&message.bot_name)],
            Command::EasterEgg => vec![replies::easter_egg(&message.bot_name)],
            Command::Help => vec![replies::help(&self.context.prefix)],
            Command::Predict => self.predict(&message.attachments).await,
            Command::NetPredict => match parsed.args.split_whitespace().next() {
                Some(url) => vec![self.net_predict(url).await],
                None => vec![replies::usage(&self.context.prefix, Command::NetPredict)],
            },
            Command::Info if parsed.args.is_empty() => {
                vec![replies::usage(&self.context.prefix, Command::Info)]
            }
            Command::Info => vec![self.info(parsed.args)],
        };
        Some(out)
    }

    /// One reply per attachment, or a single guidance reply when there are none.
    pub async fn predict(&self, attachments: &[Attachment]) -> Vec<String> {
        if attachments.is_empty() {
            return vec![replies::NO_ATTACHMENT.to_string()];
        }

        let mut out = Vec::with_capacity(attachments.len());
        for attachment in attachments {
            if !attachment.is_image() {
                out.push(replies::NOT_AN_IMAGE.to_string());
                continue;
            }
            let reply = match self.context.fetcher.fetch(&attachment.url).await {
                Ok(bytes) => match self.classify(bytes).await {
                    Some(prediction) => replies::attachment_prediction(&prediction),
                    None => replies::ATTACHMENT_FAILED.to_string(),
                },
                Err(e) => {
                    error!("Could not read attachment {}: {}", attachment.filename, e);
                    replies::ATTACHMENT_FAILED.to_string()
                }
            };
            out.push(reply);
        }
        out
    }

    pub async fn net_predict(&self, url: &str) -> String {
        match self.context.fetcher.fetch(url).await {
            Ok(bytes) => match self.classify(bytes).await {
                Some(prediction) => replies::remote_prediction(&prediction),
                None => replies::REMOTE_IMAGE_FAILED.to_string(),
            },
            Err(FetchError::Status(status)) => replies::bad_status(status),
            Err(FetchError::Connect(e)) => replies::connect_failed(&e.to_string()),
            Err(FetchError::Request(e)) => replies::request_failed(&e.to_string()),
        }
    }

    pub fn info(&self, query: &str) -> String {
        let knowledge = &self.context.knowledge;
        let key = knowledge.resolve(query);
        match knowledge.lookup(&key) {
            Some(text) => text.to_string(),
            None => replies::info_not_found(query, knowledge),
        }
    }

    // Decoding and inference are CPU bound; keep them off the async workers.
    async fn classify(&self, bytes: Vec<u8>) -> Option<Prediction> {
        let classifier = Arc::clone(&self.context.classifier);
        match tokio::task::spawn_blocking(move || classifier.predict_bytes(&bytes)).await {
            Ok(prediction) => {
                if let Some(p) = &prediction {
                    debug!("Predicted {}", p);
                }
                prediction
            }
            Err(e) => {
                error!("Inference task failed: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attachment(content_type: Option<&str>) -> Attachment {
        Attachment {
            filename: "x".into(),
            content_type: content_type.map(str::to_string),
            url: "http://localhost/x".into(),
        }
    }

    #[test]
    fn test_image_detection_uses_declared_type() {
        assert!(attachment(Some("image/png")).is_image());
        assert!(attachment(Some("image/jpeg; charset=binary")).is_image());
        assert!(!attachment(Some("application/pdf")).is_image());
        assert!(!attachment(None).is_image());
    }
}

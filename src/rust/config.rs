use std::env;
use std::path::PathBuf;

use log::warn;

/// Environment variable naming the directory holding the model and labels.
pub const MODEL_DIR_VAR: &str = "MODEL_BASE_DIRECTORY";
/// Environment variable holding the Discord bot token.
pub const TOKEN_VAR: &str = "DISCORD_BOT_TOKEN";

/// Used when [`MODEL_DIR_VAR`] is unset; relative to the working directory.
pub const DEFAULT_MODEL_DIR: &str = "converted_keras";
pub const MODEL_FILE_NAME: &str = "keras_model.onnx";
pub const LABELS_FILE_NAME: &str = "labels.txt";
pub const DEFAULT_PREFIX: &str = "$";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("DISCORD_BOT_TOKEN environment variable not set")]
    MissingToken,
    #[error("DISCORD_BOT_TOKEN environment variable is empty")]
    EmptyToken,
    #[error("Command prefix cannot be empty")]
    EmptyPrefix,
}

/// Deployment settings read once at startup.
#[derive(Clone)]
pub struct BotConfig {
    pub model_dir: PathBuf,
    pub token: String,
    pub prefix: String,
}

// Keeps the token out of logs.
impl std::fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BotConfig")
            .field("model_dir", &self.model_dir)
            .field("token", &"<redacted>")
            .field("prefix", &self.prefix)
            .finish()
    }
}

impl BotConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Reads the configuration through `lookup`, which returns the value of
    /// an environment variable by name.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let model_dir = match lookup(MODEL_DIR_VAR) {
            Some(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
            _ => {
                warn!("{} environment variable not set.", MODEL_DIR_VAR);
                warn!(
                    "Falling back to the relative path '{}'. Make sure the model folder is in the working directory.",
                    DEFAULT_MODEL_DIR
                );
                PathBuf::from(DEFAULT_MODEL_DIR)
            }
        };

        let token = lookup(TOKEN_VAR).ok_or(ConfigError::MissingToken)?;
        let token = token.trim().to_string();
        if token.is_empty() {
            return Err(ConfigError::EmptyToken);
        }

        Ok(Self {
            model_dir,
            token,
            prefix: DEFAULT_PREFIX.to_string(),
        })
    }

    pub fn with_model_dir(mut self, model_dir: impl Into<PathBuf>) -> Self {
        self.model_dir = model_dir.into();
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Result<Self, ConfigError> {
        let prefix = prefix.into();
        if prefix.is_empty() {
            return Err(ConfigError::EmptyPrefix);
        }
        self.prefix = prefix;
        Ok(self)
    }

    pub fn model_path(&self) -> PathBuf {
        self.model_dir.join(MODEL_FILE_NAME)
    }

    pub fn labels_path(&self) -> PathBuf {
        self.model_dir.join(LABELS_FILE_NAME)
    }
}

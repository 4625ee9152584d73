//! Chat command handling: parsing, per-command handlers, reply texts and the
//! Discord gateway adapter.

pub mod commands;
pub mod discord;
mod dispatcher;
mod fetch;
pub mod replies;

pub use commands::{Command, ParsedCommand};
pub use dispatcher::{Attachment, BotContext, Dispatcher, IncomingMessage};
pub use fetch::{FetchError, ImageFetcher};

use std::sync::Arc;

use log::{error, info};
use serenity::async_trait;
use serenity::model::channel::Message;
use serenity::model::gateway::Ready;
use serenity::prelude::*;

use super::dispatcher::{Attachment, Dispatcher, IncomingMessage};

/// Gateway intents needed to read command messages in guilds and DMs.
pub fn intents() -> GatewayIntents {
    GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
}

/// Bridges serenity gateway events to the [`Dispatcher`].
pub struct Handler {
    dispatcher: Arc<Dispatcher>,
}

impl Handler {
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }
}

/// Unpacks a gateway message for the dispatcher. Messages from bot accounts
/// (including our own replies) yield `None`.
fn incoming(msg: &Message, bot_name: String) -> Option<IncomingMessage> {
    if msg.author.bot {
        return None;
    }
    Some(IncomingMessage {
        content: msg.content.clone(),
        attachments: msg
            .attachments
            .iter()
            .map(|a| Attachment {
                filename: a.filename.clone(),
                content_type: a.content_type.clone(),
                url: a.url.clone(),
            })
            .collect(),
        bot_name,
    })
}

#[async_trait]
impl EventHandler for Handler {
    async fn message(&self, ctx: Context, msg: Message) {
        let bot_name = ctx.cache.current_user().name.clone();
        let Some(message) = incoming(&msg, bot_name) else {
            return;
        };
        let Some(replies) = self.dispatcher.handle(&message).await else {
            return;
        };

        for reply in replies {
            if let Err(e) = msg.channel_id.say(&ctx.http, reply).await {
                error!("Failed to send reply in channel {}: {}", msg.channel_id, e);
            }
        }
    }

    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!("Logged in as {}", ready.user.name);
    }
}

/// Connects to Discord and serves commands until the gateway shuts down.
pub async fn run(token: &str, dispatcher: Dispatcher) -> Result<(), serenity::Error> {
    let mut client = Client::builder(token, intents())
        .event_handler(Handler::new(Arc::new(dispatcher)))
        .await?;
    client.start().await
}

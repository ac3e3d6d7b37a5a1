use teloxide::prelude::*;
use teloxide::types::{ParseMode, ReplyMarkup};
use tracing::error;

/// Outbound message delivery. Failures are logged and reported through the
/// return value, never raised. No retry at this layer.
#[derive(Clone)]
pub struct Notifier {
    bot: Bot,
}

impl Notifier {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }

    pub async fn send(&self, chat: ChatId, text: &str, keyboard: Option<ReplyMarkup>) -> bool {
        let mut request = self
            .bot
            .send_message(chat, text)
            .parse_mode(ParseMode::Html);
        if let Some(markup) = keyboard {
            request = request.reply_markup(markup);
        }

        match request.await {
            Ok(_) => true,
            Err(e) => {
                error!("Failed to deliver message to chat {}: {}", chat, e);
                false
            }
        }
    }
}

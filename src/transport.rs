use anyhow::Result;
use async_trait::async_trait;
use teloxide::prelude::*;

/// Delivery transport port. The router and the daily notifier fan out
/// through this trait rather than through a concrete client, so tests can
/// substitute a recording transport.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send a plain-text message to one recipient. May fail per recipient.
    async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<()>;
}

/// The production transport, backed by the Telegram Bot API.
pub struct TelegramTransport {
    bot: Bot,
}

impl TelegramTransport {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Transport for TelegramTransport {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<()> {
        self.bot.send_message(chat_id, text).await?;
        Ok(())
    }
}

/// Send the same text individually to every recipient and return the number
/// of successful sends. A failed send is logged and does not stop the
/// remaining sends; there is no retry.
pub async fn fan_out(transport: &dyn Transport, recipients: &[ChatId], text: &str) -> usize {
    let mut sent = 0;
    for &chat_id in recipients {
        match transport.send_text(chat_id, text).await {
            Ok(()) => sent += 1,
            Err(e) => tracing::warn!("Failed to send to {}: {}", chat_id.0, e),
        }
    }
    sent
}

use teloxide::prelude::*;

use crate::bot::handlers::BotDeps;
use crate::subscribers::SubscriberRegistry;
use crate::transport::{fan_out, Transport};
use crate::utils::logging::{log_command_success, log_unauthorized};

const ANNOUNCEMENT_PREFIX: &str = "📢 ANNOUNCEMENT:\n";
const UNAUTHORIZED_REPLY: &str = "❌ You are not authorized to use this command.";
const USAGE_REPLY: &str = "Usage: /broadcast <your message>";

/// Outcome of a broadcast attempt, decided before any reply is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BroadcastOutcome {
    /// Sender is not the admin; nothing was sent to anyone.
    Unauthorized,
    /// Admin supplied no announcement text; nothing was sent.
    MissingText,
    /// Fan-out ran; carries the number of successful sends.
    Sent(usize),
}

/// Authorize, validate, and fan out an announcement.
///
/// Only the fixed admin chat may broadcast. The announcement prefix is
/// prepended to the text and each subscriber gets an individual send; a
/// per-recipient failure is swallowed by the fan-out and only lowers the
/// success count.
pub async fn run_broadcast(
    transport: &dyn Transport,
    registry: &SubscriberRegistry,
    sender: ChatId,
    admin: ChatId,
    text: &str,
) -> BroadcastOutcome {
    if sender != admin {
        return BroadcastOutcome::Unauthorized;
    }

    let text = text.trim();
    if text.is_empty() {
        return BroadcastOutcome::MissingText;
    }

    let message = format!("{}{}", ANNOUNCEMENT_PREFIX, text);
    let sent = fan_out(transport, &registry.snapshot(), &message).await;
    BroadcastOutcome::Sent(sent)
}

pub async fn handle_broadcast(
    bot: Bot,
    msg: Message,
    text: String,
    deps: &BotDeps,
) -> ResponseResult<()> {
    let sender = msg.chat.id;
    let outcome = run_broadcast(
        deps.transport.as_ref(),
        &deps.registry,
        sender,
        deps.admin_chat_id,
        &text,
    )
    .await;

    match outcome {
        BroadcastOutcome::Unauthorized => {
            log_unauthorized("broadcast", sender.0);
            bot.send_message(sender, UNAUTHORIZED_REPLY).await?;
        }
        BroadcastOutcome::MissingText => {
            bot.send_message(sender, USAGE_REPLY).await?;
        }
        BroadcastOutcome::Sent(count) => {
            log_command_success(
                "broadcast",
                sender.0,
                Some(&format!("sent to {} of {} subscribers", count, deps.registry.len())),
            );
            bot.send_message(sender, format!("✅ Sent to {} users.", count))
                .await?;
        }
    }

    Ok(())
}

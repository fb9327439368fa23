use teloxide::prelude::*;

use super::BotDeps;
use crate::bot::commands::{broadcast, Command};
use crate::utils::logging::{log_command_start, log_command_success};

const ONBOARDING_REPLY: &str = "Hello! 👋\n\
    Type a day name (e.g., Monday) to get that day's timetable.\n\
    Type 'My timetable' to see the full week's schedule.\n\
    You'll also get your daily timetable automatically at 8:00 AM.";

pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
    deps: BotDeps,
) -> ResponseResult<()> {
    match cmd {
        Command::Start => {
            log_command_start("start", msg.chat.id.0);
            deps.registry.subscribe(msg.chat.id);
            bot.send_message(msg.chat.id, ONBOARDING_REPLY).await?;
            log_command_success(
                "start",
                msg.chat.id.0,
                Some(&format!("{} subscribers", deps.registry.len())),
            );
        }
        Command::Broadcast { text } => {
            log_command_start("broadcast", msg.chat.id.0);
            broadcast::handle_broadcast(bot, msg, text, &deps).await?;
        }
    }
    Ok(())
}

pub mod broadcast;

use teloxide::utils::command::{BotCommands, ParseError};

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "Timetable bot commands:")]
pub enum Command {
    #[command(description = "Subscribe to the timetable and daily reminders")]
    Start,
    #[command(
        description = "Send an announcement to all subscribers (admin only)",
        parse_with = parse_rest
    )]
    Broadcast { text: String },
}

// Accepts an empty argument so that a bare `/broadcast` still reaches the
// handler, which replies with usage instructions.
fn parse_rest(input: String) -> Result<(String,), ParseError> {
    Ok((input,))
}

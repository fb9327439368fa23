use teloxide::utils::command::BotCommands;
use timetable_bot::bot::commands::Command;

#[test]
fn test_start_command_parsing() {
    let result = Command::parse("/start", "testbot");
    assert!(result.is_ok());
    assert!(matches!(result.unwrap(), Command::Start));
}

#[test]
fn test_broadcast_command_keeps_full_text() {
    let result = Command::parse("/broadcast Exam moved to Friday", "testbot");
    assert!(result.is_ok());
    match result.unwrap() {
        Command::Broadcast { text } => assert_eq!(text.trim(), "Exam moved to Friday"),
        _ => panic!("Expected Broadcast command"),
    }
}

#[test]
fn test_broadcast_command_without_text_still_parses() {
    // A bare /broadcast must reach the handler so it can reply with usage
    // instructions instead of being silently dropped.
    let result = Command::parse("/broadcast", "testbot");
    assert!(result.is_ok());
    match result.unwrap() {
        Command::Broadcast { text } => assert!(text.trim().is_empty()),
        _ => panic!("Expected Broadcast command"),
    }
}

#[test]
fn test_unknown_command_is_not_parsed() {
    assert!(Command::parse("/unsubscribe", "testbot").is_err());
    assert!(Command::parse("/help", "testbot").is_err());
}

#[test]
fn test_plain_text_is_not_a_command() {
    assert!(Command::parse("monday", "testbot").is_err());
    assert!(Command::parse("My timetable", "testbot").is_err());
}

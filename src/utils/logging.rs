use tracing::{info, warn};

/// Logs command start with consistent format
pub fn log_command_start(command: &str, chat_id: i64) {
    info!("CMD_START: {} in chat {}", command, chat_id);
}

/// Logs command completion with consistent format
pub fn log_command_success(command: &str, chat_id: i64, details: Option<&str>) {
    match details {
        Some(d) => info!("CMD_SUCCESS: {} in chat {} - {}", command, chat_id, d),
        None => info!("CMD_SUCCESS: {} in chat {}", command, chat_id),
    }
}

/// Logs rejected admin-only commands with consistent format
pub fn log_unauthorized(command: &str, chat_id: i64) {
    warn!("UNAUTHORIZED: {} attempted by chat {}", command, chat_id);
}

/// Logs system events with consistent format
pub fn log_system_event(event: &str, details: Option<&str>) {
    match details {
        Some(d) => info!("SYSTEM: {} - {}", event, d),
        None => info!("SYSTEM: {}", event),
    }
}

use teloxide::prelude::*;

use super::BotDeps;
use crate::timetable::TimetableStore;
use crate::utils::text::normalize_day_candidate;

const NOT_FOUND_REPLY: &str = "❌ No timetable found for that day.";
const FULL_WEEK_QUERY: &str = "my timetable";

/// Build the reply for a plain-text message: the full week for
/// "my timetable" (case-insensitive), otherwise a single-day lookup against
/// the capitalized day-name candidate. Returns an empty string only when the
/// full-week view has nothing to show.
pub fn build_reply(store: &TimetableStore, text: &str) -> String {
    if text.trim().to_lowercase() == FULL_WEEK_QUERY {
        let mut reply = String::new();
        for day in store.days_in_file_order() {
            reply.push_str(&format!("📅 {}:\n{}\n\n", day, store.format_day_block(day)));
        }
        return reply.trim_end().to_string();
    }

    let day = normalize_day_candidate(text);
    if store.rows_for_day(&day).is_empty() {
        NOT_FOUND_REPLY.to_string()
    } else {
        format!("📅 Timetable for {}:\n{}", day, store.format_day_block(&day))
    }
}

pub async fn handle_day_query(bot: Bot, msg: Message, deps: BotDeps) -> ResponseResult<()> {
    if let Some(text) = msg.text() {
        tracing::debug!("Timetable query from chat {}: {:?}", msg.chat.id.0, text);
        let reply = build_reply(&deps.store, text);
        if !reply.is_empty() {
            bot.send_message(msg.chat.id, reply).await?;
        }
    }
    Ok(())
}

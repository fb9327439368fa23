pub mod day_query;
pub mod message;

use std::sync::Arc;
use teloxide::{dispatching::UpdateHandler, prelude::*};

use crate::subscribers::SubscriberRegistry;
use crate::timetable::TimetableStore;
use crate::transport::Transport;

/// Everything a handler needs, shared by the command and plain-text branches.
#[derive(Clone)]
pub struct BotDeps {
    pub store: Arc<TimetableStore>,
    pub registry: SubscriberRegistry,
    pub transport: Arc<dyn Transport>,
    pub admin_chat_id: ChatId,
}

pub struct BotHandler {
    pub deps: BotDeps,
}

impl BotHandler {
    pub fn new(deps: BotDeps) -> Self {
        Self { deps }
    }

    /// Dispatch schema: commands first, then plain text. Non-text updates and
    /// unknown commands fall through without a handler.
    pub fn schema(&self) -> UpdateHandler<teloxide::RequestError> {
        let command_deps = self.deps.clone();
        let query_deps = self.deps.clone();

        Update::filter_message()
            .branch(
                dptree::entry()
                    .filter_command::<crate::bot::commands::Command>()
                    .endpoint(move |bot, msg, cmd| {
                        let deps = command_deps.clone();
                        async move { message::command_handler(bot, msg, cmd, deps).await }
                    }),
            )
            .branch(
                dptree::filter(|msg: Message| {
                    msg.text().map(|text| !text.starts_with('/')).unwrap_or(false)
                })
                .endpoint(move |bot, msg| {
                    let deps = query_deps.clone();
                    async move { day_query::handle_day_query(bot, msg, deps).await }
                }),
            )
    }
}

use anyhow::anyhow;
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Mutex;
use teloxide::types::ChatId;
use timetable_bot::transport::Transport;

/// Test transport that records every send attempt and can be told to fail
/// delivery for specific recipients.
#[derive(Default)]
pub struct RecordingTransport {
    pub attempts: Mutex<Vec<ChatId>>,
    pub delivered: Mutex<Vec<(ChatId, String)>>,
    pub fail_for: HashSet<ChatId>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_for(chat_ids: impl IntoIterator<Item = ChatId>) -> Self {
        Self {
            fail_for: chat_ids.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn attempt_count(&self) -> usize {
        self.attempts.lock().unwrap().len()
    }

    pub fn delivered_messages(&self) -> Vec<(ChatId, String)> {
        self.delivered.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> anyhow::Result<()> {
        self.attempts.lock().unwrap().push(chat_id);
        if self.fail_for.contains(&chat_id) {
            return Err(anyhow!("delivery refused for chat {}", chat_id.0));
        }
        self.delivered
            .lock()
            .unwrap()
            .push((chat_id, text.to_string()));
        Ok(())
    }
}

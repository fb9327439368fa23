use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};
use teloxide::types::ChatId;

/// In-memory set of subscribed chats.
///
/// Membership is append-only for the lifetime of the process: `/start`
/// subscribes a chat, nothing unsubscribes it, and the set is discarded on
/// shutdown. Cloning shares the underlying set, so the router, the daily
/// notifier, and the health endpoint all observe the same subscribers.
#[derive(Debug, Clone, Default)]
pub struct SubscriberRegistry {
    inner: Arc<Mutex<HashSet<ChatId>>>,
}

impl SubscriberRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn guard(&self) -> MutexGuard<'_, HashSet<ChatId>> {
        // Inserts cannot leave the set in a torn state, so a poisoned lock
        // is safe to recover.
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Add a chat to the registry. Idempotent; re-subscribing is a no-op.
    pub fn subscribe(&self, chat_id: ChatId) {
        self.guard().insert(chat_id);
    }

    /// Best-effort copy of the current membership, used by fan-outs.
    pub fn snapshot(&self) -> Vec<ChatId> {
        self.guard().iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.guard().len()
    }

    pub fn is_empty(&self) -> bool {
        self.guard().is_empty()
    }
}

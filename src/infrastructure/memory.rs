use crate::domain::message::OutgoingEmail;
use crate::domain::ports::MessageSender;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory sink for composed emails.
///
/// Uses `Arc<RwLock<Vec<OutgoingEmail>>>` to allow shared concurrent
/// access: clones observe the same mailbox, so a test can keep one clone
/// and box the other as the desk's sender. Nothing leaves the process.
#[derive(Default, Clone)]
pub struct MemoryMailbox {
    messages: Arc<RwLock<Vec<OutgoingEmail>>>,
}

impl MemoryMailbox {
    /// Creates a new, empty mailbox.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every message sent so far, in order.
    pub async fn sent(&self) -> Vec<OutgoingEmail> {
        self.messages.read().await.clone()
    }
}

#[async_trait]
impl MessageSender for MemoryMailbox {
    async fn send(&self, email: OutgoingEmail) -> Result<()> {
        let mut messages = self.messages.write().await;
        messages.push(email);
        Ok(())
    }
}

use super::message::OutgoingEmail;
use crate::error::Result;
use async_trait::async_trait;

/// Outbound side of the order desk.
///
/// Implementations own delivery entirely (retries, confirmation, where
/// the message actually goes); the desk's responsibility ends once
/// `send` returns.
#[async_trait]
pub trait MessageSender: Send + Sync {
    async fn send(&self, email: OutgoingEmail) -> Result<()>;
}

pub type MessageSenderBox = Box<dyn MessageSender>;

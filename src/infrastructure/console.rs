use crate::domain::message::OutgoingEmail;
use crate::domain::ports::MessageSender;
use crate::error::Result;
use async_trait::async_trait;

/// Prints composed emails to stdout.
///
/// Stands in for handing the message off to a mail client; nothing is
/// actually delivered.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleMailer;

impl ConsoleMailer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl MessageSender for ConsoleMailer {
    async fn send(&self, email: OutgoingEmail) -> Result<()> {
        println!("To      : {}", email.to);
        println!("Subject : {}", email.subject);
        println!();
        println!("{}", email.body);
        Ok(())
    }
}

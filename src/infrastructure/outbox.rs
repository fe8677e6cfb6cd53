use crate::domain::message::OutgoingEmail;
use crate::domain::ports::MessageSender;
use crate::error::Result;
use async_trait::async_trait;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Appends each composed email to a file, one JSON object per line.
///
/// The file is created on first use and only ever appended to, so an
/// external mail agent can tail it.
pub struct JsonlOutbox {
    path: PathBuf,
}

impl JsonlOutbox {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl MessageSender for JsonlOutbox {
    async fn send(&self, email: OutgoingEmail) -> Result<()> {
        let line = serde_json::to_string(&email)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", line)?;
        tracing::debug!(path = %self.path.display(), "Appended order email to outbox");
        Ok(())
    }
}

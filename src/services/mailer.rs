// Outbox mailer
//
// Mail transport is not part of this crate. Messages are appended to a
// per-recipient mailbox file `<outbox>/<recipient>.eml` in a plain
// RFC-822 shape, which a relay (or a human) can pick up later.

use super::traits::Mailer;
use crate::error::{Result, SeamsError};
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::io::AsyncWriteExt;

/// Subject line used for every outgoing message
pub const MAIL_SUBJECT: &str = "Revenue";

/// Mailer that appends messages to files in an outbox directory
pub struct OutboxMailer {
    outbox: PathBuf,
    from: String,
}

impl OutboxMailer {
    pub fn new(outbox: PathBuf, from: impl Into<String>) -> Self {
        Self {
            outbox,
            from: from.into(),
        }
    }

    fn mailbox_path(&self, to: &str) -> Result<PathBuf> {
        let valid = to.contains('@')
            && !to.starts_with('@')
            && !to.ends_with('@')
            && !to.chars().any(|c| c.is_whitespace() || c == '/' || c == '\\');
        if !valid {
            return Err(SeamsError::MailError(format!("Invalid recipient: {:?}", to)));
        }
        Ok(self.outbox.join(format!("{}.eml", to)))
    }

    fn render(&self, to: &str, body: &str) -> String {
        format!(
            "From: {}\r\nTo: {}\r\nSubject: {}\r\n\r\n{}\r\n",
            self.from, to, MAIL_SUBJECT, body
        )
    }
}

#[async_trait]
impl Mailer for OutboxMailer {
    async fn send(&self, to: &str, body: &str) -> Result<()> {
        let path = self.mailbox_path(to)?;
        let message = self.render(to, body);

        tokio::fs::create_dir_all(&self.outbox).await.map_err(|e| {
            SeamsError::MailError(format!("Failed to create outbox {:?}: {}", self.outbox, e))
        })?;

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await
            .map_err(|e| SeamsError::MailError(format!("Failed to open {:?}: {}", path, e)))?;

        file.write_all(message.as_bytes())
            .await
            .map_err(|e| SeamsError::MailError(format!("Failed to write {:?}: {}", path, e)))?;
        file.flush()
            .await
            .map_err(|e| SeamsError::MailError(format!("Failed to flush {:?}: {}", path, e)))?;

        tracing::info!("Queued mail for {}", to);
        Ok(())
    }
}

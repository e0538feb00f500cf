use async_trait::async_trait;

use super::{MailError, MailMessage, Mailer};

/// Writes notifications to the log instead of sending them
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, message: &MailMessage) -> Result<(), MailError> {
        tracing::info!(
            subject = %message.subject,
            reply_to = message.reply_to.as_deref().unwrap_or("-"),
            "Mail not sent (no relay configured):\n{}",
            message.text
        );
        Ok(())
    }
}

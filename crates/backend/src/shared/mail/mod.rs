//! Outgoing notification mail

pub mod http_relay;
pub mod log_mailer;

#[cfg(test)]
pub mod recording;

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use crate::shared::config::MailConfig;

pub use http_relay::HttpRelayMailer;
pub use log_mailer::LogMailer;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("mail relay unreachable: {0}")]
    Network(String),

    #[error("mail relay rejected the message (HTTP {status}): {body}")]
    Rejected { status: u16, body: String },
}

/// A message to the sales inbox
#[derive(Debug, Clone, PartialEq)]
pub struct MailMessage {
    pub subject: String,
    pub html: String,
    pub text: String,
    /// Customer address, so staff can answer directly
    pub reply_to: Option<String>,
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, message: &MailMessage) -> Result<(), MailError>;
}

/// Relay mailer when a relay is configured, otherwise one that only logs
pub fn from_config(config: &MailConfig) -> anyhow::Result<Arc<dyn Mailer>> {
    match config.relay_url.as_deref().map(str::trim) {
        Some(url) if !url.is_empty() => {
            tracing::info!("Mail relay: {}", url);
            Ok(Arc::new(HttpRelayMailer::new(url, config)?))
        }
        _ => {
            tracing::warn!("No mail relay configured; notifications are written to the log only");
            Ok(Arc::new(LogMailer))
        }
    }
}

/// HTML-escape user supplied text
pub fn escape(value: &str) -> String {
    ammonia::clean_text(value)
}

/// Escaped text with line breaks kept
pub fn escape_multiline(value: &str) -> String {
    value
        .lines()
        .map(escape)
        .collect::<Vec<_>>()
        .join("<br>")
}

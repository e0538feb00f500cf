//! Mail delivery through an HTTP mail API (Resend-style JSON endpoint)

use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

use super::{MailError, MailMessage, Mailer};
use crate::shared::config::MailConfig;

pub struct HttpRelayMailer {
    client: reqwest::Client,
    url: String,
    api_key: String,
    from: String,
    to: String,
}

#[derive(Serialize)]
struct RelayPayload<'a> {
    from: &'a str,
    to: [&'a str; 1],
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<&'a str>,
    subject: &'a str,
    html: &'a str,
    text: &'a str,
}

impl HttpRelayMailer {
    pub fn new(url: &str, config: &MailConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            url: url.to_string(),
            api_key: config.api_key.trim().to_string(),
            from: config.from.clone(),
            to: config.to.clone(),
        })
    }
}

#[async_trait]
impl Mailer for HttpRelayMailer {
    async fn send(&self, message: &MailMessage) -> Result<(), MailError> {
        let payload = RelayPayload {
            from: &self.from,
            to: [&self.to],
            reply_to: message.reply_to.as_deref(),
            subject: &message.subject,
            html: &message.html,
            text: &message.text,
        };

        let mut request = self.client.post(&self.url).json(&payload);
        if !self.api_key.is_empty() {
            request = request.bearer_auth(&self.api_key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| MailError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MailError::Rejected {
                status: status.as_u16(),
                body,
            });
        }
        tracing::info!(subject = %message.subject, "Notification mail sent");
        Ok(())
    }
}

use contracts::domain::a006_contact::ContactRequest;
use contracts::shared::validation::FieldErrors;
use thiserror::Error;

use crate::shared::mail::{escape, escape_multiline, MailError, MailMessage, Mailer};

pub const REQUIRED_FIELDS_MESSAGE: &str = "Name, email and message are required.";
pub const SEND_FAILED_MESSAGE: &str = "Failed to send message. Please try again later.";

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("invalid contact request: {0}")]
    Invalid(FieldErrors),

    #[error(transparent)]
    Mail(#[from] MailError),
}

fn build_mail(request: &ContactRequest) -> MailMessage {
    let reason = request.reason_or_default();
    let phone = request.phone.as_deref().unwrap_or("-");
    let text = format!(
        "Name: {}\nEmail: {}\nPhone: {}\nReason: {}\n\nMessage:\n{}\n",
        request.name,
        request.email,
        phone,
        reason.label(),
        request.message
    );
    let html = format!(
        "<h2>New contact form message</h2>\
         <p><strong>Name:</strong> {}<br><strong>Email:</strong> {}<br>\
         <strong>Phone:</strong> {}<br><strong>Reason:</strong> {}</p>\
         <p>{}</p>",
        escape(&request.name),
        escape(&request.email),
        escape(phone),
        escape(reason.label()),
        escape_multiline(&request.message)
    );
    MailMessage {
        subject: request.mail_subject(),
        html,
        text,
        reply_to: Some(request.email.clone()),
    }
}

/// Validate a contact form message and forward it to the sales inbox
pub async fn send(mailer: &dyn Mailer, request: ContactRequest) -> Result<(), ContactError> {
    let request = ContactRequest {
        name: request.name.trim().to_string(),
        email: request.email.trim().to_string(),
        ..request
    };
    request.check().map_err(ContactError::Invalid)?;

    mailer.send(&build_mail(&request)).await?;
    tracing::info!(reason = request.reason_or_default().as_str(), "Contact message forwarded");
    Ok(())
}

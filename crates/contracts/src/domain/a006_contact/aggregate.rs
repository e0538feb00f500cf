use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::common::text::non_blank;
use crate::shared::validation::{not_blank, FieldErrors};

// ============================================================================
// Reason
// ============================================================================

/// Why the customer is getting in touch. Unknown values are carried through
/// as `Other` so older clients keep working.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ContactReason {
    #[default]
    General,
    Pricing,
    Account,
    Order,
    Delivery,
    Catalogue,
    Paslode,
    FireRated,
    Other(String),
}

impl ContactReason {
    /// Reasons offered in the contact form, in display order
    pub const OPTIONS: [ContactReason; 8] = [
        ContactReason::General,
        ContactReason::Pricing,
        ContactReason::Account,
        ContactReason::Order,
        ContactReason::Delivery,
        ContactReason::Catalogue,
        ContactReason::Paslode,
        ContactReason::FireRated,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            ContactReason::General => "general",
            ContactReason::Pricing => "pricing",
            ContactReason::Account => "account",
            ContactReason::Order => "order",
            ContactReason::Delivery => "delivery",
            ContactReason::Catalogue => "catalogue",
            ContactReason::Paslode => "paslode",
            ContactReason::FireRated => "fire-rated",
            ContactReason::Other(s) => s.as_str(),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            ContactReason::General => "General enquiry",
            ContactReason::Pricing => "Pricing / quote",
            ContactReason::Account => "Trade account",
            ContactReason::Order => "Existing order",
            ContactReason::Delivery => "Delivery / collection",
            ContactReason::Catalogue => "Catalogue / product query",
            ContactReason::Paslode => "Paslode repair / training",
            ContactReason::FireRated => "Fire-rated products",
            ContactReason::Other(s) => s.as_str(),
        }
    }
}

impl From<String> for ContactReason {
    fn from(value: String) -> Self {
        match value.trim().to_lowercase().as_str() {
            "" | "general" => ContactReason::General,
            "pricing" => ContactReason::Pricing,
            "account" => ContactReason::Account,
            "order" => ContactReason::Order,
            "delivery" => ContactReason::Delivery,
            "catalogue" => ContactReason::Catalogue,
            "paslode" => ContactReason::Paslode,
            "fire-rated" => ContactReason::FireRated,
            _ => ContactReason::Other(value.trim().to_string()),
        }
    }
}

impl From<ContactReason> for String {
    fn from(reason: ContactReason) -> Self {
        reason.as_str().to_string()
    }
}

// ============================================================================
// Wire request / response
// ============================================================================

/// Body of `POST /api/contact`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ContactRequest {
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Please enter your name."))]
    pub name: String,
    #[serde(default)]
    #[validate(
        custom(function = "not_blank", message = "Please enter your email."),
        email(message = "Please enter a valid email address.")
    )]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<ContactReason>,
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Please enter a message."))]
    pub message: String,
}

impl ContactRequest {
    pub fn check(&self) -> Result<(), FieldErrors> {
        self.validate().map_err(FieldErrors::from)
    }

    /// Explicit subject when given, otherwise one derived from reason and name
    pub fn mail_subject(&self) -> String {
        match non_blank(self.subject.clone()) {
            Some(subject) => subject,
            None => format!(
                "New {} enquiry from {}",
                self.reason_or_default().as_str(),
                self.name.trim()
            ),
        }
    }

    pub fn reason_or_default(&self) -> ContactReason {
        self.reason.clone().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ContactResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }
}

// ============================================================================
// Client form state
// ============================================================================

fn must_agree(value: &bool) -> Result<(), ValidationError> {
    if *value {
        Ok(())
    } else {
        Err(ValidationError::new("agree"))
    }
}

/// Contact form as edited in the browser, including the privacy-notice
/// checkbox that never leaves the client
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct ContactForm {
    #[validate(custom(function = "not_blank", message = "Please enter your name."))]
    pub name: String,
    #[validate(
        custom(function = "not_blank", message = "Please enter your email."),
        email(message = "Please enter a valid email address.")
    )]
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub reason: ContactReason,
    #[validate(custom(function = "not_blank", message = "Please enter a message."))]
    pub message: String,
    #[validate(custom(function = "must_agree", message = "You must agree to the privacy notice."))]
    pub agree: bool,
}

impl ContactForm {
    pub fn check(&self) -> Result<(), FieldErrors> {
        self.validate().map_err(FieldErrors::from)
    }

    pub fn to_request(&self) -> ContactRequest {
        ContactRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: non_blank(Some(self.phone.clone())),
            subject: non_blank(Some(self.subject.clone())),
            reason: Some(self.reason.clone()),
            message: self.message.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> ContactRequest {
        ContactRequest {
            name: "Jo".into(),
            email: "jo@example.com".into(),
            phone: None,
            subject: None,
            reason: None,
            message: "Do you stock M10 anchors?".into(),
        }
    }

    #[test]
    fn test_required_fields() {
        assert!(request().check().is_ok());
        let errors = ContactRequest {
            name: "".into(),
            email: "".into(),
            message: " ".into(),
            ..request()
        }
        .check()
        .unwrap_err();
        assert!(errors.contains("name"));
        assert!(errors.contains("email"));
        assert!(errors.contains("message"));
    }

    #[test]
    fn test_mail_subject() {
        assert_eq!(request().mail_subject(), "New general enquiry from Jo");
        let with_reason = ContactRequest {
            reason: Some(ContactReason::Pricing),
            ..request()
        };
        assert_eq!(with_reason.mail_subject(), "New pricing enquiry from Jo");
        let explicit = ContactRequest {
            subject: Some("  Quote for site  ".into()),
            ..request()
        };
        assert_eq!(explicit.mail_subject(), "Quote for site");
    }

    #[test]
    fn test_reason_wire_format() {
        let r: ContactRequest = serde_json::from_str(
            r#"{"name":"Jo","email":"jo@example.com","reason":"fire-rated","message":"Hi"}"#,
        )
        .unwrap();
        assert_eq!(r.reason, Some(ContactReason::FireRated));

        let other: ContactReason = serde_json::from_str(r#""warranty""#).unwrap();
        assert_eq!(other, ContactReason::Other("warranty".into()));
        assert_eq!(serde_json::to_string(&other).unwrap(), r#""warranty""#);
    }

    #[test]
    fn test_form_requires_agreement() {
        let form = ContactForm {
            name: "Jo".into(),
            email: "jo@example.com".into(),
            message: "Hello".into(),
            ..Default::default()
        };
        let errors = form.check().unwrap_err();
        assert!(errors.contains("agree"));
        assert_eq!(errors.len(), 1);

        let agreed = ContactForm { agree: true, ..form };
        assert!(agreed.check().is_ok());
        let req = agreed.to_request();
        assert_eq!(req.phone, None);
        assert_eq!(req.reason, Some(ContactReason::General));
    }
}

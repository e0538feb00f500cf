use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;
use validator::Validate;

use crate::domain::a003_product::{ProductId, ProductRef, Variant, VariantId};
use crate::domain::common::text::non_blank;
use crate::shared::validation::{not_blank, FieldErrors};

// ============================================================================
// Line items
// ============================================================================

/// Uniqueness key of a cart line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineKey {
    pub product_id: ProductId,
    pub variant_id: VariantId,
}

/// One (product, variant, quantity) entry of the enquiry cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnquiryLineItem {
    pub product: ProductRef,
    pub variant: Variant,
    pub quantity: u32,
}

impl EnquiryLineItem {
    pub fn key(&self) -> LineKey {
        LineKey {
            product_id: self.product.id,
            variant_id: self.variant.id,
        }
    }
}

// ============================================================================
// Customer
// ============================================================================

/// Contact details collected when the enquiry is sent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct CustomerDetails {
    #[validate(custom(function = "not_blank", message = "Please enter your name."))]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[validate(
        custom(function = "not_blank", message = "Please enter your email."),
        email(message = "Please enter a valid email address.")
    )]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl CustomerDetails {
    /// Trim text fields and drop empty optionals
    pub fn normalized(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            company: non_blank(self.company.clone()),
            email: self.email.trim().to_string(),
            phone: non_blank(self.phone.clone()),
        }
    }

    pub fn check(&self) -> Result<(), FieldErrors> {
        self.validate().map_err(FieldErrors::from)
    }
}

// ============================================================================
// Wire payload
// ============================================================================

/// Identity-only line of a submitted enquiry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnquiryItemDto {
    pub product_id: ProductId,
    pub variant_id: VariantId,
    pub quantity: u32,
}

/// Body of `POST /api/enquiries`. Carries identities and quantities only,
/// the receiving side looks up current product data itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnquirySubmission {
    pub customer: CustomerDetails,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub items: Vec<EnquiryItemDto>,
}

impl EnquirySubmission {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if let Err(customer) = self.customer.check() {
            errors.merge_scoped("customer", customer);
        }
        if self.items.is_empty() {
            errors.insert("items", "Add at least one product to your enquiry.");
        }
        for (index, item) in self.items.iter().enumerate() {
            if item.quantity == 0 {
                errors.insert(format!("items.{}.quantity", index), "Quantity must be at least 1.");
            }
        }
        errors.into_result()
    }
}

/// Acknowledgement returned for an accepted enquiry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnquiryReceipt {
    pub reference: Uuid,
    pub received_at: DateTime<Utc>,
    /// Whether the notification mail went out
    #[serde(default)]
    pub notified: bool,
}

/// Failure of an enquiry or contact submission as seen by the client
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmissionError {
    #[error("could not reach the server: {0}")]
    Network(String),

    #[error("the server rejected the submission (HTTP {status})")]
    Rejected { status: u16, message: Option<String> },

    #[error("please correct the highlighted fields")]
    Invalid(FieldErrors),
}

impl SubmissionError {
    /// Message suitable for the retry banner
    pub fn user_message(&self) -> String {
        match self {
            SubmissionError::Network(_) => {
                "We couldn't send your enquiry. Please check your connection and try again."
                    .to_string()
            }
            SubmissionError::Rejected {
                message: Some(message),
                ..
            } => message.clone(),
            SubmissionError::Rejected { .. } => {
                "Something went wrong sending your enquiry. Please try again.".to_string()
            }
            SubmissionError::Invalid(_) => "Please correct the highlighted fields.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer() -> CustomerDetails {
        CustomerDetails {
            name: "Jo Builder".into(),
            company: None,
            email: "jo@example.com".into(),
            phone: None,
        }
    }

    #[test]
    fn test_customer_requires_name_and_valid_email() {
        assert!(customer().check().is_ok());

        let errors = CustomerDetails {
            name: "  ".into(),
            email: "not-an-email".into(),
            ..customer()
        }
        .check()
        .unwrap_err();
        assert!(errors.contains("name"));
        assert!(errors.contains("email"));
    }

    #[test]
    fn test_normalized_drops_blank_optionals() {
        let c = CustomerDetails {
            name: " Jo ".into(),
            company: Some("   ".into()),
            email: " jo@example.com ".into(),
            phone: Some(" 0141 000 0000 ".into()),
        }
        .normalized();
        assert_eq!(c.name, "Jo");
        assert_eq!(c.company, None);
        assert_eq!(c.email, "jo@example.com");
        assert_eq!(c.phone.as_deref(), Some("0141 000 0000"));
    }

    #[test]
    fn test_submission_validation() {
        let empty = EnquirySubmission {
            customer: customer(),
            message: None,
            items: vec![],
        };
        assert!(empty.validate().unwrap_err().contains("items"));

        let zero = EnquirySubmission {
            customer: customer(),
            message: None,
            items: vec![EnquiryItemDto {
                product_id: ProductId(7),
                variant_id: VariantId(1),
                quantity: 0,
            }],
        };
        assert!(zero.validate().unwrap_err().contains("items.0.quantity"));
    }

    #[test]
    fn test_wire_shape() {
        let body = EnquirySubmission {
            customer: customer(),
            message: Some("Delivery to site please".into()),
            items: vec![EnquiryItemDto {
                product_id: ProductId(7),
                variant_id: VariantId(1),
                quantity: 2,
            }],
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["customer"]["name"], "Jo Builder");
        assert!(json["customer"].get("company").is_none());
        assert_eq!(json["message"], "Delivery to site please");
        assert_eq!(
            json["items"][0],
            serde_json::json!({"product_id": 7, "variant_id": 1, "quantity": 2})
        );
    }
}

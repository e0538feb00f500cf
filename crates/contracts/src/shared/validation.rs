//! Field-level validation results shared by the enquiry and contact forms

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::ValidationError;

/// Field name → message to show next to the offending input
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message; the first message per field wins
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.0.iter()
    }

    /// Prefix every field with `scope.` and fold into `self`
    pub fn merge_scoped(&mut self, scope: &str, other: FieldErrors) {
        for (field, message) in other.0 {
            self.insert(format!("{}.{}", scope, field), message);
        }
    }

    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|(k, v)| format!("{}: {}", k, v)).collect();
        write!(f, "{}", parts.join("; "))
    }
}

fn default_message(code: &str) -> &'static str {
    match code {
        "blank" => "This field is required.",
        "email" => "Please enter a valid email address.",
        "agree" => "You must agree to the privacy notice.",
        _ => "Invalid value.",
    }
}

impl From<validator::ValidationErrors> for FieldErrors {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut out = FieldErrors::new();
        for (field, errs) in errors.field_errors() {
            if let Some(err) = errs.first() {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| default_message(&err.code).to_string());
                out.insert(field.to_string(), message);
            }
        }
        out
    }
}

/// Rejects empty and whitespace-only text
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::new("blank"))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_message_wins() {
        let mut errors = FieldErrors::new();
        errors.insert("email", "Please enter your email.");
        errors.insert("email", "Please enter a valid email address.");
        assert_eq!(errors.get("email"), Some("Please enter your email."));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_merge_scoped() {
        let mut inner = FieldErrors::new();
        inner.insert("name", "Please enter your name.");
        let mut outer = FieldErrors::new();
        outer.merge_scoped("customer", inner);
        assert!(outer.contains("customer.name"));
    }

    #[test]
    fn test_not_blank() {
        assert!(not_blank("Jo").is_ok());
        assert!(not_blank("   ").is_err());
    }

    #[test]
    fn test_serializes_as_map() {
        let mut errors = FieldErrors::new();
        errors.insert("items", "Add at least one product.");
        let json = serde_json::to_string(&errors).unwrap();
        assert_eq!(json, r#"{"items":"Add at least one product."}"#);
    }
}

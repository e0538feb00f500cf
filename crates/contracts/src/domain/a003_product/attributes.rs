//! Category-specific facet values and the facet schema per category

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::common::text::{format_number, normalize_key};

/// Kind of comparison a facet uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FacetKind {
    /// Compared as numbers, so "10" and "10.0" are the same value
    Numeric,
    /// Compared case-insensitively
    Text,
}

/// A filterable attribute defined by a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FacetField {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FacetKind,
}

const fn numeric(key: &'static str, label: &'static str) -> FacetField {
    FacetField {
        key,
        label,
        kind: FacetKind::Numeric,
    }
}

const fn text(key: &'static str, label: &'static str) -> FacetField {
    FacetField {
        key,
        label,
        kind: FacetKind::Text,
    }
}

pub const FIXINGS_FACETS: &[FacetField] = &[
    numeric("length_mm", "Length (mm)"),
    numeric("diameter_mm", "Diameter (mm)"),
    numeric("pack_size", "Pack size"),
    text("head_type", "Head type"),
    text("drive_type", "Drive type"),
    text("material", "Material"),
    text("finish", "Finish"),
];

/// Facets defined for a category, keyed by its slug. Empty for categories
/// without facets.
pub fn facet_fields_for_slug(slug: &str) -> &'static [FacetField] {
    match normalize_key(slug).as_str() {
        "fixings" => FIXINGS_FACETS,
        _ => &[],
    }
}

// ============================================================================
// Values
// ============================================================================

/// A single attribute value as stored against a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Number(f64),
    Text(String),
}

impl AttributeValue {
    /// Numeric reading of the value; text that parses as a number counts
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AttributeValue::Number(n) if n.is_finite() => Some(*n),
            AttributeValue::Number(_) => None,
            AttributeValue::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        }
    }

    /// Value as shown in option lists
    pub fn display(&self) -> String {
        match self {
            AttributeValue::Number(n) => format_number(*n),
            AttributeValue::Text(s) => s.trim().to_string(),
        }
    }

    /// Whether this value satisfies a selected facet value.
    ///
    /// A numeric facet never matches a value (or selection) that is not a
    /// number.
    pub fn matches(&self, kind: FacetKind, selected: &str) -> bool {
        match kind {
            FacetKind::Numeric => {
                let Ok(wanted) = selected.trim().parse::<f64>() else {
                    return false;
                };
                self.as_number().is_some_and(|n| n == wanted)
            }
            FacetKind::Text => {
                let wanted = normalize_key(selected);
                !wanted.is_empty() && normalize_key(&self.display()) == wanted
            }
        }
    }
}

/// Facet values of one product (one `product_attributes` row)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<String, serde_json::Value>",
    into = "BTreeMap<String, AttributeValue>"
)]
pub struct AttributeSet {
    values: BTreeMap<String, AttributeValue>,
}

/// Row columns that are bookkeeping rather than facet values
const RESERVED_COLUMNS: &[&str] = &["id", "product_id", "created_at", "updated_at"];

impl AttributeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: AttributeValue) -> Self {
        self.insert(key, value);
        self
    }

    pub fn with_number(self, key: impl Into<String>, value: f64) -> Self {
        self.with(key, AttributeValue::Number(value))
    }

    pub fn with_text(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.with(key, AttributeValue::Text(value.into()))
    }

    pub fn insert(&mut self, key: impl Into<String>, value: AttributeValue) {
        self.values.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&AttributeValue> {
        self.values.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &AttributeValue)> {
        self.values.iter()
    }
}

impl From<BTreeMap<String, serde_json::Value>> for AttributeSet {
    fn from(raw: BTreeMap<String, serde_json::Value>) -> Self {
        use serde_json::Value;

        let values = raw
            .into_iter()
            .filter(|(key, _)| !RESERVED_COLUMNS.contains(&key.as_str()))
            .filter_map(|(key, value)| {
                let value = match value {
                    Value::Number(n) => AttributeValue::Number(n.as_f64()?),
                    Value::String(s) if !s.trim().is_empty() => {
                        AttributeValue::Text(s.trim().to_string())
                    }
                    Value::Bool(b) => AttributeValue::Text(b.to_string()),
                    _ => return None,
                };
                Some((key, value))
            })
            .collect();
        Self { values }
    }
}

impl From<AttributeSet> for BTreeMap<String, AttributeValue> {
    fn from(set: AttributeSet) -> Self {
        set.values
    }
}

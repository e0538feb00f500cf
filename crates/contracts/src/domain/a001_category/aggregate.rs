use serde::{Deserialize, Serialize};

use crate::aggregate_id;
use crate::domain::common::text::{loose_key, normalize_key};

// ============================================================================
// ID Type
// ============================================================================

aggregate_id!(
    /// Unique identifier of a product category
    CategoryId
);

// ============================================================================
// Aggregate
// ============================================================================

/// Named, slugged grouping of products. The slug is the canonical join key
/// to products and to the category's facet schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub slug: String,
}

impl Category {
    pub fn new(id: i64, name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: CategoryId(id),
            name: name.into(),
            slug: slug.into(),
        }
    }

    /// Exact slug comparison (case and surrounding whitespace ignored)
    pub fn slug_matches(&self, selector: &str) -> bool {
        let needle = normalize_key(selector);
        if needle.is_empty() {
            return false;
        }
        if normalize_key(&self.slug) == needle {
            return true;
        }
        let loose = loose_key(&needle);
        !loose.is_empty() && loose_key(&self.slug) == loose
    }

    /// Exact name comparison (case, whitespace and punctuation ignored)
    pub fn name_matches(&self, selector: &str) -> bool {
        let needle = normalize_key(selector);
        if needle.is_empty() {
            return false;
        }
        if normalize_key(&self.name) == needle {
            return true;
        }
        let loose = loose_key(&needle);
        !loose.is_empty() && loose_key(&self.name) == loose
    }

    /// Loose containment of the selector in the category name
    pub fn name_contains(&self, selector: &str) -> bool {
        let loose = loose_key(selector);
        !loose.is_empty() && loose_key(&self.name).contains(&loose)
    }
}

/// URL-safe slug: lowercase ASCII alphanumerics separated by single dashes
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut pending_dash = false;
    for ch in value.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

use serde::{Deserialize, Serialize};

use super::attributes::AttributeSet;
use crate::aggregate_id;
use crate::domain::a001_category::CategoryId;
use crate::domain::a002_brand::BrandId;

// ============================================================================
// ID Types
// ============================================================================

aggregate_id!(
    /// Unique identifier of a product
    ProductId
);

aggregate_id!(
    /// Identifier of a product sub-selection (pack size, colour, ...)
    VariantId
);

// ============================================================================
// Variant
// ============================================================================

/// A sub-selection of a product that can be enquired about on its own line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    pub id: VariantId,
    #[serde(alias = "variant_name", alias = "name")]
    pub label: String,
}

impl Variant {
    pub const STANDARD_ID: VariantId = VariantId(0);

    pub fn new(id: i64, label: impl Into<String>) -> Self {
        Self {
            id: VariantId(id),
            label: label.into(),
        }
    }

    /// The variant offered for products that define none
    pub fn standard() -> Self {
        Self {
            id: Self::STANDARD_ID,
            label: "Standard".to_string(),
        }
    }
}

// ============================================================================
// Aggregate
// ============================================================================

fn default_active() -> bool {
    true
}

/// Read-only catalogue snapshot of a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub category_id: CategoryId,
    #[serde(default)]
    pub brand_id: Option<BrandId>,
    pub name: String,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "image_url")]
    pub image_ref: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    /// Category-specific facet values, present only for categories with facets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<AttributeSet>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<Variant>,
}

impl Product {
    pub fn new(id: i64, category_id: CategoryId, name: impl Into<String>) -> Self {
        Self {
            id: ProductId(id),
            category_id,
            brand_id: None,
            name: name.into(),
            sku: None,
            description: None,
            image_ref: None,
            is_active: true,
            attributes: None,
            variants: Vec::new(),
        }
    }

    pub fn with_brand(mut self, brand_id: BrandId) -> Self {
        self.brand_id = Some(brand_id);
        self
    }

    pub fn with_sku(mut self, sku: impl Into<String>) -> Self {
        self.sku = Some(sku.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_attributes(mut self, attributes: AttributeSet) -> Self {
        self.attributes = Some(attributes);
        self
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// Variants a customer can pick from; never empty
    pub fn variant_options(&self) -> Vec<Variant> {
        if self.variants.is_empty() {
            vec![Variant::standard()]
        } else {
            self.variants.clone()
        }
    }

    pub fn to_ref(&self) -> ProductRef {
        ProductRef {
            id: self.id,
            name: self.name.clone(),
            sku: self.sku.clone(),
        }
    }
}

/// Display snapshot of a product held by an enquiry line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRef {
    pub id: ProductId,
    pub name: String,
    pub sku: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_row() {
        let p: Product = serde_json::from_str(
            r#"{"id":7,"category_id":1,"name":"Frame Fixing 10x100"}"#,
        )
        .unwrap();
        assert_eq!(p.id, ProductId(7));
        assert!(p.is_active);
        assert!(p.brand_id.is_none());
        assert!(p.attributes.is_none());
        assert_eq!(p.variant_options(), vec![Variant::standard()]);
    }

    #[test]
    fn test_variant_aliases() {
        let v: Variant = serde_json::from_str(r#"{"id":3,"variant_name":"Box of 100"}"#).unwrap();
        assert_eq!(v, Variant::new(3, "Box of 100"));
    }

    #[test]
    fn test_image_url_alias() {
        let p: Product = serde_json::from_str(
            r#"{"id":1,"category_id":1,"name":"Drill","image_url":"/img/drill.jpg"}"#,
        )
        .unwrap();
        assert_eq!(p.image_ref.as_deref(), Some("/img/drill.jpg"));
    }
}

pub mod aggregate;
pub mod attributes;

pub use aggregate::{Product, ProductId, ProductRef, Variant, VariantId};
pub use attributes::{facet_fields_for_slug, AttributeSet, AttributeValue, FacetField, FacetKind};

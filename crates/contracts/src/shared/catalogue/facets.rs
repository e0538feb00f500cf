//! Facet option lists derived from the loaded products

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::domain::a003_product::{FacetField, FacetKind, Product};
use crate::domain::common::text::{format_number, normalize_key};

/// Selectable values for one facet, in display order
#[derive(Debug, Clone, PartialEq)]
pub struct FacetOptions {
    pub field: FacetField,
    pub values: Vec<String>,
}

impl FacetOptions {
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn numeric_options(field: &FacetField, products: &[Product]) -> Vec<String> {
    let mut numbers: Vec<f64> = products
        .iter()
        .filter_map(|p| p.attributes.as_ref()?.get(field.key)?.as_number())
        .collect();
    numbers.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    numbers.dedup();
    numbers.into_iter().map(format_number).collect()
}

fn text_options(field: &FacetField, products: &[Product]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut values: Vec<String> = products
        .iter()
        .filter_map(|p| p.attributes.as_ref()?.get(field.key))
        .map(|v| v.display())
        .filter(|v| !v.is_empty() && seen.insert(normalize_key(v)))
        .collect();
    values.sort_by(|a, b| normalize_key(a).cmp(&normalize_key(b)).then(a.cmp(b)));
    values
}

/// Distinct, non-empty values per facet across the given products.
///
/// Numeric facets sort by value and skip entries that are not numbers; text
/// facets sort case-insensitively and keep the first spelling seen.
pub fn derive_facet_options(fields: &[FacetField], products: &[Product]) -> Vec<FacetOptions> {
    fields
        .iter()
        .map(|field| FacetOptions {
            field: *field,
            values: match field.kind {
                FacetKind::Numeric => numeric_options(field, products),
                FacetKind::Text => text_options(field, products),
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_category::CategoryId;
    use crate::domain::a003_product::{facet_fields_for_slug, AttributeSet};

    fn product(id: i64, attrs: AttributeSet) -> Product {
        Product::new(id, CategoryId(1), format!("p{id}")).with_attributes(attrs)
    }

    fn values_for<'a>(options: &'a [FacetOptions], key: &str) -> &'a [String] {
        options
            .iter()
            .find(|o| o.field.key == key)
            .map(|o| o.values.as_slice())
            .unwrap_or(&[])
    }

    #[test]
    fn test_numeric_sorted_numerically_and_deduped() {
        let products = vec![
            product(1, AttributeSet::new().with_number("length_mm", 100.0)),
            product(2, AttributeSet::new().with_text("length_mm", "8")),
            product(3, AttributeSet::new().with_text("length_mm", "10.0")),
            product(4, AttributeSet::new().with_number("length_mm", 10.0)),
            product(5, AttributeSet::new().with_text("length_mm", "long")),
        ];
        let options = derive_facet_options(facet_fields_for_slug("fixings"), &products);
        assert_eq!(values_for(&options, "length_mm"), ["8", "10", "100"]);
    }

    #[test]
    fn test_text_sorted_and_deduped_ignoring_case() {
        let products = vec![
            product(1, AttributeSet::new().with_text("material", "Steel")),
            product(2, AttributeSet::new().with_text("material", "brass")),
            product(3, AttributeSet::new().with_text("material", "steel")),
            Product::new(4, CategoryId(1), "no attrs"),
        ];
        let options = derive_facet_options(facet_fields_for_slug("fixings"), &products);
        assert_eq!(values_for(&options, "material"), ["brass", "Steel"]);
        assert!(values_for(&options, "finish").is_empty());
    }

    #[test]
    fn test_no_fields_no_options() {
        let products = vec![product(1, AttributeSet::new().with_text("material", "Steel"))];
        assert!(derive_facet_options(&[], &products).is_empty());
    }
}

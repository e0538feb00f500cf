//! Client-side filtering of a loaded product snapshot.
//!
//! Stages run in a fixed order (active, category, brand, search, facets) and
//! never reorder the input.

use crate::domain::a003_product::{FacetField, Product};

use super::filter_state::FilterState;

fn contains_ci(haystack: Option<&str>, needle: &str) -> bool {
    haystack.is_some_and(|h| h.to_lowercase().contains(needle))
}

/// Free-text match over name, sku and description.
///
/// Each field is checked on its own so a phrase never matches across field
/// boundaries.
pub fn matches_query(product: &Product, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    contains_ci(Some(&product.name), &needle)
        || contains_ci(product.sku.as_deref(), &needle)
        || contains_ci(product.description.as_deref(), &needle)
}

/// Facet match for the facets defined on the active category.
///
/// Only keys present in `fields` are considered, so leftover selections for
/// another category cannot hide products. A product without attributes fails
/// any active facet.
pub fn matches_facets(product: &Product, state: &FilterState, fields: &[FacetField]) -> bool {
    fields.iter().all(|field| {
        let Some(selected) = state.facets().get(field.key) else {
            return true;
        };
        product
            .attributes
            .as_ref()
            .and_then(|attrs| attrs.get(field.key))
            .is_some_and(|value| value.matches(field.kind, selected))
    })
}

pub fn matches(product: &Product, state: &FilterState, fields: &[FacetField]) -> bool {
    product.is_active
        && state.category().matches(product.category_id)
        && state.brand().matches_optional(product.brand_id)
        && matches_query(product, state.query())
        && matches_facets(product, state, fields)
}

/// Products that pass every stage, in input order
pub fn filter_products<'a>(
    products: &'a [Product],
    state: &FilterState,
    fields: &[FacetField],
) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|p| matches(p, state, fields))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_category::CategoryId;
    use crate::domain::a002_brand::BrandId;
    use crate::domain::a003_product::{facet_fields_for_slug, AttributeSet};
    use crate::shared::catalogue::filter_state::Selection;

    fn fixings() -> Vec<Product> {
        vec![
            Product::new(1, CategoryId(1), "Concrete screw")
                .with_brand(BrandId(1))
                .with_sku("CS-100")
                .with_attributes(
                    AttributeSet::new()
                        .with_number("length_mm", 100.0)
                        .with_text("material", "Steel"),
                ),
            Product::new(2, CategoryId(1), "Wood screw")
                .with_brand(BrandId(2))
                .with_description("Zinc plated, for timber")
                .with_attributes(
                    AttributeSet::new()
                        .with_text("length_mm", "50")
                        .with_text("material", "steel"),
                ),
            Product::new(3, CategoryId(1), "Frame anchor"),
            Product::new(4, CategoryId(1), "Old stock").inactive(),
        ]
    }

    fn ids(list: &[&Product]) -> Vec<i64> {
        list.iter().map(|p| p.id.0).collect()
    }

    #[test]
    fn test_no_filters_returns_active_in_order() {
        let products = fixings();
        let state = FilterState::new();
        assert_eq!(ids(&filter_products(&products, &state, &[])), vec![1, 2, 3]);
    }

    #[test]
    fn test_brand_and_category() {
        let products = fixings();
        let mut state = FilterState::new();
        state.select_category(Selection::Only(CategoryId(1)));
        state.select_brand(Selection::Only(BrandId(2)));
        assert_eq!(ids(&filter_products(&products, &state, &[])), vec![2]);

        state.select_category(Selection::Only(CategoryId(9)));
        assert!(filter_products(&products, &state, &[]).is_empty());
    }

    #[test]
    fn test_search_checks_each_field() {
        let products = fixings();
        let mut state = FilterState::new();

        state.set_query("cs-1");
        assert_eq!(ids(&filter_products(&products, &state, &[])), vec![1]);

        state.set_query("TIMBER");
        assert_eq!(ids(&filter_products(&products, &state, &[])), vec![2]);

        // "screw zinc" spans name and description and must not match
        state.set_query("screw zinc");
        assert!(filter_products(&products, &state, &[]).is_empty());

        state.set_query("   ");
        assert_eq!(filter_products(&products, &state, &[]).len(), 3);
    }

    #[test]
    fn test_numeric_facet_compares_numbers() {
        let products = fixings();
        let fields = facet_fields_for_slug("fixings");
        let mut state = FilterState::new();
        state.select_category(Selection::Only(CategoryId(1)));

        state.set_facet("length_mm", "50.0");
        assert_eq!(ids(&filter_products(&products, &state, fields)), vec![2]);

        state.set_facet("length_mm", "abc");
        assert!(filter_products(&products, &state, fields).is_empty());
    }

    #[test]
    fn test_text_facet_is_case_insensitive_and_excludes_missing_attributes() {
        let products = fixings();
        let fields = facet_fields_for_slug("fixings");
        let mut state = FilterState::new();
        state.set_facet("material", "STEEL");
        assert_eq!(ids(&filter_products(&products, &state, fields)), vec![1, 2]);
    }

    #[test]
    fn test_facets_outside_active_schema_are_ignored() {
        let products = fixings();
        let mut state = FilterState::new();
        state.set_facet("material", "brass");
        assert_eq!(filter_products(&products, &state, &[]).len(), 3);
    }
}

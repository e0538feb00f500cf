use std::collections::BTreeMap;

use crate::domain::a001_category::CategoryId;
use crate::domain::a002_brand::BrandId;
use crate::domain::common::AggregateId;

/// Form value meaning "no category / brand restriction"
pub const ALL: &str = "all";
/// Form value meaning "no facet restriction"
pub const ANY: &str = "any";

/// Category or brand choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T: AggregateId> Selection<T> {
    pub fn matches(&self, id: T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => *wanted == id,
        }
    }

    pub fn matches_optional(&self, id: Option<T>) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => id == Some(*wanted),
        }
    }

    pub fn id(&self) -> Option<T> {
        match self {
            Selection::All => None,
            Selection::Only(id) => Some(*id),
        }
    }

    /// Parse a `<select>` value; "all", blank and unparseable values mean `All`
    pub fn from_form_value(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case(ALL) {
            return Selection::All;
        }
        T::from_string(value)
            .map(Selection::Only)
            .unwrap_or(Selection::All)
    }

    pub fn to_form_value(&self) -> String {
        match self {
            Selection::All => ALL.to_string(),
            Selection::Only(id) => id.as_string(),
        }
    }
}

impl<T> From<Option<T>> for Selection<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(id) => Selection::Only(id),
            None => Selection::All,
        }
    }
}

/// Selected facet values of the active category; absent keys mean "any"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetSelection(BTreeMap<String, String>);

impl FacetSelection {
    /// Set a facet; blank or "any" clears it. Returns whether anything changed.
    pub fn set(&mut self, key: &str, value: &str) -> bool {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case(ANY) {
            return self.0.remove(key).is_some();
        }
        match self.0.get(key) {
            Some(current) if current == value => false,
            _ => {
                self.0.insert(key.to_string(), value.to_string());
                true
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Selected value or "any"
    pub fn value_or_any(&self, key: &str) -> &str {
        self.get(key).unwrap_or(ANY)
    }

    pub fn is_any_set(&self) -> bool {
        !self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// User-adjustable catalogue filters.
///
/// Changing the category always resets every facet to "any", so a selection
/// made for one category can never filter another category's products.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    category: Selection<CategoryId>,
    brand: Selection<BrandId>,
    query: String,
    facets: FacetSelection,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(&self) -> Selection<CategoryId> {
        self.category
    }

    pub fn brand(&self) -> Selection<BrandId> {
        self.brand
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn facets(&self) -> &FacetSelection {
        &self.facets
    }

    /// Returns whether the category changed; a change clears all facets
    pub fn select_category(&mut self, category: Selection<CategoryId>) -> bool {
        if self.category == category {
            return false;
        }
        self.category = category;
        self.facets.clear();
        true
    }

    pub fn select_brand(&mut self, brand: Selection<BrandId>) -> bool {
        if self.brand == brand {
            return false;
        }
        self.brand = brand;
        true
    }

    pub fn set_query(&mut self, query: &str) -> bool {
        if self.query == query {
            return false;
        }
        self.query = query.to_string();
        true
    }

    pub fn set_facet(&mut self, key: &str, value: &str) -> bool {
        self.facets.set(key, value)
    }

    pub fn clear_facets(&mut self) -> bool {
        let had_any = self.facets.is_any_set();
        self.facets.clear();
        had_any
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_form_values() {
        assert_eq!(Selection::<CategoryId>::from_form_value("all"), Selection::All);
        assert_eq!(Selection::<CategoryId>::from_form_value(""), Selection::All);
        assert_eq!(Selection::<CategoryId>::from_form_value("x"), Selection::All);
        assert_eq!(
            Selection::<CategoryId>::from_form_value("2"),
            Selection::Only(CategoryId(2))
        );
        assert_eq!(Selection::Only(BrandId(5)).to_form_value(), "5");
        assert_eq!(Selection::<BrandId>::All.to_form_value(), "all");
    }

    #[test]
    fn test_facet_any_clears() {
        let mut f = FacetSelection::default();
        assert!(f.set("material", "Steel"));
        assert!(!f.set("material", "Steel"));
        assert_eq!(f.value_or_any("material"), "Steel");
        assert!(f.set("material", "ANY"));
        assert_eq!(f.value_or_any("material"), ANY);
        assert!(!f.is_any_set());
        assert!(!f.set("finish", " "));
    }

    #[test]
    fn test_category_change_resets_facets() {
        let mut state = FilterState::new();
        state.select_category(Selection::Only(CategoryId(1)));
        state.set_facet("material", "steel");
        state.set_query("anchor");
        state.select_brand(Selection::Only(BrandId(3)));

        assert!(!state.select_category(Selection::Only(CategoryId(1))));
        assert_eq!(state.facets().get("material"), Some("steel"));

        assert!(state.select_category(Selection::Only(CategoryId(2))));
        assert_eq!(state.facets().value_or_any("material"), ANY);
        assert_eq!(state.query(), "anchor");
        assert_eq!(state.brand(), Selection::Only(BrandId(3)));
    }
}

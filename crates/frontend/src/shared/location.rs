//! Reading the page URL and moving around the single page

use serde::Deserialize;
use web_sys::window;

#[derive(Debug, Default, Deserialize)]
struct PageQuery {
    #[serde(default)]
    category: Option<String>,
}

/// Value of `?category=` in a location search string, if non-blank
pub fn category_from_search(search: &str) -> Option<String> {
    let query: PageQuery = serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    query
        .category
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
}

/// `?category=` of the current page
pub fn category_param() -> Option<String> {
    let search = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    category_from_search(&search)
}

/// Smooth-scroll to the section with the given element id
pub fn scroll_to(id: &str) {
    let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        return;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    options.set_block(web_sys::ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

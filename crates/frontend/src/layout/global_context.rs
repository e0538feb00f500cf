use contracts::domain::a004_enquiry::EnquiryCart;
use leptos::prelude::*;

use crate::shared::{location, storage};

/// A category selector pushed by the page (core range button or `?category=`)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PresetRequest {
    pub selector: String,
    pub generation: u64,
}

/// Page-wide state: the enquiry cart and the live category preset
#[derive(Clone, Copy)]
pub struct SiteContext {
    pub cart: RwSignal<EnquiryCart>,
    pub preset: RwSignal<Option<PresetRequest>>,
    generation: StoredValue<u64>,
}

impl SiteContext {
    pub fn new() -> Self {
        let this = Self {
            cart: RwSignal::new(EnquiryCart::new()),
            preset: RwSignal::new(None),
            generation: StoredValue::new(0),
        };
        if let Some(selector) = location::category_param() {
            log::debug!("category preset from url: {}", selector);
            this.push_preset(selector);
        }
        this
    }

    /// Select a category from outside the catalogue. The selector is kept
    /// in localStorage so a reload lands on the same range.
    pub fn request_category(&self, selector: &str) {
        storage::save_preset(selector);
        self.push_preset(selector.to_string());
    }

    /// Called once the catalogue has applied the current preset
    pub fn clear_preset(&self) {
        if self.preset.with_untracked(Option::is_some) {
            self.preset.set(None);
        }
    }

    fn push_preset(&self, selector: String) {
        self.generation.update_value(|g| *g += 1);
        let generation = self.generation.get_value();
        self.preset.set(Some(PresetRequest {
            selector,
            generation,
        }));
    }

    pub fn toggle_cart(&self) {
        self.cart.update(|c| c.toggle());
    }
}

impl Default for SiteContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_site() -> SiteContext {
    use_context::<SiteContext>().expect("SiteContext context not found")
}

//! Catalogue page state: lookups, the scoped product snapshot, filters,
//! pagination and preset tracking.
//!
//! All mutation happens on the UI thread. Product loads are asynchronous and
//! are matched back to the session with a [`LoadTicket`]; results for a
//! superseded ticket are dropped.

use crate::domain::a001_category::{Category, CategoryId};
use crate::domain::a002_brand::{Brand, BrandId};
use crate::domain::a003_product::{facet_fields_for_slug, FacetField, Product};

use super::facets::{derive_facet_options, FacetOptions};
use super::filter_state::{FilterState, Selection};
use super::loading::{LoadError, LoadGuard, LoadState, LoadTicket};
use super::pagination::Pagination;
use super::pipeline::filter_products;
use super::preset::{PresetOutcome, PresetResolution, PresetResolver, PresetSignal};
use super::query::ProductFilter;

/// A product load the caller must run and report back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductRequest {
    pub ticket: LoadTicket,
    pub filter: ProductFilter,
}

/// Products of one completed load with the facets derived from them
#[derive(Debug, Clone, PartialEq)]
struct ProductSnapshot {
    products: Vec<Product>,
    facet_fields: &'static [FacetField],
    facet_options: Vec<FacetOptions>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogueStatus<'a> {
    Loading,
    Unavailable(&'a LoadError),
    Ready,
}

/// One page of the filtered list
#[derive(Debug, Clone, PartialEq)]
pub struct CataloguePage<'a> {
    pub items: Vec<&'a Product>,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

#[derive(Debug, Clone, Default)]
pub struct CatalogueSession {
    categories: Vec<Category>,
    brands: Vec<Brand>,
    lookups: LoadState<()>,
    products: LoadState<ProductSnapshot>,
    pending_scope: Option<CategoryId>,
    filters: FilterState,
    pagination: Pagination,
    preset: PresetResolver,
    guard: LoadGuard,
}

impl CatalogueSession {
    pub fn new(page_size: usize) -> Self {
        Self {
            pagination: Pagination::new(page_size),
            ..Self::default()
        }
    }

    // ------------------------------------------------------------------
    // Lookups
    // ------------------------------------------------------------------

    pub fn begin_lookups(&mut self) {
        self.lookups = LoadState::Loading;
    }

    pub fn finish_lookups(&mut self, result: Result<(Vec<Category>, Vec<Brand>), LoadError>) {
        match result {
            Ok((categories, brands)) => {
                self.categories = categories;
                self.brands = brands;
                self.lookups = LoadState::Ready(());
            }
            Err(err) => self.lookups = LoadState::Failed(err),
        }
    }

    pub fn lookups(&self) -> &LoadState<()> {
        &self.lookups
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn brands(&self) -> &[Brand] {
        &self.brands
    }

    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn selected_category(&self) -> Option<&Category> {
        self.filters.category().id().and_then(|id| self.category(id))
    }

    pub fn brand_name(&self, id: Option<BrandId>) -> Option<&str> {
        let id = id?;
        self.brands
            .iter()
            .find(|b| b.id == id)
            .map(|b| b.name.as_str())
    }

    // ------------------------------------------------------------------
    // Preset
    // ------------------------------------------------------------------

    /// Run the preset resolver. `on_consumed` fires once per distinct signal,
    /// matched or not. Returns the product load to start when the category
    /// changed.
    pub fn apply_preset(
        &mut self,
        signal: PresetSignal<'_>,
        on_consumed: impl FnOnce(&PresetResolution),
    ) -> Option<ProductRequest> {
        let current = self.filters.category().id();
        match self.preset.resolve(signal, &self.categories, current) {
            PresetOutcome::Consumed(resolution) => {
                on_consumed(&resolution);
                resolution
                    .category
                    .and_then(|id| self.select_category(Selection::Only(id)))
            }
            PresetOutcome::Idle | PresetOutcome::Deferred | PresetOutcome::AlreadyConsumed => None,
        }
    }

    pub fn preset(&self) -> &PresetResolver {
        &self.preset
    }

    // ------------------------------------------------------------------
    // Filters
    // ------------------------------------------------------------------

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Change category. Facets and page reset and a scoped reload is due.
    pub fn select_category(&mut self, category: Selection<CategoryId>) -> Option<ProductRequest> {
        if !self.filters.select_category(category) {
            return None;
        }
        self.pagination.reset();
        Some(self.begin_product_load())
    }

    pub fn select_brand(&mut self, brand: Selection<BrandId>) -> bool {
        self.after_filter_change(|f| f.select_brand(brand))
    }

    pub fn set_query(&mut self, query: &str) -> bool {
        self.after_filter_change(|f| f.set_query(query))
    }

    pub fn set_facet(&mut self, key: &str, value: &str) -> bool {
        self.after_filter_change(|f| f.set_facet(key, value))
    }

    pub fn clear_facets(&mut self) -> bool {
        self.after_filter_change(FilterState::clear_facets)
    }

    fn after_filter_change(&mut self, change: impl FnOnce(&mut FilterState) -> bool) -> bool {
        let changed = change(&mut self.filters);
        if changed {
            self.pagination.reset();
        }
        changed
    }

    // ------------------------------------------------------------------
    // Products
    // ------------------------------------------------------------------

    /// True until the first product load has been started
    pub fn needs_product_load(&self) -> bool {
        matches!(self.products, LoadState::Idle)
    }

    /// Start a product load for the current category, superseding any load
    /// still in flight
    pub fn begin_product_load(&mut self) -> ProductRequest {
        let ticket = self.guard.begin();
        let scope = self.filters.category().id();
        self.pending_scope = scope;
        self.products = LoadState::Loading;
        ProductRequest {
            ticket,
            filter: ProductFilter::for_category(scope),
        }
    }

    /// Deliver a load result. Returns `false` when the ticket was superseded
    /// and the result was dropped.
    pub fn finish_product_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<Product>, LoadError>,
    ) -> bool {
        if !self.guard.is_current(ticket) {
            return false;
        }
        match result {
            Ok(products) => {
                let facet_fields = self
                    .pending_scope
                    .and_then(|id| self.category(id))
                    .map(|c| facet_fields_for_slug(&c.slug))
                    .unwrap_or(&[]);
                let scoped: Vec<Product> = products
                    .iter()
                    .filter(|p| p.is_active && self.filters.category().matches(p.category_id))
                    .cloned()
                    .collect();
                let facet_options = derive_facet_options(facet_fields, &scoped);
                self.products = LoadState::Ready(ProductSnapshot {
                    products,
                    facet_fields,
                    facet_options,
                });
                let total = self.filtered().len();
                self.pagination.clamp_to(total);
            }
            Err(err) => self.products = LoadState::Failed(err),
        }
        true
    }

    pub fn status(&self) -> CatalogueStatus<'_> {
        if let Some(err) = self.lookups.error().or_else(|| self.products.error()) {
            return CatalogueStatus::Unavailable(err);
        }
        match self.products {
            LoadState::Ready(_) => CatalogueStatus::Ready,
            _ => CatalogueStatus::Loading,
        }
    }

    /// Facets of the loaded category; empty when it defines none
    pub fn facet_fields(&self) -> &[FacetField] {
        self.products.ready().map(|s| s.facet_fields).unwrap_or(&[])
    }

    pub fn facet_options(&self) -> &[FacetOptions] {
        self.products
            .ready()
            .map(|s| s.facet_options.as_slice())
            .unwrap_or(&[])
    }

    pub fn filtered(&self) -> Vec<&Product> {
        match self.products.ready() {
            Some(snapshot) => {
                filter_products(&snapshot.products, &self.filters, snapshot.facet_fields)
            }
            None => Vec::new(),
        }
    }

    // ------------------------------------------------------------------
    // Pagination
    // ------------------------------------------------------------------

    pub fn set_page(&mut self, page: usize) {
        self.pagination.set_page(page);
        let total = self.filtered().len();
        self.pagination.clamp_to(total);
    }

    pub fn page_size(&self) -> usize {
        self.pagination.page_size()
    }

    pub fn page(&self) -> CataloguePage<'_> {
        let filtered = self.filtered();
        let total_items = filtered.len();
        CataloguePage {
            page: self.pagination.current_page(total_items),
            total_pages: self.pagination.total_pages(total_items),
            total_items,
            items: self.pagination.slice(&filtered).to_vec(),
        }
    }
}

//! Catalogue core: preset resolution, filtering, facets, pagination and the
//! session object that ties them to the loaded data.

pub mod facets;
pub mod filter_state;
pub mod loading;
pub mod pagination;
pub mod pipeline;
pub mod preset;
pub mod query;
pub mod session;

pub use facets::{derive_facet_options, FacetOptions};
pub use filter_state::{FacetSelection, FilterState, Selection, ALL, ANY};
pub use loading::{LoadError, LoadGuard, LoadState, LoadTicket};
pub use pagination::{page_window, PageLink, Pagination, DEFAULT_PAGE_SIZE};
pub use pipeline::filter_products;
pub use preset::{
    match_category, PresetKey, PresetOutcome, PresetPhase, PresetResolution, PresetResolver,
    PresetSignal,
};
pub use query::ProductFilter;
pub use session::{CataloguePage, CatalogueSession, CatalogueStatus, ProductRequest};

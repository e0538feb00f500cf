//! Catalogue Data Gateway: read access to categories, brands, products and
//! specialist services held in the external catalogue store.

pub mod postgrest;
pub mod rows;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use contracts::domain::a001_category::Category;
use contracts::domain::a002_brand::Brand;
use contracts::domain::a003_product::{Product, ProductId};
use contracts::domain::a005_specialist_service::SpecialistService;
use contracts::shared::catalogue::ProductFilter;
use thiserror::Error;

pub use postgrest::PostgrestStore;

/// Failure reading one collection from the store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("network error reading {collection}: {message}")]
    Network {
        collection: &'static str,
        message: String,
    },

    #[error("store returned HTTP {status} for {collection}")]
    Status {
        collection: &'static str,
        status: u16,
        body: String,
    },

    #[error("unexpected {collection} payload: {message}")]
    Decode {
        collection: &'static str,
        message: String,
    },
}

impl StoreError {
    pub fn collection(&self) -> &'static str {
        match self {
            StoreError::Network { collection, .. }
            | StoreError::Status { collection, .. }
            | StoreError::Decode { collection, .. } => collection,
        }
    }
}

#[async_trait]
pub trait CatalogueStore: Send + Sync {
    /// All categories, ordered by name
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError>;

    /// All brands, ordered by name
    async fn list_brands(&self) -> Result<Vec<Brand>, StoreError>;

    /// Products narrowed by `filter`, ordered by name
    async fn list_products(&self, filter: &ProductFilter) -> Result<Vec<Product>, StoreError>;

    /// Products with the given ids, active or not
    async fn products_by_ids(&self, ids: &[ProductId]) -> Result<Vec<Product>, StoreError>;

    /// Active specialist services, ordered by name
    async fn list_specialist_services(&self) -> Result<Vec<SpecialistService>, StoreError>;
}

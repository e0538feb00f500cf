//! Fixture store for service and handler tests. Rows come back in fixture
//! order, the way the live store returns them in its query order.

use async_trait::async_trait;
use contracts::domain::a001_category::Category;
use contracts::domain::a002_brand::Brand;
use contracts::domain::a003_product::{Product, ProductId};
use contracts::domain::a005_specialist_service::SpecialistService;
use contracts::shared::catalogue::ProductFilter;

use super::{CatalogueStore, StoreError};

#[derive(Default)]
pub struct InMemoryStore {
    pub categories: Vec<Category>,
    pub brands: Vec<Brand>,
    pub products: Vec<Product>,
    pub services: Vec<SpecialistService>,
    /// Every call fails with a network error
    pub offline: bool,
}

impl InMemoryStore {
    pub fn offline() -> Self {
        Self {
            offline: true,
            ..Self::default()
        }
    }

    fn check(&self, collection: &'static str) -> Result<(), StoreError> {
        if self.offline {
            return Err(StoreError::Network {
                collection,
                message: "store offline".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogueStore for InMemoryStore {
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        self.check("categories")?;
        Ok(self.categories.clone())
    }

    async fn list_brands(&self) -> Result<Vec<Brand>, StoreError> {
        self.check("brands")?;
        Ok(self.brands.clone())
    }

    async fn list_products(&self, filter: &ProductFilter) -> Result<Vec<Product>, StoreError> {
        self.check("products")?;
        Ok(self
            .products
            .iter()
            .filter(|p| filter.category_id.map_or(true, |id| p.category_id == id))
            .filter(|p| filter.brand_id.map_or(true, |id| p.brand_id == Some(id)))
            .filter(|p| !filter.active_only || p.is_active)
            .cloned()
            .collect())
    }

    async fn products_by_ids(&self, ids: &[ProductId]) -> Result<Vec<Product>, StoreError> {
        self.check("products")?;
        Ok(self
            .products
            .iter()
            .filter(|p| ids.contains(&p.id))
            .cloned()
            .collect())
    }

    async fn list_specialist_services(&self) -> Result<Vec<SpecialistService>, StoreError> {
        self.check("specialist_services")?;
        Ok(self.services.iter().filter(|s| s.is_active).cloned().collect())
    }
}

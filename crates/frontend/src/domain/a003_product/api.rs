use contracts::domain::a003_product::Product;
use contracts::shared::catalogue::{LoadError, ProductFilter};

use crate::shared::api_utils::get_json;

/// Products matching `filter`, ordered by name
pub async fn fetch_products(filter: &ProductFilter) -> Result<Vec<Product>, LoadError> {
    get_json("/api/products", filter.to_query_pairs())
        .await
        .map_err(|e| LoadError::new("products", e))
}

use axum::extract::{Query, State};
use axum::Json;
use contracts::domain::a003_product::Product;
use contracts::shared::catalogue::ProductFilter;

use crate::shared::api_error::ApiError;
use crate::shared::app_state::AppState;

/// GET /api/products?category_id=&brand_id=&active_only=
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<ProductFilter>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let products = state.store.list_products(&filter).await?;
    tracing::debug!(
        category = ?filter.category_id,
        count = products.len(),
        "Products listed"
    );
    Ok(Json(products))
}

use axum::extract::State;
use axum::Json;
use contracts::domain::a002_brand::Brand;

use crate::shared::api_error::ApiError;
use crate::shared::app_state::AppState;

/// GET /api/brands
pub async fn list_all(State(state): State<AppState>) -> Result<Json<Vec<Brand>>, ApiError> {
    let brands = state.store.list_brands().await?;
    Ok(Json(brands))
}

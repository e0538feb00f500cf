use axum::extract::State;
use axum::Json;
use contracts::domain::a001_category::Category;

use crate::shared::api_error::ApiError;
use crate::shared::app_state::AppState;

/// GET /api/categories
pub async fn list_all(State(state): State<AppState>) -> Result<Json<Vec<Category>>, ApiError> {
    let categories = state.store.list_categories().await?;
    Ok(Json(categories))
}

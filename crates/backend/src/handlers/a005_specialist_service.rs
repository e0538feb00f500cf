use axum::extract::State;
use axum::Json;
use contracts::domain::a005_specialist_service::SpecialistService;

use crate::shared::api_error::ApiError;
use crate::shared::app_state::AppState;

/// GET /api/specialist-services
pub async fn list_active(
    State(state): State<AppState>,
) -> Result<Json<Vec<SpecialistService>>, ApiError> {
    let services: Vec<SpecialistService> = state
        .store
        .list_specialist_services()
        .await?
        .into_iter()
        .filter(|s| s.is_active)
        .collect();
    Ok(Json(services))
}

use contracts::domain::a005_specialist_service::SpecialistService;
use contracts::shared::catalogue::LoadError;

use crate::shared::api_utils::get_json;

pub async fn fetch_specialist_services() -> Result<Vec<SpecialistService>, LoadError> {
    get_json("/api/specialist-services", Vec::new())
        .await
        .map_err(|e| LoadError::new("specialist_services", e))
}

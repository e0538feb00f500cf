use contracts::domain::a002_brand::Brand;
use contracts::shared::catalogue::LoadError;

use crate::shared::api_utils::get_json;

/// All brands, ordered by name
pub async fn fetch_brands() -> Result<Vec<Brand>, LoadError> {
    get_json("/api/brands", Vec::new())
        .await
        .map_err(|e| LoadError::new("brands", e))
}

use contracts::domain::a001_category::Category;
use contracts::shared::catalogue::LoadError;

use crate::shared::api_utils::get_json;

/// All categories, ordered by name
pub async fn fetch_categories() -> Result<Vec<Category>, LoadError> {
    get_json("/api/categories", Vec::new())
        .await
        .map_err(|e| LoadError::new("categories", e))
}

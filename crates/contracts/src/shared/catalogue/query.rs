use serde::{Deserialize, Serialize};

use crate::domain::a001_category::CategoryId;
use crate::domain::a002_brand::BrandId;

fn default_true() -> bool {
    true
}

/// Server-side narrowing of a product listing.
///
/// Brand is usually filtered on the client, but the gateway accepts it too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_id: Option<BrandId>,
    #[serde(default = "default_true")]
    pub active_only: bool,
}

impl Default for ProductFilter {
    fn default() -> Self {
        Self {
            category_id: None,
            brand_id: None,
            active_only: true,
        }
    }
}

impl ProductFilter {
    pub fn for_category(category_id: Option<CategoryId>) -> Self {
        Self {
            category_id,
            ..Self::default()
        }
    }

    /// Key/value pairs for a query string
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(id) = self.category_id {
            pairs.push(("category_id", id.0.to_string()));
        }
        if let Some(id) = self.brand_id {
            pairs.push(("brand_id", id.0.to_string()));
        }
        pairs.push(("active_only", self.active_only.to_string()));
        pairs
    }
}

use serde::{Deserialize, Serialize};

use crate::aggregate_id;

aggregate_id!(
    /// Unique identifier of a brand
    BrandId
);

/// Manufacturer or product line. No hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub id: BrandId,
    pub name: String,
}

impl Brand {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: BrandId(id),
            name: name.into(),
        }
    }
}

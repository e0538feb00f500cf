use serde::{Deserialize, Serialize};

use crate::aggregate_id;

aggregate_id!(
    /// Unique identifier of a specialist service
    SpecialistServiceId
);

/// Placeholder shown when a service has no image of its own
pub const SERVICE_PLACEHOLDER_IMAGE: &str = "/images/service-placeholder.jpg";

/// A service offered alongside the catalogue (repairs, training, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialistService {
    pub id: SpecialistServiceId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "image_url")]
    pub image_ref: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl SpecialistService {
    pub fn image_or_placeholder(&self) -> &str {
        self.image_ref
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(SERVICE_PLACEHOLDER_IMAGE)
    }
}

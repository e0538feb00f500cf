use sea_orm::DatabaseConnection;
use std::sync::Arc;

use super::catalogue_store::CatalogueStore;
use super::mail::Mailer;

/// Shared handles passed to every handler
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub store: Arc<dyn CatalogueStore>,
    pub mailer: Arc<dyn Mailer>,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        store: Arc<dyn CatalogueStore>,
        mailer: Arc<dyn Mailer>,
    ) -> Self {
        Self { db, store, mailer }
    }
}

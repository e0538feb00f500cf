use contracts::domain::a001_category::Category;
use contracts::domain::a002_brand::Brand;
use contracts::shared::catalogue::{CatalogueSession, LoadError, ProductRequest, DEFAULT_PAGE_SIZE};
use leptos::prelude::*;

use crate::domain::a001_category::api::fetch_categories;
use crate::domain::a002_brand::api::fetch_brands;
use crate::domain::a003_product::api::fetch_products;

pub fn create_session() -> RwSignal<CatalogueSession> {
    RwSignal::new(CatalogueSession::new(DEFAULT_PAGE_SIZE))
}

/// Load categories and brands into the session
pub fn load_lookups(session: RwSignal<CatalogueSession>) {
    session.update(|s| s.begin_lookups());
    leptos::task::spawn_local(async move {
        let result = lookups().await;
        if let Err(err) = &result {
            log::error!("catalogue lookups failed: {}", err);
        }
        session.update(|s| s.finish_lookups(result));
    });
}

async fn lookups() -> Result<(Vec<Category>, Vec<Brand>), LoadError> {
    let categories = fetch_categories().await?;
    let brands = fetch_brands().await?;
    Ok((categories, brands))
}

/// Run a product load started by the session. A result that arrives after a
/// newer load began is dropped by the session.
pub fn run_product_load(session: RwSignal<CatalogueSession>, request: ProductRequest) {
    leptos::task::spawn_local(async move {
        let result = fetch_products(&request.filter).await;
        if let Err(err) = &result {
            log::error!("product load failed: {}", err);
        }
        let applied = session
            .try_update(|s| s.finish_product_load(request.ticket, result))
            .unwrap_or(false);
        if !applied {
            log::debug!(
                "discarded stale product load #{}",
                request.ticket.generation()
            );
        }
    });
}

/// Start a fresh product load for the current filters
pub fn reload_products(session: RwSignal<CatalogueSession>) {
    if let Some(request) = session.try_update(|s| s.begin_product_load()) {
        run_product_load(session, request);
    }
}

/// Retry whatever failed: lookups first, otherwise the product list
pub fn retry(session: RwSignal<CatalogueSession>) {
    let lookups_failed = session.with_untracked(|s| s.lookups().error().is_some());
    if lookups_failed {
        load_lookups(session);
    } else {
        reload_products(session);
    }
}

//! `CatalogueStore` over a PostgREST endpoint (the Supabase REST API)

use async_trait::async_trait;
use contracts::domain::a001_category::Category;
use contracts::domain::a002_brand::Brand;
use contracts::domain::a003_product::{Product, ProductId};
use contracts::domain::a005_specialist_service::SpecialistService;
use contracts::shared::catalogue::ProductFilter;
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::rows::{attach_variants, BrandRow, CategoryRow, ProductRow, SpecialistServiceRow, VariantRow};
use super::{CatalogueStore, StoreError};
use crate::shared::config::CatalogueStoreConfig;

const PRODUCT_COLUMNS: &str =
    "id,name,sku,description,image_url,is_active,category_id,brand_id,product_attributes(*)";

pub struct PostgrestStore {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl PostgrestStore {
    pub fn new(config: &CatalogueStoreConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.trim().to_string(),
        })
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        collection: &'static str,
        query: &[(&str, String)],
    ) -> Result<Vec<T>, StoreError> {
        let url = format!("{}/{}", self.base_url, collection);
        let mut request = self.client.get(&url).query(query);
        if !self.api_key.is_empty() {
            request = request
                .header("apikey", &self.api_key)
                .bearer_auth(&self.api_key);
        }

        let response = request.send().await.map_err(|e| StoreError::Network {
            collection,
            message: if e.is_timeout() {
                "request timed out".to_string()
            } else {
                e.to_string()
            },
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Status {
                collection,
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await.map_err(|e| StoreError::Network {
            collection,
            message: e.to_string(),
        })?;
        serde_json::from_slice(&bytes).map_err(|e| StoreError::Decode {
            collection,
            message: e.to_string(),
        })
    }

    /// Variants are optional. When the collection cannot be read the
    /// products keep no variants and offer the standard one.
    async fn with_variants(&self, mut products: Vec<Product>) -> Vec<Product> {
        if products.is_empty() {
            return products;
        }
        let ids = id_list(products.iter().map(|p| p.id));
        let query = [
            ("select", "id,product_id,variant_name".to_string()),
            ("product_id", format!("in.({})", ids)),
            ("order", "id.asc".to_string()),
        ];
        match self.fetch::<VariantRow>("product_variants", &query).await {
            Ok(rows) => attach_variants(&mut products, rows),
            Err(e) => tracing::warn!("Product variants unavailable, using standard variant: {}", e),
        }
        products
    }
}

fn id_list(ids: impl Iterator<Item = ProductId>) -> String {
    ids.map(|id| id.to_string()).collect::<Vec<_>>().join(",")
}

fn product_query(filter: &ProductFilter) -> Vec<(&'static str, String)> {
    let mut query = vec![
        ("select", PRODUCT_COLUMNS.to_string()),
        ("order", "name.asc".to_string()),
    ];
    if let Some(id) = filter.category_id {
        query.push(("category_id", format!("eq.{}", id)));
    }
    if let Some(id) = filter.brand_id {
        query.push(("brand_id", format!("eq.{}", id)));
    }
    if filter.active_only {
        query.push(("is_active", "eq.true".to_string()));
    }
    query
}

#[async_trait]
impl CatalogueStore for PostgrestStore {
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        let rows: Vec<CategoryRow> = self
            .fetch(
                "categories",
                &[
                    ("select", "id,name,slug".to_string()),
                    ("order", "name.asc".to_string()),
                ],
            )
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_brands(&self) -> Result<Vec<Brand>, StoreError> {
        let rows: Vec<BrandRow> = self
            .fetch(
                "brands",
                &[
                    ("select", "id,name".to_string()),
                    ("order", "name.asc".to_string()),
                ],
            )
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_products(&self, filter: &ProductFilter) -> Result<Vec<Product>, StoreError> {
        let rows: Vec<ProductRow> = self.fetch("products", &product_query(filter)).await?;
        Ok(self.with_variants(rows.into_iter().map(Into::into).collect()).await)
    }

    async fn products_by_ids(&self, ids: &[ProductId]) -> Result<Vec<Product>, StoreError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let rows: Vec<ProductRow> = self
            .fetch(
                "products",
                &[
                    ("select", PRODUCT_COLUMNS.to_string()),
                    ("id", format!("in.({})", id_list(ids.iter().copied()))),
                ],
            )
            .await?;
        Ok(self.with_variants(rows.into_iter().map(Into::into).collect()).await)
    }

    async fn list_specialist_services(&self) -> Result<Vec<SpecialistService>, StoreError> {
        let rows: Vec<SpecialistServiceRow> = self
            .fetch(
                "specialist_services",
                &[
                    ("select", "id,name,description,image_url,is_active".to_string()),
                    ("is_active", "eq.true".to_string()),
                    ("order", "name.asc".to_string()),
                ],
            )
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_category::CategoryId;
    use contracts::domain::a003_product::Variant;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn store_for(server: &MockServer) -> PostgrestStore {
        PostgrestStore::new(&CatalogueStoreConfig {
            base_url: format!("{}/rest/v1/", server.uri()),
            api_key: "anon".to_string(),
            timeout_secs: 5,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_categories_sent_with_key_and_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/categories"))
            .and(query_param("order", "name.asc"))
            .and(header("apikey", "anon"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 1, "name": "Fixings", "slug": "fixings"},
                {"id": 2, "name": "Power Tools", "slug": ""}
            ])))
            .mount(&server)
            .await;

        let categories = store_for(&server).list_categories().await.unwrap();
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[1].slug, "power-tools");
    }

    #[tokio::test]
    async fn test_products_scoped_by_category() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/products"))
            .and(query_param("category_id", "eq.2"))
            .and(query_param("is_active", "eq.true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 10, "category_id": 2, "name": "Drill", "product_attributes": null}
            ])))
            .mount(&server)
            .await;

        let products = store_for(&server)
            .list_products(&ProductFilter::for_category(Some(CategoryId(2))))
            .await
            .unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].category_id, CategoryId(2));
    }

    #[tokio::test]
    async fn test_variants_attached_from_own_collection() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/products"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 10, "category_id": 2, "name": "Sealant"},
                {"id": 11, "category_id": 2, "name": "Foam"}
            ])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/product_variants"))
            .and(query_param("product_id", "in.(10,11)"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 4, "product_id": 10, "variant_name": "Clear"},
                {"id": 5, "product_id": 10, "variant_name": "White"}
            ])))
            .mount(&server)
            .await;

        let products = store_for(&server)
            .list_products(&ProductFilter::for_category(None))
            .await
            .unwrap();
        assert_eq!(products[0].variants, vec![Variant::new(4, "Clear"), Variant::new(5, "White")]);
        assert!(products[1].variants.is_empty());
    }

    #[tokio::test]
    async fn test_products_load_when_variants_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/products"))
            .and(query_param("select", PRODUCT_COLUMNS))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 10, "category_id": 2, "name": "Drill"}
            ])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/product_variants"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "code": "PGRST200",
                "message": "Could not find a relationship"
            })))
            .mount(&server)
            .await;

        let store = store_for(&server);
        let products = store
            .list_products(&ProductFilter::for_category(Some(CategoryId(2))))
            .await
            .unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].variant_options(), vec![Variant::standard()]);

        let by_id = store.products_by_ids(&[ProductId(10)]).await.unwrap();
        assert_eq!(by_id[0].variant_options(), vec![Variant::standard()]);
    }

    #[tokio::test]
    async fn test_http_failure_is_typed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/brands"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let err = store_for(&server).list_brands().await.unwrap_err();
        assert!(matches!(err, StoreError::Status { status: 500, .. }));
        assert_eq!(err.collection(), "brands");
    }

    #[tokio::test]
    async fn test_malformed_payload_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/specialist_services"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"not": "a list"})))
            .mount(&server)
            .await;

        let err = store_for(&server).list_specialist_services().await.unwrap_err();
        assert!(matches!(err, StoreError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_no_ids_skips_request() {
        let server = MockServer::start().await;
        let products = store_for(&server).products_by_ids(&[]).await.unwrap();
        assert!(products.is_empty());
    }
}

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::shared::app_state::AppState;

/// All API routes of the application
pub fn configure_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // Catalogue (read-only, proxied from the catalogue store)
        .route("/api/categories", get(handlers::a001_category::list_all))
        .route("/api/brands", get(handlers::a002_brand::list_all))
        .route("/api/products", get(handlers::a003_product::list))
        .route(
            "/api/specialist-services",
            get(handlers::a005_specialist_service::list_active),
        )
        // Submissions
        .route("/api/enquiries", post(handlers::a004_enquiry::submit))
        .route("/api/contact", post(handlers::a006_contact::send))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::catalogue_store::memory::InMemoryStore;
    use crate::shared::data::db::connect_in_memory;
    use crate::shared::mail::recording::RecordingMailer;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use contracts::domain::a001_category::{Category, CategoryId};
    use contracts::domain::a002_brand::Brand;
    use contracts::domain::a003_product::Product;
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    async fn app_with(store: InMemoryStore, mailer: RecordingMailer) -> Router {
        let db = connect_in_memory().await.unwrap();
        configure_routes(AppState::new(db, Arc::new(store), Arc::new(mailer)))
    }

    fn store() -> InMemoryStore {
        InMemoryStore {
            categories: vec![
                Category::new(2, "Power Tools", "power-tools"),
                Category::new(1, "Fixings", "fixings"),
            ],
            brands: vec![Brand::new(1, "Paslode")],
            products: vec![
                Product::new(1, CategoryId(1), "Wood Screw"),
                Product::new(2, CategoryId(2), "Drill"),
                Product::new(3, CategoryId(1), "Anchor"),
                Product::new(4, CategoryId(1), "Old Anchor").inactive(),
            ],
            ..InMemoryStore::default()
        }
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_lists_keep_store_order() {
        let app = app_with(store(), RecordingMailer::default()).await;
        let (status, body) = send(app.clone(), get("/api/categories")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["slug"], "power-tools");
        assert_eq!(body[1]["slug"], "fixings");

        let (_, body) = send(app, get("/api/products?category_id=1&active_only=false")).await;
        let names: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Wood Screw", "Anchor", "Old Anchor"]);
    }

    #[tokio::test]
    async fn test_products_scoped_and_active() {
        let app = app_with(store(), RecordingMailer::default()).await;
        let (status, body) = send(app, get("/api/products?category_id=1&active_only=true")).await;
        assert_eq!(status, StatusCode::OK);
        let names: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Wood Screw", "Anchor"]);
    }

    #[tokio::test]
    async fn test_store_failure_is_503() {
        let app = app_with(InMemoryStore::offline(), RecordingMailer::default()).await;
        let (status, body) = send(app, get("/api/brands")).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"], "catalogue temporarily unavailable");
    }

    #[tokio::test]
    async fn test_enquiry_accepted() {
        let app = app_with(store(), RecordingMailer::default()).await;
        let (status, body) = send(
            app,
            post_json(
                "/api/enquiries",
                json!({
                    "customer": {"name": "Jo", "email": "jo@example.com"},
                    "items": [{"product_id": 1, "variant_id": 0, "quantity": 5}]
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["reference"].is_string());
        assert_eq!(body["notified"], true);
    }

    #[tokio::test]
    async fn test_enquiry_validation_errors_are_422() {
        let app = app_with(store(), RecordingMailer::default()).await;
        let (status, body) = send(
            app,
            post_json(
                "/api/enquiries",
                json!({
                    "customer": {"name": "", "email": "jo@example.com"},
                    "items": [{"product_id": 1, "variant_id": 0, "quantity": 0}]
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["errors"]["customer.name"].is_string());
        assert!(body["errors"]["items.0.quantity"].is_string());
    }

    #[tokio::test]
    async fn test_malformed_enquiry_is_422() {
        let app = app_with(store(), RecordingMailer::default()).await;
        let (status, body) = send(
            app,
            post_json("/api/enquiries", json!({"items": [{"quantity": -1}]})),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["errors"]["body"].is_string());
    }

    #[tokio::test]
    async fn test_contact_statuses() {
        let app = app_with(store(), RecordingMailer::default()).await;
        let (status, body) = send(
            app,
            post_json(
                "/api/contact",
                json!({"name": "Jo", "email": "jo@example.com", "message": "Hello", "reason": "pricing"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);

        let app = app_with(store(), RecordingMailer::default()).await;
        let (status, body) = send(
            app,
            post_json("/api/contact", json!({"name": "Jo", "email": "jo@example.com"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Name, email and message are required.");

        let app = app_with(store(), RecordingMailer::failing()).await;
        let (status, body) = send(
            app,
            post_json(
                "/api/contact",
                json!({"name": "Jo", "email": "jo@example.com", "message": "Hello"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Failed to send message. Please try again later.");
    }
}

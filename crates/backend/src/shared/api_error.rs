//! Error responses of the JSON API

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::shared::validation::FieldErrors;
use serde_json::json;

use super::catalogue_store::StoreError;

pub const CATALOGUE_UNAVAILABLE: &str = "catalogue temporarily unavailable";

#[derive(Debug)]
pub enum ApiError {
    /// The catalogue store could not be read
    CatalogueUnavailable,
    /// Field-level validation failures
    Invalid(FieldErrors),
    Internal,
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        tracing::error!(collection = err.collection(), "Catalogue store failure: {}", err);
        ApiError::CatalogueUnavailable
    }
}

impl From<FieldErrors> for ApiError {
    fn from(errors: FieldErrors) -> Self {
        ApiError::Invalid(errors)
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        tracing::error!("Internal error: {:#}", err);
        ApiError::Internal
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::CatalogueUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "error": CATALOGUE_UNAVAILABLE })),
            )
                .into_response(),
            ApiError::Invalid(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "errors": errors })),
            )
                .into_response(),
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        }
    }
}

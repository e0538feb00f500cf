use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a006_contact::{ContactRequest, ContactResponse};

use crate::domain::a006_contact::service::{
    self, ContactError, REQUIRED_FIELDS_MESSAGE, SEND_FAILED_MESSAGE,
};
use crate::shared::app_state::AppState;

/// POST /api/contact
pub async fn send(
    State(state): State<AppState>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> (StatusCode, Json<ContactResponse>) {
    let Ok(Json(request)) = payload else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ContactResponse::failed(REQUIRED_FIELDS_MESSAGE)),
        );
    };

    match service::send(state.mailer.as_ref(), request).await {
        Ok(()) => (StatusCode::OK, Json(ContactResponse::ok())),
        Err(ContactError::Invalid(_)) => (
            StatusCode::BAD_REQUEST,
            Json(ContactResponse::failed(REQUIRED_FIELDS_MESSAGE)),
        ),
        Err(ContactError::Mail(e)) => {
            tracing::error!("Contact mail failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ContactResponse::failed(SEND_FAILED_MESSAGE)),
            )
        }
    }
}

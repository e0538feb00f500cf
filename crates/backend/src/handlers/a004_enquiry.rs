use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use contracts::domain::a004_enquiry::{EnquiryReceipt, EnquirySubmission};
use contracts::shared::validation::FieldErrors;

use crate::domain::a004_enquiry;
use crate::shared::api_error::ApiError;
use crate::shared::app_state::AppState;

/// POST /api/enquiries
pub async fn submit(
    State(state): State<AppState>,
    payload: Result<Json<EnquirySubmission>, JsonRejection>,
) -> Result<Json<EnquiryReceipt>, ApiError> {
    let Json(submission) = payload.map_err(|rejection| {
        tracing::warn!("Malformed enquiry body: {}", rejection.body_text());
        let mut errors = FieldErrors::new();
        errors.insert("body", "The enquiry could not be read.");
        ApiError::Invalid(errors)
    })?;

    let receipt = a004_enquiry::service::submit(
        &state.db,
        state.store.as_ref(),
        state.mailer.as_ref(),
        submission,
    )
    .await?;
    Ok(Json(receipt))
}

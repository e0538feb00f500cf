use contracts::domain::a004_enquiry::{EnquiryReceipt, EnquirySubmission, SubmissionError};
use contracts::shared::validation::FieldErrors;
use gloo_net::http::Request;
use serde::Deserialize;

use crate::shared::api_utils::api_url;

/// Body of a 422 response
#[derive(Debug, Deserialize)]
struct InvalidBody {
    errors: FieldErrors,
}

/// Map a non-success status and its body to the client error
fn rejection(status: u16, body: &str) -> SubmissionError {
    if status == 422 {
        if let Ok(invalid) = serde_json::from_str::<InvalidBody>(body) {
            return SubmissionError::Invalid(invalid.errors);
        }
    }
    SubmissionError::Rejected {
        status,
        message: None,
    }
}

/// Send the enquiry list
pub async fn submit_enquiry(
    submission: &EnquirySubmission,
) -> Result<EnquiryReceipt, SubmissionError> {
    let response = Request::post(&api_url("/api/enquiries"))
        .json(submission)
        .map_err(|e| SubmissionError::Network(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| SubmissionError::Network(format!("Failed to send request: {}", e)))?;

    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(rejection(response.status(), &body));
    }

    response
        .json::<EnquiryReceipt>()
        .await
        .map_err(|e| SubmissionError::Network(format!("Failed to parse response: {}", e)))
}

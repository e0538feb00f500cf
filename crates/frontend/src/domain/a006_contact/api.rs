use contracts::domain::a004_enquiry::SubmissionError;
use contracts::domain::a006_contact::{ContactRequest, ContactResponse};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Send the contact form. Error statuses still carry a `ContactResponse`
/// whose message is shown to the visitor.
pub async fn send_contact(request: &ContactRequest) -> Result<(), SubmissionError> {
    let response = Request::post(&api_url("/api/contact"))
        .json(request)
        .map_err(|e| SubmissionError::Network(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| SubmissionError::Network(format!("Failed to send request: {}", e)))?;

    let status = response.status();
    let body = response.json::<ContactResponse>().await.ok();
    match body {
        Some(ContactResponse { success: true, .. }) if response.ok() => Ok(()),
        Some(ContactResponse { message, .. }) => Err(SubmissionError::Rejected { status, message }),
        None => Err(SubmissionError::Rejected {
            status,
            message: None,
        }),
    }
}

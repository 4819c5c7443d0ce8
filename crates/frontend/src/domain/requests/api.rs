//! Write operations of the request workflows, plus the listing read.

use contracts::domain::a005_request::{
    RequestSummary, RequestsResponse, ResignationRequest, WorkplaceChangeRequest,
};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, error_message};

const GENERIC_SUBMIT_ERROR: &str = "Failed to submit the request.";

/// Create a resignation or replacement request (one endpoint serves both
/// workflows, discriminated by the payload's workflow tag). On failure the
/// returned message prefers the server-supplied text.
pub async fn create_resignation_request(payload: &ResignationRequest) -> Result<(), String> {
    let response = Request::post(&api_url("/api/requests/resignation"))
        .json(payload)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_message(response, GENERIC_SUBMIT_ERROR).await);
    }

    Ok(())
}

/// Create a workplace change request.
pub async fn create_workplace_change_request(
    payload: &WorkplaceChangeRequest,
) -> Result<(), String> {
    let response = Request::post(&api_url("/api/requests/workplace-change"))
        .json(payload)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_message(response, GENERIC_SUBMIT_ERROR).await);
    }

    Ok(())
}

/// Submitted requests, newest first.
pub async fn list_requests() -> Result<Vec<RequestSummary>, String> {
    let response = Request::get(&api_url("/api/requests"))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: RequestsResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data.requests)
}

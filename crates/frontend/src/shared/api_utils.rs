//! API utilities for frontend-backend communication.

use contracts::shared::api::ErrorResponse;
use gloo_net::http::Response;

/// Get the base URL for API requests.
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server. Empty string if window is
/// not available.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path (should start with "/api/").
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Build a full API URL with query parameters. No trailing `?` when the
/// parameter list is empty.
pub fn api_url_with_query(path: &str, pairs: &[(&str, String)]) -> String {
    format!("{}{}", api_url(path), query_string(pairs))
}

/// Percent-encoded query string, including the leading `?`, or an empty
/// string for an empty parameter list.
pub fn query_string(pairs: &[(&str, String)]) -> String {
    if pairs.is_empty() {
        return String::new();
    }
    let query = pairs
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    format!("?{}", query)
}

/// Message to surface for a failed write: the server-supplied `error`
/// field when the body carries one, a generic fallback otherwise.
pub async fn error_message(response: Response, fallback: &str) -> String {
    match response.json::<ErrorResponse>().await {
        Ok(ErrorResponse { error: Some(msg) }) if !msg.trim().is_empty() => msg,
        _ => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_string_encodes_values() {
        let query = query_string(&[
            ("companyId", "c 1".to_string()),
            ("startDate", "2025-03-01T00:00:00.000Z".to_string()),
        ]);
        assert_eq!(query, "?companyId=c%201&startDate=2025-03-01T00%3A00%3A00.000Z");
    }

    #[test]
    fn no_pairs_means_no_question_mark() {
        assert_eq!(query_string(&[]), "");
    }
}

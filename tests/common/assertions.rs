//! Assertion helpers for tests.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use super::app::TestResponse;

/// Assert response has expected status code
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    let status = response.status;
    let body = response.text();
    assert_eq!(
        status, expected,
        "Expected status {expected}, got {status}. Body: {body}"
    );
}

/// Assert response is OK (200)
pub fn assert_ok(response: &TestResponse) {
    assert_status(response, StatusCode::OK);
}

/// Assert an error response: HTTP status, JSON `status` field and message
pub fn assert_api_error(response: &TestResponse, expected: StatusCode, message: &str) {
    assert_status(response, expected);
    let json: serde_json::Value = response.json();

    assert_eq!(
        json["status"].as_u64(),
        Some(expected.as_u16() as u64),
        "Expected JSON status {}. Full response: {}",
        expected.as_u16(),
        serde_json::to_string_pretty(&json).unwrap()
    );
    assert_eq!(json["error"].as_str(), Some(message));
}

/// Assert a hex-to-ral response points at `ral` with the given similarity
pub fn assert_match(response: &TestResponse, ral: &str, similarity: &str) {
    assert_ok(response);
    let json: serde_json::Value = response.json();

    assert_eq!(json["ral"].as_str(), Some(ral), "Unexpected match: {json}");
    assert_eq!(json["similarity"].as_str(), Some(similarity));
}

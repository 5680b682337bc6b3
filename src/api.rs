//! ==============================================================================
//! api.rs - API client for the Aelys HTTP Server demo endpoints
//! ==============================================================================
//!
//! purpose:
//!     issues the fetch calls behind the buttons and shortcuts. the body
//!     is kept as raw json so the panel can show exactly what the server
//!     sent, whatever the endpoint.
//!
//! ==============================================================================

use gloo_net::http::{Request, Response};
use serde_json::Value;

/// GET endpoints, indexed by shortcut digit minus one
pub const ENDPOINTS: [&str; 3] = ["/api/hello", "/api/status", "/api/time"];

/// fixed echo endpoint and message for the POST smoke test
pub const ECHO_ENDPOINT: &str = "/api/echo";
pub const ECHO_MESSAGE: &str = "Hello from Aelys HTTP Server!";

/// one settled response: http status plus raw json body
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    /// whether the status is in the 2xx success range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// pretty print the body with two-space indentation
    pub fn pretty(&self) -> String {
        serde_json::to_string_pretty(&self.body).unwrap_or_else(|_| self.body.to_string())
    }
}

/// GET an endpoint and parse the body as json
pub async fn fetch_endpoint(path: &str) -> Result<ApiResponse, String> {
    let response = Request::get(path)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    read_json(response).await
}

/// POST the fixed echo message as plain text
pub async fn post_echo() -> Result<ApiResponse, String> {
    let response = Request::post(ECHO_ENDPOINT)
        .header("Content-Type", "text/plain")
        .body(ECHO_MESSAGE)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    read_json(response).await
}

/// read the status and json body off a settled response.
/// a non-json body fails here and funnels into the same error path
/// as a network failure.
async fn read_json(response: Response) -> Result<ApiResponse, String> {
    let status = response.status();
    let body = response
        .json::<Value>()
        .await
        .map_err(|e| e.to_string())?;

    Ok(ApiResponse { status, body })
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_table_order() {
        assert_eq!(ENDPOINTS, ["/api/hello", "/api/status", "/api/time"]);
    }

    #[test]
    fn test_success_range_boundaries() {
        let resp = |status| ApiResponse { status, body: Value::Null };
        assert!(resp(200).is_success());
        assert!(resp(299).is_success());
        assert!(!resp(199).is_success());
        assert!(!resp(300).is_success());
        assert!(!resp(404).is_success());
    }
}

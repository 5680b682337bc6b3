//! ==============================================================================
//! display.rs - display target rendering
//! ==============================================================================
//!
//! purpose:
//!     converts a settled request outcome into the text and status
//!     indicator shown by the response panel. both the GET flow and the
//!     POST flow funnel through render_outcome so the success/failure
//!     formatting lives in one place.
//!
//! ==============================================================================

use crate::api::ApiResponse;

const SUCCESS_COLOR: &str = "#10b981";
const FAILURE_COLOR: &str = "#ef4444";

/// visual status of the response panel, shown as its left border
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Indicator {
    /// no request has settled yet
    Unset,
    Success,
    Failure,
}

impl Indicator {
    /// css border-left value for the panel
    pub fn border(self) -> String {
        match self {
            Indicator::Unset => "none".to_string(),
            Indicator::Success => format!("4px solid {}", SUCCESS_COLOR),
            Indicator::Failure => format!("4px solid {}", FAILURE_COLOR),
        }
    }
}

/// render one settled outcome into display text and indicator.
///
/// an http error status with a valid json body is not an error: the body
/// still renders and only the indicator flips to failure. network and
/// json parse failures share the single error path.
pub fn render_outcome(outcome: Result<ApiResponse, String>) -> (String, Indicator) {
    match outcome {
        Ok(resp) => {
            let indicator = if resp.is_success() {
                Indicator::Success
            } else {
                Indicator::Failure
            };
            (resp.pretty(), indicator)
        }
        Err(e) => (format!("Error: {}", e), Indicator::Failure),
    }
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn settled(status: u16, body: serde_json::Value) -> Result<ApiResponse, String> {
        Ok(ApiResponse { status, body })
    }

    #[test]
    fn test_success_renders_pretty_json() {
        let (text, indicator) = render_outcome(settled(200, json!({"message": "hi"})));
        assert_eq!(text, "{\n  \"message\": \"hi\"\n}");
        assert_eq!(indicator, Indicator::Success);
    }

    #[test]
    fn test_echo_response_renders_verbatim() {
        let body = json!({"echo": "Hello from Aelys HTTP Server!"});
        let (text, indicator) = render_outcome(settled(200, body));
        assert!(text.contains("\"echo\": \"Hello from Aelys HTTP Server!\""));
        assert_eq!(indicator, Indicator::Success);
    }

    #[test]
    fn test_http_error_status_still_renders_body() {
        let (text, indicator) = render_outcome(settled(404, json!({"error": "not found"})));
        assert!(text.contains("\"error\": \"not found\""));
        assert_eq!(indicator, Indicator::Failure);
    }

    #[test]
    fn test_network_failure_renders_error_text() {
        let (text, indicator) = render_outcome(Err("network unreachable".to_string()));
        assert_eq!(text, "Error: network unreachable");
        assert_eq!(indicator, Indicator::Failure);
    }

    #[test]
    fn test_border_colors() {
        assert_eq!(Indicator::Success.border(), "4px solid #10b981");
        assert_eq!(Indicator::Failure.border(), "4px solid #ef4444");
        assert_eq!(Indicator::Unset.border(), "none");
    }
}

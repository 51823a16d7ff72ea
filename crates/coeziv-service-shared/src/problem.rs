//! RFC 9457 Problem Details for HTTP APIs.
//!
//! Provides structured error responses following the Problem Details standard.
//! See: <https://www.rfc-editor.org/rfc/rfc9457.html>

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use coeziv_lib::Error as LibError;

/// Problem type URI for queries without a route (unknown or unreachable nodes).
pub const PROBLEM_NO_ROUTE: &str = "/problems/no-route";

/// Problem type URI for internal server errors.
pub const PROBLEM_INTERNAL_ERROR: &str = "/problems/internal-error";

/// RFC 9457 Problem Details response structure.
///
/// # Example
///
/// ```
/// use coeziv_service_shared::{ProblemDetails, PROBLEM_NO_ROUTE};
/// use axum::http::StatusCode;
///
/// let problem = ProblemDetails::new(PROBLEM_NO_ROUTE, "No Route", StatusCode::BAD_REQUEST)
///     .with_detail("No route exists from 'A' to 'Z'")
///     .with_request_id("req-12345");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemDetails {
    /// URI reference identifying the problem type (relative).
    #[serde(rename = "type")]
    pub type_uri: String,

    /// Short, human-readable summary of the problem.
    pub title: String,

    /// HTTP status code for this problem.
    pub status: u16,

    /// Human-readable explanation specific to this occurrence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// URI reference identifying the specific occurrence (e.g., request ID).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,

    /// Content type for this response (always "application/problem+json").
    pub content_type: String,
}

impl ProblemDetails {
    /// Create a new ProblemDetails with required fields.
    pub fn new(type_uri: impl Into<String>, title: impl Into<String>, status: StatusCode) -> Self {
        Self {
            type_uri: type_uri.into(),
            title: title.into(),
            status: status.as_u16(),
            detail: None,
            instance: None,
            content_type: "application/problem+json".to_string(),
        }
    }

    /// Add a detailed explanation of this specific problem occurrence.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Add the request identifier for tracing.
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.instance = Some(request_id.into());
        self
    }

    /// Create a 400 Bad Request problem for a query without a route.
    ///
    /// Unknown nodes and unreachable destinations share this response.
    pub fn no_route(src: &str, dst: &str, request_id: impl Into<String>) -> Self {
        Self::new(PROBLEM_NO_ROUTE, "No Route", StatusCode::BAD_REQUEST)
            .with_detail(format!("No route exists from '{}' to '{}'", src, dst))
            .with_request_id(request_id)
    }

    /// Create a 500 Internal Server Error problem.
    pub fn internal_error(detail: impl Into<String>, request_id: impl Into<String>) -> Self {
        Self::new(
            PROBLEM_INTERNAL_ERROR,
            "Internal Error",
            StatusCode::INTERNAL_SERVER_ERROR,
        )
        .with_detail(detail)
        .with_request_id(request_id)
    }
}

impl std::fmt::Display for ProblemDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}",
            self.title,
            self.detail.as_deref().unwrap_or("")
        )
    }
}

impl std::error::Error for ProblemDetails {}

impl IntoResponse for ProblemDetails {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let mut response = Json(&self).into_response();
        response.headers_mut().insert(
            axum::http::header::CONTENT_TYPE,
            axum::http::HeaderValue::from_static("application/problem+json"),
        );

        *response.status_mut() = status;
        response
    }
}

/// Convert library errors raised while answering a query to ProblemDetails.
///
/// Only `RouteNotFound` is the caller's concern; anything else reaching a
/// handler is an internal failure. The `request_id` must be provided
/// separately since library errors don't have it.
pub fn from_lib_error(error: &LibError, request_id: &str) -> ProblemDetails {
    match error {
        LibError::RouteNotFound { start, goal } => ProblemDetails::no_route(start, goal, request_id),
        _ => ProblemDetails::internal_error(error.to_string(), request_id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_problem_details_new() {
        let problem = ProblemDetails::new(PROBLEM_NO_ROUTE, "No Route", StatusCode::BAD_REQUEST);
        assert_eq!(problem.type_uri, PROBLEM_NO_ROUTE);
        assert_eq!(problem.title, "No Route");
        assert_eq!(problem.status, 400);
        assert_eq!(problem.content_type, "application/problem+json");
    }

    #[test]
    fn test_problem_details_no_route() {
        let problem = ProblemDetails::no_route("A", "Z", "req-1");
        assert_eq!(problem.status, 400);
        assert_eq!(problem.instance.as_deref(), Some("req-1"));
        let detail = problem.detail.as_deref().unwrap();
        assert!(detail.contains("'A'"));
        assert!(detail.contains("'Z'"));
    }

    #[test]
    fn test_problem_details_serialization() {
        let problem = ProblemDetails::no_route("A", "B", "req-test");
        let json = serde_json::to_string(&problem).unwrap();

        assert!(json.contains("\"type\":\"/problems/no-route\""));
        assert!(json.contains("\"title\":\"No Route\""));
        assert!(json.contains("\"status\":400"));
        assert!(json.contains("\"instance\":\"req-test\""));
    }

    #[test]
    fn test_problem_details_display() {
        let problem = ProblemDetails::internal_error("boom", "req-x");
        assert_eq!(problem.to_string(), "Internal Error: boom");
    }

    #[test]
    fn test_problem_details_into_response_sets_status_and_type() {
        let response = ProblemDetails::no_route("A", "Z", "req-r").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get(axum::http::header::CONTENT_TYPE).unwrap(),
            "application/problem+json"
        );
    }

    #[test]
    fn test_from_lib_error_route_not_found() {
        let error = LibError::RouteNotFound {
            start: "A".to_string(),
            goal: "Q".to_string(),
        };
        let problem = from_lib_error(&error, "req-route");

        assert_eq!(problem.type_uri, PROBLEM_NO_ROUTE);
        assert_eq!(problem.status, 400);
        assert!(problem.detail.as_deref().unwrap().contains("Q"));
    }

    #[test]
    fn test_from_lib_error_reconstruction_is_internal() {
        let error = LibError::PathReconstruction {
            node: "C".to_string(),
            edge: "X".to_string(),
        };
        let problem = from_lib_error(&error, "req-internal");
        assert_eq!(problem.type_uri, PROBLEM_INTERNAL_ERROR);
        assert_eq!(problem.status, 500);
    }

    #[test]
    fn test_from_lib_error_load_failure_is_internal() {
        let error = LibError::NetworkNotFound {
            path: std::path::PathBuf::from("/missing/network.json"),
        };
        let problem = from_lib_error(&error, "req-load");
        assert_eq!(problem.type_uri, PROBLEM_INTERNAL_ERROR);
        assert_eq!(problem.status, 500);
    }
}

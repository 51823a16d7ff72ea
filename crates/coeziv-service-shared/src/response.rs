//! Response wrapper for successful HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Wrapper for successful responses with content type metadata.
///
/// The payload fields are flattened into the top-level JSON object, mirroring
/// the `content_type` member carried by [`ProblemDetails`](crate::ProblemDetails).
///
/// # Example
///
/// ```
/// use coeziv_lib::{plan_route, reference_network, RouteRequest};
/// use coeziv_service_shared::ServiceResponse;
///
/// let graph = reference_network().build().unwrap();
/// let plan = plan_route(&graph, &RouteRequest::new("A", "F")).unwrap();
/// let response = ServiceResponse::new(plan);
/// assert_eq!(response.content_type, "application/json");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceResponse<T> {
    /// The actual response payload.
    #[serde(flatten)]
    pub data: T,

    /// Content type for this response.
    pub content_type: String,
}

impl<T> ServiceResponse<T> {
    /// Create a new successful response with the JSON content type.
    pub fn new(data: T) -> Self {
        Self {
            data,
            content_type: "application/json".to_string(),
        }
    }
}

impl<T> From<T> for ServiceResponse<T> {
    fn from(data: T) -> Self {
        Self::new(data)
    }
}

impl<T: Serialize> IntoResponse for ServiceResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coeziv_lib::{reference_network, RoutePlan};

    #[test]
    fn test_route_plan_fields_are_flattened() {
        let plan = RoutePlan {
            nodes: vec!["A".to_string(), "B".to_string()],
            edges: vec!["A-B".to_string()],
            total_time_min: 2.4,
            avg_tension: 0.2,
            total_cost: 2.8,
        };
        let json = serde_json::to_value(ServiceResponse::new(plan)).unwrap();

        assert_eq!(json["nodes"], serde_json::json!(["A", "B"]));
        assert_eq!(json["edges"], serde_json::json!(["A-B"]));
        assert_eq!(json["total_cost"], 2.8);
        assert_eq!(json["content_type"], "application/json");
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_response_from_trait() {
        let network = reference_network();
        let response: ServiceResponse<_> = network.clone().into();
        assert_eq!(response.data, network);
    }

    #[test]
    fn test_response_deserialization() {
        let json = r#"{"nodes":["A"],"edges":[],"content_type":"application/json"}"#;
        let response: ServiceResponse<coeziv_lib::RoadNetwork> = serde_json::from_str(json).unwrap();
        assert_eq!(response.data.nodes, vec!["A"]);
        assert!(response.data.edges.is_empty());
    }

    #[test]
    fn test_into_response_is_ok() {
        let response = ServiceResponse::new(reference_network()).into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}

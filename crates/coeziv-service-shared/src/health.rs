//! Health check handlers for Kubernetes probes.
//!
//! Provides `/health/live` and `/health/ready` endpoints that return JSON
//! status responses for Kubernetes liveness and readiness probes.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::AppState;

/// Health status response for liveness and readiness probes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Status indicator, always "ok".
    pub status: String,

    /// Service name for identification.
    pub service: String,

    /// Service version from build-time.
    pub version: String,

    /// Number of intersections in the graph (readiness only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nodes_loaded: Option<usize>,

    /// Number of directed edges in the graph (readiness only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edges_loaded: Option<usize>,
}

impl HealthStatus {
    /// Create a healthy liveness status.
    pub fn alive(service: &str, version: &str) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.to_string(),
            version: version.to_string(),
            nodes_loaded: None,
            edges_loaded: None,
        }
    }

    /// Create a ready status with graph sizes.
    pub fn ready(service: &str, version: &str, nodes: usize, edges: usize) -> Self {
        Self {
            nodes_loaded: Some(nodes),
            edges_loaded: Some(edges),
            ..Self::alive(service, version)
        }
    }
}

/// Liveness probe handler.
///
/// ```text
/// GET /health/live
/// {"status":"ok","service":"coeziv-service-shared","version":"0.1.0"}
/// ```
pub async fn health_live() -> impl IntoResponse {
    let status = HealthStatus::alive(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    (StatusCode::OK, Json(status))
}

/// Readiness probe handler.
///
/// State is only constructed around a fully built graph, so a running
/// service is always ready; the response reports what was loaded.
///
/// ```text
/// GET /health/ready
/// {"status":"ok","service":"coeziv-service-shared","version":"0.1.0","nodes_loaded":6,"edges_loaded":14}
/// ```
pub async fn health_ready(State(state): State<AppState>) -> Response {
    let graph = state.graph();
    let status = HealthStatus::ready(
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        graph.nodes().len(),
        graph.edge_count(),
    );
    (StatusCode::OK, Json(status)).into_response()
}

//! Coeziv route planning HTTP microservice.
//!
//! This crate exposes the multi-criteria router over HTTP. The binary in
//! `main.rs` only wires configuration and the listener; everything a test
//! needs is reachable through [`router`].
//!
//! # Endpoints
//!
//! - `GET /api/route?src=&dst=&alpha=&beta=` - Compute the cheapest route
//! - `GET /api/graph` - The static road network
//! - `GET /metrics` - Prometheus metrics endpoint
//! - `GET /health/live` - Kubernetes liveness probe
//! - `GET /health/ready` - Kubernetes readiness probe

#![deny(warnings)]

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

use coeziv_lib::{RoadNetwork, RoutePlan, RouteRequest, plan_route};
use coeziv_service_shared::{
    AppState, MetricsLayer, ProblemDetails, RequestId, RouteQuery, ServiceResponse,
    from_lib_error, health_live, health_ready, metrics_handler, record_graph_served,
    record_route_computed, record_route_edges, record_route_not_found,
};

/// Service label attached to business metrics.
const SERVICE: &str = "route";

/// HTTP response - either success or RFC 9457 error.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Response {
    Success(ServiceResponse<RoutePlan>),
    Error(ProblemDetails),
}

impl IntoResponse for Response {
    fn into_response(self) -> axum::response::Response {
        match self {
            Response::Success(data) => (StatusCode::OK, Json(data)).into_response(),
            Response::Error(problem) => problem.into_response(),
        }
    }
}

/// Build the service router over `state`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/route", get(route_handler))
        .route("/api/graph", get(graph_handler))
        .route("/metrics", get(metrics_handler))
        .route("/health/live", get(health_live))
        .route("/health/ready", get(health_ready))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(MetricsLayer)
        .with_state(state)
}

/// Handle GET /api/route requests.
///
/// When a key is repeated its first value is used.
async fn route_handler(
    State(state): State<AppState>,
    request_id: RequestId,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Response {
    let query = RouteQuery::from_pairs(pairs);

    let params = query.resolve(state.default_src(), state.default_dst());
    info!(
        request_id = %request_id,
        src = %params.src,
        dst = %params.dst,
        alpha = params.weights.alpha,
        beta = params.weights.beta,
        "handling route request"
    );

    let graph = state.graph();
    let request = RouteRequest::from(params);

    match plan_route(graph, &request) {
        Ok(plan) => {
            record_route_computed(SERVICE);
            record_route_edges(plan.hop_count());
            info!(
                request_id = %request_id,
                edges = plan.hop_count(),
                total_cost = plan.total_cost,
                "route computed successfully"
            );
            Response::Success(ServiceResponse::new(plan))
        }
        Err(e) => {
            let reason = if graph.contains_node(&request.src) && graph.contains_node(&request.dst) {
                "unreachable"
            } else {
                "unknown_node"
            };
            record_route_not_found(reason, SERVICE);
            warn!(request_id = %request_id, reason, error = %e, "no route");
            Response::Error(from_lib_error(&e, request_id.as_str()))
        }
    }
}

/// Handle GET /api/graph requests.
async fn graph_handler(State(state): State<AppState>) -> ServiceResponse<RoadNetwork> {
    record_graph_served(SERVICE);
    ServiceResponse::new(state.graph().to_network())
}

//! Shared infrastructure for coeziv HTTP microservices.
//!
//! This crate provides common functionality used by the routing service:
//!
//! - [`AppState`]: Pre-built immutable road graph shared by every handler
//! - [`ServiceConfig`]: Environment-driven service configuration
//! - [`health_live`] / [`health_ready`]: Health check handlers for Kubernetes liveness/readiness probes
//! - [`ProblemDetails`]: RFC 9457 Problem Details for consistent error responses
//! - [`ServiceResponse`]: Wrapper for successful responses with content type
//! - [`metrics`]: Prometheus metrics infrastructure
//! - [`logging`]: Structured JSON logging setup
//! - [`middleware`]: Request tracking and metrics middleware
//! - [`RouteQuery`]: Lenient query-string parsing for route requests
//!
//! # Architecture
//!
//! The services follow a thin-handler pattern where all routing logic resides
//! in `coeziv-lib`. This crate provides only HTTP glue:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  axum Handler                                               │
//! │  - Parse query string (defaults on malformed weights)       │
//! │  - Call coeziv-lib APIs against the shared Graph            │
//! │  - Format response or problem                               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Testing Support
//!
//! The [`test_utils`] module provides state built from the reference network.
//! Enable the `test-utils` feature to access it from dependent crates.

#![deny(warnings)]

pub mod config;
mod health;
pub mod logging;
pub mod metrics;
pub mod middleware;
mod problem;
mod request;
mod response;
mod state;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::ServiceConfig;
pub use health::{health_live, health_ready, HealthStatus};
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use metrics::{
    init_metrics, metrics_handler, record_graph_served, record_route_computed,
    record_route_edges, record_route_not_found, MetricsConfig, MetricsError,
};
pub use middleware::{extract_or_generate_request_id, MetricsLayer, RequestId};
pub use problem::{
    from_lib_error, ProblemDetails, PROBLEM_INTERNAL_ERROR, PROBLEM_NO_ROUTE,
};
pub use request::{RouteParams, RouteQuery};
pub use response::ServiceResponse;
pub use state::{AppState, AppStateError};

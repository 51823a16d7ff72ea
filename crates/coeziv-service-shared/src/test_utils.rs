//! Test utilities for microservice handler testing.
//!
//! This module provides fixtures and helpers for testing HTTP handlers
//! against the built-in reference road network.

use std::sync::OnceLock;

use coeziv_lib::reference_network;

use crate::state::AppState;

/// Lazily-initialized test state over the reference network.
static TEST_STATE: OnceLock<AppState> = OnceLock::new();

/// Get a shared test AppState built from the reference network with
/// defaults `A` → `F`.
///
/// # Panics
///
/// Panics if the reference network fails to build.
pub fn test_state() -> AppState {
    TEST_STATE
        .get_or_init(|| {
            let graph = reference_network()
                .build()
                .unwrap_or_else(|e| panic!("reference network failed to build: {}", e));
            AppState::from_graph(graph, fixture_nodes::A, fixture_nodes::F)
                .unwrap_or_else(|e| panic!("reference state failed to initialize: {}", e))
        })
        .clone()
}

/// Intersections of the reference network.
pub mod fixture_nodes {
    pub const A: &str = "A";
    pub const B: &str = "B";
    pub const C: &str = "C";
    pub const D: &str = "D";
    pub const E: &str = "E";
    pub const F: &str = "F";

    /// A node that is never part of the reference network.
    pub const MISSING: &str = "Z";
}

/// Generate a unique request ID for testing.
pub fn test_request_id() -> String {
    format!("test-{}", uuid::Uuid::now_v7())
}

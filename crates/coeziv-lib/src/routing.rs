//! Route planning entry points.
//!
//! This module provides:
//! - [`RouteRequest`] - source, destination and cost weights for one query
//! - [`RoutePlan`] - the reconstructed route with aggregate statistics
//! - [`reconstruct_route`] - walks a [`ShortestPathTree`] back into a plan
//! - [`find_route`] / [`plan_route`] - search plus reconstruction
//!
//! # Example
//!
//! ```ignore
//! use coeziv_lib::{plan_route, reference_network, RouteRequest};
//!
//! let graph = reference_network().build()?;
//! let plan = plan_route(&graph, &RouteRequest::new("A", "F"))?;
//! println!("{} edges, {:.2} min", plan.hop_count(), plan.total_time_min);
//! ```

use serde::{Deserialize, Serialize};

use crate::cost::{travel_time_minutes, CostWeights};
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::path::{find_shortest_path, ShortestPathTree};

/// High-level route planning request.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRequest {
    pub src: String,
    pub dst: String,
    pub weights: CostWeights,
}

impl RouteRequest {
    /// Request with the default weights.
    pub fn new(src: impl Into<String>, dst: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            dst: dst.into(),
            weights: CostWeights::default(),
        }
    }

    pub fn with_weights(mut self, weights: CostWeights) -> Self {
        self.weights = weights;
        self
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePlan {
    /// Node ids from source to destination, inclusive.
    pub nodes: Vec<String>,
    /// Traversed directed edge ids, parallel to consecutive node pairs.
    pub edges: Vec<String>,
    pub total_time_min: f64,
    pub avg_tension: f64,
    /// Alpha/beta weighted distance settled by the search.
    pub total_cost: f64,
}

impl RoutePlan {
    /// Number of edges in the route.
    pub fn hop_count(&self) -> usize {
        self.edges.len()
    }
}

/// Walk the predecessor links of `tree` back into a [`RoutePlan`].
///
/// Time and tension are recomputed per edge rather than taken from the
/// weighted search cost.
pub fn reconstruct_route(graph: &Graph, tree: &ShortestPathTree<'_>) -> Result<RoutePlan> {
    let mut nodes = vec![tree.goal().to_string()];
    let mut edges = Vec::new();
    let mut total_time = 0.0;
    let mut total_tension = 0.0;

    let mut current = tree.goal();
    while current != tree.source() {
        let Some((previous, edge_id)) = tree.predecessor(current) else {
            return Err(Error::PathReconstruction {
                node: current.to_string(),
                edge: String::from("<none>"),
            });
        };
        let edge = graph
            .edge_from(previous, edge_id)
            .ok_or_else(|| Error::PathReconstruction {
                node: previous.to_string(),
                edge: edge_id.to_string(),
            })?;

        total_time += travel_time_minutes(edge);
        total_tension += edge.tension;
        edges.push(edge.id.clone());
        nodes.push(previous.to_string());
        current = previous;
    }

    nodes.reverse();
    edges.reverse();

    let avg_tension = total_tension / edges.len().max(1) as f64;

    Ok(RoutePlan {
        nodes,
        edges,
        total_time_min: total_time,
        avg_tension,
        total_cost: tree.distance(),
    })
}

/// Search and reconstruct a route; `None` when no route exists.
///
/// Unknown endpoints and unreachable destinations are indistinguishable here.
pub fn find_route(graph: &Graph, src: &str, dst: &str, weights: CostWeights) -> Option<RoutePlan> {
    let tree = find_shortest_path(graph, src, dst, weights)?;
    match reconstruct_route(graph, &tree) {
        Ok(plan) => Some(plan),
        Err(error) => {
            tracing::error!(%error, src, dst, "route reconstruction failed");
            None
        }
    }
}

/// Compute a route for `request`.
///
/// Returns [`Error::RouteNotFound`] when either node is unknown or the
/// destination cannot be reached.
pub fn plan_route(graph: &Graph, request: &RouteRequest) -> Result<RoutePlan> {
    let Some(tree) = find_shortest_path(graph, &request.src, &request.dst, request.weights) else {
        return Err(Error::RouteNotFound {
            start: request.src.clone(),
            goal: request.dst.clone(),
        });
    };

    reconstruct_route(graph, &tree)
}

//! Coeziv library entry points.
//!
//! This crate owns the road graph, the tension-aware cost function, the
//! Dijkstra path finder and route reconstruction. Higher-level consumers (the
//! CLI and the HTTP service) should only depend on the functions exported here
//! instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod cost;
pub mod error;
pub mod graph;
pub mod network;
pub mod path;
pub mod routing;

pub use cost::{edge_cost, effective_speed, travel_time_minutes, CostWeights};
pub use error::{Error, Result};
pub use graph::{build_graph, Edge, Graph, NodeId, REVERSE_SUFFIX};
pub use network::{reference_network, RoadNetwork};
pub use path::{find_shortest_path, ShortestPathTree};
pub use routing::{find_route, plan_route, reconstruct_route, RoutePlan, RouteRequest};

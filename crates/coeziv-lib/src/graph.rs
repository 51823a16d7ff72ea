use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::network::RoadNetwork;

/// Suffix appended to a base road id to name its reverse direction.
pub const REVERSE_SUFFIX: &str = "_rev";

/// Node identifier. Nodes are opaque labels fixed at graph construction.
pub type NodeId = String;

/// One traversable road segment in one direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub from: NodeId,
    pub to: NodeId,
    /// Physical distance in kilometres.
    pub length_km: f64,
    /// Nominal travel speed absent congestion.
    pub speed_kmh: f64,
    /// Structural difficulty of the segment, within `[0, 1]`.
    pub tension: f64,
    /// Congestion multiplier (>= 1.0) degrading the effective speed.
    pub traffic: f64,
}

impl Edge {
    /// Materialize the opposite direction of this road.
    ///
    /// Tension, traffic and speed are copied unchanged; only the endpoints
    /// and the id differ.
    pub fn reversed(&self) -> Edge {
        Edge {
            id: format!("{}{}", self.id, REVERSE_SUFFIX),
            from: self.to.clone(),
            to: self.from.clone(),
            ..self.clone()
        }
    }

    fn validate(&self, nodes: &HashSet<&str>) -> Result<()> {
        for endpoint in [&self.from, &self.to] {
            if !nodes.contains(endpoint.as_str()) {
                return Err(Error::UnknownNode {
                    road: self.id.clone(),
                    node: endpoint.clone(),
                });
            }
        }

        if !self.length_km.is_finite() || self.length_km <= 0.0 {
            return Err(Error::InvalidLength {
                road: self.id.clone(),
                value: self.length_km,
            });
        }

        if !self.speed_kmh.is_finite() || self.speed_kmh <= 0.0 {
            return Err(Error::InvalidSpeed {
                road: self.id.clone(),
                value: self.speed_kmh,
            });
        }

        if !(0.0..=1.0).contains(&self.tension) {
            return Err(Error::InvalidTension {
                road: self.id.clone(),
                value: self.tension,
            });
        }

        if !self.traffic.is_finite() || self.traffic < 1.0 {
            return Err(Error::InvalidTraffic {
                road: self.id.clone(),
                value: self.traffic,
            });
        }

        Ok(())
    }
}

/// Immutable road graph used by the path finder.
///
/// Cloning is cheap: the node list, base roads and adjacency are shared.
#[derive(Debug, Clone)]
pub struct Graph {
    nodes: Arc<[NodeId]>,
    roads: Arc<[Edge]>,
    adjacency: Arc<HashMap<NodeId, Vec<Edge>>>,
}

impl Graph {
    /// Nodes in declaration order.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Whether `node` is part of the graph.
    pub fn contains_node(&self, node: &str) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Resolve `node` to the identifier owned by the graph.
    pub fn node(&self, node: &str) -> Option<&str> {
        self.adjacency
            .get_key_value(node)
            .map(|(key, _)| key.as_str())
    }

    /// Base road definitions, one per bidirectional road.
    pub fn roads(&self) -> &[Edge] {
        &self.roads
    }

    /// Outgoing directed edges for `node`; empty for unknown nodes.
    pub fn neighbours(&self, node: &str) -> &[Edge] {
        self.adjacency
            .get(node)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Every directed edge, grouped by source node in declaration order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.nodes.iter().flat_map(|node| self.neighbours(node))
    }

    /// Number of directed edges (twice the number of base roads).
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Find an outgoing edge of `node` by id.
    ///
    /// This is a linear scan over the node's adjacency, which stays cheap for
    /// the small graphs this crate targets.
    pub fn edge_from(&self, node: &str, edge_id: &str) -> Option<&Edge> {
        self.neighbours(node).iter().find(|edge| edge.id == edge_id)
    }

    /// Find any directed edge by id.
    pub fn edge(&self, edge_id: &str) -> Option<&Edge> {
        self.edges().find(|edge| edge.id == edge_id)
    }

    /// Snapshot the graph back into a network definition.
    pub fn to_network(&self) -> RoadNetwork {
        RoadNetwork {
            nodes: self.nodes.to_vec(),
            edges: self.roads.to_vec(),
        }
    }
}

/// Build the immutable graph from a road network definition.
///
/// Every base road yields a forward edge and a reverse edge. Any invalid road
/// aborts construction: these are startup errors, not query outcomes.
pub fn build_graph(network: &RoadNetwork) -> Result<Graph> {
    let mut node_set: HashSet<&str> = HashSet::with_capacity(network.nodes.len());
    for node in &network.nodes {
        if !node_set.insert(node.as_str()) {
            return Err(Error::DuplicateNode { node: node.clone() });
        }
    }

    let mut edge_ids: HashSet<String> = HashSet::with_capacity(network.edges.len() * 2);
    let mut adjacency: HashMap<NodeId, Vec<Edge>> = network
        .nodes
        .iter()
        .map(|node| (node.clone(), Vec::new()))
        .collect();

    for road in &network.edges {
        road.validate(&node_set)?;

        let reverse = road.reversed();
        for id in [&road.id, &reverse.id] {
            if !edge_ids.insert(id.clone()) {
                return Err(Error::DuplicateRoad { road: id.clone() });
            }
        }

        adjacency.entry(road.from.clone()).or_default().push(road.clone());
        adjacency.entry(reverse.from.clone()).or_default().push(reverse);
    }

    debug!(
        nodes = network.nodes.len(),
        roads = network.edges.len(),
        directed_edges = edge_ids.len(),
        "road graph built"
    );

    Ok(Graph {
        nodes: network.nodes.clone().into(),
        roads: network.edges.clone().into(),
        adjacency: Arc::new(adjacency),
    })
}

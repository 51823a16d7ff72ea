//! Road network definitions.
//!
//! A [`RoadNetwork`] is the serialisable description a [`Graph`] is built
//! from: a node list plus one entry per bidirectional road. The built-in
//! [`reference_network`] is used whenever no network file is configured.
//!
//! [`Graph`]: crate::graph::Graph

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, Result};
use crate::graph::{build_graph, Edge, Graph};

/// Node list and base road definitions, in the JSON layout served to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadNetwork {
    pub nodes: Vec<String>,
    pub edges: Vec<Edge>,
}

impl RoadNetwork {
    /// Load a network definition from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::NetworkNotFound {
                path: path.to_path_buf(),
            });
        }

        let raw = fs::read_to_string(path)?;
        let network: RoadNetwork = serde_json::from_str(&raw)?;
        info!(
            path = %path.display(),
            nodes = network.nodes.len(),
            roads = network.edges.len(),
            "loaded road network"
        );
        Ok(network)
    }

    /// Persist the definition as pretty-printed JSON.
    pub fn write_to_path(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Validate and build the immutable routing graph.
    pub fn build(&self) -> Result<Graph> {
        build_graph(self)
    }
}

impl Default for RoadNetwork {
    fn default() -> Self {
        reference_network()
    }
}

/// The six-node reference network (A..F) with seven bidirectional roads.
pub fn reference_network() -> RoadNetwork {
    let road = |id: &str, from: &str, to: &str, length_km, speed_kmh, tension, traffic| Edge {
        id: id.to_string(),
        from: from.to_string(),
        to: to.to_string(),
        length_km,
        speed_kmh,
        tension,
        traffic,
    };

    RoadNetwork {
        nodes: ["A", "B", "C", "D", "E", "F"]
            .into_iter()
            .map(String::from)
            .collect(),
        edges: vec![
            road("A-B", "A", "B", 2.0, 50.0, 0.2, 1.0),
            // congested junction
            road("B-C", "B", "C", 1.5, 40.0, 0.8, 1.3),
            // ring road
            road("A-D", "A", "D", 3.0, 60.0, 0.1, 1.0),
            road("D-E", "D", "E", 1.8, 50.0, 0.3, 1.0),
            road("E-C", "E", "C", 2.2, 50.0, 0.2, 1.0),
            road("C-F", "C", "F", 2.5, 50.0, 0.4, 1.0),
            road("E-F", "E", "F", 2.0, 60.0, 0.15, 1.0),
        ],
    }
}

#![allow(dead_code)]

use coeziv_lib::{build_graph, Edge, Graph, RoadNetwork};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const EPSILON: f64 = 1e-9;

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

/// Random graph on `node_count` nodes with roughly `density` of all pairs
/// connected. The same `seed` always yields the same graph.
pub fn synthetic_graph(seed: u64, node_count: usize, density: f64) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let nodes: Vec<String> = (0..node_count).map(|i| format!("n{i}")).collect();
    let mut edges = Vec::new();

    for i in 0..node_count {
        for j in (i + 1)..node_count {
            if rng.gen::<f64>() >= density {
                continue;
            }
            edges.push(Edge {
                id: format!("n{i}-n{j}"),
                from: nodes[i].clone(),
                to: nodes[j].clone(),
                length_km: rng.gen_range(0.1..10.0),
                speed_kmh: rng.gen_range(0.5..120.0),
                tension: rng.gen_range(0.0..=1.0),
                traffic: rng.gen_range(1.0..3.0),
            });
        }
    }

    build_graph(&RoadNetwork { nodes, edges }).expect("synthetic graph is valid")
}

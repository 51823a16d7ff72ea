//! Cross-checks the path finder against exhaustive enumeration and
//! concurrent use of a shared graph.

mod common;

use std::collections::HashSet;
use std::thread;

use coeziv_lib::{
    find_route, plan_route, reference_network, CostWeights, Graph, RoutePlan, RouteRequest,
};

use common::{assert_close, synthetic_graph};

/// Cheapest cost over every simple path, or `None` when unreachable.
fn brute_force_cost(graph: &Graph, src: &str, dst: &str, weights: CostWeights) -> Option<f64> {
    fn walk(
        graph: &Graph,
        node: &str,
        dst: &str,
        weights: CostWeights,
        cost: f64,
        visited: &mut HashSet<String>,
        best: &mut Option<f64>,
    ) {
        if node == dst {
            *best = Some(best.map_or(cost, |b: f64| b.min(cost)));
            return;
        }
        for edge in graph.neighbours(node) {
            if visited.contains(&edge.to) {
                continue;
            }
            visited.insert(edge.to.clone());
            walk(graph, &edge.to, dst, weights, cost + weights.cost(edge), visited, best);
            visited.remove(&edge.to);
        }
    }

    if !graph.contains_node(src) || !graph.contains_node(dst) {
        return None;
    }

    let mut visited = HashSet::from([src.to_string()]);
    let mut best = None;
    walk(graph, src, dst, weights, 0.0, &mut visited, &mut best);
    best
}

#[test]
fn dijkstra_matches_brute_force_on_reference_network() {
    let graph = reference_network().build().unwrap();
    for weights in [
        CostWeights::default(),
        CostWeights::new(1.0, 0.0),
        CostWeights::new(0.0, 1.0),
        CostWeights::new(0.2, 25.0),
    ] {
        for src in graph.nodes() {
            for dst in graph.nodes() {
                let plan = find_route(&graph, src, dst, weights).expect("connected");
                let expected = brute_force_cost(&graph, src, dst, weights).expect("connected");
                assert_close(plan.total_cost, expected);
            }
        }
    }
}

#[test]
fn dijkstra_matches_brute_force_on_synthetic_graphs() {
    for seed in 0..40u64 {
        let graph = synthetic_graph(seed, 7, 0.45);
        let weights = CostWeights::new((seed % 5) as f64 * 0.5, (seed % 3) as f64 * 3.0);

        for src in graph.nodes() {
            for dst in graph.nodes() {
                let found = find_route(&graph, src, dst, weights).map(|plan| plan.total_cost);
                let expected = brute_force_cost(&graph, src, dst, weights);
                match (found, expected) {
                    (Some(found), Some(expected)) => assert_close(found, expected),
                    (None, None) => {}
                    other => panic!("seed {seed} {src}->{dst}: mismatch {other:?}"),
                }
            }
        }
    }
}

#[test]
fn concurrent_queries_share_one_graph() {
    let graph = reference_network().build().unwrap();
    let request = RouteRequest::new("A", "F").with_weights(CostWeights::new(0.7, 3.1));
    let expected = plan_route(&graph, &request).unwrap();

    let results: Vec<RoutePlan> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let graph = &graph;
                let request = &request;
                scope.spawn(move || {
                    (0..100)
                        .map(|_| plan_route(graph, request).unwrap())
                        .last()
                        .unwrap()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for plan in results {
        assert_eq!(plan.nodes, expected.nodes);
        assert_eq!(plan.edges, expected.edges);
        assert_eq!(plan.total_time_min.to_bits(), expected.total_time_min.to_bits());
        assert_eq!(plan.avg_tension.to_bits(), expected.avg_tension.to_bits());
        assert_eq!(plan.total_cost.to_bits(), expected.total_cost.to_bits());
    }
}

#[test]
fn cloned_graph_handles_answer_identically_across_threads() {
    let graph = synthetic_graph(99, 8, 0.5);
    let baseline = find_route(&graph, "n0", "n7", CostWeights::default());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let graph = graph.clone();
            thread::spawn(move || find_route(&graph, "n0", "n7", CostWeights::default()))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), baseline);
    }
}

#[test]
fn synthetic_graphs_are_reproducible_per_seed() {
    let first = synthetic_graph(7, 8, 0.5);
    let second = synthetic_graph(7, 8, 0.5);
    assert_eq!(first.to_network(), second.to_network());

    for road in first.roads() {
        assert!(road.length_km >= 0.1 && road.length_km < 10.0);
        assert!((0.0..=1.0).contains(&road.tension));
        assert!(road.traffic >= 1.0 && road.traffic < 3.0);
    }
}

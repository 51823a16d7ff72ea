use coeziv_lib::{
    find_shortest_path, plan_route, reference_network, CostWeights, Edge, Graph, RoadNetwork,
    RouteRequest,
};
use criterion::{criterion_group, criterion_main, Criterion};
use once_cell::sync::Lazy;
use std::hint::black_box;

static REFERENCE: Lazy<Graph> =
    Lazy::new(|| reference_network().build().expect("reference network builds"));
static GRID: Lazy<Graph> = Lazy::new(|| grid_graph(20));
static GOLDEN_REQUEST: Lazy<RouteRequest> = Lazy::new(|| RouteRequest::new("A", "F"));

/// Square grid with varied speeds and tension so the cost surface is uneven.
fn grid_graph(side: usize) -> Graph {
    let name = |row: usize, col: usize| format!("r{row}c{col}");
    let mut nodes = Vec::with_capacity(side * side);
    let mut edges = Vec::new();

    for row in 0..side {
        for col in 0..side {
            nodes.push(name(row, col));
            let mut link = |to: String, id: String| {
                edges.push(Edge {
                    id,
                    from: name(row, col),
                    to,
                    length_km: 1.0 + ((row * 7 + col * 3) % 5) as f64 * 0.25,
                    speed_kmh: 30.0 + ((row + col) % 4) as f64 * 15.0,
                    tension: ((row * col) % 10) as f64 / 10.0,
                    traffic: 1.0 + (col % 3) as f64 * 0.2,
                });
            };
            if col + 1 < side {
                link(name(row, col + 1), format!("h{row}-{col}"));
            }
            if row + 1 < side {
                link(name(row + 1, col), format!("v{row}-{col}"));
            }
        }
    }

    RoadNetwork { nodes, edges }
        .build()
        .expect("grid network builds")
}

fn benchmark_pathfinding(c: &mut Criterion) {
    c.bench_function("reference_a_to_f", |b| {
        let graph = &*REFERENCE;
        let request = &*GOLDEN_REQUEST;
        b.iter(|| {
            let plan = plan_route(graph, request).expect("route exists");
            black_box(plan.total_cost)
        });
    });

    c.bench_function("grid_20_corner_to_corner", |b| {
        let graph = &*GRID;
        b.iter(|| {
            let tree = find_shortest_path(graph, "r0c0", "r19c19", CostWeights::default())
                .expect("grid is connected");
            black_box(tree.distance())
        });
    });

    c.bench_function("build_reference_graph", |b| {
        let network = reference_network();
        b.iter(|| black_box(network.build().expect("valid").edge_count()));
    });
}

criterion_group!(benches, benchmark_pathfinding);
criterion_main!(benches);

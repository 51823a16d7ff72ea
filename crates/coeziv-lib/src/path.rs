use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use tracing::{debug, trace};

use crate::cost::CostWeights;
use crate::graph::Graph;

/// Result of a successful search: the settled goal distance plus the
/// predecessor links needed to walk the path back.
#[derive(Debug, Clone)]
pub struct ShortestPathTree<'g> {
    source: &'g str,
    goal: &'g str,
    distance: f64,
    parents: HashMap<&'g str, (&'g str, &'g str)>,
    settled: usize,
}

impl<'g> ShortestPathTree<'g> {
    pub fn source(&self) -> &'g str {
        self.source
    }

    pub fn goal(&self) -> &'g str {
        self.goal
    }

    /// Weighted cost of the cheapest path from source to goal.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Predecessor node and traversed edge id recorded for `node`.
    pub fn predecessor(&self, node: &str) -> Option<(&'g str, &'g str)> {
        self.parents.get(node).copied()
    }

    /// Number of nodes settled before the goal was reached.
    pub fn settled_count(&self) -> usize {
        self.settled
    }
}

/// Run Dijkstra's algorithm from `source` to `goal` under `weights`.
///
/// Returns `None` when either endpoint is unknown or the goal is unreachable.
/// The queue is insert-only: a node may be queued several times and stale
/// entries are discarded when popped.
pub fn find_shortest_path<'g>(
    graph: &'g Graph,
    source: &str,
    goal: &str,
    weights: CostWeights,
) -> Option<ShortestPathTree<'g>> {
    let (Some(source), Some(goal)) = (graph.node(source), graph.node(goal)) else {
        debug!(source, goal, "route endpoint not in graph");
        return None;
    };

    let mut distances: HashMap<&'g str, f64> = HashMap::new();
    let mut parents: HashMap<&'g str, (&'g str, &'g str)> = HashMap::new();
    let mut queue = BinaryHeap::new();
    let mut sequence = 0u64;
    let mut settled = 0usize;

    distances.insert(source, 0.0);
    queue.push(QueueEntry::new(source, 0.0, sequence));

    while let Some(entry) = queue.pop() {
        let best = distances.get(entry.node).copied().unwrap_or(f64::INFINITY);
        if entry.cost.0 > best {
            continue;
        }

        settled += 1;
        trace!(node = entry.node, cost = entry.cost.0, "settled node");

        if entry.node == goal {
            debug!(source, goal, cost = best, settled, "route found");
            return Some(ShortestPathTree {
                source,
                goal,
                distance: best,
                parents,
                settled,
            });
        }

        for edge in graph.neighbours(entry.node) {
            let next_cost = entry.cost.0 + weights.cost(edge);
            let next = edge.to.as_str();
            if next_cost < distances.get(next).copied().unwrap_or(f64::INFINITY) {
                distances.insert(next, next_cost);
                parents.insert(next, (entry.node, edge.id.as_str()));
                sequence += 1;
                queue.push(QueueEntry::new(next, next_cost, sequence));
            }
        }
    }

    debug!(source, goal, settled, "goal unreachable");
    None
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry<'g> {
    node: &'g str,
    cost: FloatOrd,
    sequence: u64,
}

impl<'g> QueueEntry<'g> {
    fn new(node: &'g str, cost: f64, sequence: u64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
            sequence,
        }
    }
}

impl Ord for QueueEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost; equal
        // costs pop in insertion order.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for QueueEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use serde::Serialize;

use crate::cost::{edge_cost, RoutingMode};
use crate::error::{Error, Result};
use crate::graph::SearchGraph;
use crate::model::NodeId;

/// Path found by the single-scope pathfinder: the node sequence from start
/// to end inclusive, plus the total accumulated cost under the chosen mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult {
    pub path: Vec<NodeId>,
    pub cost: f64,
}

impl PathResult {
    /// Number of hops in the path.
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Run A* over one scope under the given routing mode.
///
/// Returns `Ok(None)` when no path exists under the mode; unknown start or
/// end identifiers are a contract violation and fail fast instead.
///
/// The heuristic is the straight-line Euclidean distance in the shared
/// floor-normalized coordinate space. Those coordinates are not calibrated
/// against edge weights, so the estimate is best-effort guidance rather
/// than a guaranteed lower bound. Correctness does not depend on it: all
/// mode costs are non-negative and a node is expanded at most once, so the
/// search always terminates with a path among the explored nodes.
pub fn astar(
    graph: &SearchGraph<'_>,
    start: &str,
    end: &str,
    mode: RoutingMode,
) -> Result<Option<PathResult>> {
    for id in [start, end] {
        if !graph.contains(id) {
            return Err(Error::UnknownNode {
                id: id.to_string(),
                suggestions: Vec::new(),
            });
        }
    }

    if start == end {
        return Ok(Some(PathResult {
            path: vec![start.to_string()],
            cost: 0.0,
        }));
    }

    let end_position = graph.position(end);
    let estimate = |id: &str| -> f64 {
        match (graph.position(id), end_position) {
            (Some(from), Some(to)) => from.distance_to(&to),
            _ => 0.0,
        }
    };

    let mut g_score: HashMap<&str, f64> = HashMap::new();
    let mut parents: HashMap<&str, &str> = HashMap::new();
    let mut closed: HashSet<&str> = HashSet::new();
    let mut queue = BinaryHeap::new();

    g_score.insert(start, 0.0);
    queue.push(AStarEntry::new(start, 0.0, estimate(start)));

    while let Some(entry) = queue.pop() {
        if entry.node == end {
            let cost = g_score[end];
            return Ok(Some(PathResult {
                path: reconstruct_path(&parents, start, end),
                cost,
            }));
        }

        // First pop is final; stale queue entries are ignored.
        if !closed.insert(entry.node) {
            continue;
        }

        let current_score = g_score[entry.node];
        for &(next, edge) in graph.neighbours(entry.node) {
            if closed.contains(next) {
                continue;
            }
            let Some(step) = edge_cost(edge, mode) else {
                continue;
            };

            let tentative = current_score + step;
            if tentative < *g_score.get(next).unwrap_or(&f64::INFINITY) {
                g_score.insert(next, tentative);
                parents.insert(next, entry.node);
                queue.push(AStarEntry::new(next, tentative, estimate(next)));
            }
        }
    }

    Ok(None)
}

fn reconstruct_path(parents: &HashMap<&str, &str>, start: &str, end: &str) -> Vec<NodeId> {
    let mut path = vec![end.to_string()];
    let mut current = end;
    while current != start {
        match parents.get(current) {
            Some(&previous) => {
                path.push(previous.to_string());
                current = previous;
            }
            None => break,
        }
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
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
struct AStarEntry<'a> {
    node: &'a str,
    estimate: FloatOrd,
}

impl<'a> AStarEntry<'a> {
    fn new(node: &'a str, cost: f64, heuristic: f64) -> Self {
        Self {
            node,
            estimate: FloatOrd(cost + heuristic),
        }
    }
}

impl Ord for AStarEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by f = g + h.
        other
            .estimate
            .cmp(&self.estimate)
            .then_with(|| other.node.cmp(self.node))
    }
}

impl PartialOrd for AStarEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

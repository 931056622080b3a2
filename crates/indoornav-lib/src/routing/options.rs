use serde::Serialize;

use crate::cost::RoutingMode;
use crate::error::Result;
use crate::graph::{FlatGraph, SearchGraph};
use crate::model::{Edge, Node};
use crate::path::{astar, PathResult};

/// One viable routing mode with its computed path, for side-by-side
/// comparison in the UI.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteOption {
    pub mode: RoutingMode,
    pub result: PathResult,
}

/// Run the pathfinder once per routing mode over one scope and return the
/// modes under which a path exists, in canonical mode order. Unreachable
/// modes are omitted: an option a user cannot take is never reported.
///
/// The scope must already contain every edge relevant to the comparison.
/// Raw snapshot edges only cover a single floor; for an institution-wide
/// comparison flatten first (which synthesizes the virtual connector
/// edges) and call [`route_options_flat`] instead.
pub fn route_options(
    nodes: &[Node],
    edges: &[Edge],
    start: &str,
    end: &str,
) -> Result<Vec<RouteOption>> {
    let graph = SearchGraph::new(nodes, edges);
    collect_options(&graph, start, end)
}

/// Rank routing modes over a flattened institution, virtual connector
/// edges included, so the comparison spans floors and buildings.
pub fn route_options_flat(
    flat: &FlatGraph<'_>,
    start: &str,
    end: &str,
) -> Result<Vec<RouteOption>> {
    let graph = flat.search_graph();
    collect_options(&graph, start, end)
}

fn collect_options(
    graph: &SearchGraph<'_>,
    start: &str,
    end: &str,
) -> Result<Vec<RouteOption>> {
    let mut options = Vec::new();
    for mode in RoutingMode::ALL {
        if let Some(result) = astar(graph, start, end, mode)? {
            options.push(RouteOption { mode, result });
        }
    }
    Ok(options)
}

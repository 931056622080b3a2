//! Hierarchical routing over an institution snapshot.
//!
//! This module provides:
//! - [`route`] - flatten an institution, search it, and slice the result
//!   into per-floor segments for stepwise UI presentation
//! - [`compose_route`] - chain routes through an ordered list of stops
//! - [`route_options`] - side-by-side comparison across all routing modes

mod multi_stop;
mod options;

pub use multi_stop::compose_route;
pub use options::{route_options, route_options_flat, RouteOption};

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::cost::RoutingMode;
use crate::error::Result;
use crate::graph::{flatten_institution, FlatGraph, SearchGraph};
use crate::model::{BuildingId, FloorId, InstitutionGraph, NodeId};
use crate::path::{astar, PathResult};

/// A maximal contiguous run of a computed path confined to one floor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    pub floor_id: FloorId,
    pub building_id: BuildingId,
    pub node_ids: Vec<NodeId>,
}

/// A path plus its per-floor segment decomposition.
///
/// Segments only carry the floor and building of their first node
/// explicitly; `node_floors` and `node_buildings` cover every node on the
/// path so the UI can jump straight to the right floor view for any of
/// them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HierarchicalRoute {
    pub path: Vec<NodeId>,
    pub cost: f64,
    pub segments: Vec<Segment>,
    pub node_floors: HashMap<NodeId, FloorId>,
    pub node_buildings: HashMap<NodeId, BuildingId>,
}

/// Compute a route across floors and buildings.
///
/// Flattens the institution (synthesizing virtual connector edges), runs
/// A* under the given mode, and cuts a segment boundary wherever the
/// owning floor changes between consecutive path nodes. Returns `Ok(None)`
/// when the destination is unreachable under the mode.
///
/// The call is pure: it holds no state across invocations and performs no
/// logging of the computed route beyond diagnostics.
pub fn route(
    graph: &InstitutionGraph,
    start: &str,
    end: &str,
    mode: RoutingMode,
) -> Result<Option<HierarchicalRoute>> {
    let flat = flatten_institution(graph)?;
    let search = flat.search_graph();
    route_on_flat(&flat, &search, start, end, mode)
}

/// Route over an already-flattened institution. Shared by [`route`] and
/// the multi-stop composer, which reuses one flattening across legs.
pub(crate) fn route_on_flat(
    flat: &FlatGraph<'_>,
    search: &SearchGraph<'_>,
    start: &str,
    end: &str,
    mode: RoutingMode,
) -> Result<Option<HierarchicalRoute>> {
    let Some(result) = astar(search, start, end, mode)? else {
        debug!("no route from {start} to {end} under mode {mode}");
        return Ok(None);
    };

    debug!(
        "routed {start} -> {end} under mode {mode}: {} nodes, cost {:.3}",
        result.path.len(),
        result.cost
    );

    Ok(Some(decompose(flat, result)))
}

/// Slice a flat path into per-floor segments and build the per-node
/// lookup tables for every path node.
fn decompose(flat: &FlatGraph<'_>, result: PathResult) -> HierarchicalRoute {
    let PathResult { path, cost } = result;

    let mut node_floors = HashMap::new();
    let mut node_buildings = HashMap::new();
    for id in &path {
        if let Some(floor) = flat.floor_of(id) {
            node_floors.insert(id.clone(), floor.to_string());
        }
        if let Some(building) = flat.building_of(id) {
            node_buildings.insert(id.clone(), building.to_string());
        }
    }

    let mut segments: Vec<Segment> = Vec::new();
    for id in &path {
        let floor = node_floors.get(id).cloned().unwrap_or_default();
        let building = node_buildings.get(id).cloned().unwrap_or_default();

        match segments.last_mut() {
            Some(segment) if segment.floor_id == floor => {
                segment.node_ids.push(id.clone());
            }
            _ => segments.push(Segment {
                floor_id: floor,
                building_id: building,
                node_ids: vec![id.clone()],
            }),
        }
    }

    HierarchicalRoute {
        path,
        cost,
        segments,
        node_floors,
        node_buildings,
    }
}

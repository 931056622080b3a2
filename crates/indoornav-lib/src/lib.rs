//! Indoor navigation routing engine.
//!
//! This crate turns a raw institution snapshot (buildings, floors, nodes
//! and edges supplied by the storage layer) into walkable routes between
//! points of interest. It flattens per-floor graphs into one searchable
//! scope via virtual connector edges, runs mode-aware A* over it, and
//! decomposes results into per-floor segments for stepwise presentation.
//! Higher-level consumers (web API, UI) should only depend on the
//! functions exported here instead of reimplementing behavior.
//!
//! Every routing call is synchronous and pure: it builds its own indexes
//! from the immutable snapshot it is handed and holds no state across
//! calls, so concurrent requests are fully independent.

#![deny(warnings)]

pub mod cost;
pub mod error;
pub mod graph;
pub mod model;
pub mod path;
pub mod resolve;
pub mod routing;

pub use cost::{edge_cost, RoutingMode};
pub use error::{Error, Result};
pub use graph::{flatten_institution, FlatGraph, SearchGraph};
pub use model::{
    Building, BuildingId, Edge, Floor, FloorId, InstitutionGraph, Node, NodeId, NodeType, Position,
};
pub use path::{astar, PathResult};
pub use resolve::{best_match, fuzzy_node_matches, nodes_near_path, resolve_node};
pub use routing::{
    compose_route, route, route_options, route_options_flat, HierarchicalRoute, RouteOption,
    Segment,
};

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::error::{Error, Result};
use crate::model::{Edge, InstitutionGraph, Node, NodeType, Position};

/// Searchable view over one scope (a single floor, or a flattened
/// institution): node positions plus an adjacency index of directed
/// traversal arcs.
///
/// Authored edges are logically undirected, so each stored edge expands
/// into two arcs here. Virtual connector edges are handed in already
/// directed and expand into a single arc. The index is built fresh per
/// routing call and never mutated or shared.
pub struct SearchGraph<'a> {
    positions: HashMap<&'a str, Position>,
    adjacency: HashMap<&'a str, Vec<(&'a str, &'a Edge)>>,
}

impl<'a> SearchGraph<'a> {
    /// Build the adjacency index for a set of nodes and undirected edges.
    ///
    /// Edges referencing nodes outside the scope are skipped; rejecting
    /// them is the authoring layer's job.
    pub fn new(
        nodes: impl IntoIterator<Item = &'a Node>,
        edges: impl IntoIterator<Item = &'a Edge>,
    ) -> Self {
        Self::build(nodes, edges, std::iter::empty())
    }

    fn build(
        nodes: impl IntoIterator<Item = &'a Node>,
        undirected: impl IntoIterator<Item = &'a Edge>,
        directed: impl IntoIterator<Item = &'a Edge>,
    ) -> Self {
        let mut positions = HashMap::new();
        let mut adjacency: HashMap<&'a str, Vec<(&'a str, &'a Edge)>> = HashMap::new();

        for node in nodes {
            positions.insert(node.id.as_str(), node.position());
            adjacency.entry(node.id.as_str()).or_default();
        }

        let mut skipped = 0usize;
        {
            let mut insert_arcs = |edge: &'a Edge, both_ways: bool| {
                let from = edge.from_node_id.as_str();
                let to = edge.to_node_id.as_str();
                if !positions.contains_key(from) || !positions.contains_key(to) {
                    skipped += 1;
                    return;
                }
                adjacency.entry(from).or_default().push((to, edge));
                if both_ways {
                    adjacency.entry(to).or_default().push((from, edge));
                }
            };

            for edge in undirected {
                insert_arcs(edge, true);
            }
            for edge in directed {
                insert_arcs(edge, false);
            }
        }

        if skipped > 0 {
            debug!("skipped {skipped} edges referencing nodes outside the scope");
        }

        Self {
            positions,
            adjacency,
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    pub fn position(&self, id: &str) -> Option<Position> {
        self.positions.get(id).copied()
    }

    /// Outgoing traversal arcs for a node: `(target id, underlying edge)`.
    pub fn neighbours(&self, id: &str) -> &[(&'a str, &'a Edge)] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn node_count(&self) -> usize {
        self.positions.len()
    }
}

/// Result of flattening one institution: every node and authored edge
/// across all buildings and floors, the synthesized virtual connector
/// edges, and per-node floor/building lookup tables.
///
/// Virtual edges exist only inside a flattening result; they are never
/// persisted back to the snapshot.
#[derive(Debug)]
pub struct FlatGraph<'a> {
    nodes: Vec<&'a Node>,
    base_edges: Vec<&'a Edge>,
    virtual_edges: Vec<Edge>,
    node_floors: HashMap<&'a str, &'a str>,
    node_buildings: HashMap<&'a str, &'a str>,
}

impl<'a> FlatGraph<'a> {
    /// Floor owning the given node, if the node exists in this flattening.
    pub fn floor_of(&self, id: &str) -> Option<&'a str> {
        self.node_floors.get(id).copied()
    }

    /// Building owning the given node.
    pub fn building_of(&self, id: &str) -> Option<&'a str> {
        self.node_buildings.get(id).copied()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn virtual_edge_count(&self) -> usize {
        self.virtual_edges.len()
    }

    /// Build the searchable adjacency index over the flattened scope.
    ///
    /// Base edges expand into two directed arcs each; virtual connector
    /// edges stay directed from the connector to its declared target, so
    /// two-way travel between floors requires both connector nodes to
    /// declare each other.
    pub fn search_graph(&self) -> SearchGraph<'_> {
        SearchGraph::build(
            self.nodes.iter().copied(),
            self.base_edges.iter().copied(),
            self.virtual_edges.iter(),
        )
    }
}

/// Merge the per-floor graphs of one institution into a single searchable
/// scope, synthesizing one virtual edge per connector node that declares a
/// target elsewhere in the hierarchy.
///
/// A connector whose declared target does not exist anywhere in the
/// institution is a data contract violation and fails the whole call.
pub fn flatten_institution(graph: &InstitutionGraph) -> Result<FlatGraph<'_>> {
    let known_ids: HashSet<&str> = graph.nodes().map(|node| node.id.as_str()).collect();

    let mut nodes = Vec::new();
    let mut base_edges = Vec::new();
    let mut virtual_edges = Vec::new();
    let mut node_floors = HashMap::new();
    let mut node_buildings = HashMap::new();

    for building in &graph.buildings {
        for floor in &building.floors {
            for node in &floor.nodes {
                nodes.push(node);
                node_floors.insert(node.id.as_str(), floor.id.as_str());
                node_buildings.insert(node.id.as_str(), building.id.as_str());
            }
            base_edges.extend(floor.edges.iter());

            for node in &floor.nodes {
                if !node.node_type.bridges_scopes() {
                    continue;
                }
                let Some(target) = node.connects_to_node_id.as_deref() else {
                    continue;
                };
                if !known_ids.contains(target) {
                    return Err(Error::DanglingConnector {
                        connector: node.id.clone(),
                        target: target.to_string(),
                    });
                }
                virtual_edges.push(synthesize_virtual_edge(node, target, &floor.id));
            }
        }
    }

    debug!(
        "flattened institution: {} nodes, {} base edges, {} virtual edges",
        nodes.len(),
        base_edges.len(),
        virtual_edges.len()
    );

    Ok(FlatGraph {
        nodes,
        base_edges,
        virtual_edges,
        node_floors,
        node_buildings,
    })
}

fn synthesize_virtual_edge(connector: &Node, target: &str, floor_id: &str) -> Edge {
    let weight = match connector.node_type {
        NodeType::Elevator => 2.0,
        // Stairs, outdoor links and generic connectors all cost a flat 5.
        _ => 5.0,
    };

    Edge {
        from_node_id: connector.id.clone(),
        to_node_id: target.to_string(),
        weight,
        edge_type: None,
        is_stairs: connector.node_type == NodeType::Stairs,
        is_elevator: connector.node_type == NodeType::Elevator,
        is_wheelchair_accessible: connector.node_type != NodeType::Stairs,
        is_restricted: false,
        is_outdoor: connector.node_type == NodeType::Outdoor,
        crowd_level: 0,
        floor_id: floor_id.to_string(),
    }
}

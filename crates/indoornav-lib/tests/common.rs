//! Shared fixtures for integration tests.
#![allow(dead_code)]

use indoornav_lib::{Building, Edge, Floor, InstitutionGraph, Node, NodeType};

pub fn node(id: &str, floor: &str, x: f64, y: f64) -> Node {
    Node {
        id: id.to_string(),
        floor_id: floor.to_string(),
        name: id.to_string(),
        x,
        y,
        node_type: NodeType::Normal,
        is_selectable: true,
        description: String::new(),
        connects_to_node_id: None,
        connects_to_floor_id: None,
        connects_to_building_id: None,
    }
}

pub fn connector(id: &str, floor: &str, node_type: NodeType, target: &str) -> Node {
    Node {
        node_type,
        connects_to_node_id: Some(target.to_string()),
        ..node(id, floor, 0.5, 0.5)
    }
}

pub fn edge(from: &str, to: &str, weight: f64, floor: &str) -> Edge {
    Edge {
        from_node_id: from.to_string(),
        to_node_id: to.to_string(),
        weight,
        edge_type: None,
        is_stairs: false,
        is_elevator: false,
        is_wheelchair_accessible: true,
        is_restricted: false,
        is_outdoor: false,
        crowd_level: 0,
        floor_id: floor.to_string(),
    }
}

pub fn floor(id: &str, name: &str, level: i32, nodes: Vec<Node>, edges: Vec<Edge>) -> Floor {
    Floor {
        id: id.to_string(),
        name: name.to_string(),
        level,
        nodes,
        edges,
    }
}

pub fn building(id: &str, name: &str, floors: Vec<Floor>) -> Building {
    Building {
        id: id.to_string(),
        name: name.to_string(),
        floors,
    }
}

/// Two-building campus:
///
/// - Science building, ground floor: entrance - atrium, with a
///   bidirectional elevator pair and a bidirectional stairs pair up to the
///   first floor (lab), plus an outdoor gate linked to the library.
/// - Library, single floor: gate - desk.
///
/// Costs are chosen so the elevator (virtual weight 2) beats the stairs
/// (virtual weight 5) under `shortest`.
pub fn campus() -> InstitutionGraph {
    let sci_ground = floor(
        "f-sci-1",
        "Science Ground",
        0,
        vec![
            node("entrance", "f-sci-1", 0.1, 0.5),
            node("atrium", "f-sci-1", 0.3, 0.5),
            connector("lift-sci-1", "f-sci-1", NodeType::Elevator, "lift-sci-2"),
            connector("stair-sci-1", "f-sci-1", NodeType::Stairs, "stair-sci-2"),
            connector("gate-sci", "f-sci-1", NodeType::Outdoor, "gate-lib"),
        ],
        vec![
            edge("entrance", "atrium", 2.0, "f-sci-1"),
            edge("atrium", "lift-sci-1", 2.0, "f-sci-1"),
            edge("atrium", "stair-sci-1", 1.0, "f-sci-1"),
            edge("entrance", "gate-sci", 3.0, "f-sci-1"),
        ],
    );

    let sci_first = floor(
        "f-sci-2",
        "Science First",
        1,
        vec![
            connector("lift-sci-2", "f-sci-2", NodeType::Elevator, "lift-sci-1"),
            connector("stair-sci-2", "f-sci-2", NodeType::Stairs, "stair-sci-1"),
            node("lab", "f-sci-2", 0.2, 0.5),
        ],
        vec![
            edge("lift-sci-2", "lab", 2.0, "f-sci-2"),
            edge("stair-sci-2", "lab", 1.0, "f-sci-2"),
        ],
    );

    let lib_ground = floor(
        "f-lib-1",
        "Library Ground",
        0,
        vec![
            connector("gate-lib", "f-lib-1", NodeType::Outdoor, "gate-sci"),
            node("desk", "f-lib-1", 0.5, 0.5),
        ],
        vec![edge("gate-lib", "desk", 2.0, "f-lib-1")],
    );

    InstitutionGraph {
        buildings: vec![
            building("b-sci", "Science", vec![sci_ground, sci_first]),
            building("b-lib", "Library", vec![lib_ground]),
        ],
    }
}

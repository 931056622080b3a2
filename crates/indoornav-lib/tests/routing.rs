mod common;

use common::{campus, edge, floor, node};
use indoornav_lib::{route, Building, Edge, InstitutionGraph, NodeId, RoutingMode};

/// Cross-floor route through the elevator pair: exactly one segment per
/// floor, joined by the weight-2 virtual elevator hop.
#[test]
fn elevator_route_produces_one_segment_per_floor() {
    let graph = campus();
    let result = route(&graph, "entrance", "lab", RoutingMode::Shortest)
        .unwrap()
        .expect("route exists");

    assert_eq!(
        result.path,
        vec!["entrance", "atrium", "lift-sci-1", "lift-sci-2", "lab"]
    );
    // 2 + 2 corridors, 2 for the elevator hop, 2 on the upper floor.
    assert_eq!(result.cost, 8.0);

    assert_eq!(result.segments.len(), 2);
    assert_eq!(result.segments[0].floor_id, "f-sci-1");
    assert_eq!(result.segments[0].building_id, "b-sci");
    assert_eq!(
        result.segments[0].node_ids,
        vec!["entrance", "atrium", "lift-sci-1"]
    );
    assert_eq!(result.segments[1].floor_id, "f-sci-2");
    assert_eq!(result.segments[1].node_ids, vec!["lift-sci-2", "lab"]);
}

#[test]
fn cross_building_route_spans_the_outdoor_link() {
    let graph = campus();
    let result = route(&graph, "entrance", "desk", RoutingMode::Shortest)
        .unwrap()
        .expect("route exists");

    // 3 to the gate, 5 for the outdoor hop, 2 to the desk.
    assert_eq!(result.cost, 10.0);
    assert_eq!(result.segments.len(), 2);
    assert_eq!(result.segments[0].building_id, "b-sci");
    assert_eq!(result.segments[1].building_id, "b-lib");
    assert_eq!(result.node_buildings["desk"], "b-lib");
}

#[test]
fn mutually_declared_connectors_route_in_both_directions() {
    let graph = campus();

    let outbound = route(&graph, "entrance", "desk", RoutingMode::Shortest)
        .unwrap()
        .expect("outbound route");
    let inbound = route(&graph, "desk", "entrance", RoutingMode::Shortest)
        .unwrap()
        .expect("inbound route");

    assert_eq!(outbound.cost, inbound.cost);
}

#[test]
fn wheelchair_mode_takes_the_elevator() {
    let graph = campus();
    let result = route(&graph, "entrance", "lab", RoutingMode::Wheelchair)
        .unwrap()
        .expect("accessible route exists");

    assert!(
        result.path.contains(&"lift-sci-1".to_string()),
        "wheelchair route must use the elevator"
    );
    assert!(
        !result.path.contains(&"stair-sci-1".to_string()),
        "wheelchair route must not use the stairs"
    );
    // Elevator hop halved under wheelchair: 2 + 2 + 1 + 2.
    assert_eq!(result.cost, 7.0);
}

/// Stairs-only connection with no alternative: wheelchair mode reports
/// "no route", not an error.
#[test]
fn stairs_only_connection_is_unreachable_for_wheelchair() {
    let graph = InstitutionGraph {
        buildings: vec![Building {
            id: "b1".to_string(),
            name: "Main".to_string(),
            floors: vec![floor(
                "f1",
                "Ground",
                0,
                vec![node("a", "f1", 0.1, 0.1), node("b", "f1", 0.9, 0.1)],
                vec![Edge {
                    is_stairs: true,
                    is_wheelchair_accessible: false,
                    ..edge("a", "b", 2.0, "f1")
                }],
            )],
        }],
    };

    let wheelchair = route(&graph, "a", "b", RoutingMode::Wheelchair).unwrap();
    assert!(wheelchair.is_none());

    let shortest = route(&graph, "a", "b", RoutingMode::Shortest)
        .unwrap()
        .expect("stairs are fine for everyone else");
    assert_eq!(shortest.cost, 2.0);
}

/// Relaxing mode restrictions never makes the route more expensive, as
/// long as the restricted mode gets no preferential discounts on the
/// surviving edges.
#[test]
fn shortest_cost_bounds_wheelchair_cost_without_discounted_edges() {
    let graph = InstitutionGraph {
        buildings: vec![Building {
            id: "b1".to_string(),
            name: "Main".to_string(),
            floors: vec![floor(
                "f1",
                "Ground",
                0,
                vec![
                    node("a", "f1", 0.0, 0.0),
                    node("mid", "f1", 0.5, 0.3),
                    node("b", "f1", 1.0, 0.0),
                ],
                vec![
                    // Stairs shortcut, unusable in a wheelchair.
                    Edge {
                        is_stairs: true,
                        is_wheelchair_accessible: false,
                        ..edge("a", "b", 1.0, "f1")
                    },
                    edge("a", "mid", 2.0, "f1"),
                    edge("mid", "b", 3.0, "f1"),
                ],
            )],
        }],
    };

    let shortest = route(&graph, "a", "b", RoutingMode::Shortest)
        .unwrap()
        .expect("shortcut route");
    let wheelchair = route(&graph, "a", "b", RoutingMode::Wheelchair)
        .unwrap()
        .expect("detour route");

    assert_eq!(shortest.cost, 1.0);
    assert_eq!(wheelchair.cost, 5.0);
    assert!(shortest.cost <= wheelchair.cost);
}

#[test]
fn identical_inputs_yield_identical_routes() {
    let graph = campus();

    let first = route(&graph, "entrance", "desk", RoutingMode::Fastest)
        .unwrap()
        .expect("route exists");
    let second = route(&graph, "entrance", "desk", RoutingMode::Fastest)
        .unwrap()
        .expect("route exists");

    assert_eq!(first.path, second.path);
    assert_eq!(first.cost, second.cost);
    assert_eq!(first.segments, second.segments);
}

#[test]
fn segment_node_ids_concatenate_to_the_flat_path() {
    let graph = campus();

    for (start, end) in [("entrance", "lab"), ("entrance", "desk"), ("lab", "desk")] {
        let result = route(&graph, start, end, RoutingMode::Shortest)
            .unwrap()
            .expect("route exists");
        let rebuilt: Vec<NodeId> = result
            .segments
            .iter()
            .flat_map(|segment| segment.node_ids.iter().cloned())
            .collect();
        assert_eq!(rebuilt, result.path, "{start} -> {end}");
    }
}

/// A restricted edge bridging two otherwise-disconnected areas is
/// discouraged, not forbidden: every mode still finds the (expensive)
/// route through it.
#[test]
fn restricted_only_bridge_remains_routable_in_every_mode() {
    let graph = InstitutionGraph {
        buildings: vec![Building {
            id: "b1".to_string(),
            name: "Main".to_string(),
            floors: vec![floor(
                "f1",
                "Ground",
                0,
                vec![
                    node("west", "f1", 0.1, 0.5),
                    node("door", "f1", 0.5, 0.5),
                    node("east", "f1", 0.9, 0.5),
                ],
                vec![
                    edge("west", "door", 1.0, "f1"),
                    Edge {
                        is_restricted: true,
                        ..edge("door", "east", 1.0, "f1")
                    },
                ],
            )],
        }],
    };

    for mode in RoutingMode::ALL {
        let result = route(&graph, "west", "east", mode)
            .unwrap()
            .unwrap_or_else(|| panic!("mode {mode} must still route through the bridge"));
        assert!(
            result.cost >= 101.0,
            "restricted hop must carry the x100 penalty under {mode}"
        );
    }
}

#[test]
fn unknown_start_is_a_descriptive_error() {
    let graph = campus();
    let err = route(&graph, "broom-closet", "lab", RoutingMode::Shortest).unwrap_err();
    assert!(err.to_string().contains("unknown node: broom-closet"));
}

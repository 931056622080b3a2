use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::Edge;

/// Named cost policy selecting how edges are weighted during search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoutingMode {
    /// Raw distance weights, unmodified.
    #[default]
    Shortest,
    /// Penalises crowded edges.
    Fastest,
    /// Forbids stairs and inaccessible edges, prefers elevators and ramps.
    Wheelchair,
    /// Forbids stairs for vertical movement.
    ElevatorOnly,
    /// Discourages stairs, favours elevators.
    EnergyEfficient,
}

impl RoutingMode {
    /// Canonical presentation order for side-by-side route comparison.
    pub const ALL: [RoutingMode; 5] = [
        RoutingMode::Shortest,
        RoutingMode::Fastest,
        RoutingMode::Wheelchair,
        RoutingMode::ElevatorOnly,
        RoutingMode::EnergyEfficient,
    ];
}

impl fmt::Display for RoutingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RoutingMode::Shortest => "shortest",
            RoutingMode::Fastest => "fastest",
            RoutingMode::Wheelchair => "wheelchair",
            RoutingMode::ElevatorOnly => "elevator_only",
            RoutingMode::EnergyEfficient => "energy_efficient",
        };
        f.write_str(value)
    }
}

/// Mode-specific traversal cost for one edge.
///
/// Returns `None` when the edge is impassable in the given mode. Restricted
/// edges are discouraged rather than excluded: their cost is multiplied by
/// 100 after the mode adjustment, in every mode, so a route through a
/// restricted area is still offered when it is the only option.
pub fn edge_cost(edge: &Edge, mode: RoutingMode) -> Option<f64> {
    let mut cost = edge.weight;

    match mode {
        RoutingMode::Shortest => {}
        RoutingMode::Fastest => {
            cost += f64::from(edge.crowd_level) * 2.0;
        }
        RoutingMode::Wheelchair => {
            if edge.is_stairs || !edge.is_wheelchair_accessible {
                return None;
            }
            if edge.is_elevator || edge.edge_type.as_deref() == Some("ramp") {
                cost *= 0.5;
            }
        }
        RoutingMode::ElevatorOnly => {
            if edge.is_stairs {
                return None;
            }
        }
        RoutingMode::EnergyEfficient => {
            if edge.is_stairs {
                cost *= 5.0;
            }
            if edge.is_elevator {
                cost *= 0.3;
            }
        }
    }

    if edge.is_restricted {
        cost *= 100.0;
    }

    Some(cost)
}

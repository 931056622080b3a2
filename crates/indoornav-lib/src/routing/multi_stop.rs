use tracing::debug;

use crate::cost::RoutingMode;
use crate::error::{Error, Result};
use crate::graph::flatten_institution;
use crate::model::InstitutionGraph;

use super::{route_on_flat, HierarchicalRoute};

/// Compute a route through an ordered list of stops
/// (start, waypoints..., end).
///
/// Legs are routed pairwise over a single flattening of the institution.
/// If any leg is unreachable the whole composition returns `Ok(None)`:
/// a half-route is not actionable guidance, so no partial result is ever
/// surfaced. Fewer than two stops is a contract violation.
///
/// Adjacent legs are joined by dropping the duplicated junction node, and
/// segments on either side of a junction are merged when they share both
/// floor and building, so a waypoint in the middle of a floor does not
/// produce a spurious floor transition in the UI.
pub fn compose_route(
    graph: &InstitutionGraph,
    stops: &[&str],
    mode: RoutingMode,
) -> Result<Option<HierarchicalRoute>> {
    if stops.len() < 2 {
        return Err(Error::TooFewStops { count: stops.len() });
    }

    let flat = flatten_institution(graph)?;
    let search = flat.search_graph();

    let mut combined: Option<HierarchicalRoute> = None;

    for pair in stops.windows(2) {
        let Some(leg) = route_on_flat(&flat, &search, pair[0], pair[1], mode)? else {
            debug!(
                "multi-stop leg {} -> {} unreachable under mode {mode}; dropping composition",
                pair[0], pair[1]
            );
            return Ok(None);
        };

        combined = Some(match combined {
            None => leg,
            Some(accumulated) => append_leg(accumulated, leg),
        });
    }

    Ok(combined)
}

fn append_leg(mut combined: HierarchicalRoute, leg: HierarchicalRoute) -> HierarchicalRoute {
    combined.cost += leg.cost;
    // The first node of the leg is the junction already present at the end
    // of the combined path.
    combined.path.extend(leg.path.into_iter().skip(1));
    combined.node_floors.extend(leg.node_floors);
    combined.node_buildings.extend(leg.node_buildings);

    let mut leg_segments = leg.segments.into_iter();
    if let (Some(last), Some(first)) = (combined.segments.last_mut(), leg_segments.next()) {
        if last.floor_id == first.floor_id && last.building_id == first.building_id {
            last.node_ids.extend(first.node_ids.into_iter().skip(1));
        } else {
            combined.segments.push(first);
        }
    }
    combined.segments.extend(leg_segments);

    combined
}

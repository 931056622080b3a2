//! Resolution of human-entered names to nodes.
//!
//! Upstream front-ends hand the router node identifiers, but the text they
//! start from is a user-typed name ("Library", "room 204"). [`best_match`]
//! picks the most plausible selectable node for a query; [`resolve_node`]
//! wraps it with a descriptive error carrying fuzzy suggestions;
//! [`nodes_near_path`] suggests matching nodes close to a computed route.

use std::collections::HashSet;

use strsim::jaro_winkler;

use crate::error::{Error, Result};
use crate::model::{InstitutionGraph, Node, NodeId, NodeType};

/// Minimum Jaro-Winkler similarity for a name to qualify as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.6;

/// Find the best matching node for a free-text query.
///
/// Only selectable, non-hidden nodes are considered. Match tiers are tried
/// in priority order: exact name, prefix, substring, then
/// every-query-word-contained; the first tier with a hit wins and ties
/// within a tier resolve to the first candidate in graph order.
pub fn best_match<'a>(
    query: &str,
    nodes: impl IntoIterator<Item = &'a Node>,
) -> Option<&'a Node> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return None;
    }

    let candidates: Vec<(&Node, String)> = nodes
        .into_iter()
        .filter(|node| node.is_selectable && node.node_type != NodeType::Hidden)
        .map(|node| (node, node.name.to_lowercase()))
        .collect();

    if let Some((node, _)) = candidates.iter().find(|(_, name)| *name == query) {
        return Some(node);
    }
    if let Some((node, _)) = candidates.iter().find(|(_, name)| name.starts_with(&query)) {
        return Some(node);
    }
    if let Some((node, _)) = candidates.iter().find(|(_, name)| name.contains(&query)) {
        return Some(node);
    }

    let words: Vec<&str> = query.split_whitespace().collect();
    candidates
        .iter()
        .find(|(_, name)| words.iter().all(|word| name.contains(word)))
        .map(|(node, _)| *node)
}

/// Resolve a free-text query to a node, failing fast with fuzzy
/// suggestions when nothing matches.
pub fn resolve_node<'a>(graph: &'a InstitutionGraph, query: &str) -> Result<&'a Node> {
    best_match(query, graph.nodes()).ok_or_else(|| Error::UnknownNode {
        id: query.to_string(),
        suggestions: fuzzy_node_matches(graph, query, 3),
    })
}

/// Names of up to `limit` selectable nodes ranked by similarity to the
/// query, for "did you mean" style messages.
pub fn fuzzy_node_matches(graph: &InstitutionGraph, query: &str, limit: usize) -> Vec<String> {
    let query = query.trim().to_lowercase();

    let mut scored: Vec<(f64, &str)> = graph
        .nodes()
        .filter(|node| node.is_selectable && node.node_type != NodeType::Hidden)
        .filter_map(|node| {
            let score = jaro_winkler(&query, &node.name.to_lowercase());
            (score >= SUGGESTION_THRESHOLD).then_some((score, node.name.as_str()))
        })
        .collect();

    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    scored.dedup_by(|a, b| a.1 == b.1);

    scored
        .into_iter()
        .take(limit)
        .map(|(_, name)| name.to_string())
        .collect()
}

/// Nodes matching a query near an already-computed path, for "along the
/// way" suggestions ("is there a cafeteria on my route?").
///
/// Candidates are selectable, non-hidden nodes not already on the path
/// whose name, description or type name contains the query
/// (case-insensitive). Each is ranked by the Euclidean distance to the
/// nearest path node *on the same floor*; candidates with no path node on
/// their floor are dropped. At most `limit` nodes are returned, closest
/// first.
pub fn nodes_near_path<'a>(
    graph: &'a InstitutionGraph,
    path: &[NodeId],
    query: &str,
    limit: usize,
) -> Vec<&'a Node> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    let on_path: HashSet<&str> = path.iter().map(String::as_str).collect();
    let path_nodes: Vec<&Node> = graph
        .nodes()
        .filter(|node| on_path.contains(node.id.as_str()))
        .collect();

    let mut scored: Vec<(f64, &Node)> = graph
        .nodes()
        .filter(|node| {
            node.is_selectable
                && node.node_type != NodeType::Hidden
                && !on_path.contains(node.id.as_str())
        })
        .filter(|node| {
            node.name.to_lowercase().contains(&query)
                || node.description.to_lowercase().contains(&query)
                || node.node_type.as_str().contains(&query)
        })
        .filter_map(|node| {
            let distance = path_nodes
                .iter()
                .filter(|path_node| path_node.floor_id == node.floor_id)
                .map(|path_node| path_node.position().distance_to(&node.position()))
                .min_by(f64::total_cmp)?;
            Some((distance, node))
        })
        .collect();

    scored.sort_by(|a, b| a.0.total_cmp(&b.0));
    scored
        .into_iter()
        .take(limit)
        .map(|(_, node)| node)
        .collect()
}

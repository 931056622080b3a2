use thiserror::Error;

use crate::model::NodeId;

/// Convenient result alias for the indoor navigation library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// Unreachability is deliberately *not* represented here: a search that
/// finds no path returns `Ok(None)` so callers can present "no route
/// available" instead of a failure.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a start, end or waypoint identifier (or a free-text
    /// query) does not resolve to a node in the supplied graph.
    #[error("unknown node: {id}{}", format_suggestions(.suggestions))]
    UnknownNode {
        id: String,
        suggestions: Vec<String>,
    },

    /// Raised when a connector node declares a target that does not exist
    /// anywhere in the institution graph.
    #[error("connector {connector} references missing node {target}")]
    DanglingConnector { connector: NodeId, target: NodeId },

    /// Raised when a multi-stop composition is requested with fewer than
    /// two stops.
    #[error("multi-stop route requires at least two stops, got {count}")]
    TooFewStops { count: usize },
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

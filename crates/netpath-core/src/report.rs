//! Shortest-path reconstruction from a computed predecessor chain

use crate::error::{GraphError, GraphResult};
use crate::graph::Graph;
use crate::shortest_path::ShortestPaths;
use std::fmt;

/// Outcome of asking for the path to one destination.
#[derive(Debug, Clone, PartialEq)]
pub enum PathReport {
    /// Vertex names from source to destination, inclusive, and total distance.
    Reached { vertices: Vec<String>, distance: f64 },
    Unreachable { destination: String },
}

impl PathReport {
    pub fn is_reached(&self) -> bool {
        matches!(self, PathReport::Reached { .. })
    }
}

/// Renders `A B C 5.00` or `C is unreachable`.
///
/// The distance uses two decimals unless the formatter carries a precision,
/// e.g. `format!("{:.3}", report)`.
impl fmt::Display for PathReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathReport::Reached { vertices, distance } => {
                let precision = f.precision().unwrap_or(2);
                write!(f, "{} {:.*}", vertices.join(" "), precision, distance)
            }
            PathReport::Unreachable { destination } => {
                write!(f, "{} is unreachable", destination)
            }
        }
    }
}

/// Reconstruct the path to `destination` from the result of a previous
/// [`crate::shortest_paths`] call on the same graph.
pub fn report_path(graph: &Graph, paths: &ShortestPaths, destination: &str) -> GraphResult<PathReport> {
    let dest = graph
        .find_vertex(destination)
        .ok_or_else(|| GraphError::VertexNotFound(destination.to_string()))?;

    if !paths.is_reachable(dest) {
        return Ok(PathReport::Unreachable {
            destination: destination.to_string(),
        });
    }

    let mut chain = Vec::new();
    let mut current = Some(dest);
    while let Some(id) = current {
        let vertex = graph
            .vertex_by_id(id)
            .ok_or_else(|| GraphError::VertexNotFound(format!("#{}", id.0)))?;
        chain.push(vertex.name.clone());
        current = paths.predecessor(id);
    }
    chain.reverse();

    Ok(PathReport::Reached {
        vertices: chain,
        distance: paths.distance(dest),
    })
}

//! Breadth-first reachability through up vertices

use crate::error::{GraphError, GraphResult};
use crate::graph::Graph;
use crate::model::VertexId;
use std::collections::{BTreeSet, HashSet, VecDeque};

/// Reachable set of one up vertex, as listed by the `reachable` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reachability {
    pub vertex: String,
    /// Sorted names, excluding `vertex` itself and any down vertex.
    pub reachable: Vec<String>,
}

/// Every vertex expanded by a breadth-first walk from `source`.
///
/// Only up vertices are expanded, so the result never holds a down vertex and
/// nothing beyond a down vertex is reached through it. Edge status is ignored:
/// the walk follows every outgoing edge. The source itself is included when up.
pub fn reachable_from(graph: &Graph, source: &str) -> GraphResult<BTreeSet<VertexId>> {
    let start = graph
        .find_vertex(source)
        .ok_or_else(|| GraphError::VertexNotFound(source.to_string()))?;

    let mut queue = VecDeque::from([start]);
    let mut finished = HashSet::new();

    while let Some(current) = queue.pop_front() {
        if finished.contains(&current) {
            continue;
        }
        let Some(vertex) = graph.vertex_by_id(current) else {
            continue;
        };
        if vertex.is_up() {
            queue.extend(graph.neighbors_sorted(current));
            finished.insert(current);
        }
    }

    Ok(finished.into_iter().collect())
}

/// Reachable sets for every up vertex, in lexicographic vertex order.
pub fn reachability(graph: &Graph) -> GraphResult<Vec<Reachability>> {
    let mut listing = Vec::new();

    for vertex in graph.vertices_sorted().filter(|v| v.is_up()) {
        let mut reachable: Vec<String> = reachable_from(graph, &vertex.name)?
            .into_iter()
            .filter(|&id| id != vertex.id)
            .filter_map(|id| graph.vertex_by_id(id))
            .filter(|v| v.is_up())
            .map(|v| v.name.clone())
            .collect();
        reachable.sort();

        listing.push(Reachability {
            vertex: vertex.name.clone(),
            reachable,
        });
    }

    Ok(listing)
}

//! Dijkstra's single-source shortest paths over up vertices and up edges

use crate::error::{GraphError, GraphResult};
use crate::graph::Graph;
use crate::heap::MinHeap;
use crate::model::VertexId;
use std::collections::HashMap;

/// Distance and predecessor of one vertex after a shortest-path run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathEntry {
    /// `f64::INFINITY` when the vertex was not reached.
    pub distance: f64,
    pub predecessor: Option<VertexId>,
}

impl Default for PathEntry {
    fn default() -> Self {
        PathEntry {
            distance: f64::INFINITY,
            predecessor: None,
        }
    }
}

/// Result of one shortest-path computation.
///
/// Every vertex present in the graph at computation time has an entry.
/// The result is detached from the graph: later mutations do not affect it.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    source: VertexId,
    entries: HashMap<VertexId, PathEntry>,
    finished: Vec<VertexId>,
}

impl ShortestPaths {
    pub fn source(&self) -> VertexId {
        self.source
    }

    pub fn entry(&self, id: VertexId) -> Option<&PathEntry> {
        self.entries.get(&id)
    }

    /// Distance from the source, infinite if unreachable or unknown.
    pub fn distance(&self, id: VertexId) -> f64 {
        self.entries.get(&id).map_or(f64::INFINITY, |e| e.distance)
    }

    pub fn predecessor(&self, id: VertexId) -> Option<VertexId> {
        self.entries.get(&id).and_then(|e| e.predecessor)
    }

    pub fn is_reachable(&self, id: VertexId) -> bool {
        self.distance(id).is_finite()
    }

    /// Vertices in the order they were extracted from the heap.
    pub fn finished_order(&self) -> &[VertexId] {
        &self.finished
    }
}

/// Compute shortest paths from the vertex named `source`.
///
/// Down vertices are extracted but never relaxed through, and down edges are
/// never relaxed across, so both are excluded from every path. A down vertex
/// can still be the end of a path if an up edge leads into it.
pub fn shortest_paths(graph: &Graph, source: &str) -> GraphResult<ShortestPaths> {
    let mut entries: HashMap<VertexId, PathEntry> = graph
        .vertices()
        .map(|v| (v.id, PathEntry::default()))
        .collect();

    let source_id = graph
        .find_vertex(source)
        .ok_or_else(|| GraphError::VertexNotFound(source.to_string()))?;

    let mut heap = MinHeap::from_items(graph.vertices().map(|v| (v.id, f64::INFINITY)));
    if let Some(entry) = entries.get_mut(&source_id) {
        entry.distance = 0.0;
    }
    heap.decrease_key(source_id, 0.0);

    let mut finished = Vec::with_capacity(heap.len());

    while let Some(min) = heap.extract_min() {
        let v = min.item;
        finished.push(v);

        let Some(vertex) = graph.vertex_by_id(v) else {
            continue;
        };
        if !vertex.is_up() || !min.key.is_finite() {
            continue;
        }

        for (dest, edge) in graph.edges_from(v) {
            if !edge.is_up() {
                continue;
            }
            let candidate = min.key + edge.weight;
            let Some(entry) = entries.get_mut(&dest.id) else {
                continue;
            };
            if candidate < entry.distance {
                entry.distance = candidate;
                entry.predecessor = Some(v);
                heap.decrease_key(dest.id, candidate);
            }
        }
    }

    tracing::debug!(
        "Shortest paths from {}: {} of {} vertices reachable",
        source,
        entries.values().filter(|e| e.distance.is_finite()).count(),
        entries.len()
    );

    Ok(ShortestPaths {
        source: source_id,
        entries,
        finished,
    })
}

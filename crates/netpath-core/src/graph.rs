//! Graph store using petgraph::StableDiGraph with a name index

use crate::error::{GraphError, GraphResult};
use crate::model::*;
use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableDiGraph};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use std::collections::HashMap;

/// The network graph: named vertices joined by directed, weighted edges.
///
/// At most one edge exists per (source, destination) pair. Vertices are
/// created on first reference and never removed, so vertex ids stay dense
/// and in insertion order.
pub struct Graph {
    inner: StableDiGraph<Vertex, Edge>,
    names: HashMap<String, VertexId>,
}

/// Sorted, restartable sequence of vertices. Clone it to walk it again.
pub type SortedVertices<'a> = std::vec::IntoIter<&'a Vertex>;

impl std::fmt::Debug for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Graph")
            .field("vertex_count", &self.inner.node_count())
            .field("edge_count", &self.inner.edge_count())
            .finish()
    }
}

fn node_index(id: VertexId) -> NodeIndex {
    NodeIndex::new(id.0 as usize)
}

fn vertex_id(idx: NodeIndex) -> VertexId {
    VertexId(idx.index() as u32)
}

fn edge_id(idx: EdgeIndex) -> EdgeId {
    EdgeId(idx.index() as u32)
}

impl Graph {
    pub fn new() -> Self {
        Graph {
            inner: StableDiGraph::new(),
            names: HashMap::new(),
        }
    }

    /// Return the vertex registered under `name`, creating it (status up) if needed.
    pub fn get_or_create_vertex(&mut self, name: &str) -> VertexId {
        if let Some(&id) = self.names.get(name) {
            return id;
        }
        let idx = self.inner.add_node(Vertex::new(VertexId::default(), name));
        let id = vertex_id(idx);
        self.inner[idx].id = id;
        self.names.insert(name.to_string(), id);
        tracing::trace!("Created vertex {} ({:?})", name, id);
        id
    }

    /// Insert the directed edge `source -> destination`, or overwrite its
    /// weight if it already exists. An existing edge keeps its status.
    ///
    /// The weight is validated before anything is created, so a rejected
    /// call leaves the graph untouched.
    pub fn add_edge(&mut self, source: &str, destination: &str, weight: f64) -> GraphResult<EdgeId> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(GraphError::InvalidWeight(weight));
        }

        let src = self.get_or_create_vertex(source);
        let dst = self.get_or_create_vertex(destination);

        if let Some(idx) = self.inner.find_edge(node_index(src), node_index(dst)) {
            self.inner[idx].weight = weight;
            tracing::trace!("Updated edge {} -> {} weight {}", source, destination, weight);
            return Ok(edge_id(idx));
        }

        let edge = Edge {
            id: EdgeId::default(),
            source: src,
            destination: dst,
            weight,
            status: Status::Up,
        };
        let idx = self.inner.add_edge(node_index(src), node_index(dst), edge);
        let id = edge_id(idx);
        self.inner[idx].id = id;
        tracing::trace!("Added edge {} -> {} weight {}", source, destination, weight);
        Ok(id)
    }

    /// Remove the directed edge `source -> destination`. The reverse edge is
    /// left alone. Returns `None` if either vertex or the edge is missing.
    pub fn delete_edge(&mut self, source: &str, destination: &str) -> Option<Edge> {
        let idx = self.edge_index(source, destination)?;
        self.inner.remove_edge(idx)
    }

    pub fn set_vertex_status(&mut self, name: &str, status: Status) -> GraphResult<()> {
        let id = self
            .find_vertex(name)
            .ok_or_else(|| GraphError::VertexNotFound(name.to_string()))?;
        self.inner[node_index(id)].status = status;
        Ok(())
    }

    pub fn set_edge_status(&mut self, source: &str, destination: &str, status: Status) -> GraphResult<()> {
        let idx = self
            .edge_index(source, destination)
            .ok_or_else(|| GraphError::edge_not_found(source, destination))?;
        self.inner[idx].status = status;
        Ok(())
    }

    /// Look up a vertex id by name.
    pub fn find_vertex(&self, name: &str) -> Option<VertexId> {
        self.names.get(name).copied()
    }

    /// Look up a vertex by name.
    pub fn vertex(&self, name: &str) -> Option<&Vertex> {
        self.find_vertex(name).and_then(|id| self.vertex_by_id(id))
    }

    pub fn vertex_by_id(&self, id: VertexId) -> Option<&Vertex> {
        self.inner.node_weight(node_index(id))
    }

    /// Get the edge `source -> destination`, if present.
    pub fn edge_between(&self, source: &str, destination: &str) -> Option<&Edge> {
        let idx = self.edge_index(source, destination)?;
        self.inner.edge_weight(idx)
    }

    fn edge_index(&self, source: &str, destination: &str) -> Option<EdgeIndex> {
        let src = self.find_vertex(source)?;
        let dst = self.find_vertex(destination)?;
        self.inner.find_edge(node_index(src), node_index(dst))
    }

    pub fn vertex_count(&self) -> usize {
        self.inner.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// Iterate over vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.inner
            .node_indices()
            .filter_map(move |idx| self.inner.node_weight(idx))
    }

    /// All vertices ordered lexicographically by name.
    pub fn vertices_sorted(&self) -> SortedVertices<'_> {
        let mut vertices: Vec<&Vertex> = self.vertices().collect();
        vertices.sort_by(|a, b| a.name.cmp(&b.name));
        vertices.into_iter()
    }

    /// Outgoing edges of a vertex, paired with their destination vertex.
    /// Order is unspecified.
    pub fn edges_from(&self, source: VertexId) -> impl Iterator<Item = (&Vertex, &Edge)> {
        self.inner
            .edges_directed(node_index(source), Direction::Outgoing)
            .filter_map(move |edge_ref| {
                let dest = self.inner.node_weight(edge_ref.target())?;
                Some((dest, edge_ref.weight()))
            })
    }

    /// Outgoing edges ordered lexicographically by destination name.
    pub fn edges_from_sorted(&self, source: VertexId) -> Vec<(&Vertex, &Edge)> {
        let mut edges: Vec<_> = self.edges_from(source).collect();
        edges.sort_by(|a, b| a.0.name.cmp(&b.0.name));
        edges
    }

    /// Distinct neighbor ids of a vertex ordered by neighbor name.
    /// Edge status is not considered.
    pub fn neighbors_sorted(&self, source: VertexId) -> Vec<VertexId> {
        self.edges_from_sorted(source)
            .into_iter()
            .map(|(dest, _)| dest.id)
            .collect()
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

//! Core data structures for the network graph

use std::fmt;
use std::str::FromStr;

/// Stable identifier for a vertex. Wraps the petgraph node index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct VertexId(pub u32);

/// Stable identifier for a directed edge. Wraps the petgraph edge index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct EdgeId(pub u32);

/// Operational status of a vertex or an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    #[default]
    Up,
    Down,
}

impl Status {
    pub fn is_up(self) -> bool {
        self == Status::Up
    }

    pub fn is_down(self) -> bool {
        self == Status::Down
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Up => f.write_str("up"),
            Status::Down => f.write_str("down"),
        }
    }
}

/// Returned when a status string is neither `up` nor `down`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStatusError(pub String);

impl fmt::Display for ParseStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown status '{}', expected 'up' or 'down'", self.0)
    }
}

impl std::error::Error for ParseStatusError {}

impl FromStr for Status {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "up" => Ok(Status::Up),
            "down" => Ok(Status::Down),
            _ => Err(ParseStatusError(s.to_string())),
        }
    }
}

/// A named vertex in the network graph.
///
/// Vertices carry no shortest-path scratch state; distances and predecessors
/// live in [`crate::ShortestPaths`], one per computation.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    pub id: VertexId,
    pub name: String,
    pub status: Status,
}

impl Vertex {
    pub fn new(id: VertexId, name: impl Into<String>) -> Self {
        Vertex {
            id,
            name: name.into(),
            status: Status::Up,
        }
    }

    pub fn is_up(&self) -> bool {
        self.status.is_up()
    }
}

/// A directed, weighted arc between two vertices.
///
/// An undirected link is two opposing edges; nothing keeps them in sync, so a
/// status or weight change on one direction leaves the other untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub id: EdgeId,
    pub source: VertexId,
    pub destination: VertexId,
    pub weight: f64,
    pub status: Status,
}

impl Edge {
    pub fn is_up(&self) -> bool {
        self.status.is_up()
    }
}

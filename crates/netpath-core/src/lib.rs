//! Netpath Core: network graph model, shortest paths, and reachability

pub mod error;
pub mod graph;
pub mod heap;
pub mod model;
pub mod reachability;
pub mod report;
pub mod shortest_path;


#[cfg(test)]
pub mod test_utils;

pub use error::{GraphError, GraphResult};
pub use graph::{Graph, SortedVertices};
pub use heap::{HeapEntry, MinHeap};
pub use model::{Edge, EdgeId, ParseStatusError, Status, Vertex, VertexId};
pub use reachability::{reachability, reachable_from, Reachability};
pub use report::{report_path, PathReport};
pub use shortest_path::{shortest_paths, PathEntry, ShortestPaths};

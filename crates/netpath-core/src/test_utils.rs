//! Test utilities for netpath-core

use crate::graph::Graph;
use crate::model::Status;

/// Build a graph from undirected links, inserting both directions.
pub fn build_graph(links: &[(&str, &str, f64)]) -> Graph {
    let mut graph = Graph::new();
    for &(a, b, w) in links {
        graph.add_edge(a, b, w).unwrap();
        graph.add_edge(b, a, w).unwrap();
    }
    graph
}

/// A -- B -- C chain: A-B 2, B-C 3.
pub fn create_chain() -> Graph {
    build_graph(&[("A", "B", 2.0), ("B", "C", 3.0)])
}

/// Triangle with a long direct A-C link: A-B 1, B-C 1, A-C 5.
pub fn create_triangle() -> Graph {
    build_graph(&[("A", "B", 1.0), ("B", "C", 1.0), ("A", "C", 5.0)])
}

/// Small deterministic generator so randomized checks are reproducible.
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Lcg(seed)
    }

    pub fn next_u32(&mut self) -> u32 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 33) as u32
    }

    pub fn below(&mut self, n: u32) -> u32 {
        self.next_u32() % n
    }
}

/// Random graph over `n` vertices named `v0..v{n-1}` with random directed
/// edges, integral weights, and a few down vertices and edges.
pub fn random_graph(rng: &mut Lcg, n: u32) -> Graph {
    let mut graph = Graph::new();
    for i in 0..n {
        graph.get_or_create_vertex(&format!("v{}", i));
    }
    for _ in 0..n * 3 {
        let a = rng.below(n);
        let b = rng.below(n);
        if a == b {
            continue;
        }
        let weight = f64::from(rng.below(10));
        let (src, dst) = (format!("v{}", a), format!("v{}", b));
        graph.add_edge(&src, &dst, weight).unwrap();
        if rng.below(5) == 0 {
            graph.set_edge_status(&src, &dst, Status::Down).unwrap();
        }
    }
    for i in 0..n {
        if rng.below(6) == 0 {
            graph.set_vertex_status(&format!("v{}", i), Status::Down).unwrap();
        }
    }
    graph
}

/// Reference all-pairs shortest distances (Floyd-Warshall) under the same
/// exclusion rules: down edges are ignored and no path continues out of a
/// down vertex. Indexed by vertex id.
pub fn reference_distances(graph: &Graph) -> Vec<Vec<f64>> {
    let n = graph.vertex_count();
    let mut dist = vec![vec![f64::INFINITY; n]; n];
    for i in 0..n {
        dist[i][i] = 0.0;
    }
    for vertex in graph.vertices() {
        if !vertex.is_up() {
            continue;
        }
        for (dest, edge) in graph.edges_from(vertex.id) {
            if edge.is_up() {
                let (u, v) = (vertex.id.0 as usize, dest.id.0 as usize);
                dist[u][v] = dist[u][v].min(edge.weight);
            }
        }
    }
    for k in 0..n {
        // Paths may end at a down vertex but never pass through one.
        let through_ok = graph
            .vertex_by_id(crate::model::VertexId(k as u32))
            .is_some_and(|v| v.is_up());
        if !through_ok {
            continue;
        }
        for i in 0..n {
            for j in 0..n {
                let via = dist[i][k] + dist[k][j];
                if via < dist[i][j] {
                    dist[i][j] = via;
                }
            }
        }
    }
    dist
}

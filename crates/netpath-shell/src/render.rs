//! Text rendering for `print` and `reachable`

use netpath_core::{Graph, Reachability};
use std::io::{self, Write};

const INDENT: &str = "    ";
const DOWN_MARKER: &str = "   DOWN";

/// Write every vertex in name order, each followed by its outgoing edges in
/// destination order. Down vertices and edges carry a `DOWN` marker.
pub fn render_graph<W: Write>(graph: &Graph, precision: usize, out: &mut W) -> io::Result<()> {
    for vertex in graph.vertices_sorted() {
        write!(out, "{}", vertex.name)?;
        if vertex.status.is_down() {
            write!(out, "{}", DOWN_MARKER)?;
        }
        writeln!(out)?;

        for (dest, edge) in graph.edges_from_sorted(vertex.id) {
            write!(out, "{}{} {:.*}", INDENT, dest.name, precision, edge.weight)?;
            if edge.status.is_down() {
                write!(out, "{}", DOWN_MARKER)?;
            }
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Write each listed vertex followed by the vertices it reaches.
pub fn render_reachability<W: Write>(listing: &[Reachability], out: &mut W) -> io::Result<()> {
    for entry in listing {
        writeln!(out, "{}", entry.vertex)?;
        for name in &entry.reachable {
            writeln!(out, "{}{}", INDENT, name)?;
        }
    }
    Ok(())
}

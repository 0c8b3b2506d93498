//! Edge-list file loader

use crate::config::ShellConfig;
use netpath_core::{Graph, GraphResult};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// How ingested lines become edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestOptions {
    /// Insert `dst -> src` alongside `src -> dst`.
    pub bidirectional: bool,
}

impl Default for IngestOptions {
    fn default() -> Self {
        IngestOptions { bidirectional: true }
    }
}

impl From<&ShellConfig> for IngestOptions {
    fn from(config: &ShellConfig) -> Self {
        IngestOptions {
            bidirectional: config.bidirectional,
        }
    }
}

/// Counters from one ingest run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestSummary {
    /// Lines that produced edges.
    pub accepted: usize,
    /// Ill-formatted lines that were skipped.
    pub skipped: usize,
}

/// Read `<source> <destination> <weight>` lines into the graph.
///
/// Blank lines are ignored. Lines that are not valid UTF-8, have the wrong
/// token count, or carry a weight that is not a non-negative number are
/// skipped with a warning; nothing about a skipped line reaches the graph.
/// Only a read failure stops the load.
pub fn load_edges<R: BufRead>(mut reader: R, graph: &mut Graph, options: IngestOptions) -> std::io::Result<IngestSummary> {
    let mut summary = IngestSummary::default();
    let mut buf = Vec::new();
    let mut index = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        index += 1;

        let Ok(line) = std::str::from_utf8(&buf) else {
            tracing::warn!(
                "Skipping ill-formatted line {}: not valid UTF-8: {}",
                index,
                String::from_utf8_lossy(&buf).trim_end()
            );
            summary.skipped += 1;
            continue;
        };
        let line = line.trim_end_matches(['\n', '\r']);
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }

        let [source, destination, weight] = tokens[..] else {
            tracing::warn!("Skipping ill-formatted line {}: {}", index, line);
            summary.skipped += 1;
            continue;
        };

        let weight = match weight.parse::<f64>() {
            Ok(w) if w.is_finite() && w >= 0.0 => w,
            _ => {
                tracing::warn!("Skipping ill-formatted line {}: {}", index, line);
                summary.skipped += 1;
                continue;
            }
        };

        if let Err(e) = insert_link(graph, source, destination, weight, options) {
            tracing::warn!("Skipping line {}: {}", index, e);
            summary.skipped += 1;
            continue;
        }
        summary.accepted += 1;
    }

    tracing::info!(
        "Loaded {} edge lines ({} skipped): {} vertices, {} edges",
        summary.accepted,
        summary.skipped,
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(summary)
}

fn insert_link(graph: &mut Graph, source: &str, destination: &str, weight: f64, options: IngestOptions) -> GraphResult<()> {
    graph.add_edge(source, destination, weight)?;
    if options.bidirectional {
        graph.add_edge(destination, source, weight)?;
    }
    Ok(())
}

/// Open `path` and load it with [`load_edges`].
pub fn load_file(path: &Path, graph: &mut Graph, options: IngestOptions) -> std::io::Result<IngestSummary> {
    tracing::debug!("Reading graph file: {}", path.display());
    let file = File::open(path)?;
    load_edges(BufReader::new(file), graph, options)
}

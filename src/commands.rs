//! CLI command implementations

use anyhow::Context;
use netpath_core::Graph;
use netpath_shell::{load_file, CommandProcessor, IngestOptions, ShellConfig};
use std::io;
use std::path::Path;

/// Load the config file if one was given, then apply CLI overrides.
pub fn load_config(path: Option<&Path>, precision: Option<usize>) -> anyhow::Result<ShellConfig> {
    let mut config = match path {
        Some(path) => ShellConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ShellConfig::default(),
    };
    if let Some(precision) = precision {
        config.precision = precision;
    }
    Ok(config)
}

/// Build the graph from `graph_file` and answer commands from stdin until
/// `quit` or end of input.
pub fn run(graph_file: Option<&Path>, config: ShellConfig) -> anyhow::Result<()> {
    let mut graph = Graph::new();

    if let Some(path) = graph_file {
        // An unreadable file leaves an empty graph; the shell still starts.
        if let Err(e) = load_file(path, &mut graph, IngestOptions::from(&config)) {
            tracing::error!("Cannot read graph file {}: {}", path.display(), e);
        }
    }

    tracing::info!(
        "Graph ready: {} vertices, {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    let stdout = io::stdout();
    let mut stderr = io::stderr();
    let mut processor = CommandProcessor::new(graph, config, stdout.lock());
    processor
        .run(io::stdin().lock(), &mut stderr)
        .context("Command loop failed")?;

    Ok(())
}

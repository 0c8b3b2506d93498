//! Request/response loop executing commands against one graph

use crate::command::{Command, CommandError};
use crate::config::ShellConfig;
use crate::render::{render_graph, render_reachability};
use netpath_core::{reachability, report_path, shortest_paths, Graph, GraphError};
use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShellError {
    #[error(transparent)]
    Command(#[from] CommandError),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("Start vertex not found: {0}")]
    SourceNotFound(String),

    #[error("Destination vertex not found: {0}")]
    DestinationNotFound(String),

    #[error("output error: {0}")]
    Io(#[from] io::Error),
}

/// Whether the loop should read another line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
}

/// Owns a graph and writes command output to `out`.
pub struct CommandProcessor<W: Write> {
    graph: Graph,
    config: ShellConfig,
    out: W,
}

impl<W: Write> CommandProcessor<W> {
    pub fn new(graph: Graph, config: ShellConfig, out: W) -> Self {
        CommandProcessor { graph, config, out }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// Give back the output sink, e.g. to inspect a buffer in tests.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Parse and execute one line.
    pub fn execute_line(&mut self, line: &str) -> Result<Outcome, ShellError> {
        let command = Command::parse(line)?;
        self.execute(command)
    }

    /// Execute one command. A failed command leaves the graph unchanged.
    pub fn execute(&mut self, command: Command) -> Result<Outcome, ShellError> {
        tracing::debug!("Executing {:?}", command);

        match command {
            Command::Print => {
                render_graph(&self.graph, self.config.precision, &mut self.out)?;
            }
            Command::Reachable => {
                let listing = reachability(&self.graph)?;
                render_reachability(&listing, &mut self.out)?;
            }
            Command::Quit => return Ok(Outcome::Quit),
            Command::SetVertexStatus { name, status } => {
                self.graph.set_vertex_status(&name, status)?;
            }
            Command::SetEdgeStatus {
                source,
                destination,
                status,
            } => {
                self.graph.set_edge_status(&source, &destination, status)?;
            }
            Command::DeleteEdge { source, destination } => {
                if self.graph.delete_edge(&source, &destination).is_none() {
                    if self.config.warn_on_missing_edge {
                        return Err(GraphError::edge_not_found(&source, &destination).into());
                    }
                    tracing::debug!("No edge {} -> {} to delete", source, destination);
                }
            }
            Command::Path { source, destination } => {
                let paths = shortest_paths(&self.graph, &source).map_err(|e| match e {
                    GraphError::VertexNotFound(name) => ShellError::SourceNotFound(name),
                    other => other.into(),
                })?;
                let report = report_path(&self.graph, &paths, &destination).map_err(|e| match e {
                    GraphError::VertexNotFound(name) => ShellError::DestinationNotFound(name),
                    other => other.into(),
                })?;
                writeln!(self.out, "{:.*}", self.config.precision, report)?;
            }
            Command::AddEdge {
                source,
                destination,
                weight,
            } => {
                self.graph.add_edge(&source, &destination, weight)?;
            }
        }

        Ok(Outcome::Continue)
    }

    /// Read commands from `input` until `quit` or end of input.
    ///
    /// `Invalid arguments` goes to the command output; every other per-command
    /// failure, including a line that is not valid UTF-8, is written to `err`
    /// and the loop keeps going. Only I/O errors end the loop early.
    pub fn run<R: BufRead, E: Write>(&mut self, mut input: R, err: &mut E) -> io::Result<()> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }

            let result = match std::str::from_utf8(&buf) {
                Ok(line) => self.execute_line(line.trim_end_matches(['\n', '\r'])),
                Err(_) => Err(CommandError::InvalidEncoding.into()),
            };
            match result {
                Ok(Outcome::Continue) => {}
                Ok(Outcome::Quit) => break,
                Err(ShellError::Io(e)) => return Err(e),
                Err(ShellError::Command(CommandError::InvalidArguments)) => {
                    writeln!(self.out, "{}", CommandError::InvalidArguments)?;
                }
                Err(e) => {
                    tracing::debug!("Command failed: {}: {}", String::from_utf8_lossy(&buf).trim(), e);
                    writeln!(err, "{}", e)?;
                }
            }
            self.out.flush()?;
        }
        self.out.flush()
    }
}

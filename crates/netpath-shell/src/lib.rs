//! Netpath Shell: edge-list ingest and the interactive command loop
//!
//! The shell reads a graph file into a [`netpath_core::Graph`] and then
//! answers one command per input line: status toggles, edge edits, shortest
//! paths, and reachability listings.

pub mod command;
pub mod config;
pub mod ingest;
pub mod processor;
pub mod render;


pub use command::{Command, CommandError};
pub use config::{ConfigError, ShellConfig};
pub use ingest::{load_edges, load_file, IngestOptions, IngestSummary};
pub use processor::{CommandProcessor, Outcome, ShellError};

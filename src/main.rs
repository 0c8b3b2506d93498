//! Netpath CLI entry point

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "netpath")]
#[command(about = "Shortest paths and reachability over a network with up/down links", long_about = None)]
struct Cli {
    /// Edge-list file: one `<source> <destination> <weight>` per line
    graph_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Decimal places for weights and distances (overrides the config file)
    #[arg(long)]
    precision: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries command output only.
    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "netpath={0},netpath_core={0},netpath_shell={0}",
            log_level
        )))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Netpath v{}", env!("CARGO_PKG_VERSION"));

    let config = commands::load_config(cli.config.as_deref(), cli.precision)?;
    commands::run(cli.graph_file.as_deref(), config)
}

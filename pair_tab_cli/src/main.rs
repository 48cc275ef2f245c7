use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

use commands::Command;

/// Pairing and standings for pairs tournaments kept in a JSON snapshot
#[derive(Parser)]
#[command(name = "pair-tab")]
struct Cli {
    /// Snapshot file, overrides the configured path
    #[arg(short, long)]
    snapshot: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::read_config();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_new(&config.logging_config)
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let snapshot_path = cli.snapshot.unwrap_or_else(|| PathBuf::from(&config.snapshot_path));

    cli.command.run(&config, &snapshot_path).await
}

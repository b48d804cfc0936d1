// Copyright 2025 ThetaNS Contributors
// Licensed under GPL-3.0

//! ThetaNS CLI application

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "thetans")]
#[command(about = "Theta Name Service - offline helpers for names, commitments and deployments", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Network address overrides (JSON); defaults to the platform config dir
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Name normalization and hashing
    Names {
        #[command(subcommand)]
        command: cli::names::NamesCommands,
    },
    /// Commit-reveal helpers
    Commit {
        #[command(subcommand)]
        command: cli::commit::CommitCommands,
    },
    /// Deployed contract addresses
    Network {
        #[command(subcommand)]
        command: cli::network::NetworkCommands,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Without -v: only WARN and ERROR
    // With -v: INFO and above from thetans
    // With RUST_LOG set: whatever it asks for
    if std::env::var("RUST_LOG").is_err() {
        use tracing_subscriber::EnvFilter;

        let filter = if cli.verbose {
            EnvFilter::new("thetans=info")
        } else {
            EnvFilter::new("thetans=warn")
        };

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_target(true)
            .init();
    }

    match cli.command {
        Commands::Names { command } => {
            cli::names::execute(command)?;
        }
        Commands::Commit { command } => {
            cli::commit::execute(command, cli.config)?;
        }
        Commands::Network { command } => {
            cli::network::execute(command, cli.config)?;
        }
    }

    Ok(())
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Deckhand Contributors

//! deckhand: run dashboard actions from the command line.
//!
//! This binary is the same consumer of the engine contract the dashboard
//! UI is: it builds an [`ActionSpec`](dh_core::ActionSpec), wires Ctrl-C
//! to the cancellation token, and renders the engine's callbacks.

use anyhow::Result;
use clap::{Parser, Subcommand};
use dh_engine::{Engine, EngineConfig};

mod run;

#[derive(Parser)]
#[command(name = "deckhand", version, about = "Terminal dashboard action runner")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a shell action and stream its output
    Run(run::RunArgs),
    /// Check whether elevation credentials are already cached
    SudoCached,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run(args) => {
            let code = run::run(args).await?;
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Commands::SudoCached => {
            let engine = Engine::new(EngineConfig::new());
            if engine.is_elevation_cached().await {
                println!("cached");
                Ok(())
            } else {
                println!("not cached");
                std::process::exit(1);
            }
        }
    }
}

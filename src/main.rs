// Copyright 2026 Playver Contributors
// SPDX-License-Identifier: Apache-2.0

use anyhow::Result;
use clap::{Parser, Subcommand};
use playver::extract;
use playver::fetch::PlayFetcher;
use playver::rest::{self, AppState};
use std::sync::Arc;

/// Default listen port when neither --port nor PORT is set.
const DEFAULT_PORT: u16 = 3000;

#[derive(Parser)]
#[command(
    name = "playver",
    about = "Playver — Play Store app version lookup service",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP lookup service
    Serve {
        /// Port to listen on (falls back to the PORT env var, then 3000)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Look up one package and print its published version
    Lookup {
        /// Package id, e.g. "com.example.app"
        package: String,
        /// Print the full JSON payload instead of the bare version
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("playver=info".parse()?),
        )
        .init();

    match cli.command {
        Commands::Serve { port } => {
            let port = port
                .or_else(|| std::env::var("PORT").ok().and_then(|p| p.parse().ok()))
                .unwrap_or(DEFAULT_PORT);
            tracing::info!("starting playver v{}", env!("CARGO_PKG_VERSION"));
            let state = Arc::new(AppState {
                fetcher: PlayFetcher::new(),
            });
            rest::start(port, state).await
        }
        Commands::Lookup { package, json } => {
            let fetcher = PlayFetcher::new();
            let lookup = extract::lookup(&fetcher, &package).await?;
            if json {
                println!("{}", serde_json::to_string(&lookup)?);
            } else {
                println!("{}", lookup.version);
            }
            Ok(())
        }
    }
}

//! Razzie - Golden Raspberry producer interval CLI
//!
//! The `razzie` command loads the award list and reports which producers
//! have the shortest and the longest gap between consecutive wins.
//!
//! ## Commands
//!
//! - `load`: Replace the store contents with the movie list
//! - `intervals`: Print the min/max producer interval document
//! - `stats`: Print total and winner counts

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use razzie_state::{
    load_into, producer_intervals, store_stats, LoadReport, MovieStore, SurrealMovieStore,
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, Level};

#[derive(Parser)]
#[command(name = "razzie")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Golden Raspberry Awards producer interval analytics", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long, global = true)]
    json: bool,

    /// Semicolon-delimited movie list
    #[arg(long, global = true, env = "RAZZIE_CSV", default_value = "movielist.csv")]
    csv: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Clear the store and load the movie list
    Load,

    /// Print producers with the shortest and longest gap between wins
    ///
    /// Loads the movie list first when the store is empty.
    Intervals {
        /// Pretty-print the JSON document
        #[arg(long)]
        pretty: bool,
    },

    /// Print total and winner counts
    Stats,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    razzie_core::init_tracing(cli.json, level);

    let store = SurrealMovieStore::from_env()
        .await
        .context("Failed to connect to movie store")?;

    match cli.command {
        Commands::Load => cmd_load(&store, &cli.csv).await,
        Commands::Intervals { pretty } => cmd_intervals(&store, &cli.csv, pretty).await,
        Commands::Stats => cmd_stats(&store, &cli.csv).await,
    }
}

/// Load the movie list, replacing whatever the store held
async fn cmd_load(store: &dyn MovieStore, csv: &Path) -> Result<()> {
    let report = load(store, csv).await?;
    print_json(&report, true)
}

async fn cmd_intervals(store: &dyn MovieStore, csv: &Path, pretty: bool) -> Result<()> {
    ensure_loaded(store, csv).await?;

    let result = producer_intervals(store)
        .await
        .context("Failed to compute producer intervals")?;
    print_json(&result, pretty)
}

async fn cmd_stats(store: &dyn MovieStore, csv: &Path) -> Result<()> {
    ensure_loaded(store, csv).await?;

    let stats = store_stats(store)
        .await
        .context("Failed to read store statistics")?;
    print_json(&stats, true)
}

async fn load(store: &dyn MovieStore, csv: &Path) -> Result<LoadReport> {
    let report = load_into(store, csv)
        .await
        .with_context(|| format!("Failed to load movie list from {}", csv.display()))?;
    info!(
        "Loaded {} movies ({} winners) from {}",
        report.total, report.winners, report.source
    );
    Ok(report)
}

/// Populate an empty store from the movie list
async fn ensure_loaded(store: &dyn MovieStore, csv: &Path) -> Result<()> {
    let count = store.count().await.context("Failed to query movie store")?;
    if count == 0 {
        info!("Movie store is empty, loading {}", csv.display());
        load(store, csv).await?;
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{rendered}");
    Ok(())
}

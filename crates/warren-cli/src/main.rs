//! warren-cli
//!
//! Command-line surface over the warren crates: register animals, record
//! weights, run welfare assessments, and export reports. All behavior lives
//! in the library crates; this binary is argument parsing and printing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use eyre::Result;

use warren_store::Store;

mod commands;

#[derive(Parser, Debug)]
#[command(name = "warren", about = "Animal welfare assessment tracker", version)]
struct Cli {
    /// Data directory (defaults to the platform data dir, WARREN_DATA_DIR
    /// overrides)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Manage the animal registry
    Animal {
        #[command(subcommand)]
        command: commands::animal::AnimalCommand,
    },
    /// List available assessment scales
    Scales(commands::scales::ScalesArgs),
    /// Run an assessment and persist the result
    Assess(commands::assess::AssessArgs),
    /// List saved assessments for an animal
    Assessments(commands::assess::AssessmentsArgs),
    /// Record and inspect weight measurements
    Weight {
        #[command(subcommand)]
        command: commands::weight::WeightCommand,
    },
    /// Show progress toward an animal's weight target
    Progress(commands::weight::ProgressArgs),
    /// Write CSV files and a Markdown report for an animal
    Export(commands::export::ExportArgs),
}

fn data_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    if let Some(dir) = std::env::var_os("WARREN_DATA_DIR") {
        return Ok(PathBuf::from(dir));
    }
    dirs::data_dir()
        .map(|d| d.join("warren"))
        .ok_or_else(|| eyre::eyre!("no platform data directory; pass --data-dir"))
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let store = Store::open(data_dir(cli.data_dir)?)?;

    match cli.command {
        Command::Animal { command } => commands::animal::run(&store, command).await,
        Command::Scales(args) => commands::scales::run(args),
        Command::Assess(args) => commands::assess::run(&store, args).await,
        Command::Assessments(args) => commands::assess::list(&store, args).await,
        Command::Weight { command } => commands::weight::run(&store, command).await,
        Command::Progress(args) => commands::weight::progress(&store, args).await,
        Command::Export(args) => commands::export::run(&store, args).await,
    }
}

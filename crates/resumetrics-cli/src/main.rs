//! CLI application for resume ingestion and candidate analytics.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{config, ingest, parse, report, GlobalOptions};

/// Resumetrics - Extract candidate data from PDF resumes and report on it
#[derive(Parser)]
#[command(name = "resumetrics")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Path to the candidate database (overrides the config file)
    #[arg(short, long, global = true)]
    database: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract fields from a single resume without storing it
    Parse(parse::ParseArgs),

    /// Extract, parse and store resumes matching a pattern
    Ingest(ingest::IngestArgs),

    /// Skill and experience analytics over stored candidates
    Report(report::ReportArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let globals = GlobalOptions {
        config: cli.config,
        database: cli.database,
    };

    match cli.command {
        Commands::Parse(args) => parse::run(args, &globals),
        Commands::Ingest(args) => ingest::run(args, &globals),
        Commands::Report(args) => report::run(args, &globals),
        Commands::Config(args) => config::run(args, &globals),
    }
}

//! Ingest command - extract, parse and store every resume matching a pattern.

use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{error, warn};

use resumetrics_core::ingest::{IngestOutcome, Ingestor, UploadPolicy};
use resumetrics_core::store::CandidateStore;

use super::GlobalOptions;

/// Arguments for the ingest command.
#[derive(Args)]
pub struct IngestArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Copy each file into the configured upload directory before processing
    #[arg(long)]
    stage: bool,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of ingesting a single file.
struct FileResult {
    path: PathBuf,
    outcome: Result<IngestOutcome, String>,
}

pub fn run(args: IngestArgs, globals: &GlobalOptions) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = globals.load_config()?;

    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file())
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to ingest",
        style("ℹ").blue(),
        files.len()
    );

    let store = CandidateStore::from_config(&config.store)?;
    let ingestor =
        Ingestor::new(&store).with_policy(UploadPolicy::from_config(&config.upload));

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let mut results = Vec::with_capacity(files.len());
    for path in files {
        let outcome = if args.stage {
            ingestor.ingest_upload(&path)
        } else {
            ingestor.ingest_file(&path)
        };

        match outcome {
            Ok(outcome) => results.push(FileResult {
                path,
                outcome: Ok(outcome),
            }),
            Err(e) => {
                let error_msg = e.to_string();
                if args.continue_on_error {
                    warn!("Failed to ingest {}: {}", path.display(), error_msg);
                    results.push(FileResult {
                        path,
                        outcome: Err(error_msg),
                    });
                } else {
                    pb.abandon();
                    error!("Failed to ingest {}: {}", path.display(), error_msg);
                    anyhow::bail!("Ingestion failed for {}: {}", path.display(), error_msg);
                }
            }
        }

        pb.inc(1);
    }

    pb.finish_with_message("Complete");
    drop(ingestor);
    store.close()?;

    println!();
    for result in &results {
        println!("  {} {}", result.path.display(), describe(&result.outcome));
    }

    let count = |f: fn(&Result<IngestOutcome, String>) -> bool| {
        results.iter().filter(|r| f(&r.outcome)).count()
    };
    let saved = count(|o| matches!(o, Ok(IngestOutcome::Saved { .. })));
    let duplicates = count(|o| matches!(o, Ok(IngestOutcome::Duplicate { .. })));
    let failed = count(|o| o.is_err());

    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    println!(
        "   {} saved, {} duplicates, {} without data, {} failed",
        style(saved).green(),
        style(duplicates).yellow(),
        results.len() - saved - duplicates - failed,
        style(failed).red()
    );

    Ok(())
}

fn describe(outcome: &Result<IngestOutcome, String>) -> String {
    match outcome {
        Ok(IngestOutcome::Saved { id }) => format!("{} candidate {}", style("saved").green(), id),
        Ok(IngestOutcome::Duplicate { email }) => format!(
            "{} duplicate resume for {}",
            style("skipped").yellow(),
            email.as_deref().unwrap_or("<no email>")
        ),
        Ok(IngestOutcome::NoText) => format!("{} no text extracted", style("skipped").yellow()),
        Ok(IngestOutcome::Unparsed) => format!("{} nothing parsed", style("skipped").yellow()),
        Err(e) => format!("{} {}", style("rejected").red(), e),
    }
}

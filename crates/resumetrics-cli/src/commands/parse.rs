//! Parse command - extract candidate fields from a single resume.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use resumetrics_core::ingest::UploadPolicy;
use resumetrics_core::models::candidate::ParsedResume;
use resumetrics_core::pdf::extract_text_from_path;
use resumetrics_core::resume::ResumeParser;

use super::GlobalOptions;

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Input PDF resume
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub fn run(args: ParseArgs, globals: &GlobalOptions) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = globals.load_config()?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }
    UploadPolicy::from_config(&config.upload).check(&args.input)?;

    info!("Parsing file: {}", args.input.display());

    let text = extract_text_from_path(&args.input);
    let resume = ResumeParser::new()
        .parse(&text)
        .ok_or_else(|| anyhow::anyhow!("No text could be extracted from the PDF"))?;

    let output = format_resume(&resume, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

pub fn format_resume(resume: &ParsedResume, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(resume)?),
        OutputFormat::Csv => format_csv(resume),
        OutputFormat::Text => Ok(format_text(resume)),
    }
}

fn format_csv(resume: &ParsedResume) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    let experience = resume.experience.to_string();

    wtr.write_record(["name", "email", "phone", "skills", "education", "experience"])?;
    wtr.write_record([
        resume.name.as_str(),
        resume.email.as_deref().unwrap_or_default(),
        resume.phone.as_deref().unwrap_or_default(),
        resume.skills.as_str(),
        resume.education.as_str(),
        experience.as_str(),
    ])?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(resume: &ParsedResume) -> String {
    let mut output = String::new();

    output.push_str(&format!("Name: {}\n", resume.name));
    output.push_str(&format!("Email: {}\n", resume.email.as_deref().unwrap_or("-")));
    output.push_str(&format!("Phone: {}\n", resume.phone.as_deref().unwrap_or("-")));
    output.push_str(&format!("Experience: {} years\n", resume.experience));
    output.push('\n');

    output.push_str("Skills:\n");
    for skill in resume.skill_list() {
        output.push_str(&format!("  - {}\n", skill));
    }
    output.push('\n');

    output.push_str("Education:\n");
    for entry in resume.education_list() {
        output.push_str(&format!("  - {}\n", entry));
    }

    output
}

//! Report command - skill and experience analytics over stored candidates.

use std::fs;
use std::path::{Path, PathBuf};

use base64::{engine::general_purpose::STANDARD, Engine as _};
use clap::Args;
use console::style;
use tracing::debug;

use resumetrics_core::analytics::{DashboardReport, ResumeAnalytics};
use resumetrics_core::store::CandidateStore;

use super::GlobalOptions;

/// Arguments for the report command.
#[derive(Args)]
pub struct ReportArgs {
    /// Write the JSON report to a file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write a self-contained HTML dashboard
    #[arg(long)]
    html: Option<PathBuf>,

    /// Write the two charts as PNG files into this directory
    #[arg(long)]
    charts_dir: Option<PathBuf>,
}

pub fn run(args: ReportArgs, globals: &GlobalOptions) -> anyhow::Result<()> {
    let config = globals.load_config()?;
    let store = CandidateStore::from_config(&config.store)?;

    let report = ResumeAnalytics::new(&store)
        .with_config(config.analytics.clone())
        .dashboard()?;
    debug!(
        "Report covers {} candidates, {} ranked skills",
        report.exp_data.len(),
        report.skills_data.len()
    );

    let json = serde_json::to_string_pretty(&report)?;
    if let Some(output_path) = &args.output {
        fs::write(output_path, &json)?;
        println!(
            "{} Report written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", json);
    }

    if let Some(html_path) = &args.html {
        fs::write(html_path, render_html(&report))?;
        println!(
            "{} Dashboard written to {}",
            style("✓").green(),
            html_path.display()
        );
    }

    if let Some(charts_dir) = &args.charts_dir {
        write_charts(charts_dir, &report)?;
        println!(
            "{} Charts written to {}",
            style("✓").green(),
            charts_dir.display()
        );
    }

    store.close()?;
    Ok(())
}

fn write_charts(dir: &Path, report: &DashboardReport) -> anyhow::Result<()> {
    fs::create_dir_all(dir)?;
    fs::write(dir.join("skills.png"), STANDARD.decode(&report.skills_plot)?)?;
    fs::write(dir.join("experience.png"), STANDARD.decode(&report.exp_plot)?)?;
    Ok(())
}

/// Dashboard page with both charts embedded as data URIs and the data tables
/// beneath them.
pub fn render_html(report: &DashboardReport) -> String {
    let mut skills_rows = String::new();
    for entry in &report.skills_data {
        skills_rows.push_str(&format!(
            "      <tr><td>{}</td><td>{}</td></tr>\n",
            escape(&entry.skill),
            entry.count
        ));
    }

    let exp_values = report
        .exp_data
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>Resume Analytics Dashboard</title>
</head>
<body>
  <h1>Resume Analytics Dashboard</h1>
  <h2>Top Skills in Resumes</h2>
  <img src="data:image/png;base64,{skills_plot}" alt="Top skills">
  <table>
    <thead><tr><th>Skill</th><th>Count</th></tr></thead>
    <tbody>
{skills_rows}    </tbody>
  </table>
  <h2>Experience Distribution</h2>
  <img src="data:image/png;base64,{exp_plot}" alt="Experience distribution">
  <p>Years of experience: {exp_values}</p>
</body>
</html>
"#,
        skills_plot = report.skills_plot,
        exp_plot = report.exp_plot,
    )
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use resumetrics_core::analytics::SkillCount;

    #[test]
    fn test_html_embeds_charts_and_tables() {
        let report = DashboardReport {
            skills_plot: "U0tJTExT".to_string(),
            exp_plot: "RVhQ".to_string(),
            skills_data: vec![SkillCount {
                skill: "c++".to_string(),
                count: 2,
            }],
            exp_data: vec![3, 7],
        };

        let html = render_html(&report);
        assert!(html.contains(r#"src="data:image/png;base64,U0tJTExT""#));
        assert!(html.contains(r#"src="data:image/png;base64,RVhQ""#));
        assert!(html.contains("<tr><td>c++</td><td>2</td></tr>"));
        assert!(html.contains("Years of experience: 3, 7"));
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("a<b>&c"), "a&lt;b&gt;&amp;c");
    }
}

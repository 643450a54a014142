//! Audit command - score a scanner report and summarize it

use crate::config;
use crate::models::{Advisory, Severity};
use crate::report;
use crate::reporters::{self, OutputFormat};
use anyhow::{anyhow, Context, Result};
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;
use tracing::info;

/// Run the audit command
pub fn run(
    report_path: Option<&Path>,
    format_flag: Option<&str>,
    output: Option<&Path>,
    fail_on_flag: Option<&str>,
    ignore_flags: &[String],
) -> Result<()> {
    let config = config::load_config(Path::new("."));

    let advisories = match report_path {
        Some(path) => report::load_report(path)
            .with_context(|| format!("failed to load report from {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read report from stdin")?;
            report::parse_report(&buf).context("failed to parse report from stdin")?
        }
    };

    // Drop ignored advisories (config list plus --ignore flags) before scoring
    let ignored: HashSet<&str> = config
        .ignore
        .advisories
        .iter()
        .chain(ignore_flags.iter())
        .map(String::as_str)
        .collect();
    let before = advisories.len();
    let advisories: Vec<Advisory> = advisories
        .into_iter()
        .filter(|a| !ignored.contains(a.id.as_str()))
        .collect();
    if advisories.len() < before {
        info!("Ignored {} advisories", before - advisories.len());
    }

    let scored = report::score_advisories(advisories);

    // CLI flag > config default > "text"
    let format: OutputFormat = format_flag
        .or(config.defaults.format.as_deref())
        .unwrap_or("text")
        .parse()?;
    let rendered = reporters::render(&scored, format)?;

    match output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("failed to write report to {}", path.display()))?;
            info!("Wrote {} report to {}", format, path.display());
        }
        None => print!("{rendered}"),
    }

    // CLI flag > config default; unknown findings never trip the threshold
    if let Some(threshold) = fail_on_flag.or(config.defaults.fail_on.as_deref()) {
        let threshold = Severity::from_name(threshold)
            .ok_or_else(|| anyhow!("invalid fail-on tier '{threshold}'"))?;
        if scored
            .summary
            .worst()
            .is_some_and(|worst| worst >= threshold)
        {
            std::process::exit(1);
        }
    }

    Ok(())
}

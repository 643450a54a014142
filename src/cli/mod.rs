//! CLI command definitions and handlers

mod audit;
mod init;
mod score;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Vulnscore - CVSS severity scoring and audit triage
#[derive(Parser, Debug)]
#[command(name = "vulnscore")]
#[command(
    version,
    about = "Score CVSS identifiers and triage vulnerability audit reports",
    long_about = "Vulnscore converts CVSS identifiers — plain numeric scores, CVSS v2 vectors, \
and CVSS v3.x vectors — into qualitative severity tiers, and summarizes scanner \
audit reports by tier.\n\n\
Identifiers that match no recognized shape classify as `unknown` rather than \
erroring; an audit never fails because a single advisory is unscoreable.",
    after_help = "\
Examples:
  vulnscore score 'CVSS:3.1/AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H'
  vulnscore score '(AV:N/AC:L/Au:N/C:C/I:C/A:C)' --base-score
  vulnscore audit report.json                       Summarize a scanner report
  vulnscore audit report.json --format json         JSON output for scripting
  vulnscore audit report.json --fail-on high        Exit code 1 on high+ findings (CI mode)
  cat report.json | vulnscore audit                 Read the report from stdin
  vulnscore init                                    Write a starter vulnscore.toml"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify a single CVSS identifier into a severity tier
    Score {
        /// CVSS identifier: plain score, v2 vector, or v3.x vector (omit for `unknown`)
        identifier: Option<String>,

        /// Also print the computed numeric base score
        #[arg(long)]
        base_score: bool,
    },

    /// Score a scanner audit report and summarize findings by severity
    Audit {
        /// Path to the JSON audit report (default: stdin)
        report: Option<PathBuf>,

        /// Output format: text, json, markdown (or md)
        #[arg(long, short = 'f', value_parser = ["text", "json", "markdown", "md"])]
        format: Option<String>,

        /// Output file path (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Exit with code 1 if findings at or above this tier exist
        #[arg(long, value_parser = ["critical", "high", "medium", "low"])]
        fail_on: Option<String>,

        /// Advisory ids to drop before scoring (repeatable)
        #[arg(long)]
        ignore: Vec<String>,
    },

    /// Initialize a vulnscore.toml config file with example settings
    Init,
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Score {
            identifier,
            base_score,
        } => score::run(identifier.as_deref(), base_score),

        Commands::Audit {
            report,
            format,
            output,
            fail_on,
            ignore,
        } => audit::run(
            report.as_deref(),
            format.as_deref(),
            output.as_deref(),
            fail_on.as_deref(),
            &ignore,
        ),

        Commands::Init => init::run(),
    }
}

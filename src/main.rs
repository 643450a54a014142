//! Vulnscore - CVSS severity scoring CLI
//!
//! Classifies CVSS identifiers into severity tiers and triages
//! vulnerability scanner audit reports.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    // Parse CLI args and run
    let cli = vulnscore::cli::Cli::parse();
    vulnscore::cli::run(cli)
}

//! Init command - write a starter config file

use crate::config::CONFIG_FILE;
use anyhow::{Context, Result};
use std::path::Path;

const STARTER_CONFIG: &str = r#"# Vulnscore configuration
# CLI flags take precedence over these values.

[defaults]
# Default output format for `vulnscore audit` (text, json, markdown)
format = "text"

# Exit nonzero when findings at or above this tier exist
# (critical, high, medium, low)
# fail_on = "high"

[ignore]
# Advisory ids dropped from the report before scoring
advisories = []
"#;

/// Run the init command
pub fn run() -> Result<()> {
    let path = Path::new(CONFIG_FILE);
    if path.exists() {
        println!("{} already exists, leaving it untouched", path.display());
        return Ok(());
    }

    std::fs::write(path, STARTER_CONFIG)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Created {}", path.display());
    Ok(())
}

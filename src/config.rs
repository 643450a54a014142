//! Configuration module for Vulnscore
//!
//! Loads per-project configuration from a `vulnscore.toml` file in the
//! working directory. CLI flags always take precedence over config values.
//!
//! # Configuration Format
//!
//! ```toml
//! # vulnscore.toml
//!
//! [defaults]
//! format = "text"    # default output format for `vulnscore audit`
//! fail_on = "high"   # exit nonzero when findings at or above this tier exist
//!
//! [ignore]
//! advisories = ["GHSA-jf85-cpcp-j695"]  # advisory ids dropped before scoring
//! ```

use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

/// Config file name searched for in the working directory
pub const CONFIG_FILE: &str = "vulnscore.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub defaults: Defaults,
    pub ignore: IgnoreConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Default output format (text, json, markdown)
    pub format: Option<String>,
    /// Default severity threshold for a nonzero exit code
    pub fail_on: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct IgnoreConfig {
    /// Advisory ids dropped from the report before scoring
    pub advisories: Vec<String>,
}

/// Load configuration from `dir`, falling back to defaults when the file is
/// missing or unreadable. An invalid config file is reported but never fatal.
pub fn load_config(dir: &Path) -> Config {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        return Config::default();
    }

    match std::fs::read_to_string(&path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(config) => {
                debug!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                warn!("Failed to parse {}: {}", path.display(), e);
                Config::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {}: {}", path.display(), e);
            Config::default()
        }
    }
}

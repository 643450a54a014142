//! Score command - classify a single CVSS identifier

use crate::cvss;
use anyhow::Result;

/// Run the score command
///
/// Always exits 0: an unscoreable identifier prints `unknown`, which is a
/// classification, not an error.
pub fn run(identifier: Option<&str>, show_base_score: bool) -> Result<()> {
    let tier = cvss::severity_for(identifier);
    if show_base_score {
        match cvss::base_score(identifier) {
            Some(score) => println!("{tier} ({score})"),
            None => println!("{tier} (n/a)"),
        }
    } else {
        println!("{tier}");
    }
    Ok(())
}

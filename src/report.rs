//! Audit report parsing and scoring
//!
//! Reads the JSON report captured from an external vulnerability scanner,
//! scores each advisory's CVSS field through the scoring engine, and
//! aggregates findings into a per-tier summary.
//!
//! Scoring failures are data, not errors: an advisory whose CVSS field is
//! absent or unscoreable becomes a finding of `unknown` severity rather than
//! being dropped or aborting the report.

use crate::cvss;
use crate::models::{deterministic_finding_id, Advisory, AuditReport, Finding, SeveritySummary};
use chrono::Utc;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// Errors reading or decoding a scanner report
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to read report: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed audit report: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Scanner reports come either as a bare advisory array or wrapped in an
/// `advisories` field
#[derive(Deserialize)]
#[serde(untagged)]
enum ReportEnvelope {
    Wrapped { advisories: Vec<Advisory> },
    Bare(Vec<Advisory>),
}

/// Parse a scanner report from its JSON text
pub fn parse_report(input: &str) -> Result<Vec<Advisory>, ReportError> {
    let envelope: ReportEnvelope = serde_json::from_str(input)?;
    let advisories = match envelope {
        ReportEnvelope::Wrapped { advisories } => advisories,
        ReportEnvelope::Bare(advisories) => advisories,
    };
    debug!("Parsed {} advisories from report", advisories.len());
    Ok(advisories)
}

/// Load and parse a scanner report from a file
pub fn load_report(path: &Path) -> Result<Vec<Advisory>, ReportError> {
    let content = std::fs::read_to_string(path)?;
    parse_report(&content)
}

/// Score advisories into an audit report with a per-tier summary
pub fn score_advisories(advisories: Vec<Advisory>) -> AuditReport {
    let findings: Vec<Finding> = advisories
        .into_iter()
        .map(|advisory| {
            let severity = cvss::severity_for(advisory.cvss.as_deref());
            debug!(
                "Scored advisory {} ({}) as {}",
                advisory.id, advisory.module, severity
            );
            Finding {
                id: deterministic_finding_id(&advisory.id, &advisory.module, &advisory.title),
                advisory_id: advisory.id,
                package: advisory.module,
                severity,
                title: advisory.title,
                patched_versions: advisory.patched_versions,
                unaffected_versions: advisory.unaffected_versions,
                url: advisory.url,
            }
        })
        .collect();

    let summary = SeveritySummary::from_findings(&findings);
    info!(
        "Scored {} findings ({} critical, {} high, {} unknown)",
        summary.total, summary.critical, summary.high, summary.unknown
    );

    AuditReport {
        generated_at: Utc::now(),
        findings,
        summary,
    }
}

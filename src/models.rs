//! Core data models for Vulnscore
//!
//! These models are used throughout the codebase for representing
//! advisories, scored findings, and audit report summaries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Generate a deterministic finding ID based on content hash.
///
/// This ensures findings have stable IDs across runs, enabling:
/// - Tracking findings over time (fixed vs new vs recurring)
/// - Suppression by ID in config files
/// - Reliable deduplication
///
/// The ID is a 16-character hex string derived from hashing the advisory id,
/// the affected package, and the advisory title.
pub fn deterministic_finding_id(advisory_id: &str, package: &str, title: &str) -> String {
    // SHA-256 for stable cross-version hashing.
    // DefaultHasher is intentionally not stable across Rust/compiler versions.
    let mut hasher = Sha256::new();
    hasher.update(advisory_id.as_bytes());
    hasher.update(b"\n");
    hasher.update(package.as_bytes());
    hasher.update(b"\n");
    hasher.update(title.as_bytes());
    let digest = hasher.finalize();
    digest
        .iter()
        .take(8)
        .map(|b| format!("{b:02x}"))
        .collect()
}

/// Severity tiers for findings
///
/// `Unknown` is reserved for missing or unscoreable CVSS input; it is never
/// produced from a valid in-range score.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Unknown,
    Informational,
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Classify a numeric base score into a tier.
    ///
    /// Boundaries are closed on the lower side of each tier; a score of
    /// exactly 0 is informational, not low.
    pub fn from_score(score: f64) -> Self {
        if score >= 9.0 {
            Severity::Critical
        } else if score >= 7.0 {
            Severity::High
        } else if score >= 4.0 {
            Severity::Medium
        } else if score > 0.0 {
            Severity::Low
        } else {
            Severity::Informational
        }
    }

    /// Classify an optional base score; an unavailable score is `Unknown`.
    pub fn from_base_score(score: Option<f64>) -> Self {
        match score {
            Some(s) => Self::from_score(s),
            None => Severity::Unknown,
        }
    }

    /// Parse a tier name as used in CLI flags and config files
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "critical" => Some(Severity::Critical),
            "high" => Some(Severity::High),
            "medium" => Some(Severity::Medium),
            "low" => Some(Severity::Low),
            "informational" | "info" => Some(Severity::Informational),
            "unknown" => Some(Severity::Unknown),
            _ => None,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Unknown => write!(f, "unknown"),
            Severity::Informational => write!(f, "informational"),
            Severity::Low => write!(f, "low"),
            Severity::Medium => write!(f, "medium"),
            Severity::High => write!(f, "high"),
            Severity::Critical => write!(f, "critical"),
        }
    }
}

/// A single advisory as reported by the external scanner
///
/// The `cvss` field is passed unmodified to the scoring engine; everything
/// else is carried through to the finding for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Advisory {
    pub id: String,
    #[serde(alias = "module_name")]
    pub module: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub cvss: Option<String>,
    #[serde(default)]
    pub patched_versions: Option<String>,
    #[serde(default)]
    pub unaffected_versions: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// A scored vulnerability finding
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Finding {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub advisory_id: String,
    #[serde(default)]
    pub package: String,
    #[serde(default)]
    pub severity: Severity,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub patched_versions: Option<String>,
    #[serde(default)]
    pub unaffected_versions: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Summary of findings by severity tier
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeveritySummary {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub informational: usize,
    pub unknown: usize,
    pub total: usize,
}

impl SeveritySummary {
    pub fn from_findings(findings: &[Finding]) -> Self {
        let mut summary = Self::default();
        for f in findings {
            match f.severity {
                Severity::Critical => summary.critical += 1,
                Severity::High => summary.high += 1,
                Severity::Medium => summary.medium += 1,
                Severity::Low => summary.low += 1,
                Severity::Informational => summary.informational += 1,
                Severity::Unknown => summary.unknown += 1,
            }
            summary.total += 1;
        }
        summary
    }

    /// Highest scored tier with a nonzero count.
    ///
    /// `unknown` findings are excluded: an unscoreable advisory is a valid
    /// classification, not a threshold trigger.
    pub fn worst(&self) -> Option<Severity> {
        if self.critical > 0 {
            Some(Severity::Critical)
        } else if self.high > 0 {
            Some(Severity::High)
        } else if self.medium > 0 {
            Some(Severity::Medium)
        } else if self.low > 0 {
            Some(Severity::Low)
        } else if self.informational > 0 {
            Some(Severity::Informational)
        } else {
            None
        }
    }
}

/// Scored audit report ready for rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditReport {
    pub generated_at: DateTime<Utc>,
    pub findings: Vec<Finding>,
    pub summary: SeveritySummary,
}

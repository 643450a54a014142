//! Vulnscore - CVSS severity scoring and audit report triage
//!
//! Converts CVSS identifiers (plain scores, v2 vectors, v3.x vectors) into
//! qualitative severity tiers and summarizes scanner audit reports by tier.

pub mod cli;
pub mod config;
pub mod cvss;
pub mod models;
pub mod report;
pub mod reporters;

pub use cvss::severity_for;
pub use models::{Advisory, AuditReport, Finding, Severity, SeveritySummary};

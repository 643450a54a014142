//! Text (terminal) reporter with colors and formatting

use crate::models::{AuditReport, Severity};
use anyhow::Result;

/// Severity colors (ANSI escape codes)
fn severity_color(severity: &Severity) -> &'static str {
    match severity {
        Severity::Critical => "\x1b[31m",      // Red
        Severity::High => "\x1b[91m",          // Light red
        Severity::Medium => "\x1b[33m",        // Yellow
        Severity::Low => "\x1b[34m",           // Blue
        Severity::Informational => "\x1b[90m", // Gray
        Severity::Unknown => "\x1b[35m",       // Magenta
    }
}

/// Reset ANSI color
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

/// Severity tag
fn severity_tag(severity: &Severity) -> &'static str {
    match severity {
        Severity::Critical => "[C]",
        Severity::High => "[H]",
        Severity::Medium => "[M]",
        Severity::Low => "[L]",
        Severity::Informational => "[I]",
        Severity::Unknown => "[?]",
    }
}

/// Render report as formatted terminal output
pub fn render(report: &AuditReport) -> Result<String> {
    let mut out = String::new();

    // Header
    out.push_str(&format!("\n{BOLD}Vulnscore Audit{RESET}\n"));
    out.push_str(&format!(
        "{DIM}──────────────────────────────────────{RESET}\n"
    ));

    // Findings summary
    let s = &report.summary;
    out.push_str(&format!("{BOLD}FINDINGS{RESET} ({} total)\n", s.total));

    let mut summary_parts = Vec::new();
    if s.critical > 0 {
        summary_parts.push(format!("\x1b[31m{} critical{RESET}", s.critical));
    }
    if s.high > 0 {
        summary_parts.push(format!("\x1b[91m{} high{RESET}", s.high));
    }
    if s.medium > 0 {
        summary_parts.push(format!("\x1b[33m{} medium{RESET}", s.medium));
    }
    if s.low > 0 {
        summary_parts.push(format!("\x1b[34m{} low{RESET}", s.low));
    }
    if s.informational > 0 {
        summary_parts.push(format!("\x1b[90m{} informational{RESET}", s.informational));
    }
    if s.unknown > 0 {
        summary_parts.push(format!("\x1b[35m{} unknown{RESET}", s.unknown));
    }
    if !summary_parts.is_empty() {
        out.push_str(&format!("  {}\n\n", summary_parts.join(" | ")));
    }

    // Findings table
    if !report.findings.is_empty() {
        out.push_str(&format!(
            "{DIM}  SEV   ADVISORY              PACKAGE          TITLE{RESET}\n"
        ));
        out.push_str(&format!(
            "{DIM}  ─────────────────────────────────────────────────────────────────{RESET}\n"
        ));

        for finding in &report.findings {
            let sev_c = severity_color(&finding.severity);
            let sev_tag = severity_tag(&finding.severity);

            // Truncate title if too long — use chars() to avoid UTF-8 panic
            let title: String = finding.title.chars().take(40).collect();
            let title = if finding.title.chars().count() > 43 {
                format!("{}...", title)
            } else {
                finding.title.clone()
            };

            out.push_str(&format!(
                "  {sev_c}{sev_tag}{RESET}   {:<21} {:<16} {title}\n",
                finding.advisory_id, finding.package
            ));
            if let Some(patched) = &finding.patched_versions {
                out.push_str(&format!("{DIM}        fix: upgrade to {patched}{RESET}\n"));
            }
        }
        out.push('\n');
    } else {
        out.push_str("  No findings.\n\n");
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_report;

    #[test]
    fn test_text_render_includes_summary_counts() {
        let report = test_report();
        let out = render(&report).expect("render text");
        assert!(out.contains("3 total"));
        assert!(out.contains("1 critical"));
        assert!(out.contains("1 medium"));
        assert!(out.contains("1 unknown"));
    }

    #[test]
    fn test_text_render_includes_fix_line() {
        let report = test_report();
        let out = render(&report).expect("render text");
        assert!(out.contains("upgrade to >=4.17.12"));
    }

    #[test]
    fn test_text_render_empty_report() {
        let mut report = test_report();
        report.findings.clear();
        report.summary = Default::default();
        let out = render(&report).expect("render text");
        assert!(out.contains("No findings."));
    }
}

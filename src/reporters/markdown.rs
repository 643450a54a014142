//! Markdown reporter for GitHub-flavored Markdown output
//!
//! Generates reports suitable for:
//! - Pull request comments
//! - CI job summaries
//! - Documentation

use crate::models::{AuditReport, Finding};
use anyhow::Result;
use chrono::Local;

/// Render report as GitHub-flavored Markdown
pub fn render(report: &AuditReport) -> Result<String> {
    let mut md = String::new();

    md.push_str("# Vulnscore Audit\n\n");
    md.push_str(&render_summary(report));
    md.push('\n');
    md.push_str(&render_findings(report));
    md.push('\n');
    md.push_str(&render_footer());

    Ok(md)
}

fn render_summary(report: &AuditReport) -> String {
    let s = &report.summary;
    let mut md = String::new();
    md.push_str("## Summary\n\n");
    md.push_str("| Severity | Count |\n");
    md.push_str("|----------|-------|\n");
    md.push_str(&format!("| Critical | {} |\n", s.critical));
    md.push_str(&format!("| High | {} |\n", s.high));
    md.push_str(&format!("| Medium | {} |\n", s.medium));
    md.push_str(&format!("| Low | {} |\n", s.low));
    md.push_str(&format!("| Informational | {} |\n", s.informational));
    md.push_str(&format!("| Unknown | {} |\n", s.unknown));
    md.push_str(&format!("| **Total** | **{}** |\n", s.total));
    md
}

fn render_findings(report: &AuditReport) -> String {
    let mut md = String::new();
    md.push_str("## Findings\n\n");

    if report.findings.is_empty() {
        md.push_str("No findings.\n");
        return md;
    }

    md.push_str("| Severity | Advisory | Package | Title | Fix |\n");
    md.push_str("|----------|----------|---------|-------|-----|\n");
    for finding in &report.findings {
        md.push_str(&render_finding_row(finding));
    }
    md
}

fn render_finding_row(finding: &Finding) -> String {
    let advisory = match &finding.url {
        Some(url) => format!("[{}]({})", finding.advisory_id, url),
        None => finding.advisory_id.clone(),
    };
    let fix = finding.patched_versions.as_deref().unwrap_or("—");
    format!(
        "| {} | {} | `{}` | {} | {} |\n",
        finding.severity, advisory, finding.package, finding.title, fix
    )
}

fn render_footer() -> String {
    format!(
        "---\n*Generated by vulnscore on {}*\n",
        Local::now().format("%Y-%m-%d %H:%M")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_report;

    #[test]
    fn test_markdown_has_summary_table() {
        let report = test_report();
        let md = render(&report).expect("render markdown");
        assert!(md.contains("| Critical | 1 |"));
        assert!(md.contains("| **Total** | **3** |"));
    }

    #[test]
    fn test_markdown_links_advisories_with_urls() {
        let report = test_report();
        let md = render(&report).expect("render markdown");
        assert!(md.contains("[GHSA-jf85-cpcp-j695](https://github.com/advisories/"));
        // No URL -> plain id, no link
        assert!(md.contains("| GHSA-none |"));
    }

    #[test]
    fn test_markdown_empty_report() {
        let mut report = test_report();
        report.findings.clear();
        report.summary = Default::default();
        let md = render(&report).expect("render markdown");
        assert!(md.contains("No findings."));
    }
}

//! CVSS severity scoring engine
//!
//! Converts a CVSS identifier — a plain numeric score, a CVSS v2 vector
//! string, or a CVSS v3.x vector string — into a qualitative severity tier.
//! The engine is pure and total: every failure mode (absent input,
//! unrecognized shape, missing or illegal metrics) folds into the `unknown`
//! tier rather than an error.

mod v2;
mod v3;

use crate::models::Severity;
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

static V3_PREFIX: OnceLock<Regex> = OnceLock::new();
static V2_SHAPE: OnceLock<Regex> = OnceLock::new();

fn v3_prefix() -> &'static Regex {
    // Any v3.x minor version is scored with the v3.1 equations
    V3_PREFIX.get_or_init(|| Regex::new(r"^CVSS:3\.\d/").expect("valid regex"))
}

fn v2_shape() -> &'static Regex {
    // The six required v2 metrics must appear in this fixed order; optional
    // metrics may follow after them. A v2 vector with reordered metrics is
    // not recognized and falls through to plain-number parsing.
    V2_SHAPE.get_or_init(|| {
        Regex::new(r"^AV:[LAN]/AC:[HML]/Au:[MSN]/C:[NPC]/I:[NPC]/A:[NPC](/|$)")
            .expect("valid regex")
    })
}

/// Classify a CVSS identifier into a severity tier.
///
/// The identifier may be a plain numeric score (`"5.5"`), a v3.x vector
/// (`"CVSS:3.1/AV:N/..."`), or a v2 vector, optionally wrapped in one pair
/// of parentheses (`"(AV:N/...)"`). Anything else — including an absent or
/// empty identifier — classifies as [`Severity::Unknown`].
pub fn severity_for(identifier: Option<&str>) -> Severity {
    Severity::from_base_score(base_score(identifier))
}

/// Resolve an identifier to a numeric base score, when one can be computed.
///
/// Vector identifiers go through the v2/v3.1 calculators (rounded up to one
/// decimal); plain numeric identifiers pass through as-is. `None` means the
/// identifier matched no recognized shape or a vector was missing required
/// metrics.
pub fn base_score(identifier: Option<&str>) -> Option<f64> {
    let raw = identifier?.trim();
    if raw.is_empty() {
        return None;
    }

    if let Some(prefix) = v3_prefix().find(raw) {
        return v3::base_score(&decode_vector(&raw[prefix.end()..]));
    }

    let candidate = raw
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .unwrap_or(raw);
    if v2_shape().is_match(candidate) {
        return v2::base_score(&decode_vector(candidate));
    }

    match raw.parse::<f64>() {
        Ok(score) if score.is_finite() => Some(score),
        _ => None,
    }
}

/// Tokenize a vector body into a metric code → value code map.
///
/// Segments without a `:` are ignored. Legality of codes is not checked
/// here; the calculators treat any unrecognized code as unavailable.
fn decode_vector(body: &str) -> HashMap<&str, &str> {
    let mut metrics = HashMap::new();
    for segment in body.split('/') {
        if let Some((code, value)) = segment.split_once(':') {
            metrics.insert(code, value);
        }
    }
    metrics
}

/// Round up to one decimal place, never down or to nearest.
///
/// Scores are pre-rounded at five decimals so binary float artifacts
/// (e.g. `8.22 * 0.85` carrying a trailing 1e-16) cannot bump the result
/// by a tenth.
fn round_up(raw: f64) -> f64 {
    let scaled = (raw * 100_000.0).round() as i64;
    if scaled % 10_000 == 0 {
        scaled as f64 / 100_000.0
    } else {
        ((scaled / 10_000) + 1) as f64 / 10.0
    }
}

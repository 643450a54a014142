//! CVSS v2 base score calculation
//!
//! Coefficient tables and equations follow the CVSS v2 guide. All six base
//! metrics are required; a missing metric or unrecognized value code makes
//! the score unavailable.

use super::round_up;
use std::collections::HashMap;

fn access_vector(value: &str) -> Option<f64> {
    match value {
        "L" => Some(0.395),
        "A" => Some(0.646),
        "N" => Some(1.0),
        _ => None,
    }
}

fn access_complexity(value: &str) -> Option<f64> {
    match value {
        "H" => Some(0.35),
        "M" => Some(0.61),
        "L" => Some(0.71),
        _ => None,
    }
}

fn authentication(value: &str) -> Option<f64> {
    match value {
        "M" => Some(0.45),
        "S" => Some(0.56),
        "N" => Some(0.704),
        _ => None,
    }
}

// Shared by C, I, and A
fn impact_weight(value: &str) -> Option<f64> {
    match value {
        "N" => Some(0.0),
        "P" => Some(0.275),
        "C" => Some(0.66),
        _ => None,
    }
}

/// Compute the v2 base score from a decoded metric map.
pub(super) fn base_score(metrics: &HashMap<&str, &str>) -> Option<f64> {
    let av = access_vector(metrics.get("AV").copied()?)?;
    let ac = access_complexity(metrics.get("AC").copied()?)?;
    let au = authentication(metrics.get("Au").copied()?)?;
    let c = impact_weight(metrics.get("C").copied()?)?;
    let i = impact_weight(metrics.get("I").copied()?)?;
    let a = impact_weight(metrics.get("A").copied()?)?;

    let impact = 10.41 * (1.0 - (1.0 - c) * (1.0 - i) * (1.0 - a));
    let exploitability = 20.0 * av * ac * au;
    let f_impact = if impact == 0.0 { 0.0 } else { 1.176 };
    let raw = (0.6 * impact + 0.4 * exploitability - 1.5) * f_impact;

    // The weighted sum is algebraically negative for some low-impact,
    // low-exploitability combinations
    Some(round_up(raw.max(0.0)))
}

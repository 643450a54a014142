//! CVSS v3.1 base score calculation
//!
//! Coefficient tables and equations follow the CVSS v3.1 specification.
//! All eight base metrics are required; a missing metric or unrecognized
//! value code makes the score unavailable.

use super::round_up;
use std::collections::HashMap;

fn attack_vector(value: &str) -> Option<f64> {
    match value {
        "N" => Some(0.85),
        "A" => Some(0.62),
        "L" => Some(0.55),
        "P" => Some(0.20),
        _ => None,
    }
}

fn attack_complexity(value: &str) -> Option<f64> {
    match value {
        "L" => Some(0.77),
        "H" => Some(0.44),
        _ => None,
    }
}

// The only table conditioned on Scope: held privileges weigh more once the
// vulnerable component's security authority is crossed.
fn privileges_required(value: &str, scope_changed: bool) -> Option<f64> {
    match (value, scope_changed) {
        ("N", _) => Some(0.85),
        ("L", false) => Some(0.62),
        ("L", true) => Some(0.68),
        ("H", false) => Some(0.27),
        ("H", true) => Some(0.50),
        _ => None,
    }
}

fn user_interaction(value: &str) -> Option<f64> {
    match value {
        "N" => Some(0.85),
        "R" => Some(0.62),
        _ => None,
    }
}

// Shared by C, I, and A
fn impact_weight(value: &str) -> Option<f64> {
    match value {
        "H" => Some(0.56),
        "L" => Some(0.22),
        "N" => Some(0.0),
        _ => None,
    }
}

/// Compute the v3.1 base score from a decoded metric map.
pub(super) fn base_score(metrics: &HashMap<&str, &str>) -> Option<f64> {
    let scope_changed = match metrics.get("S").copied() {
        Some("C") => true,
        Some("U") => false,
        _ => return None,
    };
    let av = attack_vector(metrics.get("AV").copied()?)?;
    let ac = attack_complexity(metrics.get("AC").copied()?)?;
    let pr = privileges_required(metrics.get("PR").copied()?, scope_changed)?;
    let ui = user_interaction(metrics.get("UI").copied()?)?;
    let c = impact_weight(metrics.get("C").copied()?)?;
    let i = impact_weight(metrics.get("I").copied()?)?;
    let a = impact_weight(metrics.get("A").copied()?)?;

    let iss = 1.0 - ((1.0 - c) * (1.0 - i) * (1.0 - a));
    let impact = if scope_changed {
        7.52 * (iss - 0.029) - 3.25 * (iss - 0.02).powi(15)
    } else {
        6.42 * iss
    };
    if impact <= 0.0 {
        return Some(0.0);
    }

    let exploitability = 8.22 * av * ac * pr * ui;
    let score = if scope_changed {
        (1.08 * (impact + exploitability)).min(10.0)
    } else {
        (impact + exploitability).min(10.0)
    };
    Some(round_up(score))
}

#[cfg(test)]
mod tests {
    use super::super::decode_vector;
    use super::*;

    fn score(body: &str) -> Option<f64> {
        base_score(&decode_vector(body))
    }

    const IMPACTS: [&str; 3] = ["H", "L", "N"];

    #[test]
    fn test_known_vectors() {
        // Scores cross-checked against the FIRST.org v3.1 calculator
        assert_eq!(score("AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H"), Some(9.8));
        assert_eq!(score("AV:N/AC:L/PR:N/UI:N/S:C/C:H/I:H/A:H"), Some(10.0));
        assert_eq!(score("AV:L/AC:H/PR:H/UI:R/S:U/C:L/I:L/A:N"), Some(2.9));
        assert_eq!(score("AV:N/AC:L/PR:L/UI:N/S:C/C:L/I:L/A:N"), Some(6.4));
    }

    #[test]
    fn test_zero_impact_scores_zero() {
        for av in ["N", "A", "L", "P"] {
            let body = format!("AV:{av}/AC:L/PR:N/UI:N/S:U/C:N/I:N/A:N");
            assert_eq!(score(&body), Some(0.0));
        }
    }

    #[test]
    fn test_scope_conditions_privileges_weight() {
        // Same metrics apart from Scope; the changed-scope PR:L weight (0.68
        // vs 0.62) and the 1.08 multiplier must both apply
        let unchanged = score("AV:N/AC:L/PR:L/UI:N/S:U/C:L/I:L/A:N").unwrap();
        let changed = score("AV:N/AC:L/PR:L/UI:N/S:C/C:L/I:L/A:N").unwrap();
        assert!(changed > unchanged);
    }

    #[test]
    fn test_missing_metric_is_unavailable() {
        assert_eq!(score("AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H"), None);
        assert_eq!(score(""), None);
    }

    #[test]
    fn test_unrecognized_value_is_unavailable() {
        assert_eq!(score("AV:N/AC:L/PR:N/UI:N/S:X/C:H/I:H/A:H"), None);
        assert_eq!(score("AV:N/AC:M/PR:N/UI:N/S:U/C:H/I:H/A:H"), None);
    }

    #[test]
    fn test_all_vectors_in_range_with_one_decimal() {
        for av in ["N", "A", "L", "P"] {
            for ac in ["L", "H"] {
                for pr in ["N", "L", "H"] {
                    for ui in ["N", "R"] {
                        for s in ["U", "C"] {
                            for c in IMPACTS {
                                for i in IMPACTS {
                                    for a in IMPACTS {
                                        let body = format!(
                                            "AV:{av}/AC:{ac}/PR:{pr}/UI:{ui}/S:{s}/C:{c}/I:{i}/A:{a}"
                                        );
                                        let score = score(&body).expect("complete vector scores");
                                        assert!(
                                            (0.0..=10.0).contains(&score),
                                            "{body} scored {score}"
                                        );
                                        let tenths = score * 10.0;
                                        assert!(
                                            (tenths - tenths.round()).abs() < 1e-9,
                                            "{body} score {score} is not one-decimal"
                                        );
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_raising_an_impact_metric_never_lowers_the_score() {
        for pr in ["N", "L", "H"] {
            for s in ["U", "C"] {
                for i in IMPACTS {
                    for a in IMPACTS {
                        let low = score(&format!("AV:N/AC:L/PR:{pr}/UI:N/S:{s}/C:N/I:{i}/A:{a}"));
                        let mid = score(&format!("AV:N/AC:L/PR:{pr}/UI:N/S:{s}/C:L/I:{i}/A:{a}"));
                        let high = score(&format!("AV:N/AC:L/PR:{pr}/UI:N/S:{s}/C:H/I:{i}/A:{a}"));
                        assert!(low <= mid && mid <= high);
                    }
                }
            }
        }
    }

    #[test]
    fn test_widening_attack_vector_never_lowers_the_score() {
        for ac in ["L", "H"] {
            for ui in ["N", "R"] {
                for s in ["U", "C"] {
                    let ladder: Vec<f64> = ["P", "L", "A", "N"]
                        .iter()
                        .map(|av| {
                            score(&format!("AV:{av}/AC:{ac}/PR:L/UI:{ui}/S:{s}/C:L/I:L/A:L"))
                                .unwrap()
                        })
                        .collect();
                    assert!(ladder.windows(2).all(|w| w[0] <= w[1]), "{ladder:?}");
                }
            }
        }
    }
}

//! Defensive parsing of oracle risk output
//!
//! Oracles asked for strict JSON still return prose preambles, fenced code
//! blocks, and trailing commentary. Parsing is tiered: direct parse, then
//! fenced code blocks, then a heuristic slice between the first `{` and the
//! last `}`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

use crate::model::{RiskRecord, Severity};

/// Fenced ```json ... ``` or ``` ... ``` blocks
static FENCED_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?si)```(?:json)?\n(.*?)\n```").expect("invalid fence pattern"));

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawRisk {
    clause: String,
    issue: String,
    severity: String,
    #[serde(rename = "type")]
    risk_type: String,
    worst_case: String,
    suggestion: String,
}

/// Parse one candidate JSON string.
///
/// Returns `Some` whenever the candidate is valid JSON, mirroring the tiering
/// contract: a well-formed object without risks is a definitive (empty)
/// answer, not a reason to try the next tier. Non-object JSON yields an empty
/// list.
fn parse_candidate(candidate: &str) -> Option<Vec<RawRisk>> {
    let value: Value = serde_json::from_str(candidate).ok()?;
    let risks = match value.get("risks").and_then(Value::as_array) {
        Some(items) => items
            .iter()
            .filter_map(|item| serde_json::from_value(item.clone()).ok())
            .collect(),
        None => Vec::new(),
    };
    Some(risks)
}

fn parse_json_flex(raw: &str) -> Vec<RawRisk> {
    // Tier 1: the whole response is JSON
    if let Some(risks) = parse_candidate(raw) {
        return risks;
    }

    // Tier 2: fenced code blocks
    for capture in FENCED_BLOCK.captures_iter(raw) {
        if let Some(risks) = parse_candidate(&capture[1]) {
            return risks;
        }
    }

    // Tier 3: heuristic slice between the first `{` and the last `}`
    if let (Some(start), Some(end)) = (raw.find('{'), raw.rfind('}')) {
        if end > start {
            if let Some(risks) = parse_candidate(&raw[start..=end]) {
                return risks;
            }
        }
    }

    Vec::new()
}

/// Parse an oracle response into normalized risk records.
///
/// Severity values outside the fixed enum are coerced to medium.
pub fn parse_risks(raw: &str) -> Vec<RiskRecord> {
    parse_json_flex(raw)
        .into_iter()
        .map(|r| RiskRecord {
            clause: r.clause,
            issue: r.issue,
            severity: Severity::normalize(&r.severity),
            risk_type: r.risk_type,
            worst_case: r.worst_case,
            suggestion: r.suggestion,
        })
        .collect()
}

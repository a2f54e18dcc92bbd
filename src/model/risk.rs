use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Risk severity. Always serialized as the lowercase English token regardless
/// of the analysis target language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// Normalize a free-text severity value from the oracle.
    ///
    /// Anything outside the fixed set (missing, empty, "URGENT", localized
    /// words) is coerced to `Medium`.
    pub fn normalize(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "low" => Severity::Low,
            "high" => Severity::High,
            _ => Severity::Medium,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single clause-level risk extracted from a document.
///
/// Free-text fields are localized to the requested target language; `severity`
/// is always the English token. Records are immutable once constructed.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RiskRecord {
    /// Short quote or heading from the relevant clause
    pub clause: String,
    /// One-sentence explanation of the potential problem
    pub issue: String,
    pub severity: Severity,
    /// Single short risk category (IP, Liability, Payment, ...)
    #[serde(rename = "type")]
    pub risk_type: String,
    /// Short practical worst-case outcome
    pub worst_case: String,
    /// Short actionable tip
    pub suggestion: String,
}

/// Severity and type counts derived from a risk list, for charting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RiskStats {
    pub severity: BTreeMap<String, usize>,
    #[serde(rename = "type")]
    pub risk_type: BTreeMap<String, usize>,
}

/// Compute severity/type counts for a risk list.
///
/// All three severity buckets are always present. Empty or whitespace-only
/// types fall into "Uncategorized". Pure and order-independent.
pub fn compute_risk_stats(risks: &[RiskRecord]) -> RiskStats {
    let mut severity: BTreeMap<String, usize> = BTreeMap::new();
    for sev in ["low", "medium", "high"] {
        severity.insert(sev.to_string(), 0);
    }
    let mut risk_type: BTreeMap<String, usize> = BTreeMap::new();

    for risk in risks {
        *severity.entry(risk.severity.as_str().to_string()).or_insert(0) += 1;
        let rtype = risk.risk_type.trim();
        let rtype = if rtype.is_empty() { "Uncategorized" } else { rtype };
        *risk_type.entry(rtype.to_string()).or_insert(0) += 1;
    }

    RiskStats { severity, risk_type }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn risk(severity: Severity, rtype: &str) -> RiskRecord {
        RiskRecord {
            clause: "Clause 4.2".to_string(),
            issue: "Unlimited liability".to_string(),
            severity,
            risk_type: rtype.to_string(),
            worst_case: "Pay all damages".to_string(),
            suggestion: "Negotiate a cap".to_string(),
        }
    }

    #[test]
    fn normalize_coerces_unknown_to_medium() {
        assert_eq!(Severity::normalize("URGENT"), Severity::Medium);
        assert_eq!(Severity::normalize(""), Severity::Medium);
        assert_eq!(Severity::normalize(" HIGH "), Severity::High);
        assert_eq!(Severity::normalize("Low"), Severity::Low);
    }

    #[test]
    fn stats_count_all_buckets() {
        let risks = vec![
            risk(Severity::High, "Liability"),
            risk(Severity::High, "Payment"),
            risk(Severity::Low, "Liability"),
        ];
        let stats = compute_risk_stats(&risks);
        assert_eq!(stats.severity["high"], 2);
        assert_eq!(stats.severity["low"], 1);
        assert_eq!(stats.severity["medium"], 0);
        assert_eq!(stats.risk_type["Liability"], 2);
        assert_eq!(stats.risk_type["Payment"], 1);
    }

    #[test]
    fn stats_are_order_independent() {
        let mut risks = vec![
            risk(Severity::High, "Liability"),
            risk(Severity::Medium, ""),
            risk(Severity::Low, "IP"),
        ];
        let forward = compute_risk_stats(&risks);
        risks.reverse();
        let backward = compute_risk_stats(&risks);
        assert_eq!(forward, backward);
        assert_eq!(forward.risk_type["Uncategorized"], 1);
    }
}

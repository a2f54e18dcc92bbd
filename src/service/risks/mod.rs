//! Contractual risk extraction service
//!
//! Prompts the oracle for a structured risk list and parses the response
//! defensively. An empty parse triggers one bounded retry with a truncated
//! document and a sterner JSON-only instruction; total failure yields an
//! empty list, never an error to the caller.

use std::sync::Arc;

use crate::model::RiskRecord;
use crate::service::llm::{GenerativeOracle, Sampling};
use crate::service::risks::prompts::{build_retry_prompt, build_risk_prompt};
use crate::service::snippet;

pub mod parse;
pub mod prompts;

pub use parse::parse_risks;

/// Bounded retry policy applied when the first response parses to nothing.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Maximum retries after the initial attempt
    pub max_retries: usize,
    /// Document truncation applied before each retry
    pub truncate_chars: usize,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 1,
            truncate_chars: 15_000,
        }
    }
}

pub struct RiskAnalysisService {
    oracle: Arc<dyn GenerativeOracle>,
    retry: RetryPolicy,
}

impl RiskAnalysisService {
    pub fn new(oracle: Arc<dyn GenerativeOracle>) -> Self {
        Self {
            oracle,
            retry: RetryPolicy::default(),
        }
    }

    /// Extract clause-level risks from document text.
    ///
    /// Free-text fields come back in `target_language`; severity is always the
    /// English token. Oracle failure or unparseable output yields an empty
    /// list.
    pub async fn analyze_risks(&self, text: &str, target_language: &str) -> Vec<RiskRecord> {
        let prompt = build_risk_prompt(text, target_language);

        let raw = match self.oracle.generate(&prompt, Sampling::Creative).await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(error = %e, "Risk analysis oracle call failed");
                return Vec::new();
            }
        };

        let mut risks = parse_risks(&raw);

        let mut attempt = 0;
        while risks.is_empty() && attempt < self.retry.max_retries {
            attempt += 1;
            tracing::debug!(attempt = attempt, "No risks parsed, retrying with truncated document");
            let short_doc = snippet(text, self.retry.truncate_chars);
            let retry_prompt = build_retry_prompt(short_doc, target_language);
            match self.oracle.generate(&retry_prompt, Sampling::Creative).await {
                Ok(raw) => risks = parse_risks(&raw),
                Err(e) => {
                    tracing::warn!(attempt = attempt, error = %e, "Risk analysis retry failed");
                }
            }
        }

        tracing::info!(
            risk_count = risks.len(),
            retries = attempt,
            language = %target_language,
            "Risk analysis complete"
        );

        risks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Severity;
    use crate::service::llm::test_support::ScriptedOracle;

    const RISK_JSON: &str = r#"{"risks":[{"clause":"Clause 2","issue":"Auto-renewal","severity":"medium","type":"Termination","worst_case":"Locked in for a year","suggestion":"Negotiate opt-out notice"}]}"#;

    #[tokio::test]
    async fn parses_first_response() {
        let service = RiskAnalysisService::new(Arc::new(ScriptedOracle::replying(RISK_JSON)));
        let risks = service.analyze_risks("some contract", "English").await;
        assert_eq!(risks.len(), 1);
        assert_eq!(risks[0].severity, Severity::Medium);
    }

    #[tokio::test]
    async fn retries_once_on_empty_parse() {
        let service = RiskAnalysisService::new(Arc::new(ScriptedOracle::new(vec![
            Ok("no json here".to_string()),
            Ok(RISK_JSON.to_string()),
        ])));
        let risks = service.analyze_risks("some contract", "English").await;
        assert_eq!(risks.len(), 1);
    }

    #[tokio::test]
    async fn oracle_failure_yields_empty_list() {
        let service = RiskAnalysisService::new(Arc::new(ScriptedOracle::failing()));
        let risks = service.analyze_risks("some contract", "English").await;
        assert!(risks.is_empty());
    }

    #[tokio::test]
    async fn retry_failure_still_yields_empty_list() {
        let service = RiskAnalysisService::new(Arc::new(ScriptedOracle::new(vec![Ok(
            "not json".to_string(),
        )])));
        // second call hits an exhausted script and errors
        let risks = service.analyze_risks("some contract", "English").await;
        assert!(risks.is_empty());
    }
}

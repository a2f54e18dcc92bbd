//! Full-document analysis orchestration
//!
//! The summary and the risk extraction are independent oracle calls with no
//! data dependency, so they are dispatched concurrently and awaited together;
//! both are oracle-latency-dominated, which roughly halves end-to-end time.

use std::sync::Arc;

use crate::model::{compute_risk_stats, RiskRecord, RiskStats};
use crate::service::risks::RiskAnalysisService;
use crate::service::summary::SummaryService;

/// Combined result of one document analysis.
#[derive(Debug, Clone)]
pub struct DocumentAnalysis {
    pub summary_html: String,
    pub risks: Vec<RiskRecord>,
    pub stats: RiskStats,
}

pub struct DocumentAnalysisService {
    summary: Arc<SummaryService>,
    risks: Arc<RiskAnalysisService>,
}

impl DocumentAnalysisService {
    pub fn new(summary: Arc<SummaryService>, risks: Arc<RiskAnalysisService>) -> Self {
        Self { summary, risks }
    }

    /// Summarize and extract risks concurrently, then derive risk statistics.
    pub async fn analyze_document(&self, text: &str, target_language: &str) -> DocumentAnalysis {
        let start_time = std::time::Instant::now();

        let (summary_html, risks) = tokio::join!(
            self.summary.summarize_text(text, target_language),
            self.risks.analyze_risks(text, target_language)
        );

        let stats = compute_risk_stats(&risks);

        tracing::info!(
            elapsed_ms = start_time.elapsed().as_millis(),
            risk_count = risks.len(),
            language = %target_language,
            "Document analysis complete"
        );

        DocumentAnalysis {
            summary_html,
            risks,
            stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Severity;
    use crate::service::llm::test_support::ScriptedOracle;

    #[tokio::test]
    async fn analysis_combines_summary_and_risks() {
        // One shared script cannot serve two concurrent consumers
        // deterministically, so each service gets its own oracle.
        let summary = Arc::new(SummaryService::new(Arc::new(ScriptedOracle::replying(
            "A simple lease.",
        ))));
        let risks = Arc::new(RiskAnalysisService::new(Arc::new(ScriptedOracle::replying(
            r#"{"risks":[{"clause":"c","issue":"i","severity":"high","type":"Liability","worst_case":"w","suggestion":"s"}]}"#,
        ))));
        let service = DocumentAnalysisService::new(summary, risks);

        let analysis = service.analyze_document("lease text", "English").await;
        assert!(analysis.summary_html.contains("A simple lease."));
        assert_eq!(analysis.risks.len(), 1);
        assert_eq!(analysis.risks[0].severity, Severity::High);
        assert_eq!(analysis.stats.severity["high"], 1);
    }

    #[tokio::test]
    async fn both_failures_degrade_independently() {
        let summary = Arc::new(SummaryService::new(Arc::new(ScriptedOracle::failing())));
        let risks = Arc::new(RiskAnalysisService::new(Arc::new(ScriptedOracle::failing())));
        let service = DocumentAnalysisService::new(summary, risks);

        let analysis = service.analyze_document("lease text", "English").await;
        assert!(analysis.risks.is_empty());
        assert!(!analysis.summary_html.is_empty());
        assert_eq!(analysis.stats.severity["medium"], 0);
    }
}

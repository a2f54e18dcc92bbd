//! Document authenticity engine
//!
//! Orchestrates the classifier, the lexical precheck, the optional logo
//! check, and the oracle's forensic assessment, then fuses them into a
//! calibrated verdict. Any oracle or parsing failure degrades to the
//! conservative SUSPICIOUS verdict anchored on the precheck score.

use std::sync::Arc;

use serde::Deserialize;

use crate::model::{
    AuthenticityReport, FusionPolicy, LogoAnalysis, ScoreBreakdown, Verdict,
};
use crate::service::classifier::DocumentTypeClassifier;
use crate::service::llm::{GenerativeOracle, Sampling};
use crate::service::logos::LogoAuthenticityService;
use crate::service::precheck::run_prechecks;
use crate::service::snippet;

pub mod fusion;
pub mod prompts;

pub use fusion::{fuse, FusedVerdict, OracleAssessment};

/// Snippet length for the forensic prompt
const FORENSIC_SNIPPET_CHARS: usize = 15_000;

const FALLBACK_SUMMARY: &str =
    "The automated analysis could not be completed, so proceed with caution.";

pub struct AuthenticityService {
    oracle: Arc<dyn GenerativeOracle>,
    classifier: DocumentTypeClassifier,
    logos: Option<Arc<LogoAuthenticityService>>,
    policy: FusionPolicy,
}

impl AuthenticityService {
    pub fn new(
        oracle: Arc<dyn GenerativeOracle>,
        logos: Option<Arc<LogoAuthenticityService>>,
        policy: FusionPolicy,
    ) -> Self {
        let classifier = DocumentTypeClassifier::new(Arc::clone(&oracle));
        Self {
            oracle,
            classifier,
            logos,
            policy,
        }
    }

    /// Run the full multi-stage authenticity check.
    ///
    /// `file` carries the original document bytes and MIME type when the
    /// caller has them; without binary content the logo stage is skipped.
    pub async fn check_document_authenticity(
        &self,
        text: &str,
        file: Option<(&[u8], &str)>,
    ) -> AuthenticityReport {
        // Stage 1: document type
        let doc_type = self.classifier.detect_document_type(text).await;

        // Stage 2: deterministic precheck
        let precheck_score = run_prechecks(text);

        // Stage 3: logo analysis when binary content is available
        let logo_analysis = match (file, &self.logos) {
            (Some((bytes, mime)), Some(logos)) => {
                Some(logos.check_document_logos(bytes, mime).await)
            }
            (Some(_), None) => Some(LogoAnalysis::unavailable()),
            (None, _) => None,
        };

        // The logo signal only enters fusion when at least one logo was
        // actually detected
        let logo_score = logo_analysis
            .as_ref()
            .filter(|l| l.success && l.total_logos_detected > 0)
            .map(|l| l.overall_logo_authenticity_score);

        tracing::debug!(
            document_type = %doc_type,
            precheck_score = precheck_score,
            logos_detected = logo_analysis.as_ref().map(|l| l.total_logos_detected),
            "Authenticity pipeline signals collected"
        );

        // Stages 4-5: forensic oracle assessment and fusion
        let prompt = prompts::build_forensic_prompt(
            snippet(text, FORENSIC_SNIPPET_CHARS),
            doc_type,
            precheck_score,
            logo_analysis.as_ref(),
        );

        let assessment = match self.oracle.generate(&prompt, Sampling::Deterministic).await {
            Ok(raw) => parse_assessment(&raw),
            Err(e) => {
                tracing::warn!(error = %e, "Forensic oracle call failed");
                None
            }
        };

        match assessment {
            Some(assessment) => {
                let fused = fuse(&self.policy, &assessment, precheck_score, logo_score);
                tracing::info!(
                    document_type = %doc_type,
                    verdict = ?fused.verdict,
                    confidence = fused.confidence_score,
                    "Authenticity check complete"
                );
                AuthenticityReport {
                    document_type: doc_type,
                    verdict: fused.verdict,
                    summary: assessment.summary.clone(),
                    confidence_score: fused.confidence_score,
                    score_breakdown: ScoreBreakdown {
                        precheck_score,
                        authenticity_score: assessment.authenticity_score,
                        consistency_score: assessment.consistency_score,
                        credibility_score: assessment.credibility_score,
                    },
                    logo_analysis,
                }
            }
            // Stage 6: conservative fallback anchored on the one deterministic
            // signal that is always available
            None => AuthenticityReport {
                document_type: doc_type,
                verdict: Verdict::Suspicious,
                summary: FALLBACK_SUMMARY.to_string(),
                confidence_score: precheck_score,
                score_breakdown: ScoreBreakdown {
                    precheck_score,
                    authenticity_score: 50,
                    consistency_score: 50,
                    credibility_score: 50,
                },
                logo_analysis,
            },
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawBreakdown {
    authenticity_score: Option<f64>,
    consistency_score: Option<f64>,
    credibility_score: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawAssessment {
    verdict: Option<String>,
    summary: Option<String>,
    confidence_score: Option<f64>,
    score_breakdown: Option<RawBreakdown>,
}

fn clamp_score(value: Option<f64>) -> u8 {
    value.unwrap_or(50.0).clamp(0.0, 100.0) as u8
}

/// Parse the oracle's forensic JSON, tolerating fenced blocks and surrounding
/// prose. Missing fields default to the neutral middle; `None` means nothing
/// parseable came back at all.
fn parse_assessment(raw: &str) -> Option<OracleAssessment> {
    let candidate = extract_json_object(raw)?;
    let parsed: RawAssessment = serde_json::from_str(candidate).ok()?;

    let verdict = match parsed.verdict.as_deref().map(str::trim) {
        Some(v) if v.eq_ignore_ascii_case("REAL") => Verdict::Real,
        Some(v) if v.eq_ignore_ascii_case("FAKE") => Verdict::Fake,
        _ => Verdict::Suspicious,
    };

    let breakdown = parsed.score_breakdown.unwrap_or_default();

    Some(OracleAssessment {
        verdict,
        summary: parsed
            .summary
            .unwrap_or_else(|| "Analysis completed with hybrid verification system.".to_string()),
        confidence_score: parsed.confidence_score.unwrap_or(50.0).clamp(0.0, 100.0),
        authenticity_score: clamp_score(breakdown.authenticity_score),
        consistency_score: clamp_score(breakdown.consistency_score),
        credibility_score: clamp_score(breakdown.credibility_score),
    })
}

/// Slice the first JSON object out of a possibly noisy response.
fn extract_json_object(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.starts_with('{') && trimmed.ends_with('}') {
        return Some(trimmed);
    }
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    (end > start).then(|| &raw[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DocumentType;
    use crate::service::llm::test_support::ScriptedOracle;

    fn forensic_json(verdict: &str, confidence: u8, sub: u8) -> String {
        format!(
            r#"{{"verdict":"{}","summary":"Looks consistent.","confidence_score":{},"score_breakdown":{{"authenticity_score":{sub},"consistency_score":{sub},"credibility_score":{sub}}}}}"#,
            verdict, confidence
        )
    }

    fn service_with(responses: Vec<Result<String, String>>) -> AuthenticityService {
        AuthenticityService::new(
            Arc::new(ScriptedOracle::new(responses)),
            None,
            FusionPolicy::default(),
        )
    }

    /// Legal-looking text scoring well on prechecks
    fn strong_text() -> String {
        let mut text = String::from(
            "This agreement, dated 2023, is made between the parties. \
             Witness the signature of each undersigned. Whereas the terms below apply. ",
        );
        for _ in 0..160 {
            text.push_str("clause ");
        }
        text
    }

    #[tokio::test]
    async fn real_verdict_with_strong_signals_stays_real() {
        // first reply: classifier; second reply: forensic assessment
        let service = service_with(vec![
            Ok("Contractual Documents".to_string()),
            Ok(forensic_json("REAL", 85, 85)),
        ]);
        let report = service.check_document_authenticity(&strong_text(), None).await;
        assert_eq!(report.document_type, DocumentType::Contractual);
        assert_eq!(report.verdict, Verdict::Real);
        assert_eq!(report.score_breakdown.precheck_score, 100);
        // 0.7 * 85 + 0.3 * 100 = 89.5 -> 89
        assert_eq!(report.confidence_score, 89);
        assert!(report.logo_analysis.is_none());
    }

    #[tokio::test]
    async fn fake_verdict_is_capped_but_never_overridden() {
        let service = service_with(vec![
            Ok("Other".to_string()),
            Ok(forensic_json("FAKE", 90, 90)),
        ]);
        // placeholder-only text prechecks to 0, below the stricter threshold
        let report = service.check_document_authenticity("lorem ipsum", None).await;
        assert_eq!(report.verdict, Verdict::Fake);
        assert!(report.confidence_score <= 25);
    }

    #[tokio::test]
    async fn oracle_failure_degrades_to_suspicious_fallback() {
        let service = service_with(vec![]);
        let text = strong_text();
        let report = service.check_document_authenticity(&text, None).await;
        assert_eq!(report.document_type, DocumentType::OtherLegal);
        assert_eq!(report.verdict, Verdict::Suspicious);
        assert_eq!(report.confidence_score, 100); // precheck anchors confidence
        assert_eq!(report.score_breakdown.authenticity_score, 50);
        assert_eq!(report.summary, FALLBACK_SUMMARY);
    }

    #[tokio::test]
    async fn malformed_forensic_json_degrades_to_fallback() {
        let service = service_with(vec![
            Ok("Contractual Documents".to_string()),
            Ok("I think this document is probably fine.".to_string()),
        ]);
        let report = service.check_document_authenticity("lorem ipsum", None).await;
        assert_eq!(report.verdict, Verdict::Suspicious);
        assert_eq!(report.confidence_score, 0);
    }

    #[test]
    fn assessment_parses_fenced_response() {
        let raw = format!("```json\n{}\n```", forensic_json("SUSPICIOUS", 60, 55));
        let parsed = parse_assessment(&raw).unwrap();
        assert_eq!(parsed.verdict, Verdict::Suspicious);
        assert_eq!(parsed.authenticity_score, 55);
    }

    #[test]
    fn assessment_defaults_missing_fields_to_neutral() {
        let parsed = parse_assessment(r#"{"verdict":"REAL"}"#).unwrap();
        assert_eq!(parsed.verdict, Verdict::Real);
        assert_eq!(parsed.confidence_score, 50.0);
        assert_eq!(parsed.consistency_score, 50);
    }
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::DocumentType;

/// Authenticity verdict classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Real,
    Suspicious,
    Fake,
}

/// Per-signal scores backing an authenticity verdict.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct ScoreBreakdown {
    pub precheck_score: u8,
    pub authenticity_score: u8,
    pub consistency_score: u8,
    pub credibility_score: u8,
}

/// A single detected logo, scored against the known-brand table.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LogoFinding {
    /// Label reported by the vision oracle
    pub name: String,
    /// Matched brand from the reference table, if any
    pub matched_brand: Option<String>,
    /// Authenticity score in [0,100]
    pub score: u8,
    /// Vision detection confidence in [0,1]
    pub detection_confidence: f32,
    pub risk_factors: Vec<String>,
}

/// Result of the logo authenticity check over a document's embedded images.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LogoAnalysis {
    /// False when image extraction or logo detection failed; the rest of the
    /// fields then hold neutral defaults
    pub success: bool,
    pub total_logos_detected: usize,
    pub authentic_logos: Vec<LogoFinding>,
    pub suspicious_logos: Vec<LogoFinding>,
    pub unknown_logos: Vec<LogoFinding>,
    /// Mean of per-logo scores; 50 when no logos were detected
    pub overall_logo_authenticity_score: u8,
    pub logo_risk_factors: Vec<String>,
}

impl LogoAnalysis {
    /// Neutral result used when extraction or detection fails, and when a
    /// document carries no images at all.
    pub fn unavailable() -> Self {
        Self {
            success: false,
            total_logos_detected: 0,
            authentic_logos: Vec::new(),
            suspicious_logos: Vec::new(),
            unknown_logos: Vec::new(),
            overall_logo_authenticity_score: 50,
            logo_risk_factors: Vec::new(),
        }
    }
}

/// Final fused authenticity assessment for one document.
///
/// Constructed once per authenticity check and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthenticityReport {
    pub document_type: DocumentType,
    pub verdict: Verdict,
    pub summary: String,
    pub confidence_score: u8,
    pub score_breakdown: ScoreBreakdown,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_analysis: Option<LogoAnalysis>,
}

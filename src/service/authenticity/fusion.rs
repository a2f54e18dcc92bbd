//! Verdict and confidence fusion
//!
//! Combines the oracle's forensic assessment with the deterministic precheck
//! score and the optional logo signal. The combination is deliberately
//! asymmetric: a FAKE call from the oracle is never overridden, only capped,
//! while a REAL call needs two independent low signals before it is
//! downgraded.

use crate::model::{FusionPolicy, Verdict};

/// Forensic assessment as returned by the oracle, before fusion.
#[derive(Debug, Clone)]
pub struct OracleAssessment {
    pub verdict: Verdict,
    pub summary: String,
    pub confidence_score: f64,
    pub authenticity_score: u8,
    pub consistency_score: u8,
    pub credibility_score: u8,
}

/// Fused verdict with calibrated confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FusedVerdict {
    pub verdict: Verdict,
    pub confidence_score: u8,
}

/// Fuse the oracle assessment with the precheck score and optional logo
/// authenticity score.
///
/// `logo_score` must only be `Some` when at least one logo was actually
/// detected; an absent or failed logo check contributes nothing.
pub fn fuse(
    policy: &FusionPolicy,
    assessment: &OracleAssessment,
    precheck_score: u8,
    logo_score: Option<u8>,
) -> FusedVerdict {
    // Average of the oracle's own sub-scores. Capping confidence at this
    // average prevents an oracle from reporting high confidence its sub-scores
    // do not support.
    let avg_llm_score = (assessment.authenticity_score as f64
        + assessment.consistency_score as f64
        + assessment.credibility_score as f64)
        / 3.0;
    let conservative_llm_score = assessment.confidence_score.min(avg_llm_score);

    let final_llm_score = match logo_score {
        Some(logo) => {
            conservative_llm_score * policy.logo_blend_llm_weight
                + logo as f64 * (1.0 - policy.logo_blend_llm_weight)
        }
        None => conservative_llm_score,
    };

    let precheck = precheck_score as f64;

    let (verdict, confidence) = match assessment.verdict {
        Verdict::Fake => {
            // A very low precheck confirms the fake; otherwise cap less
            // aggressively. The FAKE verdict itself is never overridden.
            let cap = if precheck_score < policy.fake_precheck_threshold {
                policy.fake_cap_low_precheck
            } else {
                policy.fake_cap
            };
            (Verdict::Fake, final_llm_score.min(cap as f64))
        }
        Verdict::Real => {
            let confidence = final_llm_score * policy.real_llm_weight
                + precheck * (1.0 - policy.real_llm_weight);
            // Downgrade only when both independent signals are low
            let verdict = if precheck_score < policy.real_downgrade_precheck_threshold
                && final_llm_score < policy.real_downgrade_llm_threshold
            {
                Verdict::Suspicious
            } else {
                Verdict::Real
            };
            (verdict, confidence)
        }
        Verdict::Suspicious => {
            let confidence = final_llm_score * policy.suspicious_llm_weight
                + precheck * (1.0 - policy.suspicious_llm_weight);
            (Verdict::Suspicious, confidence)
        }
    };

    FusedVerdict {
        verdict,
        confidence_score: confidence.clamp(0.0, 100.0) as u8,
    }
}

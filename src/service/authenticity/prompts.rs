//! Forensic prompt construction for the authenticity engine

use crate::model::{DocumentType, LogoAnalysis};

/// Build the forensic examination prompt.
///
/// Embeds the detected document type, its type-specific expectations, the
/// deterministic precheck score, and a digest of the logo analysis when one
/// was performed.
pub fn build_forensic_prompt(
    text_snippet: &str,
    doc_type: DocumentType,
    precheck_score: u8,
    logo_analysis: Option<&LogoAnalysis>,
) -> String {
    let logo_digest = match logo_analysis {
        Some(analysis) if analysis.success && analysis.total_logos_detected > 0 => format!(
            "\nLOGO ANALYSIS: {} logo(s) detected ({} authentic, {} suspicious, {} unknown), overall logo authenticity score {}/100.",
            analysis.total_logos_detected,
            analysis.authentic_logos.len(),
            analysis.suspicious_logos.len(),
            analysis.unknown_logos.len(),
            analysis.overall_logo_authenticity_score
        ),
        _ => String::new(),
    };

    format!(
        r#"You are a highly specialized forensic document examiner and authenticity classifier.
Your goal is to determine whether the given document is **REAL (authentic)**, **SUSPICIOUS (partially authentic)**, or **FAKE (fabricated or AI-generated)** based on forensic, linguistic, and structural cues.

DOCUMENT TYPE: {doc_type}
TYPE-SPECIFIC EXPECTATIONS: {expectation}
RULE-BASED PRECHECK SCORE: {precheck_score}/100{logo_digest}

Carefully analyze the document according to the following six forensic indicators:
1. **Consistency & Coherence** - Logical flow, factual consistency, natural transitions, and stable tone.
2. **Language Authenticity** - Domain-appropriate vocabulary and realistic human phrasing; detect templated or AI-style wording.
3. **Formatting & Metadata Patterns** - Presence of headers, sections, stamps, references, or official formatting.
4. **Content Credibility** - Specific, verifiable details (names, locations, laws, institutions) vs. vague placeholders.
5. **Forgery or Manipulation Signs** - Contradictions, unrealistic claims, missing mandatory clauses, or irregular spacing.
6. **Purpose Alignment** - Whether the tone, structure, and language match the document's claimed purpose ({doc_type}).

Now classify the document strictly as follows:

- **FAKE** (Red):
  - Over 3 indicators show major flaws or contradictions.
  - The text feels AI-generated, generic, or inconsistent with real-world documents.
  - Contains fabricated data, placeholders, or implausible claims.
  - Confidence typically **below 45**.

- **SUSPICIOUS** (Yellow):
  - 1-3 indicators show moderate issues.
  - Some parts seem realistic but others look incomplete, inconsistent, or edited.
  - Confidence typically **between 45-75**.

- **REAL** (Green):
  - No major flaws in any indicator.
  - Language, structure, and tone are coherent, credible, and realistic.
  - Confidence typically **above 75**.

Important:
Be **balanced** - consider both positive and negative indicators. Only mark as "FAKE" if there are clear signs of fabrication or AI generation. Mark as "SUSPICIOUS" for incomplete or questionable documents. Mark as "REAL" for well-structured, credible documents.

Return a STRICT JSON object using this format (no markdown, no extra text):

{{
  "verdict": "REAL | SUSPICIOUS | FAKE",
  "summary": "A concise 1-3 sentence explanation of your reasoning.",
  "confidence_score": <integer 0-100>,
  "score_breakdown": {{
    "authenticity_score": <0-100>,
    "consistency_score": <0-100>,
    "credibility_score": <0-100>
  }}
}}

---
DOCUMENT:
{text_snippet}
---"#,
        doc_type = doc_type.label(),
        expectation = doc_type.expectation(),
        precheck_score = precheck_score,
        logo_digest = logo_digest,
        text_snippet = text_snippet
    )
}

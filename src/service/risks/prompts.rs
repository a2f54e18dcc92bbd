//! Prompts for contractual risk extraction

/// Build the primary risk-extraction prompt.
///
/// The oracle is instructed to return strict JSON in the risk schema with all
/// free-text fields in the target language and severity constrained to the
/// fixed English enum.
pub fn build_risk_prompt(text: &str, target_language: &str) -> String {
    format!(
        r#"You are a senior contract analyst. Read the document and extract a concise list of potential risks.
Return STRICT JSON ONLY, no markdown, no commentary, matching this schema exactly:
{{
"risks": [
{{
  "clause": "Short quote or heading from the relevant clause.",
  "issue": "A brief, one-sentence explanation of the potential problem.",
  "severity": "low|medium|high",
  "type": "A single category like IP, Liability, Payment, Termination, etc.",
  "worst_case": "A very short, practical worst-case outcome (max 10 words).",
  "suggestion": "A short, actionable tip. Start with a verb (e.g., 'Clarify...', 'Negotiate...', 'Define...')."
}}
]
}}
CRITICAL:
- The values for "clause", "issue", and "suggestion" MUST be written in this language: {target_language}
- The value for "severity" MUST be one of: low, medium, high (lowercase, English)
- "type" should be a single short word or phrase in {target_language} that best describes the risk category.
Document:
---
{text}
---"#,
        target_language = target_language,
        text = text
    )
}

/// Build the sterner retry prompt used with a truncated document when the
/// first response yielded no parseable risks.
pub fn build_retry_prompt(short_doc: &str, target_language: &str) -> String {
    format!(
        r#"Output JSON only. Do not include any text before or after the JSON. Same schema as above.
Ensure fields are in {target_language} except severity which must be low|medium|high.
Document:
---
{short_doc}
---"#,
        target_language = target_language,
        short_doc = short_doc
    )
}

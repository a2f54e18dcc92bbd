//! Document-type classification service
//!
//! One deterministic oracle call mapping document text onto the fixed legal
//! taxonomy, plus a cheap legal/non-legal gate. Neither operation ever raises
//! to the caller; failures fall back to permissive defaults.

use std::sync::Arc;

use crate::model::DocumentType;
use crate::service::llm::{GenerativeOracle, Sampling};
use crate::service::snippet;

/// Snippet length sent to the oracle for classification
const CLASSIFY_SNIPPET_CHARS: usize = 2000;

pub struct DocumentTypeClassifier {
    oracle: Arc<dyn GenerativeOracle>,
}

impl DocumentTypeClassifier {
    pub fn new(oracle: Arc<dyn GenerativeOracle>) -> Self {
        Self { oracle }
    }

    /// Classify text into one of the ten legal-document categories.
    ///
    /// Unmatched replies and oracle failures fall back to
    /// [`DocumentType::OtherLegal`].
    pub async fn detect_document_type(&self, text: &str) -> DocumentType {
        let prompt = build_classification_prompt(snippet(text, CLASSIFY_SNIPPET_CHARS));

        match self.oracle.generate(&prompt, Sampling::Deterministic).await {
            Ok(reply) => {
                let doc_type = DocumentType::from_oracle_reply(&reply);
                tracing::debug!(
                    reply = %reply.trim(),
                    document_type = %doc_type,
                    "Document type classified"
                );
                doc_type
            }
            Err(e) => {
                tracing::warn!(error = %e, "Document type detection failed");
                DocumentType::OtherLegal
            }
        }
    }

    /// Quick YES/NO probe for whether the text is a legal document at all.
    ///
    /// Classification failure assumes legal so the analysis proceeds without
    /// interruption.
    pub async fn is_legal_document(&self, text: &str) -> bool {
        let prompt = format!(
            r#"You are a document classifier. Your task is to determine if the following text is a legal document.
Legal documents include contracts, terms of service, non-disclosure agreements, lease agreements, privacy policies, etc.
Non-legal documents include articles, stories, recipes, conversations, etc.

Analyze the text below and respond with a single word: YES or NO.

---
TEXT:
{}
---"#,
            snippet(text, CLASSIFY_SNIPPET_CHARS)
        );

        match self.oracle.generate(&prompt, Sampling::Deterministic).await {
            Ok(reply) => reply.trim().to_lowercase().contains("yes"),
            Err(e) => {
                tracing::warn!(error = %e, "Legal document classification failed, assuming legal");
                true
            }
        }
    }
}

fn build_classification_prompt(text_snippet: &str) -> String {
    format!(
        r#"You are a legal document classifier. Analyze the following text and determine its document type using this comprehensive classification system:

**PRIMARY CATEGORIES:**
1. **Contractual Documents** - Create or define legal relationships between parties
   Examples: Agreements, Employment Contracts, Lease Deeds, Partnership Deeds

2. **Transactional Documents** - Record commercial or financial transactions
   Examples: Sale Deeds, Loan Agreements, Purchase Orders, Bills of Exchange

3. **Constitutional & Statutory Documents** - Establish governance or organizational rules
   Examples: Constitution, Articles of Association, Memorandum of Association

4. **Litigation Documents** - Used in court proceedings for legal claims or defense
   Examples: FIR, Charge Sheet, Writ Petition, Affidavit, Power of Attorney

5. **Property Documents** - Relate to ownership, transfer, or use of immovable property
   Examples: Sale Deed, Gift Deed, Mortgage Deed, Lease Deed, Title Deed

6. **Financial & Banking Documents** - Govern borrowing, lending, or investment relationships
   Examples: Promissory Note, Loan Agreement, Bank Guarantee

7. **Personal Legal Documents** - Protect personal rights and family interests
   Examples: Will, Birth Certificate, Marriage Certificate, Divorce Decree, Adoption Papers

8. **Corporate & Business Documents** - Concern company formation, operation, and compliance
   Examples: MoA, AoA, Board Resolutions, Annual Reports, Non-Disclosure Agreements

9. **Intellectual Property Documents** - Secure rights to creations or inventions
   Examples: Patent Application, Trademark Registration, Copyright Assignment

10. **Employment & Labour Documents** - Define employer-employee relationship
    Examples: Employment Contract, Appointment Letter, Termination Notice

Respond with ONLY the most specific document type that best fits the content. Use the exact category name from the list above.

---
TEXT:
{}
---"#,
        text_snippet
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::llm::test_support::ScriptedOracle;

    #[tokio::test]
    async fn classifies_from_oracle_reply() {
        let classifier = DocumentTypeClassifier::new(Arc::new(ScriptedOracle::replying(
            "Employment & Labour Documents",
        )));
        let doc_type = classifier.detect_document_type("appointment letter text").await;
        assert_eq!(doc_type, DocumentType::EmploymentLabour);
    }

    #[tokio::test]
    async fn oracle_failure_falls_back_to_other() {
        let classifier = DocumentTypeClassifier::new(Arc::new(ScriptedOracle::failing()));
        let doc_type = classifier.detect_document_type("anything").await;
        assert_eq!(doc_type, DocumentType::OtherLegal);
    }

    #[tokio::test]
    async fn legal_gate_assumes_legal_on_failure() {
        let classifier = DocumentTypeClassifier::new(Arc::new(ScriptedOracle::failing()));
        assert!(classifier.is_legal_document("recipe for pancakes").await);
    }

    #[tokio::test]
    async fn legal_gate_parses_no() {
        let classifier = DocumentTypeClassifier::new(Arc::new(ScriptedOracle::replying("NO")));
        assert!(!classifier.is_legal_document("recipe for pancakes").await);
    }
}

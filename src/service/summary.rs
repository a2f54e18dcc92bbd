//! Plain-language summary, document-aware chat, and clause rewriting
//!
//! All three are single oracle calls with user-facing fallback messages on
//! failure; nothing here raises to the caller.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::service::llm::{GenerativeOracle, Sampling};
use crate::service::markdown;

const SUMMARY_FALLBACK: &str =
    "Sorry, there was an error processing your request with the AI.";
const CHAT_FALLBACK: &str =
    "Sorry, I'm having a little trouble right now. Please try again in a moment.";
const REWRITE_FALLBACK: &str = "Sorry, could not generate a safer rewrite right now.";

/// One turn of the document-aware chat.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatMessage {
    /// "user" or "ai"
    pub role: String,
    pub text: String,
}

/// Rewrite style for [`SummaryService::rewrite_clause`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RewriteMode {
    Plain,
    Formal,
}

pub struct SummaryService {
    oracle: Arc<dyn GenerativeOracle>,
}

impl SummaryService {
    pub fn new(oracle: Arc<dyn GenerativeOracle>) -> Self {
        Self { oracle }
    }

    /// Generate a plain-language HTML summary of a legal document.
    pub async fn summarize_text(&self, text: &str, target_language: &str) -> String {
        let prompt = format!(
            r#"You are an expert paralegal AI assistant. Your goal is to simplify complex legal documents for the average person, providing a balanced summary that is detailed but easy to read.

**Output Structure:**
1.  **Document Purpose:** Start with a 1-2 sentence overview explaining what this document is for (e.g., 'This is a freelance contract for web design services between a client and a developer.').
2.  **Key Sections Explained:** Below the overview, create a summary of the document's main sections. For each section, use a bolded heading (like **Scope of Work** or **Payment Terms**) and provide a 1-3 sentence explanation in simple terms. Cover all important topics present in the document, such as who is involved, main responsibilities, payment details, confidentiality, liability, and how the agreement can be ended.

Use Markdown for formatting. The entire response MUST be in this language: **{target_language}**

---
LEGAL TEXT:
{text}
---"#,
            target_language = target_language,
            text = text
        );

        match self.oracle.generate(&prompt, Sampling::Creative).await {
            Ok(reply) => markdown::to_html(&reply),
            Err(e) => {
                tracing::warn!(error = %e, "Summary generation failed");
                SUMMARY_FALLBACK.to_string()
            }
        }
    }

    /// Answer a question grounded strictly in the provided document.
    pub async fn get_chatbot_response(
        &self,
        history: &[ChatMessage],
        document_text: &str,
    ) -> String {
        let mut conversation = String::new();
        for message in history {
            let role = if message.role == "user" { "User" } else { "AI" };
            conversation.push_str(&format!("{}: {}\n", role, message.text));
        }

        let prompt = format!(
            r#"You are LegalEase AI's expert chatbot. Your primary goal is to answer questions based ONLY on the provided legal document.

If the user asks a question, answer it using the document.
If the user asks for a definition, provide it.
If the user asks a question that cannot be answered from the document, politely state that the answer is not found in the text.
Be friendly and conversational.

---
PROVIDED DOCUMENT TEXT:
{document_text}
---

CONVERSATION HISTORY:
{conversation}
---
AI: "#,
            document_text = document_text,
            conversation = conversation
        );

        match self.oracle.generate(&prompt, Sampling::Creative).await {
            Ok(reply) => markdown::to_html(reply.trim()),
            Err(e) => {
                tracing::warn!(error = %e, "Chatbot response failed");
                CHAT_FALLBACK.to_string()
            }
        }
    }

    /// Generate a safer rewrite of a clause for the signing party.
    pub async fn rewrite_clause(
        &self,
        clause_text: &str,
        target_language: &str,
        mode: RewriteMode,
    ) -> String {
        let style_hint = match mode {
            RewriteMode::Plain => "plain, clear non-legalese",
            RewriteMode::Formal => "concise, formal legal drafting",
        };

        let prompt = format!(
            r#"Rewrite the following clause to be SAFER for the signing party while preserving business intent.
- Use {style_hint}
- Keep it brief and actionable
- Write entirely in: {target_language}

Clause:
---
{clause_text}
---"#,
            style_hint = style_hint,
            target_language = target_language,
            clause_text = clause_text
        );

        match self.oracle.generate(&prompt, Sampling::Creative).await {
            Ok(reply) => reply.trim().to_string(),
            Err(e) => {
                tracing::warn!(error = %e, "Clause rewrite failed");
                REWRITE_FALLBACK.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::llm::test_support::ScriptedOracle;

    #[tokio::test]
    async fn summary_renders_markdown_to_html() {
        let service = SummaryService::new(Arc::new(ScriptedOracle::replying(
            "**Document Purpose:** a lease.",
        )));
        let html = service.summarize_text("lease text", "English").await;
        assert!(html.contains("<strong>Document Purpose:</strong>"));
    }

    #[tokio::test]
    async fn summary_failure_returns_fallback_message() {
        let service = SummaryService::new(Arc::new(ScriptedOracle::failing()));
        let html = service.summarize_text("lease text", "English").await;
        assert_eq!(html, SUMMARY_FALLBACK);
    }

    #[tokio::test]
    async fn chat_failure_returns_fallback_message() {
        let service = SummaryService::new(Arc::new(ScriptedOracle::failing()));
        let reply = service
            .get_chatbot_response(
                &[ChatMessage {
                    role: "user".to_string(),
                    text: "What is the notice period?".to_string(),
                }],
                "document",
            )
            .await;
        assert_eq!(reply, CHAT_FALLBACK);
    }

    #[tokio::test]
    async fn rewrite_failure_returns_fallback_message() {
        let service = SummaryService::new(Arc::new(ScriptedOracle::failing()));
        let rewrite = service
            .rewrite_clause("clause", "English", RewriteMode::Plain)
            .await;
        assert_eq!(rewrite, REWRITE_FALLBACK);
    }
}

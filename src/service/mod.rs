pub mod analysis;
pub mod authenticity;
pub mod classifier;
pub mod extract;
pub mod llm;
pub mod logos;
pub mod markdown;
pub mod precheck;
pub mod risks;
pub mod summary;
pub mod vision;

pub use analysis::DocumentAnalysisService;
pub use authenticity::AuthenticityService;
pub use classifier::DocumentTypeClassifier;
pub use llm::{GenerativeOracle, LlmClient};
pub use logos::LogoAuthenticityService;
pub use risks::RiskAnalysisService;
pub use summary::SummaryService;
pub use vision::VisionClient;

/// Truncate text to at most `max_chars` characters on a char boundary.
pub(crate) fn snippet(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

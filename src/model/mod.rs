pub mod config;
pub mod document_type;
pub mod risk;
pub mod verdict;

pub use config::{Config, FusionPolicy};
pub use document_type::DocumentType;
pub use risk::{compute_risk_stats, RiskRecord, RiskStats, Severity};
pub use verdict::{AuthenticityReport, LogoAnalysis, LogoFinding, ScoreBreakdown, Verdict};

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Fixed legal document taxonomy used by the classifier and the authenticity
/// engine's type-specific expectations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum DocumentType {
    Contractual,
    Transactional,
    ConstitutionalStatutory,
    Litigation,
    Property,
    FinancialBanking,
    PersonalLegal,
    CorporateBusiness,
    IntellectualProperty,
    EmploymentLabour,
    /// Fallback for unmatched classifier replies and classifier failures
    OtherLegal,
}

/// Ordered keyword precedence table for mapping a free-text classifier reply
/// onto the fixed taxonomy.
///
/// Order matters: more specific categories are checked first so that, e.g., an
/// "employment contract" lands in EmploymentLabour rather than the generic
/// Contractual bucket ("agreement" is a Contractual keyword), and
/// "intellectual property" is checked before the bare "property" keyword.
const KEYWORD_PRECEDENCE: &[(DocumentType, &[&str])] = &[
    (
        DocumentType::EmploymentLabour,
        &["employment", "labour", "appointment letter", "termination notice"],
    ),
    (
        DocumentType::IntellectualProperty,
        &["intellectual property", "patent", "trademark", "copyright"],
    ),
    (
        DocumentType::Property,
        &["property", "sale deed", "gift deed", "mortgage deed", "title deed"],
    ),
    (
        DocumentType::FinancialBanking,
        &["financial", "banking", "promissory note", "bank guarantee"],
    ),
    (
        DocumentType::Litigation,
        &["litigation", "fir", "charge sheet", "writ petition", "affidavit", "power of attorney"],
    ),
    (
        DocumentType::CorporateBusiness,
        &["corporate", "business", "board resolution", "annual report", "non-disclosure"],
    ),
    (
        DocumentType::PersonalLegal,
        &["personal", "will", "birth certificate", "marriage certificate", "divorce decree", "adoption"],
    ),
    (
        DocumentType::Transactional,
        &["transactional", "purchase order", "bill of exchange"],
    ),
    (
        DocumentType::ConstitutionalStatutory,
        &["constitutional", "statutory", "articles of association", "memorandum of association"],
    ),
    (
        DocumentType::Contractual,
        &["contractual", "agreement", "lease deed", "partnership deed"],
    ),
];

impl DocumentType {
    /// Map a free-text oracle reply onto the fixed category set.
    ///
    /// Case-insensitive substring matching against the precedence table;
    /// unmatched replies fall back to `OtherLegal`.
    pub fn from_oracle_reply(reply: &str) -> Self {
        let reply = reply.to_lowercase();
        for (doc_type, keywords) in KEYWORD_PRECEDENCE {
            if keywords.iter().any(|kw| reply.contains(kw)) {
                return *doc_type;
            }
        }
        DocumentType::OtherLegal
    }

    /// Display name matching the taxonomy presented to the oracle.
    pub fn label(&self) -> &'static str {
        match self {
            DocumentType::Contractual => "Contractual Documents",
            DocumentType::Transactional => "Transactional Documents",
            DocumentType::ConstitutionalStatutory => "Constitutional & Statutory Documents",
            DocumentType::Litigation => "Litigation Documents",
            DocumentType::Property => "Property Documents",
            DocumentType::FinancialBanking => "Financial & Banking Documents",
            DocumentType::PersonalLegal => "Personal Legal Documents",
            DocumentType::CorporateBusiness => "Corporate & Business Documents",
            DocumentType::IntellectualProperty => "Intellectual Property Documents",
            DocumentType::EmploymentLabour => "Employment & Labour Documents",
            DocumentType::OtherLegal => "Other Legal Documents",
        }
    }

    /// Type-specific expectation sentence embedded in the forensic prompt.
    pub fn expectation(&self) -> &'static str {
        match self {
            DocumentType::Contractual => {
                "Should have clear parties, terms, consideration, mutual obligations, and execution details."
            }
            DocumentType::Transactional => {
                "Should record specific commercial/financial transactions with amounts, dates, and parties involved."
            }
            DocumentType::ConstitutionalStatutory => {
                "Should establish governance frameworks with clear organizational rules and procedures."
            }
            DocumentType::Litigation => {
                "Should be used in court proceedings with proper legal citations, case numbers, and official formatting."
            }
            DocumentType::Property => {
                "Should relate to immovable property with clear ownership details, property descriptions, and transfer terms."
            }
            DocumentType::FinancialBanking => {
                "Should govern borrowing/lending relationships with financial terms, repayment schedules, and security details."
            }
            DocumentType::PersonalLegal => {
                "Should protect personal rights with proper identification, dates, and legal formalities."
            }
            DocumentType::CorporateBusiness => {
                "Should concern company operations with corporate structure, compliance requirements, and business terms."
            }
            DocumentType::IntellectualProperty => {
                "Should secure rights to creations with specific IP details, ownership claims, and legal protections."
            }
            DocumentType::EmploymentLabour => {
                "Should define employer-employee relationships with job terms, compensation, and employment conditions."
            }
            DocumentType::OtherLegal => {
                "Should have appropriate legal structure, terminology, and execution elements."
            }
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//! Rule-based lexical pre-check
//!
//! Scores raw document text 0-100 from deterministic surface signals: dates,
//! party and signature indicators, length, legal terminology, and placeholder
//! markers. No oracle involvement; identical input always yields the same
//! score.

use once_cell::sync::Lazy;
use regex::Regex;

fn compile_all(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("invalid precheck pattern"))
        .collect()
}

/// Date patterns: bare year, DD-MM-YYYY / DD/MM/YYYY, "Month DD, YYYY"
static DATE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[
        r"\b(19|20)\d{2}\b",
        r"\b\d{1,2}[-/]\d{1,2}[-/](19|20)\d{2}\b",
        r"(?i)\b(January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{1,2},?\s+(19|20)\d{2}\b",
    ])
});

/// Names, parties, and institutions
static PARTY_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[
        r"\b(party|parties|between|agreement between|contract between)",
        r"\b(plaintiff|defendant|petitioner|respondent)",
        r"\b(company|corporation|llc|inc|ltd)",
        r"\b(mr\.|ms\.|mrs\.|dr\.)\s+\w+",
        r"\b(signed by|witnessed by|notarized by)",
    ])
});

/// Signature, seal, and witness mentions
static SIGNATURE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[
        r"\b(signature|signed|sign|seal|notary|witness|notarized)",
        r"\b(executed|acknowledged|sworn|affirmed)",
    ])
});

/// Placeholder and template markers (negative signal)
static PLACEHOLDER_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[
        r"\b(lorem ipsum|your name|placeholder|sample text|test document)",
        r"\b(insert|fill in|replace with|xxx|___|\[.*\])",
        r"\b(template|draft|example|sample)",
    ])
});

/// Legal terminology (bonus signal)
static LEGAL_TERM_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[
        r"\b(whereas|hereby|herein|thereof|pursuant to|in accordance with)",
        r"\b(liability|indemnification|breach|remedy|jurisdiction)",
        r"\b(confidential|proprietary|intellectual property|copyright)",
    ])
});

fn any_match(patterns: &[Regex], text: &str) -> bool {
    patterns.iter().any(|p| p.is_match(text))
}

/// Score document text 0-100 from rule-based characteristics.
pub fn run_prechecks(text: &str) -> u8 {
    let mut score: i32 = 0;
    let text_lower = text.to_lowercase();

    if any_match(&DATE_PATTERNS, text) {
        score += 20;
    }

    if any_match(&PARTY_PATTERNS, &text_lower) {
        score += 20;
    }

    if any_match(&SIGNATURE_PATTERNS, &text_lower) {
        score += 20;
    }

    let word_count = text.split_whitespace().count();
    if word_count > 150 {
        score += 20;
    } else if word_count > 50 {
        score += 10;
    }

    if any_match(&PLACEHOLDER_PATTERNS, &text_lower) {
        score -= 30;
    }

    if any_match(&LEGAL_TERM_PATTERNS, &text_lower) {
        score += 20;
    }

    score.clamp(0, 100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Text satisfying every positive rule and no placeholder marker
    fn full_marks_text() -> String {
        let mut text = String::from(
            "This agreement, dated 2023, is made between the parties. \
             Witness the signature of each undersigned. Whereas the terms below apply. ",
        );
        for _ in 0..160 {
            text.push_str("clause ");
        }
        text
    }

    #[test]
    fn score_is_deterministic_and_bounded() {
        let text = full_marks_text();
        let first = run_prechecks(&text);
        let second = run_prechecks(&text);
        assert_eq!(first, second);
        assert!(first <= 100);
        assert!(run_prechecks("") <= 100);
    }

    #[test]
    fn all_signals_present_scores_100() {
        assert_eq!(run_prechecks(&full_marks_text()), 100);
    }

    #[test]
    fn placeholder_only_clamps_to_zero() {
        assert_eq!(run_prechecks("lorem ipsum"), 0);
    }

    #[test]
    fn placeholder_subtracts_thirty() {
        let mut text = full_marks_text();
        text.push_str(" lorem ipsum");
        assert_eq!(run_prechecks(&text), 70);
    }

    #[test]
    fn word_count_tiers() {
        // 60 words, no other signals: +10
        let sixty: String = std::iter::repeat("word ").take(60).collect();
        assert_eq!(run_prechecks(&sixty), 10);
        // 40 words: no length bonus
        let forty: String = std::iter::repeat("word ").take(40).collect();
        assert_eq!(run_prechecks(&forty), 0);
    }

    #[test]
    fn date_formats_are_recognized() {
        assert_eq!(run_prechecks("effective 12/03/2021"), 20);
        assert_eq!(run_prechecks("effective March 3, 2021"), 20);
        assert_eq!(run_prechecks("in the year 1998"), 20);
    }
}

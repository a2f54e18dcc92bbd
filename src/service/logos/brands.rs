//! Known-brand reference table for logo authenticity scoring

/// A known brand or institution with a baseline authenticity score and the
/// risk factors that commonly show up in forged reproductions of its logo.
pub struct KnownBrand {
    pub name: &'static str,
    /// Lowercase name variants matched against detection labels
    pub variants: &'static [&'static str],
    /// Baseline authenticity score before detection-confidence weighting
    pub baseline_score: u8,
    pub risk_factors: &'static [&'static str],
}

/// Reference table of well-known brands and institutions.
///
/// Matching is case-insensitive substring containment against the variants.
pub const KNOWN_BRANDS: &[KnownBrand] = &[
    KnownBrand {
        name: "Google",
        variants: &["google"],
        baseline_score: 95,
        risk_factors: &["color variations", "incorrect letter spacing"],
    },
    KnownBrand {
        name: "Microsoft",
        variants: &["microsoft"],
        baseline_score: 95,
        risk_factors: &["tile color variations", "missing trademark symbol"],
    },
    KnownBrand {
        name: "Apple",
        variants: &["apple"],
        baseline_score: 95,
        risk_factors: &["outline distortions", "incorrect leaf angle"],
    },
    KnownBrand {
        name: "Amazon",
        variants: &["amazon"],
        baseline_score: 90,
        risk_factors: &["arrow curve variations", "font inconsistencies"],
    },
    KnownBrand {
        name: "IBM",
        variants: &["ibm", "international business machines"],
        baseline_score: 90,
        risk_factors: &["stripe count variations", "missing trademark symbol"],
    },
    KnownBrand {
        name: "Visa",
        variants: &["visa"],
        baseline_score: 90,
        risk_factors: &["color variations", "outdated logo version"],
    },
    KnownBrand {
        name: "Mastercard",
        variants: &["mastercard", "master card"],
        baseline_score: 90,
        risk_factors: &["circle overlap variations", "color variations"],
    },
    KnownBrand {
        name: "PayPal",
        variants: &["paypal", "pay pal"],
        baseline_score: 88,
        risk_factors: &["font inconsistencies", "missing trademark symbol"],
    },
    KnownBrand {
        name: "State Bank of India",
        variants: &["state bank of india", "sbi"],
        baseline_score: 92,
        risk_factors: &["emblem distortions", "color variations"],
    },
    KnownBrand {
        name: "Reserve Bank of India",
        variants: &["reserve bank of india", "rbi"],
        baseline_score: 92,
        risk_factors: &["seal distortions", "missing official emblem details"],
    },
];

/// Find the reference-table entry matching a detection label, if any.
pub fn match_brand(label: &str) -> Option<&'static KnownBrand> {
    let label = label.to_lowercase();
    KNOWN_BRANDS
        .iter()
        .find(|brand| brand.variants.iter().any(|v| label.contains(v)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_case_insensitive_substring() {
        assert_eq!(match_brand("Google LLC").unwrap().name, "Google");
        assert_eq!(match_brand("MASTERCARD").unwrap().name, "Mastercard");
        assert_eq!(
            match_brand("State Bank of India emblem").unwrap().name,
            "State Bank of India"
        );
    }

    #[test]
    fn unknown_label_has_no_match() {
        assert!(match_brand("Totally Unknown Corp").is_none());
    }
}

//! Localized badge and field labels for risk rendering
//!
//! Only the labeling contract is localized; risk content itself arrives from
//! the oracle already in the target language.

/// Badge labels for one target language.
#[derive(Debug, Clone, Copy)]
pub struct SeverityLabels {
    pub high: &'static str,
    pub medium: &'static str,
    pub low: &'static str,
    pub risk_word: &'static str,
}

/// Field headings for one target language.
#[derive(Debug, Clone, Copy)]
pub struct FieldLabels {
    pub issue: &'static str,
    pub suggestion: &'static str,
}

/// Resolve severity badge labels from a free-form language name.
pub fn severity_labels(target_language: &str) -> SeverityLabels {
    let lang = target_language.to_lowercase();
    if lang.starts_with("spanish") || lang.starts_with("espa") {
        SeverityLabels { high: "Alto", medium: "Medio", low: "Bajo", risk_word: "Riesgo" }
    } else if lang.starts_with("french") || lang.starts_with("fran") {
        SeverityLabels { high: "Élevé", medium: "Moyen", low: "Faible", risk_word: "Risque" }
    } else if lang.starts_with("german") || lang.starts_with("deut") {
        SeverityLabels { high: "Hoch", medium: "Mittel", low: "Niedrig", risk_word: "Risiko" }
    } else if lang.starts_with("hindi") || target_language.contains("हिन्दी") {
        SeverityLabels { high: "उच्च", medium: "मध्यम", low: "निम्न", risk_word: "जोखिम" }
    } else if lang.starts_with("marathi") || target_language.contains("मराठी") {
        SeverityLabels { high: "उच्च", medium: "मध्यम", low: "कमी", risk_word: "जोखीम" }
    } else {
        SeverityLabels { high: "High", medium: "Medium", low: "Low", risk_word: "Risk" }
    }
}

/// Resolve field headings from a free-form language name.
pub fn field_labels(target_language: &str) -> FieldLabels {
    let lang = target_language.to_lowercase();
    if lang.starts_with("spanish") || lang.starts_with("espa") {
        FieldLabels { issue: "Problema", suggestion: "Sugerencia" }
    } else if lang.starts_with("french") || lang.starts_with("fran") {
        FieldLabels { issue: "Problème", suggestion: "Suggestion" }
    } else if lang.starts_with("german") || lang.starts_with("deut") {
        FieldLabels { issue: "Problem", suggestion: "Empfehlung" }
    } else if lang.starts_with("hindi") || target_language.contains("हिन्दी") {
        FieldLabels { issue: "मुद्दा", suggestion: "सुझाव" }
    } else if lang.starts_with("marathi") || target_language.contains("मराठी") {
        FieldLabels { issue: "मुद्दा", suggestion: "सूचना" }
    } else {
        FieldLabels { issue: "Issue", suggestion: "Suggestion" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_language_defaults_to_english() {
        let labels = severity_labels("Klingon");
        assert_eq!(labels.high, "High");
        assert_eq!(field_labels("Klingon").issue, "Issue");
    }

    #[test]
    fn native_script_names_resolve() {
        assert_eq!(severity_labels("हिन्दी").risk_word, "जोखिम");
        assert_eq!(severity_labels("Español").high, "Alto");
    }
}

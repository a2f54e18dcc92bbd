//! HTML rendering for risk lists

use crate::export::labels::{field_labels, severity_labels};
use crate::model::{RiskRecord, Severity};
use crate::service::markdown::to_inline_html;

/// Render a color-coded HTML list for risks with localized badge labels.
pub fn render_risks_html(risks: &[RiskRecord], target_language: &str) -> String {
    if risks.is_empty() {
        return "<p class='risk-empty'>No obvious risks detected.</p>".to_string();
    }

    let badges = severity_labels(target_language);
    let fields = field_labels(target_language);

    let mut items = String::new();
    for risk in risks {
        let css = match risk.severity {
            Severity::Low => "risk-low",
            Severity::Medium => "risk-medium",
            Severity::High => "risk-high",
        };
        let severity_label = match risk.severity {
            Severity::Low => badges.low,
            Severity::Medium => badges.medium,
            Severity::High => badges.high,
        };

        let clause = to_inline_html(risk.clause.trim());
        let issue = to_inline_html(risk.issue.trim());
        let worst_case = to_inline_html(risk.worst_case.trim());
        let risk_type = to_inline_html(risk.risk_type.trim());
        let suggestion = to_inline_html(risk.suggestion.trim());

        let clause = if clause.is_empty() {
            "Unnamed Clause".to_string()
        } else {
            clause
        };

        items.push_str(&format!(
            "<li class='risk-item {css}' data-type='{risk_type}'>\
             <div class='risk-header'><span class='risk-badge'>{severity_label} {risk_word}</span>\
             <strong>{clause}</strong></div>\
             <div class='risk-body'><div class='risk-issue'><b>{issue_label}:</b> {issue}</div>\
             <div class='risk-worst'><b>Worst case:</b> {worst_case}</div>\
             <div class='risk-type'><b>Type:</b> {risk_type}</div>\
             <div class='risk-suggestion'><b>{suggestion_label}:</b> {suggestion}</div>\
             </div>\
             </li>",
            css = css,
            risk_type = risk_type,
            severity_label = severity_label,
            risk_word = badges.risk_word,
            clause = clause,
            issue_label = fields.issue,
            issue = issue,
            worst_case = worst_case,
            suggestion_label = fields.suggestion,
            suggestion = suggestion,
        ));
    }

    format!("<ul class='risk-list'>{}</ul>", items)
}

/// Render a standalone HTML document wrapping the localized risk list.
pub fn risks_to_html(risks: &[RiskRecord], target_language: &str) -> String {
    let body = render_risks_html(risks, target_language);
    format!(
        "<!DOCTYPE html><html><head><meta charset='utf-8'><title>Risk Export</title>\
         <style>body{{font-family:sans-serif;padding:24px;}} .risk-item{{margin:12px 0;padding:12px;border-radius:8px;border:1px solid #eee;}}</style>\
         </head><body>{}</body></html>",
        body
    )
}

//! CSV export for risk lists
//!
//! Fixed column order: clause, issue, severity, type, worst_case, suggestion.

use crate::model::RiskRecord;

/// Render a risk list to a CSV string.
pub fn risks_to_csv(risks: &[RiskRecord]) -> String {
    let mut writer = csv::Writer::from_writer(Vec::new());

    // Header and rows share the fixed column order; writes into a Vec cannot
    // fail short of allocation failure
    let _ = writer.write_record(["clause", "issue", "severity", "type", "worst_case", "suggestion"]);
    for risk in risks {
        let _ = writer.write_record([
            risk.clause.as_str(),
            risk.issue.as_str(),
            risk.severity.as_str(),
            risk.risk_type.as_str(),
            risk.worst_case.as_str(),
            risk.suggestion.as_str(),
        ]);
    }

    let bytes = writer.into_inner().unwrap_or_default();
    String::from_utf8(bytes).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Severity;

    fn sample_risks() -> Vec<RiskRecord> {
        vec![
            RiskRecord {
                clause: "Clause 3, \"Indemnity\"".to_string(),
                issue: "One-sided indemnity, broad scope".to_string(),
                severity: Severity::High,
                risk_type: "Liability".to_string(),
                worst_case: "Pay all counterparty losses".to_string(),
                suggestion: "Negotiate a mutual cap".to_string(),
            },
            RiskRecord {
                clause: "Clause 9\nTermination".to_string(),
                issue: "30-day unilateral termination".to_string(),
                severity: Severity::Low,
                risk_type: "Termination".to_string(),
                worst_case: "Sudden contract end".to_string(),
                suggestion: "Extend the notice period".to_string(),
            },
        ]
    }

    #[test]
    fn csv_round_trips_field_by_field() {
        let risks = sample_risks();
        let csv_text = risks_to_csv(&risks);

        let mut reader = csv::Reader::from_reader(csv_text.as_bytes());
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), risks.len());

        for (row, risk) in rows.iter().zip(&risks) {
            assert_eq!(&row[0], risk.clause);
            assert_eq!(&row[1], risk.issue);
            assert_eq!(&row[2], risk.severity.as_str());
            assert_eq!(&row[3], risk.risk_type);
            assert_eq!(&row[4], risk.worst_case);
            assert_eq!(&row[5], risk.suggestion);
        }
    }

    #[test]
    fn empty_list_yields_header_only() {
        let csv_text = risks_to_csv(&[]);
        assert_eq!(
            csv_text.trim(),
            "clause,issue,severity,type,worst_case,suggestion"
        );
    }
}

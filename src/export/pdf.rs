//! PDF report rendering for risk lists
//!
//! Builds a compact A4 report with a severity-colored header cell per risk.
//! The built-in Helvetica fonts only cover Latin-1, so text is folded the
//! same way the HTML-safe exports fold curly quotes and dashes.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use crate::model::{RiskRecord, Severity};

const PAGE_WIDTH: f32 = 595.0;
const PAGE_HEIGHT: f32 = 842.0;
const MARGIN: f32 = 36.0;
const LINE_HEIGHT: f32 = 14.0;
/// Rough character budget per wrapped line at 11pt Helvetica
const WRAP_CHARS: usize = 90;

/// Severity header-cell fill colors (0-255 RGB)
fn severity_color(severity: Severity) -> (u8, u8, u8) {
    match severity {
        Severity::Low => (6, 214, 160),
        Severity::Medium => (255, 209, 102),
        Severity::High => (255, 107, 107),
    }
}

/// Fold text into the Latin-1 repertoire of the built-in fonts.
fn latin1_fold(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{201c}' | '\u{201d}' => '"',
            '\u{2018}' | '\u{2019}' => '\'',
            '\u{2013}' | '\u{2014}' => '-',
            '\u{2022}' => '-',
            c if (c as u32) <= 0xff => c,
            _ => '?',
        })
        .collect()
}

/// Wrap text to a fixed character budget on whitespace.
fn wrap_line(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + word.len() + 1 > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

struct PageBuilder {
    operations: Vec<Operation>,
    y: f32,
    finished: Vec<Vec<Operation>>,
}

impl PageBuilder {
    fn new() -> Self {
        Self {
            operations: Vec::new(),
            y: PAGE_HEIGHT - MARGIN,
            finished: Vec::new(),
        }
    }

    fn ensure_room(&mut self, needed: f32) {
        if self.y - needed < MARGIN {
            self.finished.push(std::mem::take(&mut self.operations));
            self.y = PAGE_HEIGHT - MARGIN;
        }
    }

    fn text(&mut self, x: f32, font: &str, size: i64, content: &str) {
        self.operations.extend([
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec![font.into(), size.into()]),
            Operation::new("Td", vec![x.into(), self.y.into()]),
            Operation::new("Tj", vec![Object::string_literal(latin1_fold(content))]),
            Operation::new("ET", vec![]),
        ]);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: (u8, u8, u8)) {
        let (r, g, b) = color;
        self.operations.extend([
            Operation::new(
                "rg",
                vec![
                    (r as f32 / 255.0).into(),
                    (g as f32 / 255.0).into(),
                    (b as f32 / 255.0).into(),
                ],
            ),
            Operation::new("re", vec![x.into(), y.into(), w.into(), h.into()]),
            Operation::new("f", vec![]),
            // back to black for text
            Operation::new("rg", vec![0.into(), 0.into(), 0.into()]),
        ]);
    }

    fn advance(&mut self, dy: f32) {
        self.y -= dy;
    }

    fn into_pages(mut self) -> Vec<Vec<Operation>> {
        self.finished.push(self.operations);
        self.finished
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Render a compact PDF for the risk list and return it as bytes.
pub fn risks_to_pdf_bytes(risks: &[RiskRecord]) -> Result<Vec<u8>, lopdf::Error> {
    let mut builder = PageBuilder::new();

    builder.text(MARGIN, "F2", 16, "LegalEase AI - Risk Report");
    builder.advance(26.0);

    if risks.is_empty() {
        builder.text(MARGIN, "F1", 11, "No obvious risks detected.");
    }

    for risk in risks {
        builder.ensure_room(80.0);

        // Severity cell plus clause heading
        builder.fill_rect(MARGIN, builder.y - 4.0, 70.0, 16.0, severity_color(risk.severity));
        builder.text(MARGIN + 6.0, "F2", 11, &capitalize(risk.severity.as_str()));
        builder.text(
            MARGIN + 78.0,
            "F2",
            11,
            &format!("Clause: {}", risk.clause),
        );
        builder.advance(20.0);

        let fields = [
            ("Type", risk.risk_type.as_str()),
            ("Issue", risk.issue.as_str()),
            ("Worst case", risk.worst_case.as_str()),
            ("Suggestion", risk.suggestion.as_str()),
        ];
        for (label, value) in fields {
            if value.is_empty() {
                continue;
            }
            for line in wrap_line(&format!("{}: {}", label, value), WRAP_CHARS) {
                builder.ensure_room(LINE_HEIGHT);
                builder.text(MARGIN, "F1", 11, &line);
                builder.advance(LINE_HEIGHT);
            }
        }
        builder.advance(8.0);
    }

    let pages = builder.into_pages();
    build_document(pages)
}

fn build_document(pages: Vec<Vec<Operation>>) -> Result<Vec<u8>, lopdf::Error> {
    let mut doc = Document::with_version("1.5");

    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let bold_font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
            "F2" => bold_font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    let page_count = pages.len();
    for operations in pages {
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
            "Resources" => resources_id,
        });
        kids.push(page_id.into());
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count as i64,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Severity;

    fn risk(severity: Severity, issue: &str) -> RiskRecord {
        RiskRecord {
            clause: "Clause 1".to_string(),
            issue: issue.to_string(),
            severity,
            risk_type: "Liability".to_string(),
            worst_case: "Large damages".to_string(),
            suggestion: "Add a liability cap".to_string(),
        }
    }

    #[test]
    fn produces_a_parseable_pdf() {
        let bytes =
            risks_to_pdf_bytes(&[risk(Severity::High, "Uncapped liability")]).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }

    #[test]
    fn empty_list_still_renders() {
        let bytes = risks_to_pdf_bytes(&[]).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn long_lists_paginate() {
        let risks: Vec<RiskRecord> = (0..60)
            .map(|i| risk(Severity::Medium, &format!("Issue number {}", i)))
            .collect();
        let bytes = risks_to_pdf_bytes(&risks).unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        assert!(doc.get_pages().len() > 1);
    }

    #[test]
    fn latin1_fold_replaces_typographic_marks() {
        assert_eq!(latin1_fold("\u{201c}quoted\u{201d} \u{2014} done"), "\"quoted\" - done");
        assert_eq!(latin1_fold("नमस्ते"), "??????");
    }

    #[test]
    fn wrap_respects_width() {
        let lines = wrap_line(&"word ".repeat(50), 20);
        assert!(lines.iter().all(|l| l.len() <= 20));
        assert!(lines.len() > 1);
    }
}

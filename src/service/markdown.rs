//! Markdown rendering helpers for oracle output
//!
//! The oracle replies in markdown; user-facing HTML comes out of
//! `pulldown-cmark`. Inline rendering flattens block structure so short risk
//! fields can sit inside list markup.

use pulldown_cmark::{html, Options, Parser};

/// Render markdown to HTML.
pub fn to_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::empty());
    let mut out = String::with_capacity(markdown.len() * 2);
    html::push_html(&mut out, parser);
    out
}

/// Render markdown to inline HTML: strip wrapping paragraph tags and flatten
/// lists so the result can live inside a single line of markup.
pub fn to_inline_html(markdown: &str) -> String {
    if markdown.is_empty() {
        return String::new();
    }
    let mut out = to_html(markdown);
    let trimmed = out.trim();
    if trimmed.starts_with("<p>") && trimmed.ends_with("</p>") {
        out = trimmed[3..trimmed.len() - 4].to_string();
    }
    out = out
        .replace("<ul>", "")
        .replace("</ul>", "")
        .replace("<ol>", "")
        .replace("</ol>", "")
        .replace("</li>", "; ")
        .replace("<li>", "");
    out.replace('\n', " ").trim_matches([' ', ';']).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_strips_paragraph_wrapper() {
        assert_eq!(to_inline_html("**bold** text"), "<strong>bold</strong> text");
    }

    #[test]
    fn inline_flattens_lists() {
        let out = to_inline_html("- one\n- two");
        assert!(!out.contains("<li>"));
        assert!(!out.contains("<ul>"));
        assert!(out.contains("one"));
        assert!(out.contains("two"));
    }

    #[test]
    fn empty_input_is_empty() {
        assert_eq!(to_inline_html(""), "");
    }
}

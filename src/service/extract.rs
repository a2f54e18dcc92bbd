//! Document text extraction
//!
//! Turns uploaded bytes into plain text. PDFs go through `pdf-extract`;
//! plain text passes through with encoding validation. Scanned images need
//! the external OCR service and are reported as unsupported here; the API
//! layer treats any failure as "no text available".

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("Unsupported content type: {0}")]
    Unsupported(String),

    #[error("Failed to extract text: {0}")]
    Extraction(String),

    #[error("Document text is not valid UTF-8")]
    Encoding,
}

/// Extract plain text from document bytes.
pub fn extract_text(bytes: &[u8], mime: &str) -> Result<String, ExtractionError> {
    match mime {
        "application/pdf" => {
            let text = pdf_extract::extract_text_from_mem(bytes)
                .map_err(|e| ExtractionError::Extraction(e.to_string()))?;
            tracing::debug!(chars = text.len(), "Extracted text from PDF");
            Ok(text)
        }
        m if m.starts_with("text/") => String::from_utf8(bytes.to_vec())
            .map_err(|_| ExtractionError::Encoding),
        other => Err(ExtractionError::Unsupported(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_passes_through() {
        let text = extract_text(b"hello agreement", "text/plain").unwrap();
        assert_eq!(text, "hello agreement");
    }

    #[test]
    fn invalid_utf8_is_an_encoding_error() {
        let result = extract_text(&[0xff, 0xfe, 0x00], "text/plain");
        assert!(matches!(result, Err(ExtractionError::Encoding)));
    }

    #[test]
    fn unknown_mime_is_unsupported() {
        let result = extract_text(b"...", "image/png");
        assert!(matches!(result, Err(ExtractionError::Unsupported(_))));
    }

    #[test]
    fn malformed_pdf_is_an_extraction_error() {
        let result = extract_text(b"not a pdf", "application/pdf");
        assert!(matches!(result, Err(ExtractionError::Extraction(_))));
    }
}

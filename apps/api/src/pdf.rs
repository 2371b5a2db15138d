//! PDF text extraction for uploaded resumes.
//!
//! Pulls the plain-text layer out of the document with `pdf-extract`. Pages
//! come back in reading order, separated by newlines. Scanned (image-only)
//! PDFs produce empty text; the analyzer treats that as an input-quality
//! failure; there is no OCR fallback here.

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("document is not a readable PDF: {0}")]
    InvalidDocument(String),
}

/// Extracts the full text layer from PDF bytes.
pub fn extract_text(content: &[u8]) -> Result<String, ExtractionError> {
    let text = pdf_extract::extract_text_from_mem(content)
        .map_err(|e| ExtractionError::InvalidDocument(e.to_string()))?;

    debug!("extracted {} characters from PDF", text.len());
    Ok(text)
}

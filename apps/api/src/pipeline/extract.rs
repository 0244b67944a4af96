//! PDF text extraction: a thin wrapper over `pdf-extract`.

use thiserror::Error;
use tracing::{debug, error, info};

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Failed to extract text from PDF: {0}")]
    Parse(String),

    #[error("PDF extraction aborted: {0}")]
    Aborted(String),
}

/// Extracts text from an in-memory PDF, concatenating pages in document order.
///
/// Any page failure fails the whole document; no partial text is returned.
pub fn extract_text_from_pdf(bytes: &[u8]) -> Result<String, ExtractionError> {
    info!("Starting text extraction from PDF ({} bytes)", bytes.len());

    let pages = pdf_extract::extract_text_from_mem_by_pages(bytes).map_err(|e| {
        error!("Error extracting text from PDF: {e}");
        ExtractionError::Parse(e.to_string())
    })?;

    let mut text = String::new();
    for (index, page_text) in pages.iter().enumerate() {
        debug!("Extracted text from page {}", index + 1);
        text.push_str(page_text);
    }

    info!("Successfully extracted text from {} page(s)", pages.len());
    Ok(text)
}

/// Runs [`extract_text_from_pdf`] on the blocking pool.
///
/// `pdf-extract` panics on some malformed documents; a panicked task is reported
/// as [`ExtractionError::Aborted`] instead of taking the request down.
pub async fn extract_text(data: bytes::Bytes) -> Result<String, ExtractionError> {
    tokio::task::spawn_blocking(move || extract_text_from_pdf(&data))
        .await
        .map_err(|e| {
            error!("PDF extraction task failed: {e}");
            ExtractionError::Aborted(e.to_string())
        })?
}

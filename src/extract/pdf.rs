// PDF text extraction using lopdf.
//
// Pages are extracted in page-number order and joined with newlines. Scanned
// PDFs without a text layer come back empty; there is no OCR fallback.

use std::path::Path;

use anyhow::{Context, Result};
use lopdf::Document;
use tracing::{debug, warn};

/// Extract plain text from PDF bytes.
pub fn extract_text(pdf_bytes: &[u8]) -> Result<String> {
    let doc = Document::load_mem(pdf_bytes).context("Failed to load PDF")?;
    extract_from_doc(&doc)
}

/// Extract plain text from a PDF on disk.
pub fn extract_file(path: &Path) -> Result<String> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    extract_text(&bytes).with_context(|| format!("Failed to extract text from {}", path.display()))
}

/// Like `extract_text`, but logs the failure and returns an empty string.
///
/// Callers that only need "some text or nothing" use this; blank output
/// means the document could not be read.
pub fn extract_text_or_empty(pdf_bytes: &[u8]) -> String {
    match extract_text(pdf_bytes) {
        Ok(text) => text,
        Err(e) => {
            warn!(error = %format!("{e:#}"), "Error extracting text from PDF");
            String::new()
        }
    }
}

fn extract_from_doc(doc: &Document) -> Result<String> {
    // BTreeMap keyed by page number, so iteration is already in page order
    let pages = doc.get_pages();
    if pages.is_empty() {
        anyhow::bail!("PDF document has no pages");
    }

    let mut text = String::new();
    for &page_num in pages.keys() {
        match doc.extract_text(&[page_num]) {
            Ok(page_text) => {
                text.push_str(&page_text);
                if !page_text.ends_with('\n') {
                    text.push('\n');
                }
            }
            Err(e) => {
                // One unreadable page (odd font encoding) shouldn't lose the rest
                warn!(page = page_num, error = %e, "Skipping unreadable PDF page");
            }
        }
    }

    debug!(
        pages = pages.len(),
        chars = text.chars().count(),
        "Extracted PDF text"
    );

    Ok(text)
}

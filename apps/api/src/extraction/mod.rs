//! Text extraction — turns an uploaded PDF or DOCX payload into plain text.
//!
//! Leaf module: no knowledge of scoring or the AI reviewer. The payload is
//! spooled to a uniquely named temporary file for the duration of extraction;
//! dropping the handle removes the file on every exit path, extraction
//! failure included.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("I/O error while spooling upload: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not extract text from PDF: {0}")]
    Pdf(#[from] pdf_extract::OutputError),

    #[error("could not extract text from DOCX: {0}")]
    Docx(String),
}

/// Supported upload types, selected by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Case-insensitive extension match. Anything that is not `.pdf` or
    /// `.docx` is unsupported and must be rejected before extraction runs.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let ext = Path::new(filename).extension()?.to_str()?;
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "docx" => Some(DocumentKind::Docx),
            _ => None,
        }
    }
}

/// Extracts the full plain text of one uploaded document.
///
/// A corrupt or unreadable document is a recoverable `ExtractError`, never a
/// panic; the caller decides how to surface it.
pub fn extract_resume(kind: DocumentKind, data: &[u8]) -> Result<String, ExtractError> {
    let mut spool = NamedTempFile::new()?;
    spool.write_all(data)?;
    spool.flush()?;

    match kind {
        DocumentKind::Pdf => extract_pdf(spool.path()),
        DocumentKind::Docx => extract_docx(spool.path()),
    }
}

fn extract_pdf(path: &Path) -> Result<String, ExtractError> {
    Ok(pdf_extract::extract_text(path)?)
}

/// Concatenates paragraph run texts in document order, one line per paragraph.
fn extract_docx(path: &Path) -> Result<String, ExtractError> {
    let data = std::fs::read(path)?;
    let docx = docx_rs::read_docx(&data).map_err(|e| ExtractError::Docx(e.to_string()))?;

    let mut text = String::new();
    for child in docx.document.children {
        if let docx_rs::DocumentChild::Paragraph(paragraph) = child {
            for paragraph_child in paragraph.children {
                if let docx_rs::ParagraphChild::Run(run) = paragraph_child {
                    for run_child in run.children {
                        if let docx_rs::RunChild::Text(t) = run_child {
                            text.push_str(&t.text);
                        }
                    }
                }
            }
            text.push('\n');
        }
    }
    Ok(text)
}

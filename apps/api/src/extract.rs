//! Resume text extraction for the upload formats the analyzer accepts.
//!
//! Extraction is synchronous and CPU-bound; callers on the async runtime
//! wrap it in `spawn_blocking`.

use std::path::Path;

use docx_rs::{DocumentChild, ParagraphChild, RunChild};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to read uploaded file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to extract text from PDF: {0}")]
    Pdf(String),

    #[error("failed to parse DOCX document: {0}")]
    Docx(String),

    #[error("uploaded file is not valid UTF-8 text")]
    InvalidUtf8,

    #[error("no text content found in the uploaded file")]
    Empty,
}

/// Media types accepted for resume upload, dispatched on the declared
/// multipart content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Pdf,
    Docx,
    PlainText,
}

impl MediaType {
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        match content_type {
            "application/pdf" => Some(Self::Pdf),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
                Some(Self::Docx)
            }
            "text/plain" => Some(Self::PlainText),
            _ => None,
        }
    }
}

/// Extracts the resume text from the file at `path`.
/// Whitespace-only output counts as a failed extraction.
pub fn resume_text(media: MediaType, path: &Path) -> Result<String, ExtractError> {
    let text = match media {
        MediaType::Pdf => pdf_text(path)?,
        MediaType::Docx => docx_text(path)?,
        MediaType::PlainText => plain_text(path)?,
    };

    if text.trim().is_empty() {
        return Err(ExtractError::Empty);
    }
    Ok(text)
}

/// Whole-document text, page texts concatenated by the library.
fn pdf_text(path: &Path) -> Result<String, ExtractError> {
    pdf_extract::extract_text(path).map_err(|e| ExtractError::Pdf(e.to_string()))
}

/// Paragraph texts joined with newlines. Tables and headers are skipped;
/// hyperlink text (common in resumes) is kept.
fn docx_text(path: &Path) -> Result<String, ExtractError> {
    let bytes = std::fs::read(path)?;
    let docx = docx_rs::read_docx(&bytes).map_err(|e| ExtractError::Docx(e.to_string()))?;

    let mut paragraphs: Vec<String> = Vec::new();
    for child in docx.document.children {
        if let DocumentChild::Paragraph(p) = child {
            let text = paragraph_text(&p);
            if !text.trim().is_empty() {
                paragraphs.push(text);
            }
        }
    }

    Ok(paragraphs.join("\n"))
}

fn paragraph_text(p: &docx_rs::Paragraph) -> String {
    let mut text = String::new();

    for child in &p.children {
        match child {
            ParagraphChild::Run(r) => {
                for run_child in &r.children {
                    match run_child {
                        RunChild::Text(t) => text.push_str(&t.text),
                        RunChild::Tab(_) => text.push('\t'),
                        RunChild::Break(_) => text.push('\n'),
                        _ => {}
                    }
                }
            }
            ParagraphChild::Hyperlink(h) => {
                for child in &h.children {
                    if let ParagraphChild::Run(r) = child {
                        for run_child in &r.children {
                            if let RunChild::Text(t) = run_child {
                                text.push_str(&t.text);
                            }
                        }
                    }
                }
            }
            _ => {}
        }
    }

    text
}

fn plain_text(path: &Path) -> Result<String, ExtractError> {
    let bytes = std::fs::read(path)?;
    String::from_utf8(bytes).map_err(|_| ExtractError::InvalidUtf8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_file_with(bytes: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(bytes).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_media_type_dispatch() {
        assert_eq!(
            MediaType::from_content_type("application/pdf"),
            Some(MediaType::Pdf)
        );
        assert_eq!(
            MediaType::from_content_type(
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            ),
            Some(MediaType::Docx)
        );
        assert_eq!(
            MediaType::from_content_type("text/plain"),
            Some(MediaType::PlainText)
        );
        assert_eq!(MediaType::from_content_type("image/png"), None);
        assert_eq!(MediaType::from_content_type(""), None);
    }

    #[test]
    fn test_plain_text_roundtrip() {
        let file = temp_file_with("Experienced Python developer\n".as_bytes());
        let text = resume_text(MediaType::PlainText, file.path()).unwrap();
        assert_eq!(text, "Experienced Python developer\n");
    }

    #[test]
    fn test_plain_text_rejects_invalid_utf8() {
        let file = temp_file_with(&[0xff, 0xfe, 0x41]);
        let result = resume_text(MediaType::PlainText, file.path());
        assert!(matches!(result, Err(ExtractError::InvalidUtf8)));
    }

    #[test]
    fn test_whitespace_only_extraction_fails() {
        let file = temp_file_with(b"   \n\t  ");
        let result = resume_text(MediaType::PlainText, file.path());
        assert!(matches!(result, Err(ExtractError::Empty)));
    }

    #[test]
    fn test_garbage_docx_fails() {
        let file = temp_file_with(b"this is not a zip archive");
        let result = resume_text(MediaType::Docx, file.path());
        assert!(matches!(result, Err(ExtractError::Docx(_))));
    }
}

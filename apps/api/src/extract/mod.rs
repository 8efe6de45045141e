//! Document-text provider — thin wrappers around format-specific readers.
//! The parsing pipeline treats extracted text as opaque input.

use std::path::Path;

use crate::errors::AppError;

/// Declared document format for a parse request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
    Text,
}

impl DocumentKind {
    /// Maps a declared type string (or file extension) to a kind.
    /// Unknown types are read as plain text.
    pub fn from_label(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "pdf" => DocumentKind::Pdf,
            "docx" | "doc" => DocumentKind::Docx,
            _ => DocumentKind::Text,
        }
    }
}

/// Extracts raw text from a document on disk.
///
/// Fails with `AppError::Extraction` when the file is unreadable, the format
/// is unsupported, or extraction yields no text at all.
pub fn extract_text(path: &Path, kind: DocumentKind) -> Result<String, AppError> {
    let text = match kind {
        DocumentKind::Pdf => pdf_extract::extract_text(path).map_err(|e| {
            AppError::Extraction(format!(
                "Failed to extract text from PDF '{}': {e}",
                path.display()
            ))
        })?,
        DocumentKind::Docx => {
            return Err(AppError::Extraction(
                "DOCX extraction is not supported by this build".to_string(),
            ))
        }
        DocumentKind::Text => std::fs::read_to_string(path).map_err(|e| {
            AppError::Extraction(format!("Failed to read '{}': {e}", path.display()))
        })?,
    };

    if text.trim().is_empty() {
        return Err(AppError::Extraction(format!(
            "No text could be extracted from '{}'",
            path.display()
        )));
    }
    Ok(text)
}

/// Extracts raw text from an in-memory document, for uploaded files that
/// never touch disk.
pub fn extract_text_from_bytes(bytes: &[u8], kind: DocumentKind) -> Result<String, AppError> {
    let text = match kind {
        DocumentKind::Pdf => pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| AppError::Extraction(format!("Failed to extract text from PDF: {e}")))?,
        DocumentKind::Docx => {
            return Err(AppError::Extraction(
                "DOCX extraction is not supported by this build".to_string(),
            ))
        }
        DocumentKind::Text => String::from_utf8_lossy(bytes).into_owned(),
    };

    if text.trim().is_empty() {
        return Err(AppError::Extraction(
            "No text could be extracted from the uploaded document".to_string(),
        ));
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_kind_from_label() {
        assert_eq!(DocumentKind::from_label("PDF"), DocumentKind::Pdf);
        assert_eq!(DocumentKind::from_label("docx"), DocumentKind::Docx);
        assert_eq!(DocumentKind::from_label("txt"), DocumentKind::Text);
        assert_eq!(DocumentKind::from_label(""), DocumentKind::Text);
    }

    #[test]
    fn test_plain_text_extraction() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Jane Smith\njane@example.org").unwrap();
        let text = extract_text(file.path(), DocumentKind::Text).unwrap();
        assert!(text.contains("Jane Smith"));
    }

    #[test]
    fn test_empty_file_is_extraction_error() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = extract_text(file.path(), DocumentKind::Text).unwrap_err();
        assert!(matches!(err, AppError::Extraction(_)));
    }

    #[test]
    fn test_bytes_extraction_plain_text() {
        let text = extract_text_from_bytes(b"Jane Smith\njane@example.org", DocumentKind::Text)
            .unwrap();
        assert!(text.contains("Jane Smith"));
    }

    #[test]
    fn test_bytes_extraction_empty_is_error() {
        let err = extract_text_from_bytes(b"  \n ", DocumentKind::Text).unwrap_err();
        assert!(matches!(err, AppError::Extraction(_)));
    }

    #[test]
    fn test_docx_is_unsupported() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = extract_text(file.path(), DocumentKind::Docx).unwrap_err();
        assert!(matches!(err, AppError::Extraction(_)));
    }
}

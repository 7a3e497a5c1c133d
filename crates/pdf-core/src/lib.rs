//! PDF Core - Low-level PDF writing
//!
//! This crate provides functionality for:
//! - Creating blank single-size PDF documents
//! - Drawing text with the standard (base-14) fonts or embedded TrueType fonts
//! - Setting document information metadata
//! - Serializing the document to bytes
//!
//! # Example
//!
//! ```ignore
//! use pdf_core::{PageSize, PdfDocument, StandardFont};
//!
//! let mut doc = PdfDocument::new(PageSize::LETTER);
//! doc.set_font(StandardFont::HelveticaBold, 24.0);
//! doc.insert_text("Hello, World!", 1, 20.0, 40.0)?;
//! let bytes = doc.to_bytes()?;
//! ```

mod document;
mod font;
mod text;

pub use document::{Color, DocumentInfo, PageSize, PdfDocument};
pub use font::{encode_win_ansi, EmbeddedFont, EncodedText, Font, FontId, StandardFont};
pub use text::{encode_hex, generate_text_operators, TextRenderContext};

use thiserror::Error;

/// Errors that can occur during PDF operations
#[derive(Debug, Error)]
pub enum PdfError {
    #[error("Failed to save PDF: {0}")]
    SaveError(String),

    #[error("Invalid page number: {0} (document has {1} pages)")]
    InvalidPage(usize, usize),

    #[error("Failed to parse font: {0}")]
    FontParseError(String),

    #[error("Font not found: {0}")]
    FontNotFound(String),

    #[error("PDF structure error: {0}")]
    StructureError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Lopdf error: {0}")]
    LopdfError(#[from] lopdf::Error),
}

/// Result type for PDF operations
pub type Result<T> = std::result::Result<T, PdfError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_page_message() {
        let err = PdfError::InvalidPage(3, 1);
        assert_eq!(
            err.to_string(),
            "Invalid page number: 3 (document has 1 pages)"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let err: PdfError = io.into();
        assert!(matches!(err, PdfError::IoError(_)));
    }
}

//! Resume - data model and single-page PDF rendering
//!
//! This crate provides:
//! - The resume data model with stable per-entry identities
//! - A field-binding API for form hosts
//! - Fixed vertical-flow layout of the resume on one page
//! - PDF rendering and export to a temporary file for sharing
//!
//! # Example
//!
//! ```ignore
//! use resume::{export_to_temp, Resume};
//!
//! let mut resume = Resume::new();
//! resume.full_name = "Jane Doe".to_string();
//! resume.push_skill("Rust");
//!
//! if let Some(path) = export_to_temp(&resume) {
//!     println!("Share {}", path.display());
//! }
//! ```

pub mod export;
pub mod fields;
pub mod layout;
pub mod model;
mod renderer;

pub use export::{
    export, export_to_temp, try_export, ExportConfig, DEFAULT_FILE_NAME, PDF_MIME_TYPE,
};
pub use fields::{EducationField, ExperienceField, KeyboardHint, PersonalField};
pub use layout::{layout_resume, LayoutLine, TextStyle};
pub use model::{Education, EntryId, Experience, Resume};
pub use renderer::{render_pdf, RenderOptions, ResumeRenderer};

use thiserror::Error;

/// Errors that can occur while rendering or exporting a resume
#[derive(Debug, Error)]
pub enum ResumeError {
    #[error("PDF error: {0}")]
    Pdf(#[from] pdf_core::PdfError),

    #[error("Failed to write PDF file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for resume operations
pub type Result<T> = std::result::Result<T, ResumeError>;

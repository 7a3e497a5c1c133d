//! Export of the rendered resume to a temporary file for sharing

use crate::model::Resume;
use crate::renderer::{RenderOptions, ResumeRenderer};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// File name every export writes to
pub const DEFAULT_FILE_NAME: &str = "Resume.pdf";

/// MIME type of the exported document
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// Where and how an export is written
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExportConfig {
    /// Output directory, the OS temp directory by default
    pub directory: PathBuf,
    /// Output file name, overwritten on every export
    pub file_name: String,
    pub render: RenderOptions,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: std::env::temp_dir(),
            file_name: DEFAULT_FILE_NAME.to_string(),
            render: RenderOptions::default(),
        }
    }
}

impl ExportConfig {
    /// Default configuration writing into `directory`
    pub fn in_directory(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            ..Self::default()
        }
    }

    /// Parse a configuration from JSON; missing keys take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn output_path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }
}

/// Render the resume and write it to the configured path
///
/// Any prior file at that path is overwritten.
pub fn try_export(resume: &Resume, config: &ExportConfig) -> Result<PathBuf> {
    let bytes = ResumeRenderer::with_options(config.render.clone()).render(resume)?;

    let path = config.output_path();
    std::fs::write(&path, &bytes)?;
    log::debug!("Wrote {} bytes to {}", bytes.len(), path.display());

    Ok(path)
}

/// Export the resume, returning the file path to share
///
/// Failures are logged and reported only as `None`.
pub fn export(resume: &Resume, config: &ExportConfig) -> Option<PathBuf> {
    match try_export(resume, config) {
        Ok(path) => {
            log::info!("Exported resume to {}", path.display());
            Some(path)
        }
        Err(e) => {
            log::error!("Could not save PDF file: {e}");
            None
        }
    }
}

/// Export with the default configuration (temp directory, `Resume.pdf`)
pub fn export_to_temp(resume: &Resume) -> Option<PathBuf> {
    export(resume, &ExportConfig::default())
}

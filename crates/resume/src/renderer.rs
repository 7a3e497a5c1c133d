//! Resume rendering

use crate::layout::{layout_resume, LayoutLine, TextStyle};
use crate::model::Resume;
use crate::Result;
use pdf_core::{DocumentInfo, EmbeddedFont, Font, PageSize, PdfDocument, StandardFont};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CREATOR: &str = "Smart Resume Builder";

/// Options applied to every rendered document
///
/// The page is always US Letter. Without a `font`, text is drawn in
/// Helvetica, which only covers WinAnsi (Latin-1 plus a few extras).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderOptions {
    /// Value of the document's `Creator` entry
    pub creator: String,
    /// TrueType font embedded for body and subtitle text
    pub font: Option<PathBuf>,
    /// TrueType font embedded for the title, `font` when unset
    pub bold_font: Option<PathBuf>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            creator: DEFAULT_CREATOR.to_string(),
            font: None,
            bold_font: None,
        }
    }
}

/// Fonts resolved for one document
#[derive(Debug, Clone, Copy)]
struct StyleFonts {
    regular: Font,
    bold: Font,
}

impl StyleFonts {
    fn for_style(&self, style: TextStyle) -> Font {
        match style.font() {
            StandardFont::HelveticaBold => self.bold,
            StandardFont::Helvetica => self.regular,
        }
    }
}

fn load_font(doc: &mut PdfDocument, path: &Path) -> Result<Font> {
    let data = std::fs::read(path)?;
    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let font = EmbeddedFont::from_ttf(&name, data)?;
    log::debug!("Embedding font {} from {}", font.name(), path.display());
    Ok(doc.add_font(font).into())
}

/// Resume renderer
pub struct ResumeRenderer {
    options: RenderOptions,
}

impl ResumeRenderer {
    pub fn new() -> Self {
        Self::with_options(RenderOptions::default())
    }

    pub fn with_options(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render the resume to PDF bytes
    pub fn render(&self, resume: &Resume) -> Result<Vec<u8>> {
        let mut doc = PdfDocument::new(PageSize::LETTER);
        let fonts = self.load_fonts(&mut doc)?;
        doc.set_info(DocumentInfo {
            author: Some(resume.full_name.clone()),
            creator: Some(self.options.creator.clone()),
        });

        let lines = layout_resume(resume);
        log::debug!(
            "Laid out {} lines for resume {}, last at y={}",
            lines.len(),
            resume.id,
            lines.last().map(|l| l.y).unwrap_or_default()
        );

        for line in &lines {
            self.draw_line(&mut doc, fonts, line)?;
        }

        let substituted = doc.substituted_chars();
        if !substituted.is_empty() {
            log::warn!(
                "Resume {} has characters the font cannot show: {:?}",
                resume.id,
                substituted
            );
        }

        Ok(doc.to_bytes()?)
    }

    /// Embed the configured fonts, falling back to Helvetica
    fn load_fonts(&self, doc: &mut PdfDocument) -> Result<StyleFonts> {
        let regular = match &self.options.font {
            Some(path) => load_font(doc, path)?,
            None => StandardFont::Helvetica.into(),
        };
        let bold = match &self.options.bold_font {
            Some(path) => load_font(doc, path)?,
            None if self.options.font.is_some() => regular,
            None => StandardFont::HelveticaBold.into(),
        };

        Ok(StyleFonts { regular, bold })
    }

    /// Draw a line with its top edge at the layout position
    fn draw_line(&self, doc: &mut PdfDocument, fonts: StyleFonts, line: &LayoutLine) -> Result<()> {
        let font = fonts.for_style(line.style);
        let size = line.style.size();
        let baseline = line.y + size as f64 * doc.font_ascent(font)?;

        doc.set_font(font, size);
        doc.insert_text(&line.text, 1, line.x, baseline)?;
        Ok(())
    }
}

impl Default for ResumeRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the resume with default options
pub fn render_pdf(resume: &Resume) -> Result<Vec<u8>> {
    ResumeRenderer::new().render(resume)
}

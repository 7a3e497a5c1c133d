//! PDF Document wrapper

use crate::font::{EmbeddedFont, EncodedText, Font, FontId};
use crate::text::{encode_hex, generate_text_operators, TextRenderContext};
use crate::{PdfError, Result};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream, StringFormat};
use std::collections::{BTreeSet, HashMap};

/// RGB Color (values 0.0 - 1.0)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    /// Create a new RGB color (values 0.0 - 1.0)
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Black color
    pub fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

/// Page dimensions in points (1/72 inch)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width: f64,
    pub height: f64,
}

impl PageSize {
    /// US Letter, 8.5in x 11in
    pub const LETTER: PageSize = PageSize {
        width: 612.0,
        height: 792.0,
    };
}

impl Default for PageSize {
    fn default() -> Self {
        Self::LETTER
    }
}

/// Document information dictionary entries
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentInfo {
    pub author: Option<String>,
    pub creator: Option<String>,
}

impl DocumentInfo {
    fn to_dictionary(&self) -> Option<Dictionary> {
        let mut dict = Dictionary::new();
        if let Some(ref author) = self.author {
            dict.set("Author", text_string(author));
        }
        if let Some(ref creator) = self.creator {
            dict.set("Creator", text_string(creator));
        }

        if dict.is_empty() {
            None
        } else {
            Some(dict)
        }
    }
}

/// Encode a PDF text string: literal for ASCII, UTF-16BE with BOM otherwise
fn text_string(value: &str) -> Object {
    if value.is_ascii() {
        return Object::String(value.as_bytes().to_vec(), StringFormat::Literal);
    }

    let mut bytes = vec![0xFE, 0xFF];
    for unit in value.encode_utf16() {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    Object::String(bytes, StringFormat::Hexadecimal)
}

/// Whole numbers are written as integers, everything else as reals
fn number(value: f64) -> Object {
    if value.fract() == 0.0 {
        Object::Integer(value as i64)
    } else {
        Object::Real(value as f32)
    }
}

/// Round a coordinate to 1/1000 point so operators stay short
fn round_coord(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// A page created by this document
struct Page {
    id: ObjectId,
    contents_id: ObjectId,
}

/// Object ids reserved for an embedded font, filled in on every save
struct EmbeddedSlot {
    type0: ObjectId,
    cid_font: ObjectId,
    descriptor: ObjectId,
    font_file: ObjectId,
    to_unicode: ObjectId,
}

/// PDF Document wrapper providing high-level operations
pub struct PdfDocument {
    /// The underlying lopdf document
    inner: Document,
    /// Pages in order (index 0 is page 1)
    pages: Vec<Page>,
    /// Size shared by every page
    page_size: PageSize,
    /// Document information (written on save)
    info: DocumentInfo,
    /// Info dictionary object, allocated on first save
    info_id: Option<ObjectId>,
    /// Current font
    current_font: Font,
    /// Current font size
    current_font_size: f32,
    /// Fonts added with `add_font`, indexed by `FontId`
    embedded_fonts: Vec<EmbeddedFont>,
    /// Reserved objects of the embedded fonts in use
    embedded_slots: HashMap<FontId, EmbeddedSlot>,
    /// Font dictionaries (font -> PDF object ID)
    font_objects: HashMap<Font, ObjectId>,
    /// Page font resources (page number -> font -> resource name)
    page_font_resources: HashMap<usize, HashMap<Font, String>>,
    /// Characters drawn that the selected font could not show
    substituted: BTreeSet<char>,
    /// Next font resource number
    next_font_resource: u32,
    /// Buffered content operators per page (page number -> operators)
    page_content_buffer: HashMap<usize, Vec<u8>>,
}

impl PdfDocument {
    /// Create a new document with a single blank page
    ///
    /// # Example
    /// ```ignore
    /// let doc = PdfDocument::new(PageSize::LETTER);
    /// assert_eq!(doc.page_count(), 1);
    /// ```
    pub fn new(page_size: PageSize) -> Self {
        let mut inner = Document::with_version("1.5");
        let pages_id = inner.new_object_id();

        let contents_id = inner.add_object(Stream::new(Dictionary::new(), Vec::new()));
        let page_id = inner.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![
                0.into(),
                0.into(),
                number(page_size.width),
                number(page_size.height),
            ],
            "Resources" => Dictionary::new(),
            "Contents" => contents_id,
        });

        inner.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![Object::Reference(page_id)],
                "Count" => 1,
            }),
        );

        let catalog_id = inner.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        inner.trailer.set("Root", catalog_id);

        Self {
            inner,
            pages: vec![Page {
                id: page_id,
                contents_id,
            }],
            page_size,
            info: DocumentInfo::default(),
            info_id: None,
            current_font: Font::default(),
            current_font_size: 12.0,
            embedded_fonts: Vec::new(),
            embedded_slots: HashMap::new(),
            font_objects: HashMap::new(),
            page_font_resources: HashMap::new(),
            substituted: BTreeSet::new(),
            next_font_resource: 1,
            page_content_buffer: HashMap::new(),
        }
    }

    /// Get the number of pages in the document
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Set the document information written on save
    pub fn set_info(&mut self, info: DocumentInfo) {
        self.info = info;
    }

    /// Add a TrueType font; it is embedded on save if any page uses it
    pub fn add_font(&mut self, font: EmbeddedFont) -> FontId {
        self.embedded_fonts.push(font);
        FontId(self.embedded_fonts.len() - 1)
    }

    /// Set current font and size for subsequent text insertions
    pub fn set_font(&mut self, font: impl Into<Font>, size: f32) {
        self.current_font = font.into();
        self.current_font_size = size;
    }

    /// Ascender height of a font as a fraction of the font size
    pub fn font_ascent(&self, font: impl Into<Font>) -> Result<f64> {
        match font.into() {
            Font::Standard(font) => Ok(font.ascent()),
            Font::Embedded(id) => Ok(self.embedded_font(id)?.ascent()),
        }
    }

    /// Characters drawn so far that were replaced because the font lacks them
    pub fn substituted_chars(&self) -> Vec<char> {
        self.substituted.iter().copied().collect()
    }

    /// Insert text at a specific position
    ///
    /// The text is drawn exactly as given, including empty strings. Characters
    /// the current font cannot show are replaced (`?` for standard fonts,
    /// `.notdef` for embedded ones) and logged as a warning.
    ///
    /// # Arguments
    /// * `text` - Text to insert
    /// * `page` - Page number (1-indexed)
    /// * `x` - X coordinate in points
    /// * `y` - Baseline Y coordinate in points (from top)
    pub fn insert_text(&mut self, text: &str, page: usize, x: f64, y: f64) -> Result<()> {
        let page_count = self.page_count();
        if page == 0 || page > page_count {
            return Err(PdfError::InvalidPage(page, page_count));
        }

        // Convert Y coordinate from top-origin to PDF bottom-origin
        let pdf_y = round_coord(self.page_size.height - y);

        let font = self.current_font;
        let encoded = self.encode_text(font, text)?;
        if !encoded.missing.is_empty() {
            log::warn!(
                "{} character(s) of {:?} not available in {}, substituted: {:?}",
                encoded.missing.len(),
                text,
                self.font_name(font),
                encoded.missing
            );
            self.substituted.extend(encoded.missing.iter().copied());
        }

        let font_resource_name = self.get_or_create_font_ref(font, page)?;
        let text_hex = encode_hex(&encoded.bytes);
        let ctx = TextRenderContext {
            font_name: font_resource_name,
            font_size: self.current_font_size,
            color: Color::black(),
        };

        let ops = generate_text_operators(&text_hex, round_coord(x), pdf_y, &ctx);
        self.buffer_content(page, &ops);

        Ok(())
    }

    fn embedded_font(&self, id: FontId) -> Result<&EmbeddedFont> {
        self.embedded_fonts
            .get(id.0)
            .ok_or_else(|| PdfError::FontNotFound(format!("embedded font #{}", id.0)))
    }

    fn font_name(&self, font: Font) -> &str {
        match font {
            Font::Standard(font) => font.base_font(),
            Font::Embedded(id) => self
                .embedded_fonts
                .get(id.0)
                .map(|f| f.name())
                .unwrap_or("embedded font"),
        }
    }

    fn encode_text(&mut self, font: Font, text: &str) -> Result<EncodedText> {
        match font {
            Font::Standard(font) => Ok(font.encode(text)),
            Font::Embedded(id) => self
                .embedded_fonts
                .get_mut(id.0)
                .ok_or_else(|| PdfError::FontNotFound(format!("embedded font #{}", id.0)))?
                .encode(text),
        }
    }

    /// Get or create the resource name of a font on a page
    ///
    /// Returns the resource name (e.g., "F1", "F2") for use in content streams
    pub fn get_or_create_font_ref(&mut self, font: impl Into<Font>, page: usize) -> Result<String> {
        let font = font.into();
        if let Some(name) = self
            .page_font_resources
            .get(&page)
            .and_then(|resources| resources.get(&font))
        {
            return Ok(name.clone());
        }

        if !self.font_objects.contains_key(&font) {
            let font_id = match font {
                Font::Standard(standard) => self.inner.add_object(standard.to_dictionary()),
                // Embedded fonts are written at save time, once every glyph is known
                Font::Embedded(id) => {
                    self.embedded_font(id)?;
                    let slot = EmbeddedSlot {
                        type0: self.inner.new_object_id(),
                        cid_font: self.inner.new_object_id(),
                        descriptor: self.inner.new_object_id(),
                        font_file: self.inner.new_object_id(),
                        to_unicode: self.inner.new_object_id(),
                    };
                    let type0 = slot.type0;
                    self.embedded_slots.insert(id, slot);
                    type0
                }
            };
            self.font_objects.insert(font, font_id);
        }

        let name = format!("F{}", self.next_font_resource);
        self.next_font_resource += 1;
        self.page_font_resources
            .entry(page)
            .or_default()
            .insert(font, name.clone());
        Ok(name)
    }

    /// Get a reference to the underlying lopdf document
    pub fn inner(&self) -> &Document {
        &self.inner
    }

    /// Save the document to bytes
    pub fn to_bytes(&mut self) -> Result<Vec<u8>> {
        // 1. Flush buffered content streams to pages
        self.flush_content_buffers()?;

        // 2. Embed fonts with every glyph drawn so far
        self.embed_fonts()?;

        // 3. Attach font resources to pages
        self.finalize_page_font_resources()?;

        // 4. Write the info dictionary
        self.write_info();

        let mut buffer = Vec::new();
        self.inner
            .save_to(&mut buffer)
            .map_err(|e| PdfError::SaveError(e.to_string()))?;

        Ok(buffer)
    }

    /// Buffer content operators for a page (written at save time)
    fn buffer_content(&mut self, page: usize, content: &[u8]) {
        self.page_content_buffer
            .entry(page)
            .or_default()
            .extend_from_slice(content);
    }

    /// Append all buffered content to the page content streams
    fn flush_content_buffers(&mut self) -> Result<()> {
        let buffers: Vec<(usize, Vec<u8>)> = self.page_content_buffer.drain().collect();

        for (page, content) in buffers {
            let contents_id = self
                .pages
                .get(page - 1)
                .map(|p| p.contents_id)
                .ok_or(PdfError::InvalidPage(page, self.pages.len()))?;

            let stream = self
                .inner
                .get_object_mut(contents_id)?
                .as_stream_mut()
                .map_err(|_| {
                    PdfError::StructureError("Page contents is not a stream".to_string())
                })?;

            let mut combined = stream.content.clone();
            combined.extend_from_slice(&content);
            stream.set_content(combined);
        }

        Ok(())
    }

    /// Write the objects of every embedded font in use into their slots
    fn embed_fonts(&mut self) -> Result<()> {
        for (id, slot) in &self.embedded_slots {
            let font = self
                .embedded_fonts
                .get(id.0)
                .ok_or_else(|| PdfError::FontNotFound(format!("embedded font #{}", id.0)))?;
            let objects = font.to_pdf_objects();

            let mut font_descriptor = objects.font_descriptor;
            font_descriptor.set("FontFile2", Object::Reference(slot.font_file));

            let mut cid_font = objects.cid_font;
            cid_font.set("FontDescriptor", Object::Reference(slot.descriptor));

            let mut type0_font = objects.type0_font;
            type0_font.set(
                "DescendantFonts",
                Object::Array(vec![Object::Reference(slot.cid_font)]),
            );
            type0_font.set("ToUnicode", Object::Reference(slot.to_unicode));

            let objs = &mut self.inner.objects;
            objs.insert(slot.font_file, Object::Stream(objects.font_file_stream));
            objs.insert(slot.to_unicode, Object::Stream(objects.tounicode_stream));
            objs.insert(slot.descriptor, Object::Dictionary(font_descriptor));
            objs.insert(slot.cid_font, Object::Dictionary(cid_font));
            objs.insert(slot.type0, Object::Dictionary(type0_font));
        }

        Ok(())
    }

    /// Write each page's Font resource dictionary
    fn finalize_page_font_resources(&mut self) -> Result<()> {
        for (index, page) in self.pages.iter().enumerate() {
            let Some(resources) = self.page_font_resources.get(&(index + 1)) else {
                continue;
            };

            let mut entries: Vec<(&String, ObjectId)> = resources
                .iter()
                .filter_map(|(font, name)| self.font_objects.get(font).map(|id| (name, *id)))
                .collect();
            entries.sort();

            let mut font_dict = Dictionary::new();
            for (name, font_id) in entries {
                font_dict.set(name.as_bytes(), Object::Reference(font_id));
            }

            let page_dict = self
                .inner
                .get_object_mut(page.id)?
                .as_dict_mut()
                .map_err(|_| {
                    PdfError::StructureError("Page object is not a dictionary".to_string())
                })?;
            page_dict.set("Resources", dictionary! { "Font" => font_dict });
        }

        Ok(())
    }

    /// Write the info dictionary and link it from the trailer
    fn write_info(&mut self) {
        let Some(dict) = self.info.to_dictionary() else {
            return;
        };

        let info_id = *self
            .info_id
            .get_or_insert_with(|| self.inner.new_object_id());
        self.inner.objects.insert(info_id, Object::Dictionary(dict));
        self.inner.trailer.set("Info", info_id);
    }
}

//! Font handling for PDF documents
//!
//! Two kinds of fonts are supported: the base-14 Helvetica fonts, which every
//! viewer provides and which only cover WinAnsi, and TrueType fonts embedded
//! as Type0/Identity-H composite fonts, which cover whatever the font file has
//! glyphs for.

use crate::{PdfError, Result};
use lopdf::{dictionary, Dictionary, Object, Stream};
use std::collections::BTreeMap;

/// One of the base-14 fonts every PDF viewer provides
///
/// Standard fonts are referenced by name only, so nothing is embedded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StandardFont {
    #[default]
    Helvetica,
    HelveticaBold,
}

impl StandardFont {
    /// PostScript name used as the font's `BaseFont`
    pub fn base_font(&self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
        }
    }

    /// Ascender height as a fraction of the font size (AFM units / 1000)
    pub fn ascent(&self) -> f64 {
        0.718
    }

    /// Encode text as WinAnsi bytes, collecting the characters replaced by `?`
    pub fn encode(&self, text: &str) -> EncodedText {
        EncodedText {
            bytes: encode_win_ansi(text),
            missing: text
                .chars()
                .filter(|&c| win_ansi_code(c).is_none())
                .collect(),
        }
    }

    /// Build the Type1 font dictionary for this font
    pub(crate) fn to_dictionary(self) -> Dictionary {
        dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => self.base_font(),
            "Encoding" => "WinAnsiEncoding",
        }
    }
}

/// Handle to a font embedded in a [`crate::PdfDocument`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontId(pub(crate) usize);

/// Font selected for drawing text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Font {
    Standard(StandardFont),
    Embedded(FontId),
}

impl Default for Font {
    fn default() -> Self {
        Font::Standard(StandardFont::default())
    }
}

impl From<StandardFont> for Font {
    fn from(font: StandardFont) -> Self {
        Font::Standard(font)
    }
}

impl From<FontId> for Font {
    fn from(id: FontId) -> Self {
        Font::Embedded(id)
    }
}

/// Text encoded for a `Tj` operand
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedText {
    /// Bytes of the string operand
    pub bytes: Vec<u8>,
    /// Characters the font cannot show, in order of appearance
    pub missing: Vec<char>,
}

/// Encode text to WinAnsi bytes for use with a standard font
///
/// Characters without a WinAnsi code point are replaced with `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| win_ansi_code(c).unwrap_or(b'?'))
        .collect()
}

fn win_ansi_code(ch: char) -> Option<u8> {
    let code = match ch {
        '\u{0000}'..='\u{007F}' => ch as u8,
        '\u{00A0}'..='\u{00FF}' => ch as u8,
        '€' => 0x80,
        '‚' => 0x82,
        'ƒ' => 0x83,
        '„' => 0x84,
        '…' => 0x85,
        '†' => 0x86,
        '‡' => 0x87,
        'ˆ' => 0x88,
        '‰' => 0x89,
        'Š' => 0x8A,
        '‹' => 0x8B,
        'Œ' => 0x8C,
        'Ž' => 0x8E,
        '\u{2018}' => 0x91,
        '\u{2019}' => 0x92,
        '\u{201C}' => 0x93,
        '\u{201D}' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '˜' => 0x98,
        '™' => 0x99,
        'š' => 0x9A,
        '›' => 0x9B,
        'œ' => 0x9C,
        'ž' => 0x9E,
        'Ÿ' => 0x9F,
        _ => return None,
    };
    Some(code)
}

/// Glyph of a character drawn with an embedded font
#[derive(Debug, Clone, Copy, PartialEq)]
struct Glyph {
    id: u16,
    advance: u16,
}

/// A TrueType font embedded whole into the document
///
/// Text is written as big-endian glyph ids (Identity-H). Every character drawn
/// is recorded so the widths array and the ToUnicode map cover it.
#[derive(Debug, Clone)]
pub struct EmbeddedFont {
    name: String,
    ttf_data: Vec<u8>,
    units_per_em: u16,
    ascender: i16,
    descender: i16,
    cap_height: i16,
    bbox: [i16; 4],
    glyphs: BTreeMap<char, Glyph>,
}

/// PDF objects of one embedded font, linked together when added to a document
pub(crate) struct FontObjects {
    pub type0_font: Dictionary,
    pub cid_font: Dictionary,
    pub font_descriptor: Dictionary,
    pub font_file_stream: Stream,
    pub tounicode_stream: Stream,
}

impl EmbeddedFont {
    /// Create font data from TTF bytes
    ///
    /// # Arguments
    /// * `name` - Font identifier, used as the `BaseFont` name
    /// * `ttf_data` - TrueType font file bytes
    pub fn from_ttf(name: &str, ttf_data: Vec<u8>) -> Result<Self> {
        let face = ttf_parser::Face::parse(&ttf_data, 0)
            .map_err(|e| PdfError::FontParseError(e.to_string()))?;

        let bbox = face.global_bounding_box();
        let units_per_em = face.units_per_em();
        let ascender = face.ascender();
        let descender = face.descender();
        let cap_height = face.capital_height().unwrap_or(ascender);

        let mut base_name: String = name
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
            .collect();
        if base_name.is_empty() {
            base_name = "EmbeddedFont".to_string();
        }

        Ok(Self {
            name: base_name,
            ttf_data,
            units_per_em,
            ascender,
            descender,
            cap_height,
            bbox: [bbox.x_min, bbox.y_min, bbox.x_max, bbox.y_max],
            glyphs: BTreeMap::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ascender height as a fraction of the font size
    pub fn ascent(&self) -> f64 {
        self.ascender as f64 / self.units_per_em as f64
    }

    /// Encode text as glyph ids and record the glyphs for embedding
    ///
    /// Characters without a glyph are drawn as glyph 0 (`.notdef`).
    pub fn encode(&mut self, text: &str) -> Result<EncodedText> {
        let face = ttf_parser::Face::parse(&self.ttf_data, 0)
            .map_err(|e| PdfError::FontParseError(e.to_string()))?;

        let mut bytes = Vec::with_capacity(text.len() * 2);
        let mut missing = Vec::new();
        for c in text.chars() {
            match face.glyph_index(c).filter(|id| id.0 != 0) {
                Some(id) => {
                    let advance = face.glyph_hor_advance(id).unwrap_or(0);
                    self.glyphs.insert(c, Glyph { id: id.0, advance });
                    bytes.extend_from_slice(&id.0.to_be_bytes());
                }
                None => {
                    missing.push(c);
                    bytes.extend_from_slice(&[0, 0]);
                }
            }
        }

        Ok(EncodedText { bytes, missing })
    }

    /// Scale font units to the 1000-unit glyph space PDF metrics use
    fn scale(&self, value: i32) -> i64 {
        (value as f64 * 1000.0 / self.units_per_em as f64).round() as i64
    }

    /// Generate all PDF objects needed to embed this font
    ///
    /// References between the objects are set by the document.
    pub(crate) fn to_pdf_objects(&self) -> FontObjects {
        let font_name = Object::Name(self.name.clone().into_bytes());

        let tounicode_stream = Stream::new(
            dictionary! { "Type" => "CMap" },
            self.generate_tounicode_cmap().into_bytes(),
        );

        let font_file_stream = Stream::new(
            dictionary! { "Length1" => self.ttf_data.len() as i64 },
            self.ttf_data.clone(),
        );

        let font_bbox: Vec<Object> = self
            .bbox
            .iter()
            .map(|&v| Object::Integer(self.scale(v as i32)))
            .collect();

        let font_descriptor = dictionary! {
            "Type" => "FontDescriptor",
            "FontName" => font_name.clone(),
            "Flags" => 4,
            "FontBBox" => font_bbox,
            "ItalicAngle" => 0,
            "Ascent" => self.scale(self.ascender as i32),
            "Descent" => self.scale(self.descender as i32),
            "CapHeight" => self.scale(self.cap_height as i32),
            "StemV" => 80,
        };

        let cid_font = dictionary! {
            "Type" => "Font",
            "Subtype" => "CIDFontType2",
            "BaseFont" => font_name.clone(),
            "CIDSystemInfo" => dictionary! {
                "Registry" => Object::string_literal("Adobe"),
                "Ordering" => Object::string_literal("Identity"),
                "Supplement" => 0,
            },
            "CIDToGIDMap" => "Identity",
            "W" => self.generate_widths_array(),
            "DW" => 1000,
        };

        let type0_font = dictionary! {
            "Type" => "Font",
            "Subtype" => "Type0",
            "BaseFont" => font_name,
            "Encoding" => "Identity-H",
        };

        FontObjects {
            type0_font,
            cid_font,
            font_descriptor,
            font_file_stream,
            tounicode_stream,
        }
    }

    /// Generate /W array for glyph widths: `[gid [width] gid [width] ...]`
    fn generate_widths_array(&self) -> Vec<Object> {
        let mut by_gid: BTreeMap<u16, u16> = BTreeMap::new();
        for glyph in self.glyphs.values() {
            by_gid.insert(glyph.id, glyph.advance);
        }

        let mut widths = Vec::with_capacity(by_gid.len() * 2);
        for (gid, advance) in by_gid {
            widths.push(Object::Integer(gid as i64));
            widths.push(Object::Array(vec![Object::Integer(
                self.scale(advance as i32),
            )]));
        }
        widths
    }

    /// Generate ToUnicode CMap stream content
    fn generate_tounicode_cmap(&self) -> String {
        let mut cmap = String::new();

        cmap.push_str("/CIDInit /ProcSet findresource begin\n");
        cmap.push_str("12 dict begin\n");
        cmap.push_str("begincmap\n");
        cmap.push_str("/CIDSystemInfo << /Registry (Adobe) /Ordering (UCS) /Supplement 0 >> def\n");
        cmap.push_str("/CMapName /Adobe-Identity-UCS def\n");
        cmap.push_str("/CMapType 2 def\n");
        cmap.push_str("1 begincodespacerange\n");
        cmap.push_str("<0000> <FFFF>\n");
        cmap.push_str("endcodespacerange\n");

        // At most 100 entries per bfchar section
        let entries: Vec<(&char, &Glyph)> = self.glyphs.iter().collect();
        for chunk in entries.chunks(100) {
            cmap.push_str(&format!("{} beginbfchar\n", chunk.len()));
            for (c, glyph) in chunk {
                let mut units = [0u16; 2];
                let unicode: String = c
                    .encode_utf16(&mut units)
                    .iter()
                    .map(|u| format!("{u:04X}"))
                    .collect();
                cmap.push_str(&format!("<{:04X}> <{unicode}>\n", glyph.id));
            }
            cmap.push_str("endbfchar\n");
        }

        cmap.push_str("endcmap\n");
        cmap.push_str("CMapName currentdict /CMap defineresource pop\n");
        cmap.push_str("end\n");
        cmap.push_str("end\n");

        cmap
    }
}

//! Raw glyph stream as produced by a file loader.
//!
//! Records arrive unordered; the parser is responsible for turning them into
//! lines and paragraphs.

use crate::error::{DocumentLoadError, ParseResult};
use crate::model::EditableGlyph;
use livepdf_common::{Point, Rect, RgbColor};
use serde::{Deserialize, Serialize};

/// One glyph as drawn on the page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlyphRecord {
    pub character: char,
    pub font_name: String,
    pub point_size: f64,

    #[serde(default)]
    pub color: RgbColor,

    pub bounding_box: Rect,

    /// Start of the glyph's baseline
    pub baseline: Point,

    /// Defaults to the box width
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advance_width: Option<f64>,

    /// Inferred from the font name when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
}

impl GlyphRecord {
    pub fn new(character: char, font_name: impl Into<String>, point_size: f64, bounding_box: Rect, baseline: Point) -> Self {
        Self {
            character,
            font_name: font_name.into(),
            point_size,
            color: RgbColor::BLACK,
            bounding_box,
            baseline,
            advance_width: None,
            bold: None,
            italic: None,
        }
    }

    pub fn with_advance_width(mut self, advance_width: f64) -> Self {
        self.advance_width = Some(advance_width);
        self
    }

    pub fn with_color(mut self, color: RgbColor) -> Self {
        self.color = color;
        self
    }

    pub fn advance_width(&self) -> f64 {
        self.advance_width.unwrap_or_else(|| self.bounding_box.width())
    }

    /// Reject records no layout could use
    pub fn validate(&self, page: usize, index: usize) -> ParseResult<()> {
        if self.font_name.is_empty() {
            return Err(DocumentLoadError::invalid_glyph(page, index, "empty font name"));
        }
        if !self.point_size.is_finite() || self.point_size <= 0.0 {
            return Err(DocumentLoadError::invalid_glyph(
                page,
                index,
                format!("point size {} is not positive", self.point_size),
            ));
        }
        if !self.bounding_box.is_finite() || !self.baseline.is_finite() {
            return Err(DocumentLoadError::invalid_glyph(page, index, "non-finite geometry"));
        }
        if self.advance_width.is_some_and(|w| !w.is_finite()) {
            return Err(DocumentLoadError::invalid_glyph(page, index, "non-finite advance width"));
        }
        Ok(())
    }

    pub fn to_glyph(&self) -> EditableGlyph {
        let (name_bold, name_italic) = style_from_font_name(&self.font_name);
        EditableGlyph {
            character: self.character,
            font_name: self.font_name.clone(),
            point_size: self.point_size,
            color: self.color,
            bounding_box: self.bounding_box,
            bold: self.bold.unwrap_or(name_bold),
            italic: self.italic.unwrap_or(name_italic),
            advance_width: self.advance_width(),
        }
    }
}

/// Bold/italic flags guessed from a PostScript-style font name.
///
/// Abbreviated styles only count as the whole suffix after `-` or `,`, so
/// `Arial-BI` is bold italic but `Garamond-Book` is neither.
pub fn style_from_font_name(font_name: &str) -> (bool, bool) {
    let name = font_name.to_lowercase();
    let suffix = name.split_once(|c: char| c == '-' || c == ',').map_or("", |(_, style)| style);
    let bold = name.contains("bold") || matches!(suffix, "b" | "bd" | "bi");
    let italic = name.contains("italic") || name.contains("oblique") || matches!(suffix, "i" | "it" | "bi");
    (bold, italic)
}

/// Opaque image placement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub name: String,
    pub bounds: Rect,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRecord {
    pub page_number: usize,
    pub width: f64,
    pub height: f64,

    #[serde(default)]
    pub glyphs: Vec<GlyphRecord>,

    #[serde(default)]
    pub images: Vec<ImageRecord>,
}

/// Everything a loader extracts from one file
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawDocument {
    pub pages: Vec<PageRecord>,
}

impl RawDocument {
    pub fn validate(&self) -> ParseResult<()> {
        for (page_index, page) in self.pages.iter().enumerate() {
            for (index, glyph) in page.glyphs.iter().enumerate() {
                glyph.validate(page_index, index)?;
            }
        }
        Ok(())
    }
}

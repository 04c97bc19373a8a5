//! # Document Model
//!
//! Editable view of a PDF page: `LivePage → LiveParagraph → EditableGlyph`.
//!
//! Glyphs are values. An edit replaces glyphs wholesale, it never mutates
//! one in place. A paragraph owns its glyph sequence exclusively and is the
//! unit of mutation; pages are read-only once parsed.

use livepdf_common::{Rect, RgbColor};
use serde::{Deserialize, Serialize};

/// One rendered character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditableGlyph {
    pub character: char,
    pub font_name: String,
    pub point_size: f64,
    pub color: RgbColor,

    /// Box as observed on the page (position and size)
    pub bounding_box: Rect,

    pub bold: bool,
    pub italic: bool,

    /// Horizontal distance the pen moves after this glyph.
    ///
    /// Differs from `bounding_box.width()` for whitespace and kerned glyphs.
    pub advance_width: f64,
}

impl EditableGlyph {
    pub fn is_whitespace(&self) -> bool {
        self.character.is_whitespace()
    }

    /// Same style as `self`, different character and box
    pub fn restyled(&self, character: char, bounding_box: Rect) -> Self {
        Self {
            character,
            bounding_box,
            ..self.clone()
        }
    }
}

/// Horizontal alignment inferred from line edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Justification {
    #[default]
    Left,
    Right,
    Center,
    Justified,
}

impl std::fmt::Display for Justification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Justification::Left => "left",
            Justification::Right => "right",
            Justification::Center => "center",
            Justification::Justified => "justified",
        };
        f.write_str(name)
    }
}

/// Ordered run of glyphs wrapped inside a box
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveParagraph {
    /// Reading order
    pub glyphs: Vec<EditableGlyph>,

    /// Wrap region used by reflow
    pub bounding_box: Rect,

    pub alignment: Justification,
}

impl LiveParagraph {
    pub fn new(glyphs: Vec<EditableGlyph>, bounding_box: Rect, alignment: Justification) -> Self {
        Self {
            glyphs,
            bounding_box,
            alignment,
        }
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Plain text of the paragraph
    pub fn text(&self) -> String {
        self.glyphs.iter().map(|g| g.character).collect()
    }

    /// Plain text of `start..end`, clamped to the glyph count
    pub fn text_range(&self, start: usize, end: usize) -> String {
        let end = end.min(self.glyphs.len());
        let start = start.min(end);
        self.glyphs[start..end].iter().map(|g| g.character).collect()
    }
}

/// Non-editable image placement, passed through untouched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRef {
    pub name: String,
    pub bounds: Rect,
}

/// One parsed page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LivePage {
    pub page_number: usize,
    pub width: f64,
    pub height: f64,
    pub paragraphs: Vec<LiveParagraph>,
    pub images: Vec<ImageRef>,
}

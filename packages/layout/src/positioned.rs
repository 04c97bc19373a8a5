use livepdf_common::{Rect, RgbColor};
use livepdf_parser::EditableGlyph;
use serde::{Deserialize, Serialize};

/// A glyph placed by reflow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionedGlyph {
    pub character: char,
    pub bounding_box: Rect,
    pub font_name: String,
    pub point_size: f64,
    pub color: RgbColor,
}

impl PositionedGlyph {
    /// Place `glyph` with its left edge at `x` and its top on `baseline_y`,
    /// keeping the size of its original box
    pub fn place(glyph: &EditableGlyph, x: f64, baseline_y: f64) -> Self {
        let size = &glyph.bounding_box;
        Self {
            character: glyph.character,
            bounding_box: Rect::new(x, baseline_y - size.height(), x + size.width(), baseline_y),
            font_name: glyph.font_name.clone(),
            point_size: glyph.point_size,
            color: glyph.color,
        }
    }

    pub fn center_x(&self) -> f64 {
        self.bounding_box.center_x()
    }

    fn same_style(&self, other: &PositionedGlyph) -> bool {
        self.font_name == other.font_name && self.point_size == other.point_size && self.color == other.color
    }
}

/// One wrapped line of a paragraph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionedLine {
    pub glyphs: Vec<PositionedGlyph>,
    pub baseline_y: f64,
}

impl PositionedLine {
    pub fn new(glyphs: Vec<PositionedGlyph>, baseline_y: f64) -> Self {
        Self { glyphs, baseline_y }
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn text(&self) -> String {
        self.glyphs.iter().map(|g| g.character).collect()
    }

    /// Tallest glyph box on the line
    pub fn height(&self) -> f64 {
        self.glyphs
            .iter()
            .map(|g| g.bounding_box.height())
            .fold(0.0, f64::max)
    }

    /// Box around every glyph on the line
    pub fn bounds(&self) -> Option<Rect> {
        Rect::enclosing(self.glyphs.iter().map(|g| &g.bounding_box))
    }

    /// Maximal runs of glyphs sharing font, size and color
    pub fn style_runs(&self) -> Vec<&[PositionedGlyph]> {
        let mut runs = Vec::new();
        let mut start = 0;
        for i in 1..=self.glyphs.len() {
            if i == self.glyphs.len() || !self.glyphs[i].same_style(&self.glyphs[start]) {
                runs.push(&self.glyphs[start..i]);
                start = i;
            }
        }
        runs
    }
}

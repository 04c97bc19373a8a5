use crate::config::LayoutConfig;
use crate::error::{LayoutError, LayoutResult};
use crate::positioned::{PositionedGlyph, PositionedLine};
use livepdf_parser::{EditableGlyph, FontMetricsCache, LiveParagraph};
use tracing::debug;

/// Owns one paragraph's glyphs and keeps its wrapped layout current.
///
/// There is no dirty flag and no incremental reflow: every mutation
/// recomputes the layout of the whole paragraph.
#[derive(Debug)]
pub struct LayoutEngine<'m> {
    paragraph: LiveParagraph,
    metrics: &'m FontMetricsCache,
    config: LayoutConfig,
    lines: Vec<PositionedLine>,
}

impl<'m> LayoutEngine<'m> {
    pub fn new(paragraph: LiveParagraph, metrics: &'m FontMetricsCache) -> Self {
        Self::with_config(paragraph, metrics, LayoutConfig::default())
    }

    pub fn with_config(paragraph: LiveParagraph, metrics: &'m FontMetricsCache, config: LayoutConfig) -> Self {
        let lines = reflow(&paragraph, &config);
        Self {
            paragraph,
            metrics,
            config,
            lines,
        }
    }

    /// Layout after the most recent mutation
    pub fn layout(&self) -> &[PositionedLine] {
        &self.lines
    }

    pub fn paragraph(&self) -> &LiveParagraph {
        &self.paragraph
    }

    pub fn into_parts(self) -> (LiveParagraph, Vec<PositionedLine>) {
        (self.paragraph, self.lines)
    }

    /// Insert one glyph per character of `text` before `index`.
    ///
    /// New glyphs copy the style of the glyph currently at `index` (the last
    /// glyph when appending). Their box comes from the metrics cache, or the
    /// template's own box when the character was never seen in that font.
    ///
    /// An empty paragraph has no style to copy: nothing is inserted and
    /// `Ok(0)` is returned.
    pub fn insert(&mut self, index: usize, text: &str) -> LayoutResult<usize> {
        let len = self.paragraph.glyphs.len();
        if index > len {
            return Err(LayoutError::OutOfRange { index, count: 0, len });
        }

        let Some(template) = self
            .paragraph
            .glyphs
            .get(index)
            .or_else(|| self.paragraph.glyphs.last())
        else {
            debug!("insert into empty paragraph ignored");
            return Ok(0);
        };

        let new_glyphs: Vec<EditableGlyph> = text
            .chars()
            .map(|c| {
                let bounding_box = self
                    .metrics
                    .lookup(&template.font_name, c)
                    .unwrap_or(template.bounding_box);
                template.restyled(c, bounding_box)
            })
            .collect();

        let inserted = new_glyphs.len();
        self.paragraph.glyphs.splice(index..index, new_glyphs);
        self.reflow();
        Ok(inserted)
    }

    /// Remove `count` glyphs starting at `index`
    pub fn delete(&mut self, index: usize, count: usize) -> LayoutResult<()> {
        let len = self.paragraph.glyphs.len();
        let end = index
            .checked_add(count)
            .filter(|end| *end <= len)
            .ok_or(LayoutError::OutOfRange { index, count, len })?;

        self.paragraph.glyphs.drain(index..end);
        self.reflow();
        Ok(())
    }

    fn reflow(&mut self) {
        self.lines = reflow(&self.paragraph, &self.config);
    }
}

/// Group glyphs into words. Each space is a one-glyph word of its own so the
/// gap between words survives layout.
pub fn split_words(glyphs: &[EditableGlyph]) -> Vec<&[EditableGlyph]> {
    let mut words = Vec::new();
    let mut start = 0;

    for (i, glyph) in glyphs.iter().enumerate() {
        if glyph.character == ' ' {
            if start < i {
                words.push(&glyphs[start..i]);
            }
            words.push(&glyphs[i..i + 1]);
            start = i + 1;
        }
    }

    if start < glyphs.len() {
        words.push(&glyphs[start..]);
    }
    words
}

/// Greedy word wrap inside the paragraph's bounding box.
///
/// The pen starts at the box's top-left corner. A word that would cross the
/// right edge moves to a new line, unless the pen is still at the left
/// margin. Glyphs keep their original box size and the pen advances by
/// each glyph's advance width.
pub fn reflow(paragraph: &LiveParagraph, config: &LayoutConfig) -> Vec<PositionedLine> {
    let Some(first) = paragraph.glyphs.first() else {
        return Vec::new();
    };

    let bounds = paragraph.bounding_box;
    let line_height = first.point_size * config.line_height_factor;

    let mut lines = Vec::new();
    let mut current: Vec<PositionedGlyph> = Vec::new();
    let mut x = bounds.left;
    let mut y = bounds.top;

    for word in split_words(&paragraph.glyphs) {
        let word_width: f64 = word.iter().map(|g| g.advance_width).sum();

        if x > bounds.left && x + word_width > bounds.right {
            if !current.is_empty() {
                lines.push(PositionedLine::new(std::mem::take(&mut current), y));
            }
            x = bounds.left;
            y -= line_height;
        }

        let mut glyph_x = x;
        for glyph in word {
            current.push(PositionedGlyph::place(glyph, glyph_x, y));
            glyph_x += glyph.advance_width;
        }
        x += word_width;
    }

    if !current.is_empty() {
        lines.push(PositionedLine::new(current, y));
    }

    debug!(glyphs = paragraph.glyphs.len(), lines = lines.len(), "reflow");
    lines
}

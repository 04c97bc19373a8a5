//! Caret and selection rectangles in page space, for whatever draws them.

use crate::caret::line_spans;
use crate::state::EditorState;
use livepdf_common::Rect;

impl EditorState {
    /// Thin rectangle at the caret, `None` when nothing is active.
    ///
    /// The caret belongs to the same line Home/End use: at a wrap boundary
    /// that is the earlier line, so it sits on the right edge of that line's
    /// last glyph. Otherwise it sits on the left edge of the glyph after it.
    pub fn caret_rect(&self) -> Option<Rect> {
        let paragraph = self.active_paragraph()?;
        let lines = self.active_layout()?;
        let width = self.config.caret_width;

        let caret = self.caret_index;
        let found = line_spans(lines)
            .into_iter()
            .zip(lines)
            .find(|(span, line)| !line.is_empty() && span.start <= caret && caret <= span.end);

        let Some((span, line)) = found else {
            let bounds = paragraph.bounding_box;
            return Some(Rect::new(bounds.left, bounds.top - bounds.height(), bounds.left + width, bounds.top));
        };

        let x = if caret < span.end {
            line.glyphs[caret - span.start].bounding_box.left
        } else {
            line.glyphs.last()?.bounding_box.right
        };

        let height = match line.height() {
            h if h > 0.0 => h,
            _ => paragraph.glyphs.first().map_or(0.0, |g| g.point_size) * self.config.layout.line_height_factor,
        };

        Some(Rect::new(x, line.baseline_y - height, x + width, line.baseline_y))
    }

    /// One rectangle per line covering the selected glyphs on it
    pub fn selection_rects(&self) -> Vec<Rect> {
        if !self.has_selection() {
            return Vec::new();
        }
        let Some(lines) = self.active_layout() else {
            return Vec::new();
        };

        let selection = self.selection_range();
        line_spans(lines)
            .into_iter()
            .zip(lines)
            .filter_map(|(span, line)| {
                let start = span.start.max(selection.start);
                let end = span.end.min(selection.end);
                if start >= end {
                    return None;
                }
                let selected = &line.glyphs[start - span.start..end - span.start];
                Rect::enclosing(selected.iter().map(|g| &g.bounding_box))
            })
            .collect()
    }
}

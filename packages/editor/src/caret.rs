//! Caret movement and hit-testing over a paragraph's current layout.
//!
//! Everything here is a pure function of the glyphs and the laid-out lines.
//! Lines partition the glyph sequence in order, so a line's global start is
//! the sum of the lengths of the lines above it.

use crate::action::CaretMovement;
use livepdf_common::Point;
use livepdf_layout::PositionedLine;
use livepdf_parser::EditableGlyph;
use std::ops::Range;

/// Caret index after moving `caret` in `direction`, always within `[0, len]`
pub fn move_caret(
    glyphs: &[EditableGlyph],
    lines: &[PositionedLine],
    caret: usize,
    direction: CaretMovement,
) -> usize {
    let len = glyphs.len();
    let caret = caret.min(len);

    match direction {
        CaretMovement::Left => caret.saturating_sub(1),
        CaretMovement::Right => (caret + 1).min(len),
        CaretMovement::LeftByWord => word_start_before(glyphs, caret),
        CaretMovement::RightByWord => word_start_after(glyphs, caret),
        CaretMovement::Up => vertical_neighbor(lines, caret, true).unwrap_or(caret),
        CaretMovement::Down => vertical_neighbor(lines, caret, false).unwrap_or(caret),
        CaretMovement::Home => line_boundary(lines, caret).map_or(caret, |span| span.start),
        CaretMovement::End => line_boundary(lines, caret).map_or(caret, |span| span.end),
    }
}

/// Start of the word the caret is in; stays put when whitespace is directly behind it
pub fn word_start_before(glyphs: &[EditableGlyph], caret: usize) -> usize {
    let caret = caret.min(glyphs.len());
    if caret == 0 {
        return 0;
    }
    let mut i = caret - 1;
    while i > 0 && !glyphs[i].is_whitespace() {
        i -= 1;
    }
    if glyphs[i].is_whitespace() {
        i + 1
    } else {
        0
    }
}

/// Start of the next word, or the end of the text
pub fn word_start_after(glyphs: &[EditableGlyph], caret: usize) -> usize {
    let len = glyphs.len();
    let mut i = caret.min(len);
    while i < len && glyphs[i].is_whitespace() {
        i += 1;
    }
    while i < len && !glyphs[i].is_whitespace() {
        i += 1;
    }
    while i < len && glyphs[i].is_whitespace() {
        i += 1;
    }
    i
}

/// Global glyph range of every line, in order
pub fn line_spans(lines: &[PositionedLine]) -> Vec<Range<usize>> {
    let mut start = 0;
    lines
        .iter()
        .map(|line| {
            let span = start..start + line.len();
            start = span.end;
            span
        })
        .collect()
}

/// Range of the first line whose span holds the caret, ends inclusive
pub fn line_boundary(lines: &[PositionedLine], caret: usize) -> Option<Range<usize>> {
    line_spans(lines)
        .into_iter()
        .find(|span| span.start <= caret && caret <= span.end)
}

/// Caret on the line above (`up`) or below, closest to the current X.
///
/// Returns `None` when there is no adjacent line, or no glyph at `caret`
/// to take the X from (the caret is at the end of the paragraph).
pub fn vertical_neighbor(lines: &[PositionedLine], caret: usize, up: bool) -> Option<usize> {
    let spans = line_spans(lines);
    let line_index = spans.iter().position(|span| span.contains(&caret))?;
    let x = lines[line_index].glyphs[caret - spans[line_index].start].bounding_box.left;

    let target = if up {
        line_index.checked_sub(1)?
    } else {
        line_index + 1
    };
    let target_line = lines.get(target)?;

    let mut closest = 0;
    let mut best = f64::MAX;
    for (i, glyph) in target_line.glyphs.iter().enumerate() {
        let distance = (glyph.bounding_box.left - x).abs();
        if distance < best {
            best = distance;
            closest = i;
        }
    }

    Some(spans[target].start + closest)
}

/// Caret index for a click at `point`.
///
/// The first line whose baseline is within `band` of the click wins; on that
/// line the caret goes before the first glyph whose center is at or right of
/// the click, else after the line's last glyph. A click outside every band
/// puts the caret at the end of the paragraph.
pub fn hit_test(lines: &[PositionedLine], point: Point, band: f64) -> usize {
    let mut start = 0;
    for line in lines {
        if (point.y - line.baseline_y).abs() <= band {
            let offset = line
                .glyphs
                .iter()
                .position(|glyph| glyph.center_x() >= point.x)
                .unwrap_or(line.len());
            return start + offset;
        }
        start += line.len();
    }
    start
}

#[cfg(test)]
mod tests {
    use super::*;
    use livepdf_common::{Rect, RgbColor};
    use livepdf_layout::{reflow, LayoutConfig};
    use livepdf_parser::{Justification, LiveParagraph};

    fn glyph(character: char) -> EditableGlyph {
        EditableGlyph {
            character,
            font_name: "Helvetica".to_string(),
            point_size: 10.0,
            color: RgbColor::BLACK,
            bounding_box: Rect::new(0.0, 0.0, 5.0, 10.0),
            bold: false,
            italic: false,
            advance_width: 10.0,
        }
    }

    fn paragraph(text: &str, width: f64) -> LiveParagraph {
        LiveParagraph::new(
            text.chars().map(glyph).collect(),
            Rect::new(0.0, 0.0, width, 100.0),
            Justification::Left,
        )
    }

    fn laid_out(text: &str, width: f64) -> (LiveParagraph, Vec<PositionedLine>) {
        let paragraph = paragraph(text, width);
        let lines = reflow(&paragraph, &LayoutConfig::default());
        (paragraph, lines)
    }

    #[test]
    fn test_left_right_clamp() {
        let (p, lines) = laid_out("abc", 1000.0);
        assert_eq!(move_caret(&p.glyphs, &lines, 0, CaretMovement::Left), 0);
        assert_eq!(move_caret(&p.glyphs, &lines, 3, CaretMovement::Right), 3);
        assert_eq!(move_caret(&p.glyphs, &lines, 1, CaretMovement::Right), 2);
    }

    #[test]
    fn test_right_by_word() {
        let (p, _) = laid_out("Hello World", 1000.0);
        assert_eq!(word_start_after(&p.glyphs, 0), 6);
        assert_eq!(word_start_after(&p.glyphs, 5), 11);
        assert_eq!(word_start_after(&p.glyphs, 6), 11);
        assert_eq!(word_start_after(&p.glyphs, 11), 11);
    }

    #[test]
    fn test_left_by_word() {
        let (p, _) = laid_out("Hello World", 1000.0);
        assert_eq!(word_start_before(&p.glyphs, 11), 6);
        assert_eq!(word_start_before(&p.glyphs, 8), 6);
        // Whitespace directly behind the caret: no movement
        assert_eq!(word_start_before(&p.glyphs, 6), 6);
        assert_eq!(word_start_before(&p.glyphs, 3), 0);
        assert_eq!(word_start_before(&p.glyphs, 0), 0);
    }

    #[test]
    fn test_home_end() {
        // Width 60 wraps "aaa bbb" after the space: lines "aaa " and "bbb"
        let (p, lines) = laid_out("aaa bbb", 60.0);
        assert_eq!(lines.len(), 2);

        assert_eq!(move_caret(&p.glyphs, &lines, 5, CaretMovement::Home), 4);
        assert_eq!(move_caret(&p.glyphs, &lines, 5, CaretMovement::End), 7);
        assert_eq!(move_caret(&p.glyphs, &lines, 2, CaretMovement::End), 4);
        // A caret on the boundary belongs to the first line
        assert_eq!(move_caret(&p.glyphs, &lines, 4, CaretMovement::Home), 0);
    }

    #[test]
    fn test_up_down_keep_column() {
        let (p, lines) = laid_out("aaa bbb", 60.0);

        assert_eq!(move_caret(&p.glyphs, &lines, 1, CaretMovement::Down), 5);
        assert_eq!(move_caret(&p.glyphs, &lines, 6, CaretMovement::Up), 2);
        assert_eq!(move_caret(&p.glyphs, &lines, 1, CaretMovement::Up), 1);
        assert_eq!(move_caret(&p.glyphs, &lines, 5, CaretMovement::Down), 5);
    }

    #[test]
    fn test_up_down_from_paragraph_end_stays() {
        let (p, lines) = laid_out("aaa bbb", 60.0);
        assert_eq!(move_caret(&p.glyphs, &lines, 7, CaretMovement::Up), 7);
        assert_eq!(move_caret(&p.glyphs, &lines, 7, CaretMovement::Down), 7);
    }

    #[test]
    fn test_hit_test_bands() {
        let (_, lines) = laid_out("aaa bbb", 60.0);
        let first = lines[0].baseline_y;
        let second = lines[1].baseline_y;

        assert_eq!(hit_test(&lines, Point::new(0.0, first), 5.0), 0);
        assert_eq!(hit_test(&lines, Point::new(12.0, first), 5.0), 1);
        assert_eq!(hit_test(&lines, Point::new(500.0, second), 5.0), 7);
        assert_eq!(hit_test(&lines, Point::new(0.0, -500.0), 5.0), 7);
    }

    #[test]
    fn test_empty_layout() {
        let (p, lines) = laid_out("", 60.0);
        assert_eq!(move_caret(&p.glyphs, &lines, 0, CaretMovement::Down), 0);
        assert_eq!(move_caret(&p.glyphs, &lines, 0, CaretMovement::End), 0);
        assert_eq!(hit_test(&lines, Point::new(0.0, 0.0), 20.0), 0);
    }
}

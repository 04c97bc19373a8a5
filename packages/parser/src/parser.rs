//! # Paragraph Segmentation
//!
//! Turns a page's unordered glyph records into paragraphs.
//!
//! ```text
//! records ─► lines (bucket by rounded baseline, top-to-bottom, left-to-right)
//!         ─► paragraphs (merge lines until a break heuristic fires)
//!         ─► LiveParagraph (glyphs in reading order, box, inferred alignment)
//! ```
//!
//! Break heuristics are tested in order, first match wins:
//! 1. blank line: baseline gap exceeds the previous line's tallest glyph × factor
//! 2. indent: the line starts more than one average character width to the
//!    right of the paragraph's average left margin
//! 3. style change: point size grows past the tolerance, or the font changes

use crate::config::SegmentationConfig;
use crate::metrics::FontMetricsCache;
use crate::model::{EditableGlyph, ImageRef, Justification, LivePage, LiveParagraph};
use crate::records::{GlyphRecord, PageRecord, RawDocument};
use livepdf_common::Rect;
use std::collections::BTreeMap;
use tracing::{debug, info, instrument};

/// Parser output: pages plus the metrics gathered while scanning them
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParsedDocument {
    pub pages: Vec<LivePage>,
    pub metrics: FontMetricsCache,
}

impl ParsedDocument {
    pub fn paragraph_count(&self) -> usize {
        self.pages.iter().map(|p| p.paragraphs.len()).sum()
    }
}

/// Why a line was not merged into the running paragraph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakReason {
    BlankLine,
    Indent,
    StyleChange,
}

/// Glyphs sharing a rounded baseline, ordered left to right
#[derive(Debug)]
struct Line<'a> {
    glyphs: Vec<&'a GlyphRecord>,
}

impl<'a> Line<'a> {
    fn first(&self) -> &'a GlyphRecord {
        self.glyphs[0]
    }

    fn baseline_y(&self) -> f64 {
        self.first().baseline.y
    }

    /// Baseline X of the leftmost glyph
    fn start_x(&self) -> f64 {
        self.first().baseline.x
    }

    fn max_height(&self) -> f64 {
        self.glyphs
            .iter()
            .map(|g| g.bounding_box.height())
            .fold(f64::MIN, f64::max)
    }

    fn max_point_size(&self) -> f64 {
        self.glyphs.iter().map(|g| g.point_size).fold(f64::MIN, f64::max)
    }

    /// Leftmost and rightmost box edges
    fn extent(&self) -> (f64, f64) {
        let left = self.glyphs.iter().map(|g| g.bounding_box.left).fold(f64::MAX, f64::min);
        let right = self.glyphs.iter().map(|g| g.bounding_box.right).fold(f64::MIN, f64::max);
        (left, right)
    }
}

/// Segments glyph records into paragraphs
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: SegmentationConfig,
}

impl Parser {
    pub fn new(config: SegmentationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SegmentationConfig {
        &self.config
    }

    /// Parse every page and collect font metrics
    #[instrument(skip_all, fields(pages = raw.pages.len()))]
    pub fn parse_document(&self, raw: &RawDocument) -> ParsedDocument {
        let mut metrics = FontMetricsCache::new();
        let pages: Vec<LivePage> = raw
            .pages
            .iter()
            .map(|page| self.parse_page(page, &mut metrics))
            .collect();

        let document = ParsedDocument { pages, metrics };
        info!(
            pages = document.pages.len(),
            paragraphs = document.paragraph_count(),
            fonts = document.metrics.font_count(),
            "parsed document"
        );
        document
    }

    /// Parse one page, recording each `(font, character)` box on first sight
    pub fn parse_page(&self, page: &PageRecord, metrics: &mut FontMetricsCache) -> LivePage {
        for glyph in &page.glyphs {
            metrics.store(&glyph.font_name, glyph.character, glyph.bounding_box);
        }

        let lines = self.group_into_lines(&page.glyphs);
        let paragraphs: Vec<LiveParagraph> = self
            .segment(lines)
            .iter()
            .map(|lines| self.build_paragraph(lines))
            .collect();

        debug!(
            page = page.page_number,
            glyphs = page.glyphs.len(),
            paragraphs = paragraphs.len(),
            "segmented page"
        );

        LivePage {
            page_number: page.page_number,
            width: page.width,
            height: page.height,
            paragraphs,
            images: page
                .images
                .iter()
                .map(|image| ImageRef {
                    name: image.name.clone(),
                    bounds: image.bounds,
                })
                .collect(),
        }
    }

    fn group_into_lines<'a>(&self, glyphs: &'a [GlyphRecord]) -> Vec<Line<'a>> {
        let mut buckets: BTreeMap<i64, Vec<&'a GlyphRecord>> = BTreeMap::new();
        for glyph in glyphs {
            buckets
                .entry(self.config.baseline_key(glyph.baseline.y))
                .or_default()
                .push(glyph);
        }

        // Highest baseline first: PDF space grows upwards
        buckets
            .into_values()
            .rev()
            .map(|mut glyphs| {
                glyphs.sort_by(|a, b| a.baseline.x.total_cmp(&b.baseline.x));
                Line { glyphs }
            })
            .collect()
    }

    fn segment<'a>(&self, lines: Vec<Line<'a>>) -> Vec<Vec<Line<'a>>> {
        let mut paragraphs: Vec<Vec<Line<'a>>> = Vec::new();
        let mut current: Vec<Line<'a>> = Vec::new();

        for line in lines {
            if !current.is_empty() {
                if let Some(reason) = self.break_reason(&current, &line) {
                    debug!(?reason, baseline = line.baseline_y(), "paragraph break");
                    paragraphs.push(std::mem::take(&mut current));
                }
            }
            current.push(line);
        }

        if !current.is_empty() {
            paragraphs.push(current);
        }
        paragraphs
    }

    fn break_reason(&self, paragraph: &[Line], line: &Line) -> Option<BreakReason> {
        let prev = paragraph.last()?;

        let gap = prev.baseline_y() - line.baseline_y();
        if gap > prev.max_height() * self.config.blank_line_factor {
            return Some(BreakReason::BlankLine);
        }

        let indent = line.start_x() - average_left_margin(paragraph);
        if indent > self.average_char_width(paragraph) {
            return Some(BreakReason::Indent);
        }

        let paragraph_point_size = paragraph
            .iter()
            .map(Line::max_point_size)
            .fold(f64::MIN, f64::max);
        if line.max_point_size() > paragraph_point_size + self.config.point_size_tolerance
            || line.first().font_name != prev.first().font_name
        {
            return Some(BreakReason::StyleChange);
        }

        None
    }

    fn average_char_width(&self, paragraph: &[Line]) -> f64 {
        let widths: Vec<f64> = paragraph
            .iter()
            .flat_map(|line| line.glyphs.iter().map(|g| g.bounding_box.width()))
            .collect();
        if widths.is_empty() {
            self.config.fallback_char_width
        } else {
            widths.iter().sum::<f64>() / widths.len() as f64
        }
    }

    fn build_paragraph(&self, lines: &[Line]) -> LiveParagraph {
        let glyphs: Vec<EditableGlyph> = lines
            .iter()
            .flat_map(|line| line.glyphs.iter().map(|g| g.to_glyph()))
            .collect();

        let bounding_box = Rect::enclosing(
            lines
                .iter()
                .flat_map(|line| line.glyphs.iter().map(|g| &g.bounding_box)),
        )
        .unwrap_or_default();

        let alignment = self.infer_alignment(lines, &bounding_box);
        LiveParagraph::new(glyphs, bounding_box, alignment)
    }

    fn infer_alignment(&self, lines: &[Line], bounding_box: &Rect) -> Justification {
        if lines.len() < 2 {
            return Justification::Left;
        }

        let tolerance = self.config.alignment_tolerance;
        let extents: Vec<(f64, f64)> = lines.iter().map(Line::extent).collect();
        let (first_left, first_right) = extents[0];

        let left_aligned = extents.iter().all(|(left, _)| (left - first_left).abs() < tolerance);
        let right_aligned = extents.iter().all(|(_, right)| (right - first_right).abs() < tolerance);

        if left_aligned && right_aligned {
            return Justification::Justified;
        }
        if right_aligned {
            return Justification::Right;
        }

        let center = bounding_box.center_x();
        let centered = extents
            .iter()
            .all(|(left, right)| ((left + right) / 2.0 - center).abs() < tolerance);

        if centered {
            Justification::Center
        } else {
            Justification::Left
        }
    }
}

fn average_left_margin(paragraph: &[Line]) -> f64 {
    if paragraph.is_empty() {
        return 0.0;
    }
    paragraph.iter().map(Line::start_x).sum::<f64>() / paragraph.len() as f64
}

/// Parse with default thresholds
pub fn parse(raw: &RawDocument) -> ParsedDocument {
    Parser::default().parse_document(raw)
}

pub fn parse_with_config(raw: &RawDocument, config: &SegmentationConfig) -> ParsedDocument {
    Parser::new(config.clone()).parse_document(raw)
}

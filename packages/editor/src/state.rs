//! # Editor State
//!
//! An immutable snapshot of everything a presentation layer needs: pages,
//! paragraph content, current layouts, the active paragraph, caret and
//! selection. A new snapshot is built for every change; older snapshots
//! stay valid because paragraphs and layouts are shared through `Arc`.
//!
//! ## Invariants
//!
//! - every layout key is a paragraph that belongs to a page
//! - the active paragraph, if any, has a layout
//! - `0 <= caret_index, selection_anchor <= active glyph count`

use crate::arena::{PageEntry, ParagraphArena, ParagraphId};
use crate::config::EditorConfig;
use livepdf_common::Point;
use livepdf_layout::{reflow, PositionedLine};
use livepdf_parser::{FontMetricsCache, LiveParagraph, ParsedDocument};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::ops::Range;
use std::sync::Arc;

/// Which paragraph, if any, is being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ActiveParagraph {
    #[default]
    None,
    Active(ParagraphId),
}

impl ActiveParagraph {
    pub fn id(self) -> Option<ParagraphId> {
        match self {
            ActiveParagraph::None => None,
            ActiveParagraph::Active(id) => Some(id),
        }
    }

    pub fn is_active(self) -> bool {
        matches!(self, ActiveParagraph::Active(_))
    }
}

pub type LayoutMap = HashMap<ParagraphId, Arc<[PositionedLine]>>;

#[derive(Debug, Clone)]
pub struct EditorState {
    pub(crate) version: u64,
    pub(crate) pages: Arc<[PageEntry]>,
    pub(crate) metrics: Arc<FontMetricsCache>,
    pub(crate) paragraphs: ParagraphArena,
    pub(crate) layouts: LayoutMap,
    pub(crate) active: ActiveParagraph,
    pub(crate) selection_anchor: usize,
    pub(crate) caret_index: usize,
    pub(crate) config: Arc<EditorConfig>,
}

impl EditorState {
    /// Initial state for a freshly parsed document: every paragraph laid
    /// out, nothing active, caret and anchor at zero
    pub fn from_document(document: ParsedDocument, config: Arc<EditorConfig>) -> Self {
        let ParsedDocument { pages, metrics } = document;
        let (paragraphs, pages) = ParagraphArena::from_pages(pages);

        let layouts: LayoutMap = paragraphs
            .iter()
            .map(|(id, paragraph)| (id, Arc::from(reflow(paragraph, &config.layout))))
            .collect();

        Self {
            version: 0,
            pages: Arc::from(pages),
            metrics: Arc::new(metrics),
            paragraphs,
            layouts,
            active: ActiveParagraph::None,
            selection_anchor: 0,
            caret_index: 0,
            config,
        }
    }

    /// Increments on every state change
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn pages(&self) -> &[PageEntry] {
        &self.pages
    }

    pub fn metrics(&self) -> &FontMetricsCache {
        &self.metrics
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn active(&self) -> ActiveParagraph {
        self.active
    }

    pub fn caret_index(&self) -> usize {
        self.caret_index
    }

    pub fn selection_anchor(&self) -> usize {
        self.selection_anchor
    }

    pub fn has_selection(&self) -> bool {
        self.selection_anchor != self.caret_index
    }

    pub fn selection_start(&self) -> usize {
        self.selection_anchor.min(self.caret_index)
    }

    pub fn selection_length(&self) -> usize {
        self.selection_anchor.abs_diff(self.caret_index)
    }

    pub fn selection_range(&self) -> Range<usize> {
        let start = self.selection_start();
        start..start + self.selection_length()
    }

    /// Handle of paragraph `paragraph` on page `page`
    pub fn paragraph_id(&self, page: usize, paragraph: usize) -> Option<ParagraphId> {
        self.pages.get(page)?.paragraphs.get(paragraph).copied()
    }

    pub fn paragraph(&self, id: ParagraphId) -> Option<&LiveParagraph> {
        self.paragraphs.get(id)
    }

    pub fn layout(&self, id: ParagraphId) -> Option<&[PositionedLine]> {
        self.layouts.get(&id).map(|lines| lines.as_ref())
    }

    /// Current content of every paragraph on a page, in page order
    pub fn page_paragraphs(&self, page: usize) -> Vec<(ParagraphId, &LiveParagraph)> {
        self.pages
            .get(page)
            .map(|entry| {
                entry
                    .paragraphs
                    .iter()
                    .filter_map(|id| self.paragraphs.get(*id).map(|p| (*id, p)))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn active_paragraph(&self) -> Option<&LiveParagraph> {
        self.paragraph(self.active.id()?)
    }

    pub fn active_layout(&self) -> Option<&[PositionedLine]> {
        self.layout(self.active.id()?)
    }

    /// Glyph count of the active paragraph, zero when nothing is active
    pub fn glyph_count(&self) -> usize {
        self.active_paragraph().map_or(0, LiveParagraph::len)
    }

    pub fn active_text(&self) -> Option<String> {
        self.active_paragraph().map(LiveParagraph::text)
    }

    /// Text under the selection; empty when nothing is selected
    pub fn selected_text(&self) -> String {
        let range = self.selection_range();
        self.active_paragraph()
            .map(|p| p.text_range(range.start, range.end))
            .unwrap_or_default()
    }

    /// Index of the first paragraph on `page` whose box contains `point`
    pub fn paragraph_at(&self, page: usize, point: Point) -> Option<usize> {
        let entry = self.pages.get(page)?;
        self.paragraphs.position_at(&entry.paragraphs, point)
    }

    /// Check the snapshot invariants
    pub fn is_consistent(&self) -> bool {
        let owned_by_page = |id: &ParagraphId| self.pages.iter().any(|page| page.paragraphs.contains(id));
        let layouts_ok = self.layouts.keys().all(|id| self.paragraphs.contains(*id) && owned_by_page(id));

        let active_ok = match self.active {
            ActiveParagraph::None => true,
            ActiveParagraph::Active(id) => self.layouts.contains_key(&id),
        };

        let len = self.glyph_count();
        layouts_ok && active_ok && self.caret_index <= len && self.selection_anchor <= len
    }

    /// Copy with a new caret and anchor, `None` if neither moves
    pub(crate) fn with_caret(&self, caret_index: usize, selection_anchor: usize) -> Option<EditorState> {
        if caret_index == self.caret_index && selection_anchor == self.selection_anchor {
            return None;
        }
        Some(EditorState {
            caret_index,
            selection_anchor,
            ..self.clone()
        })
    }

    /// Copy with `id` active and the selection collapsed at `caret_index`
    pub(crate) fn with_active(&self, id: ParagraphId, caret_index: usize) -> Option<EditorState> {
        if self.active == ActiveParagraph::Active(id) {
            return self.with_caret(caret_index, caret_index);
        }
        Some(EditorState {
            active: ActiveParagraph::Active(id),
            caret_index,
            selection_anchor: caret_index,
            ..self.clone()
        })
    }

    /// Copy with new content and layout for `id`, selection collapsed at `caret_index`
    pub(crate) fn with_paragraph(
        &self,
        id: ParagraphId,
        paragraph: LiveParagraph,
        lines: Vec<PositionedLine>,
        caret_index: usize,
    ) -> EditorState {
        let mut next = self.clone();
        next.paragraphs.replace(id, paragraph);
        next.layouts.insert(id, Arc::from(lines));
        next.caret_index = caret_index;
        next.selection_anchor = caret_index;
        next
    }
}

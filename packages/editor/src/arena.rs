use livepdf_common::Point;
use livepdf_parser::{ImageRef, LivePage, LiveParagraph};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Stable handle to a paragraph, assigned in document order at load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ParagraphId(u32);

impl ParagraphId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for ParagraphId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "p{}", self.0)
    }
}

/// A page as the editor sees it: geometry plus handles into the arena
#[derive(Debug, Clone, PartialEq)]
pub struct PageEntry {
    pub page_number: usize,
    pub width: f64,
    pub height: f64,
    pub paragraphs: Vec<ParagraphId>,
    pub images: Vec<ImageRef>,
}

/// Paragraph storage shared between snapshots.
///
/// Slots are reference counted, so cloning the arena is cheap and a
/// replaced paragraph never affects older snapshots.
#[derive(Debug, Clone, Default)]
pub struct ParagraphArena {
    slots: Vec<Arc<LiveParagraph>>,
}

impl ParagraphArena {
    /// Move the paragraphs of every page into a fresh arena
    pub fn from_pages(pages: Vec<LivePage>) -> (Self, Vec<PageEntry>) {
        let mut arena = Self::default();
        let entries = pages
            .into_iter()
            .map(|page| PageEntry {
                page_number: page.page_number,
                width: page.width,
                height: page.height,
                paragraphs: page
                    .paragraphs
                    .into_iter()
                    .map(|paragraph| arena.alloc(paragraph))
                    .collect(),
                images: page.images,
            })
            .collect();
        (arena, entries)
    }

    pub fn alloc(&mut self, paragraph: LiveParagraph) -> ParagraphId {
        let id = ParagraphId(self.slots.len() as u32);
        self.slots.push(Arc::new(paragraph));
        id
    }

    pub fn get(&self, id: ParagraphId) -> Option<&LiveParagraph> {
        self.slots.get(id.index()).map(Arc::as_ref)
    }

    /// Swap in new content for an existing handle
    pub fn replace(&mut self, id: ParagraphId, paragraph: LiveParagraph) -> bool {
        match self.slots.get_mut(id.index()) {
            Some(slot) => {
                *slot = Arc::new(paragraph);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, id: ParagraphId) -> bool {
        id.index() < self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ParagraphId, &LiveParagraph)> {
        self.slots
            .iter()
            .enumerate()
            .map(|(i, slot)| (ParagraphId(i as u32), slot.as_ref()))
    }

    /// First paragraph among `ids` whose box contains `point`, by position in `ids`
    pub fn position_at(&self, ids: &[ParagraphId], point: Point) -> Option<usize> {
        ids.iter().position(|id| {
            self.get(*id)
                .is_some_and(|paragraph| paragraph.bounding_box.contains(point))
        })
    }
}

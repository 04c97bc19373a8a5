//! # LivePDF Layout
//!
//! Word-wrap layout for a single paragraph.
//!
//! ```text
//! LiveParagraph (source of truth) ──reflow──► [PositionedLine] (derived view)
//! ```
//!
//! Positioned lines are never edited directly. Every insert or delete on a
//! [`LayoutEngine`] recomputes the whole paragraph, so the output can always
//! be reproduced by running [`reflow`] over the paragraph's glyphs.

mod config;
mod engine;
mod error;
mod positioned;

pub use config::LayoutConfig;
pub use engine::{reflow, split_words, LayoutEngine};
pub use error::{LayoutError, LayoutResult};
pub use positioned::{PositionedGlyph, PositionedLine};

//! # LivePDF Editor
//!
//! Editing state machine for live PDF text.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ parser: glyph records → pages + metrics     │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: EditorStore                         │
//! │  - dispatch(action) → reduce → snapshot     │
//! │  - caret, selection, hit-testing            │
//! │  - notify observers on change               │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ layout: reflow of the edited paragraph      │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Paragraph glyphs are the source of truth**: layouts are derived
//! 2. **Snapshots are immutable**: every change produces a new `EditorState`
//! 3. **The reducer is total**: invalid actions are no-ops, never errors
//!
//! ## Usage
//!
//! ```rust,ignore
//! use livepdf_editor::{EditorAction, EditorConfig, EditorStore, CaretMovement};
//! use livepdf_parser::GlyphDumpSource;
//!
//! let mut store = EditorStore::open(&GlyphDumpSource::new(), "page.json".as_ref(), EditorConfig::default())?;
//! store.subscribe(|state| println!("version {}", state.version()));
//!
//! store.dispatch(EditorAction::ActivateParagraph { page: 0, paragraph: 0 });
//! store.dispatch(EditorAction::MoveCaret { direction: CaretMovement::End, extend_selection: false });
//! store.dispatch(EditorAction::InsertText { caret_index: store.state().caret_index(), text: "!".into() });
//! ```

mod action;
mod arena;
mod caret;
mod clipboard;
mod config;
mod errors;
mod geometry;
mod reducer;
mod state;
mod store;

pub use action::{CaretMovement, EditorAction};
pub use arena::{PageEntry, ParagraphArena, ParagraphId};
pub use caret::{hit_test, line_boundary, line_spans, move_caret, vertical_neighbor, word_start_after, word_start_before};
pub use clipboard::{ClipboardProvider, MemoryClipboard};
pub use config::EditorConfig;
pub use errors::{EditorError, EditorResult};
pub use reducer::reduce;
pub use state::{ActiveParagraph, EditorState, LayoutMap};
pub use store::{EditorStore, SubscriptionId};

// Re-export the document model for convenience
pub use livepdf_layout::{PositionedGlyph, PositionedLine};
pub use livepdf_parser::{EditableGlyph, LivePage, LiveParagraph};

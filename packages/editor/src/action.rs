//! # Editor Actions
//!
//! The closed set of inputs the reducer understands. Loading a document is
//! not an action: it builds a fresh state in [`crate::EditorStore`].
//!
//! ## Semantics
//!
//! ### Selection
//! - The selection is the range between the anchor and the caret
//! - Inserting, pasting and deleting collapse it onto the caret
//! - `extend_selection` keeps the anchor where it is (shift held)
//!
//! ### Invalid actions
//! - Out-of-range indices and missing paragraphs are silent no-ops
//! - Any action without an active paragraph is a no-op

use livepdf_common::Point;
use serde::{Deserialize, Serialize};

/// Direction for [`EditorAction::MoveCaret`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaretMovement {
    Left,
    Right,
    LeftByWord,
    RightByWord,
    Up,
    Down,
    Home,
    End,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EditorAction {
    /// Make a paragraph active with the caret at its start
    ActivateParagraph { page: usize, paragraph: usize },

    /// Make a paragraph active and put the caret nearest to a click
    ActivateAndSetCaret {
        page: usize,
        paragraph: usize,
        point: Point,
    },

    /// Type text at the caret, replacing the selection if there is one.
    /// The text always goes at the state's caret; `caret_index` is only the
    /// caller's view of it.
    InsertText { caret_index: usize, text: String },

    /// Remove `count` glyphs starting at `caret_index`
    Delete { caret_index: usize, count: usize },

    MoveCaret {
        direction: CaretMovement,
        #[serde(default)]
        extend_selection: bool,
    },

    /// Put the caret at an explicit glyph offset
    SetCaret {
        index: usize,
        #[serde(default)]
        extend_selection: bool,
    },

    /// Remove the selection. The caller copies the text out beforehand.
    Cut,

    /// Insert text at the caret, replacing the selection if there is one
    Paste { text: String },

    SelectAll,
}

impl EditorAction {
    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            EditorAction::ActivateParagraph { .. } => "ActivateParagraph",
            EditorAction::ActivateAndSetCaret { .. } => "ActivateAndSetCaret",
            EditorAction::InsertText { .. } => "InsertText",
            EditorAction::Delete { .. } => "Delete",
            EditorAction::MoveCaret { .. } => "MoveCaret",
            EditorAction::SetCaret { .. } => "SetCaret",
            EditorAction::Cut => "Cut",
            EditorAction::Paste { .. } => "Paste",
            EditorAction::SelectAll => "SelectAll",
        }
    }

    /// True for actions that can change glyphs
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            EditorAction::InsertText { .. }
                | EditorAction::Delete { .. }
                | EditorAction::Cut
                | EditorAction::Paste { .. }
        )
    }
}

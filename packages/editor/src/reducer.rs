//! # Reducer
//!
//! `reduce(state, action) -> state`, total over [`EditorAction`].
//!
//! Handlers return `Some(next)` for a change and `None` for a no-op. A
//! no-op hands back the very same `Arc`, which is how the store knows not
//! to notify anyone.

use crate::action::EditorAction;
use crate::arena::ParagraphId;
use crate::caret::{hit_test, move_caret};
use crate::state::EditorState;
use livepdf_common::Point;
use livepdf_layout::LayoutEngine;
use std::sync::Arc;
use tracing::debug;

/// Apply `action` to `state`.
///
/// Returns `state` itself (same allocation) when nothing changes, else a
/// new snapshot whose version is one higher.
pub fn reduce(state: &Arc<EditorState>, action: &EditorAction) -> Arc<EditorState> {
    match apply(state, action) {
        Some(mut next) => {
            next.version = state.version + 1;
            Arc::new(next)
        }
        None => Arc::clone(state),
    }
}

fn apply(state: &EditorState, action: &EditorAction) -> Option<EditorState> {
    match action {
        EditorAction::ActivateParagraph { page, paragraph } => activate(state, *page, *paragraph),
        EditorAction::ActivateAndSetCaret { page, paragraph, point } => {
            activate_at(state, *page, *paragraph, *point)
        }
        EditorAction::InsertText { text, .. } => {
            let id = state.active.id()?;
            replace_selection(state, id, state.caret_index, text)
        }
        EditorAction::Delete { caret_index, count } => {
            let id = state.active.id()?;
            delete_range(state, id, *caret_index, *count)
        }
        EditorAction::MoveCaret {
            direction,
            extend_selection,
        } => {
            let paragraph = state.active_paragraph()?;
            let lines = state.active_layout()?;
            let caret = move_caret(&paragraph.glyphs, lines, state.caret_index, *direction);
            set_caret(state, caret, *extend_selection)
        }
        EditorAction::SetCaret {
            index,
            extend_selection,
        } => {
            state.active.id()?;
            set_caret(state, (*index).min(state.glyph_count()), *extend_selection)
        }
        EditorAction::Cut => {
            let id = state.active.id()?;
            if !state.has_selection() {
                return None;
            }
            delete_range(state, id, state.selection_start(), state.selection_length())
        }
        EditorAction::Paste { text } => {
            let id = state.active.id()?;
            replace_selection(state, id, state.caret_index, text)
        }
        EditorAction::SelectAll => {
            state.active.id()?;
            state.with_caret(state.glyph_count(), 0)
        }
    }
}

fn activate(state: &EditorState, page: usize, paragraph: usize) -> Option<EditorState> {
    let id = state.paragraph_id(page, paragraph)?;
    state.layout(id)?;
    state.with_active(id, 0)
}

fn activate_at(state: &EditorState, page: usize, paragraph: usize, point: Point) -> Option<EditorState> {
    let id = state.paragraph_id(page, paragraph)?;
    let lines = state.layout(id)?;
    let caret = hit_test(lines, point, state.config.hit_test_band);
    state.with_active(id, caret)
}

fn set_caret(state: &EditorState, caret: usize, extend_selection: bool) -> Option<EditorState> {
    let anchor = if extend_selection {
        state.selection_anchor
    } else {
        caret
    };
    state.with_caret(caret, anchor)
}

fn engine(state: &EditorState, id: ParagraphId) -> Option<LayoutEngine<'_>> {
    let paragraph = state.paragraph(id)?.clone();
    Some(LayoutEngine::with_config(
        paragraph,
        &state.metrics,
        state.config.layout.clone(),
    ))
}

fn delete_range(state: &EditorState, id: ParagraphId, index: usize, count: usize) -> Option<EditorState> {
    let mut engine = engine(state, id)?;
    if let Err(err) = engine.delete(index, count) {
        debug!(%id, %err, "delete ignored");
        return None;
    }
    let (paragraph, lines) = engine.into_parts();
    Some(state.with_paragraph(id, paragraph, lines, index))
}

fn insert(state: &EditorState, id: ParagraphId, index: usize, text: &str) -> Option<EditorState> {
    let mut engine = engine(state, id)?;
    match engine.insert(index, text) {
        Ok(0) => {
            debug!(%id, index, "nothing inserted");
            None
        }
        Ok(inserted) => {
            let (paragraph, lines) = engine.into_parts();
            Some(state.with_paragraph(id, paragraph, lines, index + inserted))
        }
        Err(err) => {
            debug!(%id, %err, "insert ignored");
            None
        }
    }
}

/// Insert `text`, first deleting the selection if there is one.
///
/// With a selection the text goes where the selection started. If the
/// deletion empties the paragraph the insert has no style to copy, and the
/// post-delete state is the result.
fn replace_selection(state: &EditorState, id: ParagraphId, index: usize, text: &str) -> Option<EditorState> {
    if !state.has_selection() {
        return insert(state, id, index, text);
    }

    let start = state.selection_start();
    let cleared = delete_range(state, id, start, state.selection_length())?;
    Some(insert(&cleared, id, start, text).unwrap_or(cleared))
}

//! # Editor Store
//!
//! Holds the current [`EditorState`] and is the only way to change it.
//!
//! ```text
//! dispatch(action) → reduce(state, action) → new snapshot? → observers
//! ```
//!
//! Dispatch is synchronous and single-threaded. Observers must not dispatch
//! from inside their callback.

use crate::action::EditorAction;
use crate::clipboard::ClipboardProvider;
use crate::config::EditorConfig;
use crate::errors::EditorResult;
use crate::reducer::reduce;
use crate::state::EditorState;
use livepdf_common::Point;
use livepdf_parser::{load_document, DocumentSource, ParsedDocument};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// Handle returned by [`EditorStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&EditorState)>;

pub struct EditorStore {
    state: Arc<EditorState>,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl EditorStore {
    /// Store over an already parsed document
    pub fn new(document: ParsedDocument, config: EditorConfig) -> Self {
        let state = EditorState::from_document(document, Arc::new(config));
        Self {
            state: Arc::new(state),
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Load `path` through `source` and build a store over it.
    ///
    /// Fails without producing any state if loading fails.
    pub fn open<S: DocumentSource + ?Sized>(source: &S, path: &Path, config: EditorConfig) -> EditorResult<Self> {
        let document = load_document(source, path, &config.segmentation)?;
        Ok(Self::new(document, config))
    }

    /// Replace the whole document, keeping observers.
    ///
    /// Caret, selection and active paragraph reset; the version keeps
    /// counting so observers can still order snapshots.
    pub fn load_document<S: DocumentSource + ?Sized>(&mut self, source: &S, path: &Path) -> EditorResult<()> {
        let config = Arc::clone(&self.state.config);
        let document = load_document(source, path, &config.segmentation)?;

        let mut state = EditorState::from_document(document, config);
        state.version = self.state.version + 1;
        info!(
            path = %path.display(),
            paragraphs = state.paragraphs.len(),
            version = state.version,
            "document replaced"
        );

        self.state = Arc::new(state);
        self.notify();
        Ok(())
    }

    /// Current snapshot. Cheap to clone and safe to keep around.
    pub fn state(&self) -> Arc<EditorState> {
        Arc::clone(&self.state)
    }

    /// Run `action` through the reducer. Returns whether the state changed.
    pub fn dispatch(&mut self, action: EditorAction) -> bool {
        let next = reduce(&self.state, &action);
        let changed = !Arc::ptr_eq(&next, &self.state);
        debug!(action = action.name(), changed, version = next.version, "dispatch");

        if changed {
            self.state = next;
            self.notify();
        }
        changed
    }

    pub fn subscribe(&mut self, observer: impl FnMut(&EditorState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Returns false if `id` was not subscribed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    /// Activate the paragraph under `point` on `page` and put the caret there.
    ///
    /// Clicking outside every paragraph dispatches nothing.
    pub fn click(&mut self, page: usize, point: Point) -> bool {
        let Some(paragraph) = self.state.paragraph_at(page, point) else {
            debug!(page, x = point.x, y = point.y, "click outside paragraphs");
            return false;
        };
        self.dispatch(EditorAction::ActivateAndSetCaret { page, paragraph, point })
    }

    /// Put the selected text on the clipboard. Returns false without a selection.
    pub fn copy(&self, clipboard: &mut dyn ClipboardProvider) -> bool {
        if !self.state.has_selection() {
            return false;
        }
        clipboard.set_text(self.state.selected_text());
        true
    }

    /// Copy the selection, then remove it
    pub fn cut(&mut self, clipboard: &mut dyn ClipboardProvider) -> bool {
        self.copy(clipboard) && self.dispatch(EditorAction::Cut)
    }

    /// Insert the clipboard text at the caret, replacing any selection
    pub fn paste(&mut self, clipboard: &dyn ClipboardProvider) -> bool {
        match clipboard.get_text() {
            Some(text) if !text.is_empty() => self.dispatch(EditorAction::Paste { text }),
            _ => false,
        }
    }

    fn notify(&mut self) {
        let state = Arc::clone(&self.state);
        for (_, observer) in self.observers.iter_mut() {
            observer(&state);
        }
    }
}

impl std::fmt::Debug for EditorStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorStore")
            .field("version", &self.state.version)
            .field("observers", &self.observers.len())
            .finish()
    }
}

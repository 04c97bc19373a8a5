/// Text clipboard used by the copy, cut and paste call sites.
///
/// The reducer never touches the clipboard; the store reads or writes it
/// around dispatching `Cut` and `Paste`.
pub trait ClipboardProvider {
    fn get_text(&self) -> Option<String>;
    fn set_text(&mut self, text: String);
}

/// Process-local clipboard, for tests and headless use
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryClipboard {
    text: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        Self { text: Some(text.into()) }
    }
}

impl ClipboardProvider for MemoryClipboard {
    fn get_text(&self) -> Option<String> {
        self.text.clone()
    }

    fn set_text(&mut self, text: String) {
        self.text = Some(text);
    }
}

use livepdf_common::Rect;
use std::collections::HashMap;

/// Per-font, per-character glyph boxes observed while parsing.
///
/// First write wins and there is no eviction; the cache lives as long as
/// the document it was built from. Layout consults it when a typed
/// character needs a box.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FontMetricsCache {
    fonts: HashMap<String, HashMap<char, Rect>>,
}

impl FontMetricsCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a box unless one is already known for `(font, character)`
    pub fn store(&mut self, font_name: &str, character: char, bounding_box: Rect) {
        if !self.fonts.contains_key(font_name) {
            self.fonts.insert(font_name.to_string(), HashMap::new());
        }
        if let Some(metrics) = self.fonts.get_mut(font_name) {
            metrics.entry(character).or_insert(bounding_box);
        }
    }

    pub fn lookup(&self, font_name: &str, character: char) -> Option<Rect> {
        self.fonts.get(font_name)?.get(&character).copied()
    }

    pub fn font_count(&self) -> usize {
        self.fonts.len()
    }

    /// Total number of `(font, character)` entries
    pub fn len(&self) -> usize {
        self.fonts.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

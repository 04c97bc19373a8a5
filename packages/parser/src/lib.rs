//! # LivePDF Parser
//!
//! Turns a loaded page's flat glyph stream into an editable document model:
//! `LivePage → LiveParagraph → EditableGlyph`, plus a [`FontMetricsCache`]
//! of every `(font, character)` box seen along the way.

pub mod config;
pub mod error;
pub mod loader;
pub mod metrics;
pub mod model;
pub mod parser;
pub mod records;
pub mod visitor;

pub use config::SegmentationConfig;
pub use error::{DocumentLoadError, ParseResult};
pub use loader::{load_document, DocumentSource, GlyphDumpSource};
pub use metrics::FontMetricsCache;
pub use model::{EditableGlyph, ImageRef, Justification, LivePage, LiveParagraph};
pub use parser::{parse, parse_with_config, BreakReason, ParsedDocument, Parser};
pub use records::{style_from_font_name, GlyphRecord, ImageRecord, PageRecord, RawDocument};
pub use visitor::{walk_document, walk_page, walk_paragraph, Visitor};

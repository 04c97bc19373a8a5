//! # Document Loading
//!
//! A [`DocumentSource`] turns a path into raw glyph records. The parser never
//! talks to the file system directly, so tests can feed it from memory.
//!
//! The bundled [`GlyphDumpSource`] reads JSON glyph dumps: one object per
//! page with its glyph records and image placements, as written by an
//! external PDF text extractor.

use crate::config::SegmentationConfig;
use crate::error::{DocumentLoadError, ParseResult};
use crate::parser::{ParsedDocument, Parser};
use crate::records::RawDocument;
use livepdf_common::{FileSystem, RealFileSystem};
use std::path::Path;
use tracing::{info, instrument};

/// Anything that can produce raw glyph records for a path
pub trait DocumentSource {
    fn open(&self, path: &Path) -> ParseResult<RawDocument>;
}

/// Reads `.json` glyph dumps through a [`FileSystem`]
pub struct GlyphDumpSource<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl GlyphDumpSource<RealFileSystem> {
    pub fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl Default for GlyphDumpSource<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FileSystem> GlyphDumpSource<F> {
    pub fn with_file_system(fs: F) -> Self {
        Self { fs }
    }
}

impl<F: FileSystem> DocumentSource for GlyphDumpSource<F> {
    fn open(&self, path: &Path) -> ParseResult<RawDocument> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_lowercase();
        if extension != "json" {
            return Err(DocumentLoadError::Unsupported(if extension.is_empty() {
                path.display().to_string()
            } else {
                extension
            }));
        }

        if !self.fs.exists(path) {
            return Err(DocumentLoadError::NotFound(path.to_path_buf()));
        }

        let content = self.fs.read_to_string(path)?;
        let raw: RawDocument = serde_json::from_str(&content)
            .map_err(|e| DocumentLoadError::corrupt(path, e.to_string()))?;
        raw.validate()?;
        Ok(raw)
    }
}

/// Open and parse in one step; nothing is returned unless both succeed
#[instrument(skip(source, config))]
pub fn load_document<S: DocumentSource + ?Sized>(
    source: &S,
    path: &Path,
    config: &SegmentationConfig,
) -> ParseResult<ParsedDocument> {
    let raw = source.open(path)?;
    let document = Parser::new(config.clone()).parse_document(&raw);
    info!(path = %path.display(), pages = document.pages.len(), "loaded document");
    Ok(document)
}

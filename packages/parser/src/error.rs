use std::path::PathBuf;
use thiserror::Error;

pub type ParseResult<T> = Result<T, DocumentLoadError>;

/// Failure to turn a file into pages of glyphs.
///
/// Every variant is fatal to the load: no partial document is produced.
#[derive(Error, Debug)]
pub enum DocumentLoadError {
    #[error("Document not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt document {}: {reason}", path.display())]
    Corrupt { path: PathBuf, reason: String },

    #[error("Unsupported document format: {0}")]
    Unsupported(String),

    #[error("Invalid glyph {index} on page {page}: {reason}")]
    InvalidGlyph {
        page: usize,
        index: usize,
        reason: String,
    },
}

impl DocumentLoadError {
    pub fn corrupt(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Corrupt {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_glyph(page: usize, index: usize, reason: impl Into<String>) -> Self {
        Self::InvalidGlyph {
            page,
            index,
            reason: reason.into(),
        }
    }

    /// True for errors caused by the file's contents rather than its absence or I/O
    pub fn is_corrupt(&self) -> bool {
        matches!(
            self,
            Self::Corrupt { .. } | Self::Unsupported(_) | Self::InvalidGlyph { .. }
        )
    }
}

//! Error types for the editor

use thiserror::Error;

pub type EditorResult<T> = Result<T, EditorError>;

/// Errors surfaced outside of `dispatch`.
///
/// The reducer itself never fails: invalid actions leave the state unchanged.
#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Load error: {0}")]
    Load(#[from] livepdf_parser::DocumentLoadError),
}

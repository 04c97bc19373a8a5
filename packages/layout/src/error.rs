use thiserror::Error;

pub type LayoutResult<T> = Result<T, LayoutError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Range {index}..{index}+{count} is out of bounds for {len} glyphs")]
    OutOfRange { index: usize, count: usize, len: usize },
}

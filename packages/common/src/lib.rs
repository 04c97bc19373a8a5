pub mod filesystem;
pub mod geometry;

pub use filesystem::*;
pub use geometry::*;

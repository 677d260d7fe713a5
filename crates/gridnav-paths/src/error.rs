//! Error types for grid construction and map loading.
//!
//! Searches never fail with an error: an unreachable goal or a blocked
//! endpoint is reported as `None`.

use thiserror::Error;

/// Errors raised while building a [`NavigationGrid`](crate::NavigationGrid).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("invalid grid dimensions {width}x{height}: both must be positive")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("grid of {width}x{height} cells is too large to index")]
    TooLarge { width: i32, height: i32 },

    #[error("unknown map glyph {ch:?} at line {line}, column {column}")]
    MapParse { line: usize, column: usize, ch: char },

    #[error("map line {line} has {found} cells, expected {expected}")]
    RaggedMap {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("grid data holds {found} cells, expected {expected}")]
    LengthMismatch { expected: usize, found: usize },
}

pub type Result<T> = std::result::Result<T, GridError>;

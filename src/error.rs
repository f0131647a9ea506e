//! Error types for dictionary construction, grid construction and searching.

use std::path::PathBuf;

use crate::grid::Position;

#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("word already in dictionary: {0}")]
    DuplicateWord(String),

    #[error("failed to read word list {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("grid shape must have at least one dimension")]
    EmptyShape,

    #[error("grid dimension {axis} has size zero")]
    ZeroDimension { axis: usize },

    #[error("grid has {ndim} dimensions, at most {max} are supported")]
    TooManyDimensions { ndim: usize, max: usize },

    #[error("grid dimension {axis} has size {size}, at most {max} is supported")]
    DimensionTooLarge { axis: usize, size: usize, max: usize },

    #[error("grid of shape {shape:?} has too many cells")]
    TooManyCells { shape: Vec<usize> },

    #[error("grid of this shape needs {expected} letters, got {actual}")]
    LetterCountMismatch { expected: usize, actual: usize },

    #[error("row {row} has {actual} letters, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("expected {expected} coordinates, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("start position {position} is outside grid of shape {shape:?}")]
    InvalidStartPosition { position: Position, shape: Vec<usize> },
}

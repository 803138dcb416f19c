//! Error types for astroplot-rs.

use thiserror::Error;

use crate::series::SeriesKind;

/// The main error type for astroplot-rs operations.
///
/// Every variant is recoverable: a rejected mutation leaves the store and its
/// projection caches exactly as they were.
#[derive(Error, Debug)]
pub enum PlotError {
    /// A point was appended to a series index that is neither an existing
    /// series nor the next one in sequence.
    #[error("{kind} series index {index} out of sequence (next index is {expected})")]
    IndexOutOfSequence {
        kind: SeriesKind,
        index: usize,
        expected: usize,
    },

    /// An anchor series already holds its three axis vectors.
    #[error("anchor series {index} already holds 3 vectors")]
    AnchorSeriesFull { index: usize },

    /// An anchor series was supplied with the wrong number of vectors.
    #[error("anchor series needs {expected} vectors, got {actual}")]
    AnchorCount { expected: usize, actual: usize },

    /// No series carries the given name.
    #[error("series '{0}' not found")]
    SeriesNotFound(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for astroplot-rs operations.
pub type Result<T> = std::result::Result<T, PlotError>;

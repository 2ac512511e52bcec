//! Error types for the merge loop and its driver.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BpeError {
    /// No adjacent pair was left before the merge budget was spent.
    #[error("ran out of adjacent pairs after {completed} of {requested} merges")]
    ExhaustedPairs { completed: usize, requested: usize },

    /// The caller stopped the run between rounds.
    #[error("merging stopped after {completed} of {requested} merges")]
    Interrupted { completed: usize, requested: usize },

    /// Negative merge count.
    #[error("invalid merge budget: {0} (must be zero or more)")]
    InvalidMergeBudget(i64),

    /// The next symbol id does not fit in a `u32`.
    #[error("symbol id space exhausted at id {next_id}")]
    IdOverflow { next_id: u32 },

    /// I/O error with file context
    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, BpeError>;

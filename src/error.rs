// src/error.rs

//! Error kinds for the tabular store.

use thiserror::Error;

/// Everything a store operation can signal.
///
/// Each kind is handled at the boundary of the action that raised it and
/// rendered as a notice; none of them are allowed to propagate past that
/// action or kill the process.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A required field was blank, or a numeric field failed to parse.
    /// The payload is the full sentence the notice displays.
    #[error("{0}")]
    InvalidInput(String),

    /// No row carries the requested symbol.
    #[error("Symbol {0} not found in the data.")]
    NotFound(String),

    /// The seed or delimited feed could not be read. `feed::load_table`
    /// recovers from this locally by substituting an empty table.
    #[error("Error loading data: {0}")]
    LoadFailure(String),
}

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

//! Configuration errors.
//!
//! Invalid inputs are rejected by problem constructors before any search
//! state exists; they are never discovered mid-search. Exhaustion of the
//! search space is *not* an error — see [`SearchEngine::run`](crate::SearchEngine::run).

use thiserror::Error;

/// An invalid problem configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The board dimension must be at least 1.
    #[error("board size must be at least 1")]
    EmptyBoard,

    /// The fixed queen's row or column lies outside the board.
    #[error("fixed queen at ({row}, {col}) is outside the {n}x{n} board")]
    FixedQueenOutOfBounds {
        /// Board dimension.
        n: usize,
        /// Requested fixed row.
        row: usize,
        /// Requested fixed column.
        col: usize,
    },
}

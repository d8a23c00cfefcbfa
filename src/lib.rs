//! Constrained placement search by backtracking.
//!
//! This crate provides a small, generic engine for exhaustive depth-first
//! backtracking over layered decision problems: one choice per level,
//! candidates tried in order, the first complete consistent assignment wins.
//!
//! ## Core idea
//! 1. Model your problem as a sequence of decision levels with a bounded set
//!    of candidate choices per level.
//! 2. Implement the [`SearchProblem`] trait for that problem.
//! 3. Let [`SearchEngine`] drive the place / recurse / undo discipline and
//!    hand back the first complete assignment, or `None` if the search space
//!    is exhausted.
//!
//! Levels may carry a *pinned* choice: a pre-assigned, immovable decision the
//! engine validates against the partial assignment but never revisits. The
//! flagship use is the N-Queens variant in [`problems::queens`], where one
//! queen's position is fixed before the search begins.
//!
//! The engine deliberately stops at the *first* solution rather than
//! enumerating all of them; exhaustion (`None`) is a normal outcome, not an
//! error.
//!
//! ## Quick start
//! ```
//! use backtrack_search::problems::queens::FixedQueens;
//!
//! let problem = FixedQueens::new(4, 0, 1).unwrap();
//! let board = problem.solve().expect("a solution exists");
//! assert_eq!(board.columns(), &[1, 3, 0, 2]);
//! assert!(board.is_valid());
//! ```
//!
//! ## Built-in problems
//! The `problems` module contains reference implementations for:
//! - N-Queens with a pre-fixed queen (the backtracking core)
//! - Fibonacci (recursive and tabulated)
//! - Huffman code construction
//! - Fractional knapsack (greedy)
//! - 0/1 knapsack (bottom-up tabulation)
//!
//! Only the queens problem runs through the engine; the others are
//! self-contained classic routines kept alongside it as templates.

pub mod engine;
pub mod error;
pub mod problems;
pub mod traits;

pub use crate::engine::{SearchEngine, SearchStats};
pub use crate::error::ConfigError;
pub use crate::traits::SearchProblem;

//! N-Queens with one pre-fixed queen.
//!
//! Place N non-attacking queens on an N×N board, subject to one queen's
//! position being pre-assigned and immovable. Queens are placed strictly
//! top-to-bottom, one per row; the fixed row is pinned and never revisited
//! by the search.
//!
//! The board is represented as the mapping from row index to the occupied
//! column in that row, so "at most one queen per row" holds by construction
//! and the safety predicate only ever looks at rows strictly above the one
//! being tried.
//!
//! The fixed queen can make the whole board unsatisfiable, in which case
//! [`FixedQueens::solve`] returns `None`:
//!
//! ```
//! use backtrack_search::problems::queens::FixedQueens;
//!
//! let problem = FixedQueens::new(4, 0, 0).unwrap();
//! assert_eq!(problem.solve(), None);
//! ```

use std::fmt;

use crate::engine::SearchEngine;
use crate::error::ConfigError;
use crate::traits::SearchProblem;

/// An N-Queens instance with one pre-assigned queen.
///
/// The board size and the fixed position are the entire configuration; all
/// mutable search state lives in the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedQueens {
    n: usize,
    fixed_row: usize,
    fixed_col: usize,
}

impl FixedQueens {
    /// Create an instance for an `n`×`n` board with the fixed queen at
    /// (`fixed_row`, `fixed_col`).
    ///
    /// Rejects `n == 0` and out-of-range fixed positions before any search
    /// begins.
    pub fn new(n: usize, fixed_row: usize, fixed_col: usize) -> Result<Self, ConfigError> {
        if n == 0 {
            return Err(ConfigError::EmptyBoard);
        }
        if fixed_row >= n || fixed_col >= n {
            return Err(ConfigError::FixedQueenOutOfBounds {
                n,
                row: fixed_row,
                col: fixed_col,
            });
        }
        Ok(Self {
            n,
            fixed_row,
            fixed_col,
        })
    }

    /// Board dimension.
    pub fn n(&self) -> usize {
        self.n
    }

    /// The fixed queen's (row, column).
    pub fn fixed(&self) -> (usize, usize) {
        (self.fixed_row, self.fixed_col)
    }

    /// Whether placing a queen at (`row`, `col`) attacks no queen already
    /// placed in rows `0..row` (given as `prefix`, one column per row).
    ///
    /// Checks the column above and both upper diagonals only: rows below
    /// `row` are guaranteed empty by the top-to-bottom placement discipline.
    /// Pure query, O(row) worst case.
    pub fn is_safe(&self, prefix: &[usize], row: usize, col: usize) -> bool {
        debug_assert!(prefix.len() <= row);
        prefix
            .iter()
            .enumerate()
            .all(|(r, &c)| c != col && row - r != col.abs_diff(c))
    }

    /// Run the search: returns the first solution's board, or `None` if no
    /// assignment of the remaining queens avoids mutual attack given the
    /// fixed queen.
    ///
    /// Columns are tried in ascending order and the first complete placement
    /// wins; with that tie-break the result is fully deterministic.
    pub fn solve(&self) -> Option<Board> {
        let n = self.n;
        SearchEngine::new(self.clone())
            .run()
            .map(|cols| Board { n, cols })
    }
}

impl SearchProblem for FixedQueens {
    type Choice = usize;

    fn num_levels(&self) -> usize {
        self.n
    }

    fn candidates(&self, _level: usize) -> Vec<usize> {
        (0..self.n).collect()
    }

    fn pinned(&self, level: usize) -> Option<usize> {
        (level == self.fixed_row).then_some(self.fixed_col)
    }

    fn is_consistent(&self, prefix: &[usize], level: usize, choice: usize) -> bool {
        self.is_safe(prefix, level, choice)
    }
}

/// A completed placement: one queen per row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    n: usize,
    cols: Vec<usize>,
}

impl Board {
    /// Board dimension.
    pub fn n(&self) -> usize {
        self.n
    }

    /// The occupied column of each row, in row order.
    pub fn columns(&self) -> &[usize] {
        &self.cols
    }

    /// The occupied column of `row`.
    ///
    /// # Panics
    /// Panics if `row >= n`.
    pub fn column_of(&self, row: usize) -> usize {
        self.cols[row]
    }

    /// The board as an N×N row-major grid of 0/1 cells (1 = queen present).
    pub fn grid(&self) -> Vec<Vec<u8>> {
        self.cols
            .iter()
            .map(|&c| {
                let mut row = vec![0u8; self.n];
                row[c] = 1;
                row
            })
            .collect()
    }

    /// Verify the placement by scanning all pairs: exactly one queen per
    /// row (by construction), no shared column, no shared diagonal.
    pub fn is_valid(&self) -> bool {
        if self.cols.len() != self.n || self.cols.iter().any(|&c| c >= self.n) {
            return false;
        }
        for (r1, &c1) in self.cols.iter().enumerate() {
            for (r2, &c2) in self.cols.iter().enumerate().skip(r1 + 1) {
                if c1 == c2 || r2 - r1 == c1.abs_diff(c2) {
                    return false;
                }
            }
        }
        true
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.grid() {
            let mut first = true;
            for cell in row {
                if !first {
                    write!(f, " ")?;
                }
                write!(f, "{cell}")?;
                first = false;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

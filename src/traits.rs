//! Core trait definition for backtracking search problems.
//!
//! To plug a problem into the generic engine, implement [`SearchProblem`]
//! for a struct that captures your instance (board size, fixed placements,
//! whatever the domain needs).
//!
//! The trait encodes the layered-decision view of backtracking:
//! - Levels `0..T`, each resolved by exactly one choice.
//! - Candidate choices per level, tried in the order given.
//! - A consistency predicate checked against the prefix of choices already
//!   made for levels strictly below the current one.
//! - Optionally, a pinned choice per level: pre-assigned before the search
//!   begins and never revisited by it.
//!
//! The engine orchestrates placement, recursion, and undo using only these
//! primitives; implementations hold no search state of their own.

/// Trait for a backtracking search problem instance.
///
/// A `SearchProblem` corresponds to a *fixed* instance: in practice, a struct
/// containing input data. The engine owns all mutable search state, so every
/// method takes `&self` and must behave as a pure function of its arguments.
pub trait SearchProblem {
    /// The decision taken at one level (for the queens problem, a column
    /// index).
    type Choice: Copy + PartialEq;

    /// Number of decision levels `T`.
    ///
    /// A complete solution assigns one choice to every level `0..T`; zero
    /// levels means the empty assignment is trivially a solution.
    fn num_levels(&self) -> usize;

    /// Candidate choices for `level`, in the order the engine should try
    /// them. The fixed tie-break of the search is exactly this order.
    ///
    /// Never consulted for a level with a pinned choice.
    fn candidates(&self, level: usize) -> Vec<Self::Choice>;

    /// A pre-assigned, immovable choice for `level`, if any.
    ///
    /// The engine validates a pinned choice against the prefix with
    /// [`is_consistent`](Self::is_consistent) but makes no placement
    /// decision for the level and never tries alternatives: if the subtree
    /// below it fails, the whole level fails.
    fn pinned(&self, _level: usize) -> Option<Self::Choice> {
        None
    }

    /// Whether `choice` at `level` is consistent with `prefix`, the choices
    /// already committed for levels `0..level` (so `prefix.len() == level`).
    ///
    /// Must be a pure query: no side effects, same answer for the same
    /// arguments.
    fn is_consistent(&self, prefix: &[Self::Choice], level: usize, choice: Self::Choice) -> bool;
}

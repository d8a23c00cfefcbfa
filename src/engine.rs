//! Generic first-solution backtracking engine.
//!
//! This module implements the depth-first search discipline shared by every
//! [`SearchProblem`]:
//! 1. At each level, try candidate choices in the problem's order.
//! 2. Place a consistent choice, recurse into the next level.
//! 3. On failure below, undo the placement and continue with the next
//!    candidate; on success, propagate immediately (first solution wins).
//!
//! Pinned levels are validated against the prefix and descended through
//! without a placement decision; they are never revisited.
//!
//! The engine is completely generic over implementations of
//! [`SearchProblem`] and is strictly sequential: one logical thread of
//! control, one exclusively-borrowed assignment buffer travelling down and
//! back up the recursion.

use crate::traits::SearchProblem;

/// Counters describing one engine run.
///
/// `placements` counts tentative placements (pinned levels included);
/// `backtracks` counts placements that were undone. Both are bounded by the
/// finite search space, which is what makes termination immediate: depth is
/// at most `T`, branching at most the candidate count per level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Tentative placements made during the run.
    pub placements: u64,
    /// Placements undone after the subtree below them failed.
    pub backtracks: u64,
}

/// Backtracking engine for a given problem instance `P`.
///
/// Typical usage:
/// ```
/// use backtrack_search::problems::queens::FixedQueens;
/// use backtrack_search::SearchEngine;
///
/// let problem = FixedQueens::new(8, 0, 0).unwrap();
/// let engine = SearchEngine::new(problem);
/// let solution = engine.run();
/// assert_eq!(solution, Some(vec![0, 4, 7, 5, 2, 6, 1, 3]));
/// ```
pub struct SearchEngine<P: SearchProblem> {
    problem: P,
}

impl<P: SearchProblem> SearchEngine<P> {
    /// Create a new engine owning `problem`.
    pub fn new(problem: P) -> Self {
        Self { problem }
    }

    /// Expose an immutable reference to the underlying problem.
    pub fn problem(&self) -> &P {
        &self.problem
    }

    /// Run the search and return the first complete assignment found, or
    /// `None` if every branch is exhausted.
    ///
    /// Exhaustion is the normal "Unsatisfiable" outcome, communicated as a
    /// plain value through every recursive frame; it is not an error. The
    /// engine stops at the first solution rather than enumerating all of
    /// them.
    pub fn run(&self) -> Option<Vec<P::Choice>> {
        self.run_with_stats().0
    }

    /// Like [`run`](Self::run), additionally reporting search counters.
    pub fn run_with_stats(&self) -> (Option<Vec<P::Choice>>, SearchStats) {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("search_run", levels = self.problem.num_levels());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut prefix = Vec::with_capacity(self.problem.num_levels());
        let mut stats = SearchStats::default();
        let found = self.extend(&mut prefix, 0, &mut stats);

        #[cfg(feature = "tracing")]
        tracing::info!(
            found,
            placements = stats.placements,
            backtracks = stats.backtracks,
            "search finished"
        );

        if found {
            debug_assert_eq!(prefix.len(), self.problem.num_levels());
            (Some(prefix), stats)
        } else {
            debug_assert!(prefix.is_empty(), "failed search must leave no residue");
            (None, stats)
        }
    }

    /// Extend `prefix` (valid through `level - 1`) to a complete assignment.
    ///
    /// Returns whether levels `level..T` admit a consistent completion. On a
    /// `false` return, `prefix` is exactly as the caller left it: every
    /// placement attempted below has already undone itself.
    fn extend(&self, prefix: &mut Vec<P::Choice>, level: usize, stats: &mut SearchStats) -> bool {
        if level == self.problem.num_levels() {
            return true;
        }

        if let Some(choice) = self.problem.pinned(level) {
            // No placement decision here, but the pinned choice still has to
            // hold against everything placed above it.
            if !self.problem.is_consistent(prefix, level, choice) {
                #[cfg(feature = "tracing")]
                tracing::trace!(level, "pinned choice inconsistent with prefix");
                return false;
            }
            stats.placements += 1;
            prefix.push(choice);
            if self.extend(prefix, level + 1, stats) {
                return true;
            }
            prefix.pop();
            stats.backtracks += 1;
            return false;
        }

        for choice in self.problem.candidates(level) {
            if !self.problem.is_consistent(prefix, level, choice) {
                continue;
            }
            stats.placements += 1;
            prefix.push(choice);
            if self.extend(prefix, level + 1, stats) {
                return true;
            }
            prefix.pop();
            stats.backtracks += 1;
            #[cfg(feature = "tracing")]
            tracing::trace!(level, "backtracked");
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Levels 0..levels, choices 0..width, everything consistent.
    struct Unconstrained {
        levels: usize,
        width: usize,
    }

    impl SearchProblem for Unconstrained {
        type Choice = usize;

        fn num_levels(&self) -> usize {
            self.levels
        }
        fn candidates(&self, _level: usize) -> Vec<usize> {
            (0..self.width).collect()
        }
        fn is_consistent(&self, _prefix: &[usize], _level: usize, _choice: usize) -> bool {
            true
        }
    }

    /// All distinct choices, candidates descending, level 1 pinned.
    struct PinnedDistinct {
        levels: usize,
        pinned_choice: usize,
    }

    impl SearchProblem for PinnedDistinct {
        type Choice = usize;

        fn num_levels(&self) -> usize {
            self.levels
        }
        fn candidates(&self, _level: usize) -> Vec<usize> {
            (0..self.levels).rev().collect()
        }
        fn pinned(&self, level: usize) -> Option<usize> {
            (level == 1).then_some(self.pinned_choice)
        }
        fn is_consistent(&self, prefix: &[usize], _level: usize, choice: usize) -> bool {
            !prefix.contains(&choice)
        }
    }

    #[test]
    fn zero_levels_is_trivially_satisfiable() {
        let engine = SearchEngine::new(Unconstrained {
            levels: 0,
            width: 3,
        });
        assert_eq!(engine.run(), Some(vec![]));
    }

    #[test]
    fn first_solution_follows_candidate_order() {
        let engine = SearchEngine::new(Unconstrained {
            levels: 3,
            width: 4,
        });
        // Ascending candidates, no constraints: all-zero assignment first.
        assert_eq!(engine.run(), Some(vec![0, 0, 0]));
    }

    #[test]
    fn no_candidates_means_unsatisfiable() {
        let engine = SearchEngine::new(Unconstrained {
            levels: 2,
            width: 0,
        });
        let (solution, stats) = engine.run_with_stats();
        assert_eq!(solution, None);
        assert_eq!(stats.placements, 0);
    }

    #[test]
    fn pinned_level_takes_its_choice_without_alternatives() {
        let engine = SearchEngine::new(PinnedDistinct {
            levels: 3,
            pinned_choice: 0,
        });
        let solution = engine.run().expect("satisfiable");
        assert_eq!(solution[1], 0);
        // Descending candidates elsewhere.
        assert_eq!(solution, vec![2, 0, 1]);
    }

    #[test]
    fn inconsistent_pin_forces_backtrack_above() {
        // Level 0 would pick 2 first, but the pin on level 1 also wants 2,
        // so the engine must retreat and re-place level 0.
        let engine = SearchEngine::new(PinnedDistinct {
            levels: 3,
            pinned_choice: 2,
        });
        let (solution, stats) = engine.run_with_stats();
        assert_eq!(solution, Some(vec![1, 2, 0]));
        assert!(stats.backtracks > 0);
    }

    #[test]
    fn stats_count_every_placement_once() {
        let engine = SearchEngine::new(Unconstrained {
            levels: 2,
            width: 2,
        });
        let (solution, stats) = engine.run_with_stats();
        assert_eq!(solution, Some(vec![0, 0]));
        // Straight descent, no dead ends.
        assert_eq!(stats.placements, 2);
        assert_eq!(stats.backtracks, 0);
    }
}

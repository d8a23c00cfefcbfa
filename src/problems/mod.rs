//! Reference problem implementations.
//!
//! The queens module shows how to implement
//! [`SearchProblem`](crate::traits::SearchProblem) for a concrete
//! backtracking search; the remaining modules are self-contained classic
//! routines kept in the same collection.
//!
//! - [`queens`]              : N-Queens with one pre-fixed queen (the core).
//! - [`fibonacci`]           : recursive and tabulated Fibonacci.
//! - [`huffman`]             : Huffman code construction.
//! - [`knapsack_fractional`] : greedy fractional knapsack.
//! - [`knapsack_01`]         : 0/1 knapsack by bottom-up tabulation.

pub mod fibonacci;
pub mod huffman;
pub mod knapsack_01;
pub mod knapsack_fractional;
pub mod queens;

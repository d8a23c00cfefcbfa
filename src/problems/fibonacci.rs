//! Fibonacci numbers, recursive and tabulated.
//!
//! Two classic renditions of the same recurrence `F(n) = F(n-1) + F(n-2)`:
//! the naive recursion (exponential, kept for its teaching value) and the
//! bottom-up tabulation (linear, one table entry per index).
//!
//! Values are `u64`; the sequence overflows past `F(93)`.

/// Naive recursive Fibonacci.
///
/// Runs in O(2^n) time with O(n) stack depth. Intended for small `n` only;
/// use [`iterative`] otherwise.
pub fn recursive(n: u64) -> u64 {
    if n < 2 {
        n
    } else {
        recursive(n - 1) + recursive(n - 2)
    }
}

/// The tabulated sequence `F(0)..=F(n)`.
///
/// Bottom-up fill of the table, each entry from the two before it.
pub fn sequence(n: usize) -> Vec<u64> {
    let mut table = Vec::with_capacity(n + 1);
    table.push(0);
    if n >= 1 {
        table.push(1);
    }
    for i in 2..=n {
        table.push(table[i - 1] + table[i - 2]);
    }
    table
}

/// Iterative Fibonacci via [`sequence`].
pub fn iterative(n: usize) -> u64 {
    sequence(n)[n]
}

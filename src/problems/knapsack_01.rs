//! 0/1 knapsack by bottom-up tabulation.
//!
//! Each item is taken whole or not at all, so the greedy density argument
//! breaks down and the optimum comes from dynamic programming instead:
//! `dp[i][j]` is the best value using the first `i` items within capacity
//! `j`, filled row by row with the include/exclude maximum.
//!
//! O(n·W) time and table space.

/// Maximum total value achievable within `capacity`, each item taken whole
/// or skipped.
///
/// `values[i]` and `weights[i]` describe item `i`.
///
/// # Panics
/// Panics if `values` and `weights` differ in length.
pub fn max_value(values: &[u64], weights: &[u64], capacity: u64) -> u64 {
    assert_eq!(
        values.len(),
        weights.len(),
        "one weight per value required"
    );

    let n = values.len();
    let w = capacity as usize;
    // Row 0 / column 0 stay zero: no items or no capacity yields no value.
    let mut dp = vec![vec![0u64; w + 1]; n + 1];

    for i in 1..=n {
        let (value, weight) = (values[i - 1], weights[i - 1] as usize);
        for j in 0..=w {
            dp[i][j] = if weight <= j {
                let include = value + dp[i - 1][j - weight];
                let exclude = dp[i - 1][j];
                include.max(exclude)
            } else {
                dp[i - 1][j]
            };
        }
    }

    dp[n][w]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_instance_reaches_75() {
        let values = [15, 14, 10, 45, 30];
        let weights = [2, 5, 1, 3, 4];
        assert_eq!(max_value(&values, &weights, 7), 75);
    }

    #[test]
    fn zero_capacity_or_no_items() {
        assert_eq!(max_value(&[10], &[1], 0), 0);
        assert_eq!(max_value(&[], &[], 7), 0);
    }

    #[test]
    fn single_item_in_or_out() {
        assert_eq!(max_value(&[10], &[4], 3), 0);
        assert_eq!(max_value(&[10], &[4], 4), 10);
    }

    #[test]
    fn greedy_density_would_be_wrong_here() {
        // Density favors the weight-1 item, but the optimum skips it.
        let values = [10, 18];
        let weights = [1, 2];
        assert_eq!(max_value(&values, &weights, 2), 18);
    }

    #[test]
    #[should_panic(expected = "one weight per value")]
    fn mismatched_slices_are_a_caller_bug() {
        let _ = max_value(&[1, 2], &[1], 5);
    }
}

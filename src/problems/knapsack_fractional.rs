//! Fractional knapsack by greedy value density.
//!
//! Items may be taken in fractions, so the greedy choice — always take the
//! highest value-per-weight item next — is optimal by the usual exchange
//! argument: swapping any lower-density weight for higher-density weight
//! only improves the total.
//!
//! Sort is O(n log n); the fill is a single pass.

/// One item with an integral value and weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    /// Value of the whole item.
    pub value: u64,
    /// Weight of the whole item.
    pub weight: u64,
}

impl Item {
    /// Value density (value per unit weight). A zero-weight item has
    /// infinite density and is always taken whole.
    fn density(&self) -> f64 {
        self.value as f64 / self.weight as f64
    }
}

/// Maximum total value achievable within `capacity`, fractions allowed.
///
/// Items are considered by descending density; whole items are taken while
/// they fit, then the fraction of the next item that fills the remaining
/// capacity.
pub fn max_value(items: &[Item], capacity: u64) -> f64 {
    let mut by_density: Vec<Item> = items.to_vec();
    by_density.sort_by(|a, b| b.density().total_cmp(&a.density()));

    let mut remaining = capacity;
    let mut total = 0.0;
    for item in by_density {
        if remaining == 0 {
            break;
        }
        if item.weight <= remaining {
            remaining -= item.weight;
            total += item.value as f64;
        } else {
            total += item.value as f64 * remaining as f64 / item.weight as f64;
            remaining = 0;
        }
    }
    total
}

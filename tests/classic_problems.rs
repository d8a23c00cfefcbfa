//! The classic worked examples, end to end.

use backtrack_search::problems::knapsack_fractional::Item;
use backtrack_search::problems::{fibonacci, huffman::HuffmanTree, knapsack_01, knapsack_fractional};

#[test]
fn fibonacci_table_matches_the_recurrence() {
    let table = fibonacci::sequence(30);
    assert_eq!(table.len(), 31);
    for i in 2..table.len() {
        assert_eq!(table[i], table[i - 1] + table[i - 2]);
    }
    assert_eq!(table[30], 832_040);
}

#[test]
fn fibonacci_recursive_and_iterative_agree() {
    for n in 0..=25 {
        assert_eq!(fibonacci::recursive(n as u64), fibonacci::iterative(n));
    }
}

#[test]
fn huffman_classic_alphabet() {
    let tree = HuffmanTree::build(&[('A', 5), ('B', 9), ('C', 12), ('D', 13), ('E', 16)]).unwrap();
    let codes = tree.codes();
    assert_eq!(codes.len(), 5);

    // Frequent symbols never get longer codes than rare ones.
    let len_of = |symbol: char| {
        codes
            .iter()
            .find(|(s, _)| *s == symbol)
            .map(|(_, code)| code.len())
            .unwrap()
    };
    assert!(len_of('E') <= len_of('A'));
    assert!(len_of('D') <= len_of('B'));

    // Optimum: the sum of all internal merge frequencies.
    assert_eq!(tree.weighted_length(), 124);
}

#[test]
fn fractional_knapsack_classic_instance() {
    let items = [
        Item { value: 60, weight: 10 },
        Item { value: 100, weight: 20 },
        Item { value: 120, weight: 30 },
    ];
    assert_eq!(knapsack_fractional::max_value(&items, 50), 240.0);
}

#[test]
fn zero_one_knapsack_classic_instance() {
    let values = [15, 14, 10, 45, 30];
    let weights = [2, 5, 1, 3, 4];
    assert_eq!(knapsack_01::max_value(&values, &weights, 7), 75);
}

#[test]
fn fractional_bound_dominates_zero_one_on_the_same_instance() {
    let values = [15u64, 14, 10, 45, 30];
    let weights = [2u64, 5, 1, 3, 4];
    let items: Vec<Item> = values
        .iter()
        .zip(&weights)
        .map(|(&value, &weight)| Item { value, weight })
        .collect();
    for capacity in 0..=15 {
        let exact = knapsack_01::max_value(&values, &weights, capacity) as f64;
        let relaxed = knapsack_fractional::max_value(&items, capacity);
        assert!(relaxed >= exact, "capacity {capacity}: {relaxed} < {exact}");
    }
}

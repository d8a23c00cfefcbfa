//! Huffman code construction.
//!
//! Greedy construction of an optimal prefix-free code: repeatedly merge the
//! two lowest-frequency trees until one remains, then read codes off the
//! tree with `0` for a left edge and `1` for a right edge. Optimality
//! follows from the classic exchange argument.
//!
//! The min-heap is a [`BinaryHeap`] of [`Reverse`]d entries; ties are broken
//! by insertion order, so construction is deterministic and the emitted
//! codes are reproducible.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// A node of the code tree: a leaf carrying a symbol, or an internal merge.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
    Leaf { symbol: char, freq: u64 },
    Internal { freq: u64, left: Box<Node>, right: Box<Node> },
}

impl Node {
    fn freq(&self) -> u64 {
        match self {
            Node::Leaf { freq, .. } | Node::Internal { freq, .. } => *freq,
        }
    }
}

/// Heap entry ordered by (frequency, insertion order).
///
/// The secondary key pins down which tree is popped on equal frequencies;
/// without it the heap order (and hence the code assignment) would depend
/// on internal heap layout.
#[derive(Debug, Clone, PartialEq, Eq)]
struct HeapEntry {
    freq: u64,
    order: usize,
    node: Node,
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.freq, self.order).cmp(&(other.freq, other.order))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// A completed Huffman tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: Node,
}

impl HuffmanTree {
    /// Build the tree for `weights`, a slice of (symbol, frequency) pairs.
    ///
    /// Returns `None` for an empty alphabet. Each pair becomes a leaf; the
    /// two cheapest trees are merged until one remains.
    pub fn build(weights: &[(char, u64)]) -> Option<Self> {
        if weights.is_empty() {
            return None;
        }

        let mut heap: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::with_capacity(weights.len());
        let mut order = 0;
        for &(symbol, freq) in weights {
            heap.push(Reverse(HeapEntry {
                freq,
                order,
                node: Node::Leaf { symbol, freq },
            }));
            order += 1;
        }

        while heap.len() > 1 {
            let Reverse(left) = heap.pop().expect("heap has at least two entries");
            let Reverse(right) = heap.pop().expect("heap has at least two entries");
            let freq = left.node.freq() + right.node.freq();
            heap.push(Reverse(HeapEntry {
                freq,
                order,
                node: Node::Internal {
                    freq,
                    left: Box::new(left.node),
                    right: Box::new(right.node),
                },
            }));
            order += 1;
        }

        let Reverse(root) = heap.pop().expect("one tree remains");
        Some(Self { root: root.node })
    }

    /// The code table, one (symbol, code) pair per leaf, in tree order
    /// (left subtree before right).
    ///
    /// A single-symbol alphabet yields the empty code for its lone symbol.
    pub fn codes(&self) -> Vec<(char, String)> {
        let mut out = Vec::new();
        collect_codes(&self.root, String::new(), &mut out);
        out
    }

    /// Σ frequency × code length over all symbols: the cost the greedy
    /// construction minimizes.
    pub fn weighted_length(&self) -> u64 {
        fn walk(node: &Node, depth: u64) -> u64 {
            match node {
                Node::Leaf { freq, .. } => freq * depth,
                Node::Internal { left, right, .. } => walk(left, depth + 1) + walk(right, depth + 1),
            }
        }
        walk(&self.root, 0)
    }
}

fn collect_codes(node: &Node, code: String, out: &mut Vec<(char, String)>) {
    match node {
        Node::Leaf { symbol, .. } => out.push((*symbol, code)),
        Node::Internal { left, right, .. } => {
            collect_codes(left, format!("{code}0"), out);
            collect_codes(right, format!("{code}1"), out);
        }
    }
}

//! Huffman tree construction.
//!
//! Greedy bottom-up build: every distinct symbol starts as a leaf weighted
//! by its frequency; the two lightest nodes are merged under a new internal
//! node until a single root remains. Internal node frequency is always the
//! sum of its subtree's leaf frequencies.
//!
//! Nodes live in a flat arena (`Vec<Node>`) addressed by index, so walking
//! the tree never recurses and child links never dangle — an index is only
//! handed out after its node is pushed.

use crate::error::{EncodeError, Result};
use crate::freq::FrequencyTable;
use crate::heap::MinHeap;

/// Index of a node within the tree arena.
pub type NodeId = usize;

/// A single arena node: a symbol leaf or an internal node with two children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Carries one input symbol
    Leaf { symbol: u8 },
    /// Merge of exactly two lighter nodes
    Internal { left: NodeId, right: NodeId },
}

/// Arena node with its subtree frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    pub freq: u64,
    pub kind: NodeKind,
}

/// A built Huffman tree.
///
/// Holds `2k - 1` nodes for `k >= 2` distinct symbols (k leaves plus k - 1
/// internal nodes), or a single leaf node for a one-symbol alphabet.
#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Tree {
    /// Build a Huffman tree from a frequency table.
    ///
    /// Leaves are seeded into the heap in table iteration order. Each merge
    /// extracts the two minima — the first extracted becomes the left child,
    /// the second the right — and re-inserts the combined node.
    ///
    /// # Errors
    /// `EncodeError::EmptyInput` if the table has no symbols.
    pub fn build(freqs: &FrequencyTable) -> Result<Self> {
        if freqs.is_empty() {
            return Err(EncodeError::EmptyInput.into());
        }

        let distinct = freqs.distinct();
        let mut nodes = Vec::with_capacity(2 * distinct - 1);
        let mut heap = MinHeap::with_capacity(distinct);

        for (symbol, count) in freqs.iter() {
            let id = nodes.len();
            nodes.push(Node {
                freq: count,
                kind: NodeKind::Leaf { symbol },
            });
            heap.push(count, id);
        }

        loop {
            let (left_freq, left) = match heap.pop() {
                Some(entry) => entry,
                None => return Err(EncodeError::EmptyInput.into()),
            };

            match heap.pop() {
                Some((right_freq, right)) => {
                    let merged = left_freq + right_freq;
                    let id = nodes.len();
                    nodes.push(Node {
                        freq: merged,
                        kind: NodeKind::Internal { left, right },
                    });
                    heap.push(merged, id);
                }
                // Nothing left to merge with: `left` is the root. For a
                // one-symbol alphabet this is the lone leaf itself.
                None => return Ok(Self { nodes, root: left }),
            }
        }
    }

    /// Index of the root node.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Look up a node by arena index.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    /// Total number of nodes (leaves plus internal).
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

use crate::frequency::FrequencyTable;
use slotmap::{DefaultKey, SlotMap};
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Key of a node inside a [`HuffmanTree`] arena.
pub type NodeKey = DefaultKey;

/// A node of the Huffman tree.
///
/// A leaf carries a byte, an internal node always has both children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HuffmanNode {
    Leaf {
        byte: u8,
        weight: u64,
    },
    Internal {
        weight: u64,
        left: NodeKey,
        right: NodeKey,
    },
}

impl HuffmanNode {
    pub fn weight(&self) -> u64 {
        match *self {
            HuffmanNode::Leaf { weight, .. } | HuffmanNode::Internal { weight, .. } => weight,
        }
    }
}

/// Priority queue entry: ordered by weight, then by creation order.
#[derive(Debug, Clone, Copy)]
struct Pending {
    weight: u64,
    sequence: u64,
    key: NodeKey,
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Pending {}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then(self.sequence.cmp(&other.sequence))
    }
}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Huffman tree stored as an arena of nodes.
///
/// Built bottom-up from a [`FrequencyTable`]. Equal weights are broken by
/// creation order: leaves are created in ascending byte order, then every
/// merged node in the order it is formed. Building twice from the same table
/// therefore yields the same shape, which is what lets the decoder rebuild
/// the encoder's tree from the stored frequencies alone.
#[derive(Debug)]
pub struct HuffmanTree {
    nodes: SlotMap<NodeKey, HuffmanNode>,
    root: NodeKey,
}

impl HuffmanTree {
    /// Builds the tree, or returns `None` for an empty table.
    pub fn build(table: &FrequencyTable) -> Option<Self> {
        let mut nodes = SlotMap::with_capacity(table.distinct() * 2);
        let mut queue = BinaryHeap::with_capacity(table.distinct());
        let mut sequence = 0u64;

        for (byte, weight) in table.iter() {
            let key = nodes.insert(HuffmanNode::Leaf { byte, weight });
            queue.push(Reverse(Pending {
                weight,
                sequence,
                key,
            }));
            sequence += 1;
        }

        loop {
            let Reverse(left) = queue.pop()?;
            let Some(Reverse(right)) = queue.pop() else {
                return Some(Self {
                    nodes,
                    root: left.key,
                });
            };

            let weight = left.weight + right.weight;
            let key = nodes.insert(HuffmanNode::Internal {
                weight,
                left: left.key,
                right: right.key,
            });
            queue.push(Reverse(Pending {
                weight,
                sequence,
                key,
            }));
            sequence += 1;
        }
    }

    pub fn root(&self) -> NodeKey {
        self.root
    }

    pub fn node(&self, key: NodeKey) -> &HuffmanNode {
        &self.nodes[key]
    }

    /// Follows one edge: `false` goes left, `true` goes right.
    ///
    /// Returns `None` when `key` is a leaf.
    pub fn child(&self, key: NodeKey, bit: bool) -> Option<NodeKey> {
        match self.nodes[key] {
            HuffmanNode::Leaf { .. } => None,
            HuffmanNode::Internal { left, right, .. } => Some(if bit { right } else { left }),
        }
    }

    /// Total weight, equal to the length of the input the table came from.
    pub fn weight(&self) -> u64 {
        self.nodes[self.root].weight()
    }

    /// Number of leaves, i.e. distinct bytes.
    pub fn leaf_count(&self) -> usize {
        self.nodes
            .values()
            .filter(|node| matches!(node, HuffmanNode::Leaf { .. }))
            .count()
    }

    /// Number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

//! Per-call visited markers, one slot per node index.
#[cfg(feature = "bitvec")]
use bitvec::vec::BitVec;

use crate::node::NodeIndex;

/// A set of node indices, sized for a fixed number of nodes.  Backed by a
/// bit vector when the `bitvec` feature is enabled.
#[derive(Clone, Debug)]
pub struct VisitedSet {
    #[cfg(feature = "bitvec")]
    bits: BitVec,
    #[cfg(not(feature = "bitvec"))]
    bits: Vec<bool>,
    len: usize,
}

impl VisitedSet {
    /// Creates an empty set able to hold indices below `num_nodes`.
    pub fn new(num_nodes: usize) -> Self {
        Self {
            #[cfg(feature = "bitvec")]
            bits: BitVec::repeat(false, num_nodes),
            #[cfg(not(feature = "bitvec"))]
            bits: vec![false; num_nodes],
            len: 0,
        }
    }

    /// Marks a node as visited, returning true if it was not already marked.
    pub fn insert(&mut self, node: NodeIndex) -> bool {
        let index = node.index();
        if self.bits[index] {
            return false;
        }
        #[cfg(feature = "bitvec")]
        self.bits.set(index, true);
        #[cfg(not(feature = "bitvec"))]
        {
            self.bits[index] = true;
        }
        self.len += 1;
        true
    }

    pub fn contains(&self, node: NodeIndex) -> bool {
        self.bits[node.index()]
    }

    /// Gets the number of marked nodes.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

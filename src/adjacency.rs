//! Neighbor lookup.
//!
//! Traversals only need to know how many nodes there are and which nodes
//! are adjacent to a given one; the [`Neighbors`] trait captures exactly
//! that.  [`Graph`] implements it by scanning its link table on every call,
//! and [`AdjacencyIndex`] implements it from per-node lists built once up
//! front, for algorithms that look at every node.
use crate::{
    error::Result,
    node::{Node, NodeId, NodeIndex, NodeKey},
    store::Graph,
};

/// Read-only access to the adjacency structure of an undirected graph.
pub trait Neighbors {
    /// Gets the number of nodes.  Valid node indices are `0..node_count()`.
    fn node_count(&self) -> usize;

    /// Gets the nodes linked to `node`, in link order.  A node appears once
    /// per link, so parallel links repeat it.
    fn neighbor_indices(&self, node: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_;
}

impl Neighbors for Graph {
    fn node_count(&self) -> usize {
        self.num_nodes()
    }

    fn neighbor_indices(&self, node: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.links().iter().filter_map(move |link| link.other_end(node))
    }
}

/// Per-node neighbor lists derived from a graph's links.
#[derive(Clone, Debug)]
pub struct AdjacencyIndex {
    lists: Vec<Vec<NodeIndex>>,
}

impl AdjacencyIndex {
    /// Builds the index in one pass over the links.  Each link is recorded
    /// at both of its ends.
    pub fn new(graph: &Graph) -> Self {
        let mut lists = vec![Vec::new(); graph.num_nodes()];
        for link in graph.links() {
            lists[link.source().index()].push(link.target());
            lists[link.target().index()].push(link.source());
        }
        Self { lists }
    }

    /// Gets the neighbor list of a node.
    pub fn get(&self, node: NodeIndex) -> &[NodeIndex] {
        &self.lists[node.index()]
    }
}

impl Neighbors for AdjacencyIndex {
    fn node_count(&self) -> usize {
        self.lists.len()
    }

    fn neighbor_indices(&self, node: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.get(node).iter().copied()
    }
}

impl Graph {
    /// Builds an [`AdjacencyIndex`] for the current links.
    pub fn adjacency_index(&self) -> AdjacencyIndex {
        AdjacencyIndex::new(self)
    }

    /// Gets the nodes directly linked to the selected node, in link order.
    ///
    /// Fails if the key does not resolve, even when the caller only wanted
    /// to know whether the node has any links.
    pub fn neighbors<'a>(&self, key: impl Into<NodeKey<'a>>) -> Result<Vec<&Node>> {
        let node = self.resolve(key.into())?;
        Ok(self
            .neighbor_indices(node)
            .map(|index| self.node(index))
            .collect())
    }

    pub fn neighbors_by_id(&self, id: NodeId) -> Result<Vec<&Node>> {
        self.neighbors(NodeKey::Id(id))
    }

    pub fn neighbors_by_name(&self, name: &str) -> Result<Vec<&Node>> {
        self.neighbors(NodeKey::Name(name))
    }

    /// Gets the number of links touching the selected node.  A self-loop
    /// counts once, so this always equals the length of
    /// [`Self::neighbors`].
    pub fn degree<'a>(&self, key: impl Into<NodeKey<'a>>) -> Result<usize> {
        let node = self.resolve(key.into())?;
        Ok(self.neighbor_indices(node).count())
    }
}

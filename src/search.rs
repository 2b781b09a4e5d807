use std::collections::VecDeque;

use derivative::Derivative;

use crate::{
    adjacency::Neighbors,
    error::Result,
    node::{Node, NodeIndex, NodeKey},
    store::Graph,
    tracing_support::{debug, info_span},
    visited::VisitedSet,
};

fn check_start<N: Neighbors>(graph: &N, start: NodeIndex) {
    assert!(
        start.index() < graph.node_count(),
        "start node does not belong to this graph"
    );
}

/// Breadth-first traversal from a single start node.
///
/// Nodes are marked as visited when they are enqueued, starting with the
/// start node itself, so each reachable node is yielded exactly once and in
/// order of non-decreasing distance from the start.
#[derive(Derivative)]
#[derivative(Debug(bound = ""))]
pub struct BfsIterator<'g, N: Neighbors> {
    #[derivative(Debug = "ignore")]
    graph: &'g N,
    visited: VisitedSet,
    queue: VecDeque<(NodeIndex, usize)>,
}

impl<'g, N> BfsIterator<'g, N>
where
    N: Neighbors,
{
    /// Starts a search at `start`.  Panics if `start` does not belong to
    /// `graph`.
    pub fn new(graph: &'g N, start: NodeIndex) -> Self {
        check_start(graph, start);
        let mut visited = VisitedSet::new(graph.node_count());
        visited.insert(start);
        Self {
            graph,
            visited,
            queue: VecDeque::from([(start, 0)]),
        }
    }

    /// Converts this iterator into one that also yields each node's distance
    /// from the start node.
    pub fn with_depth(self) -> BfsIteratorWithDepth<'g, N> {
        BfsIteratorWithDepth(self)
    }

    fn next_with_depth(&mut self) -> Option<(NodeIndex, usize)> {
        let (nid, depth) = self.queue.pop_front()?;
        for neighbor in self.graph.neighbor_indices(nid) {
            if self.visited.insert(neighbor) {
                self.queue.push_back((neighbor, depth + 1));
            }
        }
        Some((nid, depth))
    }
}

impl<'g, N> Iterator for BfsIterator<'g, N>
where
    N: Neighbors,
{
    type Item = NodeIndex;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_with_depth().map(|(nid, _)| nid)
    }
}

/// A [`BfsIterator`] that yields `(node, distance)` pairs.
#[derive(Derivative)]
#[derivative(Debug(bound = ""))]
pub struct BfsIteratorWithDepth<'g, N: Neighbors>(BfsIterator<'g, N>);

impl<'g, N> Iterator for BfsIteratorWithDepth<'g, N>
where
    N: Neighbors,
{
    type Item = (NodeIndex, usize);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next_with_depth()
    }
}

/// Depth-first traversal from a single start node.
///
/// Shares the bookkeeping of [`BfsIterator`] but pops from a stack.  Nodes
/// are marked when pushed and neighbors are pushed in link order, so the
/// most recently discovered neighbor is explored first.
#[derive(Derivative)]
#[derivative(Debug(bound = ""))]
pub struct DfsIterator<'g, N: Neighbors> {
    #[derivative(Debug = "ignore")]
    graph: &'g N,
    visited: VisitedSet,
    stack: Vec<NodeIndex>,
}

impl<'g, N> DfsIterator<'g, N>
where
    N: Neighbors,
{
    /// Starts a search at `start`.  Panics if `start` does not belong to
    /// `graph`.
    pub fn new(graph: &'g N, start: NodeIndex) -> Self {
        check_start(graph, start);
        let mut visited = VisitedSet::new(graph.node_count());
        visited.insert(start);
        Self {
            graph,
            visited,
            stack: vec![start],
        }
    }
}

impl<'g, N> Iterator for DfsIterator<'g, N>
where
    N: Neighbors,
{
    type Item = NodeIndex;

    fn next(&mut self) -> Option<Self::Item> {
        let nid = self.stack.pop()?;
        for neighbor in self.graph.neighbor_indices(nid) {
            if self.visited.insert(neighbor) {
                self.stack.push(neighbor);
            }
        }
        Some(nid)
    }
}

impl Graph {
    /// Performs a breadth-first search from the selected node.
    pub fn bfs_iter<'a>(&self, start: impl Into<NodeKey<'a>>) -> Result<BfsIterator<'_, Self>> {
        Ok(BfsIterator::new(self, self.resolve(start.into())?))
    }

    /// Performs a depth-first search from the selected node.
    pub fn dfs_iter<'a>(&self, start: impl Into<NodeKey<'a>>) -> Result<DfsIterator<'_, Self>> {
        Ok(DfsIterator::new(self, self.resolve(start.into())?))
    }

    /// Calls `visit` on every node reachable from `start`, in breadth-first
    /// order.  Nothing is visited if `start` does not resolve.
    pub fn bfs<'a>(
        &self,
        start: impl Into<NodeKey<'a>>,
        mut visit: impl FnMut(&Node),
    ) -> Result<()> {
        let start = start.into();
        let _span = info_span!("bfs", %start).entered();
        let mut count = 0usize;
        for nid in self.bfs_iter(start)? {
            visit(self.node(nid));
            count += 1;
        }
        debug!(visited = count, "bfs finished");
        Ok(())
    }

    /// Calls `visit` on every node reachable from `start`, in depth-first
    /// order.  Nothing is visited if `start` does not resolve.
    pub fn dfs<'a>(
        &self,
        start: impl Into<NodeKey<'a>>,
        mut visit: impl FnMut(&Node),
    ) -> Result<()> {
        let start = start.into();
        let _span = info_span!("dfs", %start).entered();
        let mut count = 0usize;
        for nid in self.dfs_iter(start)? {
            visit(self.node(nid));
            count += 1;
        }
        debug!(visited = count, "dfs finished");
        Ok(())
    }
}

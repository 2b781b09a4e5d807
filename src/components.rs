//! Connected components.
//!
//! Both entry points share one walk over an [`AdjacencyIndex`] built once
//! per call.  The walk uses an explicit stack that reproduces the preorder
//! of a recursive depth-first search, so memory use is bounded by the heap
//! rather than the call stack and very long chains are handled safely.
use crate::{
    adjacency::{AdjacencyIndex, Neighbors},
    node::{Node, NodeIndex},
    store::Graph,
    tracing_support::{debug, info_span},
    visited::VisitedSet,
};

/// Walks every component of the graph, calling `on_node` with the ordinal of
/// the component and each member in preorder.  Roots are taken in node
/// order.  Returns the number of components.
fn walk_components(
    adjacency: &AdjacencyIndex,
    mut on_node: impl FnMut(usize, NodeIndex),
) -> usize {
    let num_nodes = adjacency.node_count();
    let mut visited = VisitedSet::new(num_nodes);
    let mut stack = Vec::new();
    let mut count = 0;

    for root in (0..num_nodes).map(NodeIndex::new) {
        if visited.contains(root) {
            continue;
        }
        stack.push(root);
        while let Some(nid) = stack.pop() {
            if !visited.insert(nid) {
                continue;
            }
            on_node(count, nid);
            // Reversed so the first neighbor is explored first.
            stack.extend(
                adjacency
                    .get(nid)
                    .iter()
                    .rev()
                    .filter(|&&neighbor| !visited.contains(neighbor)),
            );
        }
        count += 1;
    }
    count
}

impl Graph {
    /// Partitions the node indices into connected components.
    pub fn component_indices(&self) -> Vec<Vec<NodeIndex>> {
        let mut components: Vec<Vec<NodeIndex>> = Vec::new();
        walk_components(&self.adjacency_index(), |ordinal, nid| {
            if ordinal == components.len() {
                components.push(Vec::new());
            }
            components[ordinal].push(nid);
        });
        components
    }

    /// Partitions the nodes into connected components.
    ///
    /// Components are ordered by their first node in [`Self::nodes`], and
    /// each component starts with that node.  Every node appears in exactly
    /// one component.
    pub fn connected_components(&self) -> Vec<Vec<&Node>> {
        let _span = info_span!("connected_components").entered();
        let components: Vec<Vec<&Node>> = self
            .component_indices()
            .into_iter()
            .map(|members| members.into_iter().map(|nid| self.node(nid)).collect())
            .collect();
        debug!(components = components.len(), "connected components found");
        components
    }

    /// Counts the connected components.  Always equal to the length of
    /// [`Self::connected_components`].
    pub fn number_of_connected_components(&self) -> usize {
        let _span = info_span!("number_of_connected_components").entered();
        let count = walk_components(&self.adjacency_index(), |_, _| {});
        debug!(components = count, "connected components counted");
        count
    }
}

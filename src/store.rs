//! The node and link tables that every traversal reads from.
//!
//! Nodes live in a single table and are addressed by [`NodeIndex`].  Links
//! hold index pairs into that table, so a link never owns or duplicates a
//! node.  User-facing lookups go through [`Graph::resolve`], which turns a
//! [`NodeKey`] into an index using one canonical set of rules:
//!
//! - by id: a hash lookup, failing with [`GraphError::NotFound`];
//! - by name: a scan of the node table, failing with
//!   [`GraphError::NotFound`] when nothing matches and with
//!   [`GraphError::AmbiguousName`] when more than one node matches.
use std::collections::HashMap;

use crate::{
    error::{GraphError, Result},
    link::{Link, LinkIndex},
    node::{Node, NodeId, NodeIndex, NodeKey},
};

/// An undirected graph of named nodes.
///
/// The graph only grows: nodes and links can be added but not removed, so
/// every [`NodeIndex`] and [`LinkIndex`] handed out stays valid.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    links: Vec<Link>,
    ids: HashMap<NodeId, NodeIndex>,
    max_id: Option<u64>,
}

impl Graph {
    /// Creates a new, empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with room for the given number of nodes and
    /// links.
    pub fn with_capacity(nodes: usize, links: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
            links: Vec::with_capacity(links),
            ids: HashMap::with_capacity(nodes),
            max_id: None,
        }
    }

    // Nodes

    /// Adds a node with the given name and the default size.  Its id is one
    /// more than the largest id in the graph, or 1 if the graph is empty.
    /// Once `u64::MAX` is taken, the lowest free id is used instead.
    pub fn add_node(&mut self, name: impl Into<String>) -> NodeIndex {
        let id = self.next_free_id();
        self.push_node(Node::new(id, name))
    }

    fn next_free_id(&self) -> NodeId {
        match self.max_id {
            None => NodeId(1),
            Some(max) => match max.checked_add(1) {
                Some(next) => NodeId(next),
                None => (1..=u64::MAX)
                    .map(NodeId)
                    .find(|id| !self.ids.contains_key(id))
                    .unwrap_or(NodeId(0)),
            },
        }
    }

    /// Adds a node with an explicit id.
    pub fn add_node_with_id(&mut self, id: NodeId, name: impl Into<String>) -> Result<NodeIndex> {
        self.insert_node(Node::new(id, name))
    }

    /// Adds a fully built node, failing if its id is already taken.
    pub fn insert_node(&mut self, node: Node) -> Result<NodeIndex> {
        if self.ids.contains_key(&node.id()) {
            return Err(GraphError::DuplicateId(node.id()));
        }
        Ok(self.push_node(node))
    }

    fn push_node(&mut self, node: Node) -> NodeIndex {
        let index = NodeIndex::new(self.nodes.len());
        debug_assert!(!self.ids.contains_key(&node.id()));
        self.max_id = self.max_id.max(Some(node.id().0));
        self.ids.insert(node.id(), index);
        self.nodes.push(node);
        index
    }

    /// Gets the node at the given index.  Panics if the index does not
    /// belong to this graph.
    pub fn node(&self, index: NodeIndex) -> &Node {
        &self.nodes[index.index()]
    }

    /// Gets all nodes, in insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Gets the indices of all nodes, in insertion order.
    pub fn node_indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        (0..self.nodes.len()).map(NodeIndex::new)
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Looks up a node by id.
    pub fn node_by_id(&self, id: NodeId) -> Result<&Node> {
        self.resolve(NodeKey::Id(id)).map(|index| self.node(index))
    }

    /// Gets every node with the given name, in insertion order.  Fails
    /// instead of returning an empty vector when there is no such node.
    pub fn nodes_by_name(&self, name: &str) -> Result<Vec<&Node>> {
        let matches: Vec<&Node> = self.nodes.iter().filter(|n| n.name() == name).collect();
        if matches.is_empty() {
            return Err(GraphError::not_found(NodeKey::Name(name)));
        }
        Ok(matches)
    }

    /// Resolves a node selector to the index of the single node it names.
    pub fn resolve(&self, key: NodeKey<'_>) -> Result<NodeIndex> {
        match key {
            NodeKey::Id(id) => self
                .ids
                .get(&id)
                .copied()
                .ok_or_else(|| GraphError::not_found(key)),
            NodeKey::Name(name) => {
                let mut matches = self
                    .node_indices()
                    .filter(|&index| self.node(index).name() == name);
                let first = matches.next().ok_or_else(|| GraphError::not_found(key))?;
                let others = matches.count();
                if others > 0 {
                    return Err(GraphError::AmbiguousName {
                        name: name.to_string(),
                        count: others + 1,
                    });
                }
                Ok(first)
            }
        }
    }

    // Links

    /// Adds an unweighted link.  Panics if either index does not belong to
    /// this graph.
    pub fn add_link(&mut self, source: NodeIndex, target: NodeIndex) -> LinkIndex {
        self.push_link(Link::new(source, target, None))
    }

    /// Adds a weighted link.  Panics if either index does not belong to this
    /// graph.
    pub fn add_weighted_link(
        &mut self,
        source: NodeIndex,
        target: NodeIndex,
        weight: f64,
    ) -> LinkIndex {
        self.push_link(Link::new(source, target, Some(weight)))
    }

    /// Adds an unweighted link between the nodes selected by two keys.
    pub fn connect<'a>(
        &mut self,
        source: impl Into<NodeKey<'a>>,
        target: impl Into<NodeKey<'a>>,
    ) -> Result<LinkIndex> {
        let source = self.resolve(source.into())?;
        let target = self.resolve(target.into())?;
        Ok(self.add_link(source, target))
    }

    fn push_link(&mut self, link: Link) -> LinkIndex {
        assert!(
            link.source().index() < self.nodes.len() && link.target().index() < self.nodes.len(),
            "link endpoint does not belong to this graph: {link:?}"
        );
        let index = LinkIndex::new(self.links.len());
        self.links.push(link);
        index
    }

    pub fn link(&self, index: LinkIndex) -> &Link {
        &self.links[index.index()]
    }

    /// Gets all links, in insertion order.
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn num_links(&self) -> usize {
        self.links.len()
    }

    /// Finds the first link running from `source` to `target`.  Only the
    /// given direction matches.  Returns `Ok(None)` if both nodes exist but
    /// no such link does.
    pub fn find_link<'a>(
        &self,
        source: impl Into<NodeKey<'a>>,
        target: impl Into<NodeKey<'a>>,
    ) -> Result<Option<&Link>> {
        let source = self.resolve(source.into())?;
        let target = self.resolve(target.into())?;
        Ok(self
            .links
            .iter()
            .find(|link| link.source() == source && link.target() == target))
    }
}

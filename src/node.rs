use std::fmt::{self, Display};

/// Display size given to nodes created without an explicit size.
pub const DEFAULT_NODE_SIZE: f64 = 3.0;

/// The user-visible identity of a node.  Unique within a graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

impl Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u64> for NodeId {
    fn from(value: u64) -> Self {
        NodeId(value)
    }
}

/// The position of a node in a graph's node table.  Indices are assigned in
/// insertion order and stay valid for the life of the graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIndex(usize);

impl NodeIndex {
    pub(crate) fn new(index: usize) -> Self {
        NodeIndex(index)
    }

    /// Returns the position of the node in [`crate::Graph::nodes`].
    pub fn index(self) -> usize {
        self.0
    }
}

/// A graph vertex.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    id: NodeId,
    name: String,
    size: f64,
    color: Option<String>,
}

impl Node {
    /// Creates a node with the default size and no color.
    pub fn new(id: NodeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            size: DEFAULT_NODE_SIZE,
            color: None,
        }
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The node's name.  Names are not required to be unique.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }
}

/// Selects a node either by id or by name.
///
/// Lookups by name require the name to be unique in the graph; a name shared
/// by several nodes resolves to [`crate::GraphError::AmbiguousName`] rather
/// than to an arbitrary match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKey<'a> {
    Id(NodeId),
    Name(&'a str),
}

impl From<NodeId> for NodeKey<'_> {
    fn from(id: NodeId) -> Self {
        NodeKey::Id(id)
    }
}

impl<'a> From<&'a str> for NodeKey<'a> {
    fn from(name: &'a str) -> Self {
        NodeKey::Name(name)
    }
}

impl<'a> From<&'a Node> for NodeKey<'a> {
    fn from(node: &'a Node) -> Self {
        NodeKey::Id(node.id())
    }
}

impl Display for NodeKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKey::Id(id) => write!(f, "id {id}"),
            NodeKey::Name(name) => write!(f, "name {name:?}"),
        }
    }
}

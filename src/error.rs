use crate::node::{NodeId, NodeKey};

/// Errors returned by node lookups and by the operations built on them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// No node matches the given id or name.
    #[error("node with {key} does not exist")]
    NotFound {
        /// The selector that failed to resolve, e.g. `id 7` or `name "x"`.
        key: String,
    },
    /// A by-name lookup matched more than one node.
    #[error("{count} nodes share the name {name:?}")]
    AmbiguousName { name: String, count: usize },
    /// A node with this id is already in the graph.
    #[error("node with id {0} already exists")]
    DuplicateId(NodeId),
}

impl GraphError {
    pub(crate) fn not_found(key: NodeKey<'_>) -> Self {
        GraphError::NotFound {
            key: key.to_string(),
        }
    }

    /// Returns true if this is a [`GraphError::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, GraphError::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;

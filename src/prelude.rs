pub use crate::adjacency::Neighbors;
pub use crate::error::{GraphError, Result};
pub use crate::node::{Node, NodeId, NodeKey};
pub use crate::store::Graph;

//! An in-memory graph of named nodes with traversal and structural analysis.
//!
//! [`Graph`] stores nodes in a single table and links as index pairs into
//! it.  On top of that it provides:
//!
//! - neighbor and degree queries ([`Graph::neighbors`], [`Graph::degree`]);
//! - breadth- and depth-first search, either as visitor calls
//!   ([`Graph::bfs`], [`Graph::dfs`]) or as iterators ([`BfsIterator`],
//!   [`DfsIterator`]);
//! - connected components ([`Graph::connected_components`],
//!   [`Graph::number_of_connected_components`]);
//! - similarity grouping ([`Graph::find_similar_node_groups`]).
//!
//! Links are undirected for every traversal.  Nodes are selected with a
//! [`NodeKey`], either by id or by name.
pub mod adjacency;
pub mod components;
pub mod error;
pub mod link;
pub mod node;
pub mod prelude;
pub mod search;
pub mod similarity;
pub mod store;
pub mod tracing_support;
pub mod visited;

#[cfg(test)]
mod graph_tests;
#[cfg(test)]
mod test_support;

pub use adjacency::{AdjacencyIndex, Neighbors};
pub use error::{GraphError, Result};
pub use link::{Link, LinkIndex};
pub use node::{DEFAULT_NODE_SIZE, Node, NodeId, NodeIndex, NodeKey};
pub use search::{BfsIterator, BfsIteratorWithDepth, DfsIterator};
pub use store::Graph;

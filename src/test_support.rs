use std::collections::HashSet;
use std::hash::Hash;

use quickcheck::{Arbitrary, Gen};

use crate::{Graph, NodeIndex};

/// A small random graph: up to 20 uniquely named nodes and up to 40 links,
/// including the occasional self-loop and parallel link.
#[derive(Debug, Clone)]
pub struct ArbGraph {
    pub graph: Graph,
}

impl Arbitrary for ArbGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let num_nodes = usize::arbitrary(g) % 20; // Limit size for testing
        let num_links = usize::arbitrary(g) % 40;

        let mut graph = Graph::with_capacity(num_nodes, num_links);
        let nodes: Vec<_> = (0..num_nodes)
            .map(|i| graph.add_node(format!("n{i}")))
            .collect();

        for _ in 0..num_links {
            if nodes.is_empty() {
                break;
            }
            let source = nodes[usize::arbitrary(g) % nodes.len()];
            let target = nodes[usize::arbitrary(g) % nodes.len()];
            match Option::<u8>::arbitrary(g) {
                Some(weight) => graph.add_weighted_link(source, target, weight.into()),
                None => graph.add_link(source, target),
            };
        }

        ArbGraph { graph }
    }
}

impl ArbGraph {
    /// Picks a node of the graph from an arbitrary seed, or `None` if the
    /// graph is empty.
    pub fn pick(&self, seed: usize) -> Option<NodeIndex> {
        let num_nodes = self.graph.num_nodes();
        (num_nodes > 0).then(|| NodeIndex::new(seed % num_nodes))
    }
}

pub fn has_duplicates<T: Eq + Hash>(items: impl IntoIterator<Item = T>) -> bool {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item) {
            return true;
        }
    }
    false
}

/// Builds an irregular graph with a known shape:
///
/// - a chain of `chain_len` nodes, deep enough to overflow a recursive walk;
/// - a dense cluster of 50 nodes hung off the middle of the chain;
/// - a sparse cluster of 150 nodes, separate from the chain;
/// - 25 isolated nodes, some with self-loops.
///
/// Returns the index of the first chain node.
pub fn generate_large_graph(graph: &mut Graph, chain_len: usize) -> NodeIndex {
    assert!(chain_len > 0);

    let chain: Vec<_> = (0..chain_len)
        .map(|i| graph.add_node(format!("chain{i}")))
        .collect();
    for pair in chain.windows(2) {
        graph.add_link(pair[0], pair[1]);
    }

    // Dense cluster, every member linked to the first so it stays connected.
    let dense: Vec<_> = (0..50).map(|i| graph.add_node(format!("dense{i}"))).collect();
    for i in 0..dense.len() {
        for j in (i + 1)..dense.len() {
            if i == 0 || (i * 7 + j * 11) % 10 < 6 {
                graph.add_link(dense[i], dense[j]);
            }
        }
    }
    graph.add_link(chain[chain_len / 2], dense[0]);

    // Sparse cluster, held together by a spine.
    let sparse: Vec<_> = (0..150)
        .map(|i| graph.add_node(format!("sparse{i}")))
        .collect();
    for pair in sparse.windows(2) {
        graph.add_link(pair[1], pair[0]);
    }
    for i in 0..sparse.len() {
        for j in (i + 2)..sparse.len() {
            if (i * 19 + j * 23) % 100 < 8 {
                graph.add_weighted_link(sparse[i], sparse[j], (i + j) as f64);
            }
        }
    }

    for i in 0..25 {
        let lonely = graph.add_node(format!("lonely{i}"));
        if i % 5 == 0 {
            graph.add_link(lonely, lonely);
        }
    }

    chain[0]
}

/// Number of components produced by [`generate_large_graph`].
pub const LARGE_GRAPH_COMPONENTS: usize = 2 + 25;

use crate::node::NodeIndex;

/// The position of a link in a graph's link table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LinkIndex(usize);

impl LinkIndex {
    pub(crate) fn new(index: usize) -> Self {
        LinkIndex(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// An edge between two nodes of the same graph.  The source/target labels
/// only matter for rendering and [`crate::Graph::find_link`]; traversals
/// treat every link as undirected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    source: NodeIndex,
    target: NodeIndex,
    weight: Option<f64>,
}

impl Link {
    pub(crate) fn new(source: NodeIndex, target: NodeIndex, weight: Option<f64>) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    pub fn source(&self) -> NodeIndex {
        self.source
    }

    pub fn target(&self) -> NodeIndex {
        self.target
    }

    pub fn weight(&self) -> Option<f64> {
        self.weight
    }

    /// Checks if the link is a self-loop.
    pub fn is_loop(&self) -> bool {
        self.source == self.target
    }

    /// Given one end of the link, returns the other end, or `None` if `node`
    /// is not an endpoint.  A self-loop returns `node` itself.
    pub fn other_end(&self, node: NodeIndex) -> Option<NodeIndex> {
        if self.source == node {
            Some(self.target)
        } else if self.target == node {
            Some(self.source)
        } else {
            None
        }
    }
}

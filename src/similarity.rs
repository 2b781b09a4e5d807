//! Grouping of linked nodes by a caller-supplied similarity test.
//!
//! Each group grows outward from an anchor node, breadth first, through
//! links.  A candidate joins the group when `metric(anchor, candidate)`
//! holds; the comparison is always against the anchor, never against the
//! member through which the candidate was reached.  Expansion continues only
//! through accepted members.
//!
//! Every node is evaluated as a candidate at most once per call.  A rejected
//! candidate can never join any group, but it still anchors a group of its
//! own when the scan over the node table reaches it unclaimed.
use std::collections::VecDeque;

use crate::{
    adjacency::Neighbors,
    node::{Node, NodeIndex},
    store::Graph,
    tracing_support::{debug, info_span, trace},
    visited::VisitedSet,
};

impl Graph {
    /// Groups node indices by similarity to each group's anchor.  See the
    /// module documentation for the exact rules.
    pub fn similar_node_group_indices<F>(&self, mut metric: F) -> Vec<Vec<NodeIndex>>
    where
        F: FnMut(&Node, &Node) -> bool,
    {
        let adjacency = self.adjacency_index();
        let mut claimed = VisitedSet::new(adjacency.node_count());
        let mut rejected = VisitedSet::new(adjacency.node_count());
        let mut queue = VecDeque::new();
        let mut groups = Vec::new();

        for anchor in self.node_indices() {
            if !claimed.insert(anchor) {
                continue;
            }
            let anchor_node = self.node(anchor);
            let mut group = vec![anchor];
            queue.clear();
            queue.extend(adjacency.neighbor_indices(anchor));

            while let Some(candidate) = queue.pop_front() {
                if claimed.contains(candidate) || rejected.contains(candidate) {
                    continue;
                }
                if metric(anchor_node, self.node(candidate)) {
                    claimed.insert(candidate);
                    group.push(candidate);
                    queue.extend(adjacency.neighbor_indices(candidate));
                } else {
                    trace!(
                        anchor = %anchor_node.id(),
                        candidate = %self.node(candidate).id(),
                        "candidate rejected"
                    );
                    rejected.insert(candidate);
                }
            }
            groups.push(group);
        }
        debug!(
            groups = groups.len(),
            rejected = rejected.len(),
            "similar node groups found"
        );
        groups
    }

    /// Groups nodes by similarity to each group's anchor, the first node of
    /// every group.  Groups are ordered by anchor position in
    /// [`Self::nodes`]; members follow in the order they were accepted.
    pub fn find_similar_node_groups<F>(&self, metric: F) -> Vec<Vec<&Node>>
    where
        F: FnMut(&Node, &Node) -> bool,
    {
        let _span = info_span!("find_similar_node_groups").entered();
        self.similar_node_group_indices(metric)
            .into_iter()
            .map(|group| group.into_iter().map(|nid| self.node(nid)).collect())
            .collect()
    }
}

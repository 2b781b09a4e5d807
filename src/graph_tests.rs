//! Property tests over random graphs.
use std::collections::{HashMap, HashSet};

use quickcheck_macros::quickcheck;

use crate::{
    Graph, NodeIndex, NodeKey,
    adjacency::Neighbors,
    test_support::{ArbGraph, LARGE_GRAPH_COMPONENTS, generate_large_graph, has_duplicates},
    tracing_support::init_tracing,
};

fn bfs_distances(graph: &Graph, start: NodeIndex) -> HashMap<NodeIndex, usize> {
    crate::search::BfsIterator::new(graph, start)
        .with_depth()
        .collect()
}

#[quickcheck]
fn prop_components_partition_nodes(ArbGraph { graph }: ArbGraph) -> bool {
    let members: Vec<NodeIndex> = graph.component_indices().into_iter().flatten().collect();
    members.len() == graph.num_nodes()
        && !has_duplicates(members.iter())
        && members.iter().copied().collect::<HashSet<_>>()
            == graph.node_indices().collect::<HashSet<_>>()
}

#[quickcheck]
fn prop_component_count_matches(ArbGraph { graph }: ArbGraph) -> bool {
    graph.number_of_connected_components() == graph.connected_components().len()
}

#[quickcheck]
fn prop_components_agree_with_pathfinding(ArbGraph { graph }: ArbGraph) -> bool {
    let ours: HashSet<Vec<NodeIndex>> = graph
        .component_indices()
        .into_iter()
        .map(|mut c| {
            c.sort();
            c
        })
        .collect();
    let nodes: Vec<NodeIndex> = graph.node_indices().collect();
    let theirs: HashSet<Vec<NodeIndex>> =
        pathfinding::prelude::connected_components(&nodes, |&nid| {
            graph.neighbor_indices(nid).collect::<Vec<_>>()
        })
        .into_iter()
        .map(|c| {
            let mut c: Vec<_> = c.into_iter().collect();
            c.sort();
            c
        })
        .collect();
    ours == theirs
}

#[quickcheck]
fn prop_component_independent_of_root(arb: ArbGraph, seed: usize) -> bool {
    let Some(start) = arb.pick(seed) else {
        return true;
    };
    let graph = &arb.graph;
    let reached: HashSet<NodeIndex> = graph.bfs_iter(graph.node(start)).unwrap().collect();
    let component: HashSet<NodeIndex> = graph
        .component_indices()
        .into_iter()
        .find(|c| c.contains(&start))
        .unwrap()
        .into_iter()
        .collect();
    reached == component
}

#[quickcheck]
fn prop_bfs_and_dfs_reach_same_nodes_once(arb: ArbGraph, seed: usize) -> bool {
    let Some(start) = arb.pick(seed) else {
        return true;
    };
    let graph = &arb.graph;
    let key = NodeKey::from(graph.node(start));
    let mut bfs = Vec::new();
    graph.bfs(key, |n| bfs.push(n.id())).unwrap();
    let mut dfs = Vec::new();
    graph.dfs(key, |n| dfs.push(n.id())).unwrap();
    !has_duplicates(bfs.iter())
        && !has_duplicates(dfs.iter())
        && bfs.iter().collect::<HashSet<_>>() == dfs.iter().collect::<HashSet<_>>()
        && bfs.first() == Some(&graph.node(start).id())
        && dfs.first() == Some(&graph.node(start).id())
}

#[quickcheck]
fn prop_bfs_distance_is_nondecreasing(arb: ArbGraph, seed: usize) -> bool {
    let Some(start) = arb.pick(seed) else {
        return true;
    };
    let graph = &arb.graph;
    let depths: Vec<usize> = crate::search::BfsIterator::new(graph, start)
        .with_depth()
        .map(|(_, depth)| depth)
        .collect();
    if !depths.windows(2).all(|w| w[0] <= w[1]) {
        return false;
    }
    // Reported depths are true shortest distances.
    let distances = bfs_distances(graph, start);
    distances.iter().all(|(&nid, &depth)| {
        nid == start
            || graph
                .neighbor_indices(nid)
                .filter_map(|neighbor| distances.get(&neighbor))
                .min()
                .is_some_and(|&closest| closest + 1 == depth)
    })
}

#[quickcheck]
fn prop_repeated_calls_agree(ArbGraph { graph }: ArbGraph) -> bool {
    let same_len = |a: &crate::Node, b: &crate::Node| a.name().len() == b.name().len();
    graph.connected_components() == graph.connected_components()
        && graph.find_similar_node_groups(same_len) == graph.find_similar_node_groups(same_len)
        && graph.node_indices().all(|nid| {
            graph.bfs_iter(graph.node(nid)).unwrap().collect::<Vec<_>>()
                == graph.bfs_iter(graph.node(nid)).unwrap().collect::<Vec<_>>()
        })
}

#[quickcheck]
fn prop_never_similar_gives_singletons(ArbGraph { graph }: ArbGraph) -> bool {
    let groups = graph.similar_node_group_indices(|_, _| false);
    groups.len() == graph.num_nodes()
        && groups
            .iter()
            .zip(graph.node_indices())
            .all(|(group, nid)| group == &vec![nid])
}

#[quickcheck]
fn prop_always_similar_gives_components(ArbGraph { graph }: ArbGraph) -> bool {
    let mut groups = graph.similar_node_group_indices(|_, _| true);
    let mut components = graph.component_indices();
    for set in groups.iter_mut().chain(components.iter_mut()) {
        set.sort();
    }
    groups == components
}

#[quickcheck]
fn prop_similarity_groups_are_disjoint(ArbGraph { graph }: ArbGraph, modulus: u8) -> bool {
    let modulus = usize::from(modulus.max(1));
    let groups = graph
        .similar_node_group_indices(|a, b| a.name().len() % modulus == b.name().len() % modulus);
    let members: Vec<_> = groups.iter().flatten().collect();
    !has_duplicates(members.iter()) && members.len() <= graph.num_nodes()
}

#[quickcheck]
fn prop_degree_matches_neighbors(ArbGraph { graph }: ArbGraph) -> bool {
    graph.nodes().iter().all(|node| {
        graph.degree(node).unwrap() == graph.neighbors_by_id(node.id()).unwrap().len()
            && graph.neighbors_by_id(node.id()) == graph.neighbors_by_name(node.name())
    })
}

#[test]
fn test_large_graph_components() {
    init_tracing();
    let mut graph = Graph::new();
    let start = generate_large_graph(&mut graph, 100_000);

    let components = graph.component_indices();
    assert_eq!(components.len(), LARGE_GRAPH_COMPONENTS);
    assert_eq!(graph.number_of_connected_components(), LARGE_GRAPH_COMPONENTS);
    assert_eq!(components[0][0], start);
    assert_eq!(components[0].len(), 100_000 + 50);
    assert_eq!(components[1].len(), 150);
    assert!(components[2..].iter().all(|c| c.len() == 1));

    assert_eq!(graph.dfs_iter(graph.node(start)).unwrap().count(), 100_050);
}

#[test]
fn test_large_graph_similarity() {
    init_tracing();
    let mut graph = Graph::new();
    generate_large_graph(&mut graph, 10_000);
    let prefix = |name: &str| name.trim_end_matches(|c: char| c.is_ascii_digit()).to_string();
    let groups = graph.find_similar_node_groups(|a, b| prefix(a.name()) == prefix(b.name()));
    assert_eq!(groups[0].len(), 10_000);
    assert!(groups[0].iter().all(|n| n.name().starts_with("chain")));
    assert_eq!(groups[1].len(), 50);
    assert_eq!(groups[2].len(), 150);
}

#[cfg(feature = "slow_tests")]
#[test]
fn test_very_deep_chain() {
    init_tracing();
    let mut graph = Graph::new();
    let start = generate_large_graph(&mut graph, 2_000_000);
    assert_eq!(graph.number_of_connected_components(), LARGE_GRAPH_COMPONENTS);
    assert_eq!(graph.bfs_iter(graph.node(start)).unwrap().count(), 2_000_050);
}

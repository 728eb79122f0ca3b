//! Graph algorithms module
//!
//! Search algorithms live in the `wayfinder-algorithms` crate and run
//! against a dense [`GraphView`]. This module provides the adapter layer
//! that snapshots a [`GraphStore`] into such a view.

pub mod pathfinding;

use crate::graph::GraphStore;
use wayfinder_algorithms::{GraphView, NodeId as AlgoNodeId};
use std::collections::HashMap;

pub use pathfinding::{find_path, find_path_in, PathResult};
pub use wayfinder_algorithms::Metric;

/// Build a GraphView from the store for algorithm execution
///
/// The view covers every node; adjacency rows keep the store's neighbor
/// order so search tie-breaks match what the store shows.
pub fn build_view(store: &GraphStore) -> GraphView {
    // 1. Build index mappings
    let mut index_to_node: Vec<AlgoNodeId> = Vec::with_capacity(store.node_count());
    let mut node_to_index = HashMap::with_capacity(store.node_count());
    let mut positions = Vec::with_capacity(store.node_count());

    for (idx, node) in store.all_nodes().enumerate() {
        index_to_node.push(node.id.as_u64());
        node_to_index.insert(node.id.as_u64(), idx);
        positions.push(node.coords.as_array());
    }

    // 2. Translate adjacency lists to dense indices
    let adjacency: Vec<Vec<usize>> = store
        .all_nodes()
        .map(|node| {
            node.neighbors()
                .iter()
                .filter_map(|n| node_to_index.get(&n.as_u64()).copied())
                .collect()
        })
        .collect();

    GraphView::from_adjacency_list(index_to_node, positions, adjacency)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Point;

    #[test]
    fn test_build_view() {
        let mut store = GraphStore::new();
        let a = store.create_node(Point::new(0.0, 0.0), "1", "waypoint").unwrap();
        let b = store.create_node(Point::new(3.0, 0.0), "1", "waypoint").unwrap();
        let c = store.create_node(Point::new(3.0, 4.0), "1", "waypoint").unwrap();
        store.connect(a, c).unwrap();
        store.connect(a, b).unwrap();

        let view = build_view(&store);
        assert_eq!(view.node_count, 3);
        assert_eq!(view.index_to_node, vec![a.as_u64(), b.as_u64(), c.as_u64()]);
        // Neighbor order follows edge creation order
        assert_eq!(view.neighbors(0), &[2, 1]);
        assert_eq!(view.neighbors(1), &[0]);
        assert_eq!(view.position(2), [3.0, 4.0]);
    }
}

//! Single-floor pathfinding
//!
//! Runs A* over a snapshot of the store. The search is floor-agnostic and
//! simply follows adjacency; keeping it on one floor is the caller's job.

use super::build_view;
use crate::graph::{GraphError, GraphStore, NodeId};
use crate::route::{RouteError, RouteResult};
use wayfinder_algorithms::{a_star, GraphView, Metric};
use tracing::debug;

/// Result of a pathfinding algorithm
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult {
    pub source: NodeId,
    pub target: NodeId,
    /// Nodes from source to target, both included
    pub path: Vec<NodeId>,
    /// Accumulated cost of the terminal node
    pub cost: f64,
}

/// Find a path between two nodes of an already built view
pub fn find_path_in(
    view: &GraphView,
    source: NodeId,
    target: NodeId,
    metric: Metric,
) -> RouteResult<PathResult> {
    for id in [source, target] {
        if !view.node_to_index.contains_key(&id.as_u64()) {
            return Err(GraphError::NodeNotFound(id).into());
        }
    }

    let result = a_star(view, source.as_u64(), target.as_u64(), metric).ok_or(
        RouteError::NoPathFound {
            from: source,
            to: target,
        },
    )?;

    debug!(
        "Path {} -> {}: {} node(s), cost {}",
        source,
        target,
        result.path.len(),
        result.cost
    );

    Ok(PathResult {
        source,
        target,
        path: result.path.into_iter().map(NodeId::new).collect(),
        cost: result.cost,
    })
}

/// A* shortest path between two nodes of the store
pub fn find_path(
    store: &GraphStore,
    source: NodeId,
    target: NodeId,
    metric: Metric,
) -> RouteResult<PathResult> {
    find_path_in(&build_view(store), source, target, metric)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Point;

    fn triangle() -> (GraphStore, NodeId, NodeId, NodeId) {
        // A(0,0) - B(3,0) - C(3,4)
        let mut store = GraphStore::new();
        let a = store.create_node(Point::new(0.0, 0.0), "1", "waypoint").unwrap();
        let b = store.create_node(Point::new(3.0, 0.0), "1", "waypoint").unwrap();
        let c = store.create_node(Point::new(3.0, 4.0), "1", "waypoint").unwrap();
        store.connect(a, b).unwrap();
        store.connect(b, c).unwrap();
        (store, a, b, c)
    }

    #[test]
    fn test_find_path() {
        let (store, a, b, c) = triangle();

        let result = find_path(&store, a, c, Metric::SquaredEuclidean).unwrap();
        assert_eq!(result.path, vec![a, b, c]);
        assert_eq!(result.cost, 25.0);

        // Undirected: the reverse also works
        let back = find_path(&store, c, a, Metric::SquaredEuclidean).unwrap();
        assert_eq!(back.path, vec![c, b, a]);
    }

    #[test]
    fn test_find_path_same_node() {
        let (store, a, _, _) = triangle();
        let result = find_path(&store, a, a, Metric::SquaredEuclidean).unwrap();
        assert_eq!(result.path, vec![a]);
    }

    #[test]
    fn test_find_path_disconnected() {
        let (mut store, a, _, _) = triangle();
        let d = store.create_node(Point::new(10.0, 10.0), "1", "waypoint").unwrap();

        let err = find_path(&store, a, d, Metric::SquaredEuclidean).unwrap_err();
        assert_eq!(err, RouteError::NoPathFound { from: a, to: d });
    }

    #[test]
    fn test_find_path_unknown_node() {
        let (store, a, _, _) = triangle();
        let ghost = NodeId::new(404);

        let err = find_path(&store, a, ghost, Metric::SquaredEuclidean).unwrap_err();
        assert_eq!(err, RouteError::Graph(GraphError::NodeNotFound(ghost)));
    }

    #[test]
    fn test_repeated_searches_are_independent() {
        let (store, a, b, c) = triangle();
        let view = build_view(&store);

        let first = find_path_in(&view, a, c, Metric::SquaredEuclidean).unwrap();
        let other = find_path_in(&view, c, b, Metric::SquaredEuclidean).unwrap();
        let again = find_path_in(&view, a, c, Metric::SquaredEuclidean).unwrap();

        assert_eq!(other.path, vec![c, b]);
        assert_eq!(first, again);
    }
}

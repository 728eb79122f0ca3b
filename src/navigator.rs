//! Point-based facade for presentation adapters
//!
//! A floor-plan editor only knows geometric points. [`Navigator`] resolves
//! those points to node identities, forwards mutations to the
//! [`GraphStore`] and routing requests to the [`RoutePlanner`].
//!
//! The navigator is a single mutable resource. Callers sharing one across
//! threads must wrap it in a lock covering each mutation or navigation.

use crate::algo::PathResult;
use crate::config::NavigatorConfig;
use crate::graph::{FloorId, GraphStore, Node, NodeId, Point, Tag};
use crate::persistence::{self, DocumentResult, GraphDocument};
use crate::route::{RoutePlanner, RouteResult};
use tracing::{debug, warn};

/// An edge drawn between two points, listed once per undirected edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

pub struct Navigator {
    store: GraphStore,
    config: NavigatorConfig,
    last_route: Option<Vec<NodeId>>,
}

impl Navigator {
    pub fn new(config: NavigatorConfig) -> Self {
        Self::with_store(GraphStore::new(), config)
    }

    pub fn with_store(store: GraphStore, config: NavigatorConfig) -> Self {
        Self {
            store,
            config,
            last_route: None,
        }
    }

    /// Load a graph document
    pub fn from_document(doc: &GraphDocument, config: NavigatorConfig) -> DocumentResult<Self> {
        Ok(Self::with_store(persistence::load_document(doc)?, config))
    }

    pub fn to_document(&self) -> GraphDocument {
        persistence::save_document(&self.store)
    }

    pub fn store(&self) -> &GraphStore {
        &self.store
    }

    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    pub fn create_point(
        &mut self,
        coords: Point,
        floor: impl Into<FloorId>,
        tag: impl Into<Tag>,
    ) -> RouteResult<NodeId> {
        Ok(self.store.create_node(coords, floor, tag)?)
    }

    pub fn delete_point(&mut self, coords: Point) -> RouteResult<Node> {
        let id = self.store.find_by_coords(coords)?;
        self.last_route = None;
        Ok(self.store.delete_node(id)?)
    }

    /// Connect the nodes at two points. Identical points are skipped with a
    /// warning, as are already connected pairs. [`GraphStore::connect`]
    /// itself still rejects a self-edge with `InvalidEdge`.
    pub fn create_edge(&mut self, p1: Point, p2: Point) -> RouteResult<bool> {
        if p1 == p2 {
            warn!("No edge created: both ends are {}", p1);
            return Ok(false);
        }
        let a = self.store.find_by_coords(p1)?;
        let b = self.store.find_by_coords(p2)?;
        Ok(self.store.connect(a, b)?)
    }

    pub fn delete_edge(&mut self, p1: Point, p2: Point) -> RouteResult<bool> {
        let a = self.store.find_by_coords(p1)?;
        let b = self.store.find_by_coords(p2)?;
        let removed = self.store.disconnect(a, b)?;
        if removed {
            self.last_route = None;
        }
        Ok(removed)
    }

    pub fn move_point(&mut self, from: Point, to: Point) -> RouteResult<NodeId> {
        let id = self.store.find_by_coords(from)?;
        self.store.move_node(id, to)?;
        Ok(id)
    }

    /// Route between the nodes at two points
    ///
    /// The route is also kept for [`Navigator::last_route`]. On failure the
    /// previous route is cleared and the error is returned to the caller.
    pub fn navigate(&mut self, from: Point, to: Point) -> RouteResult<Vec<&Node>> {
        self.last_route = None;
        let start = self.store.find_by_coords(from)?;
        let goal = self.store.find_by_coords(to)?;

        let PathResult { path, cost, .. } =
            RoutePlanner::new(&self.store, &self.config).plan(start, goal)?;
        debug!("Navigated {} -> {}: {} stop(s), cost {}", from, to, path.len(), cost);

        self.last_route = Some(path);
        Ok(self.last_route())
    }

    /// Nodes of the most recent successful route
    pub fn last_route(&self) -> Vec<&Node> {
        self.last_route
            .iter()
            .flatten()
            .filter_map(|id| self.store.get_node(*id))
            .collect()
    }

    /// Every undirected edge once, for re-rendering
    pub fn segments(&self) -> Vec<Segment> {
        let mut segments = Vec::with_capacity(self.store.edge_count());
        for node in self.store.all_nodes() {
            for neighbor in node.neighbors() {
                if *neighbor <= node.id {
                    continue;
                }
                if let Some(other) = self.store.get_node(*neighbor) {
                    segments.push(Segment {
                        from: node.coords,
                        to: other.coords,
                    });
                }
            }
        }
        segments
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(NavigatorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphError;
    use crate::route::RouteError;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    fn corridor() -> Navigator {
        let mut nav = Navigator::default();
        nav.create_point(p(0.0, 0.0), "1", Tag::waypoint()).unwrap();
        nav.create_point(p(3.0, 0.0), "1", Tag::waypoint()).unwrap();
        nav.create_point(p(3.0, 4.0), "1", Tag::waypoint()).unwrap();
        nav.create_edge(p(0.0, 0.0), p(3.0, 0.0)).unwrap();
        nav.create_edge(p(3.0, 0.0), p(3.0, 4.0)).unwrap();
        nav
    }

    #[test]
    fn test_navigate_by_points() {
        let mut nav = corridor();
        let coords: Vec<Point> = nav
            .navigate(p(0.0, 0.0), p(3.0, 4.0))
            .unwrap()
            .iter()
            .map(|n| n.coords)
            .collect();
        assert_eq!(coords, vec![p(0.0, 0.0), p(3.0, 0.0), p(3.0, 4.0)]);
        assert_eq!(nav.last_route().len(), 3);
    }

    #[test]
    fn test_navigate_unknown_point() {
        let mut nav = corridor();
        let err = nav.navigate(p(0.0, 0.0), p(9.0, 9.0)).unwrap_err();
        assert_eq!(err, RouteError::Graph(GraphError::PointNotFound(p(9.0, 9.0))));
    }

    #[test]
    fn test_failed_navigation_clears_route() {
        let mut nav = corridor();
        nav.navigate(p(0.0, 0.0), p(3.0, 4.0)).unwrap();
        nav.create_point(p(8.0, 8.0), "1", Tag::waypoint()).unwrap();

        let err = nav.navigate(p(0.0, 0.0), p(8.0, 8.0)).unwrap_err();
        assert!(matches!(err, RouteError::NoPathFound { .. }));
        assert!(nav.last_route().is_empty());
    }

    #[test]
    fn test_create_edge_same_point_is_skipped() {
        let mut nav = corridor();
        assert!(!nav.create_edge(p(0.0, 0.0), p(0.0, 0.0)).unwrap());
        assert!(!nav.create_edge(p(3.0, 0.0), p(0.0, 0.0)).unwrap());
        assert_eq!(nav.store().edge_count(), 2);

        let id = nav.store().find_by_coords(p(0.0, 0.0)).unwrap();
        let mut store = nav.store().clone();
        assert_eq!(store.connect(id, id), Err(GraphError::InvalidEdge(id)));
    }

    #[test]
    fn test_edit_operations() {
        let mut nav = corridor();

        nav.move_point(p(3.0, 4.0), p(3.0, 5.0)).unwrap();
        assert!(nav.store().find_by_coords(p(3.0, 5.0)).is_ok());

        assert!(nav.delete_edge(p(3.0, 0.0), p(3.0, 5.0)).unwrap());
        assert!(!nav.delete_edge(p(3.0, 0.0), p(3.0, 5.0)).unwrap());

        let removed = nav.delete_point(p(3.0, 0.0)).unwrap();
        assert_eq!(removed.coords, p(3.0, 0.0));
        assert_eq!(nav.store().node_count(), 2);
        assert_eq!(nav.store().edge_count(), 0);

        let err = nav.delete_point(p(3.0, 0.0)).unwrap_err();
        assert!(matches!(err, RouteError::Graph(ref e) if e.is_not_found()));
    }

    #[test]
    fn test_segments_list_each_edge_once() {
        let nav = corridor();
        let segments = nav.segments();
        assert_eq!(segments.len(), 2);
        assert_eq!(
            segments[0],
            Segment {
                from: p(0.0, 0.0),
                to: p(3.0, 0.0)
            }
        );
    }

    #[test]
    fn test_document_round_trip() {
        let nav = corridor();
        let doc = nav.to_document();
        let copy = Navigator::from_document(&doc, NavigatorConfig::default()).unwrap();
        assert_eq!(copy.to_document(), doc);
    }
}

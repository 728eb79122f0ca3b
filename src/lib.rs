//! Wayfinder indoor navigation engine
//!
//! Builds an indoor navigation graph (rooms, corridors, elevators and stairs
//! as nodes, walkable connections as undirected edges, possibly spread over
//! several floors) and computes routes between two points.
//!
//! # Architecture
//!
//! - [`graph`]: the graph store, the single owner of every node. Adjacency
//!   is symmetric, duplicate-free and has no self-loops after every call.
//! - [`algo`]: A* search over a snapshot of the store. Edge cost and
//!   heuristic are both squared Euclidean distance by default.
//! - [`route`]: the cross-floor planner, which routes to the cheapest
//!   reachable transfer node when start and goal are on different floors.
//! - [`persistence`]: JSON graph documents.
//! - [`navigator`]: point-based facade for editors and viewers.
//!
//! # Known limitations
//!
//! - Searches have no cancellation hook and run until the open set is
//!   exhausted. Graphs are expected to hold at most a few hundred nodes.
//! - With the default metric the heuristic is not admissible, so routes on
//!   graphs with uneven edge lengths may not be optimal. Set
//!   `cost_metric: euclidean` for true shortest paths.
//! - Cross-floor routes end at the transfer node on the departure floor.
//!
//! ## Example Usage
//!
//! ```rust
//! use wayfinder::graph::{GraphStore, Point, Tag};
//! use wayfinder::{NavigatorConfig, RoutePlanner};
//!
//! let mut store = GraphStore::new();
//! let a = store.create_node(Point::new(0.0, 0.0), "1", Tag::waypoint()).unwrap();
//! let b = store.create_node(Point::new(3.0, 0.0), "1", Tag::waypoint()).unwrap();
//! let c = store.create_node(Point::new(3.0, 4.0), "1", Tag::waypoint()).unwrap();
//! store.connect(a, b).unwrap();
//! store.connect(b, c).unwrap();
//!
//! let config = NavigatorConfig::default();
//! let route = RoutePlanner::new(&store, &config).plan(a, c).unwrap();
//! assert_eq!(route.path, vec![a, b, c]);
//! assert_eq!(route.cost, 25.0); // 3² + 4²
//! ```

#![warn(clippy::all)]

pub mod algo;
pub mod config;
pub mod graph;
pub mod navigator;
pub mod persistence;
pub mod route;

// Re-export main types for convenience
pub use algo::{build_view, find_path, Metric, PathResult};

pub use config::{ConfigError, ConfigResult, NavigatorConfig};

pub use graph::{FloorId, GraphError, GraphResult, GraphStore, Node, NodeId, Point, Tag};

pub use navigator::{Navigator, Segment};

pub use persistence::{DocumentError, DocumentResult, GraphDocument, NodeRecord};

pub use route::{RouteError, RoutePlanner, RouteResult};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(!ver.is_empty());
        assert_eq!(ver, env!("CARGO_PKG_VERSION"));
    }
}

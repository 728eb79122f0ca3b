//! Navigation graph
//!
//! This module implements the indoor navigation graph:
//! - Nodes with coordinates, a floor and a type tag
//! - Undirected edges stored as symmetric adjacency entries
//! - An insertion-ordered in-memory store that owns every node

pub mod node;
pub mod store;
pub mod types;

// Re-export main types
pub use node::Node;
pub use store::{GraphError, GraphResult, GraphStore};
pub use types::{FloorId, NodeId, Point, Tag};

//! Node implementation for the navigation graph

use super::types::{FloorId, NodeId, Point, Tag};
use serde::{Deserialize, Serialize};

/// A point in the navigable graph
///
/// Nodes have:
/// - A unique ID
/// - Coordinates on their floor plan
/// - A floor identifier
/// - A type tag (waypoint, elevation, ...)
/// - An ordered adjacency list of neighbor IDs
///
/// Neighbor IDs are plain references into the owning [`GraphStore`];
/// only the store may change them.
///
/// [`GraphStore`]: super::GraphStore
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier for this node
    pub id: NodeId,

    /// Position on the floor plan
    pub coords: Point,

    /// Floor this node sits on
    pub floor: FloorId,

    /// Type tag of this node
    pub tag: Tag,

    /// Neighbors in insertion order
    pub(crate) neighbors: Vec<NodeId>,
}

impl Node {
    /// Create a new node with no neighbors
    pub fn new(id: NodeId, coords: Point, floor: impl Into<FloorId>, tag: impl Into<Tag>) -> Self {
        Node {
            id,
            coords,
            floor: floor.into(),
            tag: tag.into(),
            neighbors: Vec::new(),
        }
    }

    /// Neighbor IDs, in the order the edges were created
    pub fn neighbors(&self) -> &[NodeId] {
        &self.neighbors
    }

    /// Check if `other` is a direct neighbor
    pub fn is_neighbor(&self, other: NodeId) -> bool {
        self.neighbors.contains(&other)
    }

    /// Check if node carries a specific tag
    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tag == *tag
    }

    /// Number of edges touching this node
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    pub(crate) fn add_neighbor(&mut self, other: NodeId) -> bool {
        if self.is_neighbor(other) {
            return false;
        }
        self.neighbors.push(other);
        true
    }

    pub(crate) fn remove_neighbor(&mut self, other: NodeId) -> bool {
        match self.neighbors.iter().position(|&n| n == other) {
            Some(pos) => {
                self.neighbors.remove(pos);
                true
            }
            None => false,
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Node {}

impl std::hash::Hash for Node {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_node() {
        let node = Node::new(NodeId::new(1), Point::new(2.0, 3.0), "1", Tag::waypoint());
        assert_eq!(node.id, NodeId::new(1));
        assert_eq!(node.coords, Point::new(2.0, 3.0));
        assert_eq!(node.floor, FloorId::new("1"));
        assert!(node.has_tag(&Tag::waypoint()));
        assert_eq!(node.degree(), 0);
    }

    #[test]
    fn test_neighbors_keep_order_and_dedupe() {
        let mut node = Node::new(NodeId::new(1), Point::new(0.0, 0.0), "1", Tag::waypoint());

        assert!(node.add_neighbor(NodeId::new(3)));
        assert!(node.add_neighbor(NodeId::new(2)));
        assert!(!node.add_neighbor(NodeId::new(3)));
        assert_eq!(node.neighbors(), &[NodeId::new(3), NodeId::new(2)]);

        assert!(node.remove_neighbor(NodeId::new(3)));
        assert!(!node.remove_neighbor(NodeId::new(3)));
        assert_eq!(node.neighbors(), &[NodeId::new(2)]);
    }

    #[test]
    fn test_node_equality() {
        let node1 = Node::new(NodeId::new(7), Point::new(0.0, 0.0), "1", "waypoint");
        let node2 = Node::new(NodeId::new(7), Point::new(5.0, 5.0), "2", "elevation");
        let node3 = Node::new(NodeId::new(8), Point::new(0.0, 0.0), "1", "waypoint");

        assert_eq!(node1, node2); // Same ID
        assert_ne!(node1, node3); // Different ID
    }
}

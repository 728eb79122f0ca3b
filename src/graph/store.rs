//! In-memory navigation graph storage
//!
//! The store is the single arena owning every [`Node`]. Edges are not
//! entities of their own: an undirected edge is a pair of adjacency entries,
//! one on each endpoint. Every public mutation keeps the pair symmetric,
//! unique and free of self-loops.

use super::node::Node;
use super::types::{FloorId, NodeId, Point, Tag};
use indexmap::IndexMap;
use std::collections::BTreeSet;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Node {0} not found")]
    NodeNotFound(NodeId),

    #[error("No node at coordinates {0}")]
    PointNotFound(Point),

    #[error("Invalid edge: node {0} cannot be connected to itself")]
    InvalidEdge(NodeId),

    #[error("Node {0} already exists")]
    NodeAlreadyExists(NodeId),

    /// Reported only by [`GraphStore::validate`]
    #[error("Adjacency of {0} lists {1} but not the reverse")]
    AsymmetricEdge(NodeId, NodeId),

    /// Reported only by [`GraphStore::validate`]
    #[error("Adjacency of {0} lists {1} more than once")]
    DuplicateEdge(NodeId, NodeId),
}

impl GraphError {
    /// Unknown node identifier or unresolved coordinate lookup
    pub fn is_not_found(&self) -> bool {
        matches!(self, GraphError::NodeNotFound(_) | GraphError::PointNotFound(_))
    }
}

pub type GraphResult<T> = Result<T, GraphError>;

/// In-memory graph storage
///
/// - nodes: NodeId -> Node, kept in insertion order so that enumeration,
///   coordinate lookups and tag lookups are deterministic
/// - next_node_id: next identifier handed out by [`GraphStore::create_node`]
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    nodes: IndexMap<NodeId, Node>,
    next_node_id: u64,
}

/// Identifier that follows `id`, or an error once the `u64` range is used up
fn successor(id: NodeId) -> GraphResult<u64> {
    id.as_u64().checked_add(1).ok_or_else(|| {
        GraphError::InvalidInput(format!("node id {} leaves no room for further ids", id))
    })
}

fn check_coords(coords: Point) -> GraphResult<()> {
    if coords.is_finite() {
        Ok(())
    } else {
        Err(GraphError::InvalidInput(format!(
            "coordinates {} are not finite numbers",
            coords
        )))
    }
}

impl GraphStore {
    /// Create a new empty graph store
    pub fn new() -> Self {
        GraphStore {
            nodes: IndexMap::new(),
            next_node_id: 0,
        }
    }

    /// Create a new node with an empty adjacency list
    pub fn create_node(
        &mut self,
        coords: Point,
        floor: impl Into<FloorId>,
        tag: impl Into<Tag>,
    ) -> GraphResult<NodeId> {
        check_coords(coords)?;

        let id = NodeId::new(self.next_node_id);
        if self.nodes.contains_key(&id) {
            return Err(GraphError::NodeAlreadyExists(id));
        }
        let next = successor(id)?;

        self.nodes.insert(id, Node::new(id, coords, floor, tag));
        self.next_node_id = next;

        debug!("Created node {} at {}", id, coords);
        Ok(id)
    }

    /// Insert a node under a caller-chosen identifier (used when loading
    /// documents). Later `create_node` calls continue after the highest ID,
    /// so `u64::MAX` itself is refused.
    pub fn insert_node(
        &mut self,
        id: NodeId,
        coords: Point,
        floor: impl Into<FloorId>,
        tag: impl Into<Tag>,
    ) -> GraphResult<()> {
        check_coords(coords)?;
        if self.nodes.contains_key(&id) {
            return Err(GraphError::NodeAlreadyExists(id));
        }
        let next = successor(id)?;

        self.nodes.insert(id, Node::new(id, coords, floor, tag));
        self.next_node_id = self.next_node_id.max(next);
        Ok(())
    }

    /// Get a node by ID
    pub fn get_node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Check if a node exists
    pub fn has_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Neighbors of a node, in edge creation order
    pub fn neighbors(&self, id: NodeId) -> GraphResult<&[NodeId]> {
        self.nodes
            .get(&id)
            .map(|n| n.neighbors())
            .ok_or(GraphError::NodeNotFound(id))
    }

    /// Delete a node and every edge touching it
    pub fn delete_node(&mut self, id: NodeId) -> GraphResult<Node> {
        let neighbors = self.neighbors(id)?.to_vec();

        for neighbor in &neighbors {
            if let Some(node) = self.nodes.get_mut(neighbor) {
                node.remove_neighbor(id);
            }
        }

        let mut node = self
            .nodes
            .shift_remove(&id)
            .ok_or(GraphError::NodeNotFound(id))?;
        node.neighbors.clear();

        debug!("Deleted node {} and {} edge(s)", id, neighbors.len());
        debug_assert!(self.validate().is_ok());
        Ok(node)
    }

    /// Connect two nodes with an undirected edge
    ///
    /// Returns `false` without changing anything when the edge already
    /// exists.
    pub fn connect(&mut self, a: NodeId, b: NodeId) -> GraphResult<bool> {
        if !self.has_node(a) {
            return Err(GraphError::NodeNotFound(a));
        }
        if !self.has_node(b) {
            return Err(GraphError::NodeNotFound(b));
        }
        if a == b {
            return Err(GraphError::InvalidEdge(a));
        }
        if self.is_connected(a, b) {
            warn!("No edge created: {} and {} are already connected", a, b);
            return Ok(false);
        }

        if let Some(node) = self.nodes.get_mut(&a) {
            node.add_neighbor(b);
        }
        if let Some(node) = self.nodes.get_mut(&b) {
            node.add_neighbor(a);
        }

        debug!("Connected {} <-> {}", a, b);
        debug_assert!(self.validate().is_ok());
        Ok(true)
    }

    /// Remove the undirected edge between two nodes
    ///
    /// Returns `false` when they were not connected.
    pub fn disconnect(&mut self, a: NodeId, b: NodeId) -> GraphResult<bool> {
        if !self.has_node(a) {
            return Err(GraphError::NodeNotFound(a));
        }
        if !self.has_node(b) {
            return Err(GraphError::NodeNotFound(b));
        }
        if !self.is_connected(a, b) {
            return Ok(false);
        }

        if let Some(node) = self.nodes.get_mut(&a) {
            node.remove_neighbor(b);
        }
        if let Some(node) = self.nodes.get_mut(&b) {
            node.remove_neighbor(a);
        }

        debug!("Disconnected {} <-> {}", a, b);
        debug_assert!(self.validate().is_ok());
        Ok(true)
    }

    /// Check if two nodes share an edge
    pub fn is_connected(&self, a: NodeId, b: NodeId) -> bool {
        self.nodes.get(&a).is_some_and(|n| n.is_neighbor(b))
    }

    /// Move a node, returning its previous coordinates. Adjacency is kept.
    pub fn move_node(&mut self, id: NodeId, coords: Point) -> GraphResult<Point> {
        check_coords(coords)?;
        let node = self.nodes.get_mut(&id).ok_or(GraphError::NodeNotFound(id))?;
        let old = std::mem::replace(&mut node.coords, coords);
        debug!("Moved node {} from {} to {}", id, old, coords);
        Ok(old)
    }

    /// Find the first node (in insertion order) at exactly these coordinates
    pub fn find_by_coords(&self, coords: Point) -> GraphResult<NodeId> {
        self.nodes
            .values()
            .find(|n| n.coords == coords)
            .map(|n| n.id)
            .ok_or(GraphError::PointNotFound(coords))
    }

    /// All nodes on `floor` carrying `tag`, in insertion order
    pub fn find_by_tag(&self, tag: &Tag, floor: &FloorId) -> Vec<NodeId> {
        self.nodes
            .values()
            .filter(|n| n.has_tag(tag) && n.floor == *floor)
            .map(|n| n.id)
            .collect()
    }

    /// All nodes on `floor`, in insertion order
    pub fn nodes_on_floor(&self, floor: &FloorId) -> Vec<&Node> {
        self.nodes.values().filter(|n| n.floor == *floor).collect()
    }

    /// Distinct floor identifiers present in the graph, sorted
    pub fn floors(&self) -> Vec<FloorId> {
        self.nodes
            .values()
            .map(|n| n.floor.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Get total number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get total number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(Node::degree).sum::<usize>() / 2
    }

    /// All nodes, in insertion order
    pub fn all_nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.values()
    }

    /// Clear all data
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.next_node_id = 0;
    }

    /// Audit the adjacency invariants: every edge is listed on both
    /// endpoints, exactly once, and never from a node to itself.
    pub fn validate(&self) -> GraphResult<()> {
        for node in self.nodes.values() {
            for (i, &neighbor) in node.neighbors.iter().enumerate() {
                if neighbor == node.id {
                    return Err(GraphError::InvalidEdge(node.id));
                }
                if node.neighbors[..i].contains(&neighbor) {
                    return Err(GraphError::DuplicateEdge(node.id, neighbor));
                }
                if !self.is_connected(neighbor, node.id) {
                    return Err(GraphError::AsymmetricEdge(node.id, neighbor));
                }
            }
        }
        Ok(())
    }
}

//! Shared utilities for graph algorithms
//!
//! Provides a read-only, optimized view of the graph topology and node
//! positions for algorithm execution.

use std::collections::HashMap;

/// Node Identifier type (u64)
pub type NodeId = u64;

/// Planar position of a node
pub type Position = [f64; 2];

/// Distance function used for both edge cost and heuristic.
///
/// The two must always come from the same metric so that accumulated
/// costs and estimates stay comparable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Metric {
    /// dx² + dy². Cheap and unnormalized; not an admissible A* heuristic.
    #[default]
    SquaredEuclidean,
    /// sqrt(dx² + dy²)
    Euclidean,
}

impl Metric {
    /// Distance between two positions under this metric
    pub fn distance(&self, a: Position, b: Position) -> f64 {
        let dx = b[0] - a[0];
        let dy = b[1] - a[1];
        let squared = dx * dx + dy * dy;
        match self {
            Metric::SquaredEuclidean => squared,
            Metric::Euclidean => squared.sqrt(),
        }
    }
}

/// A dense, integer-indexed view of an undirected graph using Compressed
/// Sparse Row (CSR) format.
///
/// Each undirected edge appears twice, once in each endpoint's row.
/// Row order is the adjacency order of the source graph, which search
/// algorithms rely on for deterministic tie-breaking.
#[derive(Debug, Clone)]
pub struct GraphView {
    /// Number of nodes
    pub node_count: usize,
    /// Mapping from dense index (0..N) back to NodeId
    pub index_to_node: Vec<NodeId>,
    /// Mapping from NodeId to dense index
    pub node_to_index: HashMap<NodeId, usize>,

    /// Offsets into `targets`. Size = node_count + 1
    pub offsets: Vec<usize>,
    /// Contiguous array of neighbor indices
    pub targets: Vec<usize>,

    /// Node positions, aligned with `index_to_node`
    pub positions: Vec<Position>,
}

impl GraphView {
    /// Get the degree of a node (by index)
    pub fn degree(&self, idx: usize) -> usize {
        self.offsets[idx + 1] - self.offsets[idx]
    }

    /// Get neighbors of a node, in adjacency order
    pub fn neighbors(&self, idx: usize) -> &[usize] {
        let start = self.offsets[idx];
        let end = self.offsets[idx + 1];
        &self.targets[start..end]
    }

    /// Position of a node (by index)
    pub fn position(&self, idx: usize) -> Position {
        self.positions[idx]
    }

    /// Build a view from positions and adjacency lists keyed by dense index
    pub fn from_adjacency_list(
        index_to_node: Vec<NodeId>,
        positions: Vec<Position>,
        adjacency: Vec<Vec<usize>>,
    ) -> Self {
        let node_count = index_to_node.len();
        let node_to_index = index_to_node
            .iter()
            .enumerate()
            .map(|(idx, &id)| (id, idx))
            .collect();

        let mut offsets = Vec::with_capacity(node_count + 1);
        let mut targets = Vec::new();

        offsets.push(0);
        for neighbors in adjacency {
            targets.extend(neighbors);
            offsets.push(targets.len());
        }

        GraphView {
            node_count,
            index_to_node,
            node_to_index,
            offsets,
            targets,
            positions,
        }
    }
}

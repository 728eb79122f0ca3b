//! Persistence layer for navigation graphs
//!
//! Graphs travel as JSON documents carrying, per node, its identifier,
//! coordinates, neighbor identifiers, type tag and floor.

pub mod document;

pub use document::{
    load_document, load_from_path, save_document, save_to_path, GraphDocument, NodeRecord,
};

use crate::graph::{GraphError, NodeId};
use thiserror::Error;

/// Document errors
#[derive(Error, Debug)]
pub enum DocumentError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Graph rejected a node or edge
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    /// A neighbor list names a node the document does not contain
    #[error("Node {node} lists unknown neighbor {neighbor}")]
    DanglingNeighbor { node: NodeId, neighbor: NodeId },
}

pub type DocumentResult<T> = Result<T, DocumentError>;

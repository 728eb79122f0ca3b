//! JSON graph documents
//!
//! ```json
//! { "nodes": [
//!     { "GID": 0, "Coords": [0.0, 0.0], "Vectors": [1], "Type": "waypoint", "Floor": "1" },
//!     { "GID": 1, "Coords": [3.0, 0.0], "Vectors": [0], "Type": "elevation", "Floor": "1" }
//! ] }
//! ```
//!
//! `GID` and `Vectors` entries may also be numeric strings (`"GID": "0"`),
//! as written by older editors. Saved documents always use numbers.

use super::{DocumentError, DocumentResult};
use crate::graph::{FloorId, GraphStore, NodeId, Point, Tag};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

/// Node id as it may appear in a document
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(u64),
    Text(String),
}

impl RawId {
    fn parse<E: serde::de::Error>(self) -> Result<NodeId, E> {
        match self {
            RawId::Number(n) => Ok(NodeId::new(n)),
            RawId::Text(text) => text
                .trim()
                .parse::<u64>()
                .map(NodeId::new)
                .map_err(|_| E::custom(format!("invalid node id {:?}", text))),
        }
    }
}

fn id_from_number_or_string<'de, D>(deserializer: D) -> Result<NodeId, D::Error>
where
    D: Deserializer<'de>,
{
    RawId::deserialize(deserializer)?.parse()
}

fn ids_from_numbers_or_strings<'de, D>(deserializer: D) -> Result<Vec<NodeId>, D::Error>
where
    D: Deserializer<'de>,
{
    Vec::<RawId>::deserialize(deserializer)?
        .into_iter()
        .map(RawId::parse)
        .collect()
}

/// Serialized node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    #[serde(rename = "GID", deserialize_with = "id_from_number_or_string")]
    pub id: NodeId,
    #[serde(rename = "Coords")]
    pub coords: Point,
    #[serde(
        rename = "Vectors",
        default,
        deserialize_with = "ids_from_numbers_or_strings"
    )]
    pub neighbors: Vec<NodeId>,
    #[serde(rename = "Type", default)]
    pub tag: Tag,
    #[serde(rename = "Floor")]
    pub floor: FloorId,
}

/// A whole graph, nodes in store order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    pub nodes: Vec<NodeRecord>,
}

/// Build a store from a document
///
/// Nodes are inserted first, edges second. A neighbor listed on only one
/// side still yields a symmetric edge.
pub fn load_document(doc: &GraphDocument) -> DocumentResult<GraphStore> {
    let mut store = GraphStore::new();

    for record in &doc.nodes {
        store.insert_node(record.id, record.coords, record.floor.clone(), record.tag.clone())?;
    }

    let known: HashSet<NodeId> = doc.nodes.iter().map(|r| r.id).collect();
    for record in &doc.nodes {
        for &neighbor in &record.neighbors {
            if !known.contains(&neighbor) {
                return Err(DocumentError::DanglingNeighbor {
                    node: record.id,
                    neighbor,
                });
            }
            // Symmetric documents list every edge twice
            if !store.is_connected(record.id, neighbor) {
                store.connect(record.id, neighbor)?;
            }
        }
    }

    info!(
        "Loaded graph document: {} node(s), {} edge(s)",
        store.node_count(),
        store.edge_count()
    );
    Ok(store)
}

/// Snapshot a store into a document
pub fn save_document(store: &GraphStore) -> GraphDocument {
    GraphDocument {
        nodes: store
            .all_nodes()
            .map(|node| NodeRecord {
                id: node.id,
                coords: node.coords,
                neighbors: node.neighbors().to_vec(),
                tag: node.tag.clone(),
                floor: node.floor.clone(),
            })
            .collect(),
    }
}

/// Read a JSON document from disk and build a store
pub fn load_from_path(path: impl AsRef<Path>) -> DocumentResult<GraphStore> {
    let path = path.as_ref();
    info!("Loading graph from {:?}", path);
    let text = std::fs::read_to_string(path)?;
    let doc: GraphDocument = serde_json::from_str(&text)?;
    load_document(&doc)
}

/// Write a store to disk as pretty-printed JSON
pub fn save_to_path(store: &GraphStore, path: impl AsRef<Path>) -> DocumentResult<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(&save_document(store))?;
    std::fs::write(path, json)?;
    info!("Saved {} node(s) to {:?}", store.node_count(), path);
    Ok(())
}

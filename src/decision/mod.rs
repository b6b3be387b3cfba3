use crate::agenda::AgendaDocument;
use crate::error::MetadataError;
use ahash::RandomState;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Derived adjacency record for one node: its prompt, reported type, and
/// forward/backward edges.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionMapEntry {
    pub prompt: String,
    #[serde(rename = "type")]
    pub node_type: String,
    /// Successor ids in authoring order. May reference ids with no node
    /// behind them; dangling forward edges are retained as-is.
    pub next_nodes: Vec<String>,
    /// Ids of nodes whose `next_nodes` include this node. Never contains
    /// a dangling reference, since back-edges are only recorded for ids
    /// that exist in the map.
    pub prev_nodes: Vec<String>,
}

/// Forward/backward adjacency index over an agenda document.
///
/// Pure derived data: recomputed whenever the source document changes,
/// never hand-edited. Serializes as a plain `node id -> entry` mapping
/// and is what the query service reads, so inspection tooling never has
/// to re-walk the raw document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DecisionMap {
    entries: IndexMap<String, DecisionMapEntry, RandomState>,
}

impl DecisionMap {
    /// Builds the map from a document in two passes.
    ///
    /// Pass 1 creates every entry with its forward edges: `choice` nodes
    /// contribute their `on_response` route targets in mapping order
    /// (duplicates kept), every other node contributes its single `next`
    /// if present. Pass 2 back-fills `prev_nodes` purely by lookup, so
    /// construction does not depend on node ordering and forward
    /// references resolve like any other edge.
    pub fn derive(document: &AgendaDocument) -> Self {
        let mut entries: IndexMap<String, DecisionMapEntry, RandomState> = IndexMap::default();

        for (node_id, node) in &document.nodes {
            let mut entry = DecisionMapEntry {
                prompt: node.prompt.clone().unwrap_or_default(),
                node_type: node.type_label().to_string(),
                next_nodes: Vec::new(),
                prev_nodes: Vec::new(),
            };

            if node.node_type.as_deref() == Some("choice") {
                if let Some(routes) = node.routes() {
                    entry.next_nodes.extend(routes.values().cloned());
                }
            } else if let Some(next) = &node.next {
                entry.next_nodes.push(next.clone());
            }

            entries.insert(node_id.clone(), entry);
        }

        let ids: Vec<String> = entries.keys().cloned().collect();
        for source_id in ids {
            // Targets that are not keys of the map are left alone: the
            // forward edge dangles, and no back-edge is recorded.
            let targets = entries[&source_id].next_nodes.clone();
            for target in targets {
                if let Some(target_entry) = entries.get_mut(&target) {
                    target_entry.prev_nodes.push(source_id.clone());
                }
            }
        }

        DecisionMap { entries }
    }

    pub fn get(&self, id: &str) -> Option<&DecisionMapEntry> {
        self.entries.get(id)
    }

    pub fn get_key_value(&self, id: &str) -> Option<(&String, &DecisionMapEntry)> {
        self.entries.get_key_value(id)
    }

    /// Entry at a 0-based position in document order.
    pub fn get_index(&self, index: usize) -> Option<(&String, &DecisionMapEntry)> {
        self.entries.get_index(index)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Successors of a node, or an empty slice for an unknown id.
    pub fn next_nodes(&self, id: &str) -> &[String] {
        self.entries.get(id).map(|e| e.next_nodes.as_slice()).unwrap_or(&[])
    }

    /// Predecessors of a node, or an empty slice for an unknown id.
    pub fn prev_nodes(&self, id: &str) -> &[String] {
        self.entries.get(id).map(|e| e.prev_nodes.as_slice()).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &DecisionMapEntry)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_json_pretty(&self) -> Result<String, MetadataError> {
        serde_json::to_string_pretty(self).map_err(|e| MetadataError::Serialize(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, MetadataError> {
        serde_json::from_str(json).map_err(|e| MetadataError::Malformed(e.to_string()))
    }

    /// Persists the map as JSON, in the shape inspection tooling and
    /// hosts consume.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), MetadataError> {
        let path = path.as_ref();
        let json = self.to_json_pretty()?;
        fs::write(path, json).map_err(|e| MetadataError::Write {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, MetadataError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| MetadataError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&content)
    }
}

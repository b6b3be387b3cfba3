use crate::error::DocumentError;
use ahash::RandomState;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Insertion-ordered node mapping. Document order drives the query
/// listing and the deriver's iteration, so a plain hash map is not
/// enough here.
pub type NodeMap = IndexMap<String, NodeDefinition, RandomState>;

/// Ordered `choice value -> successor id` routing table.
pub type RouteMap = IndexMap<String, String, RandomState>;

/// The authored agenda definition: a directed graph of question nodes.
///
/// This is the canonical deserialized form of the `agenda.json` schema
/// produced by authoring tools. A document is immutable once loaded for
/// a traversal session, and may be shared read-only across sessions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgendaDocument {
    #[serde(default)]
    pub agenda_id: String,
    /// Entry point of a traversal. May reference a node that does not
    /// exist; that is tolerated here and only surfaces once a session
    /// actually starts.
    #[serde(default)]
    pub start_node: String,
    pub nodes: NodeMap,
}

impl AgendaDocument {
    /// Parses a document from its JSON form. Shape violations (missing
    /// `nodes`, `nodes` not a mapping) are rejected here; dangling node
    /// references are not.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        serde_json::from_str(json).map_err(|e| DocumentError::Malformed(e.to_string()))
    }

    /// Loads a document from a JSON file on disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| DocumentError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&content)
    }

    pub fn to_json_pretty(&self) -> Result<String, DocumentError> {
        serde_json::to_string_pretty(self).map_err(|e| DocumentError::Malformed(e.to_string()))
    }

    /// Writes the document back out in the authoring schema.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), DocumentError> {
        let path = path.as_ref();
        let json = self.to_json_pretty()?;
        fs::write(path, json).map_err(|e| DocumentError::Write {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Looks up a node by id.
    pub fn node(&self, id: &str) -> Option<&NodeDefinition> {
        self.nodes.get(id)
    }
}

/// One step in the agenda graph.
///
/// Successor ids are not required to exist in the document. Dangling
/// references are kept as-is and only surface during traversal, as a
/// `NodeNotFound` terminal state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeDefinition {
    /// Behavior selector. Recognized values: `text`, `choice`,
    /// `file_upload`, `end`. Anything else (including a missing value)
    /// is kept verbatim and classified by [`NodeDefinition::kind`].
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,

    /// Single successor id, meaningful for `text` and `file_upload`
    /// nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,

    /// Answer options, meaningful for `choice` nodes. Presented to the
    /// user 1-indexed.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_response: Option<OnResponse>,

    /// Advisory seconds before a host may give up on an answer.
    /// Recorded, never enforced by the engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,

    /// Advisory seconds before a host may nudge the user. Inert, like
    /// `timeout`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reminder: Option<u64>,
}

impl NodeDefinition {
    /// The traversal engine's view of this node's type. No default is
    /// applied: a node with no `type` at all is unsupported as far as
    /// the engine is concerned, even though [`NodeDefinition::type_label`]
    /// reports it as `text`. The two policies disagree on purpose.
    pub fn kind(&self) -> NodeKind {
        match self.node_type.as_deref() {
            Some("text") => NodeKind::Text,
            Some("choice") => NodeKind::Choice,
            Some("file_upload") => NodeKind::FileUpload,
            Some("end") => NodeKind::End,
            Some(other) => NodeKind::Unsupported(other.to_string()),
            None => NodeKind::Unsupported(String::new()),
        }
    }

    /// The deriver's view of this node's type: a missing `type` is
    /// reported as `text`.
    pub fn type_label(&self) -> &str {
        self.node_type.as_deref().unwrap_or("text")
    }

    /// The routing table, if `on_response` carries one.
    pub fn routes(&self) -> Option<&RouteMap> {
        self.on_response.as_ref().and_then(OnResponse::routes)
    }
}

/// The `on_response` field appears in two shapes in authored documents:
/// a `choice value -> successor id` routing table on `choice` nodes, and
/// a bare hook name (e.g. `"update_q1"`) that authoring tools attach to
/// `text` nodes. The hook form carries no routing information and is
/// ignored by both the deriver and the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OnResponse {
    Routes(RouteMap),
    Hook(String),
}

impl OnResponse {
    pub fn routes(&self) -> Option<&RouteMap> {
        match self {
            OnResponse::Routes(map) => Some(map),
            OnResponse::Hook(_) => None,
        }
    }
}

/// Closed classification of a node's behavior, as dispatched on by the
/// traversal engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Free-text capture; advances via `next`.
    Text,
    /// Multiple-choice branching; advances via `on_response`.
    Choice,
    /// File-attachment capture; advances via `next`.
    FileUpload,
    /// Terminal node.
    End,
    /// Anything outside the recognized set. Carries the raw `type`
    /// value for reporting; a missing `type` lands here with an empty
    /// string.
    Unsupported(String),
}

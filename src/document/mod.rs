//! The portable graph document: a JSON-shaped `{nodes, edges}` structure, the
//! only artifact persisted or handed to an execution engine.
//!
//! The JSON-facing raw model is kept separate from the canonical in-memory
//! types so import can stay lenient: missing config fields take the node
//! kind's defaults, unknown fields are ignored, and a config that fails to
//! parse falls back to the kind's default config. Only an unparseable
//! document or missing `nodes`/`edges` collections are reported as errors.

use crate::error::DocumentError;
use crate::graph::{Edge, Node, NodeConfig, NodeKind, Position};
use serde::{Deserialize, Serialize};

/// An owned snapshot of the whole graph, suitable for serialization and for
/// wholesale import back into a store.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GraphDocument {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl GraphDocument {
    /// Serializes the document to its portable JSON form.
    pub fn to_json(&self) -> Result<String, DocumentError> {
        let raw = RawDocument {
            nodes: Some(self.nodes.iter().map(RawNode::from).collect()),
            edges: Some(self.edges.iter().map(RawEdge::from).collect()),
        };
        serde_json::to_string_pretty(&raw).map_err(|e| DocumentError::JsonParse(e.to_string()))
    }

    /// Parses a portable JSON document. Fails only when the JSON itself is
    /// malformed or a top-level collection is missing.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        let raw: RawDocument =
            serde_json::from_str(json).map_err(|e| DocumentError::JsonParse(e.to_string()))?;
        let nodes = raw.nodes.ok_or(DocumentError::MissingCollection("nodes"))?;
        let edges = raw.edges.ok_or(DocumentError::MissingCollection("edges"))?;
        Ok(Self {
            nodes: nodes.into_iter().map(node_from_raw).collect(),
            edges: edges.into_iter().map(edge_from_raw).collect(),
        })
    }
}

// --- Raw JSON-facing model ---

#[derive(Serialize, Deserialize)]
struct RawDocument {
    nodes: Option<Vec<RawNode>>,
    edges: Option<Vec<RawEdge>>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawNode {
    id: String,
    #[serde(rename = "type")]
    kind: NodeKind,
    #[serde(default)]
    label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default)]
    position: Position,
    #[serde(default)]
    config: serde_json::Value,
}

#[derive(Serialize, Deserialize)]
struct RawEdge {
    #[serde(default)]
    id: String,
    source: String,
    target: String,
}

impl From<&Node> for RawNode {
    fn from(node: &Node) -> Self {
        Self {
            id: node.id.clone(),
            kind: node.kind,
            label: node.label.clone(),
            description: node.description.clone(),
            position: node.position,
            config: config_to_raw(&node.config),
        }
    }
}

impl From<&Edge> for RawEdge {
    fn from(edge: &Edge) -> Self {
        Self {
            id: edge.id.clone(),
            source: edge.source.clone(),
            target: edge.target.clone(),
        }
    }
}

fn node_from_raw(raw: RawNode) -> Node {
    let config = config_from_raw(raw.kind, raw.config);
    let label = if raw.label.is_empty() {
        raw.kind.display_name().to_string()
    } else {
        raw.label
    };
    Node {
        id: raw.id,
        kind: raw.kind,
        label,
        description: raw.description,
        position: raw.position,
        config,
    }
}

fn edge_from_raw(raw: RawEdge) -> Edge {
    let id = if raw.id.is_empty() {
        Edge::fresh_id()
    } else {
        raw.id
    };
    Edge {
        id,
        source: raw.source,
        target: raw.target,
    }
}

/// Serializes a config as the flat per-type object stored under the node's
/// `config` key. Kinds without configuration serialize as `{}`.
fn config_to_raw(config: &NodeConfig) -> serde_json::Value {
    let raw = match config {
        NodeConfig::Empty => Ok(serde_json::json!({})),
        NodeConfig::Approval(config) => serde_json::to_value(config),
        NodeConfig::Condition(config) => serde_json::to_value(config),
        NodeConfig::Parallel(config) => serde_json::to_value(config),
    };
    raw.unwrap_or(serde_json::Value::Null)
}

/// Parses a raw config value against the node kind's expected shape, falling
/// back to the kind's default config when it does not parse.
fn config_from_raw(kind: NodeKind, raw: serde_json::Value) -> NodeConfig {
    match kind {
        NodeKind::Approval => serde_json::from_value(raw)
            .map(NodeConfig::Approval)
            .unwrap_or_else(|_| kind.default_config()),
        NodeKind::Condition => serde_json::from_value(raw)
            .map(NodeConfig::Condition)
            .unwrap_or_else(|_| kind.default_config()),
        NodeKind::Parallel => serde_json::from_value(raw)
            .map(NodeConfig::Parallel)
            .unwrap_or_else(|_| kind.default_config()),
        _ => NodeConfig::Empty,
    }
}

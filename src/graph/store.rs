use super::validate::validate_connection;
use super::{Edge, Link, Node, NodeKind, NodePatch, Position};
use crate::document::GraphDocument;
use crate::error::ConnectionRejection;
use tracing::debug;

/// Sole owner of the node and edge collections. All mutation is funneled
/// through the operations here so graph invariants are enforced at one
/// boundary; the raw collections are never handed out mutably.
///
/// Business-rule violations (unknown ids, rejected connections, malformed
/// import documents) are reported through boolean returns and never panic.
#[derive(Debug, Clone)]
pub struct GraphStore {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    selected: Option<String>,
}

impl Default for GraphStore {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphStore {
    /// The canonical initial state: a single start node, no edges.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::start()],
            edges: Vec::new(),
            selected: None,
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn edge(&self, id: &str) -> Option<&Edge> {
        self.edges.iter().find(|e| e.id == id)
    }

    /// Creates a node with a fresh unique id and the kind's default config.
    /// Always succeeds; the returned node is an owned copy of the stored one.
    pub fn add_node(&mut self, kind: NodeKind, position: Position) -> Node {
        let node = Node::new(kind, position);
        debug!(id = %node.id, kind = %kind, "node added");
        self.nodes.push(node.clone());
        node
    }

    /// Merges a patch into the node with the given id. Returns `false` (and
    /// changes nothing) when the id is unknown.
    pub fn update_node(&mut self, id: &str, patch: NodePatch) -> bool {
        match self.nodes.iter_mut().find(|n| n.id == id) {
            Some(node) => {
                node.apply(patch);
                true
            }
            None => {
                debug!(id, "update for unknown node ignored");
                false
            }
        }
    }

    /// Removes the node and every edge touching it as source or target.
    /// Clears the selection if the deleted node was selected.
    pub fn delete_node(&mut self, id: &str) -> bool {
        let before = self.nodes.len();
        self.nodes.retain(|n| n.id != id);
        if self.nodes.len() == before {
            return false;
        }
        self.edges.retain(|e| e.source != id && e.target != id);
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
        debug!(id, "node deleted");
        true
    }

    pub fn delete_edge(&mut self, id: &str) -> bool {
        let before = self.edges.len();
        self.edges.retain(|e| e.id != id);
        self.edges.len() != before
    }

    /// Inserts a fresh edge for the link if it passes validation. A rejected
    /// link leaves the graph untouched; the reason is available through
    /// [`GraphStore::validate_link`].
    pub fn connect(&mut self, link: Link) -> bool {
        match validate_connection(&link, &self.nodes, &self.edges) {
            Ok(()) => {
                let edge = Edge::new(link.source, link.target);
                debug!(id = %edge.id, source = %edge.source, target = %edge.target, "edge added");
                self.edges.push(edge);
                true
            }
            Err(reason) => {
                debug!(%reason, "connection rejected");
                false
            }
        }
    }

    /// Runs the connection validator against the current graph without
    /// mutating anything.
    pub fn validate_link(&self, link: &Link) -> Result<(), ConnectionRejection> {
        validate_connection(link, &self.nodes, &self.edges)
    }

    /// Tracks at most one selected node id. Lives with the graph because
    /// delete operations must keep it consistent.
    pub fn select(&mut self, id: Option<&str>) {
        self.selected = id.map(str::to_owned);
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Resets to the initial single-start-node state. Idempotent.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Returns an owned snapshot of the graph. Later store mutation does not
    /// affect an already-exported document.
    pub fn export(&self) -> GraphDocument {
        GraphDocument {
            nodes: self.nodes.clone(),
            edges: self.edges.clone(),
        }
    }

    /// Replaces the collections wholesale and clears the selection.
    pub fn import(&mut self, document: GraphDocument) {
        self.nodes = document.nodes;
        self.edges = document.edges;
        self.selected = None;
    }

    /// Parses a JSON document and imports it. Returns `false` (and changes
    /// nothing) when the JSON is malformed or the `nodes`/`edges` collections
    /// are missing.
    pub fn import_json(&mut self, json: &str) -> bool {
        match GraphDocument::from_json(json) {
            Ok(document) => {
                self.import(document);
                true
            }
            Err(err) => {
                debug!(%err, "document import ignored");
                false
            }
        }
    }
}

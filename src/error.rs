use thiserror::Error;

/// Why the connection validator refused a proposed edge. A rejection is a
/// policy decision, not a failure: the store reports it as a `false` return
/// and the graph is left untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConnectionRejection {
    #[error("edge endpoint '{0}' does not reference an existing node")]
    UnknownEndpoint(String),

    #[error("a start node cannot be the target of an edge")]
    InboundToStart,

    #[error("an end node cannot be the source of an edge")]
    OutboundFromEnd,

    #[error("node '{0}' already has an incoming edge and is not a merge point")]
    TargetOccupied(String),
}

/// Errors that can occur when parsing a portable graph document. Per-node
/// configs never produce errors here; a malformed config falls back to the
/// node kind's defaults.
#[derive(Error, Debug, Clone)]
pub enum DocumentError {
    #[error("failed to parse graph document JSON: {0}")]
    JsonParse(String),

    #[error("graph document is missing the '{0}' collection")]
    MissingCollection(&'static str),
}

/// Errors that can occur when loading a field registry from configuration.
#[derive(Error, Debug, Clone)]
pub enum RegistryError {
    #[error("failed to parse field registry JSON: {0}")]
    JsonParse(String),
}

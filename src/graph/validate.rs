use super::{Edge, Link, Node, NodeKind};
use crate::error::ConnectionRejection;

/// Decides whether a proposed connection is legal given the current graph.
///
/// The graph reads top-to-bottom as an approval pipeline: most nodes have a
/// single predecessor, but merge points (`parallel`, `end`, and approval nodes
/// flagged `is_default`) may recombine multiple branches.
pub fn validate_connection(
    link: &Link,
    nodes: &[Node],
    edges: &[Edge],
) -> Result<(), ConnectionRejection> {
    let source = find_node(nodes, &link.source)?;
    let target = find_node(nodes, &link.target)?;

    if target.kind == NodeKind::Start {
        return Err(ConnectionRejection::InboundToStart);
    }
    if source.kind == NodeKind::End {
        return Err(ConnectionRejection::OutboundFromEnd);
    }

    let inbound = edges.iter().filter(|e| e.target == link.target).count();
    if inbound >= 1 && !target.is_merge_capable() {
        return Err(ConnectionRejection::TargetOccupied(link.target.clone()));
    }

    Ok(())
}

fn find_node<'a>(nodes: &'a [Node], id: &str) -> Result<&'a Node, ConnectionRejection> {
    nodes
        .iter()
        .find(|n| n.id == id)
        .ok_or_else(|| ConnectionRejection::UnknownEndpoint(id.to_string()))
}

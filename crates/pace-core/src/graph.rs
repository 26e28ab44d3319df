//! Path-network multigraph arena.
//!
//! # Data layout
//!
//! Nodes and edges live in two flat `Vec`s indexed by [`NodeId`] and
//! [`EdgeId`].  Edges reference their endpoints by id; node data is never
//! duplicated onto edges.  An annotation pass therefore works on
//! `(&mut [PathEdge], &[PathNode])`: each edge record is written by exactly
//! one writer while the node table stays read-only, which is what makes the
//! per-edge work order-independent and safe to partition across threads.
//!
//! The arena is deliberately adjacency-free.  Nothing in this workspace
//! traverses the graph; route search happens downstream on the annotated
//! records.

use std::collections::HashMap;

use crate::edge::{EdgeAttributes, PathEdge};
use crate::error::{GraphError, GraphResult};
use crate::ids::{EdgeId, NodeId};
use crate::node::PathNode;

/// A multigraph of path segments.
///
/// Parallel edges between the same node pair are permitted and receive
/// consecutive `key` values starting at 0, in insertion order.
///
/// # Example
///
/// ```
/// use pace_core::{EdgeAttributes, PathGraph};
///
/// let mut g = PathGraph::new();
/// let a = g.add_node(Some(100.0));
/// let b = g.add_node(Some(105.0));
/// let e = g.add_edge(a, b, EdgeAttributes {
///     length_m: Some(250.0),
///     grade: Some(0.02),
///     ..Default::default()
/// }).unwrap();
/// assert_eq!(g.edge(e).unwrap().key, 0);
/// assert_eq!(g.edge_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PathGraph {
    nodes: Vec<PathNode>,
    edges: Vec<PathEdge>,
    /// Next parallel-edge key per `(from, to)` pair.
    next_key: HashMap<(NodeId, NodeId), u32>,
}

impl PathGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for the expected number of nodes and edges to reduce
    /// reallocations when bulk-loading from the acquisition pipeline.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
            edges: Vec::with_capacity(edges),
            next_key: HashMap::new(),
        }
    }

    // ── Construction ──────────────────────────────────────────────────────

    /// Add a node and return its `NodeId` (sequential from 0).
    pub fn add_node(&mut self, elevation: Option<f64>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(PathNode::new(elevation));
        id
    }

    /// Add a directed edge from `from` to `to`.
    ///
    /// The edge's `key` discriminates it among parallel `from -> to`
    /// edges.  Endpoints must already exist; an unknown endpoint is
    /// reported once here rather than surfacing later inside a pass.
    pub fn add_edge(
        &mut self,
        from: NodeId,
        to: NodeId,
        attrs: EdgeAttributes,
    ) -> GraphResult<EdgeId> {
        for endpoint in [from, to] {
            if endpoint.index() >= self.nodes.len() {
                return Err(GraphError::NodeNotFound(endpoint));
            }
        }

        let key = self.next_key.entry((from, to)).or_insert(0);
        let id = EdgeId(self.edges.len() as u32);
        self.edges.push(PathEdge::new(from, to, *key, attrs));
        *key += 1;
        Ok(id)
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    pub fn node(&self, id: NodeId) -> Option<&PathNode> {
        self.nodes.get(id.index())
    }

    /// Elevation of `id` in metres; `None` if the node is unknown or its
    /// elevation was never sampled.
    pub fn elevation(&self, id: NodeId) -> Option<f64> {
        self.nodes.get(id.index()).and_then(|n| n.elevation)
    }

    pub fn edge(&self, id: EdgeId) -> Option<&PathEdge> {
        self.edges.get(id.index())
    }

    /// Look up an edge by its multigraph identity `(from, to, key)`.
    ///
    /// Linear scan; intended for tests and spot checks, not hot paths.
    pub fn edge_between(&self, from: NodeId, to: NodeId, key: u32) -> Option<&PathEdge> {
        self.edges
            .iter()
            .find(|e| e.from == from && e.to == to && e.key == key)
    }

    // ── Bulk access ───────────────────────────────────────────────────────

    pub fn nodes(&self) -> &[PathNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[PathEdge] {
        &self.edges
    }

    pub fn edges_mut(&mut self) -> &mut [PathEdge] {
        &mut self.edges
    }

    /// Split borrow for annotation passes: mutable edge records alongside
    /// the read-only node table.  Field borrows are disjoint, so the
    /// borrow checker permits both at once.
    pub fn edges_mut_with_nodes(&mut self) -> (&mut [PathEdge], &[PathNode]) {
        (&mut self.edges, &self.nodes)
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}

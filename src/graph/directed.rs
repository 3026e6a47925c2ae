// src/graph/directed.rs
//! In-memory directed multigraph with dense node ids.

use std::collections::HashMap;

/// Dense node handle. Equal to the node's first-seen insertion sequence number.
pub type NodeId = usize;

/// Directed multigraph keyed by string labels.
///
/// Nodes are numbered in first-insertion order, which downstream stages rely on
/// for deterministic iteration and tie-breaking. Parallel edges are stored
/// separately and show up repeated in the neighbour lists.
#[derive(Debug, Clone, Default)]
pub struct DirectedGraph {
    labels: Vec<String>,
    index: HashMap<String, NodeId>,
    out_edges: Vec<Vec<NodeId>>,
    in_edges: Vec<Vec<NodeId>>,
    edge_count: usize,
}

impl DirectedGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `label` if unseen and returns its id either way.
    pub fn add_node(&mut self, label: &str) -> NodeId {
        if let Some(&id) = self.index.get(label) {
            return id;
        }
        let id = self.labels.len();
        self.labels.push(label.to_string());
        self.index.insert(label.to_string(), id);
        self.out_edges.push(Vec::new());
        self.in_edges.push(Vec::new());
        id
    }

    /// Appends one `source -> target` edge, creating either endpoint on first reference.
    /// Duplicate edges are kept.
    pub fn add_edge(&mut self, source: &str, target: &str) -> (NodeId, NodeId) {
        let src = self.add_node(source);
        let dst = self.add_node(target);
        self.out_edges[src].push(dst);
        self.in_edges[dst].push(src);
        self.edge_count += 1;
        (src, dst)
    }

    /// Node ids in first-insertion order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = NodeId> {
        0..self.labels.len()
    }

    /// Node labels in first-insertion order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    #[must_use]
    pub fn label(&self, node: NodeId) -> Option<&str> {
        self.labels.get(node).map(String::as_str)
    }

    #[must_use]
    pub fn node_id(&self, label: &str) -> Option<NodeId> {
        self.index.get(label).copied()
    }

    /// Targets of outgoing edges, repeated once per parallel edge.
    #[must_use]
    pub fn out_neighbors(&self, node: NodeId) -> &[NodeId] {
        self.out_edges.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Sources of incoming edges, repeated once per parallel edge.
    #[must_use]
    pub fn in_neighbors(&self, node: NodeId) -> &[NodeId] {
        self.in_edges.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    #[must_use]
    pub fn out_degree(&self, node: NodeId) -> usize {
        self.out_neighbors(node).len()
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

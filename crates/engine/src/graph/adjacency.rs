//! In-memory adjacency index for fast neighbour lookups.
//!
//! Edges are undirected, so every edge is recorded under both endpoints.
//! A self-loop is recorded once under its node.

use rustc_hash::{FxHashMap, FxHashSet};

use ppinet_core::{Edge, NodeId};

/// Undirected adjacency index.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyIndex {
    /// node → neighbours, in edge insertion order (with multiplicity).
    pub neighbors: FxHashMap<NodeId, Vec<NodeId>>,
    /// Every node that appears on an edge or was added explicitly.
    pub nodes: FxHashSet<NodeId>,
}

impl AdjacencyIndex {
    /// Create a new empty adjacency index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from an edge slice.
    pub fn from_edges(edges: &[Edge]) -> Self {
        let mut index = Self::new();
        for e in edges {
            index.add_edge(e.source, e.target);
        }
        index
    }

    /// Add a node with no edges.
    pub fn add_node(&mut self, node: NodeId) {
        self.nodes.insert(node);
    }

    /// Add an undirected edge.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) {
        self.nodes.insert(a);
        self.nodes.insert(b);
        self.neighbors.entry(a).or_default().push(b);
        if a != b {
            self.neighbors.entry(b).or_default().push(a);
        }
    }

    /// Neighbours of a node (empty for unknown nodes).
    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        self.neighbors.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of incident edge endpoints (a self-loop counts twice).
    pub fn degree(&self, node: NodeId) -> usize {
        self.neighbors(node)
            .iter()
            .map(|&n| if n == node { 2 } else { 1 })
            .sum()
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the node is known to the index.
    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains(&node)
    }
}

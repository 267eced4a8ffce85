//! Graph module for ppinet.
//!
//! A [`Network`] is an immutable undirected edge list over dense node IDs
//! with an adjacency index built on construction. The submodules provide
//! the pipeline steps that operate on it: identifier reindexing, edge
//! canonicalisation, seed expansion, cluster pruning and statistics.

pub mod adjacency;
pub mod canonical;
pub mod interactions;
pub mod prune;
pub mod reindex;
pub mod seeds;
pub mod stats;
pub mod traversal;
pub mod types;

use rustc_hash::FxHashSet;

use ppinet_core::{Edge, NodeId};

use adjacency::AdjacencyIndex;
use types::NodeDegree;

/// Undirected interaction network.
#[derive(Debug, Clone, Default)]
pub struct Network {
    edges: Vec<Edge>,
    adjacency: AdjacencyIndex,
}

impl Network {
    /// Build a network from an edge list.
    pub fn new(edges: Vec<Edge>) -> Self {
        let adjacency = AdjacencyIndex::from_edges(&edges);
        Self { edges, adjacency }
    }

    /// Build a network that also knows about nodes with no edges.
    pub fn with_nodes<I>(edges: Vec<Edge>, nodes: I) -> Self
    where
        I: IntoIterator<Item = NodeId>,
    {
        let mut network = Self::new(edges);
        for n in nodes {
            network.adjacency.add_node(n);
        }
        network
    }

    /// All edges, in construction order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// The adjacency index.
    pub fn adjacency(&self) -> &AdjacencyIndex {
        &self.adjacency
    }

    /// Number of distinct nodes.
    pub fn node_count(&self) -> usize {
        self.adjacency.node_count()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Neighbours of `node`.
    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        self.adjacency.neighbors(node)
    }

    /// Degree of `node`.
    pub fn degree(&self, node: NodeId) -> usize {
        self.adjacency.degree(node)
    }

    /// Degree of every node, ascending by node ID.
    pub fn degrees(&self) -> Vec<NodeDegree> {
        let mut out: Vec<NodeDegree> = self
            .adjacency
            .nodes
            .iter()
            .map(|&node_id| NodeDegree {
                node_id,
                degree: self.degree(node_id),
            })
            .collect();
        out.sort_by_key(|d| d.node_id);
        out
    }

    /// Keep only edges whose score is at least `min_score`.
    ///
    /// Unscored edges are dropped. Nodes that lose every edge are dropped
    /// too.
    pub fn filter_by_score(&self, min_score: f64) -> Network {
        let kept: Vec<Edge> = self
            .edges
            .iter()
            .filter(|e| e.score.map_or(false, |s| s >= min_score))
            .cloned()
            .collect();
        Network::new(kept)
    }

    /// Edges with both endpoints in `nodes`, in construction order.
    pub fn induced_edges(&self, nodes: &FxHashSet<NodeId>) -> Vec<Edge> {
        self.edges
            .iter()
            .filter(|e| nodes.contains(&e.source) && nodes.contains(&e.target))
            .cloned()
            .collect()
    }
}

impl From<Vec<Edge>> for Network {
    fn from(edges: Vec<Edge>) -> Self {
        Network::new(edges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path() -> Network {
        Network::new(vec![
            Edge::scored(0, 1, 0.9),
            Edge::scored(1, 2, 0.5),
            Edge::new(2, 3),
        ])
    }

    // =========================================================================
    // Construction
    // =========================================================================

    #[test]
    fn counts() {
        let n = path();
        assert_eq!(n.node_count(), 4);
        assert_eq!(n.edge_count(), 3);
        assert_eq!(n.degree(1), 2);
    }

    #[test]
    fn isolated_nodes_are_counted() {
        let n = Network::with_nodes(vec![Edge::new(0, 1)], [5, 6]);
        assert_eq!(n.node_count(), 4);
        assert_eq!(n.degree(5), 0);
    }

    #[test]
    fn degrees_sorted_by_id() {
        let ids: Vec<NodeId> = path().degrees().iter().map(|d| d.node_id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
    }

    // =========================================================================
    // Filtering
    // =========================================================================

    #[test]
    fn score_filter_is_inclusive_and_drops_unscored() {
        let n = path().filter_by_score(0.5);
        assert_eq!(n.edges(), &[Edge::scored(0, 1, 0.9), Edge::scored(1, 2, 0.5)]);
        assert!(!n.adjacency().contains(3));
    }

    #[test]
    fn induced_edges_keep_input_order() {
        let nodes: FxHashSet<NodeId> = [1, 2, 3].into_iter().collect();
        let e = path().induced_edges(&nodes);
        assert_eq!(e, vec![Edge::scored(1, 2, 0.5), Edge::new(2, 3)]);
    }
}

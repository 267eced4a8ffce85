//! Core graph types for the engine.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use ppinet_core::{Edge, NodeId};

use super::Network;

/// Options for seed-based expansion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpandOptions {
    /// Maximum number of BFS hops from the seed set.
    pub max_hops: usize,
    /// Node budget applied after the hops.
    pub max_nodes: usize,
    /// Minimum edge score (inclusive). Unscored edges fail any threshold.
    pub min_score: Option<f64>,
}

impl Default for ExpandOptions {
    fn default() -> Self {
        Self {
            max_hops: 1,
            max_nodes: 500,
            min_score: None,
        }
    }
}

impl ExpandOptions {
    /// Set the hop limit.
    pub fn max_hops(mut self, hops: usize) -> Self {
        self.max_hops = hops;
        self
    }

    /// Set the node budget.
    pub fn max_nodes(mut self, nodes: usize) -> Self {
        self.max_nodes = nodes;
        self
    }

    /// Set the score threshold.
    pub fn min_score(mut self, score: f64) -> Self {
        self.min_score = Some(score);
        self
    }
}

/// Result of a seed expansion.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpansionResult {
    /// Final node set, ascending.
    pub nodes: Vec<NodeId>,
    /// Hop at which each node was first reached (seeds are 0).
    pub depths: FxHashMap<NodeId, usize>,
    /// Input edges with both endpoints in `nodes`, in input order.
    pub edges: Vec<Edge>,
    /// Hops actually performed before stopping.
    pub hops_completed: usize,
    /// Whether degree truncation was applied.
    pub truncated: bool,
}

impl ExpansionResult {
    /// Number of nodes in the result.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges in the result.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

/// A node together with its degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NodeDegree {
    /// The node.
    pub node_id: NodeId,
    /// Its degree.
    pub degree: usize,
}

/// Trait for graph algorithms that operate on a network.
pub trait GraphAlgorithm {
    /// The result type of this algorithm.
    type Output;
    /// Execute the algorithm on the given network.
    fn execute(&self, network: &Network) -> Self::Output;
}

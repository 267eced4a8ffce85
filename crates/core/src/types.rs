//! Core network types shared by storage, engine and fetch.

use serde::{Deserialize, Serialize};

/// Dense integer index assigned to an external protein/gene identifier.
pub type NodeId = u32;

/// An interaction between two reindexed nodes.
///
/// Edges are undirected; `source`/`target` only record the order the
/// pair was read in until the edge list is canonicalized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// First endpoint.
    pub source: NodeId,
    /// Second endpoint.
    pub target: NodeId,
    /// Optional confidence score (e.g. STRING `combined_score`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl Edge {
    /// Create an unscored edge.
    pub fn new(source: NodeId, target: NodeId) -> Self {
        Self {
            source,
            target,
            score: None,
        }
    }

    /// Create an edge carrying a confidence score.
    pub fn scored(source: NodeId, target: NodeId, score: f64) -> Self {
        Self {
            source,
            target,
            score: Some(score),
        }
    }

    /// The endpoint pair ordered so that the smaller ID comes first.
    pub fn key(&self) -> (NodeId, NodeId) {
        if self.source <= self.target {
            (self.source, self.target)
        } else {
            (self.target, self.source)
        }
    }

    /// This edge with endpoints ordered `source <= target`.
    pub fn canonical(&self) -> Self {
        let (source, target) = self.key();
        Self {
            source,
            target,
            score: self.score,
        }
    }

    /// Whether both endpoints are the same node.
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }

    /// Whether the edge touches `node`.
    pub fn touches(&self, node: NodeId) -> bool {
        self.source == node || self.target == node
    }
}

/// An interaction between two proteins named by external identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    /// External identifier of the first protein.
    pub protein1: String,
    /// External identifier of the second protein.
    pub protein2: String,
    /// Optional confidence score.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl Interaction {
    /// Create an interaction without a score.
    pub fn new(protein1: impl Into<String>, protein2: impl Into<String>) -> Self {
        Self {
            protein1: protein1.into(),
            protein2: protein2.into(),
            score: None,
        }
    }

    /// Attach a confidence score.
    pub fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }
}

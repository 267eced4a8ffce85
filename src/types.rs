//! Public types for the ppinet toolkit.
//!
//! This module re-exports types from the member crates under one path.

// ============================================================================
// Data model
// ============================================================================

pub use ppinet_core::{Edge, Interaction, NodeId, PpiError, PpiResult};

// Files
pub use ppinet_storage::{BiogridNetwork, ClusterAssignment, SequenceMap, Table, TableFormat};

// ============================================================================
// Graph algorithms
// ============================================================================

pub use ppinet_engine::{
    CanonicalEdges, ExpandOptions, ExpansionResult, GraphAlgorithm, IdMap, Network, NodeDegree,
    ReindexOutcome, SeedPolicy, UnmappedPolicy,
};

// Clustering
pub use ppinet_engine::{ClusteringResult, Dendrogram, HierarchicalClustering, HierarchyNode, Paris};

// ============================================================================
// External APIs
// ============================================================================

pub use ppinet_fetch::{FetchConfig, FetchReport, GeneProperties, SequenceSource};

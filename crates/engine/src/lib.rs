//! Graph algorithms for the ppinet pipeline.
//!
//! - [`graph`]: reindexing, canonicalisation, seed expansion, pruning and
//!   degree statistics over an undirected [`Network`]
//! - [`cluster`]: hierarchical clustering of an edge list into a JSON
//!   merge tree

#![warn(missing_docs)]

pub mod cluster;
pub mod graph;

pub use cluster::{
    cluster_edge_table, ClusteringResult, Dendrogram, HierarchicalClustering, HierarchyNode,
    LabelEncoder, Merge, Paris, WeightedAdjacency,
};
pub use graph::canonical::{canonicalize, CanonicalEdges};
pub use graph::interactions::{filter_seed_interactions, seed_protein_ids, subset_info};
pub use graph::prune::{prune_to_top_clusters, ClusterSize, PrunedNetwork};
pub use graph::reindex::{reindex_interactions, reindex_table, IdMap, ReindexOutcome, UnmappedPolicy};
pub use graph::seeds::{resolve_seeds, SeedPolicy, BREAST_CANCER_GENES};
pub use graph::stats::{missing_node_degrees, DegreeSummary, MissingDegreeReport, NetworkStats};
pub use graph::traversal::{expand_from_seeds, SeedExpansion};
pub use graph::types::{ExpandOptions, ExpansionResult, GraphAlgorithm, NodeDegree};
pub use graph::Network;

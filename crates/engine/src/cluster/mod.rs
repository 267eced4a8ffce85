//! Hierarchical clustering of an edge list into a JSON merge tree.
//!
//! The adapter label-encodes node names, builds an undirected weighted
//! adjacency (edge multiplicity is the weight), runs a
//! [`HierarchicalClustering`] implementation and converts the resulting
//! [`Dendrogram`] into a nested [`HierarchyNode`] tree.

pub mod dendrogram;
pub mod labels;
pub mod paris;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use ppinet_core::{PpiError, PpiResult};
use ppinet_storage::Table;

pub use dendrogram::{Dendrogram, HierarchyNode, Merge};
pub use labels::LabelEncoder;
pub use paris::Paris;

/// Symmetric weighted adjacency over nodes `0..n`.
#[derive(Debug, Clone, Default)]
pub struct WeightedAdjacency {
    rows: Vec<FxHashMap<usize, f64>>,
}

impl WeightedAdjacency {
    /// Build from undirected edges. Each edge adds 1 in both directions, so a
    /// self-loop adds 2 to its diagonal entry.
    pub fn from_edge_list(n: usize, edges: &[(usize, usize)]) -> Self {
        let mut rows = vec![FxHashMap::default(); n];
        for &(a, b) in edges {
            *rows[a].entry(b).or_insert(0.0) += 1.0;
            *rows[b].entry(a).or_insert(0.0) += 1.0;
        }
        Self { rows }
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.rows.len()
    }

    /// Weighted neighbours of `node`.
    pub fn row(&self, node: usize) -> &FxHashMap<usize, f64> {
        &self.rows[node]
    }

    /// Sum of every entry of the matrix.
    pub fn total_weight(&self) -> f64 {
        self.rows.iter().flat_map(|r| r.values()).sum()
    }
}

/// An agglomerative clustering algorithm producing a linkage.
pub trait HierarchicalClustering {
    /// Name recorded in the output file.
    fn name(&self) -> &str;
    /// Cluster the graph into a full dendrogram over its nodes.
    fn fit(&self, adjacency: &WeightedAdjacency) -> PpiResult<Dendrogram>;
}

/// The clustering result file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusteringResult {
    /// Algorithm name.
    pub algorithm: String,
    /// Distinct nodes.
    pub num_nodes: usize,
    /// Rows of the input edge list.
    pub num_edges: usize,
    /// Merge tree.
    pub hierarchy: HierarchyNode,
}

impl ClusteringResult {
    /// Pretty-printed JSON (two-space indent).
    pub fn to_json_pretty(&self) -> PpiResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the result as pretty JSON.
    pub fn write(&self, path: impl AsRef<Path>) -> PpiResult<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| PpiError::io(path, e))?;
        let mut out = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut out, self)?;
        out.flush().map_err(|e| PpiError::io(path, e))
    }
}

/// Cluster an edge table with `source` and `target` columns.
pub fn cluster_edge_table(
    table: &Table,
    algorithm: &dyn HierarchicalClustering,
) -> PpiResult<ClusteringResult> {
    let sources = table.column("source")?;
    let targets = table.column("target")?;
    if sources.is_empty() {
        return Err(PpiError::invalid_input(format!("{} has no edges", table.name())));
    }

    let encoder = LabelEncoder::fit(sources.iter().chain(&targets).copied());
    let encode = |name: &str| {
        encoder
            .transform(name)
            .ok_or_else(|| PpiError::invalid_input(format!("node '{}' was not encoded", name)))
    };
    let edges = sources
        .iter()
        .zip(&targets)
        .map(|(s, t)| Ok((encode(*s)?, encode(*t)?)))
        .collect::<PpiResult<Vec<_>>>()?;
    tracing::info!(nodes = encoder.len(), edges = edges.len(), "Encoded edge list");

    let adjacency = WeightedAdjacency::from_edge_list(encoder.len(), &edges);
    let dendrogram = algorithm.fit(&adjacency)?;
    let hierarchy = dendrogram.to_hierarchy(encoder.classes())?;
    tracing::info!(algorithm = algorithm.name(), merges = dendrogram.merges().len(), "Built hierarchy");

    Ok(ClusteringResult {
        algorithm: algorithm.name().to_string(),
        num_nodes: encoder.len(),
        num_edges: table.len(),
        hierarchy,
    })
}

//! Degree statistics and missing-sequence degree analysis.

use std::collections::BTreeMap;

use serde::Serialize;

use ppinet_core::{Edge, NodeId, PpiResult};
use ppinet_storage::{SequenceMap, Table};

use super::types::{GraphAlgorithm, NodeDegree};
use super::Network;

/// Summary statistics of a network.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkStats {
    /// Distinct nodes.
    pub node_count: usize,
    /// Edges.
    pub edge_count: usize,
    /// Mean degree (0 for an empty network).
    pub average_degree: f64,
    /// Smallest degree.
    pub min_degree: usize,
    /// Largest degree.
    pub max_degree: usize,
    /// Highest-degree nodes, ties by ascending ID.
    pub hubs: Vec<NodeDegree>,
    /// degree → number of nodes with that degree.
    pub degree_histogram: BTreeMap<usize, usize>,
}

/// Computes [`NetworkStats`] keeping the `top_n` hubs.
#[derive(Debug, Clone, Copy)]
pub struct DegreeSummary {
    /// Number of hubs to report.
    pub top_n: usize,
}

impl Default for DegreeSummary {
    fn default() -> Self {
        Self { top_n: 10 }
    }
}

impl GraphAlgorithm for DegreeSummary {
    type Output = NetworkStats;

    fn execute(&self, network: &Network) -> NetworkStats {
        let degrees = network.degrees();
        let mut degree_histogram = BTreeMap::new();
        for d in &degrees {
            *degree_histogram.entry(d.degree).or_insert(0) += 1;
        }
        let total: usize = degrees.iter().map(|d| d.degree).sum();
        let average_degree = if degrees.is_empty() {
            0.0
        } else {
            total as f64 / degrees.len() as f64
        };

        let mut hubs = degrees.clone();
        hubs.sort_by(|a, b| b.degree.cmp(&a.degree).then(a.node_id.cmp(&b.node_id)));
        hubs.truncate(self.top_n);

        NetworkStats {
            node_count: network.node_count(),
            edge_count: network.edge_count(),
            average_degree,
            min_degree: degrees.iter().map(|d| d.degree).min().unwrap_or(0),
            max_degree: degrees.iter().map(|d| d.degree).max().unwrap_or(0),
            hubs,
            degree_histogram,
        }
    }
}

/// A node without a sequence, with its degree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingNodeDegree {
    /// The node.
    pub node_id: NodeId,
    /// Its external protein identifier.
    pub protein_id: String,
    /// Degree in the edge list.
    pub degree: usize,
}

/// Degrees of the nodes that have no sequence, highest first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MissingDegreeReport {
    /// Missing nodes, by descending degree (stable on node-table order).
    pub nodes: Vec<MissingNodeDegree>,
}

impl MissingDegreeReport {
    /// Nodes with no edges at all.
    pub fn isolated(&self) -> usize {
        self.nodes.iter().filter(|n| n.degree == 0).count()
    }

    /// Nodes with exactly `degree` edges.
    pub fn with_degree(&self, degree: usize) -> usize {
        self.nodes.iter().filter(|n| n.degree == degree).count()
    }

    /// Nodes with at least `degree` edges.
    pub fn at_least(&self, degree: usize) -> usize {
        self.nodes.iter().filter(|n| n.degree >= degree).count()
    }

    /// As a `node_id,protein_id,degree` table.
    pub fn to_table(&self) -> Table {
        let mut t = Table::new(
            "missing_nodes",
            vec!["node_id".into(), "protein_id".into(), "degree".into()],
        );
        for n in &self.nodes {
            t.push_row(vec![n.node_id.to_string(), n.protein_id.clone(), n.degree.to_string()]);
        }
        t
    }
}

/// Find nodes of `info` missing from `sequences` and rank them by degree.
///
/// `info` needs `node_id` and `protein_id` columns. Degree counts every edge
/// endpoint, so a duplicated edge counts twice.
pub fn missing_node_degrees(
    info: &Table,
    sequences: &SequenceMap,
    edges: &[Edge],
) -> PpiResult<MissingDegreeReport> {
    let node_ids: Vec<NodeId> = info.parse_column("node_id")?;
    let proteins = info.column("protein_id")?;

    let mut degree: BTreeMap<NodeId, usize> = BTreeMap::new();
    for e in edges {
        *degree.entry(e.source).or_insert(0) += 1;
        *degree.entry(e.target).or_insert(0) += 1;
    }

    let mut nodes: Vec<MissingNodeDegree> = node_ids
        .iter()
        .zip(proteins)
        .filter(|(id, _)| !sequences.contains(**id))
        .map(|(&node_id, protein)| MissingNodeDegree {
            node_id,
            protein_id: protein.to_string(),
            degree: degree.get(&node_id).copied().unwrap_or(0),
        })
        .collect();
    nodes.sort_by(|a, b| b.degree.cmp(&a.degree));

    let report = MissingDegreeReport { nodes };
    tracing::info!(
        missing = report.nodes.len(),
        isolated = report.isolated(),
        degree_ge_5 = report.at_least(5),
        "Analysed degrees of nodes without sequences"
    );
    Ok(report)
}

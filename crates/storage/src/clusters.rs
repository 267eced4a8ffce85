//! Disjoint clustering assignment files (`node_id,cluster_id`).

use std::path::Path;

use ppinet_core::{NodeId, PpiResult};

use crate::table::{Table, TableFormat};

/// Cluster label of one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClusterAssignment {
    /// The node.
    pub node_id: NodeId,
    /// Its cluster.
    pub cluster_id: u32,
}

/// Read assignments from a CSV with `node_id` and `cluster_id` columns.
pub fn read_assignments(path: impl AsRef<Path>) -> PpiResult<Vec<ClusterAssignment>> {
    let table = Table::read(path, TableFormat::CSV)?;
    assignments_from_table(&table)
}

/// Read assignments from a headerless `node_id<TAB>cluster_id` file.
pub fn read_assignments_tsv(path: impl AsRef<Path>) -> PpiResult<Vec<ClusterAssignment>> {
    let table = Table::read_with_names(path, TableFormat::TSV_NO_HEADER, &["node_id", "cluster_id"])?;
    assignments_from_table(&table)
}

/// Convert a table with `node_id` and `cluster_id` columns.
pub fn assignments_from_table(table: &Table) -> PpiResult<Vec<ClusterAssignment>> {
    let nodes: Vec<NodeId> = table.parse_column("node_id")?;
    let clusters: Vec<u32> = table.parse_column("cluster_id")?;
    Ok(nodes
        .into_iter()
        .zip(clusters)
        .map(|(node_id, cluster_id)| ClusterAssignment {
            node_id,
            cluster_id,
        })
        .collect())
}

/// Write assignments as `node_id,cluster_id` CSV.
pub fn write_assignments(path: impl AsRef<Path>, assignments: &[ClusterAssignment]) -> PpiResult<()> {
    let mut table = Table::new(
        path.as_ref().display().to_string(),
        vec!["node_id".into(), "cluster_id".into()],
    );
    for a in assignments {
        table.push_row(vec![a.node_id.to_string(), a.cluster_id.to_string()]);
    }
    table.write(path, TableFormat::CSV)
}

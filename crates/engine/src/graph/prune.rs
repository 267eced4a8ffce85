//! Top-k cluster pruning of a disjoint clustering.

use rustc_hash::{FxHashMap, FxHashSet};

use ppinet_core::{Edge, NodeId, PpiResult};
use ppinet_storage::{ClusterAssignment, Table};

/// Number of nodes assigned to one cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClusterSize {
    /// Cluster label.
    pub cluster_id: u32,
    /// Member count.
    pub size: usize,
}

/// Cluster sizes, largest first, ties by ascending cluster ID.
pub fn cluster_sizes(assignments: &[ClusterAssignment]) -> Vec<ClusterSize> {
    let mut counts: FxHashMap<u32, usize> = FxHashMap::default();
    for a in assignments {
        *counts.entry(a.cluster_id).or_insert(0) += 1;
    }
    let mut sizes: Vec<ClusterSize> = counts
        .into_iter()
        .map(|(cluster_id, size)| ClusterSize { cluster_id, size })
        .collect();
    sizes.sort_by(|a, b| b.size.cmp(&a.size).then(a.cluster_id.cmp(&b.cluster_id)));
    sizes
}

/// A clustering and edge list restricted to the largest clusters.
#[derive(Debug, Clone, PartialEq)]
pub struct PrunedNetwork {
    /// Kept clusters, largest first.
    pub top: Vec<ClusterSize>,
    /// Number of clusters before pruning.
    pub total_clusters: usize,
    /// Number of assignments before pruning.
    pub total_nodes: usize,
    /// Number of edges before pruning.
    pub total_edges: usize,
    /// Assignments in kept clusters, in input order.
    pub assignments: Vec<ClusterAssignment>,
    /// Edges with both endpoints kept, in input order.
    pub edges: Vec<Edge>,
}

impl PrunedNetwork {
    /// Node IDs that survived pruning.
    pub fn kept_nodes(&self) -> FxHashSet<NodeId> {
        self.assignments.iter().map(|a| a.node_id).collect()
    }

    /// Keep only the info rows whose `node_id` survived.
    pub fn prune_info(&self, info: &Table) -> PpiResult<Table> {
        let ids: Vec<NodeId> = info.parse_column("node_id")?;
        let kept = self.kept_nodes();
        let mut keep = ids.iter().map(|id| kept.contains(id));
        let mut pruned = info.clone();
        pruned.retain_rows(|_| keep.next().unwrap_or(false));
        Ok(pruned)
    }

    /// Two-column `metric,value` summary.
    pub fn summary_table(&self) -> Table {
        let mut t = Table::new("summary", vec!["metric".into(), "value".into()]);
        let mut push = |metric: String, value: String| t.push_row(vec![metric, value]);

        push("Total clusters (original)".into(), self.total_clusters.to_string());
        push("Clusters kept".into(), self.top.len().to_string());
        push("Total nodes (original)".into(), self.total_nodes.to_string());
        push(
            format!("Nodes in top {} clusters", self.top.len()),
            self.assignments.len().to_string(),
        );
        push(
            "Percentage of nodes kept".into(),
            percentage(self.assignments.len(), self.total_nodes),
        );
        push("Total edges (original)".into(), self.total_edges.to_string());
        push(
            format!("Edges in top {} clusters", self.top.len()),
            self.edges.len().to_string(),
        );
        push(
            "Percentage of edges kept".into(),
            percentage(self.edges.len(), self.total_edges),
        );
        for (rank, c) in self.top.iter().enumerate() {
            push(format!("Cluster {} ID", rank + 1), c.cluster_id.to_string());
            push(format!("Cluster {} size", rank + 1), c.size.to_string());
        }
        t
    }
}

fn percentage(part: usize, whole: usize) -> String {
    if whole == 0 {
        return "0.00%".to_string();
    }
    format!("{:.2}%", part as f64 / whole as f64 * 100.0)
}

/// Restrict a clustering and its edge list to the `k` largest clusters.
pub fn prune_to_top_clusters(
    assignments: &[ClusterAssignment],
    edges: &[Edge],
    k: usize,
) -> PrunedNetwork {
    let sizes = cluster_sizes(assignments);
    let total_clusters = sizes.len();
    let top: Vec<ClusterSize> = sizes.into_iter().take(k).collect();
    let kept_clusters: FxHashSet<u32> = top.iter().map(|c| c.cluster_id).collect();

    let kept: Vec<ClusterAssignment> = assignments
        .iter()
        .filter(|a| kept_clusters.contains(&a.cluster_id))
        .copied()
        .collect();
    let kept_nodes: FxHashSet<NodeId> = kept.iter().map(|a| a.node_id).collect();
    let kept_edges: Vec<Edge> = edges
        .iter()
        .filter(|e| kept_nodes.contains(&e.source) && kept_nodes.contains(&e.target))
        .copied()
        .collect();

    for (rank, c) in top.iter().enumerate() {
        tracing::info!(rank = rank + 1, cluster_id = c.cluster_id, size = c.size, "Kept cluster");
    }
    tracing::info!(
        nodes_before = assignments.len(),
        nodes_after = kept.len(),
        edges_before = edges.len(),
        edges_after = kept_edges.len(),
        "Pruned to top clusters"
    );

    PrunedNetwork {
        top,
        total_clusters,
        total_nodes: assignments.len(),
        total_edges: edges.len(),
        assignments: kept,
        edges: kept_edges,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assign(pairs: &[(NodeId, u32)]) -> Vec<ClusterAssignment> {
        pairs
            .iter()
            .map(|&(node_id, cluster_id)| ClusterAssignment {
                node_id,
                cluster_id,
            })
            .collect()
    }

    fn fixture() -> (Vec<ClusterAssignment>, Vec<Edge>) {
        let a = assign(&[(0, 7), (1, 7), (2, 7), (3, 1), (4, 1), (5, 2), (6, 3)]);
        let e = vec![
            Edge::new(0, 1),
            Edge::new(1, 3),
            Edge::new(3, 4),
            Edge::new(4, 5),
            Edge::new(5, 6),
        ];
        (a, e)
    }

    #[test]
    fn sizes_sorted_with_id_tiebreak() {
        let (a, _) = fixture();
        let s = cluster_sizes(&a);
        assert_eq!(s[0], ClusterSize { cluster_id: 7, size: 3 });
        assert_eq!(s[1], ClusterSize { cluster_id: 1, size: 2 });
        assert_eq!(s[2], ClusterSize { cluster_id: 2, size: 1 });
        assert_eq!(s[3], ClusterSize { cluster_id: 3, size: 1 });
    }

    #[test]
    fn keeps_only_internal_edges() {
        let (a, e) = fixture();
        let p = prune_to_top_clusters(&a, &e, 2);
        assert_eq!(p.assignments.len(), 5);
        assert_eq!(p.edges, vec![Edge::new(0, 1), Edge::new(1, 3), Edge::new(3, 4)]);
        assert_eq!(p.total_clusters, 4);
    }

    #[test]
    fn k_larger_than_cluster_count_keeps_all() {
        let (a, e) = fixture();
        let p = prune_to_top_clusters(&a, &e, 10);
        assert_eq!(p.top.len(), 4);
        assert_eq!(p.edges.len(), e.len());
    }

    #[test]
    fn summary_rows() {
        let (a, e) = fixture();
        let t = prune_to_top_clusters(&a, &e, 2).summary_table();
        let metrics = t.column("metric").unwrap();
        let values = t.column("value").unwrap();
        assert_eq!(metrics[3], "Nodes in top 2 clusters");
        assert_eq!(values[4], "71.43%");
        assert_eq!(values[7], "60.00%");
        assert_eq!(metrics.last(), Some(&"Cluster 2 size"));
        assert_eq!(t.len(), 12);
    }

    #[test]
    fn info_rows_filtered_by_node_id() {
        let (a, e) = fixture();
        let p = prune_to_top_clusters(&a, &e, 1);
        let mut info = Table::new("info", vec!["node_id".into(), "protein_id".into()]);
        for i in 0..7 {
            info.push_row(vec![i.to_string(), format!("P{}", i)]);
        }
        let pruned = p.prune_info(&info).unwrap();
        assert_eq!(pruned.column("protein_id").unwrap(), vec!["P0", "P1", "P2"]);
    }
}

//! Clustering output and top-k pruning.

use tempfile::TempDir;

use ppinet::ppinet_engine::{cluster_edge_table, prune_to_top_clusters};
use ppinet::ppinet_storage::clusters::{read_assignments, read_assignments_tsv, write_assignments};
use ppinet::ppinet_storage::edges::{read_edges, write_edges};
use ppinet::{ClusteringResult, Edge, HierarchyNode, Paris};

use crate::test_utils::{read_csv, table, write_file};

fn two_communities() -> Vec<Edge> {
    vec![
        Edge::new(0, 1),
        Edge::new(1, 2),
        Edge::new(0, 2),
        Edge::new(2, 3),
        Edge::new(3, 4),
        Edge::new(4, 5),
        Edge::new(3, 5),
    ]
}

fn count_nodes(root: &HierarchyNode) -> (usize, usize) {
    let mut leaves = 0;
    let mut clusters = 0;
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        match node {
            HierarchyNode::Leaf(_) => leaves += 1,
            HierarchyNode::Cluster(c) => {
                clusters += 1;
                stack.extend(c.children.iter());
            }
        }
    }
    (leaves, clusters)
}

// =============================================================================
// Paris output file
// =============================================================================

#[test]
fn cluster_file_has_full_tree() {
    let dir = TempDir::new().unwrap();
    let edge_path = dir.path().join("edgelist.csv");
    write_edges(&edge_path, &two_communities()).unwrap();

    let result = cluster_edge_table(&read_csv(&edge_path), &Paris::default()).unwrap();
    let out = dir.path().join("paris.json");
    result.write(&out).unwrap();

    let back: ClusteringResult = serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(back, result);
    assert_eq!(back.algorithm, "Paris");
    assert_eq!(back.num_nodes, 6);
    assert_eq!(back.num_edges, 7);
    assert_eq!(back.hierarchy.count(), 6);
    assert_eq!(count_nodes(&back.hierarchy), (6, 5));

    // The bridge 2-3 is the weakest link, so the root splits the triangles.
    let HierarchyNode::Cluster(root) = &back.hierarchy else {
        panic!("root must be a cluster");
    };
    let mut sides: Vec<Vec<&str>> = root.children.iter().map(|c| c.leaf_names()).collect();
    for side in &mut sides {
        side.sort_unstable();
    }
    sides.sort();
    assert_eq!(sides, vec![vec!["0", "1", "2"], vec!["3", "4", "5"]]);
}

#[test]
fn disconnected_graph_joined_with_null_distance() {
    let dir = TempDir::new().unwrap();
    let edges = write_file(dir.path(), "e.csv", "source,target\nA,B\nC,D\n");
    let result = cluster_edge_table(&read_csv(&edges), &Paris::default()).unwrap();

    let v = serde_json::to_value(&result).unwrap();
    assert!(v["hierarchy"]["distance"].is_null());
    assert_eq!(v["hierarchy"]["count"], 4);
    assert_eq!(v["hierarchy"]["id"], 6);
}

// =============================================================================
// Top-k pruning
// =============================================================================

#[test]
fn pruning_keeps_largest_clusters() {
    let dir = TempDir::new().unwrap();
    let tsv = write_file(dir.path(), "leiden.tsv", "0\t7\n1\t7\n2\t7\n3\t9\n4\t9\n5\t8\n");
    let assignments = read_assignments_tsv(&tsv).unwrap();
    let csv_path = dir.path().join("leiden.csv");
    write_assignments(&csv_path, &assignments).unwrap();
    assert_eq!(read_assignments(&csv_path).unwrap(), assignments);

    let mut edges = two_communities();
    edges.push(Edge::new(4, 5));
    edges.push(Edge::new(0, 5));
    let edge_path = dir.path().join("edges.csv");
    write_edges(&edge_path, &edges).unwrap();

    let pruned = prune_to_top_clusters(&assignments, &read_edges(&edge_path).unwrap(), 2);
    let kept: Vec<u32> = pruned.top.iter().map(|c| c.cluster_id).collect();
    assert_eq!(kept, vec![7, 9]);
    assert_eq!(pruned.assignments.len(), 5);
    assert!(pruned
        .edges
        .iter()
        .all(|e| e.source != 5 && e.target != 5));
    assert_eq!(pruned.edges.len(), 5);

    let info = table(
        &["protein_id", "node_id"],
        &[&["P0", "0"], &["P3", "3"], &["P5", "5"]],
    );
    assert_eq!(pruned.prune_info(&info).unwrap().column("protein_id").unwrap(), vec!["P0", "P3"]);

    let summary = pruned.summary_table();
    assert_eq!(summary.headers(), &["metric", "value"]);
    assert!(summary
        .rows()
        .iter()
        .any(|r| r[0] == "Percentage of nodes kept" && r[1] == "83.33%"));
}

//! STRING filter → subset → reindex → canonicalise → expand.

use tempfile::TempDir;

use ppinet::ppinet_engine::graph::interactions::strip_scores;
use ppinet::ppinet_engine::{
    canonicalize, expand_from_seeds, filter_seed_interactions, reindex_table, resolve_seeds,
    seed_protein_ids, subset_info,
};
use ppinet::ppinet_storage::edges::{read_edges, read_interactions, read_string_links, write_edges, write_interactions};
use ppinet::{ExpandOptions, Network, PpiError, SeedPolicy, Table, TableFormat, UnmappedPolicy};

use crate::test_utils::{read_csv, write_file, STRING_INFO, STRING_LINKS};

const ID_COLUMN: &str = "#string_protein_id";

/// Run the STRING stages and return (node table, edge list path, dir).
fn build_network() -> (Table, std::path::PathBuf, TempDir) {
    let dir = TempDir::new().unwrap();
    let info_path = write_file(dir.path(), "info.txt", STRING_INFO);
    let links_path = write_file(dir.path(), "links.txt", STRING_LINKS);

    let info = Table::read(&info_path, TableFormat::TSV).unwrap();
    let links = read_string_links(&links_path).unwrap();
    let proteins = seed_protein_ids(&info, &["BRCA1", "TP53", "ATM", "PTEN"]).unwrap();
    let seed_links = filter_seed_interactions(&links, &proteins, 700.0);

    let seed_path = dir.path().join("seed_ppi.txt");
    write_interactions(&seed_path, &seed_links, TableFormat::TSV_NO_HEADER).unwrap();
    let seed_links = read_interactions(&seed_path, TableFormat::TSV_NO_HEADER).unwrap();

    let mut nodes = subset_info(&info, ID_COLUMN, &seed_links).unwrap();
    let pairs_path = dir.path().join("pairs.csv");
    write_interactions(&pairs_path, &strip_scores(&seed_links), TableFormat::CSV).unwrap();
    let pairs = read_interactions(&pairs_path, TableFormat::CSV).unwrap();

    let (_, outcome) = reindex_table(&mut nodes, ID_COLUMN, &pairs, UnmappedPolicy::Error).unwrap();
    let edge_path = dir.path().join("edgelist.csv");
    write_edges(&edge_path, &outcome.edges).unwrap();
    (nodes, edge_path, dir)
}

// =============================================================================
// Filtering and reindexing
// =============================================================================

#[test]
fn filter_is_strict_and_seed_only() {
    let (nodes, edge_path, _dir) = build_network();

    assert_eq!(
        nodes.column("preferred_name").unwrap(),
        vec!["BRCA1", "TP53", "ATM", "PTEN"]
    );
    assert_eq!(nodes.column("node_id").unwrap(), vec!["0", "1", "2", "3"]);

    let edges = read_edges(&edge_path).unwrap();
    let pairs: Vec<(u32, u32)> = edges.iter().map(|e| (e.source, e.target)).collect();
    assert_eq!(pairs, vec![(0, 1), (1, 0), (0, 2), (2, 3), (3, 3)]);
    assert!(edges.iter().all(|e| e.score.is_none()));
}

#[test]
fn unmapped_endpoint_fails_or_drops() {
    let dir = TempDir::new().unwrap();
    let info = Table::read(write_file(dir.path(), "info.txt", STRING_INFO), TableFormat::TSV).unwrap();
    let links = read_string_links(write_file(dir.path(), "links.txt", STRING_LINKS)).unwrap();

    let mut strict = info.clone();
    let mut partial = strict.clone();
    partial.retain_rows(|row| row[0] != "9606.ENSP04");

    assert!(reindex_table(&mut strict, ID_COLUMN, &links, UnmappedPolicy::Error).is_ok());
    match reindex_table(&mut partial.clone(), ID_COLUMN, &links, UnmappedPolicy::Error) {
        Err(PpiError::UnmappedIdentifier { identifier, row }) => {
            assert_eq!(identifier, "9606.ENSP04");
            assert_eq!(row, 4);
        }
        other => panic!("expected unmapped identifier, got {:?}", other),
    }
    let (_, outcome) = reindex_table(&mut partial, ID_COLUMN, &links, UnmappedPolicy::Drop).unwrap();
    assert_eq!(outcome.dropped, 1);
    assert_eq!(outcome.edges.len(), links.len() - 1);
}

// =============================================================================
// Canonicalisation and expansion
// =============================================================================

#[test]
fn canonical_network_expands_by_hops() {
    let (nodes, edge_path, dir) = build_network();
    let canonical = canonicalize(&read_edges(&edge_path).unwrap());
    assert_eq!(canonical.duplicates_removed, 1);
    assert_eq!(canonical.self_loops_removed, 1);

    let clean_path = dir.path().join("edgelist_cleaned.csv");
    write_edges(&clean_path, &canonical.edges).unwrap();
    let clean = read_csv(&clean_path);
    assert_eq!(clean.column("source").unwrap(), vec!["0", "0", "2"]);
    assert_eq!(clean.column("target").unwrap(), vec!["1", "2", "3"]);

    let seeds = resolve_seeds(&nodes, "preferred_name", "node_id", &["BRCA1"], SeedPolicy::Strict).unwrap();
    assert_eq!(seeds, vec![0]);

    let network = Network::new(canonical.edges);
    let one = expand_from_seeds(&network, &seeds, &ExpandOptions::default());
    assert_eq!(one.nodes, vec![0, 1, 2]);
    assert_eq!(one.edges.len(), 2);

    let two = expand_from_seeds(&network, &seeds, &ExpandOptions::default().max_hops(2));
    assert_eq!(two.nodes, vec![0, 1, 2, 3]);
    assert_eq!(two.depths[&3], 2);
    assert!(!two.truncated);

    let capped = expand_from_seeds(&network, &seeds, &ExpandOptions::default().max_hops(2).max_nodes(2));
    assert!(capped.truncated);
    assert_eq!(capped.nodes.len(), 2);
    assert!(capped.nodes.contains(&0));
}

#[test]
fn unknown_seed_names_reported() {
    let (nodes, _, _dir) = build_network();
    let err = resolve_seeds(&nodes, "preferred_name", "node_id", &["BRCA1", "ESR1"], SeedPolicy::Strict)
        .unwrap_err();
    assert!(matches!(err, PpiError::UnknownSeeds { ref names } if names == &["ESR1".to_string()]));

    let lenient = resolve_seeds(&nodes, "preferred_name", "node_id", &["BRCA1", "ESR1"], SeedPolicy::Lenient)
        .unwrap();
    assert_eq!(lenient, vec![0]);
}

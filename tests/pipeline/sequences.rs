//! Sequence maps: incremental fetch, merge, sort and missing-node degrees.

use std::cell::Cell;
use std::time::Duration;

use tempfile::TempDir;

use ppinet::ppinet_engine::missing_node_degrees;
use ppinet::ppinet_fetch::fetch_missing;
use ppinet::{Edge, PpiResult, SequenceMap, SequenceSource};

use crate::test_utils::table;

/// Answers every protein except those ending in `9`.
struct Catalogue {
    requests: Cell<usize>,
}

impl SequenceSource for Catalogue {
    fn name(&self) -> &str {
        "catalogue"
    }

    fn fetch(&self, key: &str) -> PpiResult<Option<String>> {
        self.requests.set(self.requests.get() + 1);
        Ok((!key.ends_with('9')).then(|| format!("M{}", key)))
    }
}

#[test]
fn right_biased_merge_through_files() {
    let dir = TempDir::new().unwrap();
    let a: SequenceMap = [("1".to_string(), "AA".to_string())].into_iter().collect();
    let b: SequenceMap = [("1".to_string(), "BB".to_string()), ("2".to_string(), "CC".to_string())]
        .into_iter()
        .collect();
    a.save(dir.path().join("a.json")).unwrap();
    b.save(dir.path().join("b.json")).unwrap();

    let mut merged = SequenceMap::load(dir.path().join("a.json")).unwrap();
    merged.merge(SequenceMap::load(dir.path().join("b.json")).unwrap());
    assert_eq!(merged, b);
}

#[test]
fn resumed_fetch_then_degree_report() {
    let dir = TempDir::new().unwrap();
    let info = table(
        &["node_id", "protein_id"],
        &[&["3", "P3"], &["0", "P0"], &["1", "P1"], &["2", "P9"]],
    );
    let path = dir.path().join("sequences.json");
    let existing: SequenceMap = [("0".to_string(), "MP0".to_string())].into_iter().collect();
    existing.save(&path).unwrap();

    let source = Catalogue { requests: Cell::new(0) };
    let mut sequences = SequenceMap::load_or_default(&path).unwrap();
    let report = fetch_missing(&source, &info, "protein_id", &sequences, Duration::ZERO).unwrap();
    assert_eq!(source.requests.get(), 3);
    assert_eq!(report.failed_nodes(), vec![2]);

    sequences.merge(report.fetched);
    sequences.sort_by_node_id().unwrap();
    sequences.save(&path).unwrap();
    let reloaded = SequenceMap::load(&path).unwrap();
    assert_eq!(reloaded.keys().collect::<Vec<_>>(), vec!["0", "1", "3"]);
    assert_eq!(reloaded.get(3), Some("MP3"));

    let edges = vec![Edge::new(2, 0), Edge::new(2, 1), Edge::new(2, 3), Edge::new(0, 1)];
    let missing = missing_node_degrees(&info, &reloaded, &edges).unwrap();
    assert_eq!(missing.nodes.len(), 1);
    assert_eq!(missing.nodes[0].protein_id, "P9");
    assert_eq!(missing.nodes[0].degree, 3);
    assert_eq!(missing.isolated(), 0);
}

#[test]
fn load_or_default_on_fresh_run() {
    let dir = TempDir::new().unwrap();
    let map = SequenceMap::load_or_default(dir.path().join("none.json")).unwrap();
    assert!(map.is_empty());
}

//! Node-to-sequence maps.
//!
//! On disk a sequence map is a JSON object from the string form of a node
//! ID to an amino-acid sequence. Key order is preserved so that a sorted
//! map stays sorted after a load/save cycle.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use ppinet_core::{NodeId, PpiError, PpiResult};

/// Ordered map from node ID (as a string) to sequence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SequenceMap(IndexMap<String, String>);

impl SequenceMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a map from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> PpiResult<Self> {
        let path = path.as_ref();
        let body = fs::read_to_string(path).map_err(|e| PpiError::io(path, e))?;
        let map: SequenceMap = serde_json::from_str(&body)?;
        tracing::debug!(path = %path.display(), entries = map.len(), "Loaded sequence map");
        Ok(map)
    }

    /// Load a map, or start empty when the file does not exist yet.
    pub fn load_or_default(path: impl AsRef<Path>) -> PpiResult<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::new())
        }
    }

    /// Write the map as pretty-printed JSON (two-space indent).
    pub fn save(&self, path: impl AsRef<Path>) -> PpiResult<()> {
        let path = path.as_ref();
        let body = serde_json::to_string_pretty(&self.0)?;
        fs::write(path, body).map_err(|e| PpiError::io(path, e))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Insert or overwrite the sequence for a node.
    pub fn insert(&mut self, node: NodeId, sequence: impl Into<String>) {
        self.0.insert(node.to_string(), sequence.into());
    }

    /// Sequence for a node, if present.
    pub fn get(&self, node: NodeId) -> Option<&str> {
        self.0.get(&node.to_string()).map(|s| s.as_str())
    }

    /// Whether a node has a sequence.
    pub fn contains(&self, node: NodeId) -> bool {
        self.0.contains_key(&node.to_string())
    }

    /// Keys in map order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(|k| k.as_str())
    }

    /// Right-biased merge: entries of `other` overwrite entries of `self`.
    ///
    /// Keys already present keep their position; new keys are appended in
    /// `other`'s order.
    pub fn merge(&mut self, other: SequenceMap) {
        for (k, v) in other.0 {
            self.0.insert(k, v);
        }
    }

    /// Reorder entries by the integer value of their keys.
    pub fn sort_by_node_id(&mut self) -> PpiResult<()> {
        let mut keyed = Vec::with_capacity(self.0.len());
        for (k, v) in self.0.drain(..) {
            let id: i64 = k
                .parse()
                .map_err(|_| PpiError::invalid_input(format!("sequence map key '{}' is not a node ID", k)))?;
            keyed.push((id, k, v));
        }
        keyed.sort_by_key(|(id, _, _)| *id);
        self.0 = keyed.into_iter().map(|(_, k, v)| (k, v)).collect();
        Ok(())
    }

    /// Nodes from `nodes` that have no entry, in input order.
    pub fn missing<'a, I>(&self, nodes: I) -> Vec<NodeId>
    where
        I: IntoIterator<Item = &'a NodeId>,
    {
        nodes
            .into_iter()
            .filter(|n| !self.contains(**n))
            .copied()
            .collect()
    }
}

impl FromIterator<(String, String)> for SequenceMap {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        SequenceMap(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn map(pairs: &[(&str, &str)]) -> SequenceMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn merge_is_right_biased() {
        let mut left = map(&[("1", "AA")]);
        left.merge(map(&[("1", "BB"), ("2", "CC")]));
        assert_eq!(left, map(&[("1", "BB"), ("2", "CC")]));
    }

    #[test]
    fn merge_keeps_left_order_and_appends() {
        let mut left = map(&[("5", "A"), ("3", "B")]);
        left.merge(map(&[("9", "C"), ("5", "D")]));
        let keys: Vec<&str> = left.keys().collect();
        assert_eq!(keys, vec!["5", "3", "9"]);
        assert_eq!(left.get(5), Some("D"));
    }

    #[test]
    fn sort_is_numeric_not_lexicographic() {
        let mut m = map(&[("10", "A"), ("2", "B"), ("1", "C")]);
        m.sort_by_node_id().unwrap();
        let keys: Vec<&str> = m.keys().collect();
        assert_eq!(keys, vec!["1", "2", "10"]);
    }

    #[test]
    fn sort_rejects_non_numeric_key() {
        let mut m = map(&[("abc", "A")]);
        assert!(m.sort_by_node_id().is_err());
    }

    #[test]
    fn missing_nodes_in_input_order() {
        let m = map(&[("0", "M"), ("2", "K")]);
        assert_eq!(m.missing(&[3, 0, 1, 2]), vec![3, 1]);
    }

    #[test]
    fn save_and_load_preserve_order() {
        let dir = TempDir::new().unwrap();
        let p = dir.path().join("seq.json");
        let m = map(&[("7", "MKV"), ("1", "MAA")]);
        m.save(&p).unwrap();
        let loaded = SequenceMap::load(&p).unwrap();
        assert_eq!(loaded.keys().collect::<Vec<_>>(), vec!["7", "1"]);
    }

    #[test]
    fn load_or_default_on_missing_file() {
        let dir = TempDir::new().unwrap();
        let m = SequenceMap::load_or_default(dir.path().join("none.json")).unwrap();
        assert!(m.is_empty());
    }
}

//! Undirected edge canonicalisation.

use std::collections::BTreeMap;

use ppinet_core::{Edge, NodeId};

/// Canonical edge list plus what was removed to get there.
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalEdges {
    /// Edges with `source <= target`, unique, sorted by `(source, target)`.
    pub edges: Vec<Edge>,
    /// Duplicate and reversed-duplicate rows collapsed.
    pub duplicates_removed: usize,
    /// Self-loop rows dropped.
    pub self_loops_removed: usize,
}

/// Collapse an edge list to unique undirected pairs.
///
/// When duplicates carry different scores the maximum is kept; an
/// unscored duplicate never replaces a scored one.
pub fn canonicalize(edges: &[Edge]) -> CanonicalEdges {
    let mut unique: BTreeMap<(NodeId, NodeId), Option<f64>> = BTreeMap::new();
    let mut duplicates_removed = 0;
    let mut self_loops_removed = 0;

    for e in edges {
        if e.is_self_loop() {
            self_loops_removed += 1;
            continue;
        }
        match unique.get_mut(&e.key()) {
            Some(score) => {
                duplicates_removed += 1;
                *score = max_score(*score, e.score);
            }
            None => {
                unique.insert(e.key(), e.score);
            }
        }
    }

    tracing::debug!(
        input = edges.len(),
        output = unique.len(),
        duplicates_removed,
        self_loops_removed,
        "Canonicalized edge list"
    );

    CanonicalEdges {
        edges: unique
            .into_iter()
            .map(|((source, target), score)| Edge {
                source,
                target,
                score,
            })
            .collect(),
        duplicates_removed,
        self_loops_removed,
    }
}

fn max_score(a: Option<f64>, b: Option<f64>) -> Option<f64> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.max(y)),
        (x, None) => x,
        (None, y) => y,
    }
}

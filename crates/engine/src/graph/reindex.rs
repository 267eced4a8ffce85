//! Identifier reindexing.
//!
//! External protein identifiers become dense node IDs assigned by row
//! position in the node table. The same mapping rewrites the edge table.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use ppinet_core::{Edge, Interaction, NodeId, PpiError, PpiResult};
use ppinet_storage::Table;

/// What to do with an edge whose endpoint is not in the node table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnmappedPolicy {
    /// Fail with [`PpiError::UnmappedIdentifier`].
    #[default]
    Error,
    /// Skip the edge and count it.
    Drop,
}

/// Bijection between external identifiers and dense node IDs.
#[derive(Debug, Clone, Default)]
pub struct IdMap {
    ids: FxHashMap<String, NodeId>,
    names: Vec<String>,
}

impl IdMap {
    /// Assign IDs `0..n` by position.
    ///
    /// A repeated identifier would break the bijection and is rejected.
    pub fn from_identifiers<I, S>(identifiers: I) -> PpiResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut map = IdMap::default();
        for (row, ident) in identifiers.into_iter().enumerate() {
            let ident = ident.into();
            if map.ids.contains_key(&ident) {
                return Err(PpiError::DuplicateIdentifier {
                    identifier: ident,
                    row,
                });
            }
            let id = NodeId::try_from(row)
                .map_err(|_| PpiError::invalid_input("node table exceeds the node ID range"))?;
            map.ids.insert(ident.clone(), id);
            map.names.push(ident);
        }
        Ok(map)
    }

    /// Node ID for an identifier.
    pub fn get(&self, identifier: &str) -> Option<NodeId> {
        self.ids.get(identifier).copied()
    }

    /// Identifier for a node ID.
    pub fn name(&self, id: NodeId) -> Option<&str> {
        self.names.get(id as usize).map(String::as_str)
    }

    /// Identifiers in ID order.
    pub fn identifiers(&self) -> &[String] {
        &self.names
    }

    /// Number of identifiers.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Rewritten edges plus the number of rows skipped under [`UnmappedPolicy::Drop`].
#[derive(Debug, Clone, PartialEq)]
pub struct ReindexOutcome {
    /// Edges over node IDs, in input order.
    pub edges: Vec<Edge>,
    /// Rows dropped for an unmapped endpoint.
    pub dropped: usize,
}

/// Rewrite interactions through `map`.
pub fn reindex_interactions(
    map: &IdMap,
    interactions: &[Interaction],
    policy: UnmappedPolicy,
) -> PpiResult<ReindexOutcome> {
    let mut edges = Vec::with_capacity(interactions.len());
    let mut dropped = 0;

    for (row, it) in interactions.iter().enumerate() {
        let endpoints = (map.get(&it.protein1), map.get(&it.protein2));
        let (source, target) = match endpoints {
            (Some(s), Some(t)) => (s, t),
            _ => {
                let missing = if endpoints.0.is_none() {
                    &it.protein1
                } else {
                    &it.protein2
                };
                match policy {
                    UnmappedPolicy::Error => {
                        return Err(PpiError::UnmappedIdentifier {
                            identifier: missing.clone(),
                            row,
                        })
                    }
                    UnmappedPolicy::Drop => {
                        tracing::warn!(identifier = %missing, row, "Dropping edge with unmapped endpoint");
                        dropped += 1;
                        continue;
                    }
                }
            }
        };
        edges.push(Edge {
            source,
            target,
            score: it.score,
        });
    }

    if dropped > 0 {
        tracing::info!(dropped, kept = edges.len(), "Reindexed edges with drops");
    }
    Ok(ReindexOutcome { edges, dropped })
}

/// Reindex a node table in place and rewrite its interactions.
///
/// `id_column` holds the external identifiers. A `node_id` column is added
/// to (or overwritten in) the node table.
pub fn reindex_table(
    nodes: &mut Table,
    id_column: &str,
    interactions: &[Interaction],
    policy: UnmappedPolicy,
) -> PpiResult<(IdMap, ReindexOutcome)> {
    let map = IdMap::from_identifiers(nodes.column(id_column)?)?;
    let node_ids = (0..map.len()).map(|i| i.to_string()).collect();
    nodes.set_column("node_id", node_ids)?;
    let outcome = reindex_interactions(&map, interactions, policy)?;
    tracing::info!(
        nodes = map.len(),
        edges = outcome.edges.len(),
        "Reindexed network"
    );
    Ok((map, outcome))
}

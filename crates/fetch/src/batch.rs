//! Sequential, rate-limited sequence fetching.
//!
//! One request per node, a fixed sleep between requests, no retries. A
//! failed or empty lookup is logged and recorded; the batch always runs to
//! the end.

use std::thread;
use std::time::Duration;

use rustc_hash::FxHashMap;

use ppinet_core::{NodeId, PpiResult};
use ppinet_storage::{SequenceMap, Table};

use crate::ensembl::EnsemblClient;
use crate::uniprot::UniProtClient;

/// Something that can look up a protein sequence by a string key.
pub trait SequenceSource {
    /// Provider name for logs.
    fn name(&self) -> &str;

    /// Sequence for `key`, `Ok(None)` when the provider has none.
    fn fetch(&self, key: &str) -> PpiResult<Option<String>>;
}

impl SequenceSource for EnsemblClient {
    fn name(&self) -> &str {
        "ensembl"
    }

    fn fetch(&self, key: &str) -> PpiResult<Option<String>> {
        self.protein_sequence(key)
    }
}

/// UniProt lookup keyed by gene symbol.
#[derive(Debug, Clone)]
pub struct UniProtByGene {
    /// Client.
    pub client: UniProtClient,
    /// Organism name or taxonomy ID.
    pub organism: String,
}

impl SequenceSource for UniProtByGene {
    fn name(&self) -> &str {
        "uniprot-gene"
    }

    fn fetch(&self, key: &str) -> PpiResult<Option<String>> {
        self.client.sequence_by_gene(key, &self.organism)
    }
}

/// UniProt lookup keyed by Ensembl protein ID.
#[derive(Debug, Clone)]
pub struct UniProtByXref(pub UniProtClient);

impl SequenceSource for UniProtByXref {
    fn name(&self) -> &str {
        "uniprot-xref"
    }

    fn fetch(&self, key: &str) -> PpiResult<Option<String>> {
        self.0.sequence_by_xref(key)
    }
}

/// One node to look up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchItem {
    /// Node the sequence belongs to.
    pub node_id: NodeId,
    /// Key passed to the source.
    pub key: String,
}

/// A lookup that produced no sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedFetch {
    /// Node.
    pub node_id: NodeId,
    /// Key that was looked up.
    pub key: String,
    /// Error message, or "not found".
    pub reason: String,
}

/// Outcome of a batch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchReport {
    /// Sequences found, in request order.
    pub fetched: SequenceMap,
    /// Lookups that failed.
    pub failed: Vec<FailedFetch>,
}

impl FetchReport {
    /// Failed node IDs.
    pub fn failed_nodes(&self) -> Vec<NodeId> {
        self.failed.iter().map(|f| f.node_id).collect()
    }
}

/// Pair each node of `nodes` with its `key_column` value from `info`.
///
/// `info` needs a `node_id` column. Nodes with no row in `info` are
/// skipped with a warning; rows with an empty key are skipped too.
pub fn fetch_items(info: &Table, key_column: &str, nodes: &[NodeId]) -> PpiResult<Vec<FetchItem>> {
    let ids: Vec<NodeId> = info.parse_column("node_id")?;
    let keys = info.column(key_column)?;
    let by_id: FxHashMap<NodeId, &str> = ids.into_iter().zip(keys).collect();

    let mut items = Vec::with_capacity(nodes.len());
    for &node_id in nodes {
        match by_id.get(&node_id) {
            Some(key) if !key.trim().is_empty() => items.push(FetchItem {
                node_id,
                key: key.trim().to_string(),
            }),
            Some(_) => tracing::warn!(node_id, column = key_column, "Empty lookup key, skipping"),
            None => tracing::warn!(node_id, "Node not in info table, skipping"),
        }
    }
    Ok(items)
}

/// Fetch every item in order, sleeping `delay` between requests.
pub fn fetch_sequences(source: &dyn SequenceSource, items: &[FetchItem], delay: Duration) -> FetchReport {
    let mut report = FetchReport::default();
    tracing::info!(source = source.name(), items = items.len(), "Fetching sequences");

    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            if i % 100 == 0 {
                tracing::info!(done = i, total = items.len(), "Progress");
            }
            if !delay.is_zero() {
                thread::sleep(delay);
            }
        }
        let reason = match source.fetch(&item.key) {
            Ok(Some(sequence)) => {
                tracing::debug!(node_id = item.node_id, key = %item.key, len = sequence.len(), "Fetched");
                report.fetched.insert(item.node_id, sequence);
                continue;
            }
            Ok(None) => "not found".to_string(),
            Err(e) => e.to_string(),
        };
        tracing::warn!(node_id = item.node_id, key = %item.key, reason = %reason, "Sequence fetch failed");
        report.failed.push(FailedFetch {
            node_id: item.node_id,
            key: item.key.clone(),
            reason,
        });
    }

    tracing::info!(
        source = source.name(),
        fetched = report.fetched.len(),
        failed = report.failed.len(),
        "Fetch finished"
    );
    report
}

/// Fetch only the nodes of `info` that `existing` has no sequence for.
pub fn fetch_missing(
    source: &dyn SequenceSource,
    info: &Table,
    key_column: &str,
    existing: &SequenceMap,
    delay: Duration,
) -> PpiResult<FetchReport> {
    let nodes: Vec<NodeId> = info.parse_column("node_id")?;
    let missing = existing.missing(&nodes);
    tracing::info!(total = nodes.len(), missing = missing.len(), "Resuming from existing sequences");
    let items = fetch_items(info, key_column, &missing)?;
    Ok(fetch_sequences(source, &items, delay))
}

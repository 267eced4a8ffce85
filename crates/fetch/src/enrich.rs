//! Gene metadata enrichment from NCBI.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use ppinet_core::{PpiError, PpiResult};
use ppinet_storage::{Table, TableFormat};

use crate::ncbi::{GeneProperties, NcbiClient};

/// Something that can look up gene properties by Entrez ID.
pub trait GeneSource {
    /// Properties of one gene, `Ok(None)` when unknown.
    fn gene_properties(&self, entrez_id: &str) -> PpiResult<Option<GeneProperties>>;
}

impl GeneSource for NcbiClient {
    fn gene_properties(&self, entrez_id: &str) -> PpiResult<Option<GeneProperties>> {
        NcbiClient::gene_properties(self, entrez_id)
    }
}

/// Outcome of an enrichment run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnrichReport {
    /// Records fetched, in metadata order.
    pub records: Vec<GeneProperties>,
    /// Entrez IDs that produced no record.
    pub failed: Vec<String>,
}

impl EnrichReport {
    /// Records as a table with [`GeneProperties::COLUMNS`].
    pub fn to_table(&self) -> Table {
        let mut t = Table::new(
            "gene_properties",
            GeneProperties::COLUMNS.iter().map(|c| c.to_string()).collect(),
        );
        for r in &self.records {
            t.push_row(r.to_row());
        }
        t
    }

    /// Write `{stem}.csv` and `{stem}.json` next to each other.
    pub fn write(&self, stem: impl AsRef<Path>) -> PpiResult<(PathBuf, PathBuf)> {
        let stem = stem.as_ref();
        let csv_path = stem.with_extension("csv");
        let json_path = stem.with_extension("json");

        self.to_table().write(&csv_path, TableFormat::CSV)?;
        let file = File::create(&json_path).map_err(|e| PpiError::io(&json_path, e))?;
        let mut out = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut out, &self.records)?;
        out.flush().map_err(|e| PpiError::io(&json_path, e))?;

        tracing::info!(csv = %csv_path.display(), json = %json_path.display(), "Wrote gene properties");
        Ok((csv_path, json_path))
    }
}

/// Entrez IDs of `metadata` worth looking up, in row order.
///
/// Empty values and `-` are skipped; `limit` keeps only the first K rows
/// of the table before filtering.
pub fn entrez_ids(metadata: &Table, limit: Option<usize>) -> PpiResult<Vec<String>> {
    let column = metadata.column("entrez_id")?;
    let rows = limit.unwrap_or(column.len()).min(column.len());
    Ok(column[..rows]
        .iter()
        .map(|id| id.trim())
        .filter(|id| !id.is_empty() && *id != "-")
        .map(str::to_string)
        .collect())
}

/// Look up every usable Entrez ID of `metadata`, sleeping `delay` between
/// requests. Failures are logged and recorded.
pub fn enrich_metadata(
    source: &dyn GeneSource,
    metadata: &Table,
    limit: Option<usize>,
    delay: Duration,
) -> PpiResult<EnrichReport> {
    let ids = entrez_ids(metadata, limit)?;
    tracing::info!(genes = ids.len(), "Fetching gene properties");

    let mut report = EnrichReport::default();
    for (i, id) in ids.iter().enumerate() {
        if i > 0 && !delay.is_zero() {
            thread::sleep(delay);
        }
        match source.gene_properties(id) {
            Ok(Some(record)) => report.records.push(record),
            Ok(None) => {
                tracing::warn!(entrez_id = %id, "No gene record");
                report.failed.push(id.clone());
            }
            Err(e) => {
                tracing::warn!(entrez_id = %id, error = %e, "Gene lookup failed");
                report.failed.push(id.clone());
            }
        }
    }
    tracing::info!(fetched = report.records.len(), failed = report.failed.len(), "Enrichment finished");
    Ok(report)
}

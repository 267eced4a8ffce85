//! Node metadata tables.

use ppinet_core::{PpiError, PpiResult};

use crate::table::Table;

/// Enriched columns that are not carried into the final metadata.
pub const DROPPED_ENRICHED_COLUMNS: [&str; 2] = ["gene_type", "other_aliases"];

/// Merge NCBI-enriched metadata with the base metadata table.
///
/// Both tables must list the same genes in the same order. The enriched
/// table loses [`DROPPED_ENRICHED_COLUMNS`] and takes `entrez_id`,
/// `gene_symbol` (from the base `gene_name`) and `node_id` from the base
/// table, row by row.
pub fn merge_enriched_metadata(mut enriched: Table, base: &Table) -> PpiResult<Table> {
    if enriched.len() != base.len() {
        return Err(PpiError::invalid_input(format!(
            "enriched metadata has {} rows but base metadata has {}",
            enriched.len(),
            base.len()
        )));
    }

    let owned = |col: &str| -> PpiResult<Vec<String>> {
        Ok(base.column(col)?.into_iter().map(String::from).collect())
    };
    let entrez = owned("entrez_id")?;
    let symbols = owned("gene_name")?;
    let node_ids = owned("node_id")?;

    enriched.drop_columns(&DROPPED_ENRICHED_COLUMNS);
    enriched.set_column("entrez_id", entrez)?;
    enriched.set_column("gene_symbol", symbols)?;
    enriched.set_column("node_id", node_ids)?;
    Ok(enriched)
}

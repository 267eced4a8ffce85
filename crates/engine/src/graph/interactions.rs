//! STRING interaction filtering and protein-info subsetting.

use rustc_hash::FxHashSet;

use ppinet_core::{Interaction, PpiError, PpiResult};
use ppinet_storage::Table;

/// Column of the STRING info table that carries gene symbols.
pub const PREFERRED_NAME: &str = "preferred_name";

/// Protein IDs whose `preferred_name` is one of `genes`.
///
/// The protein ID is read from the info table's first column, whatever its
/// header (STRING ships it as `#string_protein_id` or `protein_id`).
pub fn seed_protein_ids<S: AsRef<str>>(info: &Table, genes: &[S]) -> PpiResult<FxHashSet<String>> {
    let id_column = info
        .first_column()
        .ok_or_else(|| PpiError::invalid_input(format!("{} has no columns", info.name())))?;
    let ids = info.column(id_column)?;
    let names = info.column(PREFERRED_NAME)?;
    let wanted: FxHashSet<&str> = genes.iter().map(|g| g.as_ref()).collect();

    let proteins: FxHashSet<String> = ids
        .iter()
        .zip(&names)
        .filter(|(_, name)| wanted.contains(**name))
        .map(|(id, _)| id.to_string())
        .collect();
    tracing::info!(genes = genes.len(), proteins = proteins.len(), "Mapped seed genes to proteins");
    Ok(proteins)
}

/// Links between two seed proteins with `score > threshold`.
///
/// Unscored links never pass.
pub fn filter_seed_interactions(
    links: &[Interaction],
    proteins: &FxHashSet<String>,
    threshold: f64,
) -> Vec<Interaction> {
    let kept: Vec<Interaction> = links
        .iter()
        .filter(|l| {
            proteins.contains(&l.protein1)
                && proteins.contains(&l.protein2)
                && l.score.map_or(false, |s| s > threshold)
        })
        .cloned()
        .collect();
    tracing::info!(total = links.len(), kept = kept.len(), threshold, "Filtered seed interactions");
    kept
}

/// Every protein that appears on either side of an interaction.
pub fn interaction_proteins(links: &[Interaction]) -> FxHashSet<&str> {
    links
        .iter()
        .flat_map(|l| [l.protein1.as_str(), l.protein2.as_str()])
        .collect()
}

/// Keep the info rows whose `id_column` appears in `links`.
pub fn subset_info(info: &Table, id_column: &str, links: &[Interaction]) -> PpiResult<Table> {
    let idx = info.column_index(id_column)?;
    let proteins = interaction_proteins(links);
    let mut subset = info.clone();
    subset.retain_rows(|row| proteins.contains(row[idx].as_str()));
    tracing::info!(before = info.len(), after = subset.len(), "Subset protein info to interaction list");
    Ok(subset)
}

/// Drop scores so the list is written as `protein1,protein2`.
pub fn strip_scores(links: &[Interaction]) -> Vec<Interaction> {
    links
        .iter()
        .map(|l| Interaction::new(l.protein1.clone(), l.protein2.clone()))
        .collect()
}

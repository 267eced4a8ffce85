//! Seed-name resolution.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use ppinet_core::{NodeId, PpiError, PpiResult};
use ppinet_storage::Table;

/// Breast-cancer driver genes used as the default seed set.
pub const BREAST_CANCER_GENES: [&str; 35] = [
    // high penetrance
    "BRCA1", "BRCA2", "TP53", "PTEN", "CDH1", "STK11",
    // moderate penetrance
    "ATM", "CHEK2", "PALB2", "BARD1", "BRIP1", "RAD51C", "RAD51D",
    // hormone receptors
    "ESR1", "ESR2", "PGR", "AR",
    // HER2/EGFR
    "ERBB2", "EGFR", "ERBB3",
    // PI3K/AKT
    "PIK3CA", "PIK3R1", "AKT1", "AKT2", "MTOR",
    // cell cycle
    "CCND1", "CDK4", "CDK6", "CDKN2A", "RB1",
    // other
    "GATA3", "FOXA1", "MYC", "MAP3K1", "ARID1A",
];

/// How to treat seed names that have no row in the node table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeedPolicy {
    /// Fail with [`PpiError::UnknownSeeds`] naming every missing seed.
    #[default]
    Strict,
    /// Skip missing seeds with a warning.
    Lenient,
}

/// Resolve seed names to node IDs through a node table.
///
/// `name_column` is matched exactly; every row whose name matches
/// contributes its `id_column` value. The result is ascending and unique.
pub fn resolve_seeds<S: AsRef<str>>(
    nodes: &Table,
    name_column: &str,
    id_column: &str,
    seeds: &[S],
    policy: SeedPolicy,
) -> PpiResult<Vec<NodeId>> {
    let names = nodes.column(name_column)?;
    let ids: Vec<NodeId> = nodes.parse_column(id_column)?;

    let mut resolved = BTreeSet::new();
    let mut missing = Vec::new();
    for seed in seeds {
        let seed = seed.as_ref();
        let mut found = false;
        for (name, &id) in names.iter().zip(&ids) {
            if *name == seed {
                resolved.insert(id);
                found = true;
            }
        }
        if !found {
            missing.push(seed.to_string());
        }
    }

    if !missing.is_empty() {
        match policy {
            SeedPolicy::Strict => return Err(PpiError::UnknownSeeds { names: missing }),
            SeedPolicy::Lenient => {
                for name in &missing {
                    tracing::warn!(seed = %name, "Seed not found in node table, skipping");
                }
            }
        }
    }

    tracing::info!(
        requested = seeds.len(),
        resolved = resolved.len(),
        missing = missing.len(),
        "Resolved seed names"
    );
    Ok(resolved.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nodes() -> Table {
        let mut t = Table::new(
            "info",
            vec!["node_id".into(), "protein_id".into(), "preferred_name".into()],
        );
        for (id, p, n) in [("0", "ENSP1", "BRCA1"), ("1", "ENSP2", "TP53"), ("2", "ENSP3", "MYC")] {
            t.push_row(vec![id.into(), p.into(), n.into()]);
        }
        t
    }

    #[test]
    fn resolves_in_id_order() {
        let ids = resolve_seeds(&nodes(), "preferred_name", "node_id", &["MYC", "BRCA1"], SeedPolicy::Strict)
            .unwrap();
        assert_eq!(ids, vec![0, 2]);
    }

    #[test]
    fn strict_lists_every_missing_name() {
        let err = resolve_seeds(
            &nodes(),
            "preferred_name",
            "node_id",
            &["NOPE", "TP53", "GONE"],
            SeedPolicy::Strict,
        )
        .unwrap_err();
        match err {
            PpiError::UnknownSeeds { names } => assert_eq!(names, vec!["NOPE", "GONE"]),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn lenient_skips_missing() {
        let ids = resolve_seeds(&nodes(), "preferred_name", "node_id", &["NOPE", "TP53"], SeedPolicy::Lenient)
            .unwrap();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn missing_name_column() {
        assert!(matches!(
            resolve_seeds(&nodes(), "gene", "node_id", &["TP53"], SeedPolicy::Strict),
            Err(PpiError::MissingColumn { .. })
        ));
    }

    #[test]
    fn default_gene_list_is_unique() {
        let set: BTreeSet<_> = BREAST_CANCER_GENES.iter().collect();
        assert_eq!(set.len(), BREAST_CANCER_GENES.len());
    }
}

//! BioGRID `tab3` ingestion.
//!
//! Produces a raw edge list keyed by BioGRID interactor IDs plus one
//! metadata row per interactor (first occurrence wins).

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use ppinet_core::{Interaction, PpiError, PpiResult};

use crate::table::{Table, TableFormat};

const ID_A: &str = "BioGRID ID Interactor A";
const ID_B: &str = "BioGRID ID Interactor B";
const SYMBOL_A: &str = "Official Symbol Interactor A";
const SYMBOL_B: &str = "Official Symbol Interactor B";
const ORGANISM_A: &str = "Organism Name Interactor A";
const ORGANISM_B: &str = "Organism Name Interactor B";
const ENTREZ_A: &str = "Entrez Gene Interactor A";
const ENTREZ_B: &str = "Entrez Gene Interactor B";

/// Descriptive fields recorded for one interactor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BiogridGene {
    /// Official gene symbol.
    pub gene_name: String,
    /// Organism name.
    pub organism: String,
    /// Entrez Gene ID (may be `-`).
    pub entrez_id: String,
}

/// Edge list and interactor metadata extracted from a BioGRID file.
#[derive(Debug, Clone, Default)]
pub struct BiogridNetwork {
    /// Every interaction row, in file order, keyed by BioGRID IDs.
    pub edges: Vec<Interaction>,
    /// Interactor metadata, ordered by BioGRID ID string.
    pub genes: BTreeMap<String, BiogridGene>,
}

impl BiogridNetwork {
    /// Parse a BioGRID tab3 file.
    pub fn read(path: impl AsRef<Path>) -> PpiResult<Self> {
        let table = Table::read(path, TableFormat::TSV)?;
        Self::from_table(&table)
    }

    /// Extract edges and interactor metadata from a tab3 table.
    pub fn from_table(table: &Table) -> PpiResult<Self> {
        let id_a = table.column_index(ID_A)?;
        let id_b = table.column_index(ID_B)?;
        let sym_a = table.column_index(SYMBOL_A)?;
        let sym_b = table.column_index(SYMBOL_B)?;
        let org_a = table.column_index(ORGANISM_A)?;
        let org_b = table.column_index(ORGANISM_B)?;
        let ent_a = table.column_index(ENTREZ_A)?;
        let ent_b = table.column_index(ENTREZ_B)?;

        let mut network = BiogridNetwork::default();
        for row in table.rows() {
            for (id, sym, org, ent) in [(id_a, sym_a, org_a, ent_a), (id_b, sym_b, org_b, ent_b)] {
                network
                    .genes
                    .entry(row[id].clone())
                    .or_insert_with(|| BiogridGene {
                        gene_name: row[sym].clone(),
                        organism: row[org].clone(),
                        entrez_id: row[ent].clone(),
                    });
            }
            network
                .edges
                .push(Interaction::new(row[id_a].clone(), row[id_b].clone()));
        }

        tracing::info!(
            interactions = network.edges.len(),
            genes = network.genes.len(),
            "Parsed BioGRID interactions"
        );
        Ok(network)
    }

    /// Metadata rows as a `node_id,gene_name,entrez_id,organism` table.
    pub fn metadata_table(&self) -> Table {
        let mut table = Table::new(
            "metadata",
            vec![
                "node_id".into(),
                "gene_name".into(),
                "entrez_id".into(),
                "organism".into(),
            ],
        );
        for (id, gene) in &self.genes {
            table.push_row(vec![
                id.clone(),
                gene.gene_name.clone(),
                gene.entrez_id.clone(),
                gene.organism.clone(),
            ]);
        }
        table
    }

    /// Write `edgelist.csv` and `metadata.csv` into `output_dir`.
    pub fn write(&self, output_dir: impl AsRef<Path>) -> PpiResult<(PathBuf, PathBuf)> {
        let dir = output_dir.as_ref();
        std::fs::create_dir_all(dir).map_err(|e| PpiError::io(dir, e))?;

        let edge_path = dir.join("edgelist.csv");
        let mut edge_table = Table::new(
            edge_path.display().to_string(),
            vec!["source".into(), "target".into()],
        );
        for e in &self.edges {
            edge_table.push_row(vec![e.protein1.clone(), e.protein2.clone()]);
        }
        edge_table.write(&edge_path, TableFormat::CSV)?;

        let meta_path = dir.join("metadata.csv");
        self.metadata_table().write(&meta_path, TableFormat::CSV)?;
        Ok((edge_path, meta_path))
    }
}

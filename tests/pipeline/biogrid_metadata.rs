//! BioGRID conversion, NCBI enrichment and metadata merge.

use std::time::Duration;

use tempfile::TempDir;

use ppinet::ppinet_fetch::{enrich_metadata, GeneSource};
use ppinet::ppinet_storage::metadata::merge_enriched_metadata;
use ppinet::{BiogridNetwork, GeneProperties, PpiResult};

use crate::test_utils::{read_csv, write_file};

const TAB3: &str = "\
#BioGRID Interaction ID\tEntrez Gene Interactor A\tEntrez Gene Interactor B\tBioGRID ID Interactor A\tBioGRID ID Interactor B\tOfficial Symbol Interactor A\tOfficial Symbol Interactor B\tOrganism Name Interactor A\tOrganism Name Interactor B
1\t672\t7157\t107140\t113010\tBRCA1\tTP53\tHomo sapiens\tHomo sapiens
2\t7157\t-\t113010\t110000\tTP53\tXYZ\tHomo sapiens\tHomo sapiens
3\t672\t7157\t107140\t113010\tBRCA1\tTP53\tHomo sapiens\tHomo sapiens
";

/// Knows BRCA1 and TP53 only.
struct LocalGenes;

impl GeneSource for LocalGenes {
    fn gene_properties(&self, entrez_id: &str) -> PpiResult<Option<GeneProperties>> {
        let (symbol, name) = match entrez_id {
            "672" => ("BRCA1", "BRCA1 DNA repair associated"),
            "7157" => ("TP53", "tumor protein p53"),
            _ => return Ok(None),
        };
        Ok(Some(GeneProperties {
            entrez_id: entrez_id.to_string(),
            gene_symbol: symbol.to_string(),
            gene_name: name.to_string(),
            organism: "Homo sapiens".to_string(),
            gene_type: "protein-coding".to_string(),
            other_aliases: "alias".to_string(),
            ..Default::default()
        }))
    }
}

#[test]
fn biogrid_to_merged_metadata() {
    let dir = TempDir::new().unwrap();
    let network = BiogridNetwork::read(write_file(dir.path(), "biogrid.tab3.txt", TAB3)).unwrap();
    let (edge_path, meta_path) = network.write(dir.path().join("biogrid")).unwrap();

    let edges = read_csv(&edge_path);
    assert_eq!(edges.len(), 3);
    assert_eq!(edges.column("source").unwrap(), vec!["107140", "113010", "107140"]);

    let metadata = read_csv(&meta_path);
    assert_eq!(metadata.column("node_id").unwrap(), vec!["107140", "110000", "113010"]);
    assert_eq!(metadata.column("entrez_id").unwrap(), vec!["672", "-", "7157"]);

    let report = enrich_metadata(&LocalGenes, &metadata, None, Duration::ZERO).unwrap();
    assert_eq!(report.records.len(), 2);
    assert!(report.failed.is_empty());
    let (csv_path, _) = report.write(dir.path().join("gene_properties")).unwrap();

    // Only genes with an Entrez ID were enriched, so merge against those rows.
    let mut base = metadata.clone();
    base.retain_rows(|row| row[2] != "-");
    let merged = merge_enriched_metadata(read_csv(&csv_path), &base).unwrap();

    assert!(!merged.has_column("gene_type"));
    assert!(!merged.has_column("other_aliases"));
    assert_eq!(merged.column("gene_symbol").unwrap(), vec!["BRCA1", "TP53"]);
    assert_eq!(merged.column("node_id").unwrap(), vec!["107140", "113010"]);
    assert_eq!(merged.column("gene_name").unwrap()[1], "tumor protein p53");
}

#[test]
fn merge_rejects_row_count_mismatch() {
    let dir = TempDir::new().unwrap();
    let network = BiogridNetwork::read(write_file(dir.path(), "biogrid.tab3.txt", TAB3)).unwrap();
    let report = enrich_metadata(&LocalGenes, &network.metadata_table(), Some(1), Duration::ZERO).unwrap();
    assert!(merge_enriched_metadata(report.to_table(), &network.metadata_table()).is_err());
}

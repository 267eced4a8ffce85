//! UniProt search returning FASTA.

use ppinet_core::PpiResult;

use crate::client::HttpClient;
use crate::config::FetchConfig;
use crate::ensembl::ensembl_protein_id;
use crate::fasta::parse_fasta_sequence;

/// NCBI taxonomy ID for a common organism name; other values pass through.
pub fn taxonomy_id(organism: &str) -> &str {
    match organism.to_ascii_lowercase().as_str() {
        "human" => "9606",
        "mouse" => "10090",
        "rat" => "10116",
        "yeast" => "559292",
        "fly" => "7227",
        "worm" => "6239",
        _ => organism,
    }
}

/// Search query for a gene symbol in an organism.
pub fn gene_query(gene: &str, organism: &str) -> String {
    format!("(gene:{}) AND (organism_id:{})", gene, taxonomy_id(organism))
}

/// Search query for an Ensembl protein cross-reference.
pub fn xref_query(protein_id: &str) -> String {
    format!("xref:ensembl-{}", ensembl_protein_id(protein_id))
}

/// Client for the UniProtKB search endpoint.
#[derive(Debug, Clone)]
pub struct UniProtClient {
    http: HttpClient,
    base_url: String,
}

impl UniProtClient {
    /// Build a client from `config`.
    pub fn new(config: &FetchConfig) -> Self {
        Self {
            http: HttpClient::new(config),
            base_url: config.uniprot_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Top hit for a gene symbol in `organism`.
    pub fn sequence_by_gene(&self, gene: &str, organism: &str) -> PpiResult<Option<String>> {
        self.search(&gene_query(gene, organism))
    }

    /// Top hit cross-referenced to an Ensembl protein ID.
    pub fn sequence_by_xref(&self, protein_id: &str) -> PpiResult<Option<String>> {
        self.search(&xref_query(protein_id))
    }

    fn search(&self, query: &str) -> PpiResult<Option<String>> {
        let url = format!("{}/uniprotkb/search", self.base_url);
        let body = self.http.get_text(
            &url,
            &[("query", query), ("format", "fasta"), ("size", "1")],
            "text/plain",
        )?;
        Ok(body.as_deref().and_then(parse_fasta_sequence))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_names_map_to_taxa() {
        assert_eq!(taxonomy_id("human"), "9606");
        assert_eq!(taxonomy_id("Yeast"), "559292");
        assert_eq!(taxonomy_id("9913"), "9913");
    }

    #[test]
    fn queries() {
        assert_eq!(gene_query("TP53", "human"), "(gene:TP53) AND (organism_id:9606)");
        assert_eq!(xref_query("9606.ENSP00000269305"), "xref:ensembl-ENSP00000269305");
    }
}

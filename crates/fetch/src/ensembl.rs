//! Ensembl REST protein sequences.

use serde::Deserialize;

use ppinet_core::PpiResult;

use crate::client::HttpClient;
use crate::config::FetchConfig;

/// `GET /sequence/id/{id}` response body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EnsemblSequence {
    /// Stable ID.
    pub id: String,
    /// Sequence.
    pub seq: String,
    /// Sequence type reported by the server.
    pub molecule: String,
}

/// Strip the taxon prefix of a STRING protein ID: `9606.ENSP00000269305`
/// becomes `ENSP00000269305`.
pub fn ensembl_protein_id(string_id: &str) -> &str {
    string_id.rsplit('.').next().unwrap_or(string_id)
}

/// Client for Ensembl sequence lookups.
#[derive(Debug, Clone)]
pub struct EnsemblClient {
    http: HttpClient,
    base_url: String,
}

impl EnsemblClient {
    /// Build a client from `config`.
    pub fn new(config: &FetchConfig) -> Self {
        Self {
            http: HttpClient::new(config),
            base_url: config.ensembl_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Protein sequence for a STRING or Ensembl protein ID.
    ///
    /// `Ok(None)` when the server does not know the ID or returns an empty
    /// sequence.
    pub fn protein_sequence(&self, protein_id: &str) -> PpiResult<Option<String>> {
        let url = format!("{}/sequence/id/{}", self.base_url, ensembl_protein_id(protein_id));
        let body: Option<EnsemblSequence> = self.http.get_json(&url, &[])?;
        Ok(body.map(|b| b.seq).filter(|s| !s.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taxon_prefix_removed() {
        assert_eq!(ensembl_protein_id("9606.ENSP00000269305"), "ENSP00000269305");
        assert_eq!(ensembl_protein_id("ENSP00000269305"), "ENSP00000269305");
    }

    #[test]
    fn response_missing_fields_default() {
        let body: EnsemblSequence = serde_json::from_str(r#"{"seq":"MEEPQ"}"#).unwrap();
        assert_eq!(body.seq, "MEEPQ");
        assert!(body.id.is_empty());
    }
}

//! Settings shared by every API client.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// NCBI Entrez E-utilities base URL.
pub const NCBI_BASE_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";
/// UniProt REST base URL.
pub const UNIPROT_BASE_URL: &str = "https://rest.uniprot.org";
/// Ensembl REST base URL.
pub const ENSEMBL_BASE_URL: &str = "https://rest.ensembl.org";

/// NCBI allows three requests per second without an API key.
pub const NCBI_DELAY_MS: u64 = 350;
/// Delay between UniProt requests.
pub const UNIPROT_DELAY_MS: u64 = 300;
/// Ensembl allows fifteen requests per second.
pub const ENSEMBL_DELAY_MS: u64 = 70;

/// Connection settings passed to each client.
///
/// Built with setters in the usual builder style:
///
/// ```ignore
/// use ppinet_fetch::FetchConfig;
///
/// let config = FetchConfig::new()
///     .email("lab@example.org")
///     .ncbi_api_key("abc123")
///     .timeout_secs(30);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Contact address sent to NCBI.
    pub email: Option<String>,
    /// NCBI API key.
    pub ncbi_api_key: Option<String>,
    /// Tool name sent to NCBI.
    pub tool: String,
    /// Per-request socket timeout.
    pub timeout_secs: u64,
    /// Sleep between NCBI requests.
    pub ncbi_delay_ms: u64,
    /// Sleep between UniProt requests.
    pub uniprot_delay_ms: u64,
    /// Sleep between Ensembl requests.
    pub ensembl_delay_ms: u64,
    /// Organism used for gene-name lookups.
    pub organism: String,
    /// NCBI base URL.
    pub ncbi_base_url: String,
    /// UniProt base URL.
    pub uniprot_base_url: String,
    /// Ensembl base URL.
    pub ensembl_base_url: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            email: None,
            ncbi_api_key: None,
            tool: "ppinet".to_string(),
            timeout_secs: 10,
            ncbi_delay_ms: NCBI_DELAY_MS,
            uniprot_delay_ms: UNIPROT_DELAY_MS,
            ensembl_delay_ms: ENSEMBL_DELAY_MS,
            organism: "human".to_string(),
            ncbi_base_url: NCBI_BASE_URL.to_string(),
            uniprot_base_url: UNIPROT_BASE_URL.to_string(),
            ensembl_base_url: ENSEMBL_BASE_URL.to_string(),
        }
    }
}

impl FetchConfig {
    /// Default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the NCBI contact address.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the NCBI API key.
    pub fn ncbi_api_key(mut self, key: impl Into<String>) -> Self {
        self.ncbi_api_key = Some(key.into());
        self
    }

    /// Set the request timeout in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set the organism for gene-name lookups.
    pub fn organism(mut self, organism: impl Into<String>) -> Self {
        self.organism = organism.into();
        self
    }

    /// Point every client at one base URL (used against local mirrors).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.ncbi_base_url = url.clone();
        self.uniprot_base_url = url.clone();
        self.ensembl_base_url = url;
        self
    }

    /// Request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Delay between NCBI requests. An API key raises the limit to ten per second.
    pub fn ncbi_delay(&self) -> Duration {
        if self.ncbi_api_key.is_some() {
            Duration::from_millis(self.ncbi_delay_ms.min(100))
        } else {
            Duration::from_millis(self.ncbi_delay_ms)
        }
    }

    /// Delay between UniProt requests.
    pub fn uniprot_delay(&self) -> Duration {
        Duration::from_millis(self.uniprot_delay_ms)
    }

    /// Delay between Ensembl requests.
    pub fn ensembl_delay(&self) -> Duration {
        Duration::from_millis(self.ensembl_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_provider_limits() {
        let c = FetchConfig::default();
        assert_eq!(c.timeout(), Duration::from_secs(10));
        assert_eq!(c.ncbi_delay(), Duration::from_millis(350));
        assert_eq!(c.uniprot_delay(), Duration::from_millis(300));
        assert_eq!(c.ensembl_delay(), Duration::from_millis(70));
        assert_eq!(c.organism, "human");
    }

    #[test]
    fn api_key_shortens_ncbi_delay() {
        let c = FetchConfig::new().ncbi_api_key("k");
        assert_eq!(c.ncbi_delay(), Duration::from_millis(100));
    }

    #[test]
    fn partial_config_deserializes_with_defaults() {
        let c: FetchConfig = serde_json::from_str(r#"{"email":"a@b.c","timeout_secs":3}"#).unwrap();
        assert_eq!(c.email.as_deref(), Some("a@b.c"));
        assert_eq!(c.timeout_secs, 3);
        assert_eq!(c.ensembl_base_url, ENSEMBL_BASE_URL);
    }
}

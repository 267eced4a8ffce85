//! `ppinet.toml` loading with environment overrides.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use ppinet_engine::ExpandOptions;
use ppinet_fetch::FetchConfig;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "ppinet.toml";

/// Clustering settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusteringConfig {
    /// Sort Paris merges by distance.
    pub reorder: bool,
    /// Clusters kept by `prune-clusters`.
    pub top_k: usize,
}

impl Default for ClusteringConfig {
    fn default() -> Self {
        Self {
            reorder: true,
            top_k: 5,
        }
    }
}

/// Whole configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// API clients.
    pub fetch: FetchConfig,
    /// Seed expansion defaults.
    pub expansion: ExpandOptions,
    /// Clustering defaults.
    pub clustering: ClusteringConfig,
}

/// Load `path`, or `ppinet.toml` when present, or defaults; then apply
/// `PPINET_*` environment overrides.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let mut config = match path {
        Some(p) => parse_file(p)?,
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => parse_file(Path::new(DEFAULT_CONFIG_FILE))?,
        None => Config::default(),
    };
    apply_env(&mut config, |key| std::env::var(key).ok())?;
    Ok(config)
}

fn parse_file(path: &Path) -> anyhow::Result<Config> {
    let body = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config = toml::from_str(&body).with_context(|| format!("parsing config {}", path.display()))?;
    tracing::debug!(path = %path.display(), "Loaded config");
    Ok(config)
}

/// Apply `PPINET_EMAIL`, `PPINET_NCBI_API_KEY` and `PPINET_TIMEOUT_SECS`.
pub fn apply_env<F>(config: &mut Config, var: F) -> anyhow::Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(email) = var("PPINET_EMAIL") {
        config.fetch.email = Some(email);
    }
    if let Some(key) = var("PPINET_NCBI_API_KEY") {
        config.fetch.ncbi_api_key = Some(key);
    }
    if let Some(secs) = var("PPINET_TIMEOUT_SECS") {
        config.fetch.timeout_secs = secs
            .trim()
            .parse()
            .with_context(|| format!("PPINET_TIMEOUT_SECS='{}' is not a number of seconds", secs))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn sections_default_independently() {
        let c: Config = toml::from_str(
            r#"
            [fetch]
            email = "lab@example.org"

            [expansion]
            max_hops = 2
            "#,
        )
        .unwrap();
        assert_eq!(c.fetch.email.as_deref(), Some("lab@example.org"));
        assert_eq!(c.fetch.timeout_secs, 10);
        assert_eq!(c.expansion.max_hops, 2);
        assert_eq!(c.expansion.max_nodes, 500);
        assert_eq!(c.clustering, ClusteringConfig::default());
    }

    #[test]
    fn env_overrides_file() {
        let mut c = Config::default();
        apply_env(&mut c, |k| match k {
            "PPINET_EMAIL" => Some("env@example.org".into()),
            "PPINET_TIMEOUT_SECS" => Some("30".into()),
            _ => None,
        })
        .unwrap();
        assert_eq!(c.fetch.email.as_deref(), Some("env@example.org"));
        assert_eq!(c.fetch.timeout_secs, 30);
        assert!(c.fetch.ncbi_api_key.is_none());
    }

    #[test]
    fn bad_timeout_rejected() {
        let mut c = Config::default();
        assert!(apply_env(&mut c, |k| (k == "PPINET_TIMEOUT_SECS").then(|| "soon".to_string())).is_err());
    }

    #[test]
    fn explicit_file_loaded() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[clustering]\ntop_k = 3\n").unwrap();
        assert_eq!(parse_file(&path).unwrap().clustering.top_k, 3);
    }
}

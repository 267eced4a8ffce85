use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use ppinet_fetch::{enrich_metadata, NcbiClient};
use ppinet_storage::metadata::merge_enriched_metadata;
use ppinet_storage::{BiogridNetwork, Table, TableFormat};

use crate::config::Config;

#[derive(Args)]
pub struct BiogridArgs {
    /// BioGRID tab3 file
    #[arg(short, long)]
    input: PathBuf,

    /// Directory for edgelist.csv and metadata.csv
    #[arg(long)]
    output_dir: PathBuf,
}

pub fn biogrid(args: BiogridArgs) -> anyhow::Result<()> {
    let network = BiogridNetwork::read(&args.input)
        .with_context(|| format!("reading BioGRID file {}", args.input.display()))?;
    let (edges, meta) = network
        .write(&args.output_dir)
        .with_context(|| format!("writing into {}", args.output_dir.display()))?;
    tracing::info!(
        edges = network.edges.len(),
        genes = network.genes.len(),
        edgelist = %edges.display(),
        metadata = %meta.display(),
        "Converted BioGRID network"
    );
    Ok(())
}

#[derive(Args)]
pub struct MergeMetadataArgs {
    /// NCBI-enriched metadata (CSV)
    #[arg(long)]
    enriched: PathBuf,

    /// Base metadata with node_id, gene_name and entrez_id (CSV)
    #[arg(long)]
    base: PathBuf,

    /// Output (CSV)
    #[arg(short, long)]
    output: PathBuf,
}

pub fn merge_metadata(args: MergeMetadataArgs) -> anyhow::Result<()> {
    let enriched = Table::read(&args.enriched, TableFormat::CSV)
        .with_context(|| format!("reading {}", args.enriched.display()))?;
    let base = Table::read(&args.base, TableFormat::CSV)
        .with_context(|| format!("reading {}", args.base.display()))?;
    let merged = merge_enriched_metadata(enriched, &base)?;
    merged
        .write(&args.output, TableFormat::CSV)
        .with_context(|| format!("writing {}", args.output.display()))?;
    tracing::info!(rows = merged.len(), columns = merged.headers().len(), "Saved merged metadata");
    Ok(())
}

#[derive(Args)]
pub struct EnrichArgs {
    /// Metadata table with an entrez_id column (CSV)
    #[arg(long)]
    metadata: PathBuf,

    /// Output path stem; .csv and .json are written next to each other
    #[arg(short, long)]
    output: PathBuf,

    /// Only look at the first N metadata rows
    #[arg(long)]
    limit: Option<usize>,

    /// Contact email sent to NCBI (overrides config and PPINET_EMAIL)
    #[arg(long)]
    email: Option<String>,
}

pub fn enrich(args: EnrichArgs, config: &Config) -> anyhow::Result<()> {
    let metadata = Table::read(&args.metadata, TableFormat::CSV)
        .with_context(|| format!("reading {}", args.metadata.display()))?;

    let mut fetch = config.fetch.clone();
    if let Some(email) = args.email {
        fetch = fetch.email(email);
    }
    if fetch.email.is_none() {
        tracing::warn!("No contact email configured; NCBI asks for one");
    }

    let client = NcbiClient::new(&fetch);
    let report = enrich_metadata(&client, &metadata, args.limit, fetch.ncbi_delay())?;
    report.write(&args.output)?;
    if !report.failed.is_empty() {
        tracing::warn!(failed = report.failed.len(), ids = ?report.failed, "Some genes could not be enriched");
    }
    Ok(())
}

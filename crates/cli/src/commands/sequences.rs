use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, ValueEnum};

use ppinet_engine::missing_node_degrees;
use ppinet_fetch::{fetch_missing, EnsemblClient, SequenceSource, UniProtByGene, UniProtByXref, UniProtClient};
use ppinet_storage::edges::read_edges;
use ppinet_storage::{SequenceMap, Table, TableFormat};

use crate::config::Config;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Provider {
    /// Ensembl REST by protein ID
    Ensembl,
    /// UniProt search by gene symbol
    UniprotGene,
    /// UniProt search by Ensembl cross-reference
    UniprotXref,
}

#[derive(Args)]
pub struct FetchSequencesArgs {
    /// Protein info with node_id and the lookup column (CSV)
    #[arg(long)]
    info: PathBuf,

    /// Sequence provider
    #[arg(long, value_enum, default_value = "ensembl")]
    provider: Provider,

    /// Lookup column (protein_id for Ensembl, preferred_name for gene search)
    #[arg(long)]
    key_column: Option<String>,

    /// Existing sequence map; only nodes missing from it are fetched
    #[arg(long)]
    existing: Option<PathBuf>,

    /// Organism for gene search (overrides config)
    #[arg(long)]
    organism: Option<String>,

    /// Output sequence map (JSON), existing entries included
    #[arg(short, long)]
    output: PathBuf,

    /// Write failed lookups here (CSV)
    #[arg(long)]
    failed_output: Option<PathBuf>,
}

pub fn fetch_sequences(args: FetchSequencesArgs, config: &Config) -> anyhow::Result<()> {
    let info = Table::read(&args.info, TableFormat::CSV)
        .with_context(|| format!("reading {}", args.info.display()))?;
    let mut sequences = match &args.existing {
        Some(path) => SequenceMap::load_or_default(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => SequenceMap::new(),
    };

    let fetch = &config.fetch;
    let organism = args.organism.clone().unwrap_or_else(|| fetch.organism.clone());
    let source: Box<dyn SequenceSource> = match args.provider {
        Provider::Ensembl => Box::new(EnsemblClient::new(fetch)),
        Provider::UniprotGene => Box::new(UniProtByGene {
            client: UniProtClient::new(fetch),
            organism,
        }),
        Provider::UniprotXref => Box::new(UniProtByXref(UniProtClient::new(fetch))),
    };
    let (delay, default_key) = match args.provider {
        Provider::Ensembl => (fetch.ensembl_delay(), "protein_id"),
        Provider::UniprotGene => (fetch.uniprot_delay(), "preferred_name"),
        Provider::UniprotXref => (fetch.uniprot_delay(), "protein_id"),
    };
    let key_column = args.key_column.as_deref().unwrap_or(default_key);

    let report = fetch_missing(source.as_ref(), &info, key_column, &sequences, delay)?;
    let fetched = report.fetched.len();
    sequences.merge(report.fetched);
    sequences
        .save(&args.output)
        .with_context(|| format!("writing {}", args.output.display()))?;

    if let Some(path) = &args.failed_output {
        let mut t = Table::new("failed", vec!["node_id".into(), "key".into(), "reason".into()]);
        for f in &report.failed {
            t.push_row(vec![f.node_id.to_string(), f.key.clone(), f.reason.clone()]);
        }
        t.write(path, TableFormat::CSV)
            .with_context(|| format!("writing {}", path.display()))?;
    }
    tracing::info!(
        fetched,
        failed = report.failed.len(),
        total = sequences.len(),
        output = %args.output.display(),
        "Saved sequences"
    );
    Ok(())
}

#[derive(Args)]
pub struct MergeSequencesArgs {
    /// Sequence maps (JSON); later files overwrite earlier ones
    #[arg(required = true, num_args = 1..)]
    inputs: Vec<PathBuf>,

    /// Output sequence map (JSON)
    #[arg(short, long)]
    output: PathBuf,

    /// Sort the result by node ID
    #[arg(long)]
    sort: bool,
}

pub fn merge_sequences(args: MergeSequencesArgs) -> anyhow::Result<()> {
    let mut merged = SequenceMap::new();
    for path in &args.inputs {
        let map = SequenceMap::load(path).with_context(|| format!("reading {}", path.display()))?;
        tracing::info!(path = %path.display(), entries = map.len(), "Merging");
        merged.merge(map);
    }
    if args.sort {
        merged.sort_by_node_id()?;
    }
    merged
        .save(&args.output)
        .with_context(|| format!("writing {}", args.output.display()))?;
    tracing::info!(entries = merged.len(), output = %args.output.display(), "Saved merged sequences");
    Ok(())
}

#[derive(Args)]
pub struct SortSequencesArgs {
    /// Sequence map (JSON)
    #[arg(short, long)]
    input: PathBuf,

    /// Output (defaults to overwriting the input)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn sort_sequences(args: SortSequencesArgs) -> anyhow::Result<()> {
    let mut map = SequenceMap::load(&args.input).with_context(|| format!("reading {}", args.input.display()))?;
    map.sort_by_node_id()?;
    let output = args.output.as_ref().unwrap_or(&args.input);
    map.save(output).with_context(|| format!("writing {}", output.display()))?;
    tracing::info!(entries = map.len(), output = %output.display(), "Sorted sequences");
    Ok(())
}

#[derive(Args)]
pub struct MissingDegreesArgs {
    /// Protein info with node_id and protein_id (CSV)
    #[arg(long)]
    info: PathBuf,

    /// Sequence map (JSON)
    #[arg(long)]
    sequences: PathBuf,

    /// Cleaned edge list (CSV)
    #[arg(long)]
    edges: PathBuf,

    /// Write the ranked nodes here (CSV)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn missing_degrees(args: MissingDegreesArgs) -> anyhow::Result<()> {
    let info = Table::read(&args.info, TableFormat::CSV)
        .with_context(|| format!("reading {}", args.info.display()))?;
    let sequences = SequenceMap::load(&args.sequences)
        .with_context(|| format!("reading {}", args.sequences.display()))?;
    let edges = read_edges(&args.edges).with_context(|| format!("reading {}", args.edges.display()))?;

    let report = missing_node_degrees(&info, &sequences, &edges)?;
    tracing::info!(
        missing = report.nodes.len(),
        isolated = report.isolated(),
        degree_1 = report.with_degree(1),
        degree_ge_5 = report.at_least(5),
        degree_ge_10 = report.at_least(10),
        "Missing-sequence degree summary"
    );
    if let Some(path) = &args.output {
        report
            .to_table()
            .write(path, TableFormat::CSV)
            .with_context(|| format!("writing {}", path.display()))?;
    }
    Ok(())
}

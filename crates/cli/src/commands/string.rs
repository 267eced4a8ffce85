use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use ppinet_engine::graph::interactions::strip_scores;
use ppinet_engine::{filter_seed_interactions, seed_protein_ids, BREAST_CANCER_GENES};
use ppinet_storage::edges::{read_interactions, read_string_links, write_interactions};
use ppinet_storage::{Table, TableFormat};

#[derive(Args)]
pub struct FilterStringArgs {
    /// STRING protein.links file (space separated, with header)
    #[arg(long)]
    links: PathBuf,

    /// STRING protein.info file (tab separated, with header)
    #[arg(long)]
    info: PathBuf,

    /// Output interaction list (TSV, no header)
    #[arg(short, long)]
    output: PathBuf,

    /// Keep links with combined_score strictly above this value
    #[arg(long, default_value_t = 700.0)]
    threshold: f64,

    /// Seed gene symbols (defaults to the breast cancer panel)
    #[arg(long, value_delimiter = ',')]
    genes: Vec<String>,
}

pub fn filter_string(args: FilterStringArgs) -> anyhow::Result<()> {
    let info = Table::read(&args.info, TableFormat::TSV)
        .with_context(|| format!("reading protein info {}", args.info.display()))?;
    let links = read_string_links(&args.links)
        .with_context(|| format!("reading STRING links {}", args.links.display()))?;

    let genes: Vec<String> = if args.genes.is_empty() {
        BREAST_CANCER_GENES.iter().map(|g| g.to_string()).collect()
    } else {
        args.genes
    };
    let proteins = seed_protein_ids(&info, &genes)?;
    let kept = filter_seed_interactions(&links, &proteins, args.threshold);

    write_interactions(&args.output, &kept, TableFormat::TSV_NO_HEADER)
        .with_context(|| format!("writing {}", args.output.display()))?;
    tracing::info!(interactions = kept.len(), output = %args.output.display(), "Saved seed network");
    Ok(())
}

#[derive(Args)]
pub struct SubsetInfoArgs {
    /// Interaction list (TSV, no header)
    #[arg(long)]
    interactions: PathBuf,

    /// Protein info table (tab separated, with header)
    #[arg(long)]
    info: PathBuf,

    /// Column of the info table holding protein IDs (defaults to the first)
    #[arg(long)]
    id_column: Option<String>,

    /// Output protein info (TSV)
    #[arg(short, long)]
    output: PathBuf,

    /// Also write the interactions as a `protein1,protein2` CSV
    #[arg(long)]
    edges_output: Option<PathBuf>,
}

pub fn subset_info(args: SubsetInfoArgs) -> anyhow::Result<()> {
    let links = read_interactions(&args.interactions, TableFormat::TSV_NO_HEADER)
        .with_context(|| format!("reading interactions {}", args.interactions.display()))?;
    let info = Table::read(&args.info, TableFormat::TSV)
        .with_context(|| format!("reading protein info {}", args.info.display()))?;

    let id_column = match args.id_column {
        Some(c) => c,
        None => info
            .first_column()
            .map(str::to_string)
            .context("protein info table has no columns")?,
    };
    let subset = ppinet_engine::subset_info(&info, &id_column, &links)?;
    subset
        .write(&args.output, TableFormat::TSV)
        .with_context(|| format!("writing {}", args.output.display()))?;

    if let Some(path) = &args.edges_output {
        write_interactions(path, &strip_scores(&links), TableFormat::CSV)
            .with_context(|| format!("writing {}", path.display()))?;
    }
    tracing::info!(proteins = subset.len(), output = %args.output.display(), "Saved protein info subset");
    Ok(())
}

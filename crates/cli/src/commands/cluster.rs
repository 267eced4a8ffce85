use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use ppinet_engine::{cluster_edge_table, prune_to_top_clusters, Paris};
use ppinet_storage::clusters::{read_assignments, read_assignments_tsv, write_assignments};
use ppinet_storage::edges::{read_edges, write_edges};
use ppinet_storage::{Table, TableFormat};

use crate::config::Config;

#[derive(Args)]
pub struct ClusterArgs {
    /// Edge list (CSV with source,target)
    #[arg(long)]
    edges: PathBuf,

    /// Output merge tree (JSON)
    #[arg(short, long)]
    output: PathBuf,

    /// Keep merges in discovery order instead of sorting by distance
    #[arg(long)]
    no_reorder: bool,
}

pub fn cluster(args: ClusterArgs, config: &Config) -> anyhow::Result<()> {
    let table = Table::read(&args.edges, TableFormat::CSV)
        .with_context(|| format!("reading {}", args.edges.display()))?;
    let paris = Paris {
        reorder: config.clustering.reorder && !args.no_reorder,
    };
    let result = cluster_edge_table(&table, &paris)
        .with_context(|| format!("clustering {}", args.edges.display()))?;
    result
        .write(&args.output)
        .with_context(|| format!("writing {}", args.output.display()))?;
    tracing::info!(
        nodes = result.num_nodes,
        edges = result.num_edges,
        output = %args.output.display(),
        "Saved hierarchy"
    );
    Ok(())
}

#[derive(Args)]
pub struct PruneArgs {
    /// Cluster assignments (CSV with node_id,cluster_id)
    #[arg(long)]
    clusters: PathBuf,

    /// Edge list (CSV with source,target)
    #[arg(long)]
    edges: PathBuf,

    /// Protein info with a node_id column (CSV)
    #[arg(long)]
    info: Option<PathBuf>,

    /// Number of clusters to keep (overrides config)
    #[arg(short = 'k', long)]
    top_k: Option<usize>,

    /// Directory for the pruned files
    #[arg(long)]
    output_dir: PathBuf,
}

pub fn prune(args: PruneArgs, config: &Config) -> anyhow::Result<()> {
    let k = args.top_k.unwrap_or(config.clustering.top_k);
    let assignments = read_assignments(&args.clusters)
        .with_context(|| format!("reading {}", args.clusters.display()))?;
    let edges = read_edges(&args.edges).with_context(|| format!("reading {}", args.edges.display()))?;
    let pruned = prune_to_top_clusters(&assignments, &edges, k);

    let dir = &args.output_dir;
    std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    write_assignments(dir.join(format!("clusters_top{}.csv", k)), &pruned.assignments)?;
    write_edges(dir.join(format!("edgelist_top{}.csv", k)), &pruned.edges)?;
    if let Some(path) = &args.info {
        let info = Table::read(path, TableFormat::CSV)
            .with_context(|| format!("reading protein info {}", path.display()))?;
        let kept = pruned.prune_info(&info)?;
        kept.write(dir.join(format!("protein_info_top{}.csv", k)), TableFormat::CSV)?;
    }
    pruned
        .summary_table()
        .write(dir.join(format!("summary_top{}.csv", k)), TableFormat::CSV)?;

    tracing::info!(
        clusters = pruned.top.len(),
        nodes = pruned.assignments.len(),
        edges = pruned.edges.len(),
        output = %dir.display(),
        "Saved pruned network"
    );
    Ok(())
}

#[derive(Args)]
pub struct ClustersToCsvArgs {
    /// Cluster assignments (TSV, no header: node_id, cluster_id)
    #[arg(short, long)]
    input: PathBuf,

    /// Output (CSV with header)
    #[arg(short, long)]
    output: PathBuf,
}

pub fn clusters_to_csv(args: ClustersToCsvArgs) -> anyhow::Result<()> {
    let assignments = read_assignments_tsv(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    write_assignments(&args.output, &assignments)
        .with_context(|| format!("writing {}", args.output.display()))?;
    tracing::info!(nodes = assignments.len(), output = %args.output.display(), "Converted cluster assignments");
    Ok(())
}

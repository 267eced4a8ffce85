use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use ppinet_core::NodeId;
use ppinet_engine::{
    canonicalize as canonicalize_edges, expand_from_seeds, reindex_table, resolve_seeds, DegreeSummary,
    GraphAlgorithm, Network, SeedPolicy, UnmappedPolicy, BREAST_CANCER_GENES,
};
use ppinet_storage::edges::{read_edges, read_interactions, write_edges};
use ppinet_storage::{Table, TableFormat};

use super::Format;
use crate::config::Config;

#[derive(Args)]
pub struct ReindexArgs {
    /// Node table with one row per protein
    #[arg(long)]
    nodes: PathBuf,

    /// Node table format
    #[arg(long, value_enum, default_value = "tsv")]
    nodes_format: Format,

    /// Column of the node table holding external identifiers
    #[arg(long, default_value = "protein_id")]
    id_column: String,

    /// Interaction list with protein1/protein2 columns
    #[arg(long)]
    interactions: PathBuf,

    /// Interaction list format
    #[arg(long, value_enum, default_value = "csv")]
    interactions_format: Format,

    /// Drop edges whose endpoints are not in the node table instead of failing
    #[arg(long)]
    drop_unmapped: bool,

    /// Output node table with a node_id column (CSV)
    #[arg(long)]
    nodes_output: PathBuf,

    /// Output edge list over node IDs (CSV)
    #[arg(long)]
    edges_output: PathBuf,
}

pub fn reindex(args: ReindexArgs) -> anyhow::Result<()> {
    let mut nodes = Table::read(&args.nodes, args.nodes_format.into())
        .with_context(|| format!("reading node table {}", args.nodes.display()))?;
    let interactions = read_interactions(&args.interactions, args.interactions_format.into())
        .with_context(|| format!("reading interactions {}", args.interactions.display()))?;

    let policy = if args.drop_unmapped {
        UnmappedPolicy::Drop
    } else {
        UnmappedPolicy::Error
    };
    let (map, outcome) = reindex_table(&mut nodes, &args.id_column, &interactions, policy)
        .with_context(|| format!("reindexing {}", args.interactions.display()))?;

    nodes
        .write(&args.nodes_output, TableFormat::CSV)
        .with_context(|| format!("writing {}", args.nodes_output.display()))?;
    write_edges(&args.edges_output, &outcome.edges)
        .with_context(|| format!("writing {}", args.edges_output.display()))?;
    tracing::info!(
        nodes = map.len(),
        edges = outcome.edges.len(),
        dropped = outcome.dropped,
        "Saved reindexed network"
    );
    Ok(())
}

#[derive(Args)]
pub struct CanonicalizeArgs {
    /// Edge list (CSV with source,target)
    #[arg(short, long)]
    input: PathBuf,

    /// Output edge list (CSV)
    #[arg(short, long)]
    output: PathBuf,
}

pub fn canonicalize(args: CanonicalizeArgs) -> anyhow::Result<()> {
    let edges = read_edges(&args.input).with_context(|| format!("reading {}", args.input.display()))?;
    let result = canonicalize_edges(&edges);
    write_edges(&args.output, &result.edges).with_context(|| format!("writing {}", args.output.display()))?;
    tracing::info!(
        before = edges.len(),
        after = result.edges.len(),
        duplicates = result.duplicates_removed,
        self_loops = result.self_loops_removed,
        "Canonicalised edge list"
    );
    Ok(())
}

#[derive(Args)]
pub struct ExpandArgs {
    /// Edge list (CSV with source,target[,score])
    #[arg(long)]
    edges: PathBuf,

    /// Node table (CSV) used to resolve seed names
    #[arg(long)]
    nodes: Option<PathBuf>,

    /// Node-table column matched against seed names
    #[arg(long, default_value = "preferred_name")]
    name_column: String,

    /// Seed names (defaults to the breast cancer panel)
    #[arg(long, value_delimiter = ',')]
    seeds: Vec<String>,

    /// Seed node IDs, bypassing name resolution
    #[arg(long, value_delimiter = ',', conflicts_with = "seeds")]
    seed_ids: Vec<NodeId>,

    /// Skip seed names missing from the node table instead of failing
    #[arg(long)]
    lenient: bool,

    /// Maximum BFS hops (overrides config)
    #[arg(long)]
    max_hops: Option<usize>,

    /// Node budget (overrides config)
    #[arg(long)]
    max_nodes: Option<usize>,

    /// Minimum edge score, inclusive (overrides config)
    #[arg(long)]
    min_score: Option<f64>,

    /// Output subnetwork edge list (CSV)
    #[arg(short, long)]
    output: PathBuf,

    /// Also write `node_id,depth` for every kept node
    #[arg(long)]
    nodes_output: Option<PathBuf>,
}

pub fn expand(args: ExpandArgs, config: &Config) -> anyhow::Result<()> {
    let edges = read_edges(&args.edges).with_context(|| format!("reading {}", args.edges.display()))?;

    let seeds: Vec<NodeId> = if !args.seed_ids.is_empty() {
        args.seed_ids.clone()
    } else {
        let path = args
            .nodes
            .as_ref()
            .context("--nodes is required to resolve seed names (or pass --seed-ids)")?;
        let nodes = Table::read(path, TableFormat::CSV)
            .with_context(|| format!("reading node table {}", path.display()))?;
        let names: Vec<String> = if args.seeds.is_empty() {
            BREAST_CANCER_GENES.iter().map(|g| g.to_string()).collect()
        } else {
            args.seeds.clone()
        };
        let policy = if args.lenient {
            SeedPolicy::Lenient
        } else {
            SeedPolicy::Strict
        };
        resolve_seeds(&nodes, &args.name_column, "node_id", &names, policy)?
    };

    let mut options = config.expansion.clone();
    if let Some(h) = args.max_hops {
        options.max_hops = h;
    }
    if let Some(n) = args.max_nodes {
        options.max_nodes = n;
    }
    if args.min_score.is_some() {
        options.min_score = args.min_score;
    }

    let canonical = canonicalize_edges(&edges);
    if canonical.duplicates_removed > 0 || canonical.self_loops_removed > 0 {
        tracing::info!(
            duplicates = canonical.duplicates_removed,
            self_loops = canonical.self_loops_removed,
            "Canonicalised input edges before expansion"
        );
    }
    let network = Network::new(canonical.edges);
    let result = expand_from_seeds(&network, &seeds, &options);
    write_edges(&args.output, &result.edges).with_context(|| format!("writing {}", args.output.display()))?;

    if let Some(path) = &args.nodes_output {
        let mut t = Table::new("nodes", vec!["node_id".into(), "depth".into()]);
        for n in &result.nodes {
            let depth = result.depths.get(n).map(|d| d.to_string()).unwrap_or_default();
            t.push_row(vec![n.to_string(), depth]);
        }
        t.write(path, TableFormat::CSV)
            .with_context(|| format!("writing {}", path.display()))?;
    }

    tracing::info!(
        seeds = seeds.len(),
        nodes = result.node_count(),
        edges = result.edge_count(),
        hops = result.hops_completed,
        truncated = result.truncated,
        "Saved expanded subnetwork"
    );
    Ok(())
}

#[derive(Args)]
pub struct StatsArgs {
    /// Edge list (CSV)
    #[arg(long)]
    edges: PathBuf,

    /// Number of hubs to report
    #[arg(long, default_value_t = 10)]
    top: usize,

    /// Write the statistics as JSON here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn stats(args: StatsArgs) -> anyhow::Result<()> {
    let edges = read_edges(&args.edges).with_context(|| format!("reading {}", args.edges.display()))?;
    let stats = DegreeSummary { top_n: args.top }.execute(&Network::new(edges));
    let body = serde_json::to_string_pretty(&stats)?;
    match &args.output {
        Some(path) => std::fs::write(path, body).with_context(|| format!("writing {}", path.display()))?,
        None => println!("{}", body),
    }
    Ok(())
}

#[derive(Args)]
pub struct EdgesToTsvArgs {
    /// Edge list (CSV with header)
    #[arg(short, long)]
    input: PathBuf,

    /// Output (TSV, no header)
    #[arg(short, long)]
    output: PathBuf,
}

pub fn edges_to_tsv(args: EdgesToTsvArgs) -> anyhow::Result<()> {
    let table = Table::read(&args.input, TableFormat::CSV)
        .with_context(|| format!("reading {}", args.input.display()))?;
    table
        .write(&args.output, TableFormat::TSV_NO_HEADER)
        .with_context(|| format!("writing {}", args.output.display()))?;
    tracing::info!(rows = table.len(), output = %args.output.display(), "Converted edge list");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn expand_collapses_reversed_rows() {
        let dir = TempDir::new().unwrap();
        let edges = dir.path().join("edges.csv");
        std::fs::write(&edges, "source,target\n0,2\n2,0\n0,1\n1,2\n").unwrap();
        let output = dir.path().join("sub.csv");
        let args = ExpandArgs {
            edges,
            nodes: None,
            name_column: "preferred_name".into(),
            seeds: Vec::new(),
            seed_ids: vec![0],
            lenient: false,
            max_hops: Some(1),
            max_nodes: Some(2),
            min_score: None,
            output: output.clone(),
            nodes_output: None,
        };
        expand(args, &Config::default()).unwrap();

        let kept = read_edges(&output).unwrap();
        let pairs: Vec<(u32, u32)> = kept.iter().map(|e| (e.source, e.target)).collect();
        assert_eq!(pairs, vec![(0, 1)]);
    }
}

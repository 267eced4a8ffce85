use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "ppinet")]
#[command(version)]
#[command(about = "Build, expand and cluster protein-protein interaction networks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to configuration file (defaults to ./ppinet.toml when present)
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,

    /// Log level or filter directive (trace, debug, info, warn, error)
    #[arg(short, long, global = true, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Keep STRING links between seed-gene proteins above a score threshold
    FilterString(commands::string::FilterStringArgs),

    /// Keep protein-info rows that appear in an interaction list
    SubsetInfo(commands::string::SubsetInfoArgs),

    /// Assign dense node IDs and rewrite an interaction list over them
    Reindex(commands::network::ReindexArgs),

    /// Collapse an edge list to unique undirected pairs
    Canonicalize(commands::network::CanonicalizeArgs),

    /// Expand a seed set by BFS with a degree-ranked node budget
    Expand(commands::network::ExpandArgs),

    /// Degree statistics of an edge list
    Stats(commands::network::StatsArgs),

    /// Convert an edge list CSV to headerless TSV
    EdgesToTsv(commands::network::EdgesToTsvArgs),

    /// Run Paris hierarchical clustering and write the merge tree as JSON
    Cluster(commands::cluster::ClusterArgs),

    /// Restrict a clustering and its network to the largest clusters
    PruneClusters(commands::cluster::PruneArgs),

    /// Convert a headerless node/cluster TSV to CSV
    ClustersToCsv(commands::cluster::ClustersToCsvArgs),

    /// Convert a BioGRID tab3 file to an edge list and metadata table
    Biogrid(commands::metadata::BiogridArgs),

    /// Merge NCBI-enriched metadata into the base metadata table
    MergeMetadata(commands::metadata::MergeMetadataArgs),

    /// Fetch NCBI gene properties for a metadata table
    Enrich(commands::metadata::EnrichArgs),

    /// Fetch protein sequences for nodes that have none yet
    FetchSequences(commands::sequences::FetchSequencesArgs),

    /// Merge sequence maps, later files overwriting earlier ones
    MergeSequences(commands::sequences::MergeSequencesArgs),

    /// Sort a sequence map by node ID
    SortSequences(commands::sequences::SortSequencesArgs),

    /// Rank nodes without sequences by degree
    MissingDegrees(commands::sequences::MissingDegreesArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(filter)
        .init();

    let config = config::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::FilterString(args) => commands::string::filter_string(args),
        Commands::SubsetInfo(args) => commands::string::subset_info(args),
        Commands::Reindex(args) => commands::network::reindex(args),
        Commands::Canonicalize(args) => commands::network::canonicalize(args),
        Commands::Expand(args) => commands::network::expand(args, &config),
        Commands::Stats(args) => commands::network::stats(args),
        Commands::EdgesToTsv(args) => commands::network::edges_to_tsv(args),
        Commands::Cluster(args) => commands::cluster::cluster(args, &config),
        Commands::PruneClusters(args) => commands::cluster::prune(args, &config),
        Commands::ClustersToCsv(args) => commands::cluster::clusters_to_csv(args),
        Commands::Biogrid(args) => commands::metadata::biogrid(args),
        Commands::MergeMetadata(args) => commands::metadata::merge_metadata(args),
        Commands::Enrich(args) => commands::metadata::enrich(args, &config),
        Commands::FetchSequences(args) => commands::sequences::fetch_sequences(args, &config),
        Commands::MergeSequences(args) => commands::sequences::merge_sequences(args),
        Commands::SortSequences(args) => commands::sequences::sort_sequences(args),
        Commands::MissingDegrees(args) => commands::sequences::missing_degrees(args),
    }
}

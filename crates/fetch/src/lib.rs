//! Clients for the public biology APIs the pipeline pulls from.
//!
//! Every client takes a [`FetchConfig`] at construction; there is no
//! process-wide state. Requests are blocking and sequential, paced by the
//! per-provider delays in the config.

#![warn(missing_docs)]

pub mod batch;
pub mod client;
pub mod config;
pub mod enrich;
pub mod ensembl;
pub mod fasta;
pub mod ncbi;
pub mod uniprot;

pub use batch::{
    fetch_items, fetch_missing, fetch_sequences, FailedFetch, FetchItem, FetchReport, SequenceSource,
    UniProtByGene, UniProtByXref,
};
pub use client::HttpClient;
pub use config::FetchConfig;
pub use enrich::{enrich_metadata, entrez_ids, EnrichReport, GeneSource};
pub use ensembl::{ensembl_protein_id, EnsemblClient};
pub use fasta::parse_fasta_sequence;
pub use ncbi::{parse_gene_summary, GeneProperties, NcbiClient};
pub use uniprot::{taxonomy_id, UniProtClient};

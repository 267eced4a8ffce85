//! Protein-protein interaction network toolkit.
//!
//! The pipeline runs in stages, each reading and writing plain files:
//!
//! 1. filter STRING links (or convert BioGRID) into an interaction list
//! 2. [`reindex`](ppinet_engine::reindex_table) external identifiers to dense node IDs
//! 3. [`canonicalize`](ppinet_engine::canonicalize) the undirected edge list
//! 4. [`expand`](ppinet_engine::expand_from_seeds) from seed genes with a node budget
//! 5. cluster the result with [`Paris`](ppinet_engine::Paris) into a JSON merge tree
//!
//! Sequences and gene metadata are pulled from Ensembl, UniProt and NCBI by
//! `ppinet-fetch`. The `ppinet` binary in `ppinet-cli` drives every stage.

pub mod types;

pub use ppinet_core;
pub use ppinet_engine;
pub use ppinet_fetch;
pub use ppinet_storage;

pub use types::*;

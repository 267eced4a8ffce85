//! File formats for the ppinet pipeline.
//!
//! Everything here reads or writes a file and hands back plain values;
//! graph logic lives in `ppinet-engine`.

#![warn(missing_docs)]

pub mod biogrid;
pub mod clusters;
pub mod edges;
pub mod metadata;
pub mod sequences;
pub mod table;

pub use biogrid::{BiogridGene, BiogridNetwork};
pub use clusters::ClusterAssignment;
pub use sequences::SequenceMap;
pub use table::{Table, TableFormat};

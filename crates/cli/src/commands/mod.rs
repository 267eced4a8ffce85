pub mod cluster;
pub mod metadata;
pub mod network;
pub mod sequences;
pub mod string;

use ppinet_storage::TableFormat;

/// Delimited file flavours accepted on the command line.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum Format {
    /// Comma separated, with header
    Csv,
    /// Tab separated, with header
    Tsv,
    /// Space separated, with header
    Space,
}

impl From<Format> for TableFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Csv => TableFormat::CSV,
            Format::Tsv => TableFormat::TSV,
            Format::Space => TableFormat::SPACE,
        }
    }
}

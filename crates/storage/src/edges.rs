//! Edge list and interaction list files.
//!
//! Integer edge lists are `source,target[,score]` CSV files. Interaction
//! lists name proteins by external identifier (`protein1`, `protein2`,
//! optional `combined_score`) and come either from STRING (space separated,
//! with header) or from earlier pipeline steps (TSV, no header).

use std::path::Path;

use ppinet_core::{Edge, Interaction, NodeId, PpiResult};

use crate::table::{Table, TableFormat};

/// Column names accepted as an edge confidence score, in lookup order.
pub const SCORE_COLUMNS: [&str; 3] = ["score", "weight", "combined_score"];

/// Read an integer edge list with `source`/`target` columns.
pub fn read_edges(path: impl AsRef<Path>) -> PpiResult<Vec<Edge>> {
    let table = Table::read(path, TableFormat::CSV)?;
    edges_from_table(&table)
}

/// Convert a table with `source`/`target` (and optional score) columns.
pub fn edges_from_table(table: &Table) -> PpiResult<Vec<Edge>> {
    let sources: Vec<NodeId> = table.parse_column("source")?;
    let targets: Vec<NodeId> = table.parse_column("target")?;
    let scores: Option<Vec<Option<f64>>> = match score_column(table) {
        Some(col) => Some(table.parse_optional_column(col)?),
        None => None,
    };

    Ok(sources
        .into_iter()
        .zip(targets)
        .enumerate()
        .map(|(i, (s, t))| Edge {
            source: s,
            target: t,
            score: scores.as_ref().and_then(|v| v[i]),
        })
        .collect())
}

/// Write an edge list. A `score` column is written when any edge has one.
pub fn write_edges(path: impl AsRef<Path>, edges: &[Edge]) -> PpiResult<()> {
    let with_scores = edges.iter().any(|e| e.score.is_some());
    let mut headers = vec!["source".to_string(), "target".to_string()];
    if with_scores {
        headers.push("score".to_string());
    }
    let mut table = Table::new(path.as_ref().display().to_string(), headers);
    for e in edges {
        let mut row = vec![e.source.to_string(), e.target.to_string()];
        if with_scores {
            row.push(e.score.map(format_score).unwrap_or_default());
        }
        table.push_row(row);
    }
    table.write(path, TableFormat::CSV)
}

/// Read a STRING `protein.links` file (space separated, with header).
pub fn read_string_links(path: impl AsRef<Path>) -> PpiResult<Vec<Interaction>> {
    let table = Table::read(path, TableFormat::SPACE)?;
    interactions_from_table(&table)
}

/// Read an interaction list.
///
/// Headerless files are taken as `protein1`, `protein2` and an optional
/// third `combined_score` column.
pub fn read_interactions(path: impl AsRef<Path>, format: TableFormat) -> PpiResult<Vec<Interaction>> {
    let mut table = Table::read(path, format)?;
    if !format.has_headers {
        table.rename_columns(&["protein1", "protein2", "combined_score"]);
    }
    interactions_from_table(&table)
}

/// Convert a table with `protein1`/`protein2` (and optional score) columns.
pub fn interactions_from_table(table: &Table) -> PpiResult<Vec<Interaction>> {
    let p1 = table.column("protein1")?;
    let p2 = table.column("protein2")?;
    let scores: Option<Vec<Option<f64>>> = match score_column(table) {
        Some(col) => Some(table.parse_optional_column(col)?),
        None => None,
    };

    Ok(p1
        .into_iter()
        .zip(p2)
        .enumerate()
        .map(|(i, (a, b))| Interaction {
            protein1: a.to_string(),
            protein2: b.to_string(),
            score: scores.as_ref().and_then(|v| v[i]),
        })
        .collect())
}

/// Write an interaction list. Scores go in a `combined_score` column when
/// any interaction carries one.
pub fn write_interactions(
    path: impl AsRef<Path>,
    interactions: &[Interaction],
    format: TableFormat,
) -> PpiResult<()> {
    let with_scores = interactions.iter().any(|i| i.score.is_some());
    let mut headers = vec!["protein1".to_string(), "protein2".to_string()];
    if with_scores {
        headers.push("combined_score".to_string());
    }
    let mut table = Table::new(path.as_ref().display().to_string(), headers);
    for i in interactions {
        let mut row = vec![i.protein1.clone(), i.protein2.clone()];
        if with_scores {
            row.push(i.score.map(format_score).unwrap_or_default());
        }
        table.push_row(row);
    }
    table.write(path, format)
}

fn score_column(table: &Table) -> Option<&'static str> {
    SCORE_COLUMNS.iter().copied().find(|c| table.has_column(c))
}

/// Integral scores print without a fractional part (`900`, not `900.0`).
pub fn format_score(score: f64) -> String {
    if score.fract() == 0.0 && score.abs() < 1e15 {
        format!("{}", score as i64)
    } else {
        score.to_string()
    }
}

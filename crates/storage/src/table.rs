//! Generic delimited tables.
//!
//! A [`Table`] is a header row plus string cells. Column lookups are by
//! name and fail with [`PpiError::MissingColumn`] when the column is
//! absent, which is the abort path for malformed inputs.

use std::path::Path;

use ppinet_core::{PpiError, PpiResult};

/// Delimiter and header layout of a table file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableFormat {
    /// Field separator byte.
    pub delimiter: u8,
    /// Whether the first line is a header row.
    pub has_headers: bool,
}

impl TableFormat {
    /// Comma-separated with a header row.
    pub const CSV: TableFormat = TableFormat {
        delimiter: b',',
        has_headers: true,
    };
    /// Tab-separated with a header row.
    pub const TSV: TableFormat = TableFormat {
        delimiter: b'\t',
        has_headers: true,
    };
    /// Tab-separated without a header row.
    pub const TSV_NO_HEADER: TableFormat = TableFormat {
        delimiter: b'\t',
        has_headers: false,
    };
    /// Space-separated with a header row (STRING links files).
    pub const SPACE: TableFormat = TableFormat {
        delimiter: b' ',
        has_headers: true,
    };

    /// Same delimiter, without a header row.
    pub fn headerless(self) -> Self {
        Self {
            has_headers: false,
            ..self
        }
    }
}

/// An in-memory delimited table.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    name: String,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create an empty table with the given column names.
    pub fn new(name: impl Into<String>, headers: Vec<String>) -> Self {
        Self {
            name: name.into(),
            headers,
            rows: Vec::new(),
        }
    }

    /// Read a table whose header row names the columns.
    pub fn read(path: impl AsRef<Path>, format: TableFormat) -> PpiResult<Self> {
        Self::read_inner(path.as_ref(), format, None)
    }

    /// Read a headerless table, naming its columns explicitly.
    pub fn read_with_names(
        path: impl AsRef<Path>,
        format: TableFormat,
        names: &[&str],
    ) -> PpiResult<Self> {
        let names: Vec<String> = names.iter().map(|s| s.to_string()).collect();
        Self::read_inner(path.as_ref(), format.headerless(), Some(names))
    }

    fn read_inner(path: &Path, format: TableFormat, names: Option<Vec<String>>) -> PpiResult<Self> {
        let name = path.display().to_string();
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(format.delimiter)
            .has_headers(format.has_headers)
            .from_path(path)
            .map_err(|e| csv_error(&name, e))?;

        let mut headers = match names {
            Some(names) => names,
            None if format.has_headers => reader
                .headers()
                .map_err(|e| csv_error(&name, e))?
                .iter()
                .map(|h| h.to_string())
                .collect(),
            None => Vec::new(),
        };

        let mut rows = Vec::new();
        for (i, record) in reader.records().enumerate() {
            let record = record.map_err(|e| csv_error(&name, e))?;
            let row: Vec<String> = record.iter().map(|f| f.to_string()).collect();
            if headers.is_empty() {
                headers = (0..row.len()).map(|c| c.to_string()).collect();
            }
            if row.len() < headers.len() {
                return Err(PpiError::parse(
                    &name,
                    i,
                    format!("expected {} fields, found {}", headers.len(), row.len()),
                ));
            }
            rows.push(row);
        }

        tracing::debug!(table = %name, rows = rows.len(), columns = headers.len(), "Read table");
        Ok(Self {
            name,
            headers,
            rows,
        })
    }

    /// Write the table, including the header row when the format has one.
    pub fn write(&self, path: impl AsRef<Path>, format: TableFormat) -> PpiResult<()> {
        let path = path.as_ref();
        let name = path.display().to_string();
        let mut writer = csv::WriterBuilder::new()
            .delimiter(format.delimiter)
            .from_path(path)
            .map_err(|e| csv_error(&name, e))?;
        if format.has_headers {
            writer
                .write_record(&self.headers)
                .map_err(|e| csv_error(&name, e))?;
        }
        for row in &self.rows {
            writer.write_record(row).map_err(|e| csv_error(&name, e))?;
        }
        writer.flush().map_err(|e| PpiError::io(path, e))?;
        tracing::debug!(table = %name, rows = self.rows.len(), "Wrote table");
        Ok(())
    }

    /// Table description used in error messages.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Column names.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Data rows.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append a data row. Short rows are padded with empty cells.
    pub fn push_row(&mut self, mut row: Vec<String>) {
        if row.len() < self.headers.len() {
            row.resize(self.headers.len(), String::new());
        }
        self.rows.push(row);
    }

    /// Whether a column with this name exists.
    pub fn has_column(&self, column: &str) -> bool {
        self.headers.iter().any(|h| h == column)
    }

    /// Position of a column, or `MissingColumn`.
    pub fn column_index(&self, column: &str) -> PpiResult<usize> {
        self.headers
            .iter()
            .position(|h| h == column)
            .ok_or_else(|| PpiError::missing_column(&self.name, column))
    }

    /// All values of a column in row order.
    pub fn column(&self, column: &str) -> PpiResult<Vec<&str>> {
        let idx = self.column_index(column)?;
        Ok(self.rows.iter().map(|r| r[idx].as_str()).collect())
    }

    /// Name of the first column, if any.
    pub fn first_column(&self) -> Option<&str> {
        self.headers.first().map(|s| s.as_str())
    }

    /// Parse every value of a column with `FromStr`.
    pub fn parse_column<T>(&self, column: &str) -> PpiResult<Vec<T>>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        let idx = self.column_index(column)?;
        self.rows
            .iter()
            .enumerate()
            .map(|(i, r)| {
                r[idx].trim().parse::<T>().map_err(|e| {
                    PpiError::parse(&self.name, i, format!("column '{}': {}", column, e))
                })
            })
            .collect()
    }

    /// Like [`Table::parse_column`], but empty cells become `None`.
    pub fn parse_optional_column<T>(&self, column: &str) -> PpiResult<Vec<Option<T>>>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        let idx = self.column_index(column)?;
        self.rows
            .iter()
            .enumerate()
            .map(|(i, r)| {
                let cell = r[idx].trim();
                if cell.is_empty() {
                    return Ok(None);
                }
                cell.parse::<T>().map(Some).map_err(|e| {
                    PpiError::parse(&self.name, i, format!("column '{}': {}", column, e))
                })
            })
            .collect()
    }

    /// Replace a column's values, or append it when absent.
    pub fn set_column(&mut self, column: &str, values: Vec<String>) -> PpiResult<()> {
        if values.len() != self.rows.len() {
            return Err(PpiError::invalid_input(format!(
                "column '{}' has {} values but {} has {} rows",
                column,
                values.len(),
                self.name,
                self.rows.len()
            )));
        }
        match self.headers.iter().position(|h| h == column) {
            Some(idx) => {
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row[idx] = value;
                }
            }
            None => {
                self.headers.push(column.to_string());
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row.push(value);
                }
            }
        }
        Ok(())
    }

    /// Rename the leading columns, e.g. to name a headerless table.
    pub fn rename_columns(&mut self, names: &[&str]) {
        for (header, name) in self.headers.iter_mut().zip(names) {
            *header = name.to_string();
        }
    }

    /// Remove columns by name. Absent names are ignored.
    pub fn drop_columns(&mut self, columns: &[&str]) {
        let keep: Vec<usize> = (0..self.headers.len())
            .filter(|&i| !columns.contains(&self.headers[i].as_str()))
            .collect();
        self.headers = keep.iter().map(|&i| self.headers[i].clone()).collect();
        for row in &mut self.rows {
            *row = keep.iter().map(|&i| row[i].clone()).collect();
        }
    }

    /// A new table with only the named columns, in the given order.
    pub fn select(&self, columns: &[&str]) -> PpiResult<Table> {
        let idx = columns
            .iter()
            .map(|c| self.column_index(c))
            .collect::<PpiResult<Vec<_>>>()?;
        Ok(Table {
            name: self.name.clone(),
            headers: columns.iter().map(|c| c.to_string()).collect(),
            rows: self
                .rows
                .iter()
                .map(|r| idx.iter().map(|&i| r[i].clone()).collect())
                .collect(),
        })
    }

    /// Keep only the rows for which `keep` returns true.
    pub fn retain_rows<F>(&mut self, mut keep: F)
    where
        F: FnMut(&[String]) -> bool,
    {
        self.rows.retain(|r| keep(r));
    }
}

fn csv_error(name: &str, err: csv::Error) -> PpiError {
    let row = err
        .position()
        .map(|p| p.record().saturating_sub(1) as usize)
        .unwrap_or(0);
    PpiError::parse(name, row, err.to_string())
}

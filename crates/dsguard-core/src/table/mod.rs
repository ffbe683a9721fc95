//! In-memory CSV table with column-wise filtering.
//!
//! Cells are kept as strings; numeric checks go through [`Cell::parse`] so
//! missing markers and non-numeric text can be told apart from numbers.

mod cell;

pub use cell::Cell;

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::fs::File;
use std::io;
use std::path::Path;

/// A CSV file loaded with its header row.
#[derive(Debug, Clone)]
pub struct Table {
    name: String,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Load a CSV file. Records whose length differs from the header are an error.
    pub fn from_path(name: &str, path: &Path) -> Result<Self> {
        let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
        let table =
            Self::from_reader(name, file).with_context(|| format!("parse {}", path.display()))?;
        tracing::debug!(
            table = name,
            rows = table.row_count(),
            columns = table.headers.len(),
            "loaded {}",
            path.display()
        );
        Ok(table)
    }

    pub fn from_reader<R: io::Read>(name: &str, reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(false)
            .from_reader(reader);
        let headers: Vec<String> = rdr
            .headers()
            .context("read header row")?
            .iter()
            .map(str::to_string)
            .collect();
        let mut rows = Vec::new();
        for (i, record) in rdr.records().enumerate() {
            // +2: one for the header, one for 1-based line numbers.
            let record = record.with_context(|| format!("record at line {}", i + 2))?;
            rows.push(record.iter().map(str::to_string).collect());
        }
        Ok(Self {
            name: name.to_string(),
            headers,
            rows,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn column_names(&self) -> &[String] {
        &self.headers
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.index_of(column).is_some()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column(&self, column: &str) -> Option<Column<'_>> {
        self.index_of(column).map(|idx| Column { table: self, idx })
    }

    /// Indices of rows whose `column` value satisfies `pred`. Empty if the column is absent.
    pub fn rows_where<F>(&self, column: &str, pred: F) -> Vec<usize>
    where
        F: Fn(&str) -> bool,
    {
        match self.column(column) {
            Some(col) => col
                .values()
                .enumerate()
                .filter(|(_, v)| pred(*v))
                .map(|(i, _)| i)
                .collect(),
            None => Vec::new(),
        }
    }

    /// True if any row repeats the key formed by `columns`.
    /// Returns false when any of the columns is absent.
    pub fn duplicated(&self, columns: &[&str]) -> bool {
        let Some(idxs) = columns
            .iter()
            .map(|c| self.index_of(c))
            .collect::<Option<Vec<usize>>>()
        else {
            return false;
        };
        let mut seen: HashSet<Vec<&str>> = HashSet::with_capacity(self.rows.len());
        self.rows.iter().any(|row| {
            let key: Vec<&str> = idxs.iter().map(|&i| row[i].as_str()).collect();
            !seen.insert(key)
        })
    }

    /// Render up to `limit` of `rows` as JSON records restricted to `columns`,
    /// e.g. `[{"country":"usa"}]`. Numeric cells render as numbers.
    pub fn sample(&self, rows: &[usize], columns: &[&str], limit: usize) -> String {
        let idxs: Vec<(&str, usize)> = columns
            .iter()
            .filter_map(|c| self.index_of(c).map(|i| (*c, i)))
            .collect();
        let records: Vec<Value> = rows
            .iter()
            .filter_map(|&r| self.rows.get(r))
            .take(limit)
            .map(|row| {
                let mut obj = Map::new();
                for (name, i) in &idxs {
                    obj.insert((*name).to_string(), json_cell(&row[*i]));
                }
                Value::Object(obj)
            })
            .collect();
        Value::Array(records).to_string()
    }

    fn index_of(&self, column: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == column)
    }
}

fn json_cell(raw: &str) -> Value {
    if let Ok(i) = raw.parse::<i64>() {
        return Value::from(i);
    }
    match Cell::parse(raw) {
        Cell::Number(v) => serde_json::Number::from_f64(v)
            .map(Value::Number)
            .unwrap_or_else(|| Value::String(raw.to_string())),
        _ => Value::String(raw.to_string()),
    }
}

/// Borrowed view of one column.
#[derive(Debug, Clone, Copy)]
pub struct Column<'a> {
    table: &'a Table,
    idx: usize,
}

impl<'a> Column<'a> {
    pub fn name(&self) -> &'a str {
        let table: &'a Table = self.table;
        &table.headers[self.idx]
    }

    pub fn values(&self) -> impl Iterator<Item = &'a str> + 'a {
        let table: &'a Table = self.table;
        let idx = self.idx;
        table.rows.iter().map(move |row| row[idx].as_str())
    }

    /// Each value parsed as a numeric cell.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + 'a {
        self.values().map(Cell::parse)
    }
}

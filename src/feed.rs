// src/feed.rs

//! Where the table's initial rows come from: a built-in sample universe, or
//! the documented delimited-text alternative (header `Symbol,Price,PE,Group`,
//! the shape of <https://tranduythanh.com/datasets/SampleData2.csv>).

use crate::error::{Result, StoreError};
use crate::table::StockTable;
use crate::types::Row;
use serde::Deserialize;
use std::fs::File;
use std::io;
use std::path::PathBuf;

/// The source consumed once at startup.
#[derive(Debug, Clone)]
pub enum TableSource {
    /// The built-in eight-row sample universe.
    Seed,
    /// A CSV file with a `Symbol,Price,PE,Group` header row.
    CsvFile(PathBuf),
}

/// One record of the delimited feed. USD is derived, never read from disk.
#[derive(Debug, Deserialize)]
struct FeedRecord {
    #[serde(rename = "Symbol")]
    symbol: String,
    #[serde(rename = "Price")]
    price: f64,
    #[serde(rename = "PE")]
    pe_ratio: f64,
    #[serde(rename = "Group")]
    group: String,
}

/// The sample universe the dashboard boots with when no feed is given.
pub fn seed_rows() -> Vec<Row> {
    vec![
        Row::new("AAPL", 180.5, 28.5, "Tech"),
        Row::new("MSFT", 350.2, 32.1, "Tech"),
        Row::new("GOOGL", 140.8, 25.7, "Tech"),
        Row::new("AMZN", 130.5, 40.2, "Retail"),
        Row::new("META", 300.7, 22.3, "Tech"),
        Row::new("TSLA", 250.3, 60.5, "Auto"),
        Row::new("NVDA", 450.2, 45.8, "Tech"),
        Row::new("JPM", 140.6, 12.3, "Finance"),
    ]
}

/// Reads feed records from any reader and builds rows with their derived
/// USD column. Split from the file handling so tests can feed byte slices.
pub fn read_csv_rows<R: io::Read>(reader: R) -> Result<Vec<Row>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut rows = Vec::new();
    for record in csv_reader.deserialize::<FeedRecord>() {
        let record = record
            .map_err(|err| StoreError::LoadFailure(format!("failed to parse feed row: {err}")))?;
        rows.push(Row::new(
            record.symbol,
            record.price,
            record.pe_ratio,
            record.group,
        ));
    }
    Ok(rows)
}

fn load_rows(source: &TableSource) -> Result<Vec<Row>> {
    match source {
        TableSource::Seed => Ok(seed_rows()),
        TableSource::CsvFile(path) => {
            let file = File::open(path).map_err(|err| {
                StoreError::LoadFailure(format!("failed to open feed {}: {err}", path.display()))
            })?;
            read_csv_rows(file)
        }
    }
}

/// Loads the startup table. On *any* failure this logs a warning and
/// returns an empty table instead of failing the caller; the column schema
/// lives in the types, so downstream rendering never special-cases a
/// missing dataset.
pub fn load_table(source: &TableSource) -> StockTable {
    match load_rows(source) {
        Ok(rows) => {
            tracing::info!(rows = rows.len(), "table loaded");
            StockTable::from_rows(rows)
        }
        Err(err) => {
            tracing::warn!(%err, "falling back to an empty table");
            StockTable::new()
        }
    }
}

// src/lib.rs

// === 1. Declare all the top-level modules ===
pub mod config;
pub mod error;
pub mod feed;
pub mod stats;
pub mod table;
pub mod types;

// === 2. Re-export the public-facing components to create a clean API ===

// --- From `types` ---
pub use types::row::{COLUMNS, Row, RowDraft};

// --- From the `table` store ---
pub use table::StockTable;

// --- From `stats` ---
pub use stats::summary::{AggregateReport, GroupAggregate, Statistic, summarize};

// --- From `feed` ---
pub use feed::{TableSource, load_table, read_csv_rows, seed_rows};

// --- From `error` ---
pub use error::{Result, StoreError};

// src/table.rs

use crate::error::{Result, StoreError};
use crate::stats::{AggregateReport, Statistic, summarize};
use crate::types::{Row, RowDraft};

/// The tabular store. It owns the ordered rows and implements every
/// mutation and query the dashboard needs; the GUI never touches the rows
/// directly, so the derived USD column can't go stale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StockTable {
    rows: Vec<Row>,
}

impl StockTable {
    /// An empty table. The column schema lives in the `Row` type (and the
    /// `COLUMNS` header const), so "empty" is still fully shaped.
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn from_rows(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Appends an already-built row, used by the feed loader and benches.
    /// User input goes through `add` instead.
    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Halves the price of every row whose symbol matches exactly and
    /// recomputes their USD column. Returns how many rows were touched.
    ///
    /// Exact match only; a blank symbol is invalid input and zero matches
    /// is not-found, in both cases without touching the table.
    pub fn halve_price(&mut self, symbol: &str) -> Result<usize> {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return Err(StoreError::InvalidInput(
                "Please enter a symbol to search.".to_string(),
            ));
        }

        let mut matched = 0;
        for row in self.rows.iter_mut().filter(|row| row.symbol == symbol) {
            row.set_price(row.price / 2.0);
            matched += 1;
        }

        if matched == 0 {
            return Err(StoreError::NotFound(symbol.to_string()));
        }
        tracing::debug!(symbol, matched, "halved price");
        Ok(matched)
    }

    /// Validates the draft and appends the new row at the end. A rejected
    /// draft leaves the table exactly as it was. Duplicate symbols are
    /// permitted by design; symbols are a lookup key, not a primary key.
    pub fn add(&mut self, draft: &RowDraft) -> Result<&Row> {
        let row = draft.parse()?;
        tracing::debug!(symbol = %row.symbol, price = row.price, "adding row");
        self.rows.push(row);
        Ok(self.rows.last().unwrap())
    }

    /// Removes every row whose symbol matches exactly. Returns how many
    /// rows were removed; an unchanged table is reported as not-found.
    pub fn delete(&mut self, symbol: &str) -> Result<usize> {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return Err(StoreError::InvalidInput(
                "Please enter a symbol to delete.".to_string(),
            ));
        }

        let before = self.rows.len();
        self.rows.retain(|row| row.symbol != symbol);
        let removed = before - self.rows.len();

        if removed == 0 {
            return Err(StoreError::NotFound(symbol.to_string()));
        }
        tracing::debug!(symbol, removed, "deleted rows");
        Ok(removed)
    }

    /// Reorders the whole table by ascending price. The sort is stable, so
    /// equal prices keep their relative order, and `total_cmp` keeps it
    /// total even if a feed ever smuggles in a non-finite price.
    pub fn sort_by_price(&mut self) {
        self.rows.sort_by(|a, b| a.price.total_cmp(&b.price));
    }

    /// Groups rows by sector and reduces each numeric column with the
    /// chosen statistic. Read-only; the charts and notice render the result.
    pub fn aggregate(&self, statistic: Statistic) -> AggregateReport {
        summarize(&self.rows, statistic)
    }

    /// (symbol, price) pairs for the bar chart, in table order.
    pub fn symbol_prices(&self) -> Vec<(String, f64)> {
        self.rows
            .iter()
            .map(|row| (row.symbol.clone(), row.price))
            .collect()
    }

    /// Rows per sector for the pie chart, in first-appearance order.
    pub fn group_counts(&self) -> Vec<(String, usize)> {
        let mut counts: Vec<(String, usize)> = Vec::new();
        for row in &self.rows {
            match counts.iter_mut().find(|(label, _)| label == &row.group) {
                Some((_, n)) => *n += 1,
                None => counts.push((row.group.clone(), 1)),
            }
        }
        counts
    }
}

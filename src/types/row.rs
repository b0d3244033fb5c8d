// src/types/row.rs

use crate::config::USD_DIVISOR;
use crate::error::{Result, StoreError};

/// Column headers of the rendered grid, in display order. The schema exists
/// independently of the rows, so an empty table still renders its header.
pub const COLUMNS: [&str; 5] = ["Symbol", "Price", "PE", "Group", "USD"];

/// One security's record.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Ticker (e.g. "AAPL"). Acts as the lookup key for search/delete, but
    /// duplicates are permitted, so every matching row is affected together.
    pub symbol: String,
    /// Last price, non-negative.
    pub price: f64,
    /// Price/earnings ratio, any sign.
    pub pe_ratio: f64,
    /// Sector label used for aggregation and the pie chart.
    pub group: String,
    /// Derived column, always `price / USD_DIVISOR`. Mutate `price` through
    /// `set_price` so this never goes stale.
    pub usd_price: f64,
}

impl Row {
    pub fn new<T1: Into<String>, T2: Into<String>>(
        symbol: T1,
        price: f64,
        pe_ratio: f64,
        group: T2,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            price,
            pe_ratio,
            group: group.into(),
            usd_price: price / USD_DIVISOR,
        }
    }

    /// Updates the price and recomputes the derived USD column in lockstep.
    pub fn set_price(&mut self, price: f64) {
        self.price = price;
        self.usd_price = price / USD_DIVISOR;
    }
}

/// The four raw text fields of the "add" form, exactly as typed. Parsing and
/// validation happen in one place so a rejected draft never half-mutates the
/// table.
#[derive(Debug, Clone, Default)]
pub struct RowDraft {
    pub symbol: String,
    pub price: String,
    pub pe_ratio: String,
    pub group: String,
}

impl RowDraft {
    /// Validates the draft and builds the `Row` with its derived USD column.
    ///
    /// All four fields must be non-blank after trimming; price and PE must
    /// parse as numbers; price must be non-negative.
    pub fn parse(&self) -> Result<Row> {
        let symbol = self.symbol.trim();
        let price_text = self.price.trim();
        let pe_text = self.pe_ratio.trim();
        let group = self.group.trim();

        if symbol.is_empty() || price_text.is_empty() || pe_text.is_empty() || group.is_empty() {
            return Err(StoreError::InvalidInput(
                "All fields are required.".to_string(),
            ));
        }

        let numeric = |text: &str| {
            text.parse::<f64>().map_err(|_| {
                StoreError::InvalidInput("Price and PE must be numeric values.".to_string())
            })
        };
        let price = numeric(price_text)?;
        let pe_ratio = numeric(pe_text)?;

        if !price.is_finite() || price < 0.0 {
            return Err(StoreError::InvalidInput(
                "Price must be a non-negative number.".to_string(),
            ));
        }

        Ok(Row::new(symbol, price, pe_ratio, group))
    }

    /// Empties all four fields, used after a successful add.
    pub fn clear(&mut self) {
        self.symbol.clear();
        self.price.clear();
        self.pe_ratio.clear();
        self.group.clear();
    }
}

// -----------------------------------------------------------------------------
//  Unit tests: Row derivation and draft validation
// -----------------------------------------------------------------------------
#[cfg(test)]
mod tests {
    use super::*;

    fn draft(symbol: &str, price: &str, pe: &str, group: &str) -> RowDraft {
        RowDraft {
            symbol: symbol.to_string(),
            price: price.to_string(),
            pe_ratio: pe.to_string(),
            group: group.to_string(),
        }
    }

    #[test]
    fn new_row_derives_usd() {
        let row = Row::new("AAPL", 180.5, 28.5, "Tech");
        assert_eq!(row.usd_price, 180.5 / 23.0);
    }

    #[test]
    fn set_price_recomputes_usd() {
        let mut row = Row::new("AAPL", 180.5, 28.5, "Tech");
        row.set_price(90.25);
        assert_eq!(row.price, 90.25);
        assert_eq!(row.usd_price, 90.25 / 23.0);
    }

    #[test]
    fn parse_builds_a_row_with_derived_usd() {
        let row = draft("XOM", "110.0", "15.2", "Energy").parse().unwrap();
        assert_eq!(row.symbol, "XOM");
        assert_eq!(row.price, 110.0);
        assert_eq!(row.pe_ratio, 15.2);
        assert_eq!(row.group, "Energy");
        assert_eq!(row.usd_price, 110.0 / 23.0);
    }

    #[test]
    fn parse_trims_whitespace() {
        let row = draft("  XOM ", " 110.0", "15.2 ", " Energy  ").parse().unwrap();
        assert_eq!(row.symbol, "XOM");
        assert_eq!(row.group, "Energy");
    }

    #[test]
    fn parse_rejects_blank_fields() {
        for bad in [
            draft("", "110.0", "15.2", "Energy"),
            draft("XOM", "   ", "15.2", "Energy"),
            draft("XOM", "110.0", "", "Energy"),
            draft("XOM", "110.0", "15.2", "  "),
        ] {
            let err = bad.parse().unwrap_err();
            assert!(
                matches!(err, StoreError::InvalidInput(_)),
                "blank field should be invalid input, got {:?}",
                err
            );
        }
    }

    #[test]
    fn parse_rejects_non_numeric_price_and_pe() {
        assert!(matches!(
            draft("XOM", "abc", "15.2", "Energy").parse(),
            Err(StoreError::InvalidInput(_))
        ));
        assert!(matches!(
            draft("XOM", "110.0", "cheap", "Energy").parse(),
            Err(StoreError::InvalidInput(_))
        ));
    }

    #[test]
    fn parse_rejects_negative_price_but_allows_negative_pe() {
        assert!(matches!(
            draft("XOM", "-1.0", "15.2", "Energy").parse(),
            Err(StoreError::InvalidInput(_))
        ));
        // Loss-making companies have a negative P/E; that is legal.
        let row = draft("XOM", "110.0", "-3.4", "Energy").parse().unwrap();
        assert_eq!(row.pe_ratio, -3.4);
    }

    #[test]
    fn clear_empties_every_field() {
        let mut d = draft("XOM", "110.0", "15.2", "Energy");
        d.clear();
        assert!(d.symbol.is_empty());
        assert!(d.price.is_empty());
        assert!(d.pe_ratio.is_empty());
        assert!(d.group.is_empty());
    }
}

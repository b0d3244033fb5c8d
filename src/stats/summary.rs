// src/stats/summary.rs

//! Group-by aggregation over the table's numeric columns.

use crate::error::StoreError;
use crate::types::Row;
use statrs::statistics::Statistics;
use std::fmt;
use std::str::FromStr;

/// The closed set of reductions the dashboard can run per group. Keeping
/// this an enum means an "unknown statistic" can only exist at the text
/// boundary (`FromStr`), never inside the aggregation itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statistic {
    Mean,
    Sum,
    Count,
    Min,
    Max,
}

impl Statistic {
    /// Every statistic, in the order the combo box offers them.
    pub const ALL: [Statistic; 5] = [
        Statistic::Mean,
        Statistic::Sum,
        Statistic::Count,
        Statistic::Min,
        Statistic::Max,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Statistic::Mean => "mean",
            Statistic::Sum => "sum",
            Statistic::Count => "count",
            Statistic::Min => "min",
            Statistic::Max => "max",
        }
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Statistic {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mean" => Ok(Statistic::Mean),
            "sum" => Ok(Statistic::Sum),
            "count" => Ok(Statistic::Count),
            "min" => Ok(Statistic::Min),
            "max" => Ok(Statistic::Max),
            other => Err(StoreError::InvalidInput(format!(
                "Unknown statistic '{other}'."
            ))),
        }
    }
}

/// One group's reduced numeric columns. For `Count` every column carries the
/// row count, mirroring how a per-column count behaves on a dense table.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupAggregate {
    pub group: String,
    pub price: f64,
    pub pe_ratio: f64,
    pub usd_price: f64,
}

/// The full aggregation result, one entry per group in the order the groups
/// first appear in the table.
#[derive(Debug, Clone)]
pub struct AggregateReport {
    pub statistic: Statistic,
    pub groups: Vec<GroupAggregate>,
}

/// Groups rows by their sector label and reduces each numeric column with
/// the chosen statistic.
pub fn summarize(rows: &[Row], statistic: Statistic) -> AggregateReport {
    // Bucket rows per group, keeping first-appearance order. The group count
    // is a handful, so a linear scan beats a map that would lose the order.
    let mut buckets: Vec<(String, Vec<&Row>)> = Vec::new();
    for row in rows {
        match buckets.iter_mut().find(|(label, _)| label == &row.group) {
            Some((_, members)) => members.push(row),
            None => buckets.push((row.group.clone(), vec![row])),
        }
    }

    let groups = buckets
        .into_iter()
        .map(|(label, members)| {
            let column = |pick: fn(&Row) -> f64| -> Vec<f64> {
                members.iter().map(|row| pick(row)).collect()
            };
            GroupAggregate {
                price: reduce(statistic, &column(|row| row.price)),
                pe_ratio: reduce(statistic, &column(|row| row.pe_ratio)),
                usd_price: reduce(statistic, &column(|row| row.usd_price)),
                group: label,
            }
        })
        .collect();

    AggregateReport { statistic, groups }
}

fn reduce(statistic: Statistic, values: &[f64]) -> f64 {
    match statistic {
        Statistic::Mean => values.mean(),
        Statistic::Sum => values.iter().sum(),
        Statistic::Count => values.len() as f64,
        Statistic::Min => values.min(),
        Statistic::Max => values.max(),
    }
}

impl fmt::Display for AggregateReport {
    /// Renders the aligned text table the notice window shows. Counts print
    /// as whole numbers, everything else with two decimals.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<12} {:>10} {:>10} {:>10}", "Group", "Price", "PE", "USD")?;
        for entry in &self.groups {
            if self.statistic == Statistic::Count {
                writeln!(
                    f,
                    "{:<12} {:>10.0} {:>10.0} {:>10.0}",
                    entry.group, entry.price, entry.pe_ratio, entry.usd_price
                )?;
            } else {
                writeln!(
                    f,
                    "{:<12} {:>10.2} {:>10.2} {:>10.2}",
                    entry.group, entry.price, entry.pe_ratio, entry.usd_price
                )?;
            }
        }
        Ok(())
    }
}

// src/stats/mod.rs

pub mod summary;

// Make the important types available from the parent `stats` module.
pub use summary::{AggregateReport, GroupAggregate, Statistic, summarize};

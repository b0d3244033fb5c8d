// src/types/mod.rs

pub mod row;

pub use row::{COLUMNS, Row, RowDraft};

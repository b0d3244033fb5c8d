// src/config.rs

//! A centralized place for the dashboard's fixed constants.

// --- Data model ---
// The USD column is always derived as `price / USD_DIVISOR`; it is never
// entered by the user and never read back from a feed.
pub const USD_DIVISOR: f64 = 23.0;

// --- Window ---
pub const WINDOW_TITLE: &str = "Stock Analysis Dashboard";
pub const WINDOW_WIDTH: f32 = 1200.0;
pub const WINDOW_HEIGHT: f32 = 800.0;

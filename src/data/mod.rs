//! Data module - CSV loading and totals

mod loader;
mod totals;

pub use loader::{load_records, parse_records, read_records, LoadError, Record};
pub use totals::{calculate_totals, Totals};

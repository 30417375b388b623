//! Shared utilities for the play-by-play crates.
//!
//! This crate provides the input-contract checks every public pipeline step
//! runs first, a few expression builders over the `Event` column, and
//! Polars `AnyValue` helpers.

pub mod contract;
pub mod expr;
pub mod values;

// Re-export commonly used functions at crate root for convenience
pub use contract::{
    coerce_id_columns, float_column, has_column, require_columns, require_numeric,
};
pub use expr::{event_in, event_is, indicator};
pub use values::{any_to_string, i64_values};

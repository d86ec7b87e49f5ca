//! Storage layer for family-expense
//!
//! The expense store is owned elsewhere; this layer only reads a snapshot
//! of it and writes generated report artifacts with atomic renames.

pub mod file_io;
pub mod snapshot;

pub use file_io::{read_json, write_bytes_atomic};
pub use snapshot::ExpenseSnapshot;

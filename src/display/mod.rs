//! Display formatting for terminal output
//!
//! Fixed-width text blocks; widths are part of the output format and must
//! not change.

pub mod category;

pub use category::{format_ledger, format_ledgers};

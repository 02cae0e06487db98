//! Export functionality for budget-ledger
//!
//! Machine-readable snapshots of a budget's ledgers and spend shares.

pub mod json;

pub use json::{CategoryExport, LedgerExport, EXPORT_SCHEMA_VERSION};

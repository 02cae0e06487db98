//! Core data models for budget-ledger
//!
//! Categories with their append-only ledgers, and the cents-based money type.

pub mod category;
pub mod money;

pub use category::{Category, LedgerEntry};
pub use money::{Money, MoneyParseError};

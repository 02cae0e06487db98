//! Service layer for budget-ledger
//!
//! Name-based operations over a set of categories, and replay of scenario
//! documents against them.

pub mod budget;
pub mod scenario;

pub use budget::Budget;
pub use scenario::{Operation, Replay, Scenario};

//! Reports module for budget-ledger
//!
//! Provides the spend chart: each category's share of total withdrawals.

pub mod spend_chart;

pub use spend_chart::{create_spend_chart, SpendChart, SpendShare, ZeroSpendPolicy};

//! budget-ledger - budget categories with append-only ledgers
//!
//! Each [`Category`] records deposits and withdrawals in an ordered ledger and
//! derives its balance from it. Funds move between categories with
//! [`Category::transfer`], and [`create_spend_chart`] renders each category's
//! share of total withdrawals as a text bar chart.
//!
//! # Architecture
//!
//! - `models`: `Category`, `LedgerEntry`, `Money`
//! - `display`: the fixed-width ledger block
//! - `reports`: the spend chart
//! - `services`: name-addressed `Budget` and scenario replay
//! - `export`: JSON snapshots
//! - `config`: paths and settings
//! - `error`: custom error types
//!
//! # Example
//!
//! ```
//! use budget_ledger::{create_spend_chart, Category, Money};
//!
//! let mut food = Category::new("Food");
//! food.deposit(Money::from_dollars(1000), "deposit");
//! assert!(food.withdraw(Money::from_cents(1015), "groceries"));
//!
//! let mut clothing = Category::new("Clothing");
//! assert!(food.transfer(Money::from_dollars(50), &mut clothing));
//! assert_eq!(food.balance(), Money::from_cents(93_985));
//!
//! let chart = create_spend_chart(&[food, clothing]);
//! assert!(chart.starts_with("Percentage spent by category"));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;

pub use error::{BudgetError, BudgetResult};
pub use models::{Category, LedgerEntry, Money};
pub use reports::create_spend_chart;

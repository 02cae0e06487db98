//! Category and LedgerEntry models
//!
//! A category is a named budget bucket that owns an append-only ledger.
//! Its balance is always derived from the ledger, never stored.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

use super::money::Money;
use crate::display::category::format_ledger;

/// One line of a category ledger
///
/// Deposits carry positive amounts, withdrawals negative ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Signed amount
    pub amount: Money,

    /// Free-form description, possibly empty
    #[serde(default)]
    pub description: String,
}

impl LedgerEntry {
    pub fn new(amount: Money, description: impl Into<String>) -> Self {
        Self {
            amount,
            description: description.into(),
        }
    }

    /// Whether this entry is money leaving the category
    pub fn is_withdrawal(&self) -> bool {
        self.amount.is_negative()
    }
}

/// A named budget category with its own ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    name: String,
    ledger: Vec<LedgerEntry>,
}

impl Category {
    /// Create a new category with an empty ledger
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ledger: Vec::new(),
        }
    }

    /// Category name, fixed at construction
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ledger entries in insertion order
    pub fn ledger(&self) -> &[LedgerEntry] {
        &self.ledger
    }

    /// Append a deposit
    ///
    /// The amount is recorded as given; a negative deposit lowers the balance.
    pub fn deposit(&mut self, amount: Money, description: impl Into<String>) {
        self.append(LedgerEntry::new(amount, description));
    }

    /// Append a withdrawal if the balance covers it
    ///
    /// Returns `false` and leaves the ledger untouched when funds are short.
    pub fn withdraw(&mut self, amount: Money, description: impl Into<String>) -> bool {
        if !self.check_funds(amount) {
            warn!(
                category = %self.name,
                amount = %amount,
                balance = %self.balance(),
                "withdrawal rejected: insufficient funds"
            );
            return false;
        }

        self.append(LedgerEntry::new(-amount, description));
        true
    }

    /// Move `amount` into `target`
    ///
    /// On success this category gets a `Transfer to <target>` withdrawal and
    /// the target gets a `Transfer from <self>` deposit. On failure neither
    /// ledger changes.
    pub fn transfer(&mut self, amount: Money, target: &mut Category) -> bool {
        if !self.check_funds(amount) {
            warn!(
                from = %self.name,
                to = %target.name,
                amount = %amount,
                "transfer rejected: insufficient funds"
            );
            return false;
        }

        let withdrawn = self.withdraw(amount, format!("Transfer to {}", target.name));
        debug_assert!(withdrawn, "funds were checked immediately before");
        target.deposit(amount, format!("Transfer from {}", self.name));
        true
    }

    /// Sum of all ledger amounts
    pub fn balance(&self) -> Money {
        self.ledger.iter().map(|entry| entry.amount).sum()
    }

    /// Whether the current balance covers `amount`
    pub fn check_funds(&self, amount: Money) -> bool {
        self.balance() >= amount
    }

    /// Total withdrawn, as a non-negative amount; deposits are ignored
    pub fn spent(&self) -> Money {
        self.ledger
            .iter()
            .filter(|entry| entry.is_withdrawal())
            .map(|entry| entry.amount.abs())
            .sum()
    }

    /// The 30-column ledger block (title, one line per entry, total)
    pub fn render(&self) -> String {
        format_ledger(self)
    }

    fn append(&mut self, entry: LedgerEntry) {
        debug!(
            category = %self.name,
            amount = %entry.amount,
            description = %entry.description,
            "ledger entry appended"
        );
        self.ledger.push(entry);
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

//! Budget service
//!
//! A `Budget` is an ordered set of uniquely named categories. It resolves
//! categories by name and performs ledger operations on them, including
//! transfers that need two categories mutably at once.

use tracing::info;

use crate::display::category::format_ledgers;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Category, Money};
use crate::reports::{SpendChart, ZeroSpendPolicy};

/// Ordered collection of categories, addressed by name
#[derive(Debug, Clone, Default)]
pub struct Budget {
    categories: Vec<Category>,
}

impl Budget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an empty category; names must be unique
    pub fn add_category(&mut self, name: &str) -> BudgetResult<()> {
        if name.trim().is_empty() {
            return Err(BudgetError::Validation(
                "Category name cannot be empty".into(),
            ));
        }
        if self.position(name).is_some() {
            return Err(BudgetError::duplicate_category(name));
        }

        info!(category = name, "category added");
        self.categories.push(Category::new(name));
        Ok(())
    }

    /// Categories in the order they were added
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn find(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name() == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Category> {
        self.categories.iter_mut().find(|c| c.name() == name)
    }

    pub fn deposit(&mut self, name: &str, amount: Money, description: &str) -> BudgetResult<()> {
        self.get_mut(name)?.deposit(amount, description);
        Ok(())
    }

    /// Withdraw from a named category; `Ok(false)` means insufficient funds
    pub fn withdraw(&mut self, name: &str, amount: Money, description: &str) -> BudgetResult<bool> {
        Ok(self.get_mut(name)?.withdraw(amount, description))
    }

    /// Transfer between two named categories; `Ok(false)` means insufficient funds
    pub fn transfer(&mut self, from: &str, to: &str, amount: Money) -> BudgetResult<bool> {
        let from_idx = self
            .position(from)
            .ok_or_else(|| BudgetError::category_not_found(from))?;
        let to_idx = self
            .position(to)
            .ok_or_else(|| BudgetError::category_not_found(to))?;

        if from_idx == to_idx {
            return Err(BudgetError::Validation(format!(
                "Cannot transfer from '{}' to itself",
                from
            )));
        }

        let (source, target) = pair_mut(&mut self.categories, from_idx, to_idx);
        Ok(source.transfer(amount, target))
    }

    /// Spending shares across all categories
    pub fn spend_chart(&self, policy: ZeroSpendPolicy) -> BudgetResult<SpendChart> {
        SpendChart::build(&self.categories, policy)
    }

    /// Every category's ledger block, separated by newlines
    pub fn render_ledgers(&self) -> String {
        format_ledgers(&self.categories)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.categories.iter().position(|c| c.name() == name)
    }

    fn get_mut(&mut self, name: &str) -> BudgetResult<&mut Category> {
        self.find_mut(name)
            .ok_or_else(|| BudgetError::category_not_found(name))
    }
}

/// Two distinct mutable elements of a slice; `a != b`
fn pair_mut<T>(items: &mut [T], a: usize, b: usize) -> (&mut T, &mut T) {
    if a < b {
        let (left, right) = items.split_at_mut(b);
        (&mut left[a], &mut right[0])
    } else {
        let (left, right) = items.split_at_mut(a);
        (&mut right[0], &mut left[b])
    }
}

//! Spend Chart
//!
//! Aggregates withdrawals per category into a share of total spending and
//! renders it as a fixed-width ASCII bar chart:
//!
//! ```text
//! Percentage spent by category
//! 100|
//!  90|
//! ...
//!   0| o  o  o
//!     ----------
//!      F  C  A
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Category, Money};

/// First line of every chart
pub const CHART_TITLE: &str = "Percentage spent by category";

/// Width of one category column
const CELL_WIDTH: usize = 3;

/// What to do when no category has any withdrawal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ZeroSpendPolicy {
    /// Treat every share as 0%, so only the `0|` row carries markers
    #[default]
    Blank,
    /// Refuse to build the chart
    Reject,
}

/// One category's share of total spending
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpendShare {
    /// Category name
    pub name: String,
    /// Total withdrawn from the category
    pub spent: Money,
    /// `spent / total * 100`, rounded down
    pub percentage: u8,
}

/// Spending shares for an ordered list of categories
#[derive(Debug, Clone)]
pub struct SpendChart {
    shares: Vec<SpendShare>,
    total_spent: Money,
}

impl SpendChart {
    /// Compute spending shares for `categories`, keeping their order
    pub fn build(categories: &[Category], policy: ZeroSpendPolicy) -> BudgetResult<Self> {
        let chart = Self::from_categories(categories);

        if chart.total_spent.is_zero() && policy == ZeroSpendPolicy::Reject && !categories.is_empty()
        {
            return Err(BudgetError::Chart(
                "no withdrawals recorded in any category".into(),
            ));
        }

        Ok(chart)
    }

    /// Shares with zero total spending treated as 0% everywhere
    pub fn from_categories(categories: &[Category]) -> Self {
        let spent: Vec<Money> = categories.iter().map(Category::spent).collect();
        let total_spent: Money = spent.iter().sum();

        let shares = categories
            .iter()
            .zip(spent)
            .map(|(category, spent)| SpendShare {
                name: category.name().to_string(),
                spent,
                percentage: percentage_of(spent, total_spent),
            })
            .collect();

        debug!(
            categories = categories.len(),
            total_spent = %total_spent,
            "spend chart built"
        );

        Self {
            shares,
            total_spent,
        }
    }

    /// Shares in category order
    pub fn shares(&self) -> &[SpendShare] {
        &self.shares
    }

    /// Sum of all withdrawals across the charted categories
    pub fn total_spent(&self) -> Money {
        self.total_spent
    }

    /// Render the chart; the result has no trailing newline
    pub fn render(&self) -> String {
        let mut lines: Vec<String> = Vec::with_capacity(13);
        lines.push(CHART_TITLE.to_string());

        for threshold in (0..=100u8).rev().step_by(10) {
            let mut row = format!("{:>3}|", threshold);
            for share in &self.shares {
                row.push_str(if share.percentage >= threshold {
                    " o "
                } else {
                    "   "
                });
            }
            row.push(' ');
            lines.push(row);
        }

        lines.push(format!(
            "    -{}",
            "-".repeat(CELL_WIDTH * self.shares.len())
        ));

        let names: Vec<Vec<char>> = self
            .shares
            .iter()
            .map(|share| share.name.chars().collect())
            .collect();
        let longest = names.iter().map(Vec::len).max().unwrap_or(0);

        for position in 0..longest {
            let letters: Vec<String> = names
                .iter()
                .map(|name| name.get(position).copied().unwrap_or(' ').to_string())
                .collect();
            lines.push(format!("     {}  ", letters.join("  ")));
        }

        lines.join("\n")
    }
}

/// Build and render a chart, treating zero total spending as all-zero shares
pub fn create_spend_chart(categories: &[Category]) -> String {
    SpendChart::from_categories(categories).render()
}

/// Exact floor of `part * 100 / total` on whole cents
fn percentage_of(part: Money, total: Money) -> u8 {
    if total.is_zero() {
        return 0;
    }

    let percent = i128::from(part.cents()) * 100 / i128::from(total.cents());
    u8::try_from(percent.clamp(0, 100)).unwrap_or(0)
}

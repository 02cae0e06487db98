//! JSON Export functionality
//!
//! Exports every category ledger, its balance and spending, together with
//! the spend chart percentages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{LedgerEntry, Money};
use crate::reports::{SpendChart, SpendShare, ZeroSpendPolicy};
use crate::services::Budget;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// One category in an export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryExport {
    pub name: String,
    pub balance: Money,
    pub spent: Money,
    pub entries: Vec<LedgerEntry>,
}

/// Full ledger export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Categories in budget order
    pub categories: Vec<CategoryExport>,

    /// Sum of all withdrawals
    pub total_spent: Money,

    /// Spend chart shares in budget order
    pub percentages: Vec<SpendShare>,
}

impl LedgerExport {
    /// Snapshot a budget
    pub fn from_budget(budget: &Budget, policy: ZeroSpendPolicy) -> BudgetResult<Self> {
        let chart = budget.spend_chart(policy)?;
        Ok(Self::with_chart(budget, &chart))
    }

    fn with_chart(budget: &Budget, chart: &SpendChart) -> Self {
        let categories = budget
            .categories()
            .iter()
            .map(|category| CategoryExport {
                name: category.name().to_string(),
                balance: category.balance(),
                spent: category.spent(),
                entries: category.ledger().to_vec(),
            })
            .collect();

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            categories,
            total_spent: chart.total_spent(),
            percentages: chart.shares().to_vec(),
        }
    }

    /// Write as pretty-printed JSON
    pub fn write_to<W: Write>(&self, writer: &mut W) -> BudgetResult<()> {
        serde_json::to_writer_pretty(&mut *writer, self)
            .map_err(|e| BudgetError::Export(format!("Failed to write JSON: {}", e)))?;
        writeln!(writer).map_err(|e| BudgetError::Export(e.to_string()))?;
        Ok(())
    }
}

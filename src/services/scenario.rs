//! Scenario replay
//!
//! A scenario is a JSON document naming categories and the ledger operations
//! to apply to them, in order:
//!
//! ```json
//! {
//!   "categories": ["Food", "Clothing"],
//!   "operations": [
//!     {"type": "deposit", "category": "Food", "amount": "1000", "description": "deposit"},
//!     {"type": "transfer", "from": "Food", "to": "Clothing", "amount": "50"}
//!   ]
//! }
//! ```
//!
//! Withdrawals and transfers refused for insufficient funds are not errors;
//! they are reported in the [`Replay`] outcome.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

use super::budget::Budget;
use crate::error::{BudgetError, BudgetResult};
use crate::models::Money;

/// A single ledger operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Operation {
    Deposit {
        category: String,
        amount: Money,
        #[serde(default)]
        description: String,
    },
    Withdraw {
        category: String,
        amount: Money,
        #[serde(default)]
        description: String,
    },
    Transfer {
        from: String,
        to: String,
        amount: Money,
    },
}

/// Categories plus the operations to run against them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub categories: Vec<String>,
    #[serde(default)]
    pub operations: Vec<Operation>,
}

/// Result of replaying a scenario
#[derive(Debug, Clone)]
pub struct Replay {
    /// The budget after every operation has been applied
    pub budget: Budget,
    /// Indices of operations refused for insufficient funds
    pub rejected: Vec<usize>,
}

impl Scenario {
    /// Parse a scenario from JSON text
    pub fn from_json(text: &str) -> BudgetResult<Self> {
        serde_json::from_str(text)
            .map_err(|e| BudgetError::Json(format!("Failed to parse scenario: {}", e)))
    }

    /// Read and parse a scenario file
    pub fn load(path: &Path) -> BudgetResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            BudgetError::Io(format!(
                "Failed to read scenario {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json(&text)
    }

    /// Food, Clothing and Auto: the budget used by `budget demo`
    pub fn reference() -> Self {
        let deposit = |category: &str, cents: i64, description: &str| Operation::Deposit {
            category: category.to_string(),
            amount: Money::from_cents(cents),
            description: description.to_string(),
        };
        let withdraw = |category: &str, cents: i64, description: &str| Operation::Withdraw {
            category: category.to_string(),
            amount: Money::from_cents(cents),
            description: description.to_string(),
        };

        Self {
            categories: vec!["Food".into(), "Clothing".into(), "Auto".into()],
            operations: vec![
                deposit("Food", 100_000, "deposit"),
                withdraw("Food", 1015, "groceries"),
                withdraw("Food", 1589, "restaurant and more food for dessert"),
                Operation::Transfer {
                    from: "Food".into(),
                    to: "Clothing".into(),
                    amount: Money::from_dollars(50),
                },
                deposit("Auto", 100_000, "deposit"),
                withdraw("Auto", 15_000, "car repair"),
            ],
        }
    }

    /// Build a fresh budget and apply every operation in order
    ///
    /// Stops at the first operation naming an unknown category.
    pub fn replay(&self) -> BudgetResult<Replay> {
        let mut budget = Budget::new();
        for name in &self.categories {
            budget.add_category(name)?;
        }

        let mut rejected = Vec::new();
        for (index, operation) in self.operations.iter().enumerate() {
            let applied = match operation {
                Operation::Deposit {
                    category,
                    amount,
                    description,
                } => {
                    budget.deposit(category, *amount, description)?;
                    true
                }
                Operation::Withdraw {
                    category,
                    amount,
                    description,
                } => budget.withdraw(category, *amount, description)?,
                Operation::Transfer { from, to, amount } => budget.transfer(from, to, *amount)?,
            };

            if !applied {
                warn!(operation = index, "operation refused: insufficient funds");
                rejected.push(index);
            }
        }

        info!(
            categories = self.categories.len(),
            operations = self.operations.len(),
            rejected = rejected.len(),
            "scenario replayed"
        );

        Ok(Replay { budget, rejected })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_reference_replay() {
        let replay = Scenario::reference().replay().unwrap();
        let budget = &replay.budget;

        assert!(replay.rejected.is_empty());
        assert_eq!(budget.find("Food").unwrap().balance(), Money::from_cents(92_396));
        assert_eq!(budget.find("Clothing").unwrap().balance(), Money::from_dollars(50));
        assert_eq!(budget.find("Auto").unwrap().balance(), Money::from_dollars(850));
    }

    #[test]
    fn test_parse_scenario() {
        let scenario = Scenario::from_json(
            r#"{
                "categories": ["Food", "Clothing"],
                "operations": [
                    {"type": "deposit", "category": "Food", "amount": 1000, "description": "deposit"},
                    {"type": "withdraw", "category": "Food", "amount": "10.15"},
                    {"type": "transfer", "from": "Food", "to": "Clothing", "amount": "50"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(scenario.operations.len(), 3);
        assert_eq!(
            scenario.operations[1],
            Operation::Withdraw {
                category: "Food".into(),
                amount: Money::from_cents(1015),
                description: String::new(),
            }
        );
    }

    #[test]
    fn test_operations_are_optional() {
        let scenario = Scenario::from_json(r#"{"categories": ["Food"]}"#).unwrap();
        let replay = scenario.replay().unwrap();
        assert_eq!(replay.budget.categories().len(), 1);
    }

    #[test]
    fn test_rejected_operations_are_recorded() {
        let scenario = Scenario::from_json(
            r#"{
                "categories": ["Food", "Auto"],
                "operations": [
                    {"type": "withdraw", "category": "Food", "amount": "1"},
                    {"type": "deposit", "category": "Food", "amount": "5"},
                    {"type": "transfer", "from": "Food", "to": "Auto", "amount": "6"},
                    {"type": "transfer", "from": "Food", "to": "Auto", "amount": "5"}
                ]
            }"#,
        )
        .unwrap();

        let replay = scenario.replay().unwrap();
        assert_eq!(replay.rejected, vec![0, 2]);
        assert_eq!(replay.budget.find("Auto").unwrap().balance(), Money::from_dollars(5));
    }

    #[test]
    fn test_unknown_category_fails_replay() {
        let scenario = Scenario::from_json(
            r#"{"categories": ["Food"], "operations": [{"type": "deposit", "category": "Rent", "amount": "1"}]}"#,
        )
        .unwrap();

        assert!(scenario.replay().unwrap_err().is_not_found());
    }

    #[test]
    fn test_bad_amount_is_json_error() {
        let err = Scenario::from_json(
            r#"{"categories": ["Food"], "operations": [{"type": "deposit", "category": "Food", "amount": "ten"}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, BudgetError::Json(_)));
    }

    #[test]
    fn test_oversized_amounts_are_refused_at_parse() {
        let err = Scenario::from_json(
            r#"{
                "categories": ["Food"],
                "operations": [
                    {"type": "deposit", "category": "Food", "amount": "90000000000000000"},
                    {"type": "deposit", "category": "Food", "amount": "90000000000000000"}
                ]
            }"#,
        )
        .unwrap_err();

        assert!(matches!(err, BudgetError::Json(_)));
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_largest_amounts_replay_without_overflow() {
        let scenario = Scenario::from_json(
            r#"{
                "categories": ["Food"],
                "operations": [
                    {"type": "deposit", "category": "Food", "amount": "10000000000000"},
                    {"type": "deposit", "category": "Food", "amount": "10000000000000"}
                ]
            }"#,
        )
        .unwrap();

        let replay = scenario.replay().unwrap();
        assert_eq!(
            replay.budget.find("Food").unwrap().balance().cents(),
            2 * Money::MAX_ABS_CENTS
        );
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("scenario.json");
        let json = serde_json::to_string(&Scenario::reference()).unwrap();
        std::fs::write(&path, json).unwrap();

        let loaded = Scenario::load(&path).unwrap();
        assert_eq!(loaded, Scenario::reference());
    }

    #[test]
    fn test_load_missing_file() {
        let err = Scenario::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, BudgetError::Io(_)));
    }
}

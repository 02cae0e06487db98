//! User settings for budget-ledger
//!
//! Settings live in a small JSON file. Every field has a default, so a
//! missing file or a partial file both load cleanly.

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::paths::BudgetPaths;
use crate::error::BudgetError;
use crate::reports::ZeroSpendPolicy;

/// User settings for budget-ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// How the spend chart treats a budget with no withdrawals
    #[serde(default)]
    pub zero_spend_policy: ZeroSpendPolicy,

    /// `tracing` filter used when `RUST_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            zero_spend_policy: ZeroSpendPolicy::default(),
            log_filter: default_log_filter(),
        }
    }
}

impl Settings {
    /// Load settings from the default location, or fall back to defaults if
    /// the file doesn't exist
    pub fn load_or_create(paths: &BudgetPaths) -> Result<Self, BudgetError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            Self::load_from(&settings_path)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Load settings from an explicit file; the file must exist
    pub fn load_from(path: &Path) -> Result<Self, BudgetError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            BudgetError::Io(format!(
                "Failed to read settings file {}: {}",
                path.display(),
                e
            ))
        })?;

        serde_json::from_str(&contents).map_err(|e| {
            BudgetError::Config(format!("Failed to parse settings file: {}", e))
        })
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BudgetPaths) -> Result<(), BudgetError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            BudgetError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            BudgetError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}

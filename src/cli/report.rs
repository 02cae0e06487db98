//! CLI commands for reports
//!
//! Replays a scenario file and prints every ledger followed by the spend
//! chart, or exports the same data as JSON.

use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use crate::config::Settings;
use crate::error::{BudgetError, BudgetResult};
use crate::export::LedgerExport;
use crate::services::{Budget, Scenario};

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    /// Ledger blocks and the spend chart
    #[default]
    Text,
    /// Pretty-printed JSON export
    Json,
}

/// Arguments for `budget report`
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Scenario file (JSON)
    pub scenario: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle the report command
pub fn handle_report_command(settings: &Settings, args: ReportArgs) -> BudgetResult<()> {
    let scenario = Scenario::load(&args.scenario)?;
    let replay = scenario.replay()?;

    if !replay.rejected.is_empty() {
        eprintln!(
            "{} operation(s) refused for insufficient funds: {:?}",
            replay.rejected.len(),
            replay.rejected
        );
    }

    match args.output {
        Some(path) => {
            let file = File::create(&path).map_err(|e| {
                BudgetError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_report(&replay.budget, settings, args.format, &mut writer)?;
            writer
                .flush()
                .map_err(|e| BudgetError::Export(e.to_string()))?;
            println!("Report written to: {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = stdout.lock();
            write_report(&replay.budget, settings, args.format, &mut writer)?;
        }
    }

    Ok(())
}

/// Write a budget in the requested format
pub fn write_report<W: Write>(
    budget: &Budget,
    settings: &Settings,
    format: ReportFormat,
    writer: &mut W,
) -> BudgetResult<()> {
    match format {
        ReportFormat::Text => {
            let text = format_text_report(budget, settings)?;
            writeln!(writer, "{}", text).map_err(|e| BudgetError::Export(e.to_string()))
        }
        ReportFormat::Json => {
            LedgerExport::from_budget(budget, settings.zero_spend_policy)?.write_to(writer)
        }
    }
}

/// Every ledger block followed by the spend chart, one block per line group
pub fn format_text_report(budget: &Budget, settings: &Settings) -> BudgetResult<String> {
    let chart = budget.spend_chart(settings.zero_spend_policy)?;

    let mut output = budget.render_ledgers();
    if !output.is_empty() {
        output.push('\n');
    }
    output.push_str(&chart.render());

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::ZeroSpendPolicy;
    use tempfile::TempDir;

    #[test]
    fn test_text_report_layout() {
        let replay = Scenario::reference().replay().unwrap();
        let report = format_text_report(&replay.budget, &Settings::default()).unwrap();

        assert!(report.starts_with("*************Food*************\n"));
        assert!(report.contains("Total: 923.96\n***********Clothing***********"));
        assert!(report.contains("Total: 850.00\nPercentage spent by category\n"));
        assert!(report.ends_with("        g     "));
    }

    #[test]
    fn test_text_report_reject_policy() {
        let mut budget = Budget::new();
        budget.add_category("Food").unwrap();
        let settings = Settings {
            zero_spend_policy: ZeroSpendPolicy::Reject,
            ..Settings::default()
        };

        assert!(format_text_report(&budget, &settings).is_err());
    }

    #[test]
    fn test_json_report() {
        let replay = Scenario::reference().replay().unwrap();
        let mut buffer = Vec::new();
        write_report(&replay.budget, &Settings::default(), ReportFormat::Json, &mut buffer).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["total_spent"], "226.04");
    }

    #[test]
    fn test_report_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let scenario_path = temp_dir.path().join("scenario.json");
        std::fs::write(
            &scenario_path,
            serde_json::to_string(&Scenario::reference()).unwrap(),
        )
        .unwrap();
        let output = temp_dir.path().join("report.txt");

        handle_report_command(
            &Settings::default(),
            ReportArgs {
                scenario: scenario_path,
                format: ReportFormat::Text,
                output: Some(output.clone()),
            },
        )
        .unwrap();

        let written = std::fs::read_to_string(output).unwrap();
        assert!(written.contains("Percentage spent by category"));
        assert!(written.ends_with("        g     \n"));
    }
}

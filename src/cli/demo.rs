//! Demo command
//!
//! Replays the built-in Food/Clothing/Auto scenario and prints the result.

use crate::cli::report::format_text_report;
use crate::config::Settings;
use crate::error::BudgetResult;
use crate::services::Scenario;

/// Handle the demo command
pub fn handle_demo_command(settings: &Settings) -> BudgetResult<()> {
    let replay = Scenario::reference().replay()?;
    println!("{}", format_text_report(&replay.budget, settings)?);
    Ok(())
}

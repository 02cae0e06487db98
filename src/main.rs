use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use budget_ledger::cli::{handle_demo_command, handle_report_command, ReportArgs};
use budget_ledger::config::{BudgetPaths, Settings};

#[derive(Parser)]
#[command(
    name = "budget",
    author = "Kaylee Beyene",
    version,
    about = "Budget categories with ledgers, transfers and a spend chart",
    long_about = "Tracks deposits and withdrawals per budget category, moves funds \
                  between categories, and charts each category's share of total \
                  spending."
)]
struct Cli {
    /// Settings file to use instead of the default location
    #[arg(long, global = true, env = "BUDGET_LEDGER_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the built-in Food/Clothing/Auto example
    Demo,

    /// Replay a scenario file and print ledgers and the spend chart
    Report(ReportArgs),

    /// Show current configuration and paths
    Config {
        /// Write a default settings file if none exists yet
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = BudgetPaths::new()?;
    let settings = match &cli.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load_or_create(&paths)?,
    };

    // Logs go to stderr so stdout stays the report
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Some(Commands::Demo) => handle_demo_command(&settings)?,
        Some(Commands::Report(args)) => handle_report_command(&settings, args)?,
        Some(Commands::Config { init: true }) => {
            if paths.is_initialized() {
                println!(
                    "Settings file already exists: {}",
                    paths.settings_file().display()
                );
            } else {
                Settings::default().save(&paths)?;
                println!(
                    "Default settings written to: {}",
                    paths.settings_file().display()
                );
            }
        }
        Some(Commands::Config { init: false }) => {
            println!("budget-ledger Configuration");
            println!("===========================");
            println!("Base directory: {}", paths.base_dir().display());
            match &cli.config {
                Some(path) => println!("Settings file:  {}", path.display()),
                None if paths.is_initialized() => {
                    println!("Settings file:  {}", paths.settings_file().display())
                }
                None => println!(
                    "Settings file:  {} (not created, using defaults)",
                    paths.settings_file().display()
                ),
            }
            println!();
            println!("Settings:");
            println!("  Zero-spend policy: {:?}", settings.zero_spend_policy);
            println!("  Log filter:        {}", settings.log_filter);
        }
        None => {
            println!("budget-ledger - budget categories with a spend chart");
            println!();
            println!("Run 'budget --help' for usage information.");
            println!("Run 'budget demo' to see an example.");
        }
    }

    Ok(())
}

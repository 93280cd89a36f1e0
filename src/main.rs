use std::io::IsTerminal;

use anyhow::Result;
use clap::{Parser, Subcommand};

use budget_tracker::cli::run_shell;
use budget_tracker::config::{Settings, TrackerPaths};
use budget_tracker::logging::{init_logging, LogTarget};
use budget_tracker::models::AmountPolicy;
use budget_tracker::services::BudgetState;
use budget_tracker::tui::run_tui;

#[derive(Parser)]
#[command(
    name = "budget-tracker",
    version,
    about = "Track expenses against a budget from the terminal",
    long_about = "Set a budget, record expenses against it, and see total expenses \
                  and the remaining balance after every change. Runs as a \
                  full-screen TUI or as a line-oriented shell."
)]
struct Cli {
    /// Which expense and budget amounts are accepted
    #[arg(long, global = true, value_enum)]
    amount_policy: Option<AmountPolicy>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (default)
    #[command(alias = "ui")]
    Tui,

    /// Read commands line by line from stdin
    Shell,

    /// Write a default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = TrackerPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    if let Some(policy) = cli.amount_policy {
        settings.amount_policy = policy;
    }

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            init_logging(&settings, LogTarget::File(paths.log_file()))?;
            let mut state = BudgetState::new(settings.amount_policy);
            run_tui(&mut state, &settings)?;
        }
        Commands::Shell => {
            init_logging(&settings, LogTarget::Stderr)?;
            let mut state = BudgetState::new(settings.amount_policy);
            let stdin = std::io::stdin();
            let interactive = stdin.is_terminal();
            run_shell(
                &mut state,
                &settings,
                stdin.lock(),
                std::io::stdout(),
                interactive,
            )?;
        }
        Commands::Init => {
            if paths.is_initialized() {
                println!(
                    "Already initialized: {}",
                    paths.settings_file().display()
                );
            } else {
                settings.save(&paths)?;
                println!("Wrote default settings to {}", paths.settings_file().display());
            }
        }
        Commands::Config => {
            println!("Budget Tracker Configuration");
            println!("============================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Log file:         {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Amount policy:     {}", settings.amount_policy);
            println!("  Currency symbol:   {}", settings.currency_symbol);
            println!("  Feedback timeout:  {}s", settings.feedback_dismiss_secs);
            println!("  Uppercase titles:  {}", settings.uppercase_titles);
            println!("  Log level:         {}", settings.log_level);
        }
    }

    Ok(())
}

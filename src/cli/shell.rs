//! Line-oriented shell
//!
//! Reads one command per line, runs it against the budget state, and prints
//! the result. Works interactively or with a script piped to stdin.

use std::io::{BufRead, Write};

use clap::{Parser, Subcommand};
use tracing::{debug, info};

use crate::config::Settings;
use crate::display::{format_edit_prompt, format_expense_list, format_summary};
use crate::error::{TrackerError, TrackerResult};
use crate::models::ExpenseId;
use crate::services::BudgetState;

/// One parsed shell line
#[derive(Parser, Debug)]
#[command(name = "shell", no_binary_name = true, disable_version_flag = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

/// Shell commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Set the budget (replaces the previous one)
    Budget {
        /// Amount (e.g., "500" or "500.00")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Add an expense, or save the expense being edited
    #[command(alias = "submit")]
    Add {
        /// Expense title (quote titles with spaces)
        title: String,
        /// Amount (e.g., "4.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Start editing an expense
    Edit {
        /// Expense ID (e.g., "3")
        id: ExpenseId,
    },

    /// Abandon the edit in progress
    Cancel,

    /// Delete an expense
    #[command(alias = "rm")]
    Delete {
        /// Expense ID
        id: ExpenseId,
    },

    /// List expenses
    #[command(alias = "ls")]
    List,

    /// Show budget, expenses, and balance
    Summary,

    /// End the session
    #[command(alias = "exit")]
    Quit,
}

/// Whether the read loop keeps going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Parse a raw line into a command; `Ok(None)` for blank lines and comments
pub fn parse_line(line: &str) -> Result<Option<ShellCommand>, String> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let words = shell_words::split(trimmed).map_err(|e| format!("Error: {}\n", e))?;
    ShellLine::try_parse_from(words)
        .map(|parsed| Some(parsed.command))
        .map_err(|e| e.render().to_string())
}

/// Run one command against the state
///
/// Validation failures come back as `Err` so the caller can report them and
/// continue; the state is unchanged in that case.
pub fn handle_shell_command<W: Write>(
    state: &mut BudgetState,
    settings: &Settings,
    cmd: ShellCommand,
    out: &mut W,
) -> TrackerResult<LoopControl> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ShellCommand::Budget { amount } => {
            let budget = state.set_budget(&amount)?;
            writeln!(out, "Budget set to {}", budget.format_with_symbol(symbol))?;
            write!(out, "{}", format_summary(&state.summary(), symbol))?;
        }

        ShellCommand::Add { title, amount } => {
            let was_editing = state.editing_id().is_some();
            let expense = state.submit_expense(&title, &amount)?;
            let verb = if was_editing { "Updated" } else { "Added" };
            writeln!(
                out,
                "{} {} {} {}",
                verb,
                expense.id,
                expense.title,
                expense.amount.format_with_symbol(symbol)
            )?;
            write!(out, "{}", format_summary(&state.summary(), symbol))?;
        }

        ShellCommand::Edit { id } => {
            let expense = state.begin_edit(id)?;
            write!(out, "{}", format_edit_prompt(&expense))?;
        }

        ShellCommand::Cancel => {
            if state.editing_id().is_some() {
                state.cancel_edit();
                writeln!(out, "Edit cancelled.")?;
            } else {
                writeln!(out, "Nothing is being edited.")?;
            }
        }

        ShellCommand::Delete { id } => {
            let outcome = state.delete_expense(id);
            match outcome.removed {
                Some(expense) => {
                    writeln!(out, "Deleted {} {}", expense.id, expense.title)?;
                    if outcome.edit_cancelled {
                        writeln!(out, "Edit cancelled.")?;
                    }
                    write!(out, "{}", format_summary(&state.summary(), symbol))?;
                }
                None => writeln!(out, "No expense {}; nothing deleted.", id)?,
            }
        }

        ShellCommand::List => {
            write!(
                out,
                "{}",
                format_expense_list(state, symbol, settings.uppercase_titles)
            )?;
        }

        ShellCommand::Summary => {
            write!(out, "{}", format_summary(&state.summary(), symbol))?;
        }

        ShellCommand::Quit => return Ok(LoopControl::Exit),
    }

    Ok(LoopControl::Continue)
}

/// Run the read loop until `quit` or end of input
pub fn run_shell<R: BufRead, W: Write>(
    state: &mut BudgetState,
    settings: &Settings,
    input: R,
    mut out: W,
    interactive: bool,
) -> TrackerResult<()> {
    info!(interactive, policy = %state.policy(), "shell session started");

    if interactive {
        writeln!(out, "Budget tracker. Type 'help' for commands.")?;
        write!(out, "> ")?;
        out.flush()?;
    }

    for line in input.lines() {
        let line = line?;

        let control = match parse_line(&line) {
            Ok(None) => LoopControl::Continue,
            Ok(Some(cmd)) => {
                debug!(?cmd, "shell command");
                match handle_shell_command(state, settings, cmd, &mut out) {
                    Ok(control) => control,
                    Err(e @ TrackerError::Io(_)) => return Err(e),
                    Err(e) => {
                        writeln!(out, "Error: {}", e)?;
                        LoopControl::Continue
                    }
                }
            }
            Err(usage) => {
                write!(out, "{}", usage)?;
                LoopControl::Continue
            }
        };

        if control == LoopControl::Exit {
            break;
        }

        if interactive {
            write!(out, "> ")?;
            out.flush()?;
        }
    }

    info!(expenses = state.len(), "shell session ended");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn run(script: &str) -> (BudgetState, String) {
        let mut state = BudgetState::default();
        let mut out = Vec::new();
        run_shell(
            &mut state,
            &Settings::default(),
            script.as_bytes(),
            &mut out,
            false,
        )
        .unwrap();
        (state, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_line() {
        assert_eq!(parse_line("   ").unwrap(), None);
        assert_eq!(parse_line("# note").unwrap(), None);
        assert_eq!(
            parse_line("add \"Weekly groceries\" 82.10").unwrap(),
            Some(ShellCommand::Add {
                title: "Weekly groceries".into(),
                amount: "82.10".into()
            })
        );
        assert_eq!(
            parse_line("rm 2").unwrap(),
            Some(ShellCommand::Delete {
                id: ExpenseId::new(2)
            })
        );
        assert!(parse_line("frobnicate").is_err());
        assert!(parse_line("edit abc").is_err());
    }

    #[test]
    fn test_help_lists_commands() {
        let help = parse_line("help").unwrap_err();
        assert!(help.contains("budget"));
        assert!(help.contains("delete"));
    }

    #[test]
    fn test_negative_amount_reaches_validation() {
        assert_eq!(
            parse_line("add Rent -100").unwrap(),
            Some(ShellCommand::Add {
                title: "Rent".into(),
                amount: "-100".into()
            })
        );
    }

    #[test]
    fn test_coffee_and_rent_script() {
        let (state, out) = run("budget 500\nadd Coffee 4.50\nadd Rent -100\n");
        assert_eq!(state.len(), 1);
        assert_eq!(state.balance(), Money::from_cents(49550));
        assert!(out.contains("Added #1 Coffee $4.50"));
        assert!(out.contains("Error: Invalid expense"));
        assert!(out.contains("$495.50"));
    }

    #[test]
    fn test_edit_script() {
        let (state, out) = run("add Book 20\nedit 1\nadd Book 25\nlist\n");
        assert_eq!(state.len(), 1);
        assert_eq!(state.total_expenses(), Money::from_cents(2500));
        assert!(out.contains("Editing #1"));
        assert!(out.contains("Updated #1 Book $25.00"));
    }

    #[test]
    fn test_delete_edited_expense_script() {
        let (state, out) = run("add A 1\nedit 1\ndelete 1\nadd B 2\n");
        assert!(out.contains("Edit cancelled."));
        assert!(out.contains("Added #2 B"));
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let (state, out) = run("add A 1\ndelete 9\n");
        assert!(out.contains("No expense #9"));
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn test_oversized_total_is_rejected() {
        let (state, out) = run("add A 90000000000000000\nadd B 90000000000000000\nsummary\n");
        assert_eq!(state.len(), 1);
        assert_eq!(state.total_expenses(), Money::from_cents(9_000_000_000_000_000_000));
        assert!(out.contains("Error: Invalid expense"));
        assert!(out.contains("too large"));
    }

    #[test]
    fn test_quit_stops_reading() {
        let (state, _) = run("add A 1\nquit\nadd B 2\n");
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn test_unknown_command_continues() {
        let (state, out) = run("bogus\nadd A 1\n");
        assert!(out.contains("error"));
        assert_eq!(state.len(), 1);
    }
}

//! CLI command handlers
//!
//! This module contains the line-oriented shell, bridging clap argument
//! parsing with the budget state.

pub mod shell;

pub use shell::{handle_shell_command, parse_line, run_shell, LoopControl, ShellCommand};

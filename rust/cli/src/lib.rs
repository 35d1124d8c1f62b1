//! # Blackjack CLI Library
//!
//! Command-line interface for the Blackjack engine: interactive play at the
//! terminal, bot simulations, and configuration display.
//!
//! ## Main Entry Point
//!
//! [`run`] parses the arguments and executes the subcommand, reading turn
//! input from stdin. [`run_with_input`] takes the input stream explicitly.
//!
//! ## Example Usage
//!
//! ```
//! use std::io;
//! let args = vec!["blackjack", "sim", "--players", "2", "--rounds", "3", "--seed", "42"];
//! let code = blackjack_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play an interactive session
//! - `sim`: Let bots play a session, optionally logging rounds as JSONL
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::{BufRead, Write};

#[macro_use]
mod macros;

pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{BlackjackCli, Commands};
use commands::{handle_cfg_command, handle_play_command, handle_sim_command};

pub use error::CliError;

const COMMANDS: &[&str] = &["play", "sim", "cfg"];

/// Main entry point for the CLI application, reading input from stdin.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors, `130` for interruptions
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, &mut stdin_lock, out, err)
}

/// Same as [`run`] with an explicit input stream.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
///
/// let mut input = Cursor::new("s\ns\ns\n");
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let args = ["blackjack", "play", "--name", "Ann", "--rounds", "1", "--seed", "5"];
/// let code = blackjack_cli::run_with_input(args, &mut input, &mut out, &mut err);
/// assert_eq!(code, 0);
/// ```
pub fn run_with_input<I, S>(
    args: I,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match BlackjackCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version print to stdout and succeed
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                if write!(out, "{}", e).is_err() {
                    return exit_code::ERROR;
                }
                return exit_code::SUCCESS;
            }
            write_or_exit!(err, "{}", e);
            write_or_exit!(err, "Usage: blackjack <command> [options]\n");
            write_or_exit!(err, "Commands:");
            for c in COMMANDS {
                write_or_exit!(err, "  {}", c);
            }
            write_or_exit!(err, "\nFor full help, run: blackjack --help");
            return exit_code::ERROR;
        }
    };

    logging::init_logging(cli.verbose);

    let result = match cli.cmd {
        Commands::Play {
            players,
            names,
            rounds,
            seed,
        } => handle_play_command(players, names, rounds, seed, out, err, stdin),
        Commands::Sim {
            players,
            rounds,
            seed,
            ai,
            output,
        } => handle_sim_command(players, rounds, seed, ai, output, out, err),
        Commands::Cfg => handle_cfg_command(out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(CliError::Interrupted(msg)) => {
            tracing::warn!(%msg, "interrupted");
            let _ = writeln!(err, "\nInterrupted: {}", msg);
            exit_code::INTERRUPTED
        }
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

//! Error types for the CLI application.
//!
//! Every command handler returns `Result<(), CliError>`; [`crate::run`] maps
//! the error to an exit code.

use blackjack_engine::errors::GameError;
use thiserror::Error;

use crate::config::ConfigError;

/// Custom error type for CLI operations.
#[derive(Debug, Error)]
pub enum CliError {
    /// I/O error (stdout/stderr writes, round log files, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid user input or command-line arguments
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Rejected by the round engine
    #[error("Engine error: {0}")]
    Engine(#[from] GameError),

    /// Input closed before the session could be set up
    #[error("Interrupted: {0}")]
    Interrupted(String),
}

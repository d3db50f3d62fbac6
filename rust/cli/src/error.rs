//! Error types for the CLI application.
//!
//! This module defines the error type used throughout the CLI for error
//! propagation with the `?` operator. Roster problems are fatal at startup;
//! game-rule rejections never surface here because the session loop handles
//! them by re-prompting.

use std::fmt;

use blackjack_engine::errors::{GameError, RosterError};

/// Custom error type for CLI operations.
#[derive(Debug)]
pub enum CliError {
    /// I/O error (file operations, stdout/stderr writes, etc.)
    Io(std::io::Error),

    /// Invalid user input or command-line arguments
    InvalidInput(String),

    /// Roster loading or saving failed (fatal at startup)
    Roster(String),

    /// Engine rejected an operation the session loop did not expect to fail
    Game(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Roster(msg) => write!(f, "Roster error: {}", msg),
            CliError::Game(msg) => write!(f, "Game error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<RosterError> for CliError {
    fn from(error: RosterError) -> Self {
        CliError::Roster(error.to_string())
    }
}

impl From<GameError> for CliError {
    fn from(error: GameError) -> Self {
        CliError::Game(error.to_string())
    }
}

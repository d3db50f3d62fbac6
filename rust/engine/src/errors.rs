use thiserror::Error;

use crate::currency::{format_amount, Cents};

/// Errors raised by in-round player operations. All of these are recoverable:
/// the failing check runs before any mutation, so the caller can re-prompt
/// without repairing state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("bet amount must be greater than zero")]
    NonPositiveBet,
    #[error("insufficient funds: wagered {}, balance {}", format_amount(*.wagered), format_amount(*.balance))]
    BetExceedsBalance { wagered: Cents, balance: Cents },
    #[error("cannot double down on this hand")]
    DoubleNotAllowed,
    #[error("cannot split this hand")]
    SplitNotAllowed,
    #[error("insufficient funds to cover the additional wager")]
    InsufficientFunds,
    #[error("no active hand at index {0}")]
    UnknownHand(usize),
    #[error("shoe must hold at least one deck")]
    NoDecks,
}

/// Errors raised while loading or saving the player roster. Unlike
/// [`GameError`], these are fatal at startup: no game state exists yet.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("roster file not found: {0}")]
    Missing(String),
    #[error("roster line {line}: {reason}")]
    Malformed { line: usize, reason: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

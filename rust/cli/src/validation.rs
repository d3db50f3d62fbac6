//! Input parsing and validation for the interactive session.
//!
//! Turns raw prompt input into structured values: a turn action, a bet
//! amount, or a yes/no answer. Validation errors carry a user-facing message
//! so the session can print it and re-prompt.

use blackjack_engine::currency::{format_amount, parse_amount, Cents};
use blackjack_engine::player::Action;

/// Result of parsing user input during a hand.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// Valid turn action parsed from input
    Action(Action),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse user input into a turn [`Action`] or a special command.
///
/// Accepts, case-insensitively: "h"/"hit", "s"/"stand", "d"/"double"/
/// "double down", "p"/"sp"/"split", and "q"/"quit". Whether the parsed
/// action is currently *offered* is the session's concern, not the parser's.
pub fn parse_turn_action(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return ParseResult::Invalid("Empty input".to_string());
    }
    match input.as_str() {
        "q" | "quit" => ParseResult::Quit,
        "h" | "hit" => ParseResult::Action(Action::Hit),
        "s" | "stand" => ParseResult::Action(Action::Stand),
        "d" | "double" | "double down" => ParseResult::Action(Action::DoubleDown),
        "p" | "sp" | "split" => ParseResult::Action(Action::Split),
        other => ParseResult::Invalid(format!(
            "Unrecognized action '{}'. Valid actions: hit, stand, double down, split, q",
            other
        )),
    }
}

/// Parse a bet prompt entry into cents, enforcing the table limits and the
/// player's balance. All failures return the message to show before
/// re-prompting.
pub fn parse_bet(
    input: &str,
    min_bet: Cents,
    max_bet: Cents,
    balance: Cents,
) -> Result<Cents, String> {
    let amount = parse_amount(input)
        .ok_or_else(|| "Please enter a valid amount.".to_string())?;
    if amount < min_bet || amount > max_bet {
        return Err(format!(
            "Bet must be between ${} and ${}.",
            format_amount(min_bet),
            format_amount(max_bet)
        ));
    }
    if amount > balance {
        return Err("Insufficient funds to place this bet.".to_string());
    }
    Ok(amount)
}

/// True for "yes"/"y" (any case), false for everything else, mirroring the
/// forgiving yes/no prompts of the original table.
pub fn is_yes(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}

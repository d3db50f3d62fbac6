//! UI helper functions for terminal output formatting.
//!
//! Consistent prompts, banners, and error/warning lines for the interactive
//! table. Everything writes through `dyn Write` so tests can capture it.

use std::io::Write;

use blackjack_engine::currency::format_amount;
use blackjack_engine::hand::Hand;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

pub fn banner(out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out, "****************************************")?;
    writeln!(out, "**          Welcome to Blackjack      **")?;
    writeln!(out, "****************************************")
}

pub fn round_header(out: &mut dyn Write, round: u32) -> std::io::Result<()> {
    writeln!(out, "\n========================================")?;
    writeln!(out, "            ROUND {}", round)?;
    writeln!(out, "========================================\n")
}

pub fn instructions(out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(
        out,
        "\n=== Blackjack Instructions ===\n\
         Objective:\n\
         Get as close to 21 without going over. Face cards are worth 10, Aces are worth 1 or 11.\n\
         \n\
         Actions:\n\
         - Hit: Take another card.\n\
         - Stand: End your turn.\n\
         - Double Down: Double your bet and receive one more card.\n\
         - Split: If your first two cards share a rank, you can split them into two hands.\n\
         \n\
         Dealer Rules:\n\
         - Dealer must hit until their cards total 17 or higher.\n\
         - Dealer hits on a soft 17 (a hand totaling 17 with an Ace counted as 11)."
    )
}

/// The boxed hand display used after every deal and hit.
pub fn show_hand(out: &mut dyn Write, label: &str, hand: &Hand) -> std::io::Result<()> {
    writeln!(out, "*************************")?;
    writeln!(out, "{}: {}", label, hand)?;
    writeln!(out, "{} value: {}", label, hand.value())?;
    writeln!(out, "*************************")
}

pub fn show_balance(out: &mut dyn Write, balance: u64) -> std::io::Result<()> {
    writeln!(out, "Your new balance is: ${}", format_amount(balance))
}

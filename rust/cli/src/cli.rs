//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// Single-player casino Blackjack at the terminal.
#[derive(Debug, Parser)]
#[command(name = "blackjack", version, about = "Play Blackjack against the dealer")]
pub struct BlackjackCli {
    /// Roster file holding persisted player records
    #[arg(long, default_value = "players.txt")]
    pub roster: PathBuf,

    /// File the session result block is appended to
    #[arg(long, default_value = "blackjack_results.txt")]
    pub results: PathBuf,

    /// Number of decks in the shoe
    #[arg(long, default_value_t = blackjack_engine::shoe::DEFAULT_DECKS)]
    pub decks: usize,

    /// RNG seed for the shoe (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,
}

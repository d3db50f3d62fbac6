//! Terminal Blackjack client.
//!
//! Wires the rules engine to an interactive prompt loop: pick a player from
//! the roster file, play rounds against the dealer, then persist the updated
//! roster and append a session block to the result log.
//!
//! The whole surface runs through injected `dyn Write`/`dyn BufRead` handles
//! so integration tests can script entire sessions with in-memory buffers.

pub mod cli;
pub mod error;
pub mod io_utils;
pub mod session;
pub mod ui;
pub mod validation;

use std::ffi::OsString;
use std::io::{BufRead, Write};

use clap::Parser;

use blackjack_engine::logger::ResultLog;
use blackjack_engine::roster::Roster;

use crate::cli::BlackjackCli;
use crate::error::CliError;

/// Parses arguments and runs a full session. Returns the process exit code:
/// 0 on a normal session (including help/version), 2 on argument errors and
/// fatal startup failures such as a missing or malformed roster.
pub fn run<I, T>(
    args: I,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match BlackjackCli::try_parse_from(args) {
        Ok(cli) => cli,
        // help and version arrive as clap "errors" that exit cleanly
        Err(e) if !e.use_stderr() => {
            let _ = write!(out, "{}", e);
            return 0;
        }
        Err(e) => {
            let _ = write!(err, "{}", e);
            return 2;
        }
    };

    match run_game(&cli, stdin, out, err) {
        Ok(()) => 0,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            2
        }
    }
}

fn run_game(
    cli: &BlackjackCli,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let mut roster = Roster::load(&cli.roster)?;
    if roster.entries().is_empty() {
        return Err(CliError::Roster(format!(
            "roster file contains no players: {}",
            cli.roster.display()
        )));
    }

    ui::banner(out)?;
    session::offer_instructions(stdin, out)?;

    let Some(mut player) = session::choose_player(&roster, stdin, out)? else {
        return Ok(());
    };
    writeln!(out, "\nWelcome, {}!", player.name())?;

    session::run_session(&mut player, cli.decks, cli.seed, stdin, out, err)?;

    if roster.update(&player) {
        roster.save(&cli.roster)?;
        writeln!(out, "\nPlayer data updated successfully.")?;
    } else {
        ui::display_warning(err, "player record missing from roster; data not saved")?;
    }

    ResultLog::new(&cli.results).append(&player)?;
    writeln!(out, "Game results saved to {}.", cli.results.display())?;
    writeln!(out, "\nThanks for playing, {}. Goodbye!", player.name())?;
    Ok(())
}

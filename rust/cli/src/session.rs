//! The interactive table session.
//!
//! Owns the round loop: betting, dealing, the per-hand action menu, the
//! dealer turn, and resolution display. All user interaction goes through
//! `dyn BufRead`/`dyn Write` so the whole session is scriptable in tests.
//! Rule decisions live in the engine; this module only renders them and
//! routes validated input.

use std::io::{BufRead, Write};

use blackjack_engine::currency::{format_amount, Cents};
use blackjack_engine::hand::Hand;
use blackjack_engine::player::{Action, Player};
use blackjack_engine::roster::Roster;
use blackjack_engine::round::{play_dealer_hand, resolve_round, Outcome};
use blackjack_engine::shoe::Shoe;

use crate::error::CliError;
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{is_yes, parse_bet, parse_turn_action, ParseResult};

/// Table minimum wager: $5.00
pub const MIN_BET: Cents = 500;
/// Table maximum wager: $500.00
pub const MAX_BET: Cents = 50_000;

/// How a prompt interaction ended.
enum TurnEnd {
    Finished,
    Quit,
}

/// Presents the roster and returns the chosen player, or `None` when input
/// runs out before a valid selection.
pub fn choose_player(
    roster: &Roster,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<Option<Player>, CliError> {
    writeln!(out, "\nAvailable players:")?;
    for (idx, entry) in roster.entries().iter().enumerate() {
        writeln!(
            out,
            "{}. {} (Age: {}) | Balance: ${}",
            idx + 1,
            entry.name,
            entry.age,
            format_amount(entry.balance)
        )?;
    }
    loop {
        write!(out, "Select player (1-{}): ", roster.entries().len())?;
        out.flush()?;
        let Some(input) = read_stdin_line(stdin) else {
            return Ok(None);
        };
        match input.parse::<usize>() {
            Ok(n) if (1..=roster.entries().len()).contains(&n) => {
                return Ok(Some(Player::from_roster(&roster.entries()[n - 1])));
            }
            _ => writeln!(
                out,
                "Please enter a number between 1 and {}.",
                roster.entries().len()
            )?,
        }
    }
}

/// Offers the instructions text once. EOF is fine; the caller keeps going.
pub fn offer_instructions(
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    write!(out, "Would you like to view the instructions? (yes/no): ")?;
    out.flush()?;
    if let Some(input) = read_stdin_line(stdin) {
        if is_yes(&input) {
            ui::instructions(out)?;
        }
    }
    Ok(())
}

/// Plays rounds until the player quits, runs out of funds, or input ends.
/// The caller persists the roster and result log afterwards.
pub fn run_session(
    player: &mut Player,
    decks: usize,
    seed: Option<u64>,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let mut round: u32 = 1;
    loop {
        ui::round_header(out, round)?;

        // A fresh shoe every round; a fixed base seed still yields distinct
        // (but reproducible) rounds.
        let mut shoe = match seed {
            Some(s) => Shoe::with_seed(decks, s.wrapping_add(u64::from(round - 1)))?,
            None => Shoe::new(decks)?,
        };
        let mut dealer = Hand::new();
        player.reset_hands();

        match prompt_bet(player, stdin, out, err)? {
            TurnEnd::Finished => {}
            TurnEnd::Quit => return Ok(()),
        }

        // initial deal: two cards each
        let first = 0;
        for _ in 0..2 {
            let card = shoe.deal();
            player.hand_mut(first)?.add_card(card);
            dealer.add_card(shoe.deal());
        }

        writeln!(out, "\n/// Dealing cards... Good Luck! ///\n")?;
        ui::show_hand(out, "Your hand", &player.hands()[first])?;
        writeln!(out, "\nDealer's visible card: {}", dealer.cards()[0])?;
        writeln!(out, "Dealer's visible card value: {}", dealer.cards()[0].rank())?;

        // the hands vec can grow mid-loop through splits
        let mut idx = 0;
        let mut quit = false;
        while idx < player.hands().len() {
            if player.hands().len() > 1 {
                writeln!(out, "\n----------------------------------------")?;
                writeln!(out, "         PLAYING HAND {}", idx + 1)?;
                writeln!(out, "----------------------------------------")?;
            }
            match play_hand(player, idx, &mut shoe, stdin, out, err)? {
                TurnEnd::Finished => idx += 1,
                TurnEnd::Quit => {
                    quit = true;
                    break;
                }
            }
        }
        if quit {
            return Ok(());
        }

        dealer_turn(&mut dealer, &mut shoe, out)?;
        show_results(player, &dealer, round, out)?;

        if player.balance() == 0 {
            writeln!(out, "\nYou have run out of funds. Game over.")?;
            return Ok(());
        }

        write!(out, "\nWould you like to play another round? (yes/no): ")?;
        out.flush()?;
        match read_stdin_line(stdin) {
            Some(input) if is_yes(&input) => round += 1,
            _ => return Ok(()),
        }
    }
}

/// Bet prompt loop: re-prompts on every rejected amount, quits on q/EOF.
fn prompt_bet(
    player: &mut Player,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<TurnEnd, CliError> {
    loop {
        writeln!(out, "----------------------------------------")?;
        write!(
            out,
            "Your current balance is ${}. Enter your bet (${}-${}): ",
            format_amount(player.balance()),
            format_amount(MIN_BET),
            format_amount(MAX_BET)
        )?;
        out.flush()?;
        let Some(input) = read_stdin_line(stdin) else {
            return Ok(TurnEnd::Quit);
        };
        if matches!(input.to_lowercase().as_str(), "q" | "quit") {
            return Ok(TurnEnd::Quit);
        }
        match parse_bet(&input, MIN_BET, MAX_BET, player.balance()) {
            Ok(amount) => match player.place_bet(amount) {
                Ok(_) => return Ok(TurnEnd::Finished),
                // parse_bet already checked the balance, but the engine has
                // the final say
                Err(e) => ui::write_error(err, &e.to_string())?,
            },
            Err(msg) => writeln!(out, "{}", msg)?,
        }
    }
}

/// Action loop for one hand. Splits grow the player's hand list; play stays
/// on the current hand until it stands, doubles, busts, or hits 21.
fn play_hand(
    player: &mut Player,
    idx: usize,
    shoe: &mut Shoe,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<TurnEnd, CliError> {
    loop {
        let value = player.hands()[idx].value();
        if value == 21 {
            writeln!(out, "Twenty-one!")?;
            return Ok(TurnEnd::Finished);
        }
        if value > 21 {
            writeln!(out, "Bust!")?;
            return Ok(TurnEnd::Finished);
        }

        let actions = player.available_actions(&player.hands()[idx]);
        write!(out, "Options: {}. What would you like to do? ", menu(&actions))?;
        out.flush()?;
        let Some(input) = read_stdin_line(stdin) else {
            return Ok(TurnEnd::Quit);
        };
        let action = match parse_turn_action(&input) {
            ParseResult::Quit => return Ok(TurnEnd::Quit),
            ParseResult::Invalid(msg) => {
                ui::write_error(err, &msg)?;
                continue;
            }
            ParseResult::Action(a) if !actions.contains(&a) => {
                ui::write_error(err, "Please choose from the available options.")?;
                continue;
            }
            ParseResult::Action(a) => a,
        };

        match action {
            Action::Hit => {
                let card = shoe.deal();
                player.hand_mut(idx)?.add_card(card);
                writeln!(out)?;
                ui::show_hand(out, "Your hand", &player.hands()[idx])?;
            }
            Action::Stand => return Ok(TurnEnd::Finished),
            Action::DoubleDown => match player.double_down(idx) {
                Ok(()) => {
                    let card = shoe.deal();
                    player.hand_mut(idx)?.add_card(card);
                    writeln!(out, "\n--- Doubled Down! ---")?;
                    ui::show_hand(out, "Your hand", &player.hands()[idx])?;
                    return Ok(TurnEnd::Finished);
                }
                Err(e) => ui::write_error(err, &e.to_string())?,
            },
            Action::Split => match player.split_hand(idx) {
                Ok(sibling) => {
                    let card = shoe.deal();
                    player.hand_mut(idx)?.add_card(card);
                    let card = shoe.deal();
                    player.hand_mut(sibling)?.add_card(card);
                    writeln!(out, "\n/// Hand Split! ///\n")?;
                    writeln!(out, "Hand {}: {}", idx + 1, player.hands()[idx])?;
                    writeln!(out, "Hand {}: {}", sibling + 1, player.hands()[sibling])?;
                }
                Err(e) => ui::write_error(err, &e.to_string())?,
            },
        }
    }
}

fn dealer_turn(dealer: &mut Hand, shoe: &mut Shoe, out: &mut dyn Write) -> Result<(), CliError> {
    writeln!(out, "\n========================================")?;
    writeln!(out, "            DEALER'S TURN")?;
    writeln!(out, "========================================\n")?;
    ui::show_hand(out, "Dealer's hand", dealer)?;

    let before = dealer.cards().len();
    play_dealer_hand(dealer, shoe);
    if dealer.cards().len() > before {
        writeln!(out, "\nDealer draws {} card(s).", dealer.cards().len() - before)?;
        ui::show_hand(out, "Dealer's hand", dealer)?;
    }
    if dealer.is_bust() {
        writeln!(out, "\nDealer busts!")?;
    } else {
        writeln!(out, "\nDealer stands.")?;
    }
    Ok(())
}

fn show_results(
    player: &mut Player,
    dealer: &Hand,
    round: u32,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    writeln!(out, "\n=== Results for Round {} ===", round)?;
    writeln!(out, "----------------------------------------")?;

    let results = resolve_round(player, dealer);
    for (idx, result) in results.iter().enumerate() {
        let hand = &player.hands()[idx];
        writeln!(out, "\n*** Hand {} ***", idx + 1)?;
        writeln!(out, "Your hand: {}", hand)?;
        writeln!(out, "Hand value: {}", hand.value())?;
        let bet = hand.bet();
        match result.outcome {
            Outcome::PlayerBlackjack => writeln!(
                out,
                "Blackjack! You win ${}!",
                format_amount(result.payout - bet)
            )?,
            Outcome::DealerBlackjack => writeln!(out, "Dealer has Blackjack. You lose.")?,
            Outcome::PlayerBust => writeln!(out, "Bust! You lose.")?,
            Outcome::DealerBust => {
                writeln!(out, "Dealer busts! You win ${}!", format_amount(bet))?
            }
            Outcome::PlayerHigher => writeln!(out, "You win ${}!", format_amount(bet))?,
            Outcome::DealerHigher => writeln!(out, "Dealer wins. You lose.")?,
            Outcome::Push => writeln!(out, "Push (tie). Your bet is returned.")?,
        }
    }

    writeln!(out, "----------------------------------------")?;
    ui::show_balance(out, player.balance())?;
    writeln!(
        out,
        "Wins: {} | Losses: {} | Ties: {}",
        player.wins(),
        player.losses(),
        player.ties()
    )?;
    Ok(())
}

fn menu(actions: &[Action]) -> String {
    actions
        .iter()
        .map(|a| match a {
            Action::Hit => "(H)it",
            Action::Stand => "(S)tand",
            Action::DoubleDown => "(D)ouble down",
            Action::Split => "S(P)lit",
        })
        .collect::<Vec<_>>()
        .join(", ")
}

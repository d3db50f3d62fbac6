//! # blackjack-engine: Casino Blackjack Core
//!
//! Rules engine for single-player casino Blackjack against a dealer: hand
//! valuation with Ace re-counting, betting with split and double-down,
//! payout resolution, and flat-file persistence of player records.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Value, Card) and deck construction
//! - [`shoe`] - Multi-deck dealing shoe with 25%-threshold reshuffling
//! - [`hand`] - Hand valuation, blackjack/soft detection, eligibility flags
//! - [`player`] - Balance, bets, splits, doubles, and running statistics
//! - [`round`] - Outcome classification, payouts, and the dealer turn
//! - [`roster`] - Persisted player records (load, update, save)
//! - [`logger`] - Append-only human-readable session result log
//! - [`currency`] - Integer-cent money representation and formatting
//! - [`errors`] - Error types for game and roster operations
//!
//! ## Quick Start
//!
//! ```rust
//! use blackjack_engine::cards::{Card, Suit, Value};
//! use blackjack_engine::hand::Hand;
//! use blackjack_engine::round::{classify, Outcome};
//!
//! let mut player = Hand::new();
//! player.add_card(Card { suit: Suit::Spades, value: Value::Ace });
//! player.add_card(Card { suit: Suit::Hearts, value: Value::King });
//! assert!(player.is_blackjack());
//!
//! let mut dealer = Hand::new();
//! dealer.add_card(Card { suit: Suit::Clubs, value: Value::Nine });
//! dealer.add_card(Card { suit: Suit::Clubs, value: Value::Eight });
//!
//! assert_eq!(classify(&player, &dealer), Outcome::PlayerBlackjack);
//! ```
//!
//! ## Dealing
//!
//! The shoe reshuffles itself: once 25% or less of it remains, the next deal
//! rebuilds all decks before taking a card.
//!
//! ```rust
//! use blackjack_engine::shoe::Shoe;
//!
//! let mut shoe = Shoe::with_seed(6, 42).unwrap();
//! assert_eq!(shoe.capacity(), 312);
//! let _card = shoe.deal();
//! assert_eq!(shoe.remaining(), 311);
//! ```

pub mod cards;
pub mod currency;
pub mod errors;
pub mod hand;
pub mod logger;
pub mod player;
pub mod roster;
pub mod round;
pub mod shoe;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{standard_deck, Card};
use crate::errors::GameError;

/// Number of decks in a casino shoe unless configured otherwise.
pub const DEFAULT_DECKS: usize = 6;

/// A multi-deck dealing shoe.
///
/// The shoe holds `num_decks` standard 52-card decks shuffled together. Once
/// the remaining count drops to 25% of capacity or below, the next deal fully
/// regenerates and reshuffles the shoe before taking a card, so a dealt card
/// always comes from a fresh shoe when regeneration triggers.
#[derive(Debug)]
pub struct Shoe {
    num_decks: usize,
    cards: Vec<Card>,
    rng: ChaCha20Rng,
}

impl Shoe {
    /// Creates a shoe seeded from OS entropy. Shuffle order is not
    /// reproducible, which is what a casino table wants.
    pub fn new(num_decks: usize) -> Result<Self, GameError> {
        Self::from_rng(num_decks, ChaCha20Rng::from_os_rng())
    }

    /// Creates a shoe with a fixed seed. Same seed, same card order; used by
    /// tests and replays.
    pub fn with_seed(num_decks: usize, seed: u64) -> Result<Self, GameError> {
        Self::from_rng(num_decks, ChaCha20Rng::seed_from_u64(seed))
    }

    fn from_rng(num_decks: usize, rng: ChaCha20Rng) -> Result<Self, GameError> {
        if num_decks == 0 {
            return Err(GameError::NoDecks);
        }
        let mut shoe = Self {
            num_decks,
            cards: Vec::new(),
            rng,
        };
        shoe.rebuild();
        Ok(shoe)
    }

    /// Regenerates all decks and reshuffles.
    fn rebuild(&mut self) {
        self.cards.clear();
        self.cards.reserve(self.capacity());
        for _ in 0..self.num_decks {
            self.cards.extend(standard_deck());
        }
        self.shuffle();
    }

    /// Re-randomizes the remaining cards in place.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    /// Deals a single card.
    ///
    /// When the remaining count is at or below the 25% reshuffle threshold,
    /// the shoe is rebuilt first and the card comes off the fresh shoe.
    pub fn deal(&mut self) -> Card {
        if self.cards.len() <= self.reshuffle_threshold() {
            self.rebuild();
        }
        // rebuild() leaves num_decks * 52 cards and num_decks >= 1, so the
        // shoe is never empty here
        self.cards.pop().expect("shoe non-empty after threshold check")
    }

    /// Full size of the shoe: `num_decks * 52`.
    pub fn capacity(&self) -> usize {
        self.num_decks * 52
    }

    /// Cards left before the next reshuffle check.
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    fn reshuffle_threshold(&self) -> usize {
        self.capacity() / 4
    }
}

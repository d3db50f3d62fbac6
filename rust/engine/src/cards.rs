use std::fmt;

use serde::{Deserialize, Serialize};

/// Represents one of the four suits in a standard 52-card deck.
/// Used as a component of [`Card`] to fully define a playing card.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Hearts suit (♥)
    Hearts,
    /// Diamonds suit (♦)
    Diamonds,
    /// Clubs suit (♣)
    Clubs,
    /// Spades suit (♠)
    Spades,
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Suit::Hearts => "Hearts",
            Suit::Diamonds => "Diamonds",
            Suit::Clubs => "Clubs",
            Suit::Spades => "Spades",
        };
        f.write_str(name)
    }
}

/// Represents the face value of a playing card from Two through Ace.
/// The Blackjack score rank is derived from it via [`Value::rank`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Value {
    /// Face value 2
    Two,
    /// Face value 3
    Three,
    /// Face value 4
    Four,
    /// Face value 5
    Five,
    /// Face value 6
    Six,
    /// Face value 7
    Seven,
    /// Face value 8
    Eight,
    /// Face value 9
    Nine,
    /// Face value 10
    Ten,
    /// Jack (scores 10)
    Jack,
    /// Queen (scores 10)
    Queen,
    /// King (scores 10)
    King,
    /// Ace (scores 11 until re-counted as 1)
    Ace,
}

impl Value {
    /// Blackjack score rank: face cards count 10, an Ace initially counts 11,
    /// numeric cards count their number.
    pub fn rank(self) -> u8 {
        match self {
            Value::Two => 2,
            Value::Three => 3,
            Value::Four => 4,
            Value::Five => 5,
            Value::Six => 6,
            Value::Seven => 7,
            Value::Eight => 8,
            Value::Nine => 9,
            Value::Ten | Value::Jack | Value::Queen | Value::King => 10,
            Value::Ace => 11,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Value::Two => "2",
            Value::Three => "3",
            Value::Four => "4",
            Value::Five => "5",
            Value::Six => "6",
            Value::Seven => "7",
            Value::Eight => "8",
            Value::Nine => "9",
            Value::Ten => "10",
            Value::Jack => "Jack",
            Value::Queen => "Queen",
            Value::King => "King",
            Value::Ace => "Ace",
        };
        f.write_str(name)
    }
}

/// Represents a single playing card with a suit and face value.
/// Cards are immutable value objects; the score rank is a pure function of
/// the face value and never changes after construction.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// The suit of the card (Hearts, Diamonds, Clubs, or Spades)
    pub suit: Suit,
    /// The face value of the card (Two through Ace)
    pub value: Value,
}

impl Card {
    /// Blackjack score rank of this card, see [`Value::rank`].
    pub fn rank(&self) -> u8 {
        self.value.rank()
    }

    /// True when the card is an Ace (the only re-countable card).
    pub fn is_ace(&self) -> bool {
        self.value == Value::Ace
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.value, self.suit)
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades]
}

pub fn all_values() -> [Value; 13] {
    [
        Value::Two,
        Value::Three,
        Value::Four,
        Value::Five,
        Value::Six,
        Value::Seven,
        Value::Eight,
        Value::Nine,
        Value::Ten,
        Value::Jack,
        Value::Queen,
        Value::King,
        Value::Ace,
    ]
}

/// One standard 52-card deck, every suit × value combination.
pub fn standard_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &s in &all_suits() {
        for &r in &all_values() {
            v.push(Card { suit: s, value: r });
        }
    }
    v
}

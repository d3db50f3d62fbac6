use std::fmt;

use crate::cards::Card;
use crate::currency::Cents;

/// A hand of cards for the player or the dealer.
///
/// Card order affects display only, never scoring. The split and double
/// eligibility flags are recomputed on every card movement:
/// `can_split` holds exactly while the hand is two cards of equal score rank,
/// and `can_double` goes false for good once a third card lands.
#[derive(Debug, Clone)]
pub struct Hand {
    cards: Vec<Card>,
    bet: Cents,
    is_split: bool,
    can_split: bool,
    can_double: bool,
}

impl Hand {
    /// An empty hand with no wager (dealer hands never carry one).
    pub fn new() -> Self {
        Self {
            cards: Vec::new(),
            bet: 0,
            is_split: false,
            can_split: false,
            can_double: true,
        }
    }

    /// An empty hand carrying `bet`. Created when a bet is placed.
    pub fn with_bet(bet: Cents) -> Self {
        Self {
            bet,
            ..Self::new()
        }
    }

    /// Appends a card and recomputes the eligibility flags.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
        self.recompute_flags();
    }

    /// Total value of the hand with Ace re-counting.
    ///
    /// Sums every card's score rank (Aces as 11), then re-counts one Ace at a
    /// time as 1 while the total exceeds 21 and unadjusted Aces remain. The
    /// result is the best achievable total not above 21, or the minimal
    /// achievable total when a bust is unavoidable.
    pub fn value(&self) -> u32 {
        let mut value: u32 = self.cards.iter().map(|c| u32::from(c.rank())).sum();
        let mut aces = self.cards.iter().filter(|c| c.is_ace()).count();
        while value > 21 && aces > 0 {
            value -= 10;
            aces -= 1;
        }
        value
    }

    /// A natural: exactly two cards totaling 21.
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.value() == 21
    }

    /// Soft hand check used for the dealer's soft-17 rule.
    ///
    /// Deliberately computed from the *unadjusted* sum (every Ace as 11)
    /// rather than from [`Hand::value`]: a multi-Ace 17 whose unadjusted sum
    /// already busts is a hard 17 and the dealer stands on it.
    pub fn is_soft(&self) -> bool {
        let raw: u32 = self.cards.iter().map(|c| u32::from(c.rank())).sum();
        let aces = self.cards.iter().filter(|c| c.is_ace()).count();
        aces > 0 && raw <= 21
    }

    /// True when even the minimal total exceeds 21.
    pub fn is_bust(&self) -> bool {
        self.value() > 21
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn bet(&self) -> Cents {
        self.bet
    }

    pub fn is_split(&self) -> bool {
        self.is_split
    }

    pub fn can_split(&self) -> bool {
        self.can_split
    }

    pub fn can_double(&self) -> bool {
        self.can_double
    }

    /// Doubles the wager and retires double eligibility. The caller has
    /// already debited the balance.
    pub(crate) fn apply_double(&mut self) {
        self.bet *= 2;
        self.can_double = false;
    }

    /// Removes the second card for a split and marks the hand as split.
    /// Only callable on a splittable hand, so the pop cannot fail.
    pub(crate) fn take_split_card(&mut self) -> Card {
        debug_assert!(self.can_split && self.cards.len() == 2);
        let card = self.cards.remove(1);
        self.is_split = true;
        self.recompute_flags();
        card
    }

    pub(crate) fn mark_split(&mut self) {
        self.is_split = true;
    }

    fn recompute_flags(&mut self) {
        self.can_split =
            self.cards.len() == 2 && self.cards[0].rank() == self.cards[1].rank();
        if self.cards.len() > 2 {
            self.can_double = false;
        }
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for card in &self.cards {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{}", card)?;
            first = false;
        }
        Ok(())
    }
}

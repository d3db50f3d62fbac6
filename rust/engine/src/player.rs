use serde::{Deserialize, Serialize};

use crate::currency::Cents;
use crate::errors::GameError;
use crate::hand::Hand;
use crate::roster::RosterEntry;

/// An action a player may take on one of their hands.
/// Computed as data by [`Player::available_actions`] so the UI renders the
/// menu without re-deriving eligibility rules.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Take another card
    Hit,
    /// End the turn for this hand
    Stand,
    /// Double the wager and take exactly one more card
    DoubleDown,
    /// Split a two-card pair into two hands
    Split,
}

/// A player at the table: identity, bankroll, active hands, and running
/// statistics. The balance only ever decreases at bet, double, and split
/// time, and only ever increases through an explicit winnings credit; any
/// operation that would overdraw is rejected before mutation.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    age: u32,
    balance: Cents,
    hands: Vec<Hand>,
    wins: u32,
    losses: u32,
    ties: u32,
}

impl Player {
    pub fn new(name: impl Into<String>, age: u32, balance: Cents) -> Self {
        Self {
            name: name.into(),
            age,
            balance,
            hands: Vec::new(),
            wins: 0,
            losses: 0,
            ties: 0,
        }
    }

    /// Builds a player from a persisted roster record. Ties are a
    /// per-session statistic and start at zero.
    pub fn from_roster(entry: &RosterEntry) -> Self {
        Self {
            name: entry.name.clone(),
            age: entry.age,
            balance: entry.balance,
            hands: Vec::new(),
            wins: entry.wins,
            losses: entry.losses,
            ties: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn age(&self) -> u32 {
        self.age
    }
    pub fn balance(&self) -> Cents {
        self.balance
    }
    pub fn wins(&self) -> u32 {
        self.wins
    }
    pub fn losses(&self) -> u32 {
        self.losses
    }
    pub fn ties(&self) -> u32 {
        self.ties
    }

    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    pub fn hand_mut(&mut self, index: usize) -> Result<&mut Hand, GameError> {
        self.hands
            .get_mut(index)
            .ok_or(GameError::UnknownHand(index))
    }

    /// Places a wager and registers a fresh empty hand carrying it.
    /// Returns the index of the new hand.
    pub fn place_bet(&mut self, amount: Cents) -> Result<usize, GameError> {
        if amount == 0 {
            return Err(GameError::NonPositiveBet);
        }
        if amount > self.balance {
            return Err(GameError::BetExceedsBalance {
                wagered: amount,
                balance: self.balance,
            });
        }
        self.balance -= amount;
        self.hands.push(Hand::with_bet(amount));
        Ok(self.hands.len() - 1)
    }

    /// Doubles the wager on an eligible hand, debiting the balance by the
    /// pre-double bet. The caller then deals exactly one card and stands.
    pub fn double_down(&mut self, index: usize) -> Result<(), GameError> {
        let hand = self.hands.get(index).ok_or(GameError::UnknownHand(index))?;
        if !hand.can_double() {
            return Err(GameError::DoubleNotAllowed);
        }
        if self.balance < hand.bet() {
            return Err(GameError::InsufficientFunds);
        }
        self.balance -= self.hands[index].bet();
        self.hands[index].apply_double();
        Ok(())
    }

    /// Splits an eligible pair: moves the second card into a new sibling hand
    /// carrying the same wager, debits the balance by that wager again, and
    /// marks both hands as split. Returns the index of the sibling.
    pub fn split_hand(&mut self, index: usize) -> Result<usize, GameError> {
        let hand = self.hands.get(index).ok_or(GameError::UnknownHand(index))?;
        if !hand.can_split() {
            return Err(GameError::SplitNotAllowed);
        }
        let bet = hand.bet();
        if self.balance < bet {
            return Err(GameError::InsufficientFunds);
        }
        self.balance -= bet;
        let moved = self.hands[index].take_split_card();
        let mut sibling = Hand::with_bet(bet);
        sibling.mark_split();
        sibling.add_card(moved);
        self.hands.push(sibling);
        Ok(self.hands.len() - 1)
    }

    /// Credits winnings. No upper bound.
    pub fn add_winnings(&mut self, amount: Cents) {
        self.balance = self.balance.saturating_add(amount);
    }

    pub fn record_win(&mut self) {
        self.wins += 1;
    }
    pub fn record_loss(&mut self) {
        self.losses += 1;
    }
    pub fn record_tie(&mut self) {
        self.ties += 1;
    }

    /// Clears the active hands between rounds.
    pub fn reset_hands(&mut self) {
        self.hands.clear();
    }

    /// The actions currently legal on `hand`, as data for the UI.
    /// Hit and Stand are always offered; double and split additionally
    /// require eligibility and enough balance for the extra wager.
    pub fn available_actions(&self, hand: &Hand) -> Vec<Action> {
        let mut actions = vec![Action::Hit, Action::Stand];
        if hand.can_double() && self.balance >= hand.bet() {
            actions.push(Action::DoubleDown);
        }
        if hand.can_split() && self.balance >= hand.bet() {
            actions.push(Action::Split);
        }
        actions
    }
}

//! Round resolution: outcome classification, payouts, and the dealer turn.
//!
//! Classification is a pure function over two finalized hands; the mutating
//! half ([`resolve_round`]) applies payouts and statistics to the player in a
//! separate step.

use serde::{Deserialize, Serialize};

use crate::currency::Cents;
use crate::hand::Hand;
use crate::player::Player;
use crate::shoe::Shoe;

/// Classification of one resolved player hand against the dealer's hand.
/// Variants are mutually exclusive; [`classify`] picks the first match in
/// declaration order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    /// Player natural, dealer without one: pays 3:2
    PlayerBlackjack,
    /// Dealer natural, player without one: wager lost
    DealerBlackjack,
    /// Player bust, regardless of the dealer's state
    PlayerBust,
    /// Dealer bust with the player still standing: pays 1:1
    DealerBust,
    /// Player total beats the dealer's: pays 1:1
    PlayerHigher,
    /// Dealer total beats the player's: wager lost
    DealerHigher,
    /// Equal totals: the stake is returned
    Push,
}

impl Outcome {
    /// Amount credited back for a hand with this outcome, including the
    /// returned stake. A 3:2 natural pays 2.5x the wager, a plain win 2x, a
    /// push 1x, and a loss nothing.
    pub fn payout(self, bet: Cents) -> Cents {
        match self {
            Outcome::PlayerBlackjack => bet.saturating_mul(5) / 2,
            Outcome::DealerBust | Outcome::PlayerHigher => bet.saturating_mul(2),
            Outcome::Push => bet,
            Outcome::DealerBlackjack | Outcome::PlayerBust | Outcome::DealerHigher => 0,
        }
    }

    /// True when the outcome counts as a win in the player's statistics.
    pub fn is_win(self) -> bool {
        matches!(
            self,
            Outcome::PlayerBlackjack | Outcome::DealerBust | Outcome::PlayerHigher
        )
    }

    /// True when the outcome counts as a loss in the player's statistics.
    pub fn is_loss(self) -> bool {
        matches!(
            self,
            Outcome::DealerBlackjack | Outcome::PlayerBust | Outcome::DealerHigher
        )
    }
}

/// Result of resolving a single hand: its classification and the amount
/// credited back to the player.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandResult {
    pub outcome: Outcome,
    pub payout: Cents,
}

/// Classifies one finished player hand against the finalized dealer hand.
/// Pure: no balances or counters are touched.
pub fn classify(player: &Hand, dealer: &Hand) -> Outcome {
    let player_value = player.value();
    let dealer_value = dealer.value();
    let player_blackjack = player.is_blackjack();
    let dealer_blackjack = dealer.is_blackjack();

    if player_blackjack && !dealer_blackjack {
        Outcome::PlayerBlackjack
    } else if dealer_blackjack && !player_blackjack {
        Outcome::DealerBlackjack
    } else if player_value > 21 {
        Outcome::PlayerBust
    } else if dealer_value > 21 {
        Outcome::DealerBust
    } else if player_value > dealer_value {
        Outcome::PlayerHigher
    } else if player_value < dealer_value {
        Outcome::DealerHigher
    } else {
        Outcome::Push
    }
}

/// Resolves every active hand against the dealer: classifies, credits
/// payouts, and updates the win/loss/tie counters. Returns one
/// [`HandResult`] per hand, in hand order.
pub fn resolve_round(player: &mut Player, dealer: &Hand) -> Vec<HandResult> {
    let results: Vec<HandResult> = player
        .hands()
        .iter()
        .map(|hand| {
            let outcome = classify(hand, dealer);
            HandResult {
                outcome,
                payout: outcome.payout(hand.bet()),
            }
        })
        .collect();

    for result in &results {
        if result.payout > 0 {
            player.add_winnings(result.payout);
        }
        if result.outcome.is_win() {
            player.record_win();
        } else if result.outcome.is_loss() {
            player.record_loss();
        } else {
            player.record_tie();
        }
    }
    results
}

/// Plays out the dealer's hand: hit below 17 and on soft 17, stand
/// otherwise.
///
/// Softness uses [`Hand::is_soft`], the unadjusted-sum definition, so a
/// multi-Ace hard 17 stands. Every draw raises the minimal total, so the
/// loop always terminates with a final value of at least 17 or a bust.
pub fn play_dealer_hand(dealer: &mut Hand, shoe: &mut Shoe) {
    loop {
        let value = dealer.value();
        if value < 17 || (value == 17 && dealer.is_soft()) {
            dealer.add_card(shoe.deal());
        } else {
            break;
        }
    }
}

use blackjack_engine::cards::{Card, Suit, Value};
use blackjack_engine::hand::Hand;
use blackjack_engine::player::Player;
use blackjack_engine::round::{classify, play_dealer_hand, resolve_round, Outcome};
use blackjack_engine::shoe::Shoe;

fn card(value: Value) -> Card {
    Card {
        suit: Suit::Diamonds,
        value,
    }
}

fn hand_of(values: &[Value]) -> Hand {
    let mut hand = Hand::new();
    for &v in values {
        hand.add_card(card(v));
    }
    hand
}

/// Player with a single finished hand wagering $100.00.
fn player_with_hand(values: &[Value]) -> Player {
    let mut player = Player::new("Ada", 36, 50_000);
    let idx = player.place_bet(10_000).unwrap();
    for &v in values {
        player.hand_mut(idx).unwrap().add_card(card(v));
    }
    player
}

#[test]
fn classification_covers_the_payout_table() {
    let bj = &[Value::Ace, Value::King];
    let seventeen = &[Value::Nine, Value::Eight];
    let sixteen = &[Value::Nine, Value::Seven];
    let bust = &[Value::King, Value::Nine, Value::Five];

    assert_eq!(
        classify(&hand_of(bj), &hand_of(seventeen)),
        Outcome::PlayerBlackjack
    );
    assert_eq!(
        classify(&hand_of(seventeen), &hand_of(bj)),
        Outcome::DealerBlackjack
    );
    assert_eq!(classify(&hand_of(bust), &hand_of(sixteen)), Outcome::PlayerBust);
    assert_eq!(classify(&hand_of(seventeen), &hand_of(bust)), Outcome::DealerBust);
    assert_eq!(
        classify(&hand_of(seventeen), &hand_of(sixteen)),
        Outcome::PlayerHigher
    );
    assert_eq!(
        classify(&hand_of(sixteen), &hand_of(seventeen)),
        Outcome::DealerHigher
    );
    assert_eq!(classify(&hand_of(seventeen), &hand_of(seventeen)), Outcome::Push);
}

#[test]
fn player_bust_overrides_dealer_bust() {
    let player = hand_of(&[Value::King, Value::Nine, Value::Five]);
    let dealer = hand_of(&[Value::King, Value::Nine, Value::Seven]);
    assert_eq!(classify(&player, &dealer), Outcome::PlayerBust);
}

#[test]
fn both_naturals_push() {
    let player = hand_of(&[Value::Ace, Value::King]);
    let dealer = hand_of(&[Value::Ace, Value::Queen]);
    assert_eq!(classify(&player, &dealer), Outcome::Push);
}

#[test]
fn three_card_21_loses_to_a_natural() {
    let player = hand_of(&[Value::Seven, Value::Seven, Value::Seven]);
    let dealer = hand_of(&[Value::Ace, Value::King]);
    assert_eq!(classify(&player, &dealer), Outcome::DealerBlackjack);
}

#[test]
fn payout_multipliers() {
    assert_eq!(Outcome::PlayerBlackjack.payout(10_000), 25_000);
    assert_eq!(Outcome::DealerBust.payout(10_000), 20_000);
    assert_eq!(Outcome::PlayerHigher.payout(10_000), 20_000);
    assert_eq!(Outcome::Push.payout(10_000), 10_000);
    assert_eq!(Outcome::DealerBlackjack.payout(10_000), 0);
    assert_eq!(Outcome::PlayerBust.payout(10_000), 0);
    assert_eq!(Outcome::DealerHigher.payout(10_000), 0);
}

// Net balance movement at a $100 bet: the wager is already debited by
// place_bet, so the net is payout - 10_000.

#[test]
fn blackjack_nets_one_and_a_half_bets() {
    let mut player = player_with_hand(&[Value::Ace, Value::King]);
    let dealer = hand_of(&[Value::Nine, Value::Eight]);
    let results = resolve_round(&mut player, &dealer);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].outcome, Outcome::PlayerBlackjack);
    assert_eq!(results[0].payout, 25_000);
    assert_eq!(player.balance(), 65_000); // 50k start, net +15k
    assert_eq!(player.wins(), 1);
}

#[test]
fn bust_nets_minus_one_bet() {
    let mut player = player_with_hand(&[Value::King, Value::Nine, Value::Five]);
    let dealer = hand_of(&[Value::Nine, Value::Seven]);
    let results = resolve_round(&mut player, &dealer);
    assert_eq!(results[0].outcome, Outcome::PlayerBust);
    assert_eq!(player.balance(), 40_000); // net -10k
    assert_eq!(player.losses(), 1);
}

#[test]
fn dealer_bust_nets_plus_one_bet() {
    let mut player = player_with_hand(&[Value::Nine, Value::Eight]);
    let dealer = hand_of(&[Value::King, Value::Nine, Value::Seven]);
    let results = resolve_round(&mut player, &dealer);
    assert_eq!(results[0].outcome, Outcome::DealerBust);
    assert_eq!(player.balance(), 60_000); // net +10k
    assert_eq!(player.wins(), 1);
}

#[test]
fn push_returns_the_stake() {
    let mut player = player_with_hand(&[Value::Nine, Value::Eight]);
    let dealer = hand_of(&[Value::Ten, Value::Seven]);
    let results = resolve_round(&mut player, &dealer);
    assert_eq!(results[0].outcome, Outcome::Push);
    assert_eq!(player.balance(), 50_000); // net 0
    assert_eq!(player.ties(), 1);
}

#[test]
fn both_naturals_net_zero() {
    let mut player = player_with_hand(&[Value::Ace, Value::King]);
    let dealer = hand_of(&[Value::Ace, Value::Queen]);
    let results = resolve_round(&mut player, &dealer);
    assert_eq!(results[0].outcome, Outcome::Push);
    assert_eq!(player.balance(), 50_000);
    assert_eq!(player.ties(), 1);
}

#[test]
fn split_hands_resolve_independently() {
    let mut player = Player::new("Ada", 36, 50_000);
    let idx = player.place_bet(10_000).unwrap();
    player.hand_mut(idx).unwrap().add_card(card(Value::Eight));
    player.hand_mut(idx).unwrap().add_card(card(Value::Eight));
    let sibling = player.split_hand(idx).unwrap();
    // first hand draws to 20, second busts
    player.hand_mut(idx).unwrap().add_card(card(Value::Queen));
    player.hand_mut(sibling).unwrap().add_card(card(Value::King));
    player.hand_mut(sibling).unwrap().add_card(card(Value::Ten));

    let dealer = hand_of(&[Value::Ten, Value::Nine]);
    let results = resolve_round(&mut player, &dealer);
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].outcome, Outcome::PlayerHigher);
    assert_eq!(results[1].outcome, Outcome::PlayerBust);
    // 50k - 10k - 10k (split) + 20k (first hand win) = 50k
    assert_eq!(player.balance(), 50_000);
    assert_eq!(player.wins(), 1);
    assert_eq!(player.losses(), 1);
}

#[test]
fn dealer_hits_below_seventeen() {
    let mut shoe = Shoe::with_seed(6, 11).unwrap();
    let mut dealer = hand_of(&[Value::Two, Value::Three]);
    play_dealer_hand(&mut dealer, &mut shoe);
    assert!(dealer.value() >= 17);
    assert!(dealer.cards().len() > 2);
}

#[test]
fn dealer_stands_on_hard_seventeen() {
    let mut shoe = Shoe::with_seed(6, 11).unwrap();
    let mut dealer = hand_of(&[Value::Ten, Value::Seven]);
    play_dealer_hand(&mut dealer, &mut shoe);
    assert_eq!(dealer.cards().len(), 2);
    assert_eq!(dealer.value(), 17);
}

#[test]
fn dealer_hits_soft_seventeen() {
    let mut shoe = Shoe::with_seed(6, 11).unwrap();
    let mut dealer = hand_of(&[Value::Ace, Value::Six]);
    play_dealer_hand(&mut dealer, &mut shoe);
    assert!(dealer.cards().len() > 2, "soft 17 must take a card");
    let v = dealer.value();
    assert!(v >= 17 || v > 21);
}

#[test]
fn dealer_stands_on_multi_ace_hard_seventeen() {
    // A + A + 5 is 17 but hard under the unadjusted-sum rule
    let mut shoe = Shoe::with_seed(6, 11).unwrap();
    let mut dealer = hand_of(&[Value::Ace, Value::Ace, Value::Five]);
    play_dealer_hand(&mut dealer, &mut shoe);
    assert_eq!(dealer.cards().len(), 3);
    assert_eq!(dealer.value(), 17);
}

#[test]
fn dealer_turn_terminates_from_any_start() {
    // sweep seeds and starting pairs; the loop must always end at >= 17 or a
    // bust, and within a sane number of draws
    let starts = [
        [Value::Two, Value::Two],
        [Value::Two, Value::Three],
        [Value::Six, Value::Ten],
        [Value::Ace, Value::Ace],
        [Value::Ace, Value::Six],
        [Value::Ten, Value::Six],
    ];
    for seed in 0..50u64 {
        for start in &starts {
            let mut shoe = Shoe::with_seed(6, seed).unwrap();
            let mut dealer = hand_of(start);
            play_dealer_hand(&mut dealer, &mut shoe);
            let v = dealer.value();
            assert!(
                (17..=21).contains(&v) || v > 21,
                "seed {} start {:?} ended at {}",
                seed,
                start,
                v
            );
            assert!(dealer.cards().len() <= 14, "implausibly long dealer draw");
        }
    }
}

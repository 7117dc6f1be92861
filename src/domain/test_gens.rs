// Proptest generators for domain types.
// These generators ensure unique cards and valid tricks/hands for
// property-based testing.

use proptest::prelude::*;
use rand::Rng as _;

use crate::domain::state::{next_seat, Play, Seat, Trick};
use crate::domain::{Card, Rank, Suit, TrumpConfig};

pub fn suit() -> impl Strategy<Value = Suit> {
    prop_oneof![
        Just(Suit::Spades),
        Just(Suit::Hearts),
        Just(Suit::Diamonds),
        Just(Suit::Clubs),
    ]
}

pub fn rank() -> impl Strategy<Value = Rank> {
    prop::sample::select(Rank::ALL.to_vec())
}

pub fn card() -> impl Strategy<Value = Card> {
    (suit(), rank()).prop_map(|(suit, rank)| Card { suit, rank })
}

pub fn seat() -> impl Strategy<Value = Seat> {
    prop_oneof![
        Just(Seat::Left),
        Just(Seat::Across),
        Just(Seat::Right),
        Just(Seat::Me),
    ]
}

/// Any trump configuration, including disabled.
pub fn trump_config() -> impl Strategy<Value = TrumpConfig> {
    prop_oneof![
        Just(TrumpConfig::NO_TRUMP),
        (suit(), any::<bool>()).prop_map(|(s, must_break)| TrumpConfig::suited(s, must_break)),
    ]
}

/// A vector of N unique cards, drawn as a shuffled subset of the deck.
pub fn unique_cards(count: usize) -> impl Strategy<Value = Vec<Card>> {
    Just(()).prop_perturb(move |_, mut rng| {
        let mut all_cards = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                all_cards.push(Card { suit, rank });
            }
        }
        for i in 0..count.min(all_cards.len()) {
            let j = rng.random_range(i..all_cards.len());
            all_cards.swap(i, j);
        }
        all_cards.truncate(count);
        all_cards
    })
}

/// A complete trick: 4 unique cards played in rotation from a random leader.
pub fn complete_trick() -> impl Strategy<Value = Trick> {
    (seat(), unique_cards(4)).prop_map(|(leader, cards)| {
        let mut plays = Vec::with_capacity(4);
        let mut s = leader;
        for card in cards {
            plays.push(Play { seat: s, card });
            s = next_seat(s);
        }
        Trick { plays }
    })
}

/// Four disjoint hands of equal size (1..=13 cards each), covering
/// 4*size unique cards.
pub fn four_equal_hands(size: usize) -> impl Strategy<Value = [Vec<Card>; 4]> {
    unique_cards(size * 4).prop_map(|cards| {
        let mut hands: [Vec<Card>; 4] = [vec![], vec![], vec![], vec![]];
        for (i, card) in cards.into_iter().enumerate() {
            hands[i % 4].push(card);
        }
        hands
    })
}

/// A hand containing no cards of the given suit (1..=13 cards).
pub fn hand_without_suit(excluded: Suit) -> impl Strategy<Value = Vec<Card>> {
    Just(()).prop_perturb(move |_, mut rng| {
        let mut cards = Vec::new();
        for suit in Suit::ALL.into_iter().filter(|&s| s != excluded) {
            for rank in Rank::ALL {
                cards.push(Card { suit, rank });
            }
        }
        let count = rng.random_range(1..=13usize);
        for i in 0..count {
            let j = rng.random_range(i..cards.len());
            cards.swap(i, j);
        }
        cards.truncate(count);
        cards
    })
}

//! Deterministic deck construction, shuffling, and dealing.

use crate::domain::cards_types::{Card, Rank, Suit};
use crate::domain::state::{Seat, SEATS};

/// The 52 canonical cards, 13 per suit, in suit-then-rank order.
pub fn build_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(52);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card::new(suit, rank));
        }
    }
    deck
}

/// Deterministic PRNG for shuffling.
///
/// SplitMix64 mixer: well-distributed, fast, and reproducible per seed. The
/// same seed always yields the same infinite draw sequence, which is what
/// makes seed-addressable deals and history replay possible.
#[derive(Debug, Clone)]
pub struct DealRng {
    state: u64,
}

impl DealRng {
    pub fn new(seed: u32) -> Self {
        Self {
            state: seed as u64,
        }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E3779B97F4A7C15);
        let mut z = self.state;
        z ^= z >> 30;
        z = z.wrapping_mul(0xBF58476D1CE4E5B9);
        z ^= z >> 27;
        z = z.wrapping_mul(0x94D049BB133111EB);
        z ^ (z >> 31)
    }

    /// One uniform draw in [0, 1). Every call consumes exactly one draw;
    /// shuffle reproducibility depends on that.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Fisher-Yates shuffle walking indices top-down, consuming exactly one draw
/// per position.
pub fn shuffle(cards: &mut [Card], rng: &mut DealRng) {
    for i in (1..cards.len()).rev() {
        let j = (rng.next_f64() * (i + 1) as f64) as usize;
        cards.swap(i, j);
    }
}

/// Shuffle the full deck once and deal round-robin, 13 rounds across the
/// seats in `Seat::ALL` order. Each seat receives exactly 13 cards; together
/// the hands cover the deck. Hands are returned sorted.
pub fn deal_new_hands(rng: &mut DealRng) -> [Vec<Card>; SEATS] {
    let mut deck = build_deck();
    shuffle(&mut deck, rng);

    let mut hands: [Vec<Card>; SEATS] = Default::default();
    for (i, card) in deck.into_iter().enumerate() {
        hands[Seat::ALL[i % SEATS].index()].push(card);
    }
    for hand in &mut hands {
        hand.sort();
    }
    hands
}

//! Bidding-aware trick play.
//!
//! The chooser steers by the bid-vs-tricks-won gap: while tricks are still
//! needed it hunts wins cheaply (preferring non-trump winners to conserve
//! trump) and leads to set up ruffs or cash long-suit strength; once the bid
//! is met it ducks, shedding the lowest-value card with trump counted as the
//! most expensive thing to waste.

use std::sync::Mutex;

use rand::prelude::*;

use super::{AiError, CardChooser, PlayView};
use crate::domain::cards_logic::{card_beats, is_trump};
use crate::domain::cards_types::{Card, Rank, Suit, TrumpConfig};
use crate::domain::state::Trick;

/// Choose the card a seat plays, given its legal set and its bid progress.
/// Returns None only for an empty legal set. Ties in the lowest-value
/// fallback are broken through `rng`, so tests can pin the choice by
/// seeding.
pub fn choose_card_to_play_for_bid<R: Rng + ?Sized>(
    hand: &[Card],
    legal: &[Card],
    trick: &Trick,
    trump: &TrumpConfig,
    bid: u8,
    tricks_won: u8,
    rng: &mut R,
) -> Option<Card> {
    if legal.is_empty() {
        return None;
    }
    let needs_tricks = tricks_won < bid;

    if trick.is_empty() {
        if needs_tricks {
            lead_for_tricks(hand, legal, trump).or_else(|| lowest_value(legal, trump, rng))
        } else {
            lowest_value(legal, trump, rng)
        }
    } else if needs_tricks {
        follow_for_tricks(legal, trick, trump).or_else(|| lowest_value(legal, trump, rng))
    } else {
        lowest_value(legal, trump, rng)
    }
}

/// Shed value: trump ranks above every natural rank, so a low off-suit card
/// always goes before a trump.
fn card_value(card: Card, trump: &TrumpConfig) -> u16 {
    card.rank.value() as u16 + if is_trump(card, trump) { 100 } else { 0 }
}

fn lowest_value<R: Rng + ?Sized>(
    legal: &[Card],
    trump: &TrumpConfig,
    rng: &mut R,
) -> Option<Card> {
    let min = legal.iter().map(|&c| card_value(c, trump)).min()?;
    let ties: Vec<Card> = legal
        .iter()
        .copied()
        .filter(|&c| card_value(c, trump) == min)
        .collect();
    ties.choose(rng).copied()
}

/// Following with tricks still needed: cheapest card that takes the trick,
/// non-trump before trump; None when the trick cannot be won.
fn follow_for_tricks(legal: &[Card], trick: &Trick, trump: &TrumpConfig) -> Option<Card> {
    let lead = trick.lead_suit()?;
    let mut best = trick.plays.first()?.card;
    for play in &trick.plays[1..] {
        if card_beats(play.card, best, lead, trump) {
            best = play.card;
        }
    }

    let winners: Vec<Card> = legal
        .iter()
        .copied()
        .filter(|&c| card_beats(c, best, lead, trump))
        .collect();
    if winners.is_empty() {
        return None;
    }
    let natural: Vec<Card> = winners
        .iter()
        .copied()
        .filter(|&c| !is_trump(c, trump))
        .collect();
    let pool = if natural.is_empty() { &winners } else { &natural };
    pool.iter().copied().min_by_key(|c| c.rank)
}

/// Leading with tricks still needed: shorten a short side suit for later
/// ruffs, otherwise cash the strongest suit's top card; on an all-trump
/// hand, pull trump from the top (ace) or from below.
fn lead_for_tricks(hand: &[Card], legal: &[Card], trump: &TrumpConfig) -> Option<Card> {
    let non_trump_suits: Vec<Suit> = Suit::ALL
        .into_iter()
        .filter(|&s| trump.suit() != Some(s))
        .filter(|&s| hand.iter().any(|c| c.suit == s))
        .collect();

    if non_trump_suits.is_empty() {
        // Only trump remains.
        let ace = legal
            .iter()
            .copied()
            .find(|c| c.rank == Rank::Ace && is_trump(*c, trump));
        return ace.or_else(|| legal.iter().copied().min_by_key(|c| c.rank));
    }

    let suit_len = |s: Suit| hand.iter().filter(|c| c.suit == s).count();

    // Any 1-2 card side suit: lead its lowest to empty it.
    if let Some(&short) = non_trump_suits
        .iter()
        .filter(|&&s| suit_len(s) <= 2)
        .min_by_key(|&&s| suit_len(s))
    {
        let low = legal
            .iter()
            .copied()
            .filter(|c| c.suit == short)
            .min_by_key(|c| c.rank);
        if low.is_some() {
            return low;
        }
    }

    // Strongest side suit by top card, longer suit on equal tops.
    let strongest = non_trump_suits.iter().copied().max_by_key(|&s| {
        let top = hand
            .iter()
            .filter(|c| c.suit == s)
            .map(|c| c.rank)
            .max()
            .map_or(0, |r| r.value());
        (top, suit_len(s))
    })?;
    legal
        .iter()
        .copied()
        .filter(|c| c.suit == strongest)
        .max_by_key(|c| c.rank)
}

/// [`CardChooser`] wrapper around [`choose_card_to_play_for_bid`].
pub struct BidAwareChooser {
    rng: Mutex<StdRng>,
}

impl BidAwareChooser {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl CardChooser for BidAwareChooser {
    fn choose_card(&self, view: &PlayView<'_>) -> Result<Card, AiError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))?;
        choose_card_to_play_for_bid(
            view.hand,
            view.legal,
            view.trick,
            view.trump,
            view.bid,
            view.tricks_won,
            &mut *rng,
        )
        .ok_or(AiError::NoLegalMoves)
    }
}

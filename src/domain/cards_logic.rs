//! Card game logic: suit membership, trick comparison, winner determination,
//! hand sorting.

use std::cmp::Ordering;

use crate::domain::cards_types::{Card, Suit, TrumpConfig};
use crate::domain::state::{Seat, Trick};
use crate::error::EngineError;

pub fn is_trump(card: Card, trump: &TrumpConfig) -> bool {
    trump.suit() == Some(card.suit)
}

pub fn hand_has_suit(hand: &[Card], suit: Suit) -> bool {
    hand.iter().any(|c| c.suit == suit)
}

/// Lead suit of a trick: suit of the first play, or None if empty.
pub fn trick_lead_suit(trick: &Trick) -> Option<Suit> {
    trick.plays.first().map(|p| p.card.suit)
}

/// Whether `a` strictly beats `b` in a trick with the given lead suit.
///
/// Ranking rule, in priority order: trump beats non-trump; a card following
/// the lead suit beats one that doesn't; within the same suit, higher rank
/// wins. Two off-suit non-trump cards of different suits are incomparable:
/// `a` does not beat `b`, so the earlier card is retained by the winner fold.
pub fn card_beats(a: Card, b: Card, lead: Suit, trump: &TrumpConfig) -> bool {
    let a_trump = is_trump(a, trump);
    let b_trump = is_trump(b, trump);
    if a_trump != b_trump {
        return a_trump;
    }
    // Same trump status: lead suit outranks off-suit, then rank decides.
    let a_follows = a.suit == lead;
    let b_follows = b.suit == lead;
    if a_trump || (a_follows && b_follows) {
        return a.rank > b.rank;
    }
    if a_follows != b_follows {
        return a_follows;
    }
    false
}

/// Three-way projection of [`card_beats`].
///
/// `Equal` covers both the same-suit-same-rank case (cannot occur with a
/// well-formed deck, but tolerated) and the incomparable off-suit case; an
/// `Equal` result never displaces the current best play.
pub fn compare_cards_in_trick(a: Card, b: Card, lead: Suit, trump: &TrumpConfig) -> Ordering {
    if card_beats(a, b, lead, trump) {
        Ordering::Greater
    } else if card_beats(b, a, lead, trump) {
        Ordering::Less
    } else {
        Ordering::Equal
    }
}

/// Winning seat of a non-empty trick.
///
/// Folds over the plays strictly left-to-right, keeping the current best and
/// replacing it only on a strict beat. The fold order is load-bearing:
/// off-suit non-trump cards are mutually incomparable, so a global max over
/// an arbitrary order would produce different winners.
pub fn determine_trick_winner(trick: &Trick, trump: &TrumpConfig) -> Result<Seat, EngineError> {
    let first = trick
        .plays
        .first()
        .ok_or_else(|| EngineError::invalid_state("cannot determine winner of empty trick"))?;
    let lead = first.card.suit;

    let mut best = first;
    for play in &trick.plays[1..] {
        if card_beats(play.card, best.card, lead, trump) {
            best = play;
        }
    }
    Ok(best.seat)
}

/// Stable sort by suit position in `suit_order`, then rank. Returns a new
/// sequence; the input is not mutated.
pub fn sort_hand(hand: &[Card], suit_order: &[Suit; 4], ascending: bool) -> Vec<Card> {
    let suit_pos = |s: Suit| suit_order.iter().position(|&o| o == s).unwrap_or(4);
    let mut sorted = hand.to_vec();
    sorted.sort_by(|a, b| {
        suit_pos(a.suit).cmp(&suit_pos(b.suit)).then_with(|| {
            if ascending {
                a.rank.cmp(&b.rank)
            } else {
                b.rank.cmp(&a.rank)
            }
        })
    });
    sorted
}

//! Bidding: per-hand bid collection, exact-bid evaluation, and the
//! hand-strength estimator driving non-human seats.
//!
//! The estimator is a deliberately approximate sacrifice model, not a
//! double-dummy solver: an honor scores fully when the suit holds enough
//! low cards to draw out the missing higher honors, half when exactly one
//! short, and nothing otherwise. Its arithmetic is the contract; it is not
//! meant to be a realistic bidding system.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::cards_types::{Card, Rank, Suit, TrumpConfig};
use crate::domain::state::{next_seat, Seat, SEATS, TRICKS_PER_HAND};
use crate::error::{EngineError, ValidationKind};

/// Bidding round state: a fixed seat sequence, progress through it, and the
/// collected bids. Created fresh per hand, immutable once complete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BidState {
    /// Seat sequence for bidding, rotation order from the start seat.
    pub order: [Seat; SEATS],
    /// Position of the next bidder within `order`.
    pub index: usize,
    /// Bids per seat (indexed by `Seat::index`).
    pub bids: [Option<u8>; SEATS],
    /// Whether each seat's bid has been revealed to the table.
    pub revealed: [bool; SEATS],
}

pub fn init_bid_state(start_seat: Seat) -> BidState {
    let mut order = [start_seat; SEATS];
    for i in 1..SEATS {
        order[i] = next_seat(order[i - 1]);
    }
    BidState {
        order,
        index: 0,
        bids: [None; SEATS],
        revealed: [false; SEATS],
    }
}

/// Seat expected to bid next, or None once all four have bid.
pub fn current_bidder(bid_state: &BidState) -> Option<Seat> {
    bid_state.order.get(bid_state.index).copied()
}

pub fn is_bidding_complete(bid_state: &BidState) -> bool {
    bid_state.index >= SEATS
}

/// Record a bid for the seat whose turn it is.
pub fn submit_bid(bid_state: &BidState, seat: Seat, bid: u8) -> Result<BidState, EngineError> {
    let Some(expected) = current_bidder(bid_state) else {
        return Err(EngineError::validation(
            ValidationKind::BiddingComplete,
            "all four seats have bid",
        ));
    };
    if seat != expected {
        return Err(EngineError::validation(
            ValidationKind::OutOfTurn,
            format!("expected {expected:?} to bid"),
        ));
    }
    if bid > TRICKS_PER_HAND {
        return Err(EngineError::validation(
            ValidationKind::BidOutOfRange,
            format!("bid {bid} exceeds {TRICKS_PER_HAND}"),
        ));
    }

    let mut next = bid_state.clone();
    next.bids[seat.index()] = Some(bid);
    next.revealed[seat.index()] = true;
    next.index += 1;
    debug!(?seat, bid, "bid submitted");
    Ok(next)
}

/// Per-seat outcome of a finished hand, tricks-made-vs-bid only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BidOutcome {
    pub seat: Seat,
    pub bid: Option<u8>,
    pub tricks_won: u8,
    pub made_exact: bool,
    /// tricks won minus bid; None for a seat that never bid.
    pub delta: Option<i8>,
}

pub fn evaluate_exact_bids(
    bids: &[Option<u8>; SEATS],
    tricks_won: &[u8; SEATS],
) -> [BidOutcome; SEATS] {
    let mut outcomes = [BidOutcome {
        seat: Seat::Left,
        bid: None,
        tricks_won: 0,
        made_exact: false,
        delta: None,
    }; SEATS];
    for seat in Seat::ALL {
        let i = seat.index();
        let bid = bids[i];
        outcomes[i] = BidOutcome {
            seat,
            bid,
            tricks_won: tricks_won[i],
            made_exact: bid == Some(tricks_won[i]),
            delta: bid.map(|b| tricks_won[i] as i8 - b as i8),
        };
    }
    outcomes
}

/// Honors counted toward bidding in the given suit: Q/K/A, widened to
/// 10/J/Q/K/A for the trump suit.
fn bidding_honors(suit: Suit, trump: &TrumpConfig) -> &'static [Rank] {
    if trump.suit() == Some(suit) {
        &[Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace]
    } else {
        &[Rank::Queen, Rank::King, Rank::Ace]
    }
}

/// One suit's slice of the estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuitBreakdown {
    pub suit: Suit,
    pub length: usize,
    /// Bidding honors held, descending.
    pub honors_held: Vec<Rank>,
    /// Effective sacrifice pool: held low cards, plus the ruffing bonus for
    /// the trump suit.
    pub sacrifices: f64,
    /// Honor credits before the length cap.
    pub raw_points: f64,
    /// Length cap applied to this suit, if any.
    pub cap: Option<f64>,
    /// Contribution to the estimate after capping.
    pub points: f64,
}

/// Full estimate breakdown, exposed for testability and for the bidding-aware
/// trick-play AI's fallback scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BidBreakdown {
    pub suits: [SuitBreakdown; 4],
    /// Short-suit ruffing bonus (singleton +1, doubleton +0.5); folded into
    /// the trump suit's sacrifice pool. Zero when trump is disabled.
    pub ruff_bonus: f64,
    pub raw_total: f64,
    pub bid: u8,
}

/// Scalar bid estimate for a hand.
pub fn estimate_bid(hand: &[Card], trump: &TrumpConfig) -> u8 {
    build_bid_breakdown(hand, trump).bid
}

pub fn build_bid_breakdown(hand: &[Card], trump: &TrumpConfig) -> BidBreakdown {
    let ruff_bonus = if trump.enabled() {
        Suit::ALL
            .into_iter()
            .filter(|&s| trump.suit() != Some(s))
            .map(|s| match hand.iter().filter(|c| c.suit == s).count() {
                1 => 1.0,
                2 => 0.5,
                _ => 0.0,
            })
            .sum()
    } else {
        0.0
    };

    let suits = Suit::ALL.map(|suit| score_suit(hand, suit, trump, ruff_bonus));

    let raw_total: f64 = suits.iter().map(|s| s.points).sum();
    let bid = (raw_total.floor() as i64).clamp(0, TRICKS_PER_HAND as i64) as u8;

    BidBreakdown {
        suits,
        ruff_bonus,
        raw_total,
        bid,
    }
}

fn score_suit(hand: &[Card], suit: Suit, trump: &TrumpConfig, ruff_bonus: f64) -> SuitBreakdown {
    let is_trump_suit = trump.suit() == Some(suit);
    let honors = bidding_honors(suit, trump);
    let in_suit: Vec<Rank> = hand
        .iter()
        .filter(|c| c.suit == suit)
        .map(|c| c.rank)
        .collect();

    let mut honors_held: Vec<Rank> = in_suit
        .iter()
        .copied()
        .filter(|r| honors.contains(r))
        .collect();
    honors_held.sort_by(|a, b| b.cmp(a));

    let low_count = in_suit.len() - honors_held.len();
    let sacrifices = low_count as f64 + if is_trump_suit { ruff_bonus } else { 0.0 };

    let mut raw_points: f64 = 0.0;
    for &honor in &honors_held {
        let missing_higher = honors
            .iter()
            .filter(|&&h| h > honor && !honors_held.contains(&h))
            .count() as f64;
        let deficit = missing_higher - sacrifices;
        raw_points += if deficit <= 0.0 {
            1.0
        } else if deficit <= 1.0 {
            0.5
        } else {
            0.0
        };
    }

    let cap = if !trump.enabled() {
        Some(3.0)
    } else if is_trump_suit {
        None
    } else {
        Some(match in_suit.len() {
            0..=4 => 3.0,
            5 => 2.0,
            _ => 1.5,
        })
    };
    let points = cap.map_or(raw_points, |c| raw_points.min(c));

    SuitBreakdown {
        suit,
        length: in_suit.len(),
        honors_held,
        sacrifices,
        raw_points,
        cap,
        points,
    }
}

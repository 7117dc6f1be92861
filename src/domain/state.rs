//! Seats, tricks, and the central `GameState` aggregate.

use serde::{Deserialize, Serialize};

use crate::domain::cards_types::{Card, Suit};
use crate::domain::dealing::{deal_new_hands, DealRng};

pub const SEATS: usize = 4;
pub const TRICKS_PER_HAND: u8 = 13;

/// The four fixed seats. `Me` is the human seat; the other three are
/// opponents. Play always rotates Left → Across → Right → Me → Left.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Seat {
    Left,
    Across,
    Right,
    Me,
}

impl Seat {
    /// All seats in rotation (and deal) order.
    pub const ALL: [Seat; SEATS] = [Seat::Left, Seat::Across, Seat::Right, Seat::Me];

    pub fn index(self) -> usize {
        match self {
            Seat::Left => 0,
            Seat::Across => 1,
            Seat::Right => 2,
            Seat::Me => 3,
        }
    }

    pub fn is_human(self) -> bool {
        self == Seat::Me
    }
}

/// Next seat in the fixed rotation.
pub fn next_seat(seat: Seat) -> Seat {
    Seat::ALL[(seat.index() + 1) % SEATS]
}

/// One card placed on the table by one seat during the current trick.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Play {
    pub seat: Seat,
    pub card: Card,
}

/// An ordered sequence of 0..=4 plays. The first play's suit is the lead
/// suit; the trick is complete at exactly 4 plays, one per seat.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trick {
    pub plays: Vec<Play>,
}

impl Trick {
    pub fn new() -> Self {
        Self {
            plays: Vec::with_capacity(SEATS),
        }
    }

    pub fn len(&self) -> usize {
        self.plays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.plays.len() == SEATS
    }

    pub fn lead_suit(&self) -> Option<Suit> {
        self.plays.first().map(|p| p.card.suit)
    }

    /// Seats that have not yet played into this trick.
    pub fn seats_yet_to_play(&self) -> Vec<Seat> {
        Seat::ALL
            .into_iter()
            .filter(|s| !self.plays.iter().any(|p| p.seat == *s))
            .collect()
    }
}

/// The mutable-but-pure state of one dealt hand.
///
/// Created wholesale per deal and replaced on the next deal, never partially
/// reused. Hands are kept sorted by `Card`'s suit-then-rank order: the deal
/// sorts them, card removal preserves order, and trick undo re-sorts after
/// returning cards.
///
/// Card conservation invariant: for every seat, cards in hand + cards owned
/// by that seat in the current trick + that seat's plays in `trick_history`
/// always total 13.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub hands: [Vec<Card>; SEATS],
    pub tricks_won: [u8; SEATS],
    /// Seat that leads the current trick.
    pub leader: Seat,
    /// Seat whose play is next expected.
    pub turn: Seat,
    /// The in-progress trick.
    pub trick: Trick,
    /// Completed tricks, append-only during play; truncated only by undo.
    pub trick_history: Vec<Trick>,
    /// 1-based index of the current trick (1..=13).
    pub trick_no: u8,
    pub hand_complete: bool,
    /// True once any trump card has been played this hand. Monotonic except
    /// via undo recomputation.
    pub trump_broken: bool,
    /// {leader, turn} captured when the current trick began; restores state
    /// on mid-trick undo.
    pub trick_start_leader: Seat,
    pub trick_start_turn: Seat,
    /// Seed this hand was dealt from; the replay engine re-deals from it.
    pub seed: u32,
}

/// Deal a fresh hand from the seed. Trick 1 is led by `Seat::Left`, the
/// first seat in rotation order.
pub fn init_game_state(seed: u32) -> GameState {
    let mut rng = DealRng::new(seed);
    let hands = deal_new_hands(&mut rng);
    GameState {
        hands,
        tricks_won: [0; SEATS],
        leader: Seat::Left,
        turn: Seat::Left,
        trick: Trick::new(),
        trick_history: Vec::with_capacity(TRICKS_PER_HAND as usize),
        trick_no: 1,
        hand_complete: false,
        trump_broken: false,
        trick_start_leader: Seat::Left,
        trick_start_turn: Seat::Left,
        seed,
    }
}

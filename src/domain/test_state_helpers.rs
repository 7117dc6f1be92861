//! Test-only game state builder for domain unit tests.

use crate::domain::state::{GameState, Seat, Trick, SEATS};
use crate::domain::Card;

/// Build a `GameState` with the given hands and leader, bypassing the deal.
///
/// Hands are sorted on the way in so removal/undo round-trips compare equal.
pub fn state_with_hands(mut hands: [Vec<Card>; SEATS], leader: Seat) -> GameState {
    for hand in &mut hands {
        hand.sort();
    }
    GameState {
        hands,
        tricks_won: [0; SEATS],
        leader,
        turn: leader,
        trick: Trick::new(),
        trick_history: Vec::new(),
        trick_no: 1,
        hand_complete: false,
        trump_broken: false,
        trick_start_leader: leader,
        trick_start_turn: leader,
        seed: 0,
    }
}

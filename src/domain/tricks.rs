//! The turn/trick state machine: applying plays, resolving tricks,
//! advancing, and mid-trick undo.
//!
//! Every operation is immutable-in/immutable-out: it takes `&GameState` and
//! returns a fresh value, so a reader holding the previous state never
//! observes a torn update. The documented calling order is apply plays 1-4,
//! then resolve, then advance; resolve on an incomplete trick and redundant
//! advance/reset calls are tolerated as no-ops.

use tracing::debug;

use crate::domain::cards_logic::{determine_trick_winner, is_trump};
use crate::domain::cards_types::{Card, TrumpConfig};
use crate::domain::rules::{is_legal_play, legal_moves};
use crate::domain::state::{next_seat, GameState, Play, Seat, Trick, SEATS, TRICKS_PER_HAND};
use crate::error::{EngineError, ValidationKind};

/// Apply one play to the in-progress trick.
///
/// Legality is a precondition enforced by the orchestrating layer via
/// [`is_play_legal`]/[`compute_legal_by_seat`]; this operation only rejects
/// plays that are structurally impossible (hand complete, trick already
/// full, card not in the seat's hand), which indicate an orchestration bug.
pub fn apply_play(
    state: &GameState,
    play: Play,
    trump: &TrumpConfig,
) -> Result<GameState, EngineError> {
    if state.hand_complete {
        return Err(EngineError::validation(
            ValidationKind::HandComplete,
            "no plays accepted after the 13th trick",
        ));
    }
    if state.trick.is_complete() {
        return Err(EngineError::invalid_state(
            "trick already has 4 plays and awaits resolution",
        ));
    }

    let mut next = state.clone();

    let hand = &mut next.hands[play.seat.index()];
    let Some(pos) = hand.iter().position(|&c| c == play.card) else {
        return Err(EngineError::validation(
            ValidationKind::CardNotInHand,
            "card not in hand",
        ));
    };
    hand.remove(pos);

    // First play of the trick: capture the undo anchor.
    if next.trick.is_empty() {
        next.trick_start_leader = next.leader;
        next.trick_start_turn = next.turn;
    }

    next.trick.plays.push(play);
    next.trump_broken = next.trump_broken || is_trump(play.card, trump);

    // Turn stays on the last player while the full trick awaits resolution.
    if !next.trick.is_complete() {
        next.turn = next_seat(play.seat);
    }

    debug!(seat = ?play.seat, card = ?play.card, plays = next.trick.len(), "play applied");
    Ok(next)
}

/// Resolve a completed trick: credit the winner, append to history, and hand
/// the lead to the winner.
///
/// Returns the state unchanged unless the trick has exactly 4 plays; a trick
/// that already matches the history tail has been resolved and is also left
/// unchanged, so duplicate dispatch is harmless. The trick itself is not
/// cleared and `trick_no` does not advance — see [`advance_to_next_trick`] —
/// which lets the caller display the completed trick before moving on.
pub fn resolve_trick(state: &GameState, trump: &TrumpConfig) -> Result<GameState, EngineError> {
    if !state.trick.is_complete() {
        return Ok(state.clone());
    }
    // Identical plays cannot recur within a hand (cards are consumed), so a
    // matching tail means this exact trick was already resolved.
    if state.trick_history.last() == Some(&state.trick) {
        return Ok(state.clone());
    }

    let winner = determine_trick_winner(&state.trick, trump)?;

    let mut next = state.clone();
    next.tricks_won[winner.index()] += 1;
    next.trick_history.push(next.trick.clone());
    next.leader = winner;
    next.turn = winner;
    next.hand_complete = next.trick_no >= TRICKS_PER_HAND;

    debug!(?winner, trick_no = next.trick_no, "trick resolved");
    Ok(next)
}

/// Clear the resolved trick and move to the next trick number.
///
/// Caller must only invoke this after resolution; calling it redundantly
/// (empty trick) or after the hand completed is a no-op.
pub fn advance_to_next_trick(state: &GameState) -> GameState {
    if state.trick.is_empty() || state.hand_complete {
        return state.clone();
    }
    let mut next = state.clone();
    next.trick = Trick::new();
    next.trick_no += 1;
    next
}

/// Mid-trick undo: return every card in the in-progress trick to its owning
/// hand and rewind to the state captured when the trick began.
///
/// If the trick had already been resolved (still matching the history tail),
/// the winner's credit and the history entry are rolled back too, and
/// `trump_broken` is recomputed from the remaining history — undoing the
/// hand's only trump-breaking trick un-breaks trump. Calling this with an
/// empty trick is a no-op.
pub fn reset_trick(state: &GameState, trump: &TrumpConfig) -> GameState {
    if state.trick.is_empty() {
        return state.clone();
    }

    let mut next = state.clone();

    let resolved =
        next.trick.is_complete() && next.trick_history.last() == Some(&next.trick);
    if resolved {
        if let Ok(winner) = determine_trick_winner(&next.trick, trump) {
            next.tricks_won[winner.index()] = next.tricks_won[winner.index()].saturating_sub(1);
        }
        next.trick_history.pop();
    }

    for play in &next.trick.plays {
        next.hands[play.seat.index()].push(play.card);
    }
    for play in &next.trick.plays {
        next.hands[play.seat.index()].sort();
    }

    next.trump_broken = next
        .trick_history
        .iter()
        .flat_map(|t| &t.plays)
        .any(|p| is_trump(p.card, trump));

    next.leader = next.trick_start_leader;
    next.turn = next.trick_start_turn;
    next.trick = Trick::new();
    next.hand_complete = false;

    debug!(trick_no = next.trick_no, rolled_back_resolution = resolved, "trick reset");
    next
}

/// Legal card set per seat. A seat is the leader for legality purposes only
/// when it owns the lead and the trick is still empty.
pub fn compute_legal_by_seat(state: &GameState, trump: &TrumpConfig) -> [Vec<Card>; SEATS] {
    let mut legal: [Vec<Card>; SEATS] = Default::default();
    for seat in Seat::ALL {
        let is_leader = seat == state.leader && state.trick.is_empty();
        legal[seat.index()] = legal_moves(
            &state.hands[seat.index()],
            &state.trick,
            is_leader,
            trump,
            state.trump_broken,
        );
    }
    legal
}

/// Single-card convenience wrapper around the same legality check.
pub fn is_play_legal(state: &GameState, seat: Seat, card: Card, trump: &TrumpConfig) -> bool {
    let is_leader = seat == state.leader && state.trick.is_empty();
    is_legal_play(
        &state.hands[seat.index()],
        card,
        &state.trick,
        is_leader,
        trump,
        state.trump_broken,
    )
}

/// True once any trick has completed or any play exists in the current
/// trick. Hand-level configuration may only change while this is false.
pub fn is_hand_in_progress(state: &GameState) -> bool {
    !state.trick_history.is_empty() || !state.trick.is_empty()
}

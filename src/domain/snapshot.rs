//! History replay: reconstructing hand state at any point in trick history.
//!
//! A snapshot is a pure function of (history prefix, seed, trump): the deal
//! is re-derived from the seed and each historical play is replayed through
//! the same transition functions live play uses. No separate snapshot
//! storage exists, and resuming live play from a snapshot needs no extra
//! fixup — the undo anchors (`trick_start_*`) are reinstated by the replay
//! itself.

use serde::{Deserialize, Serialize};

use crate::domain::cards_types::TrumpConfig;
use crate::domain::state::{init_game_state, GameState, Trick};
use crate::domain::tricks::{advance_to_next_trick, apply_play, resolve_trick};
use crate::error::EngineError;

/// Reconstructed state at (trick, step) in history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistorySnapshot {
    /// The exact intermediate state a viewer would have seen live. Its
    /// `trick_history` is truncated to the tricks before the viewed point
    /// (including the viewed trick itself once `resolved`).
    pub state: GameState,
    /// True at step 4: the viewed trick has been resolved and the state
    /// awaits [`advance_to_next_trick`] to continue.
    pub resolved: bool,
}

/// Rebuild the state at `step` (0..=4) plays into the 1-based `trick_no` of
/// `history`, by re-dealing from `seed` and replaying.
///
/// At step 4 the viewed trick is also resolved: the winner is credited and
/// the history slice includes the trick. Resuming live play from the
/// returned state discards any tricks after the viewed point.
pub fn build_history_snapshot(
    history: &[Trick],
    trick_no: u8,
    step: usize,
    seed: u32,
    trump: &TrumpConfig,
) -> Result<HistorySnapshot, EngineError> {
    let idx = trick_no as usize;
    if idx == 0 || idx > history.len() {
        return Err(EngineError::invalid_state(format!(
            "trick {trick_no} is not in a history of {} tricks",
            history.len()
        )));
    }
    let target = &history[idx - 1];
    if step > target.plays.len() {
        return Err(EngineError::invalid_state(format!(
            "step {step} exceeds the {} recorded plays of trick {trick_no}",
            target.plays.len()
        )));
    }

    let mut state = init_game_state(seed);
    for trick in &history[..idx - 1] {
        state = replay_plays(state, trick, trick.plays.len(), trump)?;
        state = resolve_trick(&state, trump)?;
        state = advance_to_next_trick(&state);
    }

    state = replay_plays(state, target, step, trump)?;
    let resolved = step == target.plays.len() && target.is_complete();
    if resolved {
        state = resolve_trick(&state, trump)?;
    }

    Ok(HistorySnapshot { state, resolved })
}

/// Hand the reconstructed state back for live play. Subsequent plays,
/// resolutions, and mid-trick undo behave exactly as if the hand had been
/// played to this point without interruption.
pub fn resume_from_snapshot(snapshot: &HistorySnapshot) -> GameState {
    snapshot.state.clone()
}

/// Replay the first `count` plays of a recorded trick. The recorded leader
/// (first play's seat) anchors leader/turn before any play is applied, so
/// the undo snapshot taken by `apply_play` matches what live play captured.
fn replay_plays(
    mut state: GameState,
    trick: &Trick,
    count: usize,
    trump: &TrumpConfig,
) -> Result<GameState, EngineError> {
    let Some(first) = trick.plays.first() else {
        return Ok(state);
    };
    state.leader = first.seat;
    state.turn = first.seat;
    for play in trick.plays.iter().take(count) {
        state = apply_play(&state, *play, trump)?;
    }
    Ok(state)
}

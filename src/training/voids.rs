//! Void inference and the void/suit-count training prompts.
//!
//! The grid is derived, never authoritative: it is recomputed from the
//! append-only trick history (plus the in-progress trick) every time it is
//! needed, which makes the flags monotonic within a hand and lets undo work
//! without invalidation bookkeeping.

use serde::{Deserialize, Serialize};

use crate::domain::cards_types::{Suit, TrumpConfig};
use crate::domain::state::{next_seat, GameState, Seat, Trick, SEATS};

/// Per-opponent, per-suit "observed failing to follow" flags. The human
/// seat is never marked: the trainer already knows that hand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoidGrid {
    grid: [[bool; 4]; SEATS],
}

impl VoidGrid {
    pub fn is_void(&self, seat: Seat, suit: Suit) -> bool {
        self.grid[seat.index()][suit.index()]
    }

    /// Whether any opponent has been observed void in any suit.
    pub fn any_void(&self) -> bool {
        self.grid.iter().flatten().any(|&v| v)
    }

    pub fn seats_void_in(&self, suit: Suit) -> Vec<Seat> {
        Seat::ALL
            .into_iter()
            .filter(|&s| self.is_void(s, suit))
            .collect()
    }

    fn mark(&mut self, seat: Seat, suit: Suit) {
        if seat != Seat::Me {
            self.grid[seat.index()][suit.index()] = true;
        }
    }
}

/// Ground truth from observed play: every play after the first of a trick
/// whose suit differs from the lead suit proves its seat void in the lead
/// suit. The in-progress trick contributes once a follower has acted.
pub fn compute_actual_void(trick_history: &[Trick], current_trick: &Trick) -> VoidGrid {
    let mut voids = VoidGrid::default();
    let tricks = trick_history
        .iter()
        .chain((current_trick.len() > 1).then_some(current_trick));
    for trick in tricks {
        let Some(lead) = trick.lead_suit() else {
            continue;
        };
        for play in &trick.plays[1..] {
            if play.card.suit != lead {
                voids.mark(play.seat, lead);
            }
        }
    }
    voids
}

/// How much void evidence must exist before the prompt fires.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum VoidPromptScope {
    /// Prompt whenever any void has ever been observed this hand.
    AnyVoidObserved,
    /// Harder mode: prompt only when some opponent is already known void in
    /// the led suit itself.
    VoidInLeadSuit,
}

/// Training toggles for the void-confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoidTrainingConfig {
    /// Suits the trainer quizzes on, indexed by `Suit::index`.
    pub tracked_suits: [bool; 4],
    /// Only prompt after the human's own lead.
    pub only_when_leading: bool,
    pub scope: VoidPromptScope,
    /// Suppress the prompt when the human acts last and holds neither the
    /// lead suit nor a trump card — the answer could not change their play.
    pub skip_low_impact: bool,
}

impl Default for VoidTrainingConfig {
    fn default() -> Self {
        Self {
            tracked_suits: [true; 4],
            only_when_leading: false,
            scope: VoidPromptScope::AnyVoidObserved,
            skip_low_impact: false,
        }
    }
}

/// Decide whether the void prompt fires for the current trick's fresh lead;
/// returns the lead suit to quiz on.
///
/// Fires only on a trick with exactly one play, never on trick 1 (no
/// information exists yet).
pub fn get_void_prompt_lead(
    state: &GameState,
    trump: &TrumpConfig,
    config: &VoidTrainingConfig,
) -> Option<Suit> {
    if state.trick.len() != 1 || state.trick_no <= 1 {
        return None;
    }
    let lead_play = state.trick.plays[0];
    let lead = lead_play.card.suit;
    if !config.tracked_suits[lead.index()] {
        return None;
    }
    if config.only_when_leading && lead_play.seat != Seat::Me {
        return None;
    }

    let voids = compute_actual_void(&state.trick_history, &state.trick);
    let evidence = match config.scope {
        VoidPromptScope::AnyVoidObserved => voids.any_void(),
        VoidPromptScope::VoidInLeadSuit => !voids.seats_void_in(lead).is_empty(),
    };
    if !evidence {
        return None;
    }

    if config.skip_low_impact && next_seat(Seat::Me) == lead_play.seat {
        let my_hand = &state.hands[Seat::Me.index()];
        let holds_lead = my_hand.iter().any(|c| c.suit == lead);
        let holds_trump = trump
            .suit()
            .map(|t| my_hand.iter().any(|c| c.suit == t))
            .unwrap_or(false);
        if !holds_lead && !holds_trump {
            return None;
        }
    }

    Some(lead)
}

/// Decide whether the suit-count prompt fires: at most once per suit per
/// hand, on the first off-suit play observed against that lead suit.
pub fn should_prompt_suit_count(state: &GameState) -> Option<Suit> {
    let lead = state.trick.lead_suit()?;

    let off_suit_count = state
        .trick
        .plays
        .iter()
        .skip(1)
        .filter(|p| p.card.suit != lead)
        .count();
    if off_suit_count != 1 {
        return None;
    }

    let already_prompted = state.trick_history.iter().any(|t| {
        t.lead_suit() == Some(lead) && t.plays.iter().skip(1).any(|p| p.card.suit != lead)
    });
    if already_prompted {
        return None;
    }

    Some(lead)
}

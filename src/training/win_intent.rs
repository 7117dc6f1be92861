//! Win-intent advisor: decides when to ask the human "do you intend to win
//! this trick?" and assesses what could still beat the candidate card.
//!
//! The deck partitions into: cards seen in play (history + current trick),
//! cards in the human's own hand, and the unseen remainder spread over the
//! opponents. Risk comes from that remainder — higher cards in the
//! candidate's effective suit, and trump held by opponents known void in the
//! lead suit.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::cards_logic::card_beats;
use crate::domain::cards_types::{Card, Rank, Suit, TrumpConfig};
use crate::domain::state::{GameState, Seat};
use crate::training::voids::{compute_actual_void, VoidGrid};

/// Training toggles for the win-intent prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinIntentConfig {
    pub enabled: bool,
    /// Candidates below this rank never prompt.
    pub min_rank: Rank,
    /// Restrict the higher-card analysis to honors (J/Q/K/A).
    pub honors_only: bool,
}

impl Default for WinIntentConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            min_rank: Rank::Jack,
            honors_only: true,
        }
    }
}

/// Why a confirmed win attempt is at risk.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum WinIntentWarning {
    HigherCardOrTrump,
    HigherCard,
    CanBeTrumped,
}

impl fmt::Display for WinIntentWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WinIntentWarning::HigherCardOrTrump => write!(f, "beaten by a higher card or trump"),
            WinIntentWarning::HigherCard => write!(f, "beaten by a higher card"),
            WinIntentWarning::CanBeTrumped => write!(f, "can be trumped"),
        }
    }
}

/// Assessment reported after the human confirms intent to win.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WinIntentAssessment {
    /// Unseen ranks above the candidate in its effective suit, descending,
    /// excluding the human's own holdings. Honors only when configured.
    pub higher_ranks: Vec<Rank>,
    /// Opponents known void in the lead suit but not (yet) known void in
    /// trump: the seats that could ruff.
    pub trump_threats: Vec<Seat>,
    /// None when neither risk applies.
    pub warning: Option<WinIntentWarning>,
}

/// Ranks above `above` in `suit` that are neither in the human's hand nor
/// already seen in play this hand. Descending. With `honors_only`, only
/// J/Q/K/A are considered.
pub fn remaining_honors_in_suit(
    state: &GameState,
    suit: Suit,
    above: Rank,
    honors_only: bool,
) -> Vec<Rank> {
    let seen_or_mine = |rank: Rank| {
        let card = Card::new(suit, rank);
        state.hands[Seat::Me.index()].contains(&card)
            || state
                .trick_history
                .iter()
                .flat_map(|t| &t.plays)
                .chain(&state.trick.plays)
                .any(|p| p.card == card)
    };

    Rank::ALL
        .into_iter()
        .rev()
        .filter(|&r| r > above)
        .filter(|&r| !honors_only || r.is_honor())
        .filter(|&r| !seen_or_mine(r))
        .collect()
}

/// Whether some honor above the candidate in its effective suit is still out
/// against the human.
/// Higher cards compete within the candidate's own suit: for a trump card
/// that is the trump suit, for anything else its natural suit.
pub fn can_be_beaten_by_honor(state: &GameState, candidate: Card) -> bool {
    !remaining_honors_in_suit(state, candidate.suit, candidate.rank, true).is_empty()
}

/// Opponents yet to act that are known void in the lead suit but not known
/// void in trump. Empty when trump is disabled or the candidate is itself
/// trump (the higher-trump risk is covered by the higher-ranks analysis).
fn trump_threats(
    state: &GameState,
    candidate: Card,
    lead: Suit,
    trump: &TrumpConfig,
    voids: &VoidGrid,
) -> Vec<Seat> {
    let Some(trump_suit) = trump.suit() else {
        return Vec::new();
    };
    if candidate.suit == trump_suit {
        return Vec::new();
    }
    state
        .trick
        .seats_yet_to_play()
        .into_iter()
        .filter(|&s| s != Seat::Me)
        .filter(|&s| voids.is_void(s, lead) && !voids.is_void(s, trump_suit))
        .collect()
}

/// Current best play of the in-progress trick under the fold rule.
fn current_best(state: &GameState, trump: &TrumpConfig) -> Option<Card> {
    let lead = state.trick.lead_suit()?;
    let mut best = state.trick.plays.first()?.card;
    for play in &state.trick.plays[1..] {
        if card_beats(play.card, best, lead, trump) {
            best = play.card;
        }
    }
    Some(best)
}

/// Eligibility for the "do you intend to win?" prompt, checked before the
/// human's candidate play is applied.
pub fn should_prompt_win_intent(
    state: &GameState,
    candidate: Card,
    trump: &TrumpConfig,
    config: &WinIntentConfig,
    human_auto_played: bool,
) -> bool {
    if !config.enabled || human_auto_played || state.turn != Seat::Me || state.hand_complete {
        return false;
    }
    // Prompting on the last play is pointless; by then winning is decided.
    if state.trick.len() >= 3 {
        return false;
    }
    if state.trick_no <= 1 {
        return false;
    }
    if candidate.rank < config.min_rank {
        return false;
    }

    let lead = state.trick.lead_suit().unwrap_or(candidate.suit);
    let voids = compute_actual_void(&state.trick_history, &state.trick);
    let threats = trump_threats(state, candidate, lead, trump, &voids);

    // A lead-suit ace only loses to a ruff; skip unless someone could
    // plausibly be void in the lead suit.
    if candidate.rank == Rank::Ace && candidate.suit == lead && threats.is_empty() {
        return false;
    }

    // Already losing the trick: the warning would be about a different card.
    if let Some(best) = current_best(state, trump) {
        if !card_beats(candidate, best, lead, trump) {
            return false;
        }
    }

    // Everyone left is void in the lead suit: a lead-suit beat is impossible
    // and any ruff risk is carried by the trump-threat branch.
    if candidate.suit == lead {
        let all_remaining_void = state
            .trick
            .seats_yet_to_play()
            .into_iter()
            .filter(|&s| s != Seat::Me)
            .all(|s| voids.is_void(s, lead));
        if all_remaining_void && threats.is_empty() {
            return false;
        }
    }

    let higher =
        remaining_honors_in_suit(state, candidate.suit, candidate.rank, config.honors_only);
    !higher.is_empty() || !threats.is_empty()
}

/// Assess a confirmed win attempt: what higher cards remain, who could ruff,
/// and the resulting warning (None when the attempt is safe).
pub fn evaluate_win_intent(
    state: &GameState,
    candidate: Card,
    trump: &TrumpConfig,
    config: &WinIntentConfig,
) -> WinIntentAssessment {
    let lead = state.trick.lead_suit().unwrap_or(candidate.suit);
    let higher_ranks =
        remaining_honors_in_suit(state, candidate.suit, candidate.rank, config.honors_only);
    let voids = compute_actual_void(&state.trick_history, &state.trick);
    let trump_threats = trump_threats(state, candidate, lead, trump, &voids);

    let warning = match (!higher_ranks.is_empty(), !trump_threats.is_empty()) {
        (true, true) => Some(WinIntentWarning::HigherCardOrTrump),
        (true, false) => Some(WinIntentWarning::HigherCard),
        (false, true) => Some(WinIntentWarning::CanBeTrumped),
        (false, false) => None,
    };

    WinIntentAssessment {
        higher_ranks,
        trump_threats,
        warning,
    }
}

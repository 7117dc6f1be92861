//! Play legality: must-follow, must-break, and the reason enum the UI
//! consumes to explain refusals.

use serde::{Deserialize, Serialize};

use crate::domain::cards_logic::{hand_has_suit, is_trump};
use crate::domain::cards_types::{Card, TrumpConfig};
use crate::domain::state::Trick;

/// Outcome of a legality check. The boolean result is the logical AND of the
/// three independent rules; the variant order of checks only determines
/// which reason gets reported.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayLegality {
    Legal,
    /// The card is not physically present in the hand.
    NotInHand,
    /// Leading trump before trump is broken while holding a non-trump card.
    MustBreakTrump,
    /// The hand holds the lead suit but the card does not follow it.
    MustFollowSuit,
}

impl PlayLegality {
    pub fn is_legal(self) -> bool {
        self == PlayLegality::Legal
    }
}

/// Classify a candidate play.
///
/// Rules, checked in reporting order:
/// 1. the card must be in the hand;
/// 2. when leading with trump enabled, must-break on, and trump unbroken,
///    a trump lead is illegal unless the hand holds nothing but trump;
/// 3. when the trick has a lead suit, an off-suit card is illegal if the
///    hand holds any card of the lead suit.
pub fn classify_play(
    hand: &[Card],
    card: Card,
    trick: &Trick,
    is_leader: bool,
    trump: &TrumpConfig,
    trump_broken: bool,
) -> PlayLegality {
    if !hand.contains(&card) {
        return PlayLegality::NotInHand;
    }

    if trick.is_empty() && is_leader {
        let leading_trump_early =
            trump.enabled() && trump.must_break && !trump_broken && is_trump(card, trump);
        if leading_trump_early && hand.iter().any(|&c| !is_trump(c, trump)) {
            return PlayLegality::MustBreakTrump;
        }
        return PlayLegality::Legal;
    }

    if let Some(lead) = trick.lead_suit() {
        if card.suit != lead && hand_has_suit(hand, lead) {
            return PlayLegality::MustFollowSuit;
        }
    }

    PlayLegality::Legal
}

/// Boolean projection of [`classify_play`].
pub fn is_legal_play(
    hand: &[Card],
    card: Card,
    trick: &Trick,
    is_leader: bool,
    trump: &TrumpConfig,
    trump_broken: bool,
) -> bool {
    classify_play(hand, card, trick, is_leader, trump, trump_broken).is_legal()
}

/// Legal cards a hand may play into the given trick.
pub fn legal_moves(
    hand: &[Card],
    trick: &Trick,
    is_leader: bool,
    trump: &TrumpConfig,
    trump_broken: bool,
) -> Vec<Card> {
    hand.iter()
        .copied()
        .filter(|&c| is_legal_play(hand, c, trick, is_leader, trump, trump_broken))
        .collect()
}

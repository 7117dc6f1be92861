//! Property tests for play legality (pure domain).
//!
//! Properties tested:
//! - A hand holding the lead suit may only follow it
//! - A hand void in the lead suit may play anything
//! - Must-break forbids trump leads exactly until trump breaks or the hand
//!   is all trump
//! - legal_moves is consistent with the per-card predicate

use proptest::prelude::*;

use crate::domain::rules::{classify_play, is_legal_play, legal_moves, PlayLegality};
use crate::domain::state::{Play, Seat, Trick};
use crate::domain::{test_gens, test_prelude, Card, Rank, TrumpConfig};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: holding the lead suit rejects every off-suit card.
    #[test]
    fn prop_must_follow_rejects_all_off_suit_cards(
        hand in test_gens::unique_cards(8),
        lead_seat in test_gens::seat(),
        lead_rank in test_gens::rank(),
        trump in test_gens::trump_config(),
    ) {
        let lead_suit = hand[0].suit; // guarantee the hand can follow
        let trick = Trick {
            plays: vec![Play {
                seat: lead_seat,
                card: Card { suit: lead_suit, rank: lead_rank },
            }],
        };
        for &card in &hand {
            let legality = classify_play(&hand, card, &trick, false, &trump, false);
            if card.suit == lead_suit {
                prop_assert_eq!(legality, PlayLegality::Legal);
            } else {
                prop_assert_eq!(legality, PlayLegality::MustFollowSuit);
            }
        }
    }

    /// Property: void in the lead suit, every held card is legal.
    #[test]
    fn prop_void_hand_is_unconstrained(
        (lead_suit, hand) in test_gens::suit()
            .prop_flat_map(|s| (Just(s), test_gens::hand_without_suit(s))),
        lead_rank in test_gens::rank(),
        trump in test_gens::trump_config(),
    ) {
        let trick = Trick {
            plays: vec![Play {
                seat: Seat::Left,
                card: Card { suit: lead_suit, rank: lead_rank },
            }],
        };
        for &card in &hand {
            prop_assert!(is_legal_play(&hand, card, &trick, false, &trump, false));
        }
    }

    /// Property: an unbroken must-break lead bans exactly the trump cards,
    /// and only while a non-trump card is held.
    #[test]
    fn prop_must_break_gates_trump_leads(
        hand in test_gens::unique_cards(6),
        trump_suit in test_gens::suit(),
    ) {
        let trump = TrumpConfig::suited(trump_suit, true);
        let holds_non_trump = hand.iter().any(|c| c.suit != trump_suit);
        for &card in &hand {
            let unbroken = classify_play(&hand, card, &Trick::new(), true, &trump, false);
            let broken = classify_play(&hand, card, &Trick::new(), true, &trump, true);
            prop_assert_eq!(broken, PlayLegality::Legal, "broken trump frees every lead");
            if card.suit == trump_suit && holds_non_trump {
                prop_assert_eq!(unbroken, PlayLegality::MustBreakTrump);
            } else {
                prop_assert_eq!(unbroken, PlayLegality::Legal);
            }
        }
    }

    /// Property: legal_moves equals the per-card predicate over the hand.
    #[test]
    fn prop_legal_moves_matches_predicate(
        hand in test_gens::unique_cards(10),
        trick in test_gens::complete_trick(),
        trump in test_gens::trump_config(),
        is_leader in any::<bool>(),
        trump_broken in any::<bool>(),
    ) {
        // a partial trick: drop the tail so following is actually possible
        let mut partial = trick;
        partial.plays.truncate(2);
        let legal = legal_moves(&hand, &partial, is_leader, &trump, trump_broken);
        for &card in &hand {
            let expected = is_legal_play(&hand, card, &partial, is_leader, &trump, trump_broken);
            prop_assert_eq!(legal.contains(&card), expected);
        }
        prop_assert!(legal.iter().all(|c| hand.contains(c)));
    }

    /// Property: a card outside the hand is never legal.
    #[test]
    fn prop_unheld_card_is_not_in_hand(
        cards in test_gens::unique_cards(5),
        trump in test_gens::trump_config(),
    ) {
        let (outside, hand) = (cards[0], cards[1..].to_vec());
        let legality = classify_play(&hand, outside, &Trick::new(), true, &trump, false);
        prop_assert_eq!(legality, PlayLegality::NotInHand);
    }
}

#[cfg(test)]
mod fixed_cases {
    use super::*;

    /// The sole-suit exception: an all-trump hand may lead trump unbroken.
    #[test]
    fn all_trump_hand_leads_trump_despite_must_break() {
        let trump = TrumpConfig::suited(crate::domain::Suit::Hearts, true);
        let hand = vec![
            Card::new(crate::domain::Suit::Hearts, Rank::Two),
            Card::new(crate::domain::Suit::Hearts, Rank::Ace),
        ];
        for &card in &hand {
            assert!(is_legal_play(&hand, card, &Trick::new(), true, &trump, false));
        }
    }
}

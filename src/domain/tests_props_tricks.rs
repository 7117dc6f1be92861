//! Property tests for trick resolution and the state machine (pure domain).
//!
//! Properties tested:
//! - The fold winner is the highest trump, else the highest lead-suit card
//! - reset_trick is an exact inverse of any prefix of applied plays
//! - A fully played hand conserves cards and credits 13 tricks

use proptest::prelude::*;
use proptest::test_runner::TestCaseError;
use rand::prelude::*;

use crate::domain::cards_logic::{determine_trick_winner, is_trump};
use crate::domain::rules::legal_moves;
use crate::domain::state::{init_game_state, GameState, Play, Seat};
use crate::domain::test_state_helpers::state_with_hands;
use crate::domain::tricks::{advance_to_next_trick, apply_play, reset_trick, resolve_trick};
use crate::domain::{test_gens, test_prelude};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: the fold picks the highest trump when any trump was
    /// played, otherwise the highest card of the lead suit.
    #[test]
    fn prop_winner_is_highest_trump_else_highest_of_lead(
        trick in test_gens::complete_trick(),
        trump in test_gens::trump_config(),
    ) {
        let winner = determine_trick_winner(&trick, &trump).unwrap();
        let winning_play = trick.plays.iter().find(|p| p.seat == winner).unwrap();
        let lead = trick.lead_suit().unwrap();

        let trumps: Vec<_> = trick
            .plays
            .iter()
            .filter(|p| is_trump(p.card, &trump))
            .collect();
        if let Some(best_trump) = trumps.iter().map(|p| p.card.rank).max() {
            prop_assert!(is_trump(winning_play.card, &trump));
            prop_assert_eq!(winning_play.card.rank, best_trump);
        } else {
            prop_assert_eq!(winning_play.card.suit, lead);
            let best_lead = trick
                .plays
                .iter()
                .filter(|p| p.card.suit == lead)
                .map(|p| p.card.rank)
                .max()
                .unwrap();
            prop_assert_eq!(winning_play.card.rank, best_lead);
        }
    }

    /// Property: undoing an in-progress trick restores hands, leader, and
    /// turn to their values before the first play.
    #[test]
    fn prop_reset_is_inverse_of_play_prefix(
        hands in test_gens::four_equal_hands(3),
        leader in test_gens::seat(),
        trump in test_gens::trump_config(),
        prefix_len in 1usize..=4,
    ) {
        let before = state_with_hands(hands, leader);
        let mut state = before.clone();
        for _ in 0..prefix_len {
            let seat = state.turn;
            let legal = legal_moves(
                &state.hands[seat.index()],
                &state.trick,
                seat == state.leader && state.trick.is_empty(),
                &trump,
                state.trump_broken,
            );
            prop_assume!(!legal.is_empty());
            state = apply_play(&state, Play { seat, card: legal[0] }, &trump).unwrap();
        }
        if state.trick.is_complete() {
            state = resolve_trick(&state, &trump).unwrap();
        }

        let restored = reset_trick(&state, &trump);
        prop_assert_eq!(&restored.hands, &before.hands);
        prop_assert_eq!(restored.leader, before.leader);
        prop_assert_eq!(restored.turn, before.turn);
        prop_assert_eq!(restored.tricks_won, before.tricks_won);
        prop_assert_eq!(restored.trick_history.len(), 0);
        prop_assert!(!restored.trump_broken);
        prop_assert!(restored.trick.is_empty());
    }

    /// Property: a random full hand conserves all 52 cards at every step and
    /// ends with 13 credited tricks.
    #[test]
    fn prop_full_hand_conserves_cards(
        seed in any::<u32>(),
        choice_seed in any::<u64>(),
        trump in test_gens::trump_config(),
    ) {
        let mut rng = StdRng::seed_from_u64(choice_seed);
        let mut state = init_game_state(seed);
        loop {
            assert_conservation(&state)?;
            let seat = state.turn;
            let legal = legal_moves(
                &state.hands[seat.index()],
                &state.trick,
                seat == state.leader && state.trick.is_empty(),
                &trump,
                state.trump_broken,
            );
            prop_assert!(!legal.is_empty(), "a live seat always has a legal card");
            let card = *legal.choose(&mut rng).unwrap();
            state = apply_play(&state, Play { seat, card }, &trump).unwrap();
            if state.trick.is_complete() {
                state = resolve_trick(&state, &trump).unwrap();
                if state.hand_complete {
                    break;
                }
                state = advance_to_next_trick(&state);
            }
        }
        prop_assert_eq!(state.trick_history.len(), 13);
        prop_assert_eq!(state.tricks_won.iter().map(|&t| t as usize).sum::<usize>(), 13);
        prop_assert!(state.hands.iter().all(|h| h.is_empty()));
    }
}

/// Per-seat conservation: hand + current-trick plays + history plays == 13.
fn assert_conservation(state: &GameState) -> Result<(), TestCaseError> {
    for seat in Seat::ALL {
        let in_hand = state.hands[seat.index()].len();
        let in_trick = state
            .trick
            .plays
            .iter()
            .filter(|p| p.seat == seat)
            .count();
        let in_history: usize = state
            .trick_history
            .iter()
            .map(|t| t.plays.iter().filter(|p| p.seat == seat).count())
            .sum();
        prop_assert_eq!(in_hand + in_trick + in_history, 13, "seat {:?} leaks cards", seat);
    }
    Ok(())
}

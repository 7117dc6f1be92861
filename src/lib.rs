//! tricktutor — rules-and-state engine for a single-player trick-taking
//! trainer.
//!
//! The crate is the pure core under an excluded presentation layer: dealing,
//! legality, trick resolution, the hand state machine with mid-trick undo
//! and history replay, void/suit-count/win-intent training prompts, and the
//! bidding estimator with its bid-aware trick-play AI. Every operation is a
//! synchronous computation over value types; timers, input handling, and
//! rendering live with the caller.

#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod ai;
pub mod domain;
pub mod error;
pub mod training;

// Re-exports for the public API surface
pub use ai::{
    choose_card_to_play_for_bid, AiError, BidAwareChooser, CardChooser, PlayView, RandomChooser,
};
pub use domain::bidding::{
    build_bid_breakdown, current_bidder, estimate_bid, evaluate_exact_bids, init_bid_state,
    is_bidding_complete, submit_bid, BidBreakdown, BidOutcome, BidState, SuitBreakdown,
};
pub use domain::rules::{classify_play, is_legal_play, legal_moves, PlayLegality};
pub use domain::snapshot::{build_history_snapshot, resume_from_snapshot, HistorySnapshot};
pub use domain::tricks::{
    advance_to_next_trick, apply_play, compute_legal_by_seat, is_hand_in_progress, is_play_legal,
    reset_trick, resolve_trick,
};
pub use domain::{
    build_deck, card_beats, compare_cards_in_trick, deal_new_hands, determine_trick_winner,
    hand_has_suit, init_game_state, is_trump, next_seat, sort_hand, trick_lead_suit, Card,
    DealRng, GameState, Play, Rank, Seat, Suit, Trick, Trump, TrumpConfig,
};
pub use error::{EngineError, ValidationKind};
pub use training::{
    can_be_beaten_by_honor, compute_actual_void, evaluate_win_intent, get_void_prompt_lead,
    remaining_honors_in_suit, should_prompt_suit_count, should_prompt_win_intent, VoidGrid,
    VoidPromptScope, VoidTrainingConfig, WinIntentAssessment, WinIntentConfig, WinIntentWarning,
};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

//! Domain layer: pure game types, rules, and the hand state machine.

pub mod bidding;
pub mod cards_logic;
pub mod cards_types;
pub mod dealing;
pub mod rules;
pub mod snapshot;
pub mod state;
pub mod tricks;

#[cfg(test)]
pub(crate) mod test_state_helpers;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_props_dealing;
#[cfg(test)]
mod tests_props_legality;
#[cfg(test)]
mod tests_props_tricks;

// Re-exports for ergonomics
pub use cards_logic::{
    card_beats, compare_cards_in_trick, determine_trick_winner, hand_has_suit, is_trump,
    sort_hand, trick_lead_suit,
};
pub use cards_types::{Card, Rank, Suit, Trump, TrumpConfig};
pub use dealing::{build_deck, deal_new_hands, shuffle, DealRng};
pub use state::{init_game_state, next_seat, GameState, Play, Seat, Trick};

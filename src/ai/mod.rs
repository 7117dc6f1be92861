//! AI card choosers for the non-human seats.

pub mod bid_aware;
pub mod random;

use std::fmt;

use crate::domain::cards_types::{Card, TrumpConfig};
use crate::domain::state::Trick;

pub use bid_aware::{choose_card_to_play_for_bid, BidAwareChooser};
pub use random::RandomChooser;

/// Errors from AI decision-making.
#[derive(Debug)]
pub enum AiError {
    /// The legal-move set handed to the chooser was empty.
    NoLegalMoves,
    Internal(String),
}

impl fmt::Display for AiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiError::NoLegalMoves => write!(f, "no legal moves available"),
            AiError::Internal(msg) => write!(f, "AI internal error: {msg}"),
        }
    }
}

impl std::error::Error for AiError {}

/// What a seat sees when deciding a play. The legal set is computed by the
/// engine; choosers must pick from it, never from the raw hand.
#[derive(Debug, Clone, Copy)]
pub struct PlayView<'a> {
    pub hand: &'a [Card],
    pub legal: &'a [Card],
    pub trick: &'a Trick,
    pub trump: &'a TrumpConfig,
    /// The seat's bid for this hand (0 when bidding mode is off).
    pub bid: u8,
    pub tricks_won: u8,
}

/// A card chooser for one seat.
///
/// Implementations take `&self`; mutable internals (an RNG, usually) use
/// interior mutability so one chooser can serve concurrent readers.
pub trait CardChooser: Send + Sync {
    fn choose_card(&self, view: &PlayView<'_>) -> Result<Card, AiError>;
}

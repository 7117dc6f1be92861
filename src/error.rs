//! Engine-level error type.
//!
//! Two tiers, per the engine's error policy:
//! - `InvalidState` marks precondition violations (e.g. determining the
//!   winner of an empty trick). These indicate an orchestration bug and
//!   should fail loudly.
//! - `Validation` marks rejected commands (out-of-turn bid, card not in
//!   hand). Pure legality queries never return errors; they report booleans
//!   or a reason enum instead.

use thiserror::Error;

/// Validation kinds to distinguish rejected commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    OutOfTurn,
    CardNotInHand,
    BidOutOfRange,
    BiddingComplete,
    HandComplete,
}

/// Central engine error type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Invariant/precondition violation; indicates a bug in the caller.
    #[error("invalid state: {0}")]
    InvalidState(String),
    /// A command was rejected by a business rule.
    #[error("validation {kind:?}: {detail}")]
    Validation {
        kind: ValidationKind,
        detail: String,
    },
}

impl EngineError {
    pub fn invalid_state(detail: impl Into<String>) -> Self {
        Self::InvalidState(detail.into())
    }

    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation {
            kind,
            detail: detail.into(),
        }
    }
}

//! Random chooser: a uniform pick over the legal set.
//!
//! The baseline implementation of [`CardChooser`]; also the reference for
//! how choosers handle seeding and interior mutability.

use std::sync::Mutex;

use rand::prelude::*;

use super::{AiError, CardChooser, PlayView};
use crate::domain::cards_types::Card;

pub struct RandomChooser {
    /// `CardChooser` takes `&self`, so the RNG lives behind a mutex.
    rng: Mutex<StdRng>,
}

impl RandomChooser {
    /// `Some(seed)` gives reproducible picks for tests; `None` draws from
    /// system entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl CardChooser for RandomChooser {
    fn choose_card(&self, view: &PlayView<'_>) -> Result<Card, AiError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))?;
        view.legal
            .choose(&mut *rng)
            .copied()
            .ok_or(AiError::NoLegalMoves)
    }
}

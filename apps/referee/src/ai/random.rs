//! Random bot - plays a uniformly random legal card.
//!
//! Serves as a baseline opponent for simulations and as a template for new
//! bots: query `legal_plays()`, keep mutable state behind a lock, never
//! panic.

use parking_lot::Mutex;
use rand::prelude::*;

use super::trait_def::{AiError, AiPlayer, PlayerView};
use crate::domain::Card;

/// Bot that makes random legal plays.
///
/// Seeded instances replay identically; unseeded ones draw from OS entropy.
pub struct RandomPlayer {
    /// `AiPlayer` takes `&self` but the RNG needs mutable access.
    rng: Mutex<StdRng>,
}

impl RandomPlayer {
    pub const NAME: &'static str = "RandomPlayer";
    pub const VERSION: &'static str = "1.0.0";

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

impl AiPlayer for RandomPlayer {
    fn choose_play(&self, view: &PlayerView) -> Result<Card, AiError> {
        let legal = view.legal_plays();
        if legal.is_empty() {
            return Err(AiError::InvalidMove("No legal plays available".into()));
        }
        let mut rng = self.rng.lock();
        legal
            .choose(&mut *rng)
            .copied()
            .ok_or_else(|| AiError::Internal("Failed to choose random card".into()))
    }
}

//! The default policy: always shed the cheapest legal card.

use super::trait_def::{AiError, AiPlayer, PlayerView};
use crate::domain::legality::choose;
use crate::domain::Card;

/// Plays the legal card with the lowest point value, breaking ties by the
/// weakest rank and then the lowest id. Stateless and deterministic.
#[derive(Debug, Default, Clone, Copy)]
pub struct LowestCard;

impl LowestCard {
    pub const NAME: &'static str = "LowestCard";
    pub const VERSION: &'static str = "1.0.0";
}

impl AiPlayer for LowestCard {
    fn choose_play(&self, view: &PlayerView) -> Result<Card, AiError> {
        choose(&view.legal_plays())
            .ok_or_else(|| AiError::InvalidMove("No legal plays available".into()))
    }
}

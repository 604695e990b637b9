//! How to register a bot
//!
//! 1) Implement `AiPlayer` for your type in its module.
//! 2) Add a new `AiFactory` entry to the static list with stable `name` and `version`.
//! 3) Keep ordering stable; avoid side effects in constructors.
//! 4) Determinism: same seed ⇒ same behavior (where applicable).

use crate::ai::{AiPlayer, LowestCard, RandomPlayer};

/// Factory definition for constructing bot implementations.
pub struct AiFactory {
    pub name: &'static str,
    pub version: &'static str,
    pub make: fn(seed: Option<u64>) -> Box<dyn AiPlayer + Send + Sync>,
}

static AI_FACTORIES: &[AiFactory] = &[
    AiFactory {
        name: LowestCard::NAME,
        version: LowestCard::VERSION,
        make: make_lowest_card,
    },
    AiFactory {
        name: RandomPlayer::NAME,
        version: RandomPlayer::VERSION,
        make: make_random_player,
    },
];

/// Returns the statically registered bot factories.
pub fn registered_ais() -> &'static [AiFactory] {
    AI_FACTORIES
}

/// Finds a registered bot factory by its name (case-insensitive).
pub fn by_name(name: &str) -> Option<&'static AiFactory> {
    registered_ais()
        .iter()
        .find(|factory| factory.name.eq_ignore_ascii_case(name))
}

fn make_lowest_card(_seed: Option<u64>) -> Box<dyn AiPlayer + Send + Sync> {
    Box::new(LowestCard)
}

fn make_random_player(seed: Option<u64>) -> Box<dyn AiPlayer + Send + Sync> {
    Box::new(RandomPlayer::new(seed))
}

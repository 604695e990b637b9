//! Automated players.
//!
//! - `AiPlayer` trait and the `PlayerView` a bot decides from
//! - `LowestCard`: the default cheapest-card policy
//! - `RandomPlayer`: uniform random legal plays (seedable for tests)
//! - a static registry for looking bots up by name

mod lowest;
mod random;
pub mod registry;
mod trait_def;

pub use lowest::LowestCard;
pub use random::RandomPlayer;
pub use registry::{by_name, registered_ais, AiFactory};
pub use trait_def::{AiError, AiPlayer, PlayerView};

//! Domain layer: pure game logic types and helpers.

pub mod cards_codec;
pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod events;
pub mod legality;

pub mod match_flow;
pub mod rules;
pub mod seed_derivation;
pub mod snapshot;
pub mod state;
#[cfg(test)]
mod test_state_helpers;
pub mod tricks;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod tests_match;
#[cfg(test)]
mod tests_props_legality;
#[cfg(test)]
mod tests_props_trick_winner;
#[cfg(test)]
mod tests_snapshot;

// Re-exports for ergonomics
pub use cards_codec::{decode, encode, full_deck, point_value, rank_strength, suit_of, CardId};
pub use cards_logic::{card_beats, hand_has_suit};
pub use cards_types::{Card, Rank, Suit};
pub use dealing::{deal_hands, DealtCards};
pub use events::{DealOutcome, DealRecord, MatchResult, RefereeEvent};
pub use legality::{choose, legal_plays, legal_plays_for};
pub use match_flow::{MatchRules, MatchState, TiePolicy};
pub use rules::DealAward;
pub use seed_derivation::{derive_bot_seed, derive_dealing_seed};
pub use snapshot::{snapshot, MatchSnapshot};
pub use state::{player_no, seat_from_player_no, DealPhase, DealState, Seat, Team};

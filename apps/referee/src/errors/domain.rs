//! Domain-level error type shared by the card codec, deal engine and match
//! controller.
//!
//! The type is transport-agnostic. Binaries wrap it in
//! [`crate::error::AppError`] via the provided `From` conversion.

use thiserror::Error;

use crate::domain::cards_types::{Card, Suit};
use crate::domain::state::Seat;

/// Central domain error type.
///
/// Every variant except [`DomainError::RevokeDetected`] is reported without
/// touching game state. A revoke is an in-game penalty: by the time the caller
/// sees it the deal has already been terminated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Card identifier outside `0..40`.
    #[error("invalid card id {0}")]
    InvalidCardId(u8),

    /// Seat or player number outside the table.
    #[error("invalid seat {0}")]
    InvalidSeat(u8),

    /// Text that does not name a card, rank or suit.
    #[error("parse card: {0}")]
    ParseCard(String),

    /// Operation attempted outside its legal state.
    #[error("invalid state for {op}: {detail}")]
    InvalidState { op: &'static str, detail: String },

    /// Play submitted for a seat that is not due.
    #[error("not your turn: seat {seat} played but seat {expected} is due")]
    NotYourTurn { seat: Seat, expected: Seat },

    /// The card already hit the table earlier in this deal.
    #[error("card {0} was already played this deal")]
    CardAlreadyPlayed(Card),

    /// A seat revealed an earlier failure to follow suit.
    #[error("revoke detected: seat {seat} in {suit:?}")]
    RevokeDetected { seat: Seat, suit: Suit },

    /// A score tie with no resolution rule.
    #[error("ambiguous outcome: {0}")]
    AmbiguousOutcome(String),
}

impl DomainError {
    pub fn invalid_state(op: &'static str, detail: impl Into<String>) -> Self {
        Self::InvalidState {
            op,
            detail: detail.into(),
        }
    }

    pub fn parse(detail: impl Into<String>) -> Self {
        Self::ParseCard(detail.into())
    }

    /// True for the one variant that mutates state.
    pub fn is_revoke(&self) -> bool {
        matches!(self, Self::RevokeDetected { .. })
    }
}

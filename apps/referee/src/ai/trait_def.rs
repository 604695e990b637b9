//! Automated player trait definition.

use std::fmt;

use crate::domain::legality::legal_plays_for;
use crate::domain::state::{DealPhase, DealState, Seat};
use crate::domain::{Card, Suit};
use crate::error::AppError;

/// Errors that can occur during a bot's decision.
#[derive(Debug)]
pub enum AiError {
    /// The bot encountered an internal error
    Internal(String),
    /// The bot was asked to move with nothing legal to play
    InvalidMove(String),
}

impl fmt::Display for AiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiError::Internal(msg) => write!(f, "AI internal error: {msg}"),
            AiError::InvalidMove(msg) => write!(f, "AI invalid move: {msg}"),
        }
    }
}

impl std::error::Error for AiError {}

impl From<AiError> for AppError {
    fn from(err: AiError) -> Self {
        AppError::internal(format!("AI error: {err}"))
    }
}

/// What one seat can see when it is due to play: its own hand plus the
/// public facts of the deal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerView {
    pub seat: Seat,
    pub hand: Vec<Card>,
    pub trump: Suit,
    pub lead: Option<Suit>,
    pub current_trick: Vec<(Seat, Card)>,
    pub first_trick: bool,
    pub is_dealer: bool,
}

impl PlayerView {
    /// Build the view for `seat`. `None` unless a trick is in progress.
    pub fn from_deal(deal: &DealState, seat: Seat, hand: &[Card]) -> Option<Self> {
        let DealPhase::InTrick { .. } = deal.phase else {
            return None;
        };
        Some(Self {
            seat,
            hand: hand.to_vec(),
            trump: deal.trump_suit()?,
            lead: deal.trick_lead,
            current_trick: deal.trick_plays.clone(),
            first_trick: deal.is_first_trick(),
            is_dealer: seat == deal.dealer,
        })
    }

    pub fn legal_plays(&self) -> Vec<Card> {
        legal_plays_for(
            &self.hand,
            self.lead,
            self.trump,
            self.first_trick,
            self.is_dealer,
        )
    }
}

/// Trait for automated players.
///
/// Implementations receive the view of the seat due and must choose one of
/// `view.legal_plays()`.
pub trait AiPlayer: Send + Sync {
    fn choose_play(&self, view: &PlayerView) -> Result<Card, AiError>;
}

//! Detection intake: turns vision-pipeline sightings into trump and play
//! submissions.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::cards_parsing::{parse_rank_label, parse_suit_label};
use crate::domain::events::RefereeEvent;
use crate::domain::match_flow::MatchState;
use crate::domain::state::{DealPhase, Seat};
use crate::domain::Card;
use crate::errors::domain::DomainError;

/// One card sighting as reported by the vision collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub rank: String,
    pub suit: String,
    pub confidence: f32,
}

impl Detection {
    pub fn new(rank: impl Into<String>, suit: impl Into<String>, confidence: f32) -> Self {
        Self {
            rank: rank.into(),
            suit: suit.into(),
            confidence,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum RejectReason {
    LowConfidence { confidence: f32 },
    UnknownLabel { label: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum IntakeOutcome {
    /// Routed to the engine. `seat` is `None` when the card became trump.
    Accepted {
        card: Card,
        seat: Option<Seat>,
        events: Vec<RefereeEvent>,
    },
    /// A re-sighting of a card the table already knows about.
    Duplicate(Card),
    Rejected(RejectReason),
}

/// Per-match intake state.
#[derive(Debug, Clone)]
pub struct Intake {
    min_confidence: f32,
    last_accepted: Option<Card>,
}

impl Intake {
    pub fn new(min_confidence: f32) -> Self {
        Self {
            min_confidence,
            last_accepted: None,
        }
    }

    pub fn last_accepted(&self) -> Option<Card> {
        self.last_accepted
    }

    /// Validate `detection` and route it to the match.
    ///
    /// Without an active deal a new one is started first, and re-sighting
    /// suppression starts over with it. Engine errors are returned unchanged.
    pub fn submit(
        &mut self,
        state: &mut MatchState,
        detection: &Detection,
    ) -> Result<IntakeOutcome, DomainError> {
        if detection.confidence.is_nan() || detection.confidence < self.min_confidence {
            debug!(
                confidence = detection.confidence,
                min = self.min_confidence,
                "Detection below confidence threshold"
            );
            return Ok(IntakeOutcome::Rejected(RejectReason::LowConfidence {
                confidence: detection.confidence,
            }));
        }

        let card = match label_to_card(detection) {
            Ok(card) => card,
            Err(label) => {
                debug!(%label, "Detection with unknown label");
                return Ok(IntakeOutcome::Rejected(RejectReason::UnknownLabel { label }));
            }
        };

        // The last card of a finished deal says nothing about the next one
        if state.active_deal().is_none() {
            self.last_accepted = None;
        }

        let already_played = state.active_deal().is_some_and(|d| d.is_played(card));
        if already_played || self.last_accepted == Some(card) {
            debug!(card = %card, "Duplicate detection suppressed");
            return Ok(IntakeOutcome::Duplicate(card));
        }

        let mut events = Vec::new();
        if state.active_deal().is_none() {
            events.extend(state.start_deal()?);
        }

        let awaiting_trump = state
            .active_deal()
            .is_some_and(|d| d.phase == DealPhase::AwaitingTrump);
        let (seat, routed) = if awaiting_trump {
            (None, state.set_trump(card)?)
        } else {
            let seat = state
                .active_deal()
                .and_then(|d| d.turn())
                .ok_or_else(|| DomainError::invalid_state("submit_detection", "no seat is due"))?;
            (Some(seat), state.play_card(seat, card)?)
        };
        events.extend(routed);
        self.last_accepted = Some(card);

        Ok(IntakeOutcome::Accepted { card, seat, events })
    }
}

fn label_to_card(detection: &Detection) -> Result<Card, String> {
    let rank = parse_rank_label(&detection.rank).map_err(|_| detection.rank.clone())?;
    let suit = parse_suit_label(&detection.suit).map_err(|_| detection.suit.clone())?;
    Ok(Card { suit, rank })
}

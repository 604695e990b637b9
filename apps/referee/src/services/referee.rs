//! Thread-safe handle around one match.
//!
//! Every mutating call takes the match lock for its whole validate-and-apply
//! sequence; snapshots are copied out under the lock and read without it.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::ai::PlayerView;
use crate::config::RefereeConfig;
use crate::domain::events::{DealRecord, RefereeEvent};
use crate::domain::match_flow::MatchState;
use crate::domain::snapshot::{snapshot, MatchSnapshot};
use crate::domain::state::{seat_from_player_no, Seat, Team};
use crate::domain::Card;
use crate::errors::domain::DomainError;
use crate::services::intake::{Detection, Intake, IntakeOutcome};

#[derive(Debug)]
struct Table {
    state: MatchState,
    intake: Intake,
}

/// Cloneable referee for a single match.
#[derive(Debug, Clone)]
pub struct Referee {
    inner: Arc<Mutex<Table>>,
}

impl Referee {
    pub fn new(config: &RefereeConfig) -> Result<Self, DomainError> {
        let state = MatchState::new(config.rules, config.first_dealer)?;
        Ok(Self {
            inner: Arc::new(Mutex::new(Table {
                state,
                intake: Intake::new(config.min_confidence),
            })),
        })
    }

    pub fn start_deal(&self) -> Result<Vec<RefereeEvent>, DomainError> {
        let mut table = self.inner.lock();
        let events = table.state.start_deal()?;
        log_events(&events);
        Ok(events)
    }

    pub fn set_trump(&self, card: Card) -> Result<Vec<RefereeEvent>, DomainError> {
        let mut table = self.inner.lock();
        let events = table.state.set_trump(card)?;
        log_events(&events);
        Ok(events)
    }

    pub fn play_card(&self, seat: Seat, card: Card) -> Result<Vec<RefereeEvent>, DomainError> {
        let mut table = self.inner.lock();
        let events = table.state.play_card(seat, card)?;
        log_events(&events);
        Ok(events)
    }

    /// Same as [`Referee::play_card`] for callers counting players from 1.
    pub fn play_card_for_player(
        &self,
        player_no: u8,
        card: Card,
    ) -> Result<Vec<RefereeEvent>, DomainError> {
        self.play_card(seat_from_player_no(player_no)?, card)
    }

    pub fn submit_detection(&self, detection: &Detection) -> Result<IntakeOutcome, DomainError> {
        let mut table = self.inner.lock();
        let Table { state, intake } = &mut *table;
        let outcome = intake.submit(state, detection)?;
        if let IntakeOutcome::Accepted { events, .. } = &outcome {
            log_events(events);
        }
        Ok(outcome)
    }

    pub fn legal_plays(&self, seat: Seat, hand: &[Card]) -> Vec<Card> {
        self.inner.lock().state.legal_plays(seat, hand)
    }

    /// What `seat` would see holding `hand`; `None` outside trick play.
    pub fn view_for(&self, seat: Seat, hand: &[Card]) -> Option<PlayerView> {
        let table = self.inner.lock();
        table
            .state
            .active_deal()
            .and_then(|deal| PlayerView::from_deal(deal, seat, hand))
    }

    pub fn conclude(&self) -> Result<Vec<RefereeEvent>, DomainError> {
        let mut table = self.inner.lock();
        let events = table.state.conclude()?;
        log_events(&events);
        Ok(events)
    }

    pub fn winner(&self) -> Result<Team, DomainError> {
        self.inner.lock().state.winner()
    }

    pub fn snapshot(&self) -> MatchSnapshot {
        let table = self.inner.lock();
        snapshot(&table.state)
    }

    pub fn deal_results(&self) -> Vec<DealRecord> {
        self.inner.lock().state.deal_results().to_vec()
    }
}

fn log_events(events: &[RefereeEvent]) {
    for event in events {
        match event {
            RefereeEvent::DealRevoked {
                offender, credited, ..
            } => warn!(offender, %credited, "Deal ended by revoke"),
            other => debug!(event = ?other, "Referee event"),
        }
    }
}

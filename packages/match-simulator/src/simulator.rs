//! In-memory match simulator.
//!
//! Drives a [`MatchState`] directly (no handle, no lock) with one bot per
//! seat, dealing every deal from a seed derived from the match seed.

use referee::ai::{AiPlayer, PlayerView};
use referee::domain::events::{DealRecord, MatchResult, RefereeEvent};
use referee::domain::match_flow::{MatchRules, MatchState};
use referee::domain::state::Seat;
use referee::domain::{deal_hands, derive_dealing_seed};
use referee::{AppError, DomainError};
use tracing::debug;

const PLAYERS: usize = 4;

pub type Bots = [Box<dyn AiPlayer + Send + Sync>; PLAYERS];

/// Everything the metrics layer needs from one match.
#[derive(Debug, Clone)]
pub struct MatchOutcome {
    pub result: MatchResult,
    pub victory_credits: [u16; 2],
    pub deals: Vec<DealRecord>,
    /// Tricks taken per seat across the match.
    pub tricks_won: [u32; PLAYERS],
}

impl MatchOutcome {
    pub fn revokes(&self) -> usize {
        self.deals
            .iter()
            .filter(|d| matches!(d.outcome, referee::domain::DealOutcome::Revoked { .. }))
            .count()
    }
}

pub struct Simulator {
    seed: u64,
    rules: MatchRules,
    first_dealer: Seat,
}

impl Simulator {
    pub fn new(seed: u64, rules: MatchRules, first_dealer: Seat) -> Self {
        Self {
            seed,
            rules,
            first_dealer,
        }
    }

    pub fn simulate_match(&self, bots: &Bots) -> Result<MatchOutcome, AppError> {
        let mut state = MatchState::new(self.rules, self.first_dealer)?;
        let mut tricks_won = [0u32; PLAYERS];

        while !state.terminal {
            state.start_deal()?;
            let deal_no = state.deal_no();
            let dealt = deal_hands(derive_dealing_seed(self.seed, deal_no), state.dealer)?;
            state.set_trump(dealt.trump)?;
            debug!(deal_no, trump = %dealt.trump, "Simulating deal");

            let mut hands = dealt.hands;
            while let Some(deal) = state.active_deal() {
                let seat = deal
                    .turn()
                    .ok_or_else(|| DomainError::invalid_state("simulate_match", "no seat is due"))?;
                let hand = &mut hands[seat as usize];
                let view = PlayerView::from_deal(deal, seat, hand).ok_or_else(|| {
                    DomainError::invalid_state("simulate_match", "deal is not in trick play")
                })?;
                let card = bots[seat as usize].choose_play(&view)?;
                hand.retain(|c| *c != card);

                for event in state.play_card(seat, card)? {
                    if let RefereeEvent::TrickResolved(trick) = event {
                        tricks_won[trick.winner as usize] += 1;
                    }
                }
            }
        }

        let result = state
            .result
            .ok_or_else(|| AppError::internal("terminal match without a result".into()))?;
        Ok(MatchOutcome {
            result,
            victory_credits: state.victory_credits,
            deals: state.deal_results().to_vec(),
            tricks_won,
        })
    }
}

//! Public snapshot API for observing match state without exposing internals.

use serde::{Deserialize, Serialize};

use crate::domain::events::MatchResult;
use crate::domain::match_flow::MatchState;
use crate::domain::state::{DealPhase, Seat};
use crate::domain::{Card, Suit};

/// Public facts about the active deal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealPublic {
    pub phase: DealPhase,
    pub trump_set: bool,
    pub trump: Option<Card>,
    pub trump_suit: Option<Suit>,
    pub current_trick: Vec<(Seat, Card)>,
    pub tricks_played: u8,
    pub leader: Seat,
    /// Seat due to play; `None` outside trick play.
    pub to_act: Option<Seat>,
    /// Card points per team.
    pub points: [u8; 2],
    pub trump_played: bool,
    /// Last completed trick (4 cards) for display purposes.
    pub last_trick: Option<Vec<(Seat, Card)>>,
}

/// Copy of everything a scoreboard needs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    /// Dealer of the active deal, or of the next one.
    pub dealer: Seat,
    pub deals_played: u32,
    pub match_deals: u8,
    pub victory_credits: [u16; 2],
    pub terminal: bool,
    pub fresh: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<MatchResult>,
    pub deal: Option<DealPublic>,
}

impl MatchSnapshot {
    pub fn trump_set(&self) -> bool {
        self.deal.as_ref().is_some_and(|d| d.trump_set)
    }

    pub fn trick_size(&self) -> usize {
        self.deal.as_ref().map_or(0, |d| d.current_trick.len())
    }
}

/// Entry point: produce a snapshot of the current match state.
pub fn snapshot(state: &MatchState) -> MatchSnapshot {
    let deal = state.active_deal().map(|deal| DealPublic {
        phase: deal.phase,
        trump_set: deal.trump.is_some(),
        trump: deal.trump,
        trump_suit: deal.trump_suit(),
        current_trick: deal.trick_plays.clone(),
        tricks_played: deal.tricks_played,
        leader: deal.leader,
        to_act: deal.turn(),
        points: deal.points,
        trump_played: deal.trump_played,
        last_trick: deal.last_trick.clone(),
    });

    MatchSnapshot {
        dealer: state.dealer,
        deals_played: state.deals_played,
        match_deals: state.rules.deals,
        victory_credits: state.victory_credits,
        terminal: state.terminal,
        fresh: state.is_fresh(),
        result: state.result,
        deal,
    }
}

//! Events returned by mutating match operations.
//!
//! The engine does not push anything itself: each call hands back the events
//! it caused, and the surrounding service relays them (scoreboards, bot
//! triggers, ...).

use serde::{Deserialize, Serialize};

use crate::domain::rules::DealAward;
use crate::domain::state::{Seat, Team};
use crate::domain::tricks::TrickResult;
use crate::domain::{Card, Suit};

/// Final verdict of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatchResult {
    Winner { team: Team },
    /// Equal victory credits and the tie policy leaves it to the caller.
    Ambiguous,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RefereeEvent {
    DealStarted {
        deal_no: u32,
        dealer: Seat,
    },
    TrumpSet {
        card: Card,
        suit: Suit,
    },
    CardPlayed {
        seat: Seat,
        card: Card,
    },
    TrickResolved(TrickResult),
    DealCompleted {
        deal_no: u32,
        points: [u8; 2],
        award: DealAward,
    },
    DealRevoked {
        deal_no: u32,
        offender: Seat,
        suit: Suit,
        credited: Team,
        credits: u16,
    },
    MatchTerminal {
        result: MatchResult,
        victory_credits: [u16; 2],
        /// True when an external rule ended the match before its length.
        concluded_early: bool,
    },
}

/// How a deal ended, as archived by the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DealOutcome {
    Completed { award: DealAward },
    Revoked { offender: Seat, suit: Suit, credited: Team },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealRecord {
    pub deal_no: u32,
    pub dealer: Seat,
    pub trump: Option<Card>,
    pub points: [u8; 2],
    pub tricks_played: u8,
    pub outcome: DealOutcome,
}

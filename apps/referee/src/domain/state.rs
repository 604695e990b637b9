use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::cards_codec::DECK_SIZE;
use crate::domain::rules::{PLAYERS, TRICKS_PER_DEAL};
use crate::domain::{Card, Suit};
use crate::errors::domain::DomainError;

pub type Seat = u8; // 0..=3

/// One of the two partnerships. Seats 0 & 2 play for `One`, 1 & 3 for `Two`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Team {
    One,
    Two,
}

impl Team {
    pub const fn of(seat: Seat) -> Self {
        if seat % 2 == 0 {
            Team::One
        } else {
            Team::Two
        }
    }

    pub const fn opponent(self) -> Self {
        match self {
            Team::One => Team::Two,
            Team::Two => Team::One,
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Team::One => 0,
            Team::Two => 1,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::One => write!(f, "team 1"),
            Team::Two => write!(f, "team 2"),
        }
    }
}

/// Seat / turn math helpers (4 fixed seats: 0..=3).
///
/// Clockwise direction is positive (+1).
#[inline]
pub fn seat_offset(seat: Seat, delta: i8) -> Seat {
    let seat_i = seat as i16;
    let delta_i = delta as i16;
    ((seat_i + delta_i).rem_euclid(PLAYERS as i16)) as Seat
}

/// Returns the next seat clockwise (0 → 1 → 2 → 3 → 0).
#[inline]
pub fn next_seat(seat: Seat) -> Seat {
    seat_offset(seat, 1)
}

/// Returns the seat `n` steps clockwise from `start`.
#[inline]
pub fn nth_from(start: Seat, n: u8) -> Seat {
    seat_offset(start, n as i8)
}

/// Expected actor during a trick: `leader` plus the number of cards already
/// on the table.
#[inline]
pub fn expected_actor(leader: Seat, play_count: u8) -> Seat {
    nth_from(leader, play_count)
}

/// Translate an external 1-based player number ("player 1".."player 4").
///
/// This is the only place the 1-based convention is accepted.
pub fn seat_from_player_no(player_no: u8) -> Result<Seat, DomainError> {
    if (1..=PLAYERS as u8).contains(&player_no) {
        Ok(player_no - 1)
    } else {
        Err(DomainError::InvalidSeat(player_no))
    }
}

/// 1-based player number for display and external callers.
pub fn player_no(seat: Seat) -> u8 {
    seat + 1
}

pub fn require_seat(seat: Seat) -> Result<Seat, DomainError> {
    if (seat as usize) < PLAYERS {
        Ok(seat)
    } else {
        Err(DomainError::InvalidSeat(seat))
    }
}

/// Deal progression phases.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum DealPhase {
    /// Waiting for the trump card to be turned.
    AwaitingTrump,
    /// Playing tricks; `trick_no` is 0-based.
    InTrick { trick_no: u8 },
    /// All ten tricks played.
    Completed,
    /// Ended early: `offender` was caught revoking in `suit`.
    RevokedTerminated { offender: Seat, suit: Suit },
}

impl DealPhase {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            DealPhase::Completed | DealPhase::RevokedTerminated { .. }
        )
    }
}

/// What the table has learned about each seat's holdings.
///
/// `may_hold(seat, suit)` starts true for everybody and flips to false the
/// first time the seat discards off a led suit. A seat later producing a card
/// of a suit it showed out of proves an earlier revoke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuitKnowledge([[bool; 4]; PLAYERS]);

impl Default for SuitKnowledge {
    fn default() -> Self {
        Self([[true; 4]; PLAYERS])
    }
}

impl SuitKnowledge {
    pub fn may_hold(&self, seat: Seat, suit: Suit) -> bool {
        self.0[seat as usize][suit.index()]
    }

    pub fn mark_void(&mut self, seat: Seat, suit: Suit) {
        self.0[seat as usize][suit.index()] = false;
    }

    pub fn rows(&self) -> &[[bool; 4]; PLAYERS] {
        &self.0
    }
}

/// Per-deal state, owned by the match for the lifetime of the deal.
#[derive(Debug, Clone)]
pub struct DealState {
    pub phase: DealPhase,
    /// Dealer seat; also leads the first trick.
    pub dealer: Seat,
    /// Turned trump card (set exactly once).
    pub trump: Option<Card>,
    pub knowledge: SuitKnowledge,
    /// Ordered plays for the current trick (who, card).
    pub trick_plays: Vec<(Seat, Card)>,
    /// Lead suit for the current trick.
    pub trick_lead: Option<Suit>,
    /// Seat leading the current (or next) trick.
    pub leader: Seat,
    pub tricks_played: u8,
    /// Card points per team, indexed by [`Team::index`].
    pub points: [u8; 2],
    /// Whether a trump-suit card has landed in a completed trick.
    pub trump_played: bool,
    played: [bool; DECK_SIZE],
    /// Last completed trick (4 cards) for display purposes.
    pub last_trick: Option<Vec<(Seat, Card)>>,
}

impl DealState {
    pub fn new(dealer: Seat) -> Self {
        Self {
            phase: DealPhase::AwaitingTrump,
            dealer,
            trump: None,
            knowledge: SuitKnowledge::default(),
            trick_plays: Vec::with_capacity(PLAYERS),
            trick_lead: None,
            leader: dealer,
            tricks_played: 0,
            points: [0; 2],
            trump_played: false,
            played: [false; DECK_SIZE],
            last_trick: None,
        }
    }

    pub fn trump_suit(&self) -> Option<Suit> {
        self.trump.map(|c| c.suit)
    }

    /// Seat due to play, if a trick is in progress.
    pub fn turn(&self) -> Option<Seat> {
        match self.phase {
            DealPhase::InTrick { .. } => Some(expected_actor(
                self.leader,
                self.trick_plays.len() as u8,
            )),
            _ => None,
        }
    }

    pub fn is_first_trick(&self) -> bool {
        self.tricks_played == 0
    }

    pub fn is_terminal(&self) -> bool {
        self.phase.is_terminal()
    }

    pub fn is_played(&self, card: Card) -> bool {
        self.played[card.id() as usize]
    }

    pub(crate) fn mark_played(&mut self, card: Card) {
        self.played[card.id() as usize] = true;
    }

    pub fn played_count(&self) -> usize {
        self.played.iter().filter(|p| **p).count()
    }

    pub fn remaining_tricks(&self) -> u8 {
        TRICKS_PER_DEAL - self.tricks_played
    }
}

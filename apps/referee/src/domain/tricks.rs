//! Deal engine: trump selection, card play, revoke detection and trick
//! resolution over a [`DealState`].

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::domain::card_beats;
use crate::domain::rules::{PLAYERS, TRICKS_PER_DEAL};
use crate::domain::state::{require_seat, DealPhase, DealState, Seat, Team};
use crate::domain::{Card, Suit};
use crate::errors::domain::DomainError;

/// A resolved trick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrickResult {
    /// 0-based trick number within the deal.
    pub trick_no: u8,
    pub winner: Seat,
    /// Card points collected by the winner's team.
    pub points: u8,
    pub plays: Vec<(Seat, Card)>,
}

/// Result of playing a card, describing what state changes occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayCardResult {
    /// Set when this play was the fourth of its trick.
    pub trick: Option<TrickResult>,
    /// Phase transitioned to, if any (None means still in the same trick loop).
    pub phase_transitioned: Option<DealPhase>,
}

/// Turn the trump card. Legal exactly once, before any play.
pub fn set_trump(deal: &mut DealState, card: Card) -> Result<(), DomainError> {
    if deal.phase != DealPhase::AwaitingTrump {
        return Err(DomainError::invalid_state(
            "set_trump",
            format!("trump already set ({:?})", deal.phase),
        ));
    }
    deal.trump = Some(card);
    deal.phase = DealPhase::InTrick { trick_no: 0 };
    info!(trump = %card, dealer = deal.dealer, "Trump set");
    Ok(())
}

/// Play a card into the current trick, enforcing phase, turn and the revoke
/// rules.
///
/// On `Err(RevokeDetected)` the deal has been moved to
/// [`DealPhase::RevokedTerminated`]; every other error leaves it untouched.
pub fn play_card(
    deal: &mut DealState,
    seat: Seat,
    card: Card,
) -> Result<PlayCardResult, DomainError> {
    // Phase check
    let DealPhase::InTrick { trick_no } = deal.phase else {
        return Err(DomainError::invalid_state(
            "play_card",
            format!("no trick in progress ({:?})", deal.phase),
        ));
    };
    let trump = deal
        .trump_suit()
        .ok_or_else(|| DomainError::invalid_state("play_card", "trump not set"))?;

    // Turn check
    require_seat(seat)?;
    let position = deal.trick_plays.len() as u8;
    let expected = deal
        .turn()
        .ok_or_else(|| DomainError::invalid_state("play_card", "no seat is due"))?;
    if seat != expected {
        return Err(DomainError::NotYourTurn { seat, expected });
    }

    if deal.is_played(card) {
        return Err(DomainError::CardAlreadyPlayed(card));
    }

    // A seat that showed out of this suit cannot produce it now.
    if !deal.knowledge.may_hold(seat, card.suit) {
        return Err(terminate_for_revoke(deal, seat, card.suit));
    }

    if let Some(lead) = deal.trick_lead {
        if card.suit != lead {
            deal.knowledge.mark_void(seat, lead);
            // House rule: on a trump lead, before trump has appeared in any
            // completed trick, the last seat must follow.
            let last_to_act = position as usize == PLAYERS - 1;
            if lead == trump && !deal.trump_played && last_to_act {
                return Err(terminate_for_revoke(deal, seat, lead));
            }
        }
    } else {
        deal.trick_lead = Some(card.suit);
    }

    deal.mark_played(card);
    deal.trick_plays.push((seat, card));
    debug!(seat, card = %card, trick_no, position, "Card accepted");

    if deal.trick_plays.len() < PLAYERS {
        return Ok(PlayCardResult {
            trick: None,
            phase_transitioned: None,
        });
    }

    let trick = complete_trick(deal, trick_no, trump)?;
    let phase_transitioned = if deal.tricks_played >= TRICKS_PER_DEAL {
        deal.phase = DealPhase::Completed;
        info!(points = ?deal.points, "Deal completed");
        Some(DealPhase::Completed)
    } else {
        deal.phase = DealPhase::InTrick {
            trick_no: deal.tricks_played,
        };
        None
    };

    Ok(PlayCardResult {
        trick: Some(trick),
        phase_transitioned,
    })
}

fn complete_trick(
    deal: &mut DealState,
    trick_no: u8,
    trump: Suit,
) -> Result<TrickResult, DomainError> {
    let winner = resolve_current_trick(&deal.trick_plays, trump)
        .ok_or_else(|| DomainError::invalid_state("play_card", "trick could not be resolved"))?;
    let points = trick_points(&deal.trick_plays);
    deal.points[Team::of(winner).index()] += points;
    if deal.trick_plays.iter().any(|(_, c)| c.suit == trump) {
        deal.trump_played = true;
    }
    deal.tricks_played += 1;
    deal.leader = winner;

    let plays = std::mem::take(&mut deal.trick_plays);
    deal.trick_lead = None;
    deal.last_trick = Some(plays.clone());
    info!(trick_no, winner, points, "Trick resolved");

    Ok(TrickResult {
        trick_no,
        winner,
        points,
        plays,
    })
}

fn terminate_for_revoke(deal: &mut DealState, seat: Seat, suit: Suit) -> DomainError {
    deal.phase = DealPhase::RevokedTerminated {
        offender: seat,
        suit,
    };
    warn!(seat, ?suit, tricks_played = deal.tricks_played, "Revoke detected");
    DomainError::RevokeDetected { seat, suit }
}

/// Winner of a complete trick: the strongest trump if any trump was played,
/// otherwise the strongest card of the led suit.
pub fn resolve_current_trick(plays: &[(Seat, Card)], trump: Suit) -> Option<Seat> {
    if plays.len() < PLAYERS {
        return None;
    }
    let lead = plays[0].1.suit;
    let mut best_idx = 0usize;
    for i in 1..plays.len() {
        if card_beats(plays[i].1, plays[best_idx].1, lead, trump) {
            best_idx = i;
        }
    }
    Some(plays[best_idx].0)
}

pub fn trick_points(plays: &[(Seat, Card)]) -> u8 {
    plays.iter().map(|(_, c)| c.points()).sum()
}

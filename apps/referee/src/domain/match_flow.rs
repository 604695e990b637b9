//! Match controller: sequences deals, rotates the dealer and keeps the
//! victory-credit tally.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::events::{DealOutcome, DealRecord, MatchResult, RefereeEvent};
use crate::domain::legality::legal_plays;
use crate::domain::rules::{award_for, DealAward, DEFAULT_MATCH_DEALS, REVOKE_PENALTY};
use crate::domain::state::{next_seat, require_seat, DealPhase, DealState, Seat, Team};
use crate::domain::tricks::{self, PlayCardResult};
use crate::domain::{Card, Suit};
use crate::errors::domain::DomainError;

/// What to do when the scheduled deals are over and credits are level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TiePolicy {
    /// End the match and report [`MatchResult::Ambiguous`].
    #[default]
    Surface,
    /// Keep dealing, one deal at a time, until the credits differ.
    SuddenDeath,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRules {
    /// Number of deals in a match.
    pub deals: u8,
    pub tie_policy: TiePolicy,
}

impl Default for MatchRules {
    fn default() -> Self {
        Self {
            deals: DEFAULT_MATCH_DEALS,
            tie_policy: TiePolicy::Surface,
        }
    }
}

/// A match and its (at most one) active deal.
#[derive(Debug, Clone)]
pub struct MatchState {
    pub rules: MatchRules,
    /// Dealer of the active deal, or of the next one.
    pub dealer: Seat,
    pub deals_played: u32,
    /// Victory credits per team, indexed by [`Team::index`].
    pub victory_credits: [u16; 2],
    pub deal: Option<DealState>,
    pub terminal: bool,
    pub result: Option<MatchResult>,
    pub history: Vec<DealRecord>,
}

impl MatchState {
    pub fn new(rules: MatchRules, first_dealer: Seat) -> Result<Self, DomainError> {
        require_seat(first_dealer)?;
        if rules.deals == 0 {
            return Err(DomainError::invalid_state(
                "new_match",
                "a match needs at least one deal",
            ));
        }
        Ok(Self {
            rules,
            dealer: first_dealer,
            deals_played: 0,
            victory_credits: [0; 2],
            deal: None,
            terminal: false,
            result: None,
            history: Vec::new(),
        })
    }

    /// No deal has got past turning its trump yet.
    pub fn is_fresh(&self) -> bool {
        self.deals_played == 0
            && !matches!(&self.deal, Some(d) if d.phase != DealPhase::AwaitingTrump)
    }

    pub fn active_deal(&self) -> Option<&DealState> {
        self.deal.as_ref()
    }

    /// Finished deals, oldest first.
    pub fn deal_results(&self) -> &[DealRecord] {
        &self.history
    }

    /// 1-based number of the active deal, or of the next one.
    pub fn deal_no(&self) -> u32 {
        self.deals_played.saturating_add(1)
    }

    /// Start a new deal with the current dealer leading.
    pub fn start_deal(&mut self) -> Result<Vec<RefereeEvent>, DomainError> {
        if self.terminal {
            return Err(DomainError::invalid_state("start_deal", "match is over"));
        }
        if self.deal.is_some() {
            return Err(DomainError::invalid_state(
                "start_deal",
                "a deal is already in progress",
            ));
        }
        // Sudden death can run past any scheduled length; stop at the counter's end
        let deal_no = self.deals_played.checked_add(1).ok_or_else(|| {
            DomainError::invalid_state("start_deal", "deal counter exhausted")
        })?;
        self.deal = Some(DealState::new(self.dealer));
        info!(deal_no, dealer = self.dealer, "Deal started");
        Ok(vec![RefereeEvent::DealStarted {
            deal_no,
            dealer: self.dealer,
        }])
    }

    pub fn set_trump(&mut self, card: Card) -> Result<Vec<RefereeEvent>, DomainError> {
        let deal = self.require_deal_mut("set_trump")?;
        tricks::set_trump(deal, card)?;
        Ok(vec![RefereeEvent::TrumpSet {
            card,
            suit: card.suit,
        }])
    }

    /// Submit a play. A detected revoke is not an error at this level: it is
    /// reported as a [`RefereeEvent::DealRevoked`] after the penalty has been
    /// applied.
    pub fn play_card(&mut self, seat: Seat, card: Card) -> Result<Vec<RefereeEvent>, DomainError> {
        let deal = self.require_deal_mut("play_card")?;
        match tricks::play_card(deal, seat, card) {
            Ok(result) => Ok(self.after_play(seat, card, result)),
            Err(DomainError::RevokeDetected { seat, suit }) => Ok(self.settle_revoke(seat, suit)),
            Err(e) => Err(e),
        }
    }

    pub fn legal_plays(&self, seat: Seat, hand: &[Card]) -> Vec<Card> {
        match &self.deal {
            Some(deal) => legal_plays(deal, seat, hand),
            None => Vec::new(),
        }
    }

    /// End the match now (an external rule ruled it over). Any active deal is
    /// dropped without credits.
    pub fn conclude(&mut self) -> Result<Vec<RefereeEvent>, DomainError> {
        if self.terminal {
            return Err(DomainError::invalid_state("conclude", "match is over"));
        }
        if let Some(deal) = self.deal.take() {
            info!(
                deal_no = self.deal_no(),
                tricks_played = deal.tricks_played,
                "Active deal discarded"
            );
        }
        let result = self.compare_credits();
        Ok(vec![self.finish_match(result, true)])
    }

    /// Winning team of a finished match.
    pub fn winner(&self) -> Result<Team, DomainError> {
        match self.result {
            Some(MatchResult::Winner { team }) => Ok(team),
            Some(MatchResult::Ambiguous) => Err(DomainError::AmbiguousOutcome(format!(
                "victory credits tied at {:?}",
                self.victory_credits
            ))),
            None => Err(DomainError::invalid_state("winner", "match still running")),
        }
    }

    fn require_deal_mut(&mut self, op: &'static str) -> Result<&mut DealState, DomainError> {
        if self.terminal {
            return Err(DomainError::invalid_state(op, "match is over"));
        }
        self.deal
            .as_mut()
            .ok_or_else(|| DomainError::invalid_state(op, "no active deal"))
    }

    fn after_play(&mut self, seat: Seat, card: Card, result: PlayCardResult) -> Vec<RefereeEvent> {
        let mut events = vec![RefereeEvent::CardPlayed { seat, card }];
        if let Some(trick) = result.trick {
            events.push(RefereeEvent::TrickResolved(trick));
        }
        if result.phase_transitioned == Some(DealPhase::Completed) {
            events.extend(self.settle_completed());
        }
        events
    }

    fn settle_completed(&mut self) -> Vec<RefereeEvent> {
        let Some(deal) = self.deal.take() else {
            return Vec::new();
        };
        let deal_no = self.deal_no();
        let award = award_for(deal.points);
        match award {
            DealAward::Credited { team, credits } => {
                self.victory_credits[team.index()] += credits;
                info!(deal_no, %team, credits, points = ?deal.points, "Deal credited");
            }
            DealAward::Ambiguous => {
                info!(deal_no, points = ?deal.points, "Deal split evenly, no credit");
            }
        }
        let mut events = vec![RefereeEvent::DealCompleted {
            deal_no,
            points: deal.points,
            award,
        }];
        self.archive(&deal, DealOutcome::Completed { award });
        events.extend(self.advance());
        events
    }

    fn settle_revoke(&mut self, offender: Seat, suit: Suit) -> Vec<RefereeEvent> {
        let Some(deal) = self.deal.take() else {
            return Vec::new();
        };
        let deal_no = self.deal_no();
        let credited = Team::of(offender).opponent();
        self.victory_credits[credited.index()] += REVOKE_PENALTY;
        info!(deal_no, offender, %credited, "Revoke penalty applied");
        let mut events = vec![RefereeEvent::DealRevoked {
            deal_no,
            offender,
            suit,
            credited,
            credits: REVOKE_PENALTY,
        }];
        self.archive(
            &deal,
            DealOutcome::Revoked {
                offender,
                suit,
                credited,
            },
        );
        events.extend(self.advance());
        events
    }

    fn archive(&mut self, deal: &DealState, outcome: DealOutcome) {
        self.history.push(DealRecord {
            deal_no: self.deal_no(),
            dealer: deal.dealer,
            trump: deal.trump,
            points: deal.points,
            tricks_played: deal.tricks_played,
            outcome,
        });
    }

    /// Rotate the dealer, count the deal and check for the end of the match.
    fn advance(&mut self) -> Option<RefereeEvent> {
        self.dealer = next_seat(self.dealer);
        self.deals_played = self.deals_played.saturating_add(1);
        if self.deals_played < u32::from(self.rules.deals) {
            return None;
        }
        match self.compare_credits() {
            MatchResult::Ambiguous if self.rules.tie_policy == TiePolicy::SuddenDeath => {
                info!(
                    deals_played = self.deals_played,
                    "Credits level, playing another deal"
                );
                None
            }
            result => Some(self.finish_match(result, false)),
        }
    }

    fn compare_credits(&self) -> MatchResult {
        let [one, two] = self.victory_credits;
        if one > two {
            MatchResult::Winner { team: Team::One }
        } else if two > one {
            MatchResult::Winner { team: Team::Two }
        } else {
            MatchResult::Ambiguous
        }
    }

    fn finish_match(&mut self, result: MatchResult, concluded_early: bool) -> RefereeEvent {
        self.terminal = true;
        self.result = Some(result);
        info!(?result, credits = ?self.victory_credits, concluded_early, "Match over");
        RefereeEvent::MatchTerminal {
            result,
            victory_credits: self.victory_credits,
            concluded_early,
        }
    }
}

use crate::domain::events::{DealOutcome, MatchResult, RefereeEvent};
use crate::domain::match_flow::{MatchRules, MatchState, TiePolicy};
use crate::domain::rules::{DealAward, REVOKE_PENALTY};
use crate::domain::state::{nth_from, DealPhase, Team};
use crate::domain::test_state_helpers::card;
use crate::domain::Suit;
use crate::errors::domain::DomainError;

fn new_match(deals: u8, tie_policy: TiePolicy) -> MatchState {
    MatchState::new(MatchRules { deals, tie_policy }, 0).unwrap()
}

/// Fast-forward the active deal to its last trick with `before` points
/// banked, then play a pointless final trick won by the dealer's team.
fn finish_deal_with(state: &mut MatchState, before: [u8; 2]) -> Vec<RefereeEvent> {
    let mut events = state.start_deal().unwrap();
    state.set_trump(card("KH")).unwrap();
    let dealer = state.dealer;
    {
        let deal = state.deal.as_mut().unwrap();
        deal.points = before;
        deal.tricks_played = 9;
        deal.phase = DealPhase::InTrick { trick_no: 9 };
    }
    for (i, c) in ["6C", "2C", "3C", "4C"].iter().enumerate() {
        events.extend(state.play_card(nth_from(dealer, i as u8), card(c)).unwrap());
    }
    events
}

/// Start a deal and have the fourth seat duck an unplayed trump lead.
fn revoke_deal(state: &mut MatchState) -> Vec<RefereeEvent> {
    state.start_deal().unwrap();
    state.set_trump(card("KH")).unwrap();
    let dealer = state.dealer;
    let mut events = Vec::new();
    for (i, c) in ["2H", "3H", "4H", "2C"].iter().enumerate() {
        events.extend(state.play_card(nth_from(dealer, i as u8), card(c)).unwrap());
    }
    events
}

fn award_of(events: &[RefereeEvent]) -> Option<DealAward> {
    events.iter().find_map(|e| match e {
        RefereeEvent::DealCompleted { award, .. } => Some(*award),
        _ => None,
    })
}

#[test]
fn loser_with_thirty_five_concedes_one_credit() {
    let mut state = new_match(4, TiePolicy::Surface);
    let events = finish_deal_with(&mut state, [85, 35]);
    assert_eq!(
        award_of(&events),
        Some(DealAward::Credited {
            team: Team::One,
            credits: 1
        })
    );
    assert_eq!(state.victory_credits, [1, 0]);
}

#[test]
fn loser_with_twenty_concedes_two_credits() {
    let mut state = new_match(4, TiePolicy::Surface);
    finish_deal_with(&mut state, [20, 100]);
    assert_eq!(state.victory_credits, [0, 2]);
}

#[test]
fn whitewash_concedes_four_credits() {
    let mut state = new_match(4, TiePolicy::Surface);
    finish_deal_with(&mut state, [120, 0]);
    assert_eq!(state.victory_credits, [4, 0]);
}

#[test]
fn even_split_credits_nobody() {
    let mut state = new_match(4, TiePolicy::Surface);
    let events = finish_deal_with(&mut state, [60, 60]);
    assert_eq!(award_of(&events), Some(DealAward::Ambiguous));
    assert_eq!(state.victory_credits, [0, 0]);
    // the deal still counts and the deal passes on
    assert_eq!(state.deals_played, 1);
    assert_eq!(state.dealer, 1);
}

#[test]
fn completed_deal_is_archived_and_dealer_rotates() {
    let mut state = new_match(4, TiePolicy::Surface);
    assert!(state.is_fresh());
    finish_deal_with(&mut state, [85, 35]);

    assert!(!state.is_fresh());
    assert!(state.active_deal().is_none());
    assert_eq!(state.dealer, 1);
    let record = &state.deal_results()[0];
    assert_eq!(record.deal_no, 1);
    assert_eq!(record.dealer, 0);
    assert_eq!(record.tricks_played, 10);
    assert_eq!(record.trump, Some(card("KH")));
    assert!(matches!(record.outcome, DealOutcome::Completed { .. }));
}

#[test]
fn revoke_credits_opponents_and_rotates_dealer() {
    let mut state = new_match(4, TiePolicy::Surface);
    let events = revoke_deal(&mut state);

    assert_eq!(
        events.last(),
        Some(&RefereeEvent::DealRevoked {
            deal_no: 1,
            offender: 3,
            suit: Suit::Hearts,
            credited: Team::One,
            credits: REVOKE_PENALTY,
        })
    );
    assert_eq!(state.victory_credits, [REVOKE_PENALTY, 0]);
    assert_eq!(state.dealer, 1);
    assert_eq!(state.deals_played, 1);
    assert!(state.active_deal().is_none());
    assert!(matches!(
        state.deal_results()[0].outcome,
        DealOutcome::Revoked { offender: 3, .. }
    ));

    // next deal: dealer 1, the revoker is seat 0 and team two collects
    revoke_deal(&mut state);
    assert_eq!(state.victory_credits, [REVOKE_PENALTY, REVOKE_PENALTY]);
    assert_eq!(state.dealer, 2);
}

#[test]
fn match_ends_after_its_length() {
    let mut state = new_match(2, TiePolicy::Surface);
    finish_deal_with(&mut state, [85, 35]);
    assert!(!state.terminal);
    let events = finish_deal_with(&mut state, [20, 100]);

    assert!(state.terminal);
    assert_eq!(
        events.last(),
        Some(&RefereeEvent::MatchTerminal {
            result: MatchResult::Winner { team: Team::Two },
            victory_credits: [1, 2],
            concluded_early: false,
        })
    );
    assert_eq!(state.winner(), Ok(Team::Two));
    assert!(matches!(
        state.start_deal().unwrap_err(),
        DomainError::InvalidState { op: "start_deal", .. }
    ));
}

#[test]
fn tied_match_surfaces_ambiguity() {
    let mut state = new_match(1, TiePolicy::Surface);
    finish_deal_with(&mut state, [60, 60]);
    assert!(state.terminal);
    assert_eq!(state.result, Some(MatchResult::Ambiguous));
    assert!(matches!(
        state.winner().unwrap_err(),
        DomainError::AmbiguousOutcome(_)
    ));
}

#[test]
fn sudden_death_plays_on_until_the_tie_breaks() {
    let mut state = new_match(1, TiePolicy::SuddenDeath);
    finish_deal_with(&mut state, [60, 60]);
    assert!(!state.terminal);
    finish_deal_with(&mut state, [60, 60]);
    assert!(!state.terminal);
    finish_deal_with(&mut state, [50, 70]);
    assert!(state.terminal);
    assert_eq!(state.deals_played, 3);
    assert_eq!(state.winner(), Ok(Team::Two));
}

#[test]
fn only_one_deal_at_a_time() {
    let mut state = new_match(4, TiePolicy::Surface);
    state.start_deal().unwrap();
    assert!(matches!(
        state.start_deal().unwrap_err(),
        DomainError::InvalidState { .. }
    ));
}

#[test]
fn plays_need_an_active_deal() {
    let mut state = new_match(4, TiePolicy::Surface);
    assert!(matches!(
        state.play_card(0, card("AC")).unwrap_err(),
        DomainError::InvalidState { op: "play_card", .. }
    ));
    assert!(matches!(
        state.set_trump(card("AC")).unwrap_err(),
        DomainError::InvalidState { op: "set_trump", .. }
    ));
}

#[test]
fn conclude_ends_the_match_and_drops_the_deal() {
    let mut state = new_match(4, TiePolicy::Surface);
    finish_deal_with(&mut state, [85, 35]);
    state.start_deal().unwrap();
    state.set_trump(card("AS")).unwrap();

    let events = state.conclude().unwrap();
    assert_eq!(
        events,
        vec![RefereeEvent::MatchTerminal {
            result: MatchResult::Winner { team: Team::One },
            victory_credits: [1, 0],
            concluded_early: true,
        }]
    );
    assert!(state.active_deal().is_none());
    assert_eq!(state.deal_results().len(), 1);
    assert!(state.conclude().is_err());
}

#[test]
fn match_rejects_bad_setup() {
    assert_eq!(
        MatchState::new(MatchRules::default(), 4).unwrap_err(),
        DomainError::InvalidSeat(4)
    );
    assert!(MatchState::new(
        MatchRules {
            deals: 0,
            tie_policy: TiePolicy::Surface
        },
        0
    )
    .is_err());
}

#[test]
fn non_terminal_match_has_no_winner() {
    let state = new_match(4, TiePolicy::Surface);
    assert!(matches!(
        state.winner().unwrap_err(),
        DomainError::InvalidState { op: "winner", .. }
    ));
}

#[test]
fn sudden_death_counts_past_the_longest_configured_match() {
    let mut state = new_match(u8::MAX, TiePolicy::SuddenDeath);
    state.deals_played = 254;
    state.dealer = 2;

    finish_deal_with(&mut state, [60, 60]);
    assert_eq!(state.deals_played, 255);
    assert!(!state.terminal);

    let events = finish_deal_with(&mut state, [60, 60]);
    assert!(events.contains(&RefereeEvent::DealStarted {
        deal_no: 256,
        dealer: 3
    }));
    assert!(!state.terminal);

    finish_deal_with(&mut state, [50, 70]);
    assert!(state.terminal);
    assert_eq!(state.deals_played, 257);
    assert_eq!(state.winner(), Ok(Team::Two));
    let numbers: Vec<u32> = state.deal_results().iter().map(|r| r.deal_no).collect();
    assert_eq!(numbers, vec![255, 256, 257]);
}

#[test]
fn exhausted_deal_counter_refuses_a_new_deal() {
    let mut state = new_match(1, TiePolicy::SuddenDeath);
    state.deals_played = u32::MAX;
    assert!(matches!(
        state.start_deal().unwrap_err(),
        DomainError::InvalidState { op: "start_deal", .. }
    ));
    assert!(state.active_deal().is_none());
}

use crate::domain::match_flow::{MatchRules, MatchState};
use crate::domain::snapshot::snapshot;
use crate::domain::state::DealPhase;
use crate::domain::test_state_helpers::card;
use crate::domain::{Card, Suit};

#[test]
fn fresh_match_snapshot() {
    let state = MatchState::new(MatchRules::default(), 2).unwrap();
    let snap = snapshot(&state);
    assert!(snap.fresh);
    assert!(!snap.terminal);
    assert!(!snap.trump_set());
    assert_eq!(snap.trick_size(), 0);
    assert_eq!(snap.dealer, 2);
    assert_eq!(snap.match_deals, 4);
    assert!(snap.deal.is_none());
}

#[test]
fn snapshot_mid_trick() {
    let mut state = MatchState::new(MatchRules::default(), 0).unwrap();
    state.start_deal().unwrap();
    let snap = snapshot(&state);
    assert!(snap.fresh, "trump not turned yet");

    state.set_trump(Card::from_id(27).unwrap()).unwrap();
    state.play_card(0, Card::from_id(5).unwrap()).unwrap();
    state.play_card(1, Card::from_id(15).unwrap()).unwrap();

    let snap = snapshot(&state);
    assert!(!snap.fresh);
    assert!(snap.trump_set());
    assert_eq!(snap.trick_size(), 2);
    let deal = snap.deal.as_ref().unwrap();
    assert_eq!(deal.trump, Some(card("KH")));
    assert_eq!(deal.trump_suit, Some(Suit::Hearts));
    assert_eq!(deal.to_act, Some(2));
    assert_eq!(deal.leader, 0);
    assert_eq!(deal.phase, DealPhase::InTrick { trick_no: 0 });
}

#[test]
fn snapshot_is_idempotent() {
    let mut state = MatchState::new(MatchRules::default(), 0).unwrap();
    state.start_deal().unwrap();
    state.set_trump(card("AS")).unwrap();
    state.play_card(0, card("2D")).unwrap();

    let a = snapshot(&state);
    let b = snapshot(&state);
    assert_eq!(a, b);
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[test]
fn snapshot_serializes_cards_as_ids() {
    let mut state = MatchState::new(MatchRules::default(), 0).unwrap();
    state.start_deal().unwrap();
    state.set_trump(Card::from_id(27).unwrap()).unwrap();

    let json = serde_json::to_value(snapshot(&state)).unwrap();
    assert_eq!(json["deal"]["trump"], 27);
    assert_eq!(json["deal"]["trump_suit"], "HEARTS");
    assert_eq!(json["victory_credits"], serde_json::json!([0, 0]));
}

//! Test-only state helpers for domain unit tests.

#[cfg(test)]
pub use state_helpers::{card, cards, deal_in_trick, drive_deal, DriveOutcome};

#[cfg(test)]
mod state_helpers {
    use crate::domain::cards_parsing::try_parse_cards;
    use crate::domain::events::RefereeEvent;
    use crate::domain::legality::{choose, legal_plays};
    use crate::domain::match_flow::MatchState;
    use crate::domain::state::DealState;
    use crate::domain::tricks::set_trump;
    use crate::domain::Card;

    pub fn cards(tokens: &[&str]) -> Vec<Card> {
        try_parse_cards(tokens).expect("hardcoded valid card tokens")
    }

    pub fn card(token: &str) -> Card {
        token.parse().expect("hardcoded valid card token")
    }

    /// A fresh deal with `trump` already turned, dealer leading trick 0.
    pub fn deal_in_trick(dealer: u8, trump: &str) -> DealState {
        let mut deal = DealState::new(dealer);
        set_trump(&mut deal, card(trump)).expect("fresh deal accepts trump");
        deal
    }

    #[derive(Debug)]
    pub struct DriveOutcome {
        pub events: Vec<RefereeEvent>,
        pub plays: Vec<(u8, Card)>,
    }

    /// Play the active deal to its end with every seat choosing the lowest
    /// legal card from `hands`. The deal must already have its trump.
    pub fn drive_deal(state: &mut MatchState, mut hands: [Vec<Card>; 4]) -> DriveOutcome {
        let mut events = Vec::new();
        let mut plays = Vec::new();
        while let Some(seat) = state.active_deal().and_then(|d| d.turn()) {
            let hand = &mut hands[seat as usize];
            let legal = legal_plays(state.active_deal().expect("deal is active"), seat, hand);
            let pick = choose(&legal).expect("a seat holding cards has a legal play");
            hand.retain(|c| *c != pick);
            plays.push((seat, pick));
            events.extend(state.play_card(seat, pick).expect("legal play is accepted"));
        }
        DriveOutcome { events, plays }
    }
}

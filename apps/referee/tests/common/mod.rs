#![allow(dead_code)]

use referee::ai::{by_name, AiPlayer};
use referee::domain::{deal_hands, derive_bot_seed, derive_dealing_seed, Card, RefereeEvent};
use referee::{Referee, RefereeConfig};

// Logging is auto-installed for every test binary that pulls in `common`
#[ctor::ctor]
fn init_logging() {
    referee_test_support::logging::init();
}

pub fn card(token: &str) -> Card {
    token.parse().expect("hardcoded valid card token")
}

pub fn id(n: u8) -> Card {
    Card::from_id(n).expect("hardcoded valid card id")
}

pub fn referee_with(config: RefereeConfig) -> Referee {
    Referee::new(&config).expect("valid referee config")
}

/// Play a whole match with the named bot in every seat, dealing each deal
/// from `seed`. Returns every event in order.
pub fn play_bot_match(referee: &Referee, bot: &str, seed: u64) -> Vec<RefereeEvent> {
    let factory = by_name(bot).expect("registered bot");
    let bots: Vec<Box<dyn AiPlayer + Send + Sync>> = (0..4u8)
        .map(|seat| (factory.make)(Some(derive_bot_seed(seed, seat))))
        .collect();

    let mut events = Vec::new();
    while !referee.snapshot().terminal {
        events.extend(referee.start_deal().expect("deal starts"));
        let snap = referee.snapshot();
        let dealt = deal_hands(derive_dealing_seed(seed, snap.deals_played.saturating_add(1)), snap.dealer)
            .expect("valid dealer");
        events.extend(referee.set_trump(dealt.trump).expect("trump accepted"));

        let mut hands = dealt.hands;
        while let Some(seat) = referee.snapshot().deal.and_then(|d| d.to_act) {
            let hand = &mut hands[seat as usize];
            let view = referee.view_for(seat, hand).expect("trick in progress");
            let pick = bots[seat as usize].choose_play(&view).expect("bot picks");
            hand.retain(|c| *c != pick);
            events.extend(referee.play_card(seat, pick).expect("legal play accepted"));
        }
    }
    events
}

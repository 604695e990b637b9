// Proptest generators for domain types.
// These generators keep cards unique so that generated tricks and hands are
// always physically possible.

use proptest::prelude::*;

use crate::domain::cards_types::{RANKS, SUITS};
use crate::domain::state::Seat;
use crate::domain::{Card, Rank, Suit};

/// Generate a random Suit
pub fn suit() -> impl Strategy<Value = Suit> {
    prop::sample::select(SUITS.to_vec())
}

/// Generate a random Rank
pub fn rank() -> impl Strategy<Value = Rank> {
    prop::sample::select(RANKS.to_vec())
}

/// Generate a single card
pub fn card() -> impl Strategy<Value = Card> {
    (suit(), rank()).prop_map(|(suit, rank)| Card { suit, rank })
}

pub fn seat() -> impl Strategy<Value = Seat> {
    0u8..=3u8
}

/// Generate a vector of N unique cards
pub fn unique_cards(count: usize) -> impl Strategy<Value = Vec<Card>> {
    Just(crate::domain::full_deck())
        .prop_shuffle()
        .prop_map(move |mut deck| {
            deck.truncate(count);
            deck
        })
}

/// Generate a vector of 1 to max_count unique cards
pub fn unique_cards_up_to(max_count: usize) -> impl Strategy<Value = Vec<Card>> {
    (1..=max_count).prop_flat_map(unique_cards)
}

/// Generate a hand containing no card of `excluded`.
pub fn hand_without_suit(excluded: Suit) -> impl Strategy<Value = Vec<Card>> {
    let pool: Vec<Card> = crate::domain::full_deck()
        .into_iter()
        .filter(|c| c.suit != excluded)
        .collect();
    (1usize..=10usize).prop_flat_map(move |count| {
        Just(pool.clone()).prop_shuffle().prop_map(move |mut cards| {
            cards.truncate(count);
            cards
        })
    })
}

/// Complete trick: leader plus four unique cards in play order.
pub fn complete_trick() -> impl Strategy<Value = (Seat, Vec<(Seat, Card)>)> {
    (seat(), unique_cards(4)).prop_map(|(leader, cards)| {
        let plays = cards
            .into_iter()
            .enumerate()
            .map(|(i, card)| ((leader + i as u8) % 4, card))
            .collect();
        (leader, plays)
    })
}

/// A whole shuffled deck split into four ten-card hands.
pub fn four_full_hands() -> impl Strategy<Value = [Vec<Card>; 4]> {
    unique_cards(40).prop_map(|cards| {
        let mut hands: [Vec<Card>; 4] = Default::default();
        for (i, chunk) in cards.chunks(10).enumerate() {
            hands[i] = chunk.to_vec();
        }
        hands
    })
}

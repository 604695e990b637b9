//! Compact card identifiers: `id = suit_index * 10 + rank_index`.
//!
//! The identifier is what the vision pipeline and the automated players
//! exchange. Everything here is pure and total for `id < 40`.

use super::cards_types::{Card, Rank, Suit, RANKS, SUITS};
use crate::errors::domain::DomainError;

pub type CardId = u8;

pub const DECK_SIZE: usize = 40;
pub const SUIT_SIZE: u8 = 10;

pub fn decode(id: CardId) -> Result<(Rank, Suit), DomainError> {
    if id as usize >= DECK_SIZE {
        return Err(DomainError::InvalidCardId(id));
    }
    let suit = SUITS[(id / SUIT_SIZE) as usize];
    let rank = RANKS[(id % SUIT_SIZE) as usize];
    Ok((rank, suit))
}

pub fn encode(rank: Rank, suit: Suit) -> CardId {
    suit.index() as u8 * SUIT_SIZE + rank.strength()
}

pub fn point_value(id: CardId) -> Result<u8, DomainError> {
    decode(id).map(|(rank, _)| rank.points())
}

pub fn suit_of(id: CardId) -> Result<Suit, DomainError> {
    decode(id).map(|(_, suit)| suit)
}

pub fn rank_strength(id: CardId) -> Result<u8, DomainError> {
    decode(id).map(|(rank, _)| rank.strength())
}

impl Card {
    pub fn from_id(id: CardId) -> Result<Self, DomainError> {
        decode(id).map(|(rank, suit)| Card { suit, rank })
    }

    pub fn id(self) -> CardId {
        encode(self.rank, self.suit)
    }
}

impl TryFrom<CardId> for Card {
    type Error = DomainError;

    fn try_from(id: CardId) -> Result<Self, Self::Error> {
        Card::from_id(id)
    }
}

impl From<Card> for CardId {
    fn from(card: Card) -> Self {
        card.id()
    }
}

/// All 40 cards in identifier order.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in SUITS {
        for rank in RANKS {
            deck.push(Card { suit, rank });
        }
    }
    deck
}

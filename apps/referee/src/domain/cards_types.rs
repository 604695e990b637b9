//! Core card-related types: Card, Rank, Suit

use std::fmt;

pub const SUITS: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

/// Ranks from weakest to strongest. This is the only ordering used for
/// trick resolution.
pub const RANKS: [Rank; 10] = [
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Queen,
    Rank::Jack,
    Rank::King,
    Rank::Seven,
    Rank::Ace,
];

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const fn index(self) -> usize {
        match self {
            Suit::Clubs => 0,
            Suit::Diamonds => 1,
            Suit::Hearts => 2,
            Suit::Spades => 3,
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Variant order is strength order (2 weakest, Ace strongest), so the derived
/// `Ord` compares strength, not face value.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Queen,
    Jack,
    King,
    Seven,
    Ace,
}

impl Rank {
    /// Position in the strength order, 0..=9.
    pub const fn strength(self) -> u8 {
        match self {
            Rank::Two => 0,
            Rank::Three => 1,
            Rank::Four => 2,
            Rank::Five => 3,
            Rank::Six => 4,
            Rank::Queen => 5,
            Rank::Jack => 6,
            Rank::King => 7,
            Rank::Seven => 8,
            Rank::Ace => 9,
        }
    }

    pub const fn points(self) -> u8 {
        match self {
            Rank::Two | Rank::Three | Rank::Four | Rank::Five | Rank::Six => 0,
            Rank::Queen => 2,
            Rank::Jack => 3,
            Rank::King => 4,
            Rank::Seven => 10,
            Rank::Ace => 11,
        }
    }

    /// Label used by the detection vocabulary and by `Display`.
    pub const fn label(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Queen => "Q",
            Rank::Jack => "J",
            Rank::King => "K",
            Rank::Seven => "7",
            Rank::Ace => "A",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One of the 40 cards of the Sueca deck.
///
/// Field order makes the derived `Ord` sort by suit, then strength, which is
/// also identifier order. Do not use it for trick resolution: trump and lead
/// decide that, see [`crate::domain::card_beats`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    pub const fn points(self) -> u8 {
        self.rank.points()
    }

    pub const fn strength(self) -> u8 {
        self.rank.strength()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

//! Card parsing from string representations (e.g., "A♠", "AS", "7h") and from
//! the detection vocabulary (separate rank and suit labels).

use std::str::FromStr;

use super::cards_types::{Card, Rank, Suit};
use crate::errors::domain::DomainError;

/// Parse a rank label: `2 3 4 5 6 Q J K 7 A`, letters in any case.
pub fn parse_rank_label(label: &str) -> Result<Rank, DomainError> {
    let rank = match label.trim().to_ascii_uppercase().as_str() {
        "2" => Rank::Two,
        "3" => Rank::Three,
        "4" => Rank::Four,
        "5" => Rank::Five,
        "6" => Rank::Six,
        "7" => Rank::Seven,
        "Q" => Rank::Queen,
        "J" => Rank::Jack,
        "K" => Rank::King,
        "A" => Rank::Ace,
        _ => return Err(DomainError::parse(format!("invalid rank: {label}"))),
    };
    Ok(rank)
}

/// Parse a suit label: symbol (`♣♦♥♠`), English name, or its initial letter.
pub fn parse_suit_label(label: &str) -> Result<Suit, DomainError> {
    let trimmed = label.trim();
    let suit = match trimmed {
        "♣" => Suit::Clubs,
        "♦" => Suit::Diamonds,
        "♥" => Suit::Hearts,
        "♠" => Suit::Spades,
        _ => match trimmed.to_ascii_lowercase().as_str() {
            "c" | "club" | "clubs" => Suit::Clubs,
            "d" | "diamond" | "diamonds" => Suit::Diamonds,
            "h" | "heart" | "hearts" => Suit::Hearts,
            "s" | "spade" | "spades" => Suit::Spades,
            _ => return Err(DomainError::parse(format!("invalid suit: {label}"))),
        },
    };
    Ok(suit)
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let mut chars = token.chars();
        let rank_ch = chars
            .next()
            .ok_or_else(|| DomainError::parse(format!("Parse card: {s}")))?;
        let suit_part = chars.as_str();
        if suit_part.chars().count() != 1 {
            return Err(DomainError::parse(format!("Parse card: {s}")));
        }
        let rank = parse_rank_label(&rank_ch.to_string())
            .map_err(|_| DomainError::parse(format!("Parse card: {s}")))?;
        let suit = parse_suit_label(suit_part)
            .map_err(|_| DomainError::parse(format!("Parse card: {s}")))?;
        Ok(Card { suit, rank })
    }
}

/// Non-panicking helper to parse card tokens into Card instances.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}

/// Parse console input: a numeric card id (`0..40`) or card text (`"K♥"`).
pub fn parse_card_token(token: &str) -> Result<Card, DomainError> {
    let token = token.trim();
    if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
        let id = token
            .parse::<u8>()
            .map_err(|_| DomainError::parse(format!("card id out of range: {token}")))?;
        return Card::from_id(id);
    }
    token.parse()
}

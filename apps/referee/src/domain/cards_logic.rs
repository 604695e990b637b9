//! Card game logic: checking suits in hands, comparing card strength

use super::cards_types::{Card, Suit};

pub fn hand_has_suit(hand: &[Card], suit: Suit) -> bool {
    hand.iter().any(|c| c.suit == suit)
}

/// Whether `a` beats `b` in a trick led with `lead` under `trump`.
///
/// Sueca always has a trump suit.
pub fn card_beats(a: Card, b: Card, lead: Suit, trump: Suit) -> bool {
    let a_trump = a.suit == trump;
    let b_trump = b.suit == trump;
    if a_trump && !b_trump {
        return true;
    }
    if b_trump && !a_trump {
        return false;
    }
    // Same trump status
    if a_trump && b_trump {
        return a.strength() > b.strength();
    }
    // No trump: compare only if following lead
    let a_follows = a.suit == lead;
    let b_follows = b.suit == lead;
    if a_follows && !b_follows {
        return true;
    }
    if b_follows && !a_follows {
        return false;
    }
    if a_follows && b_follows {
        return a.strength() > b.strength();
    }
    false
}

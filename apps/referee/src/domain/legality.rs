//! Play validator and the default automated-player policy.
//!
//! The deal engine never sees hands, so these helpers take the hand from the
//! caller. They are advisory: [`crate::domain::tricks::play_card`] re-checks
//! everything it can on submission.

use crate::domain::hand_has_suit;
use crate::domain::state::{DealPhase, DealState, Seat};
use crate::domain::{Card, Suit};

/// Legal cards for a seat given the public facts of the trick.
///
/// * leading the first trick as a non-dealer: anything but trump, unless the
///   hand is all trump;
/// * leading otherwise: the whole hand;
/// * following: cards of the led suit, or the whole hand when void.
///
/// Returned sorted in identifier order.
pub fn legal_plays_for(
    hand: &[Card],
    lead: Option<Suit>,
    trump: Suit,
    first_trick: bool,
    is_dealer: bool,
) -> Vec<Card> {
    let mut legal: Vec<Card> = match lead {
        None if first_trick && !is_dealer => {
            let non_trump: Vec<Card> = hand.iter().copied().filter(|c| c.suit != trump).collect();
            if non_trump.is_empty() {
                hand.to_vec()
            } else {
                non_trump
            }
        }
        None => hand.to_vec(),
        Some(lead) if hand_has_suit(hand, lead) => {
            hand.iter().copied().filter(|c| c.suit == lead).collect()
        }
        Some(_) => hand.to_vec(),
    };
    legal.sort();
    legal
}

/// Compute legal cards the seat may play, independent of turn enforcement.
///
/// Empty outside trick play.
pub fn legal_plays(deal: &DealState, seat: Seat, hand: &[Card]) -> Vec<Card> {
    let DealPhase::InTrick { .. } = deal.phase else {
        return Vec::new();
    };
    let Some(trump) = deal.trump_suit() else {
        return Vec::new();
    };
    legal_plays_for(
        hand,
        deal.trick_lead,
        trump,
        deal.is_first_trick(),
        seat == deal.dealer,
    )
}

/// Lowest point value first, then lowest rank strength, then lowest id.
pub fn choose(legal: &[Card]) -> Option<Card> {
    legal
        .iter()
        .copied()
        .min_by_key(|c| (c.points(), c.strength(), c.id()))
}

//! Deterministic card dealing for automated play and simulation.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::domain::cards_codec::full_deck;
use crate::domain::rules::{PLAYERS, TRICKS_PER_DEAL};
use crate::domain::state::{nth_from, require_seat, Seat};
use crate::domain::Card;
use crate::errors::domain::DomainError;

/// Hands for one deal plus the turned trump card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealtCards {
    /// Indexed by seat, each sorted.
    pub hands: [Vec<Card>; PLAYERS],
    /// Last card dealt to the dealer; it stays in the dealer's hand.
    pub trump: Card,
}

/// Shuffle the 40-card deck with `seed` and deal ten cards a seat, starting
/// with the seat left of `dealer` and ending with the dealer.
pub fn deal_hands(seed: u64, dealer: Seat) -> Result<DealtCards, DomainError> {
    require_seat(dealer)?;

    let mut deck = full_deck();
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    deck.shuffle(&mut rng);

    let hand_size = TRICKS_PER_DEAL as usize;
    let mut hands: [Vec<Card>; PLAYERS] = Default::default();
    for (i, packet) in deck.chunks(hand_size).enumerate() {
        let seat = nth_from(dealer, i as u8 + 1);
        hands[seat as usize] = packet.to_vec();
    }

    let trump = hands[dealer as usize]
        .last()
        .copied()
        .ok_or_else(|| DomainError::invalid_state("deal_hands", "dealer received no cards"))?;
    for hand in hands.iter_mut() {
        hand.sort();
    }

    Ok(DealtCards { hands, trump })
}

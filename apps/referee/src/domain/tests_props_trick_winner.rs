/// Property-based tests for trick winner resolution
use proptest::prelude::*;

use crate::domain::tricks::{resolve_current_trick, trick_points};
use crate::domain::{test_gens, test_prelude, Card, Suit};

/// Oracle: index of the winning play, computed independently of `card_beats`.
fn oracle_winner(plays: &[(u8, Card)], trump: Suit) -> usize {
    let lead = plays[0].1.suit;
    let key = |c: &Card| {
        let tier = if c.suit == trump {
            2
        } else if c.suit == lead {
            1
        } else {
            0
        };
        (tier, c.rank)
    };
    let mut best = 0;
    for (i, (_, c)) in plays.iter().enumerate() {
        if key(c) > key(&plays[best].1) {
            best = i;
        }
    }
    best
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// The resolver agrees with the oracle for every trump suit.
    #[test]
    fn prop_trick_winner_matches_oracle(
        (_leader, plays) in test_gens::complete_trick(),
        trump in test_gens::suit(),
    ) {
        let winner = resolve_current_trick(&plays, trump);
        prop_assert_eq!(winner, Some(plays[oracle_winner(&plays, trump)].0));
    }

    /// Any trump on the table beats every non-trump, whatever its rank or
    /// position.
    #[test]
    fn prop_trump_beats_plain_cards(
        (_leader, plays) in test_gens::complete_trick(),
        trump in test_gens::suit(),
    ) {
        let winner = resolve_current_trick(&plays, trump).unwrap();
        let winner_card = plays.iter().find(|(s, _)| *s == winner).unwrap().1;
        if plays.iter().any(|(_, c)| c.suit == trump) {
            prop_assert_eq!(winner_card.suit, trump);
            for (_, c) in plays.iter().filter(|(_, c)| c.suit == trump) {
                prop_assert!(winner_card.rank >= c.rank);
            }
        }
    }

    /// Without trump, the strongest card of the led suit takes the trick.
    #[test]
    fn prop_no_trump_highest_lead_wins(
        (_leader, plays) in test_gens::complete_trick(),
        trump in test_gens::suit(),
    ) {
        prop_assume!(plays.iter().all(|(_, c)| c.suit != trump));
        let lead = plays[0].1.suit;
        let winner = resolve_current_trick(&plays, trump).unwrap();
        let winner_card = plays.iter().find(|(s, _)| *s == winner).unwrap().1;
        prop_assert_eq!(winner_card.suit, lead);
        for (_, c) in plays.iter().filter(|(_, c)| c.suit == lead) {
            prop_assert!(winner_card.rank >= c.rank);
        }
    }

    #[test]
    fn prop_trick_points_are_card_points(
        (_leader, plays) in test_gens::complete_trick(),
    ) {
        let expected: u8 = plays.iter().map(|(_, c)| c.rank.points()).sum();
        prop_assert_eq!(trick_points(&plays), expected);
        prop_assert!(expected <= 44);
    }
}

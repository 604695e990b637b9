/// Property-based tests for follow-suit legality and the lowest-card policy
use proptest::prelude::*;

use crate::domain::legality::{choose, legal_plays_for};
use crate::domain::{test_gens, test_prelude, Card};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Holding the led suit restricts the legal set to exactly those cards.
    #[test]
    fn prop_follow_suit_legality(
        lead_card in test_gens::card(),
        others in test_gens::unique_cards_up_to(9),
        trump in test_gens::suit(),
    ) {
        let lead = lead_card.suit;
        let mut hand = vec![lead_card];
        hand.extend(others.into_iter().filter(|c| *c != lead_card));

        let legal = legal_plays_for(&hand, Some(lead), trump, false, false);
        let expected = hand.iter().filter(|c| c.suit == lead).count();
        prop_assert_eq!(legal.len(), expected);
        prop_assert!(legal.iter().all(|c| c.suit == lead));
    }

    /// Void in the led suit frees the whole hand.
    #[test]
    fn prop_follow_suit_when_void(
        (lead, hand) in test_gens::suit().prop_flat_map(|s| (Just(s), test_gens::hand_without_suit(s))),
        trump in test_gens::suit(),
    ) {
        let legal = legal_plays_for(&hand, Some(lead), trump, false, false);
        let mut expected = hand.clone();
        expected.sort();
        prop_assert_eq!(legal, expected);
    }

    /// Legal plays are always a non-empty subset of a non-empty hand.
    #[test]
    fn prop_legal_is_subset(
        hand in test_gens::unique_cards_up_to(10),
        lead in proptest::option::of(test_gens::suit()),
        trump in test_gens::suit(),
        first_trick in any::<bool>(),
        is_dealer in any::<bool>(),
    ) {
        let legal = legal_plays_for(&hand, lead, trump, first_trick, is_dealer);
        prop_assert!(!legal.is_empty());
        prop_assert!(legal.iter().all(|c| hand.contains(c)));
    }

    /// The chosen card is legal and no legal card is cheaper.
    #[test]
    fn prop_choose_is_cheapest(legal in test_gens::unique_cards_up_to(10)) {
        let pick: Card = choose(&legal).unwrap();
        prop_assert!(legal.contains(&pick));
        for c in &legal {
            prop_assert!((pick.points(), pick.strength()) <= (c.points(), c.strength()));
        }
    }
}

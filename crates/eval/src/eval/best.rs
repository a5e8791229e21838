// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Best 5 cards hand selection.
use showdown_cards::Card;

use super::{
    HandCategory, HandEvaluation,
    classify::{classify_ranks, describe_hand, sorted_by_rank, strength},
    compare,
};
use crate::{
    combinations::Combinations,
    error::{EvalError, Result, check_distinct},
};

/// Returns the best 5 cards hand out of 7 cards.
///
/// All the 21 five cards subsets are classified, if two subsets have the same
/// strength the first in lexicographic order of the cards sorted by rank and
/// suit is returned, so the result doesn't depend on the cards order.
///
/// ```
/// # use showdown_eval::*;
/// let cards = parse_cards(&["AH", "2C", "3D", "4S", "5H", "KC", "7D"]).unwrap();
/// let eval = best_hand(&cards).unwrap();
/// assert_eq!(eval.category, HandCategory::Straight);
/// assert_eq!(eval.tie_break, [5]);
/// ```
pub fn best_hand(cards: &[Card]) -> Result<HandEvaluation> {
    if cards.len() != 7 {
        return Err(EvalError::hand_size("7", cards.len()));
    }

    check_distinct(cards)?;
    Ok(best_of_subsets(cards))
}

/// Returns the best hand for 2 to 7 cards.
///
/// This is used to show the strength of a hand while the cards are dealt:
///
/// - 7 cards: same as [best_hand].
/// - 5 or 6 cards: the best 5 cards subset.
/// - 2 cards: a description of the hole cards, i.e. "AK Suited Connectors".
/// - 3 or 4 cards: the best rank grouping, no straights or flushes.
///
/// Evaluations for less than 5 cards are not complete and must not be used to
/// decide a showdown.
pub fn best_partial_hand(cards: &[Card]) -> Result<HandEvaluation> {
    match cards.len() {
        7 => best_hand(cards),
        5 | 6 => {
            check_distinct(cards)?;
            Ok(best_of_subsets(cards))
        }
        3 | 4 => {
            check_distinct(cards)?;
            Ok(classify_ranks(cards))
        }
        2 => {
            check_distinct(cards)?;
            Ok(hole_cards(cards[0], cards[1]))
        }
        n => Err(EvalError::hand_size("2 to 7", n)),
    }
}

/// Classifies all the 5 cards subsets of 5 or more distinct cards and returns
/// the best.
pub(crate) fn best_of_subsets(cards: &[Card]) -> HandEvaluation {
    const K: usize = HandEvaluation::HAND_SIZE;
    debug_assert!(cards.len() >= K);

    // Subsets are enumerated on sorted cards so ties pick the same hand.
    let cards = sorted_by_rank(cards);

    // The first subset is the first 5 cards.
    let mut best = strength(&cards[..K]);
    let mut hand = [cards[0]; K];

    let mut combs = Combinations::new(cards.len(), K);
    combs.next_subset();

    while let Some(indices) = combs.next_subset() {
        for (slot, &idx) in hand.iter_mut().zip(indices) {
            *slot = cards[idx];
        }

        let eval = strength(&hand);
        if compare(&eval, &best).is_gt() {
            best = eval;
        }
    }

    describe_hand(&mut best);
    best
}

/// Describes the two hole cards.
fn hole_cards(c1: Card, c2: Card) -> HandEvaluation {
    let (high, low) = if c1.rank().high() >= c2.rank().high() {
        (c1, c2)
    } else {
        (c2, c1)
    };

    let (hr, lr) = (high.rank(), low.rank());
    let gap = hr.high() - lr.high();
    let suited = high.suit() == low.suit();

    let (category, description) = if gap == 0 {
        (HandCategory::Pair, format!("Pocket {}", hr.plural()))
    } else {
        let kind = match (suited, gap) {
            (true, 1) => "Suited Connectors",
            (true, 2) => "Suited One-Gapper",
            (true, _) => "Suited",
            (false, 1) => "Connectors",
            (false, _) => "Offsuit",
        };

        (HandCategory::HighCard, format!("{hr}{lr} {kind}"))
    };

    HandEvaluation {
        category,
        best_hand: vec![high, low],
        tie_break: vec![hr.high(), lr.high()],
        description,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use showdown_cards::{Deck, parse_cards};

    fn cards(cards: &[&str]) -> Vec<Card> {
        parse_cards(cards).unwrap()
    }

    fn best(c: &[&str]) -> HandEvaluation {
        best_hand(&cards(c)).unwrap()
    }

    #[test]
    fn seven_cards() {
        let e = best(&["AH", "2C", "3D", "4S", "5H", "KC", "7D"]);
        assert_eq!(e.category, HandCategory::Straight);
        assert_eq!(e.tie_break, [5]);

        let e = best(&["TH", "JH", "QH", "KH", "AH", "2C", "3D"]);
        assert_eq!(e.category, HandCategory::RoyalFlush);
        assert_eq!(e.tie_break, [14]);

        let e = best(&["AS", "AH", "AD", "AC", "2C", "3D", "5H"]);
        assert_eq!(e.category, HandCategory::FourOfAKind);
        assert_eq!(e.tie_break, [14, 5]);

        // Two trips make a full house with the higher trips.
        let e = best(&["8S", "8H", "8D", "QC", "QD", "QH", "2S"]);
        assert_eq!(e.category, HandCategory::FullHouse);
        assert_eq!(e.tie_break, [12, 8]);

        // Three pairs use the best two and the best kicker.
        let e = best(&["8S", "8H", "4D", "4C", "QD", "QH", "2S"]);
        assert_eq!(e.category, HandCategory::TwoPair);
        assert_eq!(e.tie_break, [12, 8, 4]);

        // Six card straight uses the top five.
        let e = best(&["4S", "5H", "6D", "7C", "8D", "9H", "KS"]);
        assert_eq!(e.category, HandCategory::Straight);
        assert_eq!(e.tie_break, [9]);

        // Flush beats the straight.
        let e = best(&["4S", "5S", "6D", "7S", "8S", "9H", "KS"]);
        assert_eq!(e.category, HandCategory::Flush);
        assert_eq!(e.tie_break, [13, 8, 7, 5, 4]);
    }

    #[test]
    fn best_five_cards() {
        let e = best(&["JH", "JC", "AS", "9D", "7H", "2C", "3D"]);
        assert_eq!(e.category, HandCategory::Pair);
        assert_eq!(e.tie_break, [11, 14, 9, 7]);

        let hand = e.best_hand.iter().map(|c| c.to_string()).collect::<Vec<_>>();
        assert_eq!(hand, ["AS", "JH", "JC", "9D", "7H"]);
    }

    #[test]
    fn invalid_seven_cards() {
        let six = cards(&["AS", "KS", "QS", "JS", "TS", "9S"]);
        assert_eq!(best_hand(&six), Err(EvalError::hand_size("7", 6)));

        let dup = cards(&["AS", "KS", "QS", "JS", "TS", "9S", "KS"]);
        assert_eq!(best_hand(&dup), Err(EvalError::DuplicateCard(dup[1])));
    }

    #[test]
    fn tied_subsets_ignore_cards_order() {
        use rand::{SeedableRng, rngs::SmallRng, seq::SliceRandom};

        // Quad aces with a king kicker in two suits.
        let hand = cards(&["AS", "AH", "AD", "AC", "KS", "KD", "2C"]);
        let expected = best_hand(&hand).unwrap();
        assert_eq!(expected.tie_break, [14, 13]);

        let mut swapped = hand.clone();
        swapped.swap(4, 5);
        assert_eq!(best_hand(&swapped).unwrap(), expected);

        let mut reversed = hand.clone();
        reversed.reverse();
        assert_eq!(best_hand(&reversed).unwrap(), expected);

        // Two pair with the queen kicker in two suits.
        let hand = cards(&["AS", "AH", "KS", "KD", "QS", "QD", "3C"]);
        let expected = best_hand(&hand).unwrap();
        let expected_six = best_partial_hand(&hand[..6]).unwrap();
        assert_eq!(expected.tie_break, [14, 13, 12]);

        let mut rng = SmallRng::seed_from_u64(11);
        let (mut seven, mut six) = (hand.clone(), hand[..6].to_vec());
        for _ in 0..50 {
            seven.shuffle(&mut rng);
            six.shuffle(&mut rng);
            assert_eq!(best_hand(&seven).unwrap(), expected, "{seven:?}");
            assert_eq!(best_partial_hand(&six).unwrap(), expected_six, "{six:?}");
        }
    }

    #[test]
    fn matches_exhaustive_search() {
        // The best subset is the maximum over all subsets for random hands.
        let mut rng = rand::rng();
        for _ in 0..200 {
            let mut deck = Deck::default();
            let hand = deck.sample(&mut rng, 7).to_vec();
            let e = best_hand(&hand).unwrap();

            Combinations::for_each_subset(&hand, 5, |sub| {
                let other = strength(sub);
                assert!(compare(&e, &other).is_ge());
            });
        }
    }

    #[test]
    fn partial_five_and_six() {
        let e = best_partial_hand(&cards(&["AH", "2C", "3D", "4S", "5H"])).unwrap();
        assert_eq!(e.category, HandCategory::Straight);
        assert_eq!(e.tie_break, [5]);

        let e = best_partial_hand(&cards(&["KH", "2C", "KD", "4S", "2H", "KS"])).unwrap();
        assert_eq!(e.category, HandCategory::FullHouse);
        assert_eq!(e.tie_break, [13, 2]);
        assert!(e.is_complete());

        let e = best_partial_hand(&cards(&["AH", "2C", "3D", "4S", "5H", "KC", "7D"])).unwrap();
        assert_eq!(e.tie_break, [5]);
    }

    #[test]
    fn partial_three_and_four() {
        let e = best_partial_hand(&cards(&["9H", "9C", "AD"])).unwrap();
        assert_eq!(e.category, HandCategory::Pair);
        assert_eq!(e.tie_break, [9, 14]);
        assert_eq!(e.description, "Pair of Nines");
        assert!(!e.is_complete());

        let e = best_partial_hand(&cards(&["9H", "9C", "AD", "AS"])).unwrap();
        assert_eq!(e.category, HandCategory::TwoPair);
        assert_eq!(e.description, "Two Pair, Aces and Nines");
    }

    #[test]
    fn hole_cards_descriptions() {
        let describe = |c: &[&str]| best_partial_hand(&cards(c)).unwrap();

        let e = describe(&["AS", "AH"]);
        assert_eq!(e.description, "Pocket Aces");
        assert_eq!(e.category, HandCategory::Pair);
        assert_eq!(e.tie_break, [14, 14]);

        assert_eq!(describe(&["6S", "6H"]).description, "Pocket Sixes");

        let e = describe(&["KS", "AS"]);
        assert_eq!(e.description, "AK Suited Connectors");
        assert_eq!(e.category, HandCategory::HighCard);
        assert_eq!(e.tie_break, [14, 13]);

        assert_eq!(describe(&["QD", "AD"]).description, "AQ Suited One-Gapper");
        assert_eq!(describe(&["7C", "2C"]).description, "72 Suited");
        assert_eq!(describe(&["TC", "JH"]).description, "JT Connectors");
        assert_eq!(describe(&["TC", "QH"]).description, "QT Offsuit");
        assert_eq!(describe(&["2C", "AH"]).description, "A2 Offsuit");
    }

    #[test]
    fn partial_invalid() {
        for n in [0, 1, 8] {
            let hand = Deck::default().into_iter().take(n).collect::<Vec<_>>();
            assert_eq!(
                best_partial_hand(&hand),
                Err(EvalError::hand_size("2 to 7", n))
            );
        }

        let dup = cards(&["AS", "as"]);
        assert_eq!(best_partial_hand(&dup), Err(EvalError::DuplicateCard(dup[0])));
    }
}

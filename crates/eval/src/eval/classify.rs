// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand classification.
use showdown_cards::{Card, Rank};

use super::{HandCategory, HandEvaluation};
use crate::error::{EvalError, Result, check_distinct};

/// Classifies a 5 cards hand.
///
/// Returns an error if the hand doesn't have exactly 5 distinct cards.
///
/// ```
/// # use showdown_eval::*;
/// let cards = parse_cards(&["KH", "KD", "2C", "KS", "2H"]).unwrap();
/// let eval = classify(&cards).unwrap();
/// assert_eq!(eval.category, HandCategory::FullHouse);
/// assert_eq!(eval.tie_break, [13, 2]);
/// assert_eq!(eval.description, "Full House, Kings over Twos");
/// ```
pub fn classify(cards: &[Card]) -> Result<HandEvaluation> {
    if cards.len() != HandEvaluation::HAND_SIZE {
        return Err(EvalError::hand_size("5", cards.len()));
    }

    check_distinct(cards)?;
    Ok(classify_unchecked(cards))
}

/// Classifies 5 cards that are known to be distinct.
fn classify_unchecked(cards: &[Card]) -> HandEvaluation {
    let mut eval = strength(cards);
    describe_hand(&mut eval);
    eval
}

/// Sets the evaluation description from its category and tie break.
pub(super) fn describe_hand(eval: &mut HandEvaluation) {
    eval.description = describe(eval.category, &eval.tie_break);
}

/// Classifies 5 distinct cards without a description, this is what the best
/// hand search runs for each subset.
pub(super) fn strength(cards: &[Card]) -> HandEvaluation {
    debug_assert_eq!(cards.len(), HandEvaluation::HAND_SIZE);

    let best_hand = sorted_by_rank(cards);
    let ranks = best_hand.iter().map(|c| c.rank().high()).collect::<Vec<_>>();
    let groups = rank_groups(&ranks);

    let is_flush = best_hand.iter().all(|c| c.suit() == best_hand[0].suit());
    let straight = straight_high(&ranks);

    let (category, tie_break) = match (is_flush, straight) {
        (true, Some(14)) => (HandCategory::RoyalFlush, vec![14]),
        (true, Some(high)) => (HandCategory::StraightFlush, vec![high]),
        _ if groups[0].count == 4 => (HandCategory::FourOfAKind, group_ranks(&groups)),
        _ if groups[0].count == 3 && groups[1].count == 2 => {
            (HandCategory::FullHouse, group_ranks(&groups))
        }
        (true, None) => (HandCategory::Flush, ranks),
        (false, Some(high)) => (HandCategory::Straight, vec![high]),
        _ => (grouping_category(&groups), group_ranks(&groups)),
    };

    HandEvaluation {
        category,
        best_hand,
        tie_break,
        description: String::new(),
    }
}

/// Classifies 3 or 4 cards using only the rank groupings.
///
/// There is no straight or flush detection, this is used for showing the
/// strength of an incomplete hand.
pub(super) fn classify_ranks(cards: &[Card]) -> HandEvaluation {
    let best_hand = sorted_by_rank(cards);
    let ranks = best_hand.iter().map(|c| c.rank().high()).collect::<Vec<_>>();
    let groups = rank_groups(&ranks);

    let category = match groups[0].count {
        4 => HandCategory::FourOfAKind,
        _ => grouping_category(&groups),
    };

    let tie_break = group_ranks(&groups);
    HandEvaluation {
        category,
        description: describe(category, &tie_break),
        best_hand,
        tie_break,
    }
}

/// Returns the straight representative rank for 5 ranks sorted from high to
/// low, this is the top rank or 5 for the A-2-3-4-5 straight (the wheel).
fn straight_high(ranks: &[u8]) -> Option<u8> {
    const WHEEL: [u8; 5] = [14, 5, 4, 3, 2];

    if *ranks == WHEEL {
        Some(5)
    } else if ranks.windows(2).all(|w| w[0] == w[1] + 1) {
        Some(ranks[0])
    } else {
        None
    }
}

/// Cards with the same rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RankGroup {
    count: u8,
    rank: u8,
}

/// Groups ranks by count and sorts the groups by count and then by rank,
/// the kickers follow the larger groups.
fn rank_groups(ranks: &[u8]) -> Vec<RankGroup> {
    let mut counts = [0u8; 15];
    for &r in ranks {
        counts[r as usize] += 1;
    }

    let mut groups = (2..=14u8)
        .rev()
        .filter(|&r| counts[r as usize] > 0)
        .map(|rank| RankGroup {
            count: counts[rank as usize],
            rank,
        })
        .collect::<Vec<_>>();

    // Stable sort keeps the higher rank first for groups of equal size.
    groups.sort_by(|a, b| b.count.cmp(&a.count));

    // Simplify indexing for hands with no second group.
    groups.push(RankGroup { count: 0, rank: 0 });
    groups
}

fn group_ranks(groups: &[RankGroup]) -> Vec<u8> {
    groups
        .iter()
        .filter(|g| g.count > 0)
        .map(|g| g.rank)
        .collect()
}

/// Category for hands that are not straights, flushes, full houses or quads.
fn grouping_category(groups: &[RankGroup]) -> HandCategory {
    match (groups[0].count, groups[1].count) {
        (c, _) if c >= 3 => HandCategory::ThreeOfAKind,
        (2, 2) => HandCategory::TwoPair,
        (2, _) => HandCategory::Pair,
        _ => HandCategory::HighCard,
    }
}

/// Sorts cards by rank from high to low, suits break ties so that the order
/// doesn't depend on the input order.
pub(super) fn sorted_by_rank(cards: &[Card]) -> Vec<Card> {
    let mut sorted = cards.to_vec();
    sorted.sort_by(|a, b| {
        b.rank()
            .high()
            .cmp(&a.rank().high())
            .then(b.suit().cmp(&a.suit()))
    });
    sorted
}

fn name(rank: u8) -> &'static str {
    Rank::from_high(rank).map_or("?", Rank::name)
}

fn plural(rank: u8) -> &'static str {
    Rank::from_high(rank).map_or("?", Rank::plural)
}

/// Returns a hand description from its category and tie break values.
fn describe(category: HandCategory, tie_break: &[u8]) -> String {
    let tb = |i: usize| tie_break.get(i).copied().unwrap_or(0);

    match category {
        HandCategory::RoyalFlush => "Royal Flush".to_string(),
        HandCategory::StraightFlush => format!("Straight Flush, {} high", name(tb(0))),
        HandCategory::FourOfAKind => format!("Four of a Kind, {}", plural(tb(0))),
        HandCategory::FullHouse => {
            format!("Full House, {} over {}", plural(tb(0)), plural(tb(1)))
        }
        HandCategory::Flush => format!("Flush, {} high", name(tb(0))),
        HandCategory::Straight => format!("Straight, {} high", name(tb(0))),
        HandCategory::ThreeOfAKind => format!("Three of a Kind, {}", plural(tb(0))),
        HandCategory::TwoPair => format!("Two Pair, {} and {}", plural(tb(0)), plural(tb(1))),
        HandCategory::Pair => format!("Pair of {}", plural(tb(0))),
        HandCategory::HighCard => format!("High Card, {}", name(tb(0))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use showdown_cards::{Deck, parse_cards};

    fn eval(cards: &[&str]) -> HandEvaluation {
        classify(&parse_cards(cards).unwrap()).unwrap()
    }

    fn check(cards: &[&str], category: HandCategory, tie_break: &[u8], description: &str) {
        let e = eval(cards);
        assert_eq!(e.category, category, "{cards:?}");
        assert_eq!(e.tie_break, tie_break, "{cards:?}");
        assert_eq!(e.description, description, "{cards:?}");
        assert_eq!(e.best_hand.len(), 5);
        assert!(e.is_complete());
    }

    #[test]
    fn categories() {
        use HandCategory::*;

        check(&["TH", "JH", "QH", "KH", "AH"], RoyalFlush, &[14], "Royal Flush");
        check(
            &["9C", "KC", "QC", "JC", "TC"],
            StraightFlush,
            &[13],
            "Straight Flush, King high",
        );
        check(
            &["AS", "AH", "AD", "AC", "5H"],
            FourOfAKind,
            &[14, 5],
            "Four of a Kind, Aces",
        );
        check(
            &["3S", "3H", "9D", "9C", "9H"],
            FullHouse,
            &[9, 3],
            "Full House, Nines over Threes",
        );
        check(
            &["2D", "9D", "JD", "4D", "AD"],
            Flush,
            &[14, 11, 9, 4, 2],
            "Flush, Ace high",
        );
        check(&["8S", "9H", "TD", "JC", "QH"], Straight, &[12], "Straight, Queen high");
        check(
            &["7C", "7D", "7H", "KS", "2C"],
            ThreeOfAKind,
            &[7, 13, 2],
            "Three of a Kind, Sevens",
        );
        check(
            &["4C", "JD", "4H", "JS", "AC"],
            TwoPair,
            &[11, 4, 14],
            "Two Pair, Jacks and Fours",
        );
        check(&["9C", "6D", "9H", "KS", "2C"], Pair, &[9, 13, 6, 2], "Pair of Nines");
        check(
            &["AC", "QD", "9H", "7S", "2C"],
            HighCard,
            &[14, 12, 9, 7, 2],
            "High Card, Ace",
        );
    }

    #[test]
    fn wheel() {
        let e = eval(&["AH", "2C", "3D", "4S", "5H"]);
        assert_eq!(e.category, HandCategory::Straight);
        assert_eq!(e.tie_break, [5]);
        assert_eq!(e.description, "Straight, Five high");

        // The ace stays first in the sorted cards.
        assert_eq!(e.best_hand[0].rank(), Rank::Ace);

        let e = eval(&["AD", "2D", "3D", "4D", "5D"]);
        assert_eq!(e.category, HandCategory::StraightFlush);
        assert_eq!(e.tie_break, [5]);

        // Six high straight beats the wheel.
        let six = eval(&["6H", "2C", "3D", "4S", "5H"]);
        assert!(six.strength_cmp(&e).is_lt());
        assert!(six.strength_cmp(&eval(&["AH", "2C", "3D", "4S", "5H"])).is_gt());
    }

    #[test]
    fn no_wrap_around_straight() {
        let e = eval(&["QH", "KC", "AD", "2S", "3H"]);
        assert_eq!(e.category, HandCategory::HighCard);
        assert_eq!(e.tie_break, [14, 13, 12, 3, 2]);
    }

    #[test]
    fn straight_detection() {
        assert_eq!(straight_high(&[14, 13, 12, 11, 10]), Some(14));
        assert_eq!(straight_high(&[14, 5, 4, 3, 2]), Some(5));
        assert_eq!(straight_high(&[6, 5, 4, 3, 2]), Some(6));
        assert_eq!(straight_high(&[14, 13, 12, 11, 9]), None);
        assert_eq!(straight_high(&[14, 14, 13, 12, 11]), None);
    }

    #[test]
    fn sorted_best_hand() {
        let e = eval(&["2C", "KD", "2H", "KS", "7C"]);
        let best = e.best_hand.iter().map(|c| c.to_string()).collect::<Vec<_>>();
        assert_eq!(best, ["KS", "KD", "7C", "2H", "2C"]);
    }

    #[test]
    fn deterministic_for_any_order() {
        let cards = parse_cards(&["4C", "JD", "4H", "JS", "AC"]).unwrap();
        let expected = classify(&cards).unwrap();

        let mut reversed = cards.clone();
        reversed.reverse();
        assert_eq!(classify(&reversed).unwrap(), expected);

        let mut rotated = cards.clone();
        rotated.rotate_left(2);
        assert_eq!(classify(&rotated).unwrap(), expected);
    }

    #[test]
    fn invalid_input() {
        let cards = parse_cards(&["AS", "KS", "QS", "JS"]).unwrap();
        assert_eq!(classify(&cards), Err(EvalError::hand_size("5", 4)));

        let cards = parse_cards(&["AS", "KS", "QS", "JS", "TS", "9S"]).unwrap();
        assert_eq!(classify(&cards), Err(EvalError::hand_size("5", 6)));

        let cards = parse_cards(&["AS", "KS", "QS", "JS", "AS"]).unwrap();
        assert_eq!(classify(&cards), Err(EvalError::DuplicateCard(cards[0])));
    }

    #[test]
    fn partial_ranks() {
        let cards = parse_cards(&["7C", "7D", "7H", "KS"]).unwrap();
        let e = classify_ranks(&cards);
        assert_eq!(e.category, HandCategory::ThreeOfAKind);
        assert_eq!(e.tie_break, [7, 13]);
        assert!(!e.is_complete());

        let cards = parse_cards(&["7C", "KD", "7H", "KS"]).unwrap();
        let e = classify_ranks(&cards);
        assert_eq!(e.category, HandCategory::TwoPair);
        assert_eq!(e.tie_break, [13, 7]);

        let cards = parse_cards(&["QC", "QD", "QH", "QS"]).unwrap();
        assert_eq!(classify_ranks(&cards).category, HandCategory::FourOfAKind);

        // No straights or flushes.
        let cards = parse_cards(&["2H", "3H", "4H", "5H"]).unwrap();
        let e = classify_ranks(&cards);
        assert_eq!(e.category, HandCategory::HighCard);
        assert_eq!(e.description, "High Card, Five");
    }

    // Goes through all 2.6M 5-cards hands.
    #[test]
    #[ignore]
    fn all_five_cards_hands() {
        let mut counts = [0usize; 10];
        let deck = Deck::default().into_iter().collect::<Vec<_>>();
        crate::Combinations::for_each_subset(&deck, 5, |hand| {
            counts[strength(hand).category as usize] += 1;
        });

        assert_eq!(
            counts,
            [1_302_540, 1_098_240, 123_552, 54_912, 10_200, 5_108, 3_744, 624, 36, 4]
        );
    }
}

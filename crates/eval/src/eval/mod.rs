// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! The evaluator classifies 5 cards hands into a [HandCategory] with a tie
//! break vector of rank values, the category and the tie break vector give a
//! total order over hands (see [compare]).
//!
//! It provides a [classify] function for 5 cards hands, [best_hand] that finds
//! the best 5 cards out of 7 cards, and [best_partial_hand] for showing the
//! strength of a hand while the cards are being dealt.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use showdown_cards::Card;

mod best;
mod classify;

pub(crate) use best::best_of_subsets;
pub use best::{best_hand, best_partial_hand};
pub use classify::classify;

/// The category of a poker hand from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    /// No pairs.
    HighCard = 0,
    /// One pair.
    Pair,
    /// Two pairs.
    TwoPair,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Five consecutive ranks.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards of the same rank.
    FourOfAKind,
    /// A straight of the same suit.
    StraightFlush,
    /// Ace high straight flush.
    RoyalFlush,
}

impl HandCategory {
    /// Returns all categories from the weakest to the strongest.
    pub fn categories() -> impl DoubleEndedIterator<Item = HandCategory> {
        use HandCategory::*;
        [
            HighCard,
            Pair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
            RoyalFlush,
        ]
        .into_iter()
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandCategory::HighCard => "High Card",
            HandCategory::Pair => "Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        };

        write!(f, "{name}")
    }
}

/// An evaluated hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandEvaluation {
    /// The hand category.
    pub category: HandCategory,
    /// The cards that make the hand sorted by rank from high to low.
    pub best_hand: Vec<Card>,
    /// Rank values used to compare hands with the same category, the most
    /// significant first.
    pub tie_break: Vec<u8>,
    /// The hand description, i.e. "Full House, Kings over Twos".
    pub description: String,
}

impl HandEvaluation {
    /// The number of cards in a complete hand.
    pub const HAND_SIZE: usize = 5;

    /// Checks if this is a 5 cards evaluation.
    ///
    /// Partial evaluations are created for showing the strength of less than
    /// five cards and must not be used to decide a showdown.
    pub fn is_complete(&self) -> bool {
        self.best_hand.len() == Self::HAND_SIZE
    }

    /// Compares the strength of this hand with another hand.
    pub fn strength_cmp(&self, other: &HandEvaluation) -> Ordering {
        compare(self, other)
    }
}

impl fmt::Display for HandEvaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description)
    }
}

/// Compares the strength of two hands.
///
/// A higher category always wins, hands with the same category compare their
/// tie break vectors element by element, a missing element counts as 0.
pub fn compare(a: &HandEvaluation, b: &HandEvaluation) -> Ordering {
    a.category.cmp(&b.category).then_with(|| {
        let len = a.tie_break.len().max(b.tie_break.len());
        (0..len)
            .map(|i| {
                let va = a.tie_break.get(i).copied().unwrap_or(0);
                let vb = b.tie_break.get(i).copied().unwrap_or(0);
                va.cmp(&vb)
            })
            .find(|o| o.is_ne())
            .unwrap_or(Ordering::Equal)
    })
}

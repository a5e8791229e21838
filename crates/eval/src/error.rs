// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluation errors.
use showdown_cards::{Card, ParseCardError};

/// Evaluation result type.
pub type Result<T> = std::result::Result<T, EvalError>;

/// Errors returned by the evaluator, showdown and equity functions.
///
/// All errors are caused by invalid input and are returned before any
/// evaluation work is done.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvalError {
    /// Wrong number of cards for the operation.
    #[error("invalid hand size: expected {expected} cards, got {got}")]
    InvalidHandSize {
        /// The expected number of cards.
        expected: &'static str,
        /// The number of cards given.
        got: usize,
    },
    /// A card mnemonic could not be parsed.
    #[error(transparent)]
    InvalidCardFormat(#[from] ParseCardError),
    /// The same card was given more than once.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
    /// A showdown with no players.
    #[error("showdown with no hands")]
    EmptyShowdown,
    /// Less than two hands for an equity simulation.
    #[error("too few hands {0}, at least 2 hands required")]
    TooFewHands(usize),
    /// More than ten hands for an equity simulation.
    #[error("too many hands {0}, at most 10 hands allowed")]
    TooManyHands(usize),
    /// More than five community cards.
    #[error("too many community cards {0}, at most 5 allowed")]
    TooManyCommunityCards(usize),
    /// An equity simulation with zero trials.
    #[error("the number of trials must be positive")]
    ZeroTrials,
}

impl EvalError {
    pub(crate) fn hand_size(expected: &'static str, got: usize) -> Self {
        EvalError::InvalidHandSize { expected, got }
    }
}

/// Checks that no card appears twice in the given card sets.
pub(crate) fn check_distinct<'a, I>(cards: I) -> Result<()>
where
    I: IntoIterator<Item = &'a Card>,
{
    let mut seen = ahash::HashSet::default();
    for card in cards {
        if !seen.insert(*card) {
            return Err(EvalError::DuplicateCard(*card));
        }
    }

    Ok(())
}

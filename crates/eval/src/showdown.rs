// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown winners and pot split.
use log::trace;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use showdown_cards::Card;

use crate::{
    error::{EvalError, Result},
    eval::{HandEvaluation, best_hand, compare},
};

/// Returns the indices of the strongest hands.
///
/// All the hands tied for the best strength are returned in ascending index
/// order, an empty slice returns no winners.
pub fn find_winners(evaluations: &[HandEvaluation]) -> Vec<usize> {
    let mut winners: Vec<usize> = Vec::with_capacity(evaluations.len());

    for (idx, eval) in evaluations.iter().enumerate() {
        match winners.first() {
            None => winners.push(idx),
            Some(&best) => match compare(eval, &evaluations[best]) {
                Ordering::Greater => {
                    winners.clear();
                    winners.push(idx);
                }
                Ordering::Equal => winners.push(idx),
                Ordering::Less => {}
            },
        }
    }

    winners
}

/// The result of a showdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Showdown {
    /// The indices of the winning hands.
    pub winners: Vec<usize>,
    /// The evaluation of each player hand.
    pub evaluations: Vec<HandEvaluation>,
    /// The pot fraction for each winner.
    pub pot_shares: Vec<(usize, f64)>,
}

impl Showdown {
    /// Splits an amount of chips among the winners.
    ///
    /// Each winner gets an equal share, the odd chips go one each to the
    /// winners with the lowest index.
    pub fn split_pot(&self, amount: u64) -> Vec<(usize, u64)> {
        if self.winners.is_empty() {
            return Vec::new();
        }

        let n = self.winners.len() as u64;
        let (share, mut remainder) = (amount / n, amount % n);

        self.winners
            .iter()
            .map(|&idx| {
                let odd = u64::from(remainder > 0);
                remainder -= odd;
                (idx, share + odd)
            })
            .collect()
    }
}

/// Resolves a showdown given each player's 7 cards.
///
/// Returns an error if there are no hands, if a hand doesn't have 7 cards, or
/// if a hand has duplicate cards.
///
/// ```
/// # use showdown_eval::*;
/// let board = parse_cards(&["AS", "9D", "7H", "2C", "3D"]).unwrap();
/// let p1 = [parse_cards(&["JH", "JC"]).unwrap(), board.clone()].concat();
/// let p2 = [parse_cards(&["QH", "4C"]).unwrap(), board.clone()].concat();
///
/// let showdown = resolve_showdown(&[p1, p2]).unwrap();
/// assert_eq!(showdown.winners, [0]);
/// assert_eq!(showdown.pot_shares, [(0, 1.0)]);
/// ```
pub fn resolve_showdown<H: AsRef<[Card]>>(player_hands: &[H]) -> Result<Showdown> {
    if player_hands.is_empty() {
        return Err(EvalError::EmptyShowdown);
    }

    let evaluations = player_hands
        .iter()
        .map(|hand| best_hand(hand.as_ref()))
        .collect::<Result<Vec<_>>>()?;

    let winners = find_winners(&evaluations);
    trace!("Showdown winners {winners:?}");

    let share = 1.0 / winners.len() as f64;
    let pot_shares = winners.iter().map(|&idx| (idx, share)).collect();

    Ok(Showdown {
        winners,
        evaluations,
        pot_shares,
    })
}

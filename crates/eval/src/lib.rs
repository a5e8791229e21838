// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown poker hand evaluator and equity simulator.
//!
//! The evaluator finds the best 5 cards hand out of 7 cards, ranks hands with
//! their tie breaks, resolves showdowns with split pots, and estimates the
//! players winning chances with a Monte Carlo simulation. All functions are
//! pure functions of their input, the only state is the random generator used
//! by the simulator that can be seeded for reproducible results.
//!
//! To find the best hand and compare hands:
//!
//! ```
//! # use showdown_eval::*;
//! let p1 = parse_cards(&["AH", "2C", "3D", "4S", "5H", "KC", "7D"]).unwrap();
//! let p2 = parse_cards(&["AS", "AD", "3C", "4H", "9H", "KD", "7S"]).unwrap();
//!
//! let v1 = best_hand(&p1).unwrap();
//! let v2 = best_hand(&p2).unwrap();
//! assert_eq!(v1.category, HandCategory::Straight);
//! assert_eq!(v1.tie_break, [5]);
//! assert!(v1.strength_cmp(&v2).is_gt());
//! assert_eq!(find_winners(&[v1, v2]), [0]);
//! ```
//!
//! To estimate equities, with the **`parallel`** feature the trials can be run
//! on multiple threads with [SimConfig::with_tasks]:
//!
//! ```
//! # use showdown_eval::*;
//! let hands = [
//!     parse_cards(&["AS", "AH"]).unwrap(),
//!     parse_cards(&["KS", "KH"]).unwrap(),
//!     parse_cards(&["7C", "8C"]).unwrap(),
//! ];
//! let flop = parse_cards(&["2C", "9C", "KD"]).unwrap();
//!
//! let config = SimConfig::default().with_trials(2_000).with_seed(1);
//! let equity = Simulator::new(config).multi_player_equity(&hands, &flop).unwrap();
//! assert_eq!(equity.win_percentages.len(), 3);
//! assert!(equity.win_percentages[1] > equity.win_percentages[0]);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod combinations;
pub mod equity;
pub mod error;
pub mod eval;
pub mod showdown;

pub use combinations::{Combinations, nck};
pub use equity::{
    DEFAULT_TRIALS, Equity, HeadsUpEquity, SimConfig, Simulator, multi_player_equity,
    win_percentages,
};
pub use error::{EvalError, Result};
pub use eval::{
    HandCategory, HandEvaluation, best_hand, best_partial_hand, classify, compare,
};
pub use showdown::{Showdown, find_winners, resolve_showdown};

// Reexport cards types.
pub use showdown_cards::{
    Card, Deck, ParseCardError, Rank, Suit, parse_cards, parse_cards_str,
};

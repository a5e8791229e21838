// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown poker cards types.
//!
//! This crate define types to create cards, either from a rank and a suit:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! assert_eq!(ah.to_string(), "AH");
//! ```
//!
//! or from their two characters mnemonic, rank first and suit second, parsing
//! is case insensitive:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let td: Card = "td".parse().unwrap();
//! assert_eq!(td, Card::new(Rank::Ten, Suit::Diamonds));
//! assert_eq!(td.to_string(), "TD");
//! ```
//!
//! and a [Deck] type for shuffling and sampling cards in the deck, to sample
//! the cards needed to complete a board:
//!
//! ```
//! # use showdown_cards::{Card, Deck};
//! let mut deck = Deck::default();
//! deck.remove("AS".parse().unwrap());
//! deck.remove("AH".parse().unwrap());
//!
//! let board = deck.sample(&mut rand::rng(), 5).to_vec();
//! assert_eq!(board.len(), 5);
//! assert_eq!(deck.count(), 50);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, ParseCardError, Rank, Suit, parse_cards, parse_cards_str};

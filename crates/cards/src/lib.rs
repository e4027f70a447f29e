// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Holdem cards types.
//!
//! This crate defines the types to create cards:
//!
//! ```
//! # use holdem_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let td: Card = "TD".parse().unwrap();
//! assert_eq!(ah.rank().value(), 14);
//! assert_eq!(td.to_string(), "TD");
//! ```
//!
//! and a [Deck] type that is shuffled once and then dealt from without
//! replacement:
//!
//! ```
//! # use holdem_cards::Deck;
//! let mut deck = Deck::new_shuffled(42);
//! let c1 = deck.draw().unwrap();
//! let c2 = deck.draw().unwrap();
//! assert_ne!(c1, c2);
//! assert_eq!(deck.remaining(), Deck::SIZE - 2);
//! ```
//!
//! The same seed always produces the same deck order, so hands can be replayed
//! in tests.
//!
//! To iterate all the 5 cards subsets of a hand use [for_each_combination]:
//!
//! ```
//! # use holdem_cards::{Deck, for_each_combination};
//! let cards = Deck::default().into_iter().take(7).collect::<Vec<_>>();
//! let mut count = 0;
//! for_each_combination(&cards, 5, |hand| {
//!     assert_eq!(hand.len(), 5);
//!     count += 1;
//! });
//! assert_eq!(count, 21);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, DeckError, ParseCardError, Rank, Suit, for_each_combination};

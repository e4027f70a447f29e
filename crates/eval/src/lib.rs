// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Holdem poker hand evaluator.
//!
//! Evaluates 5, 6 and 7 cards hands by classifying every 5 cards subset and
//! keeping the strongest one. The result is a [HandRank], a hand category with
//! a kickers sequence that is totally ordered so that two hands can be compared
//! with the usual operators:
//!
//! ```
//! # use holdem_eval::*;
//! let cards = ["AH", "KH", "QH", "JH", "TH", "2C", "3D"]
//!     .iter()
//!     .map(|c| c.parse::<Card>().unwrap())
//!     .collect::<Vec<_>>();
//!
//! let royal = evaluate(&cards).unwrap();
//! assert_eq!(royal.category(), HandCategory::RoyalFlush);
//!
//! let straight = ["KD", "QH", "JH", "TH", "9C"]
//!     .iter()
//!     .map(|c| c.parse::<Card>().unwrap())
//!     .collect::<Vec<_>>();
//!
//! let value = HandValue::eval(&straight).unwrap();
//! assert_eq!(value.category(), HandCategory::Straight);
//! assert_eq!(value.rank().tiebreak(), &[13, 12, 11, 10, 9]);
//! assert!(royal > value.rank());
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{EvalError, HandCategory, HandRank, HandValue, evaluate};

// Reexport cards types.
pub use holdem_cards::{Card, Deck, Rank, Suit};

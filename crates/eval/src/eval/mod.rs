// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! A hand of 5 to 7 distinct cards is evaluated by enumerating all its 5 cards
//! subsets (21 for a 7 cards hand), classifying each subset and returning the
//! best one. Enumerating subsets is needed because the best hand is not always
//! made of the highest ranked cards, flushes and straights depend on the shape
//! of the hand.
//!
//! [evaluate] returns only the [HandRank], [HandValue::eval] also returns the
//! five cards that make the best hand, useful to show a winning hand.
use thiserror::Error;

mod rank;
pub use rank::{HandCategory, HandRank};

mod value;
pub use value::{HandValue, evaluate};

/// Evaluator errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The hand has fewer than 5 cards, more than 7 cards or duplicate cards.
    #[error("invalid hand: {0}")]
    InvalidHand(String),
}

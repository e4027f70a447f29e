// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand ranking types.
use serde::{Deserialize, Serialize};
use std::fmt;

/// The category of a poker hand, higher values win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    /// High card.
    HighCard = 1,
    /// One pair.
    OnePair,
    /// Two pairs.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
    /// Ace high straight flush.
    RoyalFlush,
}

impl HandCategory {
    /// Returns all the categories from the weakest to the strongest.
    pub fn categories() -> impl DoubleEndedIterator<Item = HandCategory> {
        use HandCategory::*;
        [
            HighCard,
            OnePair,
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

    /// The category ordinal, 1 for a high card up to 10 for a royal flush.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// The number of tiebreak values for a hand of this category.
    pub fn tiebreak_len(&self) -> usize {
        match self {
            HandCategory::FourOfAKind | HandCategory::FullHouse => 2,
            HandCategory::ThreeOfAKind | HandCategory::TwoPair => 3,
            HandCategory::OnePair => 4,
            _ => 5,
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "One Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        };

        write!(f, "{label}")
    }
}

/// The strength of a 5 cards hand.
///
/// Ranks compare by category first and then by the tiebreak values element by
/// element. Two ranks are equal only if category and tiebreak are the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HandRank {
    category: HandCategory,
    // Unused trailing values are zero so that the derived order is the
    // lexicographic order of the used values.
    tiebreak: [u8; 5],
    len: u8,
}

impl HandRank {
    /// Creates a hand rank, only the first 5 tiebreak values are used.
    pub fn new(category: HandCategory, tiebreak: &[u8]) -> Self {
        debug_assert!(tiebreak.len() <= 5, "at most 5 tiebreak values");
        let len = tiebreak.len().min(5);

        let mut values = [0; 5];
        values[..len].copy_from_slice(&tiebreak[..len]);

        Self {
            category,
            tiebreak: values,
            len: len as u8,
        }
    }

    /// The hand category.
    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// The ranks used to break ties between hands of the same category.
    pub fn tiebreak(&self) -> &[u8] {
        &self.tiebreak[..self.len as usize]
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.category, self.tiebreak())
    }
}

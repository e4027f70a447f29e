// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand evaluation.
use ahash::AHashSet;
use std::cmp::Ordering;

use holdem_cards::{Card, for_each_combination};

use super::{EvalError, HandCategory, HandRank};

/// Evaluates the best 5 cards hand out of 5 to 7 cards.
pub fn evaluate(cards: &[Card]) -> Result<HandRank, EvalError> {
    HandValue::eval(cards).map(|v| v.rank())
}

/// A hand rank with the 5 cards that make the hand.
///
/// Values compare and are equal by rank only, the cards are not considered.
#[derive(Debug, Clone, Copy)]
pub struct HandValue {
    rank: HandRank,
    hand: [Card; 5],
}

impl HandValue {
    /// Evaluates the best 5 cards hand out of 5 to 7 distinct cards.
    pub fn eval(cards: &[Card]) -> Result<HandValue, EvalError> {
        if !(5..=7).contains(&cards.len()) {
            return Err(EvalError::InvalidHand(format!(
                "expected 5 to 7 cards, got {}",
                cards.len()
            )));
        }

        let mut seen = AHashSet::with_capacity(cards.len());
        if let Some(card) = cards.iter().find(|&&c| !seen.insert(c)) {
            return Err(EvalError::InvalidHand(format!("duplicate card {card}")));
        }

        let mut best: Option<HandValue> = None;
        for_each_combination(cards, 5, |h| {
            let hand = [h[0], h[1], h[2], h[3], h[4]];
            let rank = classify(&hand);
            if best.is_none_or(|b| rank > b.rank) {
                best = Some(HandValue { rank, hand });
            }
        });

        let mut value = best.ok_or_else(|| EvalError::InvalidHand("empty hand".to_string()))?;

        // Sort by rank for the UI.
        value.hand.sort_by(|c1, c2| c2.rank().cmp(&c1.rank()));
        Ok(value)
    }

    /// The hand rank.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The hand category.
    pub fn category(&self) -> HandCategory {
        self.rank.category()
    }

    /// The 5 cards that make this hand, highest rank first.
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }
}

impl PartialEq for HandValue {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank
    }
}

impl Eq for HandValue {}

impl PartialOrd for HandValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank.cmp(&other.rank)
    }
}

/// Classifies a 5 cards hand.
fn classify(hand: &[Card; 5]) -> HandRank {
    let mut ranks = hand.map(|c| c.rank().value());
    ranks.sort_unstable_by(|r1, r2| r2.cmp(r1));

    let is_flush = hand.iter().all(|c| c.suit() == hand[0].suit());
    let is_wheel = ranks == [14, 5, 4, 3, 2];
    let is_distinct = ranks.windows(2).all(|w| w[0] != w[1]);
    let is_straight = is_wheel || (is_distinct && ranks[0] - ranks[4] == 4);

    // The ace plays low in a wheel.
    if is_wheel {
        ranks = [5, 4, 3, 2, 1];
    }

    if is_straight && is_flush {
        let category = if ranks[0] == 14 {
            HandCategory::RoyalFlush
        } else {
            HandCategory::StraightFlush
        };
        return HandRank::new(category, &ranks);
    }

    // Group equal ranks as (count, rank) with the largest groups first and
    // ranks descending within groups of the same size, this is the tiebreak
    // order for all the grouped categories.
    let mut groups = Vec::<(u8, u8)>::with_capacity(5);
    for rank in ranks {
        match groups.last_mut() {
            Some((count, r)) if *r == rank => *count += 1,
            _ => groups.push((1, rank)),
        }
    }
    groups.sort_by(|g1, g2| g2.cmp(g1));

    let tiebreak = groups.iter().map(|(_, r)| *r).collect::<Vec<_>>();
    let counts = groups.iter().map(|(c, _)| *c).collect::<Vec<_>>();

    let category = match counts.as_slice() {
        [4, 1] => HandCategory::FourOfAKind,
        [3, 2] => HandCategory::FullHouse,
        _ if is_flush => return HandRank::new(HandCategory::Flush, &ranks),
        _ if is_straight => return HandRank::new(HandCategory::Straight, &ranks),
        [3, 1, 1] => HandCategory::ThreeOfAKind,
        [2, 2, 1] => HandCategory::TwoPair,
        [2, 1, 1, 1] => HandCategory::OnePair,
        _ => HandCategory::HighCard,
    };

    HandRank::new(category, &tiebreak)
}

// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Types used in a Poker hand.
use serde::{Deserialize, Serialize};
use std::{fmt, iter, ops};

pub use holdem_cards::{Card, Deck, DeckError, Rank, Suit};
pub use holdem_eval::{EvalError, HandCategory, HandRank, HandValue, evaluate};

/// Chips amount.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Chips(u32);

impl Chips {
    /// The zero chips.
    pub const ZERO: Chips = Chips(0);

    /// Creates chips with the given value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// The integer amount.
    pub fn amount(&self) -> u32 {
        self.0
    }

    /// Adds `rhs` returning `None` on overflow.
    pub fn checked_add(self, rhs: Chips) -> Option<Chips> {
        self.0.checked_add(rhs.0).map(Chips)
    }
}

impl From<u32> for Chips {
    fn from(val: u32) -> Self {
        Chips(val)
    }
}

impl From<Chips> for u32 {
    fn from(val: Chips) -> Self {
        val.0
    }
}

impl ops::Add for Chips {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Chips(self.0 + rhs.0)
    }
}

impl ops::AddAssign for Chips {
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl ops::Sub for Chips {
    type Output = Self;

    /// Saturates at zero.
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl ops::SubAssign for Chips {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_sub(rhs.0);
    }
}

impl ops::Mul<u32> for Chips {
    type Output = Self;

    fn mul(self, rhs: u32) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl ops::Div<u32> for Chips {
    type Output = Self;

    fn div(self, rhs: u32) -> Self::Output {
        Self(self.0 / rhs)
    }
}

impl ops::Rem<u32> for Chips {
    type Output = Self;

    fn rem(self, rhs: u32) -> Self::Output {
        Self(self.0 % rhs)
    }
}

impl iter::Sum for Chips {
    fn sum<I: Iterator<Item = Chips>>(iter: I) -> Self {
        iter.fold(Chips::ZERO, |acc, c| acc + c)
    }
}

impl fmt::Display for Chips {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let amount = self.0;
        if amount >= 1_000_000 {
            write!(
                f,
                "{},{:03},{:03}",
                amount / 1_000_000,
                amount % 1_000_000 / 1_000,
                amount % 1000
            )
        } else if amount >= 1_000 {
            write!(f, "{},{:03}", amount / 1000, amount % 1000)
        } else {
            write!(f, "{}", amount)
        }
    }
}

/// The player hole cards.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerCards {
    /// The player has no cards.
    #[default]
    None,
    /// The player cards.
    Cards(Card, Card),
}

impl PlayerCards {
    /// Returns the hole cards followed by the board cards.
    pub fn with_board(&self, board: &[Card]) -> Vec<Card> {
        let mut cards = Vec::with_capacity(board.len() + 2);
        if let PlayerCards::Cards(c1, c2) = self {
            cards.extend([*c1, *c2]);
        }

        cards.extend_from_slice(board);
        cards
    }
}

/// A betting street.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Street {
    /// Betting after the hole cards are dealt.
    Preflop,
    /// Betting after the first three board cards.
    Flop,
    /// Betting after the fourth board card.
    Turn,
    /// Betting after the last board card.
    River,
}

impl Street {
    /// The street that follows this one, `None` after the river.
    pub fn next(&self) -> Option<Street> {
        match self {
            Street::Preflop => Some(Street::Flop),
            Street::Flop => Some(Street::Turn),
            Street::Turn => Some(Street::River),
            Street::River => None,
        }
    }

    /// Number of board cards dealt at the start of this street.
    pub fn board_cards(&self) -> usize {
        match self {
            Street::Preflop => 0,
            Street::Flop => 3,
            Street::Turn | Street::River => 1,
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Street::Preflop => "preflop",
            Street::Flop => "flop",
            Street::Turn => "turn",
            Street::River => "river",
        };

        write!(f, "{label}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chips_formatting() {
        assert_eq!(Chips(123).to_string(), "123");
        assert_eq!(Chips(1_000).to_string(), "1,000");
        assert_eq!(Chips(12_345).to_string(), "12,345");
        assert_eq!(Chips(1_234_567).to_string(), "1,234,567");
    }

    #[test]
    fn chips_arithmetic() {
        let c = Chips::new(100);
        assert_eq!(c - Chips::new(150), Chips::ZERO);
        assert_eq!(c.checked_add(Chips::new(40)), Some(Chips::new(140)));
        assert_eq!(Chips::new(u32::MAX).checked_add(Chips::new(1)), None);

        let mut total = Chips::new(u32::MAX);
        total += c;
        assert_eq!(total, Chips::new(u32::MAX));
        assert_eq!(c / 3, Chips::new(33));
        assert_eq!(c % 3, Chips::new(1));
        assert_eq!([c, c, c].into_iter().sum::<Chips>(), Chips::new(300));
    }

    #[test]
    fn streets() {
        let streets = std::iter::successors(Some(Street::Preflop), Street::next).collect::<Vec<_>>();
        assert_eq!(
            streets,
            [Street::Preflop, Street::Flop, Street::Turn, Street::River]
        );

        let board = streets.iter().map(Street::board_cards).sum::<usize>();
        assert_eq!(board, 5);
    }

    #[test]
    fn cards_with_board() {
        let c1 = Card::new(Rank::Ace, Suit::Hearts);
        let c2 = Card::new(Rank::King, Suit::Hearts);
        let b = Card::new(Rank::Deuce, Suit::Clubs);

        assert_eq!(PlayerCards::Cards(c1, c2).with_board(&[b]), vec![c1, c2, b]);
        assert_eq!(PlayerCards::None.with_board(&[b]), vec![b]);
    }
}

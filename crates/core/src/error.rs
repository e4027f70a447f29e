// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand errors.
use thiserror::Error;

use crate::{
    action::Action,
    poker::{Chips, DeckError, EvalError},
};

/// An action that was rejected, the hand state is unchanged and the player can
/// be asked again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The action came from a seat that is not the acting seat.
    #[error("seat {seat} acted out of turn, waiting for seat {acting}")]
    NotYourTurn {
        /// The seat that sent the action.
        seat: usize,
        /// The acting seat.
        acting: usize,
    },
    /// The betting round does not expect any action.
    #[error("betting round is closed")]
    RoundClosed,
    /// The action is not in the legal actions set.
    #[error("seat {seat} cannot {action}")]
    IllegalAction {
        /// The acting seat.
        seat: usize,
        /// The rejected action.
        action: Action,
    },
    /// A raise below the minimum raise.
    #[error("seat {seat} raise to {amount} outside [{min}, {max}]")]
    IllegalRaise {
        /// The acting seat.
        seat: usize,
        /// The raise-to amount.
        amount: Chips,
        /// The minimum raise-to amount.
        min: Chips,
        /// The maximum raise-to amount.
        max: Chips,
    },
    /// A raise for more chips than the player has.
    #[error("seat {seat} cannot raise to {amount} with {available} available")]
    InsufficientFunds {
        /// The acting seat.
        seat: usize,
        /// The raise-to amount.
        amount: Chips,
        /// The player stack plus the chips committed this street.
        available: Chips,
    },
}

/// Hand errors.
///
/// Only [GameError::Action] is recoverable, all other errors are caused by a
/// caller bug or a broken invariant and end the hand.
#[derive(Debug, Error)]
pub enum GameError {
    /// Rejected action.
    #[error(transparent)]
    Action(#[from] ActionError),
    /// Deck error.
    #[error(transparent)]
    Deck(#[from] DeckError),
    /// Evaluator error.
    #[error(transparent)]
    Eval(#[from] EvalError),
    /// Invalid hand configuration.
    #[error("invalid hand config: {0}")]
    Config(String),
    /// Chips conservation or state machine invariant violation.
    #[error("internal consistency error: {0}")]
    Inconsistent(String),
}

impl GameError {
    /// Checks if the hand can continue after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, GameError::Action(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recoverable_errors() {
        let err = GameError::from(ActionError::IllegalAction {
            seat: 2,
            action: Action::Check,
        });
        assert!(err.is_recoverable());
        assert_eq!(err.to_string(), "seat 2 cannot check");

        let err = GameError::from(DeckError::Exhausted);
        assert!(!err.is_recoverable());

        let err = GameError::Inconsistent("pot".to_string());
        assert!(!err.is_recoverable());
    }
}

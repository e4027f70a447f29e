// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Player actions.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::poker::Chips;

/// A player action.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Give up the hand.
    Fold,
    /// Pass without betting, only when there is no bet to match.
    Check,
    /// Match the current bet, or go all in if the stack is short.
    Call,
    /// Bet or raise the current bet to the given total for this street.
    Raise(Chips),
}

impl Action {
    /// The kind of this action.
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Fold => ActionKind::Fold,
            Action::Check => ActionKind::Check,
            Action::Call => ActionKind::Call,
            Action::Raise(_) => ActionKind::Raise,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Raise(amount) => write!(f, "raise to {amount}"),
            _ => write!(f, "{}", self.kind()),
        }
    }
}

/// An action without its amount, used to describe the legal actions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    /// Fold.
    Fold,
    /// Check.
    Check,
    /// Call.
    Call,
    /// Raise.
    Raise,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ActionKind::Fold => "fold",
            ActionKind::Check => "check",
            ActionKind::Call => "call",
            ActionKind::Raise => "raise",
        };

        write!(f, "{label}")
    }
}

/// The actions a player can take and the bounds of a raise.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalActions {
    /// The list of legal actions, empty if the player cannot act.
    pub actions: Vec<ActionKind>,
    /// The chips needed to call, clamped to the player stack.
    pub to_call: Chips,
    /// The minimum raise-to amount, zero if raising is not legal.
    pub min_raise: Chips,
    /// The maximum raise-to amount (all in), zero if raising is not legal.
    pub max_raise: Chips,
}

impl LegalActions {
    /// Checks if an action kind is legal.
    pub fn allows(&self, kind: ActionKind) -> bool {
        self.actions.contains(&kind)
    }

    /// Check if a call action is legal.
    pub fn can_call(&self) -> bool {
        self.allows(ActionKind::Call)
    }

    /// Check if a check action is legal.
    pub fn can_check(&self) -> bool {
        self.allows(ActionKind::Check)
    }

    /// Check if a raise action is legal.
    pub fn can_raise(&self) -> bool {
        self.allows(ActionKind::Raise)
    }

    /// Checks if the player has no action to take.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_labels() {
        assert_eq!(Action::Fold.to_string(), "fold");
        assert_eq!(Action::Call.to_string(), "call");
        assert_eq!(Action::Raise(Chips::new(1_500)).to_string(), "raise to 1,500");
        assert_eq!(Action::Raise(Chips::ZERO).kind(), ActionKind::Raise);
    }

    #[test]
    fn legal_actions_queries() {
        let legal = LegalActions {
            actions: vec![ActionKind::Fold, ActionKind::Call],
            to_call: Chips::new(20),
            ..Default::default()
        };

        assert!(legal.can_call());
        assert!(!legal.can_check());
        assert!(!legal.can_raise());
        assert!(!legal.is_empty());
        assert!(LegalActions::default().is_empty());
    }
}

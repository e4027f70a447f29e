// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Player decisions.
use crate::{
    action::{Action, LegalActions},
    player::Player,
    poker::{Card, Chips, Street},
};

/// The state a player sees when asked to act.
#[derive(Debug, Clone, Copy)]
pub struct ActionRequest<'a> {
    /// The acting seat.
    pub seat: usize,
    /// The acting player.
    pub player: &'a Player,
    /// The current street.
    pub street: Street,
    /// The board cards.
    pub board: &'a [Card],
    /// The legal actions for the player.
    pub legal: &'a LegalActions,
    /// The chips in all the pots.
    pub pot: Chips,
}

/// Provides the actions for the players in a hand.
pub trait DecisionProvider {
    /// Returns the action for the acting player.
    ///
    /// `None` means no answer (timeout or disconnect), the player folds.
    fn request_action(&mut self, request: &ActionRequest<'_>) -> Option<Action>;
}

impl<F> DecisionProvider for F
where
    F: FnMut(&ActionRequest<'_>) -> Option<Action>,
{
    fn request_action(&mut self, request: &ActionRequest<'_>) -> Option<Action> {
        self(request)
    }
}

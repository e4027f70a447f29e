// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand player types.
use serde::{Deserialize, Serialize};

use crate::{
    action::Action,
    error::GameError,
    poker::{Chips, PlayerCards},
};

/// The player status in the hand.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerStatus {
    /// The player is in the hand and can act.
    Active,
    /// The player gave up the hand.
    Folded,
    /// The player committed all chips, stays in the hand without acting.
    AllIn,
}

/// A hand player state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// The player name, unique at the table.
    pub name: String,
    /// The chips not yet committed in this hand.
    pub stack: Chips,
    /// The chips committed in the current street.
    pub committed: Chips,
    /// The chips committed in the whole hand.
    pub total_committed: Chips,
    /// The player status.
    pub status: PlayerStatus,
    /// This player private cards.
    pub hole_cards: PlayerCards,
    /// The player has acted since the last raise in this street.
    pub has_acted: bool,
    /// The last player action.
    pub last_action: Option<Action>,
    /// The chips won at the end of the hand.
    pub winnings: Chips,
    starting_stack: Chips,
}

impl Player {
    /// Creates a new player.
    pub fn new(name: impl Into<String>, stack: Chips) -> Self {
        Self {
            name: name.into(),
            stack,
            committed: Chips::ZERO,
            total_committed: Chips::ZERO,
            status: PlayerStatus::Active,
            hole_cards: PlayerCards::None,
            has_acted: false,
            last_action: None,
            winnings: Chips::ZERO,
            starting_stack: stack,
        }
    }

    /// The stack the player had at the start of the hand.
    pub fn starting_stack(&self) -> Chips {
        self.starting_stack
    }

    /// Commits up to `chips` from the stack, returns the committed amount.
    ///
    /// A player that runs out of chips goes all in.
    pub fn commit(&mut self, chips: Chips) -> Chips {
        let chips = chips.min(self.stack);
        self.stack -= chips;
        self.committed += chips;
        self.total_committed += chips;

        if self.stack == Chips::ZERO && self.status == PlayerStatus::Active {
            self.status = PlayerStatus::AllIn;
        }

        chips
    }

    /// Sets this player in fold state.
    pub fn fold(&mut self) {
        self.status = PlayerStatus::Folded;
    }

    /// Adds won chips to the stack.
    pub fn win(&mut self, chips: Chips) {
        self.stack += chips;
        self.winnings += chips;
    }

    /// The player can act.
    pub fn is_active(&self) -> bool {
        self.status == PlayerStatus::Active
    }

    /// The player has not folded.
    pub fn in_hand(&self) -> bool {
        self.status != PlayerStatus::Folded
    }

    /// The player is all in.
    pub fn is_all_in(&self) -> bool {
        self.status == PlayerStatus::AllIn
    }

    /// Reset state for a new street.
    fn start_street(&mut self) {
        self.committed = Chips::ZERO;
        self.has_acted = false;
        self.last_action = None;
    }
}

/// The table players in seat order.
#[derive(Debug, Clone)]
pub struct Players {
    players: Vec<Player>,
    button: usize,
}

impl Players {
    /// Creates the players state, `button` is the dealer seat.
    pub fn new(players: Vec<Player>, button: usize) -> Self {
        Self { players, button }
    }

    /// Returns total number of players.
    pub fn count(&self) -> usize {
        self.players.len()
    }

    /// The button seat.
    pub fn button(&self) -> usize {
        self.button
    }

    /// Returns the number of players that can act.
    pub fn count_active(&self) -> usize {
        self.players.iter().filter(|p| p.is_active()).count()
    }

    /// Returns the number of players that have not folded.
    pub fn count_in_hand(&self) -> usize {
        self.players.iter().filter(|p| p.in_hand()).count()
    }

    /// Returns a player by seat.
    pub fn get(&self, seat: usize) -> Option<&Player> {
        self.players.get(seat)
    }

    /// Returns a mutable player by seat.
    pub fn get_mut(&mut self, seat: usize) -> Option<&mut Player> {
        self.players.get_mut(seat)
    }

    /// Returns an iterator to all players.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// Returns a mutable iterator to all players.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Player> {
        self.players.iter_mut()
    }

    /// Finds the first seat clockwise starting at `start` (included) whose
    /// player matches the predicate.
    pub fn find_from<P>(&self, start: usize, mut pred: P) -> Option<usize>
    where
        P: FnMut(&Player) -> bool,
    {
        let n = self.players.len();
        (0..n)
            .map(|i| (start + i) % n)
            .find(|&seat| pred(&self.players[seat]))
    }

    /// The seats in table order starting left of the button.
    pub fn table_order(&self) -> impl Iterator<Item = usize> + '_ {
        let n = self.players.len();
        (1..=n).map(move |i| (self.button + i) % n)
    }

    /// Starts a new street.
    pub fn start_street(&mut self) {
        self.players.iter_mut().for_each(Player::start_street);
    }

    /// Sum of the chips committed by all players in the hand.
    pub fn total_committed(&self) -> Chips {
        self.players.iter().map(|p| p.total_committed).sum()
    }

    /// Checks that no chips were created or lost by the betting actions.
    pub fn check_chips(&self, pot_total: Chips) -> Result<(), GameError> {
        for (seat, p) in self.players.iter().enumerate() {
            if p.stack + p.total_committed != p.starting_stack + p.winnings {
                return Err(GameError::Inconsistent(format!(
                    "seat {seat} stack {} + committed {} != starting {} + won {}",
                    p.stack, p.total_committed, p.starting_stack, p.winnings
                )));
            }

            if p.committed > p.total_committed {
                return Err(GameError::Inconsistent(format!(
                    "seat {seat} street bet {} above hand bet {}",
                    p.committed, p.total_committed
                )));
            }
        }

        let committed = self.total_committed();
        if committed != pot_total {
            return Err(GameError::Inconsistent(format!(
                "pot {pot_total} != committed {committed}"
            )));
        }

        Ok(())
    }

    /// Consumes the state returning the players.
    pub fn into_players(self) -> Vec<Player> {
        self.players
    }
}

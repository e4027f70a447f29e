// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Betting round state machine.
//!
//! A [BettingRound] drives the action of one street: it computes the legal
//! actions for the acting seat, validates and applies actions, moves the turn
//! clockwise among the active players and detects when the street closes.
//!
//! The round mutates the [Players] and [PotManager] it is given, both are
//! owned by the hand and passed by exclusive reference so that only one action
//! can be applied at a time.
use log::debug;

use crate::{
    action::{Action, ActionKind, LegalActions},
    error::{ActionError, GameError},
    player::{Player, Players},
    poker::{Chips, Street},
    pot::PotManager,
};

/// The betting round state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RoundState {
    /// Waiting for the player at the given seat to act.
    AwaitingAction(usize),
    /// All bets are matched, the street is over.
    RoundComplete,
    /// All players but the one at the given seat folded.
    HandOverUncontested(usize),
}

/// The betting state for one street.
#[derive(Debug, Clone)]
pub struct BettingRound {
    street: Street,
    big_blind: Chips,
    current_bet: Chips,
    min_raise: Chips,
    last_aggressor: Option<usize>,
    state: RoundState,
}

impl BettingRound {
    /// Creates a betting round for a street.
    ///
    /// The round doesn't accept actions until [BettingRound::begin] is called.
    pub fn new(street: Street, big_blind: Chips) -> Self {
        Self {
            street,
            big_blind,
            current_bet: Chips::ZERO,
            min_raise: big_blind,
            last_aggressor: None,
            state: RoundState::RoundComplete,
        }
    }

    /// The round street.
    pub fn street(&self) -> Street {
        self.street
    }

    /// The highest bet in this street.
    pub fn current_bet(&self) -> Chips {
        self.current_bet
    }

    /// The minimum raise increment.
    pub fn min_raise_increment(&self) -> Chips {
        self.min_raise
    }

    /// The last seat that bet or raised.
    pub fn last_aggressor(&self) -> Option<usize> {
        self.last_aggressor
    }

    /// The round state.
    pub fn state(&self) -> RoundState {
        self.state
    }

    /// Posts a blind for a seat, a short stack posts all its chips.
    ///
    /// Blinds count as committed chips but the player still has to act.
    pub fn post_blind(
        &mut self,
        players: &mut Players,
        pots: &mut PotManager,
        seat: usize,
        blind: Chips,
    ) -> Result<Chips, GameError> {
        let player = player_mut(players, seat)?;
        let chips = player.commit(blind);
        pots.contribute(seat, chips);

        self.current_bet = self.current_bet.max(blind);
        players.check_chips(pots.total())?;

        Ok(chips)
    }

    /// Starts the round with the first player to act at or after `first`.
    pub fn begin(&mut self, players: &Players, first: usize) -> RoundState {
        self.state = self.next_state(players, first);
        self.state
    }

    /// Returns the legal actions for a seat.
    pub fn legal_actions(&self, players: &Players, seat: usize) -> LegalActions {
        let Some(player) = players.get(seat) else {
            return LegalActions::default();
        };

        if !player.is_active() || player.stack == Chips::ZERO {
            return LegalActions::default();
        }

        let max_raise = player.stack + player.committed;
        let (mut actions, to_call) = if player.committed < self.current_bet {
            let to_call = self.current_bet - player.committed;
            (
                vec![ActionKind::Fold, ActionKind::Call],
                to_call.min(player.stack),
            )
        } else {
            (vec![ActionKind::Check], Chips::ZERO)
        };

        if player.stack > self.current_bet - player.committed {
            actions.push(ActionKind::Raise);
            LegalActions {
                actions,
                to_call,
                min_raise: (self.current_bet + self.min_raise).min(max_raise),
                max_raise,
            }
        } else {
            LegalActions {
                actions,
                to_call,
                ..Default::default()
            }
        }
    }

    /// Applies an action for the acting seat.
    ///
    /// A rejected action returns a recoverable [GameError::Action] and leaves
    /// the state unchanged.
    pub fn apply(
        &mut self,
        players: &mut Players,
        pots: &mut PotManager,
        seat: usize,
        action: Action,
    ) -> Result<RoundState, GameError> {
        self.check_turn(seat)?;

        let legal = self.legal_actions(players, seat);
        if !legal.allows(action.kind()) {
            return Err(ActionError::IllegalAction { seat, action }.into());
        }

        if let Action::Raise(amount) = action {
            if amount > legal.max_raise {
                return Err(ActionError::InsufficientFunds {
                    seat,
                    amount,
                    available: legal.max_raise,
                }
                .into());
            }

            if amount < legal.min_raise {
                return Err(ActionError::IllegalRaise {
                    seat,
                    amount,
                    min: legal.min_raise,
                    max: legal.max_raise,
                }
                .into());
            }
        }

        self.execute(players, pots, seat, action)
    }

    /// Folds the acting seat without checking the legal actions.
    ///
    /// Used when a player cannot provide a valid action.
    pub fn apply_default(
        &mut self,
        players: &mut Players,
        pots: &mut PotManager,
        seat: usize,
    ) -> Result<RoundState, GameError> {
        self.check_turn(seat)?;
        self.execute(players, pots, seat, Action::Fold)
    }

    fn check_turn(&self, seat: usize) -> Result<(), ActionError> {
        match self.state {
            RoundState::AwaitingAction(acting) if acting == seat => Ok(()),
            RoundState::AwaitingAction(acting) => Err(ActionError::NotYourTurn { seat, acting }),
            _ => Err(ActionError::RoundClosed),
        }
    }

    fn execute(
        &mut self,
        players: &mut Players,
        pots: &mut PotManager,
        seat: usize,
        action: Action,
    ) -> Result<RoundState, GameError> {
        let current_bet = self.current_bet;
        let player = player_mut(players, seat)?;

        match action {
            Action::Fold => {
                player.fold();
                pots.fold(seat);
            }
            Action::Check => {}
            Action::Call => {
                let chips = player.commit(current_bet - player.committed);
                pots.contribute(seat, chips);
            }
            Action::Raise(amount) => {
                let chips = player.commit(amount - player.committed);
                pots.contribute(seat, chips);

                // A short all in doesn't change the raise size.
                let increment = amount - current_bet;
                if increment >= self.min_raise {
                    self.min_raise = increment;
                }

                self.current_bet = amount;
                self.last_aggressor = Some(seat);

                // Everyone else who has not matched the new bet must act again.
                for other in players.iter_mut() {
                    if other.is_active() && other.committed < amount {
                        other.has_acted = false;
                    }
                }
            }
        }

        let player = player_mut(players, seat)?;
        player.has_acted = true;
        player.last_action = Some(action);

        debug!(
            "{} {}: {action}, bet {} stack {}",
            self.street, player.name, player.committed, player.stack
        );

        players.check_chips(pots.total())?;

        self.state = self.next_state(players, seat + 1);
        Ok(self.state)
    }

    /// Finds the next state searching for the next player to act at or after
    /// `start`.
    fn next_state(&self, players: &Players, start: usize) -> RoundState {
        if players.count_in_hand() < 2 {
            if let Some(seat) = players.find_from(0, Player::in_hand) {
                return RoundState::HandOverUncontested(seat);
            }

            return RoundState::RoundComplete;
        }

        let current_bet = self.current_bet;
        let next = if players.count_active() == 1 {
            // With everyone else all in the last player only has to match.
            players.find_from(start, |p| p.is_active() && p.committed < current_bet)
        } else {
            players.find_from(start, |p| {
                p.is_active() && (!p.has_acted || p.committed < current_bet)
            })
        };

        match next {
            Some(seat) => RoundState::AwaitingAction(seat),
            None => RoundState::RoundComplete,
        }
    }
}

fn player_mut(players: &mut Players, seat: usize) -> Result<&mut Player, GameError> {
    players
        .get_mut(seat)
        .ok_or_else(|| GameError::Inconsistent(format!("no player at seat {seat}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BB: Chips = Chips::new(20);

    struct Table {
        players: Players,
        pots: PotManager,
    }

    impl Table {
        fn new(stacks: &[u32]) -> Self {
            let players = stacks
                .iter()
                .enumerate()
                .map(|(idx, &s)| Player::new(format!("P{idx}"), Chips::new(s)))
                .collect();
            Self {
                players: Players::new(players, 0),
                pots: PotManager::new(stacks.len()),
            }
        }

        fn apply(&mut self, round: &mut BettingRound, seat: usize, action: Action) -> RoundState {
            round
                .apply(&mut self.players, &mut self.pots, seat, action)
                .unwrap()
        }

        fn reject(&mut self, round: &mut BettingRound, seat: usize, action: Action) -> ActionError {
            match round.apply(&mut self.players, &mut self.pots, seat, action) {
                Err(GameError::Action(err)) => err,
                res => panic!("expected action error, got {res:?}"),
            }
        }

        fn player(&self, seat: usize) -> &Player {
            self.players.get(seat).unwrap()
        }
    }

    fn raise(amount: u32) -> Action {
        Action::Raise(Chips::new(amount))
    }

    #[test]
    fn check_around_closes_round() {
        let mut t = Table::new(&[100, 100, 100]);
        let mut round = BettingRound::new(Street::Flop, BB);
        assert_eq!(round.begin(&t.players, 1), RoundState::AwaitingAction(1));

        assert_eq!(t.apply(&mut round, 1, Action::Check), RoundState::AwaitingAction(2));
        assert_eq!(t.apply(&mut round, 2, Action::Check), RoundState::AwaitingAction(0));
        assert_eq!(t.apply(&mut round, 0, Action::Check), RoundState::RoundComplete);
        assert_eq!(round.last_aggressor(), None);
    }

    #[test]
    fn bet_reopens_action_for_checked_player() {
        let mut t = Table::new(&[100, 100]);
        let mut round = BettingRound::new(Street::Flop, BB);
        round.begin(&t.players, 0);

        // X checks, Y bets, X must act again.
        assert_eq!(t.apply(&mut round, 0, Action::Check), RoundState::AwaitingAction(1));
        assert_eq!(t.apply(&mut round, 1, raise(30)), RoundState::AwaitingAction(0));
        assert_eq!(round.last_aggressor(), Some(1));
        assert_eq!(round.current_bet(), Chips::new(30));

        let legal = round.legal_actions(&t.players, 0);
        assert_eq!(
            legal.actions,
            vec![ActionKind::Fold, ActionKind::Call, ActionKind::Raise]
        );
        assert_eq!(legal.to_call, Chips::new(30));
        assert_eq!(legal.min_raise, Chips::new(60));
        assert_eq!(legal.max_raise, Chips::new(100));

        assert_eq!(t.apply(&mut round, 0, Action::Call), RoundState::RoundComplete);
        assert_eq!(t.pots.total(), Chips::new(60));
    }

    #[test]
    fn reraise_requires_response() {
        let mut t = Table::new(&[500, 500, 500]);
        let mut round = BettingRound::new(Street::Turn, BB);
        round.begin(&t.players, 0);

        t.apply(&mut round, 0, raise(40));
        t.apply(&mut round, 1, Action::Call);
        assert_eq!(t.apply(&mut round, 2, raise(100)), RoundState::AwaitingAction(0));

        // The raise increment is now 60.
        assert_eq!(round.min_raise_increment(), Chips::new(60));
        assert_eq!(round.legal_actions(&t.players, 0).min_raise, Chips::new(160));

        assert_eq!(t.apply(&mut round, 0, Action::Call), RoundState::AwaitingAction(1));
        assert_eq!(t.apply(&mut round, 1, Action::Fold), RoundState::RoundComplete);
        assert_eq!(t.pots.total(), Chips::new(240));
    }

    #[test]
    fn preflop_big_blind_option() {
        let mut t = Table::new(&[100, 100, 100]);
        let mut round = BettingRound::new(Street::Preflop, BB);
        round.post_blind(&mut t.players, &mut t.pots, 1, Chips::new(10)).unwrap();
        round.post_blind(&mut t.players, &mut t.pots, 2, BB).unwrap();
        assert_eq!(round.current_bet(), BB);

        assert_eq!(round.begin(&t.players, 0), RoundState::AwaitingAction(0));
        assert_eq!(t.apply(&mut round, 0, Action::Call), RoundState::AwaitingAction(1));
        assert_eq!(t.apply(&mut round, 1, Action::Call), RoundState::AwaitingAction(2));

        // Big blind can check or raise.
        let legal = round.legal_actions(&t.players, 2);
        assert_eq!(legal.actions, vec![ActionKind::Check, ActionKind::Raise]);
        assert_eq!(legal.min_raise, Chips::new(40));
        assert_eq!(t.apply(&mut round, 2, Action::Check), RoundState::RoundComplete);
    }

    #[test]
    fn illegal_actions_are_rejected() {
        let mut t = Table::new(&[100, 100, 100]);
        let mut round = BettingRound::new(Street::Flop, BB);
        round.begin(&t.players, 0);

        assert_eq!(
            t.reject(&mut round, 1, Action::Check),
            ActionError::NotYourTurn { seat: 1, acting: 0 }
        );
        assert_eq!(
            t.reject(&mut round, 0, Action::Call),
            ActionError::IllegalAction {
                seat: 0,
                action: Action::Call
            }
        );
        assert_eq!(
            t.reject(&mut round, 0, Action::Fold),
            ActionError::IllegalAction {
                seat: 0,
                action: Action::Fold
            }
        );
        assert_eq!(
            t.reject(&mut round, 0, raise(10)),
            ActionError::IllegalRaise {
                seat: 0,
                amount: Chips::new(10),
                min: BB,
                max: Chips::new(100)
            }
        );
        assert_eq!(
            t.reject(&mut round, 0, raise(101)),
            ActionError::InsufficientFunds {
                seat: 0,
                amount: Chips::new(101),
                available: Chips::new(100)
            }
        );

        // Nothing changed.
        assert_eq!(round.state(), RoundState::AwaitingAction(0));
        assert_eq!(t.pots.total(), Chips::ZERO);
        assert_eq!(t.player(0).stack, Chips::new(100));
    }

    #[test]
    fn short_call_goes_all_in() {
        let mut t = Table::new(&[300, 50, 300]);
        let mut round = BettingRound::new(Street::Flop, BB);
        round.begin(&t.players, 0);

        t.apply(&mut round, 0, raise(100));

        let legal = round.legal_actions(&t.players, 1);
        assert_eq!(legal.actions, vec![ActionKind::Fold, ActionKind::Call]);
        assert_eq!(legal.to_call, Chips::new(50));

        assert_eq!(t.apply(&mut round, 1, Action::Call), RoundState::AwaitingAction(2));
        assert!(t.player(1).is_all_in());
        assert_eq!(t.player(1).committed, Chips::new(50));

        // All in players have no actions.
        assert!(round.legal_actions(&t.players, 1).is_empty());

        assert_eq!(t.apply(&mut round, 2, Action::Call), RoundState::RoundComplete);
        assert_eq!(t.pots.pots().len(), 2);
    }

    #[test]
    fn short_all_in_raise() {
        let mut t = Table::new(&[500, 130, 500]);
        let mut round = BettingRound::new(Street::Flop, BB);
        round.begin(&t.players, 0);

        t.apply(&mut round, 0, raise(100));

        // Seat 1 can raise all in for less than a full raise.
        let legal = round.legal_actions(&t.players, 1);
        assert_eq!(legal.min_raise, Chips::new(130));
        assert_eq!(legal.max_raise, Chips::new(130));
        assert_eq!(t.apply(&mut round, 1, raise(130)), RoundState::AwaitingAction(2));
        assert!(t.player(1).is_all_in());

        // The increment stays at the last full raise.
        assert_eq!(round.min_raise_increment(), Chips::new(100));
        assert_eq!(round.legal_actions(&t.players, 2).min_raise, Chips::new(230));

        // Seat 0 has to act again to match the all in.
        assert_eq!(t.apply(&mut round, 2, Action::Call), RoundState::AwaitingAction(0));
        assert_eq!(t.apply(&mut round, 0, Action::Call), RoundState::RoundComplete);
    }

    #[test]
    fn short_all_in_raise_skips_earlier_all_in() {
        let mut t = Table::new(&[600, 300, 430, 600]);
        let mut round = BettingRound::new(Street::Flop, BB);
        round.begin(&t.players, 0);

        // Seat 1 is all in for 300 on the flop.
        t.apply(&mut round, 0, raise(300));
        t.apply(&mut round, 1, Action::Call);
        t.apply(&mut round, 2, Action::Call);
        assert_eq!(t.apply(&mut round, 3, Action::Call), RoundState::RoundComplete);
        assert!(t.player(1).is_all_in());

        t.players.start_street();
        let mut round = BettingRound::new(Street::Turn, BB);
        let mut states = vec![round.begin(&t.players, 3)];

        states.push(t.apply(&mut round, 3, raise(100)));
        states.push(t.apply(&mut round, 0, Action::Call));

        // Seat 2 raises all in for less than a full raise.
        states.push(t.apply(&mut round, 2, raise(130)));
        assert!(t.player(2).is_all_in());
        assert_eq!(round.min_raise_increment(), Chips::new(100));

        // Only the active players below the new bet act again.
        assert!(!t.player(3).has_acted);
        assert!(!t.player(0).has_acted);
        assert!(t.player(2).has_acted);
        assert!(t.player(1).is_all_in());
        assert_eq!(t.player(1).committed, Chips::ZERO);
        assert!(round.legal_actions(&t.players, 1).is_empty());

        states.push(t.apply(&mut round, 3, Action::Call));
        states.push(t.apply(&mut round, 0, Action::Call));
        assert_eq!(
            states,
            vec![
                RoundState::AwaitingAction(3),
                RoundState::AwaitingAction(0),
                RoundState::AwaitingAction(2),
                RoundState::AwaitingAction(3),
                RoundState::AwaitingAction(0),
                RoundState::RoundComplete,
            ]
        );

        // The all in seat plays only for the main pot.
        let pots = t.pots.pots();
        assert_eq!(pots.len(), 2);
        assert_eq!(pots[0].amount, Chips::new(1_200));
        assert_eq!(pots[0].eligible, vec![0, 1, 2, 3]);
        assert_eq!(pots[1].amount, Chips::new(390));
        assert_eq!(pots[1].eligible, vec![0, 2, 3]);
    }

    #[test]
    fn last_active_player_only_matches() {
        let mut t = Table::new(&[60, 500]);
        let mut round = BettingRound::new(Street::Flop, BB);
        round.begin(&t.players, 0);

        assert_eq!(t.apply(&mut round, 0, raise(60)), RoundState::AwaitingAction(1));
        assert_eq!(t.apply(&mut round, 1, Action::Call), RoundState::RoundComplete);

        // Next street has no one to act.
        t.players.start_street();
        let mut round = BettingRound::new(Street::Turn, BB);
        assert_eq!(round.begin(&t.players, 0), RoundState::RoundComplete);
    }

    #[test]
    fn folds_end_hand() {
        let mut t = Table::new(&[100, 100, 100, 100]);
        let mut round = BettingRound::new(Street::Flop, BB);
        round.begin(&t.players, 0);

        assert_eq!(t.apply(&mut round, 0, raise(20)), RoundState::AwaitingAction(1));
        assert_eq!(t.apply(&mut round, 1, Action::Fold), RoundState::AwaitingAction(2));
        assert_eq!(t.apply(&mut round, 2, Action::Fold), RoundState::AwaitingAction(3));
        assert_eq!(
            t.apply(&mut round, 3, Action::Fold),
            RoundState::HandOverUncontested(0)
        );
        assert_eq!(t.reject(&mut round, 0, Action::Check), ActionError::RoundClosed);
    }

    #[test]
    fn default_fold_when_check_is_legal() {
        let mut t = Table::new(&[100, 100, 100]);
        let mut round = BettingRound::new(Street::River, BB);
        round.begin(&t.players, 2);

        let state = round
            .apply_default(&mut t.players, &mut t.pots, 2)
            .unwrap();
        assert_eq!(state, RoundState::AwaitingAction(0));
        assert!(!t.player(2).in_hand());
    }
}

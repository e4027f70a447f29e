// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Bot players.
use rand::{Rng, SeedableRng, rngs::StdRng};

use holdem_core::{Action, ActionRequest, Chips, DecisionProvider, PlayerCards};

/// A bot that never folds and never raises.
#[derive(Debug, Default, Clone, Copy)]
pub struct CallingStation;

impl DecisionProvider for CallingStation {
    fn request_action(&mut self, req: &ActionRequest<'_>) -> Option<Action> {
        if req.legal.can_check() {
            Some(Action::Check)
        } else if req.legal.can_call() {
            Some(Action::Call)
        } else {
            Some(Action::Fold)
        }
    }
}

/// A bot that plays random legal actions, raising more often with a pair.
#[derive(Debug)]
pub struct RandomBot {
    rng: StdRng,
}

impl RandomBot {
    /// Creates a bot with a seeded generator.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl DecisionProvider for RandomBot {
    fn request_action(&mut self, req: &ActionRequest<'_>) -> Option<Action> {
        let legal = req.legal;
        let p = self.rng.random::<f64>();

        let pair = match req.player.hole_cards {
            PlayerCards::Cards(c1, c2) => c1.rank() == c2.rank(),
            PlayerCards::None => false,
        };

        let raise_odds = if pair { 0.5 } else { 0.15 };
        if legal.can_raise() && p < raise_odds {
            let min = legal.min_raise.amount();
            let max = legal.max_raise.amount();

            // Mostly small raises, all in now and then.
            let amount = if self.rng.random_bool(0.9) {
                self.rng.random_range(min..=max.min(min.saturating_mul(3)))
            } else {
                max
            };

            return Some(Action::Raise(Chips::new(amount)));
        }

        if legal.can_check() {
            Some(Action::Check)
        } else if p > 0.8 || !legal.can_call() {
            Some(Action::Fold)
        } else {
            Some(Action::Call)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use holdem_core::{ActionKind, LegalActions, Player, Street};

    fn request<'a>(player: &'a Player, legal: &'a LegalActions) -> ActionRequest<'a> {
        ActionRequest {
            seat: 0,
            player,
            street: Street::Preflop,
            board: &[],
            legal,
            pot: Chips::new(30),
        }
    }

    fn facing_bet() -> LegalActions {
        LegalActions {
            actions: vec![ActionKind::Fold, ActionKind::Call, ActionKind::Raise],
            to_call: Chips::new(20),
            min_raise: Chips::new(40),
            max_raise: Chips::new(500),
        }
    }

    #[test]
    fn calling_station_calls() {
        let player = Player::new("Alice", Chips::new(500));
        let legal = facing_bet();
        assert_eq!(
            CallingStation.request_action(&request(&player, &legal)),
            Some(Action::Call)
        );

        let legal = LegalActions {
            actions: vec![ActionKind::Check, ActionKind::Raise],
            ..facing_bet()
        };
        assert_eq!(
            CallingStation.request_action(&request(&player, &legal)),
            Some(Action::Check)
        );
    }

    #[test]
    fn random_bot_plays_legal_actions() {
        let player = Player::new("Alice", Chips::new(500));
        let legal = facing_bet();
        let mut bot = RandomBot::new(3);

        for _ in 0..1_000 {
            match bot.request_action(&request(&player, &legal)) {
                Some(Action::Raise(amount)) => {
                    assert!(amount >= legal.min_raise && amount <= legal.max_raise);
                }
                Some(action) => assert!(legal.allows(action.kind())),
                None => panic!("no action"),
            }
        }
    }
}

// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand driver.
//!
//! A [Hand] runs a single hand from the blinds to the pots distribution,
//! dealing the cards, running a [BettingRound] for each street and asking the
//! [DecisionProvider] for the players actions.
use ahash::AHashSet;
use log::{error, info, warn};
use serde::{Deserialize, Serialize};

use crate::{
    action::Action,
    betting::{BettingRound, RoundState},
    decision::{ActionRequest, DecisionProvider},
    error::GameError,
    events::{HandEvent, PotState, PresentationSink},
    player::{Player, Players},
    poker::{Card, Chips, Deck, PlayerCards, Street},
    pot::PotManager,
    showdown::{self, PotAward},
};

/// A player seat configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatConfig {
    /// The player name.
    pub name: String,
    /// The player buy-in.
    pub stack: Chips,
}

impl SeatConfig {
    /// Creates a seat config.
    pub fn new(name: impl Into<String>, stack: Chips) -> Self {
        Self {
            name: name.into(),
            stack,
        }
    }
}

/// The hand configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandConfig {
    /// The players in seat order.
    pub seats: Vec<SeatConfig>,
    /// The dealer button seat.
    pub button: usize,
    /// The small blind.
    pub small_blind: Chips,
    /// The big blind.
    pub big_blind: Chips,
    /// The deck shuffle seed, random if `None`.
    pub seed: Option<u64>,
    /// How many times a player is asked again after an illegal action.
    pub max_retries: usize,
}

impl HandConfig {
    /// Minimum number of players.
    pub const MIN_SEATS: usize = 2;
    /// Maximum number of players.
    pub const MAX_SEATS: usize = 9;
    /// Default number of retries after an illegal action.
    pub const DEFAULT_MAX_RETRIES: usize = 3;

    /// Creates a config with the button at seat 0 and a random deck.
    pub fn new(seats: Vec<SeatConfig>, small_blind: Chips, big_blind: Chips) -> Self {
        Self {
            seats,
            button: 0,
            small_blind,
            big_blind,
            seed: None,
            max_retries: Self::DEFAULT_MAX_RETRIES,
        }
    }

    /// Checks the config is valid.
    pub fn validate(&self) -> Result<(), GameError> {
        let n = self.seats.len();
        if !(Self::MIN_SEATS..=Self::MAX_SEATS).contains(&n) {
            return Err(GameError::Config(format!(
                "{n} players, a hand needs {} to {} players",
                Self::MIN_SEATS,
                Self::MAX_SEATS
            )));
        }

        let mut names = AHashSet::with_capacity(n);
        let mut total = Chips::ZERO;
        for seat in &self.seats {
            let name = seat.name.trim();
            if name.is_empty() {
                return Err(GameError::Config("empty player name".to_string()));
            }

            if !names.insert(name) {
                return Err(GameError::Config(format!("duplicate player name {name}")));
            }

            if seat.stack == Chips::ZERO {
                return Err(GameError::Config(format!("player {name} has no chips")));
            }

            // All the chip sums in a hand are bounded by the table total.
            total = total.checked_add(seat.stack).ok_or_else(|| {
                GameError::Config(format!("table chips overflow at player {name}"))
            })?;
        }

        if self.small_blind == Chips::ZERO || self.small_blind >= self.big_blind {
            return Err(GameError::Config(format!(
                "blinds {}/{} must satisfy 0 < small < big",
                self.small_blind, self.big_blind
            )));
        }

        if self.button >= n {
            return Err(GameError::Config(format!(
                "button seat {} out of range",
                self.button
            )));
        }

        Ok(())
    }
}

/// The hand outcome.
#[derive(Debug, Clone)]
pub struct HandResult {
    /// The pots awards, main pot first.
    pub awards: Vec<PotAward>,
    /// The board cards, fewer than five if the hand ended early.
    pub board: Vec<Card>,
    /// The players final state in seat order.
    pub players: Vec<Player>,
}

/// A single hand.
#[derive(Debug)]
pub struct Hand {
    config: HandConfig,
    players: Players,
    pots: PotManager,
    deck: Deck,
    board: Vec<Card>,
}

impl Hand {
    /// Creates a hand with a deck shuffled from the config seed.
    pub fn new(config: HandConfig) -> Result<Self, GameError> {
        let seed = config.seed.unwrap_or_else(rand::random);
        info!("Shuffling deck with seed {seed}");
        Self::with_deck(config, Deck::new_shuffled(seed))
    }

    /// Creates a hand that deals from the given deck.
    pub fn with_deck(config: HandConfig, deck: Deck) -> Result<Self, GameError> {
        config.validate()?;

        let players = config
            .seats
            .iter()
            .map(|s| Player::new(s.name.trim(), s.stack))
            .collect();
        let players = Players::new(players, config.button);
        let pots = PotManager::new(config.seats.len());

        Ok(Self {
            config,
            players,
            pots,
            deck,
            board: Vec::with_capacity(5),
        })
    }

    /// The hand players.
    pub fn players(&self) -> &Players {
        &self.players
    }

    /// Plays the hand to the end.
    ///
    /// Only non recoverable errors are returned, rejected actions are sent to
    /// the sink and the player is asked again.
    pub fn play<D, S>(mut self, mut provider: D, mut sink: S) -> Result<HandResult, GameError>
    where
        D: DecisionProvider,
        S: PresentationSink,
    {
        let awards = self.run(&mut provider, &mut sink).inspect_err(|e| {
            error!("Hand aborted: {e}");
        })?;

        Ok(HandResult {
            awards,
            board: self.board,
            players: self.players.into_players(),
        })
    }

    fn run<D, S>(&mut self, provider: &mut D, sink: &mut S) -> Result<Vec<PotAward>, GameError>
    where
        D: DecisionProvider,
        S: PresentationSink,
    {
        let n = self.players.count();
        let button = self.config.button;

        // Heads up the button posts the small blind and acts first.
        let (sb_seat, bb_seat) = if n == 2 {
            (button, (button + 1) % n)
        } else {
            ((button + 1) % n, (button + 2) % n)
        };

        info!(
            "Starting hand with {n} players, button {}, blinds {}/{}",
            self.player(button)?.name,
            self.config.small_blind,
            self.config.big_blind
        );

        let mut round = BettingRound::new(Street::Preflop, self.config.big_blind);
        let small_blind =
            round.post_blind(&mut self.players, &mut self.pots, sb_seat, self.config.small_blind)?;
        let big_blind =
            round.post_blind(&mut self.players, &mut self.pots, bb_seat, self.config.big_blind)?;

        sink.notify(&HandEvent::BlindsPosted {
            small_blind_seat: sb_seat,
            small_blind,
            big_blind_seat: bb_seat,
            big_blind,
        });

        self.deal_hole_cards(sink)?;

        let mut street = Street::Preflop;
        let mut state = round.begin(&self.players, (bb_seat + 1) % n);

        let winner = loop {
            while let RoundState::AwaitingAction(seat) = state {
                state = self.ask_player(&mut round, seat, provider, sink)?;
            }

            sink.notify(&HandEvent::StreetComplete {
                street,
                pots: self.pot_state(),
            });

            if let RoundState::HandOverUncontested(seat) = state {
                break Some(seat);
            }

            let Some(next) = street.next() else {
                break None;
            };

            street = next;
            self.deal_board(street, sink)?;

            self.players.start_street();
            round = BettingRound::new(street, self.config.big_blind);
            state = round.begin(&self.players, (button + 1) % n);
        };

        let pots = self.pots.pots();
        let awards = match winner {
            Some(seat) => {
                info!("{} wins uncontested", self.player(seat)?.name);
                showdown::award_uncontested(&pots, seat)
            }
            None => showdown::resolve(&pots, &self.players, &self.board)?,
        };

        let awarded = awards.iter().map(|a| a.amount).sum::<Chips>();
        if awarded != self.pots.total() {
            return Err(GameError::Inconsistent(format!(
                "awarded {awarded} from pots of {}",
                self.pots.total()
            )));
        }

        for award in &awards {
            for winner in &award.winners {
                self.player_mut(winner.seat)?.win(winner.chips);
            }
        }

        self.players.check_chips(self.pots.total())?;
        sink.notify(&HandEvent::PotsAwarded(awards.clone()));

        Ok(awards)
    }

    /// Deals one card at a time starting left of the button.
    fn deal_hole_cards<S: PresentationSink>(&mut self, sink: &mut S) -> Result<(), GameError> {
        let order = self.players.table_order().collect::<Vec<_>>();

        let mut first = vec![None; self.players.count()];
        for &seat in &order {
            first[seat] = Some(self.deck.draw()?);
        }

        for &seat in &order {
            let second = self.deck.draw()?;
            let Some(first) = first[seat] else {
                return Err(GameError::Inconsistent(format!("seat {seat} missing a card")));
            };

            self.player_mut(seat)?.hole_cards = PlayerCards::Cards(first, second);
            sink.notify(&HandEvent::HoleCardsDealt {
                seat,
                cards: (first, second),
            });
        }

        Ok(())
    }

    fn deal_board<S: PresentationSink>(
        &mut self,
        street: Street,
        sink: &mut S,
    ) -> Result<(), GameError> {
        let cards = (0..street.board_cards())
            .map(|_| self.deck.draw())
            .collect::<Result<Vec<_>, _>>()?;
        self.board.extend_from_slice(&cards);

        sink.notify(&HandEvent::CardsDealt {
            street,
            cards,
            board: self.board.clone(),
        });

        Ok(())
    }

    /// Asks the acting player for an action, folds the player if there is no
    /// valid action after the retries.
    fn ask_player<D, S>(
        &mut self,
        round: &mut BettingRound,
        seat: usize,
        provider: &mut D,
        sink: &mut S,
    ) -> Result<RoundState, GameError>
    where
        D: DecisionProvider,
        S: PresentationSink,
    {
        let legal = round.legal_actions(&self.players, seat);

        for _ in 0..=self.config.max_retries {
            let req = ActionRequest {
                seat,
                player: self.player(seat)?,
                street: round.street(),
                board: &self.board,
                legal: &legal,
                pot: self.pots.total(),
            };

            let Some(action) = provider.request_action(&req) else {
                warn!("{} didn't act", req.player.name);
                break;
            };

            match round.apply(&mut self.players, &mut self.pots, seat, action) {
                Ok(state) => {
                    sink.notify(&HandEvent::ActionApplied {
                        seat,
                        action,
                        forced: false,
                        pots: self.pot_state(),
                    });
                    return Ok(state);
                }
                Err(GameError::Action(error)) => {
                    warn!("Seat {seat} action rejected: {error}");
                    sink.notify(&HandEvent::ActionRejected {
                        seat,
                        action,
                        error,
                    });
                }
                Err(e) => return Err(e),
            }
        }

        warn!("Seat {seat} folded by default");
        let state = round.apply_default(&mut self.players, &mut self.pots, seat)?;
        sink.notify(&HandEvent::ActionApplied {
            seat,
            action: Action::Fold,
            forced: true,
            pots: self.pot_state(),
        });

        Ok(state)
    }

    fn pot_state(&self) -> PotState {
        PotState {
            total: self.pots.total(),
            pots: self.pots.pots(),
        }
    }

    fn player(&self, seat: usize) -> Result<&Player, GameError> {
        self.players
            .get(seat)
            .ok_or_else(|| GameError::Inconsistent(format!("no player at seat {seat}")))
    }

    fn player_mut(&mut self, seat: usize) -> Result<&mut Player, GameError> {
        self.players
            .get_mut(seat)
            .ok_or_else(|| GameError::Inconsistent(format!("no player at seat {seat}")))
    }
}

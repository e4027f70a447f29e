// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Holdem single hand engine.
//!
//! Runs one hand of Texas Hold'em: blinds, dealing, the betting rounds with
//! side pots and the showdown. The players decisions come from a
//! [DecisionProvider] and the hand events go to a [PresentationSink].
//!
//! ```
//! use holdem_core::{Action, ActionRequest, Chips, Hand, HandConfig, HandEvent, SeatConfig};
//!
//! let seats = vec![
//!     SeatConfig::new("Alice", Chips::new(1_000)),
//!     SeatConfig::new("Bob", Chips::new(1_000)),
//! ];
//! let mut config = HandConfig::new(seats, Chips::new(10), Chips::new(20));
//! config.seed = Some(42);
//!
//! // Both players check or call to the showdown.
//! let provider = |req: &ActionRequest<'_>| {
//!     Some(if req.legal.can_check() { Action::Check } else { Action::Call })
//! };
//!
//! let mut events: Vec<HandEvent> = Vec::new();
//! let res = Hand::new(config).unwrap().play(provider, &mut events).unwrap();
//!
//! assert_eq!(res.board.len(), 5);
//! let total = res.players.iter().map(|p| p.stack).sum::<Chips>();
//! assert_eq!(total, Chips::new(2_000));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod action;
pub mod betting;
pub mod decision;
pub mod error;
pub mod events;
pub mod hand;
pub mod player;
pub mod poker;
pub mod pot;
pub mod showdown;

pub use action::{Action, ActionKind, LegalActions};
pub use betting::{BettingRound, RoundState};
pub use decision::{ActionRequest, DecisionProvider};
pub use error::{ActionError, GameError};
pub use events::{HandEvent, LogSink, PotState, PresentationSink};
pub use hand::{Hand, HandConfig, HandResult, SeatConfig};
pub use player::{Player, PlayerStatus, Players};
pub use poker::{Card, Chips, PlayerCards, Street};
pub use pot::{Pot, PotManager};
pub use showdown::{PotAward, Winner};

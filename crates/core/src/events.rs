// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand events sent to a presentation sink.
use log::{info, warn};

use crate::{
    action::Action,
    error::ActionError,
    poker::{Card, Chips, Street},
    pot::Pot,
    showdown::PotAward,
};

/// A snapshot of the pots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PotState {
    /// The chips in all the pots.
    pub total: Chips,
    /// The main pot followed by the side pots.
    pub pots: Vec<Pot>,
}

/// A hand state change.
#[derive(Debug, Clone)]
pub enum HandEvent {
    /// The blinds have been posted.
    BlindsPosted {
        /// The small blind seat.
        small_blind_seat: usize,
        /// The chips posted by the small blind.
        small_blind: Chips,
        /// The big blind seat.
        big_blind_seat: usize,
        /// The chips posted by the big blind.
        big_blind: Chips,
    },
    /// A player received the hole cards.
    HoleCardsDealt {
        /// The player seat.
        seat: usize,
        /// The player cards.
        cards: (Card, Card),
    },
    /// Board cards dealt for a street.
    CardsDealt {
        /// The street.
        street: Street,
        /// The new cards.
        cards: Vec<Card>,
        /// The whole board.
        board: Vec<Card>,
    },
    /// A player action changed the hand state.
    ActionApplied {
        /// The player seat.
        seat: usize,
        /// The applied action.
        action: Action,
        /// The action was applied for a player that didn't provide a valid one.
        forced: bool,
        /// The pots after the action.
        pots: PotState,
    },
    /// A player action was rejected and the state is unchanged.
    ActionRejected {
        /// The player seat.
        seat: usize,
        /// The rejected action.
        action: Action,
        /// The rejection reason.
        error: ActionError,
    },
    /// A betting round is over.
    StreetComplete {
        /// The street.
        street: Street,
        /// The pots at the end of the street.
        pots: PotState,
    },
    /// The hand is over and the pots have been awarded.
    PotsAwarded(Vec<PotAward>),
}

/// Receives the hand events.
///
/// Notifications are fire and forget, a sink cannot change the hand.
pub trait PresentationSink {
    /// Handles a hand event.
    fn notify(&mut self, event: &HandEvent);
}

impl<S: PresentationSink + ?Sized> PresentationSink for &mut S {
    fn notify(&mut self, event: &HandEvent) {
        (**self).notify(event);
    }
}

/// Records all events.
impl PresentationSink for Vec<HandEvent> {
    fn notify(&mut self, event: &HandEvent) {
        self.push(event.clone());
    }
}

/// A sink that writes the events to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl PresentationSink for LogSink {
    fn notify(&mut self, event: &HandEvent) {
        match event {
            HandEvent::BlindsPosted {
                small_blind_seat,
                small_blind,
                big_blind_seat,
                big_blind,
            } => {
                info!(
                    "Blinds: seat {small_blind_seat} posts {small_blind}, \
                     seat {big_blind_seat} posts {big_blind}"
                );
            }
            HandEvent::HoleCardsDealt { seat, cards } => {
                info!("Seat {seat} dealt {} {}", cards.0, cards.1);
            }
            HandEvent::CardsDealt { street, board, .. } => {
                let board = board.iter().map(Card::to_string).collect::<Vec<_>>();
                info!("{street} {}", board.join(" "));
            }
            HandEvent::ActionApplied {
                seat,
                action,
                forced,
                pots,
            } => {
                if *forced {
                    warn!("Seat {seat} {action} (default), pot {}", pots.total);
                } else {
                    info!("Seat {seat} {action}, pot {}", pots.total);
                }
            }
            HandEvent::ActionRejected { error, .. } => {
                warn!("Rejected action: {error}");
            }
            HandEvent::StreetComplete { street, pots } => {
                info!("{street} complete, {} pots {}", pots.pots.len(), pots.total);
            }
            HandEvent::PotsAwarded(awards) => {
                for award in awards {
                    for winner in &award.winners {
                        match &award.hand {
                            Some(hand) => info!(
                                "Seat {} wins {} with {}",
                                winner.seat,
                                winner.chips,
                                hand.category()
                            ),
                            None => info!("Seat {} wins {}", winner.seat, winner.chips),
                        }
                    }
                }
            }
        }
    }
}

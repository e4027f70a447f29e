// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pots distribution.
use log::info;
use serde::{Deserialize, Serialize};

use crate::{
    error::GameError,
    player::Players,
    poker::{Card, Chips, HandValue, PlayerCards},
    pot::Pot,
};

/// The chips a player won from a pot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Winner {
    /// The winner seat.
    pub seat: usize,
    /// The chips won.
    pub chips: Chips,
}

/// How a pot was awarded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PotAward {
    /// The pot chips.
    pub amount: Chips,
    /// The pot winners in table order.
    pub winners: Vec<Winner>,
    /// The winning hand, `None` if the pot was not contested.
    #[serde(skip)]
    pub hand: Option<HandValue>,
}

/// Awards every pot to the only player left in the hand.
///
/// No hand is evaluated.
pub fn award_uncontested(pots: &[Pot], seat: usize) -> Vec<PotAward> {
    pots.iter()
        .map(|pot| PotAward {
            amount: pot.amount,
            winners: vec![Winner {
                seat,
                chips: pot.amount,
            }],
            hand: None,
        })
        .collect()
}

/// Awards each pot to the best hands among its eligible players.
///
/// Ties split the pot, the chips left from the integer division go one at a
/// time to the tied winners in table order starting left of the button. A pot
/// with a single eligible player is awarded without evaluating the hand.
pub fn resolve(pots: &[Pot], players: &Players, board: &[Card]) -> Result<Vec<PotAward>, GameError> {
    let mut awards = Vec::with_capacity(pots.len());

    for pot in pots {
        let award = match pot.eligible.as_slice() {
            [] => {
                return Err(GameError::Inconsistent(format!(
                    "pot of {} has no eligible players",
                    pot.amount
                )));
            }
            [seat] => PotAward {
                amount: pot.amount,
                winners: vec![Winner {
                    seat: *seat,
                    chips: pot.amount,
                }],
                hand: None,
            },
            eligible => {
                let mut values = Vec::with_capacity(eligible.len());
                for &seat in eligible {
                    let player = players.get(seat).ok_or_else(|| {
                        GameError::Inconsistent(format!("no player at seat {seat}"))
                    })?;

                    if player.hole_cards == PlayerCards::None {
                        return Err(GameError::Inconsistent(format!(
                            "seat {seat} has no cards at showdown"
                        )));
                    }

                    let value = HandValue::eval(&player.hole_cards.with_board(board))?;
                    values.push((seat, value));
                }

                let Some(best) = values.iter().map(|(_, v)| *v).max() else {
                    continue;
                };

                // Winners in table order for the odd chips.
                let winners = players
                    .table_order()
                    .filter(|seat| values.iter().any(|(s, v)| s == seat && *v == best))
                    .collect::<Vec<_>>();

                PotAward {
                    amount: pot.amount,
                    winners: split(pot.amount, &winners),
                    hand: Some(best),
                }
            }
        };

        for winner in &award.winners {
            if let Some(player) = players.get(winner.seat) {
                info!("{} wins {} from a pot of {}", player.name, winner.chips, award.amount);
            }
        }

        awards.push(award);
    }

    Ok(awards)
}

/// Splits chips between winners, the first winners get the odd chips.
fn split(amount: Chips, seats: &[usize]) -> Vec<Winner> {
    let n = seats.len() as u32;
    let share = amount / n;
    let odd = (amount % n).amount() as usize;

    seats
        .iter()
        .enumerate()
        .map(|(idx, &seat)| Winner {
            seat,
            chips: if idx < odd {
                share + Chips::new(1)
            } else {
                share
            },
        })
        .collect()
}

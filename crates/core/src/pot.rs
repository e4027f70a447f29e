// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Main pot and side pots.
use serde::{Deserialize, Serialize};

use crate::poker::Chips;

/// A pot that contains players bets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pot {
    /// The pot chips.
    pub amount: Chips,
    /// The seats that can win this pot, in seat order.
    pub eligible: Vec<usize>,
}

/// Tracks the chips each seat put in the pot during the hand.
///
/// Pots are not stored, they are computed from the contributions with
/// [PotManager::pots] so that they are always consistent with the bets.
#[derive(Debug, Clone)]
pub struct PotManager {
    contributions: Vec<Chips>,
    folded: Vec<bool>,
}

impl PotManager {
    /// Creates a pot manager for the given number of seats.
    pub fn new(seats: usize) -> Self {
        Self {
            contributions: vec![Chips::ZERO; seats],
            folded: vec![false; seats],
        }
    }

    /// Adds chips to a seat contribution.
    pub fn contribute(&mut self, seat: usize, chips: Chips) {
        self.contributions[seat] += chips;
    }

    /// Marks a seat as folded, its chips stay in the pots.
    pub fn fold(&mut self, seat: usize) {
        self.folded[seat] = true;
    }

    /// Total chips in all pots.
    pub fn total(&self) -> Chips {
        self.contributions.iter().copied().sum()
    }

    /// Computes the main pot followed by the side pots.
    ///
    /// Each distinct contribution level creates a layer that holds the level
    /// increment from every seat that contributed at least that much, and that
    /// can be won by the non folded seats at or above the level. Adjacent
    /// layers with the same eligible seats are merged, a layer that no one can
    /// win goes to the layer below it.
    pub fn pots(&self) -> Vec<Pot> {
        let mut levels = self
            .contributions
            .iter()
            .copied()
            .filter(|&c| c > Chips::ZERO)
            .collect::<Vec<_>>();
        levels.sort();
        levels.dedup();

        let mut pots = Vec::<Pot>::new();
        let mut prev_level = Chips::ZERO;

        for level in levels {
            let contributors = self.contributions.iter().filter(|&&c| c >= level).count();
            let amount = (level - prev_level) * contributors as u32;
            prev_level = level;

            let eligible = (0..self.contributions.len())
                .filter(|&seat| !self.folded[seat] && self.contributions[seat] >= level)
                .collect::<Vec<_>>();

            match pots.last_mut() {
                Some(last) if eligible.is_empty() || last.eligible == eligible => {
                    last.amount += amount;
                }
                _ => pots.push(Pot { amount, eligible }),
            }
        }

        pots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager(contributions: &[u32]) -> PotManager {
        let mut pm = PotManager::new(contributions.len());
        for (seat, &c) in contributions.iter().enumerate() {
            pm.contribute(seat, Chips::new(c));
        }
        pm
    }

    fn pot(amount: u32, eligible: &[usize]) -> Pot {
        Pot {
            amount: Chips::new(amount),
            eligible: eligible.to_vec(),
        }
    }

    #[test]
    fn single_pot() {
        let pm = manager(&[100, 100, 100]);
        assert_eq!(pm.pots(), vec![pot(300, &[0, 1, 2])]);
        assert_eq!(pm.total(), Chips::new(300));
    }

    #[test]
    fn short_all_in_side_pot() {
        let pm = manager(&[50, 200, 200]);
        assert_eq!(pm.pots(), vec![pot(150, &[0, 1, 2]), pot(300, &[1, 2])]);
    }

    #[test]
    fn multiple_all_in_levels() {
        let pm = manager(&[25, 75, 150, 150]);
        assert_eq!(
            pm.pots(),
            vec![pot(100, &[0, 1, 2, 3]), pot(150, &[1, 2, 3]), pot(150, &[2, 3])]
        );
    }

    #[test]
    fn folded_chips_stay_in_pot() {
        let mut pm = manager(&[50, 100, 100]);
        pm.fold(0);

        // The folded seat level does not create a separate pot.
        assert_eq!(pm.pots(), vec![pot(250, &[1, 2])]);
    }

    #[test]
    fn folded_chips_above_everyone() {
        let mut pm = manager(&[300, 100, 150]);
        pm.fold(0);
        assert_eq!(pm.pots(), vec![pot(300, &[1, 2]), pot(250, &[2])]);
        assert_eq!(pm.pots().iter().map(|p| p.amount).sum::<Chips>(), pm.total());
    }

    #[test]
    fn pots_are_idempotent() {
        let mut pm = manager(&[10, 20, 0, 70]);
        pm.fold(1);

        let pots = pm.pots();
        assert_eq!(pots, pm.pots());
        assert_eq!(pots.iter().map(|p| p.amount).sum::<Chips>(), Chips::new(100));
        assert!(pots.iter().all(|p| !p.eligible.contains(&1)));
        assert!(pots.iter().all(|p| !p.eligible.contains(&2)));
    }

    #[test]
    fn empty_pots() {
        assert!(PotManager::new(3).pots().is_empty());
    }
}

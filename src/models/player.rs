use serde::Serialize;

use super::position::{QuadrantPosition, SectorPosition};
use crate::config::GameConfig;

/// The player's starship.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    pub quadrant: QuadrantPosition,
    pub sector: SectorPosition,
    pub energy: f64,
    pub max_energy: f64,
    pub shields: f64,
    pub torpedoes: u32,
    pub alive: bool,
    pub docked: bool,
}

impl Player {
    pub fn new(quadrant: QuadrantPosition, sector: SectorPosition, config: &GameConfig) -> Self {
        Player {
            quadrant,
            sector,
            energy: config.initial_energy,
            max_energy: config.initial_energy,
            shields: config.initial_shields,
            torpedoes: config.initial_torpedoes,
            alive: true,
            docked: false,
        }
    }

    /// Deduct energy, never below zero.
    pub fn spend_energy(&mut self, amount: f64) {
        self.energy = (self.energy - amount).max(0.0);
    }

    /// Use one torpedo. Returns false when the tubes are empty.
    pub fn consume_torpedo(&mut self) -> bool {
        match self.torpedoes.checked_sub(1) {
            Some(left) => {
                self.torpedoes = left;
                true
            }
            None => false,
        }
    }

    /// Move as much energy into the shields as the reserve and cap allow.
    /// Returns the amount moved, or None if there was nothing to move.
    pub fn transfer_to_shields(&mut self, reserve: f64, cap: f64) -> Option<f64> {
        let amount = (self.energy - reserve).min(cap - self.shields);
        if amount <= 0.0 {
            return None;
        }
        self.energy -= amount;
        self.shields += amount;
        Some(amount)
    }

    /// Absorb incoming fire: shields first, remainder against the hull (energy).
    /// Returns the hull damage taken.
    pub fn absorb_fire(&mut self, damage: f64) -> f64 {
        if self.shields >= damage {
            self.shields -= damage;
            return 0.0;
        }
        let hull = damage - self.shields;
        self.shields = 0.0;
        self.energy = (self.energy - hull).max(0.0);
        hull
    }

    /// Check if the ship is adjacent to (or at) the given sector.
    pub fn is_adjacent_to(&self, pos: SectorPosition) -> bool {
        (self.sector.x - pos.x).abs() <= 1 && (self.sector.y - pos.y).abs() <= 1
    }

    /// Resupply at a starbase.
    pub fn dock(&mut self, torpedoes: u32, shield_cap: f64) {
        self.docked = true;
        self.energy = self.max_energy;
        self.torpedoes = torpedoes;
        self.shields = shield_cap;
    }
}

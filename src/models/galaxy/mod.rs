//! Galaxy model
//!
//! The 8x8 grid of quadrant summaries plus the galaxy-wide count of
//! Klingons still alive, kept in step with the per-quadrant counts.

mod generation;
mod quadrant_ops;

use serde::Serialize;

use super::constants::GALAXY_SIZE;
use super::position::QuadrantPosition;
use super::quadrant::QuadrantSummary;
use crate::random::RandomSource;

pub use generation::generate_galaxy;
pub use quadrant_ops::populate_sector;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Galaxy {
    /// 8x8 grid of quadrant data, indexed quadrants[y][x].
    quadrants: [[QuadrantSummary; GALAXY_SIZE]; GALAXY_SIZE],
    remaining_klingons: u32,
}

impl Galaxy {
    /// Generate a fresh galaxy from the given random source.
    pub fn generate(rng: &mut dyn RandomSource) -> Self {
        Self::from_quadrants(generate_galaxy(rng))
    }

    /// Build a galaxy from explicit quadrant data, deriving the Klingon total.
    pub fn from_quadrants(quadrants: [[QuadrantSummary; GALAXY_SIZE]; GALAXY_SIZE]) -> Self {
        let remaining_klingons = quadrants.iter().flatten().map(|q| q.klingons).sum();
        Galaxy {
            quadrants,
            remaining_klingons,
        }
    }

    // ========== Accessor Methods ==========

    pub fn quadrants(&self) -> &[[QuadrantSummary; GALAXY_SIZE]; GALAXY_SIZE] {
        &self.quadrants
    }

    pub fn quadrant(&self, pos: QuadrantPosition) -> Option<&QuadrantSummary> {
        if !pos.in_bounds() {
            return None;
        }
        Some(&self.quadrants[pos.y as usize][pos.x as usize])
    }

    fn quadrant_mut(&mut self, pos: QuadrantPosition) -> Option<&mut QuadrantSummary> {
        if !pos.in_bounds() {
            return None;
        }
        Some(&mut self.quadrants[pos.y as usize][pos.x as usize])
    }

    /// Galaxy-wide count of live Klingons.
    pub fn remaining_klingons(&self) -> u32 {
        self.remaining_klingons
    }

    pub fn total_starbases(&self) -> u32 {
        self.quadrants.iter().flatten().map(|q| q.starbases).sum()
    }

    /// Sum of the per-quadrant Klingon counts. Always equals
    /// [`Galaxy::remaining_klingons`].
    pub fn klingon_sum(&self) -> u32 {
        self.quadrants.iter().flatten().map(|q| q.klingons).sum()
    }

    // ========== Atomic Update Methods ==========

    /// Record a Klingon kill in the given quadrant, updating both counts.
    /// Returns false (and changes nothing) if that quadrant has none left.
    pub fn destroy_klingon(&mut self, pos: QuadrantPosition) -> bool {
        let Some(quadrant) = self.quadrant_mut(pos) else {
            return false;
        };
        if quadrant.klingons == 0 {
            return false;
        }
        quadrant.klingons -= 1;
        self.remaining_klingons = self.remaining_klingons.saturating_sub(1);
        true
    }

    /// Record a destroyed starbase in the given quadrant.
    pub fn destroy_starbase(&mut self, pos: QuadrantPosition) -> bool {
        match self.quadrant_mut(pos) {
            Some(quadrant) if quadrant.starbases > 0 => {
                quadrant.starbases -= 1;
                true
            }
            _ => false,
        }
    }

    /// Mark a quadrant as revealed by a long range scan.
    /// Returns its summary, or None when the position is off the map.
    pub fn scan(&mut self, pos: QuadrantPosition) -> Option<QuadrantSummary> {
        let quadrant = self.quadrant_mut(pos)?;
        quadrant.scanned = true;
        Some(*quadrant)
    }
}

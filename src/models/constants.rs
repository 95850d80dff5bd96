use serde::Serialize;

pub const GALAXY_SIZE: usize = 8;
pub const SECTOR_SIZE: usize = 8;

pub const INITIAL_ENERGY: f64 = 3000.0;
pub const INITIAL_TORPEDOES: u32 = 10;
pub const INITIAL_SHIELDS: f64 = 0.0;
pub const INITIAL_STARDATE: f64 = 3100.0;
/// Mission length in stardates, counted from the initial stardate.
pub const TIME_LIMIT: f64 = 30.0;

/// Energy charged per one-sector move, regardless of outcome.
pub const WARP_ENERGY_COST: f64 = 10.0;
pub const MOVE_TIME_COST: f64 = 0.1;

pub const PHASER_EFFICIENCY: f64 = 1.0;
pub const PHASER_VARIANCE: i32 = 10;

pub const SHIELD_CAP: f64 = 2000.0;
/// Energy that a shield transfer always leaves in the main reserves.
pub const SHIELD_ENERGY_RESERVE: f64 = 100.0;

pub const KLINGON_MAX_HP: i32 = 200;
pub const KLINGON_MIN_POWER: i32 = 50;
pub const KLINGON_MAX_POWER: i32 = 250;

/// Torpedo step budget as a multiple of the sector width.
pub const TORPEDO_RANGE_FACTOR: f64 = 1.5;

/// Unit-draw thresholds for the Klingon count of a quadrant, highest first.
pub const KLINGON_THRESHOLDS: [(f64, u32); 3] = [(0.90, 3), (0.80, 2), (0.60, 1)];
pub const STARBASE_THRESHOLD: f64 = 0.95;
pub const MIN_STARS: i32 = 1;
pub const MAX_STARS: i32 = 8;

/// Ship condition shown to the player. Derived from the live sector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AlertLevel {
    Green,
    Red,
}

impl AlertLevel {
    pub fn label(&self) -> &'static str {
        match self {
            AlertLevel::Green => "GREEN",
            AlertLevel::Red => "RED",
        }
    }
}

use serde::Serialize;
use std::fmt;

use super::constants::{GALAXY_SIZE, SECTOR_SIZE};

/// A position within the 8x8 galaxy (quadrant coordinates).
/// Values range 0-7. (0,0) is upper-left, (7,7) is lower-right.
/// X increases left-to-right, Y increases top-to-bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct QuadrantPosition {
    pub x: i32,
    pub y: i32,
}

impl QuadrantPosition {
    pub fn new(x: i32, y: i32) -> Self {
        QuadrantPosition { x, y }
    }

    pub fn in_bounds(&self) -> bool {
        let size = GALAXY_SIZE as i32;
        (0..size).contains(&self.x) && (0..size).contains(&self.y)
    }
}

/// Rendered 1-based, as the player reads it.
impl fmt::Display for QuadrantPosition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.x + 1, self.y + 1)
    }
}

/// A position within an 8x8 sector grid.
/// Values range 0-7, same orientation as [`QuadrantPosition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SectorPosition {
    pub x: i32,
    pub y: i32,
}

impl SectorPosition {
    pub fn new(x: i32, y: i32) -> Self {
        SectorPosition { x, y }
    }

    pub fn in_bounds(&self) -> bool {
        let size = SECTOR_SIZE as i32;
        (0..size).contains(&self.x) && (0..size).contains(&self.y)
    }
}

impl fmt::Display for SectorPosition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.x + 1, self.y + 1)
    }
}

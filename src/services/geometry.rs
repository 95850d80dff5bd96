//! Sector geometry
//!
//! Screen coordinates: x grows to the right, y grows downward. Headings
//! and bearings are polar with 0° = east and 90° = north (up the screen).

use crate::models::position::SectorPosition;

/// Euclidean distance between two sector positions.
pub fn calculate_distance(from: SectorPosition, to: SectorPosition) -> f64 {
    let dx = (to.x - from.x) as f64;
    let dy = (to.y - from.y) as f64;
    (dx * dx + dy * dy).sqrt()
}

/// King-move distance; 1 means adjacent, diagonals included.
pub fn chebyshev_distance(from: SectorPosition, to: SectorPosition) -> i32 {
    (to.x - from.x).abs().max((to.y - from.y).abs())
}

/// Bearing in degrees `[0, 360)` from one sector to another.
pub fn calculate_bearing(from: SectorPosition, to: SectorPosition) -> f64 {
    let dx = (to.x - from.x) as f64;
    let dy = (from.y - to.y) as f64;
    let degrees = dy.atan2(dx).to_degrees();
    if degrees < 0.0 {
        degrees + 360.0
    } else {
        degrees
    }
}

pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

/// Unit step in screen coordinates for a polar heading.
pub fn heading_step(degrees: f64) -> (f64, f64) {
    let theta = degrees_to_radians(degrees);
    (theta.cos(), -theta.sin())
}

/// Round half-up to the nearest cell index.
pub fn round_to_cell(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

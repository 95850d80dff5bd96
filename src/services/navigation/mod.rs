//! Navigation system
//!
//! One-sector moves with quadrant wrapping, quadrant entry and docking.

mod course;
mod movement;

pub use course::calculate_step;
pub use movement::{update_docking, warp};

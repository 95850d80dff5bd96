//! Game services
//!
//! The rules behind each command: combat, navigation, scanning and the
//! library computer. Every handler mutates the state it is given and
//! returns whether the action passed a turn.

pub mod combat;
pub mod computer;
pub mod geometry;
pub mod navigation;
pub mod scan;

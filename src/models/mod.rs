//! Domain models
//!
//! This module contains all domain models representing game entities
//! and concepts. Models are pure data structures with minimal logic.

pub mod constants;
pub mod entity;
pub mod errors;
pub mod galaxy;
pub mod message_log;
pub mod navigation_types;
pub mod player;
pub mod position;
pub mod quadrant;
pub mod state;

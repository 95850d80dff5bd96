//! User interface and presentation
//!
//! Presenters turn game state and captain's log entries into terminal text,
//! keeping formatting out of the turn engine.

pub mod presenters;

//! Sector Trek
//!
//! A turn-based starship game in the tradition of the 1971 Star Trek
//! text game, built around a pure turn engine.
//!
//! # Overview
//!
//! The galaxy is an 8x8 grid of quadrants, each an 8x8 grid of sectors.
//! The player moves the Enterprise one sector at a time, fires phasers and
//! torpedoes, and must destroy every Klingon before the stardate deadline.
//! Each command is applied by [`GameEngine::execute`], which takes the
//! current state and returns the next one together with whether a turn
//! passed. All randomness comes from a caller-supplied [`RandomSource`].
//!
//! # Modules
//!
//! - [`game_engine`] - Commands and the turn transition
//! - [`models`] - Domain models (galaxy, entities, player, log, state)
//! - [`services`] - Rules behind each command (combat, navigation, scanning)
//! - [`config`] - Tunable values, loadable from JSON
//! - [`random`] - Random source abstraction and a scripted implementation
//! - [`io`] - Input/output abstractions for testing
//! - [`ui`] - Presentation of state and log entries
//! - [`cli`] - Command-line arguments and the interactive session
//!
//! # Example
//!
//! ```rust
//! use sector_trek::{Command, GameEngine};
//!
//! let engine = GameEngine::default();
//! let (state, mut rng) = engine.new_game_seeded(42);
//! let outcome = engine.execute(&state, Command::LongRangeScan, &mut rng);
//! assert!(!outcome.turn_passed);
//! ```

pub mod cli;
pub mod config;
pub mod game_engine;
pub mod io;
pub mod models;
pub mod random;
pub mod services;
pub mod ui;

// Re-export commonly used types
pub use config::GameConfig;
pub use game_engine::{Command, CommandKind, DefeatReason, GameEngine, GameStatus, TurnOutcome};
pub use models::state::GameState;
pub use random::{RandomSource, ScriptedRandom};

//! Turn engine
//!
//! A pure transition from one [`GameState`] to the next. The engine holds
//! only configuration; the caller owns the state and the random source and
//! threads both through every call.
//!
//! A turn runs in two phases: the command handler, then the resolution
//! phase (victory check, Klingon counter-fire, clock check). Counter-fire
//! only happens when the command passed a turn.

mod command;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::models::constants::SECTOR_SIZE;
use crate::models::galaxy::{populate_sector, Galaxy};
use crate::models::player::Player;
use crate::models::position::{QuadrantPosition, SectorPosition};
use crate::models::state::GameState;
use crate::random::RandomSource;
use crate::services::{combat, computer, navigation, scan};

pub use crate::models::state::{DefeatReason, GameStatus};
pub use command::{Command, CommandKind};

/// Result of executing one command.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnOutcome {
    pub state: GameState,
    /// True when the command advanced the world (a completed move or any
    /// weapons fire that passed validation).
    pub turn_passed: bool,
}

/// Core game engine applying commands to game states
#[derive(Debug, Clone, Default)]
pub struct GameEngine {
    config: GameConfig,
}

impl GameEngine {
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Creates a fresh game: generates the galaxy, drops the ship into a
    /// random sector of a random quadrant and populates that sector.
    pub fn new_game(&self, rng: &mut dyn RandomSource) -> GameState {
        let galaxy = Galaxy::generate(rng);

        let max = SECTOR_SIZE as i32 - 1;
        let quadrant = QuadrantPosition::new(rng.next_in_range(0, max), rng.next_in_range(0, max));
        let sector = SectorPosition::new(rng.next_in_range(0, max), rng.next_in_range(0, max));

        let summary = galaxy.quadrant(quadrant).copied().unwrap_or_default();
        let entities = populate_sector(&summary, sector, self.config.klingon_max_hp, rng);
        let player = Player::new(quadrant, sector, &self.config);

        let mut state = GameState::new(galaxy, player, entities, &self.config);
        let klingons = state.remaining_klingons();
        state.log.success("SECTOR TREK initialized.");
        state
            .log
            .info("Orders: Destroy all Klingon warships in the galaxy.");
        state
            .log
            .info(format!("You have {} solar days.", self.config.time_limit));
        state.log.info(format!("Klingons detected: {}", klingons));
        state.log.info("Good luck, Captain.");

        info!(quadrant = %quadrant, sector = %sector, klingons, "new game");
        state
    }

    /// Convenience for front ends: a new game from a seed.
    pub fn new_game_seeded(&self, seed: u64) -> (GameState, StdRng) {
        let mut rng = StdRng::seed_from_u64(seed);
        let state = self.new_game(&mut rng);
        (state, rng)
    }

    /// Apply one command and resolve the turn.
    ///
    /// The input state is never modified. Once the game is over every
    /// command is ignored: the state comes back unchanged and no turn passes.
    pub fn execute(
        &self,
        state: &GameState,
        command: Command,
        rng: &mut dyn RandomSource,
    ) -> TurnOutcome {
        let mut next = state.clone();
        if next.is_game_over() {
            debug!(%command, "game over, command ignored");
            return TurnOutcome {
                state: next,
                turn_passed: false,
            };
        }

        debug!(%command, stardate = next.stardate, "executing command");
        let config = &self.config;
        let turn_passed = match command {
            Command::ShortRangeScan => scan::short_range_scan(&mut next),
            Command::LongRangeScan => scan::long_range_scan(&mut next),
            Command::Warp { direction } => navigation::warp(&mut next, direction, config, rng),
            Command::Phasers { amount } => combat::fire_phasers(&mut next, amount, config, rng),
            Command::Torpedo { heading } => combat::fire_torpedo(&mut next, heading, config),
            Command::Shields => combat::shield_control(&mut next, config),
            Command::Computer => computer::library_computer(&mut next),
        };

        self.resolve_turn(&mut next, turn_passed, rng);
        TurnOutcome {
            state: next,
            turn_passed,
        }
    }

    /// Post-action checks in fixed order, each skipped once the game is over:
    /// victory, Klingon counter-fire (only if a turn passed), then the clock.
    fn resolve_turn(&self, state: &mut GameState, turn_passed: bool, rng: &mut dyn RandomSource) {
        if !state.is_game_over() && state.remaining_klingons() == 0 {
            state.status = GameStatus::Victory;
            state
                .log
                .success("MISSION ACCOMPLISHED. The galaxy is safe.");
            info!(stardate = state.stardate, "victory");
        }

        if !state.is_game_over() && turn_passed {
            combat::klingons_fire(state, &self.config, rng);
        }

        if !state.is_game_over() && state.stardate > state.deadline {
            state.status = GameStatus::Defeat(DefeatReason::TimeExpired);
            state.log.danger("TIME LIMIT EXCEEDED. Mission Failed.");
            info!(stardate = state.stardate, deadline = state.deadline, "time expired");
        }

        debug!(status = ?state.status, turn_passed, "turn resolved");
    }
}

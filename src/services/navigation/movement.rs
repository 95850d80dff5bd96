use tracing::{debug, info, warn};

use crate::config::GameConfig;
use crate::models::galaxy::populate_sector;
use crate::models::navigation_types::Course;
use crate::models::position::{QuadrantPosition, SectorPosition};
use crate::models::state::GameState;
use crate::random::RandomSource;

use super::course::calculate_step;

/// Move the ship one sector along a keypad course (Command "warp")
///
/// 5 or an unknown code holds position at no cost. Any real move is paid
/// for up front: energy is charged and the stardate advances before the
/// destination is checked, so a move blocked by the galactic barrier or an
/// occupied sector still costs. Only a completed move passes the turn.
///
/// Entering a new quadrant regenerates the sector from that quadrant's
/// summary. After every completed move the docking state is re-evaluated.
pub fn warp(
    state: &mut GameState,
    code: i32,
    config: &GameConfig,
    rng: &mut dyn RandomSource,
) -> bool {
    let course = Course::from_keypad(code);
    let (dx, dy) = match course {
        Course::Hold => {
            state.log.info("Holding position.");
            return false;
        }
        Course::Step { dx, dy } => (dx, dy),
    };

    if state.player.energy < config.warp_energy_cost {
        warn!(energy = state.player.energy, "not enough energy to move");
        state.log.warning("Insufficient energy for maneuvers.");
        return false;
    }
    state.player.spend_energy(config.warp_energy_cost);
    state.stardate += config.move_time_cost;

    let (quadrant, sector) = calculate_step(state.player.quadrant, state.player.sector, dx, dy);

    if !quadrant.in_bounds() {
        warn!(quadrant = ?quadrant, "galactic barrier");
        state
            .log
            .warning("Galactic Barrier reached. Reversing course.");
        return false;
    }

    if quadrant != state.player.quadrant {
        enter_quadrant(state, quadrant, sector, config, rng);
    } else {
        if let Some(blocker) = state.entity_at(sector) {
            let name = blocker.kind.name();
            warn!(sector = %sector, blocker = name, "navigation blocked");
            state
                .log
                .warning(format!("Collision alert! Navigation blocked by {}", name));
            return false;
        }
        state.player.sector = sector;
        state.sync_ship_entity();
        state
            .log
            .info(format!("Course plotted. Arrived at S {}.", sector));
    }

    debug!(course = %course, quadrant = %state.player.quadrant, sector = %state.player.sector, "moved");
    update_docking(state, config);
    true
}

/// Move into a new quadrant and materialize its sector around the ship.
fn enter_quadrant(
    state: &mut GameState,
    quadrant: QuadrantPosition,
    sector: SectorPosition,
    config: &GameConfig,
    rng: &mut dyn RandomSource,
) {
    state.player.quadrant = quadrant;
    state.player.sector = sector;
    state.log.info(format!("Entering Quadrant {}", quadrant));

    let summary = state.galaxy.quadrant(quadrant).copied().unwrap_or_default();
    state.sector = populate_sector(&summary, sector, config.klingon_max_hp, rng);

    let klingons = summary.klingons;
    if klingons > 0 {
        state
            .log
            .danger(format!("COMBAT ALERT: {} KLINGONS DETECTED", klingons));
    } else {
        state.log.info("Sector clear.");
    }
    info!(quadrant = %quadrant, klingons, "entered quadrant");
}

/// Dock if a starbase is within one sector (diagonals included), otherwise
/// undock. Docking fully resupplies the ship.
pub fn update_docking(state: &mut GameState, config: &GameConfig) {
    let near_starbase = state
        .starbases()
        .any(|base| state.player.is_adjacent_to(base.position));

    if near_starbase {
        state.player.dock(config.initial_torpedoes, config.shield_cap);
        state.log.success("Docked with Starbase. Systems replenishing.");
    } else {
        state.player.docked = false;
    }
}

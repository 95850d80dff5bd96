use tracing::{info, warn};

use crate::config::GameConfig;
use crate::models::constants::SECTOR_SIZE;
use crate::models::entity::{EntityId, EntityKind};
use crate::models::position::SectorPosition;
use crate::models::state::{DefeatReason, GameState, GameStatus};
use crate::services::geometry::{heading_step, round_to_cell};

/// Where a torpedo's flight ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TorpedoImpact {
    Entity {
        id: EntityId,
        kind: EntityKind,
        at: SectorPosition,
    },
    OutOfRange,
    Spent,
}

/// Trace the torpedo path from `origin` along `heading` degrees.
///
/// Each step advances one unit and is rounded half-up to a cell. The ship's
/// own cell is never a target. Stops at the first occupied cell, when the
/// path leaves the sector, or when `steps` is used up.
pub fn trace_torpedo(
    state: &GameState,
    origin: SectorPosition,
    heading: f64,
    steps: usize,
) -> TorpedoImpact {
    let (dx, dy) = heading_step(heading);
    let mut x = origin.x as f64;
    let mut y = origin.y as f64;

    for _ in 0..steps {
        x += dx;
        y += dy;
        let cell = SectorPosition::new(round_to_cell(x), round_to_cell(y));
        if !cell.in_bounds() {
            return TorpedoImpact::OutOfRange;
        }
        if let Some(entity) = state.entity_at(cell) {
            return TorpedoImpact::Entity {
                id: entity.id,
                kind: entity.kind,
                at: cell,
            };
        }
    }

    TorpedoImpact::Spent
}

/// Launch a photon torpedo along a polar heading (0° = east, 90° = north).
pub fn fire_torpedo(state: &mut GameState, heading: f64, config: &GameConfig) -> bool {
    if state.player.torpedoes == 0 {
        warn!("torpedo tubes empty");
        state.log.warning("Torpedo tubes empty!");
        return false;
    }
    if !heading.is_finite() {
        warn!(heading, "invalid torpedo heading");
        state.log.warning("Invalid firing angle.");
        return false;
    }

    state.player.consume_torpedo();
    state
        .log
        .info(format!("Torpedo fired at heading {}°...", heading));

    let steps = config.torpedo_steps(SECTOR_SIZE);
    match trace_torpedo(state, state.player.sector, heading, steps) {
        TorpedoImpact::Entity { id, kind, at } => match kind {
            EntityKind::Klingon { .. } => {
                state.remove_entity(id);
                let quadrant = state.player.quadrant;
                state.galaxy.destroy_klingon(quadrant);
                state.log.success("DIRECT HIT! Klingon vessel destroyed.");
            }
            EntityKind::Starbase => {
                state.remove_entity(id);
                let quadrant = state.player.quadrant;
                state.galaxy.destroy_starbase(quadrant);
                state
                    .log
                    .danger("FEDERATION STARBASE DESTROYED! YOU TRAITOR!");
                state.status = GameStatus::Defeat(DefeatReason::StarbaseDestroyed);
                info!(sector = %at, "starbase destroyed by friendly fire");
            }
            EntityKind::Star => {
                state.log.info(format!("Torpedo absorbed by star at {}.", at));
            }
            EntityKind::Ship => {}
        },
        TorpedoImpact::OutOfRange => state.log.info("Torpedo missed (out of range)."),
        TorpedoImpact::Spent => state.log.info("Torpedo missed."),
    }

    true
}

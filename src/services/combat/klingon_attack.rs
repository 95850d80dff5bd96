use tracing::{debug, info};

use crate::config::GameConfig;
use crate::models::position::SectorPosition;
use crate::models::state::{DefeatReason, GameState, GameStatus};
use crate::random::RandomSource;

/// Klingons in the sector return fire.
///
/// Every surviving Klingon rolls its damage independently; the sum is taken
/// by the shields first and whatever is left by the hull. Returns true if
/// the ship was destroyed.
pub fn klingons_fire(state: &mut GameState, config: &GameConfig, rng: &mut dyn RandomSource) -> bool {
    let attackers: Vec<SectorPosition> = state.klingons().map(|k| k.position).collect();
    if attackers.is_empty() {
        return false;
    }

    let mut total = 0;
    for position in attackers {
        let damage = rng.next_in_range(config.klingon_min_power, config.klingon_max_power);
        total += damage;
        state
            .log
            .danger(format!("Klingon at {} fires! {} damage.", position, damage));
    }

    let hull = state.player.absorb_fire(total as f64);
    if hull > 0.0 {
        state
            .log
            .danger(format!("SHIELDS BUCKLED! Hull hit for {} units.", hull));
    }
    debug!(total, hull, shields = state.player.shields, energy = state.player.energy, "klingon volley");

    if state.player.energy <= 0.0 {
        state.player.energy = 0.0;
        state.player.alive = false;
        state.status = GameStatus::Defeat(DefeatReason::ShipDestroyed);
        state.log.danger("CRITICAL FAILURE. ENTERPRISE DESTROYED.");
        info!(stardate = state.stardate, "ship destroyed");
        return true;
    }

    false
}

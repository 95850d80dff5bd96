use tracing::{debug, warn};

use crate::config::GameConfig;
use crate::models::entity::{EntityId, EntityKind};
use crate::models::position::SectorPosition;
use crate::models::state::GameState;
use crate::random::RandomSource;
use crate::services::geometry::calculate_distance;

/// Check the requested phaser output against the ship's energy.
/// Returns the rejection message when the shot cannot be fired.
fn validate_phaser_amount(amount: f64, energy: f64) -> Result<f64, &'static str> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err("Invalid phaser setting.");
    }
    if energy < amount {
        return Err("Insufficient energy.");
    }
    Ok(amount)
}

/// Damage before variance: the shot is split evenly between targets and
/// falls off linearly with distance.
pub fn base_phaser_damage(amount: f64, targets: usize, distance: f64, efficiency: f64) -> i32 {
    let share = amount / targets as f64;
    (share / distance * efficiency).floor() as i32
}

/// Fire phasers at every Klingon in the sector.
///
/// Rejected settings cost nothing and do not pass the turn. A valid shot
/// always drains its energy and passes the turn, even when there is
/// nothing to hit.
pub fn fire_phasers(
    state: &mut GameState,
    amount: f64,
    config: &GameConfig,
    rng: &mut dyn RandomSource,
) -> bool {
    let amount = match validate_phaser_amount(amount, state.player.energy) {
        Ok(amount) => amount,
        Err(reason) => {
            warn!(amount, energy = state.player.energy, reason, "phasers rejected");
            state.log.warning(reason);
            return false;
        }
    };

    state.player.spend_energy(amount);
    state
        .log
        .info(format!("Firing Phasers with {} units...", amount));

    let from = state.player.sector;
    let targets: Vec<(EntityId, SectorPosition)> =
        state.klingons().map(|k| (k.id, k.position)).collect();

    if targets.is_empty() {
        state
            .log
            .info("Sensors confirm: Energy dissipated into space.");
        return true;
    }

    for (id, position) in &targets {
        let distance = calculate_distance(from, *position);
        let base = base_phaser_damage(amount, targets.len(), distance, config.phaser_efficiency);
        let variance = rng.next_in_range(-config.phaser_variance, config.phaser_variance);
        let damage = (base + variance).max(0);

        if hit_klingon(state, *id, damage) {
            state.log.success(format!("Target at {} hit for {} damage.", position, damage));
            state.log.success("TARGET DESTROYED.");
            state.remove_entity(*id);
            let quadrant = state.player.quadrant;
            state.galaxy.destroy_klingon(quadrant);
            debug!(target = %id, sector = %position, "klingon destroyed by phasers");
        } else {
            state.log.info(format!("Target at {} hit for {} damage.", position, damage));
        }
    }

    true
}

/// Apply damage to a Klingon. Returns true if it has no hit points left.
fn hit_klingon(state: &mut GameState, id: EntityId, damage: i32) -> bool {
    match state.entity_mut(id) {
        Some(entity) => match &mut entity.kind {
            EntityKind::Klingon { hit_points } => {
                *hit_points -= damage;
                *hit_points <= 0
            }
            _ => false,
        },
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::state::test_utils::{klingon, scenario, star};
    use crate::random::ScriptedRandom;

    fn config() -> GameConfig {
        GameConfig::default()
    }

    #[test]
    fn rejects_invalid_settings() {
        let mut state = scenario(SectorPosition::new(3, 3), &[klingon(6, 3)], 0);
        let mut rng = ScriptedRandom::default();

        for amount in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            assert!(!fire_phasers(&mut state, amount, &config(), &mut rng));
        }
        assert_eq!(state.player.energy, 3000.0);
        assert_eq!(state.log.iter().filter(|e| e.text == "Invalid phaser setting.").count(), 4);
    }

    #[test]
    fn rejects_amount_above_energy() {
        let mut state = scenario(SectorPosition::new(3, 3), &[klingon(6, 3)], 0);
        state.player.energy = 100.0;
        let mut rng = ScriptedRandom::default();

        assert!(!fire_phasers(&mut state, 150.0, &config(), &mut rng));
        assert_eq!(state.player.energy, 100.0);
        assert!(state.log.contains("Insufficient energy."));
    }

    #[test]
    fn empty_sector_dissipates() {
        let mut state = scenario(SectorPosition::new(3, 3), &[star(1, 1)], 0);
        let mut rng = ScriptedRandom::default();

        assert!(fire_phasers(&mut state, 500.0, &config(), &mut rng));
        assert_eq!(state.player.energy, 2500.0);
        assert!(state.log.contains("Energy dissipated into space."));
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    fn damage_falls_off_with_distance() {
        assert_eq!(base_phaser_damage(300.0, 1, 3.0, 1.0), 100);
        assert_eq!(base_phaser_damage(300.0, 2, 3.0, 1.0), 50);
        assert_eq!(base_phaser_damage(100.0, 1, 3.0, 1.0), 33);
    }

    #[test]
    fn hit_applies_variance() {
        let mut state = scenario(SectorPosition::new(3, 3), &[klingon(6, 3)], 0);
        let mut rng = ScriptedRandom::default();
        rng.push_in_range(-10, 10, 7);

        fire_phasers(&mut state, 300.0, &config(), &mut rng);
        let hp = state.entity_at(SectorPosition::new(6, 3)).and_then(|e| e.hit_points());
        assert_eq!(hp, Some(200 - 107));
        assert!(state.log.contains("Target at 7,4 hit for 107 damage."));
    }

    #[test]
    fn variance_never_heals() {
        let mut state = scenario(SectorPosition::new(0, 0), &[klingon(7, 7)], 0);
        let mut rng = ScriptedRandom::default();
        rng.push_in_range(-10, 10, -10);

        fire_phasers(&mut state, 10.0, &config(), &mut rng);
        let hp = state.entity_at(SectorPosition::new(7, 7)).and_then(|e| e.hit_points());
        assert_eq!(hp, Some(200));
    }

    #[test]
    fn kill_updates_counters() {
        let mut state = scenario(SectorPosition::new(3, 3), &[klingon(4, 3)], 2);
        let mut rng = ScriptedRandom::default();
        rng.push_in_range(-10, 10, 0);

        assert!(fire_phasers(&mut state, 500.0, &config(), &mut rng));
        assert_eq!(state.klingons().count(), 0);
        assert_eq!(state.current_quadrant().map(|q| q.klingons), Some(0));
        assert_eq!(state.remaining_klingons(), 2);
        assert!(state.log.contains("TARGET DESTROYED."));
    }

    #[test]
    fn split_between_targets() {
        let mut state = scenario(SectorPosition::new(3, 3), &[klingon(5, 3), klingon(3, 5)], 0);
        let mut rng = ScriptedRandom::default();
        rng.push_in_range(-10, 10, 0).push_in_range(-10, 10, 0);

        fire_phasers(&mut state, 400.0, &config(), &mut rng);
        let hps: Vec<_> = state.klingons().filter_map(|k| k.hit_points()).collect();
        assert_eq!(hps, vec![100, 100]);
    }
}

use tracing::warn;

use crate::config::GameConfig;
use crate::models::state::GameState;

/// Shield Control
///
/// Tops the shields up from main energy: the transfer is
/// `min(energy - reserve, cap - shields)`, so the reserve always stays in
/// the main banks and shields never exceed the cap. With nothing to
/// transfer the command only logs. Never passes a turn.
pub fn shield_control(state: &mut GameState, config: &GameConfig) -> bool {
    match state
        .player
        .transfer_to_shields(config.shield_energy_reserve, config.shield_cap)
    {
        Some(amount) => {
            state
                .log
                .info(format!("Transferred {} units to shields.", amount as i64));
        }
        None => {
            warn!(energy = state.player.energy, shields = state.player.shields, "shield transfer refused");
            state
                .log
                .warning("Insufficient energy reserves for shield transfer.");
        }
    }
    false
}

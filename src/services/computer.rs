use crate::models::state::GameState;
use crate::services::geometry::{calculate_bearing, calculate_distance};

/// A Klingon or starbase as seen by the targeting computer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetReading {
    pub name: &'static str,
    pub sector: crate::models::position::SectorPosition,
    pub distance: f64,
    pub bearing: f64,
}

/// Distance and bearing from the ship to every Klingon and starbase in
/// sector order.
pub fn target_readings(state: &GameState) -> Vec<TargetReading> {
    let from = state.player.sector;
    state
        .sector
        .iter()
        .filter(|e| e.is_klingon() || e.is_starbase())
        .map(|e| TargetReading {
            name: e.kind.name(),
            sector: e.position,
            distance: calculate_distance(from, e.position),
            bearing: calculate_bearing(from, e.position),
        })
        .collect()
}

/// Library Computer: logs one targeting line per Klingon or starbase.
/// No state change; never passes a turn.
pub fn library_computer(state: &mut GameState) -> bool {
    let readings = target_readings(state);
    if readings.is_empty() {
        state.log.info("Computer: No significant targets in sector.");
        return false;
    }

    state.log.info("Computer: Calculation results:");
    for r in readings {
        state.log.info(format!(
            "{} at {} -> Dist: {:.2}, Angle: {:.1}°",
            r.name, r.sector, r.distance, r.bearing
        ));
    }
    false
}

use tracing::debug;

use crate::models::galaxy::Galaxy;
use crate::models::position::QuadrantPosition;
use crate::models::quadrant::QuadrantSummary;
use crate::models::state::GameState;

/// Placeholder for neighbours beyond the galactic barrier.
pub const UNKNOWN_QUADRANT: &str = "***";

/// Short Range Sensor Scan. The sector view is always live, so this only
/// confirms the scan. Never passes a turn.
pub fn short_range_scan(state: &mut GameState) -> bool {
    state.log.info("Short Range Scan complete.");
    false
}

/// Long Range Sensor Scan over the 3x3 block of quadrants around the ship.
/// In-bounds quadrants are marked as scanned. Never passes a turn.
pub fn long_range_scan(state: &mut GameState) -> bool {
    let center = state.player.quadrant;
    let block = scan_block(&mut state.galaxy, center);

    state.log.info("Long Range Scan processing...");
    for row in block.iter() {
        let cells: Vec<String> = row
            .iter()
            .map(|cell| match cell {
                Some(summary) => summary.encoded(),
                None => UNKNOWN_QUADRANT.to_string(),
            })
            .collect();
        state.log.info(format!(": {} :", cells.join(" : ")));
    }

    debug!(quadrant = %center, "long range scan");
    false
}

/// Scan the 3x3 block centred on `center`, north row first.
/// Cells outside the galaxy are None.
pub fn scan_block(galaxy: &mut Galaxy, center: QuadrantPosition) -> [[Option<QuadrantSummary>; 3]; 3] {
    let mut block = [[None; 3]; 3];
    for (row, dy) in (-1..=1).enumerate() {
        for (col, dx) in (-1..=1).enumerate() {
            let pos = QuadrantPosition::new(center.x + dx, center.y + dy);
            block[row][col] = galaxy.scan(pos);
        }
    }
    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::constants::GALAXY_SIZE;

    fn galaxy() -> Galaxy {
        let mut quadrants = [[QuadrantSummary::new(0, 0, 4); GALAXY_SIZE]; GALAXY_SIZE];
        quadrants[0][1] = QuadrantSummary::new(3, 1, 8);
        Galaxy::from_quadrants(quadrants)
    }

    #[test]
    fn corner_block_has_unknowns() {
        let mut galaxy = galaxy();
        let block = scan_block(&mut galaxy, QuadrantPosition::new(0, 0));
        assert!(block[0].iter().all(Option::is_none));
        assert!(block[1][0].is_none());
        assert!(block[2][0].is_none());
        assert_eq!(block[1][2].map(|q| q.encoded()), Some("318".to_string()));
        assert_eq!(block[1][1].map(|q| q.encoded()), Some("004".to_string()));
    }

    #[test]
    fn scan_marks_only_in_bounds_neighbours() {
        let mut galaxy = galaxy();
        scan_block(&mut galaxy, QuadrantPosition::new(0, 0));
        let scanned = galaxy.quadrants().iter().flatten().filter(|q| q.scanned).count();
        assert_eq!(scanned, 4);
    }

    #[test]
    fn interior_block_scans_nine() {
        let mut galaxy = galaxy();
        let block = scan_block(&mut galaxy, QuadrantPosition::new(4, 4));
        assert!(block.iter().flatten().all(Option::is_some));
        let scanned = galaxy.quadrants().iter().flatten().filter(|q| q.scanned).count();
        assert_eq!(scanned, 9);
    }
}

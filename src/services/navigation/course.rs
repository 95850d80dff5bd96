use crate::models::constants::SECTOR_SIZE;
use crate::models::position::{QuadrantPosition, SectorPosition};

/// Step one sector along `(dx, dy)`.
///
/// A step off the edge of the sector wraps to the opposite edge and moves
/// the quadrant one over on that axis. The resulting quadrant may lie
/// outside the galaxy; the caller decides what to do about that.
pub fn calculate_step(
    quadrant: QuadrantPosition,
    sector: SectorPosition,
    dx: i32,
    dy: i32,
) -> (QuadrantPosition, SectorPosition) {
    let (qx, sx) = wrap_axis(quadrant.x, sector.x + dx);
    let (qy, sy) = wrap_axis(quadrant.y, sector.y + dy);
    (QuadrantPosition::new(qx, qy), SectorPosition::new(sx, sy))
}

fn wrap_axis(quadrant: i32, sector: i32) -> (i32, i32) {
    let size = SECTOR_SIZE as i32;
    if sector < 0 {
        (quadrant - 1, size - 1)
    } else if sector >= size {
        (quadrant + 1, 0)
    } else {
        (quadrant, sector)
    }
}

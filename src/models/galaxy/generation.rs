use crate::models::constants::{
    GALAXY_SIZE, KLINGON_THRESHOLDS, MAX_STARS, MIN_STARS, STARBASE_THRESHOLD,
};
use crate::models::quadrant::QuadrantSummary;
use crate::random::RandomSource;

/// Generate the 8x8 galaxy, one independent set of draws per quadrant
/// in row-major order.
///
/// No cross-quadrant guarantee is made: a galaxy may come out with no
/// starbases or no Klingons at all.
pub fn generate_galaxy(
    rng: &mut dyn RandomSource,
) -> [[QuadrantSummary; GALAXY_SIZE]; GALAXY_SIZE] {
    let mut quadrants = [[QuadrantSummary::default(); GALAXY_SIZE]; GALAXY_SIZE];

    for row in quadrants.iter_mut() {
        for cell in row.iter_mut() {
            *cell = generate_quadrant(rng);
        }
    }

    quadrants
}

fn generate_quadrant(rng: &mut dyn RandomSource) -> QuadrantSummary {
    let roll = rng.next_unit();
    let klingons = KLINGON_THRESHOLDS
        .iter()
        .find(|(threshold, _)| roll > *threshold)
        .map(|(_, count)| *count)
        .unwrap_or(0);

    let starbases = if rng.next_unit() > STARBASE_THRESHOLD { 1 } else { 0 };
    let stars = rng.next_in_range(MIN_STARS, MAX_STARS) as u32;

    QuadrantSummary::new(klingons, starbases, stars)
}

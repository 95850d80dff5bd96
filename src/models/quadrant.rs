use serde::Serialize;

/// Persistent data about a single quadrant in the galaxy.
/// Stores only counts; sector positions are not preserved between visits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct QuadrantSummary {
    pub klingons: u32,
    pub starbases: u32,
    pub stars: u32,
    /// Set once a long range scan has revealed this quadrant.
    pub scanned: bool,
}

impl QuadrantSummary {
    pub fn new(klingons: u32, starbases: u32, stars: u32) -> Self {
        QuadrantSummary {
            klingons,
            starbases,
            stars,
            scanned: false,
        }
    }

    /// The 3-digit scan code: klingons, starbases, stars (e.g. "105").
    pub fn encoded(&self) -> String {
        format!("{}{}{}", self.klingons, self.starbases, self.stars)
    }
}

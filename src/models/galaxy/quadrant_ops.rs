use std::collections::HashSet;

use crate::models::constants::SECTOR_SIZE;
use crate::models::entity::{Entity, EntityId, EntityKind};
use crate::models::position::SectorPosition;
use crate::models::quadrant::QuadrantSummary;
use crate::random::RandomSource;

/// Populate a quadrant's sector grid on entry.
///
/// The ship is placed first at its entry sector, then Klingons, starbases
/// and stars, each at a random sector not already taken. Ids are assigned
/// in placement order starting at 0 for the ship.
pub fn populate_sector(
    summary: &QuadrantSummary,
    entry: SectorPosition,
    klingon_hit_points: i32,
    rng: &mut dyn RandomSource,
) -> Vec<Entity> {
    let total = 1 + summary.klingons + summary.starbases + summary.stars;
    let mut entities = Vec::with_capacity(total as usize);
    let mut taken = HashSet::with_capacity(total as usize);

    taken.insert(entry);
    entities.push(Entity::new(EntityId(0), entry, EntityKind::Ship));

    let placements = [
        (summary.klingons, EntityKind::Klingon { hit_points: klingon_hit_points }),
        (summary.starbases, EntityKind::Starbase),
        (summary.stars, EntityKind::Star),
    ];

    for (count, kind) in placements {
        for _ in 0..count {
            let pos = find_random_empty_sector(&mut taken, rng);
            let id = EntityId(entities.len() as u32);
            entities.push(Entity::new(id, pos, kind));
        }
    }

    entities
}

/// Find a random free sector by picking random coordinates until one is free,
/// then reserve it.
fn find_random_empty_sector(
    taken: &mut HashSet<SectorPosition>,
    rng: &mut dyn RandomSource,
) -> SectorPosition {
    let max = SECTOR_SIZE as i32 - 1;
    loop {
        let pos = SectorPosition {
            x: rng.next_in_range(0, max),
            y: rng.next_in_range(0, max),
        };
        if taken.insert(pos) {
            return pos;
        }
    }
}

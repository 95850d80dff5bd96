use serde::Serialize;
use std::fmt;

use super::position::SectorPosition;

/// Identifier of an entity within the currently populated sector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What occupies a sector cell. Only Klingons carry hit points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum EntityKind {
    Ship,
    Klingon { hit_points: i32 },
    Starbase,
    Star,
}

impl EntityKind {
    pub fn name(&self) -> &'static str {
        match self {
            EntityKind::Ship => "Ship",
            EntityKind::Klingon { .. } => "Klingon",
            EntityKind::Starbase => "Starbase",
            EntityKind::Star => "Star",
        }
    }
}

/// A live object inside the loaded sector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Entity {
    pub id: EntityId,
    pub position: SectorPosition,
    pub kind: EntityKind,
}

impl Entity {
    pub fn new(id: EntityId, position: SectorPosition, kind: EntityKind) -> Self {
        Entity { id, position, kind }
    }

    pub fn is_klingon(&self) -> bool {
        matches!(self.kind, EntityKind::Klingon { .. })
    }

    pub fn is_starbase(&self) -> bool {
        self.kind == EntityKind::Starbase
    }

    pub fn is_ship(&self) -> bool {
        self.kind == EntityKind::Ship
    }

    /// Remaining hit points, for Klingons.
    pub fn hit_points(&self) -> Option<i32> {
        match self.kind {
            EntityKind::Klingon { hit_points } => Some(hit_points),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_klingons_have_hit_points() {
        let pos = SectorPosition::new(1, 1);
        let k = Entity::new(EntityId(1), pos, EntityKind::Klingon { hit_points: 200 });
        let s = Entity::new(EntityId(2), pos, EntityKind::Star);
        assert_eq!(k.hit_points(), Some(200));
        assert_eq!(s.hit_points(), None);
        assert!(k.is_klingon());
        assert!(!s.is_klingon());
    }

    #[test]
    fn kind_names() {
        assert_eq!(EntityKind::Starbase.name(), "Starbase");
        assert_eq!(EntityKind::Klingon { hit_points: 1 }.name(), "Klingon");
    }
}

//! Game state aggregate
//!
//! Everything the turn engine reads and writes: clock, galaxy, the entities
//! of the occupied sector, the ship and the captain's log. Sectors other
//! than the occupied one are not materialized; only their quadrant summary
//! survives.

use serde::Serialize;

use super::constants::AlertLevel;
use super::entity::{Entity, EntityId, EntityKind};
use super::galaxy::Galaxy;
use super::message_log::MessageLog;
use super::player::Player;
use super::position::{QuadrantPosition, SectorPosition};
use super::quadrant::QuadrantSummary;
use crate::config::GameConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason")]
pub enum GameStatus {
    Playing,
    Victory,
    Defeat(DefeatReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DefeatReason {
    /// Hull energy exhausted by Klingon fire.
    ShipDestroyed,
    /// Mission deadline passed.
    TimeExpired,
    /// A friendly starbase was destroyed by our own torpedo.
    StarbaseDestroyed,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameState {
    pub stardate: f64,
    pub deadline: f64,
    pub galaxy: Galaxy,
    /// Live entities of the occupied sector, ship included.
    pub sector: Vec<Entity>,
    pub player: Player,
    pub log: MessageLog,
    pub status: GameStatus,
}

impl GameState {
    /// Assemble a state at the start of the mission clock.
    pub fn new(galaxy: Galaxy, player: Player, sector: Vec<Entity>, config: &GameConfig) -> Self {
        GameState {
            stardate: config.initial_stardate,
            deadline: config.deadline(),
            galaxy,
            sector,
            player,
            log: MessageLog::new(config.log_capacity),
            status: GameStatus::Playing,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.status != GameStatus::Playing
    }

    pub fn is_win(&self) -> bool {
        self.status == GameStatus::Victory
    }

    /// RED while any Klingon is in the sector, GREEN otherwise.
    pub fn alert_level(&self) -> AlertLevel {
        if self.sector.iter().any(Entity::is_klingon) {
            AlertLevel::Red
        } else {
            AlertLevel::Green
        }
    }

    pub fn remaining_klingons(&self) -> u32 {
        self.galaxy.remaining_klingons()
    }

    pub fn current_quadrant(&self) -> Option<&QuadrantSummary> {
        self.galaxy.quadrant(self.player.quadrant)
    }

    pub fn quadrant_position(&self) -> QuadrantPosition {
        self.player.quadrant
    }

    pub fn klingons(&self) -> impl Iterator<Item = &Entity> {
        self.sector.iter().filter(|e| e.is_klingon())
    }

    pub fn starbases(&self) -> impl Iterator<Item = &Entity> {
        self.sector.iter().filter(|e| e.is_starbase())
    }

    /// The non-ship entity occupying a sector cell, if any.
    pub fn entity_at(&self, pos: SectorPosition) -> Option<&Entity> {
        self.sector
            .iter()
            .find(|e| e.position == pos && !e.is_ship())
    }

    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.sector.iter_mut().find(|e| e.id == id)
    }

    pub fn remove_entity(&mut self, id: EntityId) -> Option<Entity> {
        let index = self.sector.iter().position(|e| e.id == id)?;
        Some(self.sector.remove(index))
    }

    /// Move the ship's entity to follow the player's sector.
    pub fn sync_ship_entity(&mut self) {
        let sector = self.player.sector;
        for entity in self.sector.iter_mut().filter(|e| e.kind == EntityKind::Ship) {
            entity.position = sector;
        }
    }

    /// Stardates left before the deadline, never negative.
    pub fn time_remaining(&self) -> f64 {
        (self.deadline - self.stardate).max(0.0)
    }

    /// Borrowed view including the derived fields, for front ends.
    pub fn snapshot(&self) -> StateSnapshot<'_> {
        StateSnapshot {
            stardate: self.stardate,
            deadline: self.deadline,
            galaxy: &self.galaxy,
            sector: &self.sector,
            player: &self.player,
            log: &self.log,
            alert_level: self.alert_level(),
            remaining_klingons: self.remaining_klingons(),
            game_over: self.is_game_over(),
            win: self.is_win(),
            status: self.status,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StateSnapshot<'a> {
    pub stardate: f64,
    pub deadline: f64,
    pub galaxy: &'a Galaxy,
    pub sector: &'a [Entity],
    pub player: &'a Player,
    pub log: &'a MessageLog,
    pub alert_level: AlertLevel,
    pub remaining_klingons: u32,
    pub game_over: bool,
    pub win: bool,
    pub status: GameStatus,
}


#[cfg(test)]
mod tests {
    use super::test_utils::*;
    use super::*;

    #[test]
    fn alert_follows_klingon_presence() {
        let state = scenario(SectorPosition::new(3, 3), &[klingon(0, 0)], 0);
        assert_eq!(state.alert_level(), AlertLevel::Red);
        let state = scenario(SectorPosition::new(3, 3), &[star(0, 0)], 0);
        assert_eq!(state.alert_level(), AlertLevel::Green);
    }

    #[test]
    fn new_state_starts_playing_on_the_clock() {
        let state = scenario(SectorPosition::new(3, 3), &[], 0);
        assert_eq!(state.status, GameStatus::Playing);
        assert!(!state.is_game_over());
        assert!(!state.is_win());
        assert_eq!(state.stardate, 3100.0);
        assert_eq!(state.deadline, 3130.0);
        assert_eq!(state.time_remaining(), 30.0);
    }

    #[test]
    fn entity_at_ignores_ship() {
        let state = scenario(SectorPosition::new(3, 3), &[star(4, 4)], 0);
        assert!(state.entity_at(SectorPosition::new(3, 3)).is_none());
        assert_eq!(
            state.entity_at(SectorPosition::new(4, 4)).map(|e| e.kind),
            Some(EntityKind::Star)
        );
    }

    #[test]
    fn remove_entity_by_id() {
        let mut state = scenario(SectorPosition::new(3, 3), &[klingon(1, 1), star(2, 2)], 0);
        let removed = state.remove_entity(EntityId(1));
        assert!(removed.is_some_and(|e| e.is_klingon()));
        assert_eq!(state.sector.len(), 2);
        assert!(state.remove_entity(EntityId(1)).is_none());
    }

    #[test]
    fn sync_ship_entity_follows_player() {
        let mut state = scenario(SectorPosition::new(3, 3), &[], 0);
        state.player.sector = SectorPosition::new(3, 4);
        state.sync_ship_entity();
        assert_eq!(state.sector[0].position, SectorPosition::new(3, 4));
    }

    #[test]
    fn snapshot_carries_derived_fields() {
        let state = scenario(SectorPosition::new(3, 3), &[klingon(0, 0)], 2);
        let json = serde_json::to_value(state.snapshot()).expect("serializable");
        assert_eq!(json["alert_level"], "RED");
        assert_eq!(json["remaining_klingons"], 3);
        assert_eq!(json["game_over"], false);
    }
}

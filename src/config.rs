//! Game configuration
//!
//! Every tunable number of the simulation. Defaults are the classic values
//! from [`crate::models::constants`]; a JSON file may override any subset.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::models::constants::{
    INITIAL_ENERGY, INITIAL_SHIELDS, INITIAL_STARDATE, INITIAL_TORPEDOES, KLINGON_MAX_HP,
    KLINGON_MAX_POWER, KLINGON_MIN_POWER, MOVE_TIME_COST, PHASER_EFFICIENCY, PHASER_VARIANCE,
    SHIELD_CAP, SHIELD_ENERGY_RESERVE, TIME_LIMIT, TORPEDO_RANGE_FACTOR, WARP_ENERGY_COST,
};
use crate::models::errors::{GameError, GameResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub initial_energy: f64,
    pub initial_shields: f64,
    pub initial_torpedoes: u32,
    pub initial_stardate: f64,
    pub time_limit: f64,
    pub warp_energy_cost: f64,
    pub move_time_cost: f64,
    pub phaser_efficiency: f64,
    pub phaser_variance: i32,
    pub shield_cap: f64,
    pub shield_energy_reserve: f64,
    pub klingon_max_hp: i32,
    pub klingon_min_power: i32,
    pub klingon_max_power: i32,
    pub torpedo_range_factor: f64,
    /// Maximum retained log entries; None keeps everything.
    pub log_capacity: Option<usize>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            initial_energy: INITIAL_ENERGY,
            initial_shields: INITIAL_SHIELDS,
            initial_torpedoes: INITIAL_TORPEDOES,
            initial_stardate: INITIAL_STARDATE,
            time_limit: TIME_LIMIT,
            warp_energy_cost: WARP_ENERGY_COST,
            move_time_cost: MOVE_TIME_COST,
            phaser_efficiency: PHASER_EFFICIENCY,
            phaser_variance: PHASER_VARIANCE,
            shield_cap: SHIELD_CAP,
            shield_energy_reserve: SHIELD_ENERGY_RESERVE,
            klingon_max_hp: KLINGON_MAX_HP,
            klingon_min_power: KLINGON_MIN_POWER,
            klingon_max_power: KLINGON_MAX_POWER,
            torpedo_range_factor: TORPEDO_RANGE_FACTOR,
            log_capacity: None,
        }
    }
}

impl GameConfig {
    /// Parse a JSON document; missing fields keep their defaults.
    pub fn from_json(text: &str) -> GameResult<Self> {
        let config: GameConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: &Path) -> GameResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Reject values the engine cannot work with.
    pub fn validate(&self) -> GameResult<()> {
        let positive = [
            ("initial_energy", self.initial_energy),
            ("time_limit", self.time_limit),
            ("shield_cap", self.shield_cap),
            ("torpedo_range_factor", self.torpedo_range_factor),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(GameError::ConfigError(format!("{} must be positive", name)));
            }
        }

        let non_negative = [
            ("initial_shields", self.initial_shields),
            ("warp_energy_cost", self.warp_energy_cost),
            ("move_time_cost", self.move_time_cost),
            ("phaser_efficiency", self.phaser_efficiency),
            ("shield_energy_reserve", self.shield_energy_reserve),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(GameError::ConfigError(format!("{} must not be negative", name)));
            }
        }

        if self.initial_shields > self.shield_cap {
            return Err(GameError::ConfigError(
                "initial_shields exceeds shield_cap".to_string(),
            ));
        }
        if self.klingon_max_hp <= 0 {
            return Err(GameError::ConfigError("klingon_max_hp must be positive".to_string()));
        }
        if self.phaser_variance < 0 {
            return Err(GameError::ConfigError("phaser_variance must not be negative".to_string()));
        }
        if self.klingon_min_power < 0 || self.klingon_min_power > self.klingon_max_power {
            return Err(GameError::ConfigError(format!(
                "klingon power range {}..={} is invalid",
                self.klingon_min_power, self.klingon_max_power
            )));
        }
        if self.log_capacity == Some(0) {
            return Err(GameError::ConfigError("log_capacity must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Stardate after which the mission has failed.
    pub fn deadline(&self) -> f64 {
        self.initial_stardate + self.time_limit
    }

    /// Number of steps a torpedo travels before it is spent.
    pub fn torpedo_steps(&self, sector_size: usize) -> usize {
        (sector_size as f64 * self.torpedo_range_factor).floor() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.deadline(), 3130.0);
        assert_eq!(config.torpedo_steps(8), 12);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = GameConfig::from_json(r#"{ "initial_torpedoes": 4, "log_capacity": 50 }"#)
            .expect("valid config");
        assert_eq!(config.initial_torpedoes, 4);
        assert_eq!(config.log_capacity, Some(50));
        assert_eq!(config.initial_energy, INITIAL_ENERGY);
    }

    #[test]
    fn unknown_fields_rejected() {
        let err = GameConfig::from_json(r#"{ "warp_speed": 9 }"#).unwrap_err();
        assert!(matches!(err, GameError::ConfigError(_)));
    }

    #[test]
    fn inverted_power_range_rejected() {
        let err = GameConfig::from_json(r#"{ "klingon_min_power": 300 }"#).unwrap_err();
        assert!(err.to_string().contains("power range"));
    }

    #[test]
    fn shields_above_cap_rejected() {
        let config = GameConfig {
            initial_shields: 2500.0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = GameConfig::from_json_file(Path::new("/nonexistent/trek.json")).unwrap_err();
        assert!(matches!(err, GameError::IoError(_)));
    }
}

use clap::Parser;
use std::path::PathBuf;

use crate::config::GameConfig;
use crate::models::errors::GameResult;

#[derive(Debug, Parser)]
#[command(name = "sector_trek")]
#[command(about = "Hunt down the Klingon fleet before the stardate runs out")]
pub struct Args {
    /// Seed for the random number generator (omit for a random galaxy)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// JSON file overriding any of the game's tunable values
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Load the configuration file if one was given, defaults otherwise.
    pub fn load_config(&self) -> GameResult<GameConfig> {
        match &self.config {
            Some(path) => GameConfig::from_json_file(path),
            None => Ok(GameConfig::default()),
        }
    }
}

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use sector_trek::cli::{Args, Session};
use sector_trek::io::TerminalIO;
use sector_trek::models::errors::GameResult;
use sector_trek::GameEngine;

fn main() -> GameResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = args.load_config()?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    println!("*** SECTOR TREK ***");
    println!();

    let mut session = Session::new(GameEngine::new(config), &mut rng);
    let mut io = TerminalIO;
    let mut output = TerminalIO;
    session.run(&mut io, &mut output)
}

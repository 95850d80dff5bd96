use tracing::debug;

use crate::game_engine::{Command, GameEngine};
use crate::io::{InputReader, OutputWriter};
use crate::models::errors::{GameError, GameResult};
use crate::models::state::GameState;
use crate::random::RandomSource;
use crate::ui::presenters::{LogPresenter, OutcomePresenter, SectorPresenter, StatusPresenter};

/// Interactive game loop over the turn engine.
///
/// The session owns the only mutable binding to the current state and
/// replaces it with each outcome the engine returns.
pub struct Session<'a> {
    engine: GameEngine,
    state: GameState,
    rng: &'a mut dyn RandomSource,
    log_mark: u64,
}

impl<'a> Session<'a> {
    pub fn new(engine: GameEngine, rng: &'a mut dyn RandomSource) -> Self {
        let state = engine.new_game(rng);
        Session {
            engine,
            state,
            rng,
            log_mark: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn run(&mut self, input: &mut dyn InputReader, output: &mut dyn OutputWriter) -> GameResult<()> {
        self.refresh(output);
        print_command_menu(output);

        loop {
            let line = match input.read_line("COMMAND?")? {
                Some(line) => line,
                None => break,
            };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let verb = line.split_whitespace().next().unwrap_or_default().to_ascii_lowercase();
            match verb.as_str() {
                "quit" | "q" | "exit" => {
                    output.writeln("GOODBYE, CAPTAIN.");
                    break;
                }
                "help" | "?" => print_command_menu(output),
                "new" => {
                    self.state = self.engine.new_game(self.rng);
                    self.log_mark = 0;
                    self.refresh(output);
                }
                "status" => StatusPresenter::show(&self.state, output),
                "dump" => {
                    let json = serde_json::to_string_pretty(&self.state.snapshot())
                        .map_err(|e| GameError::ParseError(e.to_string()))?;
                    output.writeln(&json);
                }
                _ if self.state.is_game_over() => {
                    output.writeln("THE GAME IS OVER. TYPE 'new' TO PLAY AGAIN OR 'quit' TO LEAVE.");
                }
                _ => match line.parse::<Command>() {
                    Ok(command) => self.play(command, output),
                    Err(err) => {
                        debug!(%err, "unrecognized input");
                        print_command_menu(output);
                    }
                },
            }
        }
        Ok(())
    }

    fn play(&mut self, command: Command, output: &mut dyn OutputWriter) {
        let outcome = self.engine.execute(&self.state, command, self.rng);
        self.state = outcome.state;
        self.refresh(output);
    }

    /// Print log entries added since the last refresh, then the sector view.
    fn refresh(&mut self, output: &mut dyn OutputWriter) {
        LogPresenter::show(self.state.log.since(self.log_mark), output);
        self.log_mark = self.state.log.written();
        SectorPresenter::show(&self.state, output);
        OutcomePresenter::show(self.state.status, output);
    }
}

fn print_command_menu(output: &mut dyn OutputWriter) {
    output.writeln("ENTER ONE OF THE FOLLOWING:");
    output.writeln("  SRS           (SHORT RANGE SENSOR SCAN)");
    output.writeln("  LRS           (LONG RANGE SENSOR SCAN)");
    output.writeln("  WARP <1-9>    (MOVE ONE SECTOR, KEYPAD DIRECTION)");
    output.writeln("  PHA <UNITS>   (FIRE PHASERS)");
    output.writeln("  TOR <DEGREES> (FIRE PHOTON TORPEDO, 0 = EAST, 90 = NORTH)");
    output.writeln("  SHE           (TRANSFER ENERGY TO SHIELDS)");
    output.writeln("  COM           (LIBRARY COMPUTER)");
    output.writeln("  STATUS | DUMP | NEW | HELP | QUIT");
}

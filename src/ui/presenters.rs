use crate::io::OutputWriter;
use crate::models::constants::SECTOR_SIZE;
use crate::models::entity::EntityKind;
use crate::models::message_log::{LogEntry, Severity};
use crate::models::position::SectorPosition;
use crate::models::state::{DefeatReason, GameState, GameStatus};

pub struct SectorPresenter;

impl SectorPresenter {
    pub fn symbol(kind: Option<EntityKind>) -> &'static str {
        match kind {
            Some(EntityKind::Ship) => "-E-",
            Some(EntityKind::Klingon { .. }) => "+K+",
            Some(EntityKind::Starbase) => ">B<",
            Some(EntityKind::Star) => " * ",
            None => " . ",
        }
    }

    /// Render the 8x8 sector grid, top row first.
    pub fn render_rows(state: &GameState) -> Vec<String> {
        let mut grid = [[None; SECTOR_SIZE]; SECTOR_SIZE];
        for entity in &state.sector {
            let SectorPosition { x, y } = entity.position;
            if entity.position.in_bounds() {
                grid[y as usize][x as usize] = Some(entity.kind);
            }
        }
        grid.iter()
            .map(|row| row.iter().map(|cell| Self::symbol(*cell)).collect::<String>())
            .collect()
    }

    /// Print the grid with the status block beside it.
    pub fn show(state: &GameState, output: &mut dyn OutputWriter) {
        let border = "-".repeat(SECTOR_SIZE * 3);
        let status = StatusPresenter::lines(state);
        output.writeln(&border);
        for (i, row) in Self::render_rows(state).iter().enumerate() {
            match status.get(i) {
                Some(line) => output.writeln(&format!("{}    {}", row, line)),
                None => output.writeln(row),
            }
        }
        output.writeln(&border);
    }
}

pub struct StatusPresenter;

impl StatusPresenter {
    pub fn lines(state: &GameState) -> Vec<String> {
        let player = &state.player;
        vec![
            format!("{:<16}{:.1}", "STARDATE", state.stardate),
            format!("{:<16}{}", "CONDITION", state.alert_level().label()),
            format!("{:<16}{}", "QUADRANT", player.quadrant),
            format!("{:<16}{}", "SECTOR", player.sector),
            format!(
                "{:<16}{} / {}",
                "ENERGY",
                player.energy.floor() as i64,
                player.max_energy as i64
            ),
            format!("{:<16}{}", "SHIELDS", player.shields.floor() as i64),
            format!("{:<16}{}", "TORPEDOES", player.torpedoes),
            format!("{:<16}{}", "KLINGONS LEFT", state.remaining_klingons()),
            format!("{:<16}{}", "DOCKED", if player.docked { "YES" } else { "NO" }),
            format!("{:<16}{:.1}", "DAYS LEFT", state.time_remaining()),
        ]
    }

    pub fn show(state: &GameState, output: &mut dyn OutputWriter) {
        for line in Self::lines(state) {
            output.writeln(&line);
        }
    }
}

pub struct LogPresenter;

impl LogPresenter {
    fn prefix(severity: Severity) -> &'static str {
        match severity {
            Severity::Info => "   ",
            Severity::Success => "+  ",
            Severity::Warning => "!  ",
            Severity::Danger => "!! ",
        }
    }

    pub fn format(entry: &LogEntry) -> String {
        format!("{}{}", Self::prefix(entry.severity), entry.text)
    }

    pub fn show<'a>(entries: impl Iterator<Item = &'a LogEntry>, output: &mut dyn OutputWriter) {
        for entry in entries {
            output.writeln(&Self::format(entry));
        }
    }
}

pub struct OutcomePresenter;

impl OutcomePresenter {
    pub fn show(status: GameStatus, output: &mut dyn OutputWriter) {
        match status {
            GameStatus::Playing => {}
            GameStatus::Victory => {
                output.writeln("");
                output.writeln("*** VICTORY ***");
                output.writeln("THE FEDERATION HAS BEEN SAVED");
                output.writeln("");
            }
            GameStatus::Defeat(reason) => {
                let cause = match reason {
                    DefeatReason::ShipDestroyed => "THE ENTERPRISE HAS BEEN DESTROYED",
                    DefeatReason::TimeExpired => "THE MISSION DEADLINE HAS PASSED",
                    DefeatReason::StarbaseDestroyed => "A FEDERATION STARBASE WAS DESTROYED BY OUR OWN FIRE",
                };
                output.writeln("");
                output.writeln("*** GAME OVER ***");
                output.writeln(cause);
                output.writeln("");
            }
        }
    }
}

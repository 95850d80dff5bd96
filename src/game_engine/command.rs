use std::fmt;
use std::str::FromStr;

use crate::models::errors::GameError;

/// Player commands understood by the turn engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    ShortRangeScan,
    LongRangeScan,
    /// Keypad direction 1-9; 5 or anything else holds position.
    Warp { direction: i32 },
    Phasers { amount: f64 },
    /// Polar heading in degrees, 0 = east, 90 = north.
    Torpedo { heading: f64 },
    Shields,
    Computer,
}

/// Command names without their parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    ShortRangeScan,
    LongRangeScan,
    Warp,
    Phasers,
    Torpedo,
    Shields,
    Computer,
}

impl CommandKind {
    pub fn takes_parameter(&self) -> bool {
        matches!(self, CommandKind::Warp | CommandKind::Phasers | CommandKind::Torpedo)
    }
}

impl FromStr for CommandKind {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s.trim().to_ascii_lowercase().as_str() {
            "srs" | "scan" => CommandKind::ShortRangeScan,
            "lrs" => CommandKind::LongRangeScan,
            "warp" | "nav" | "move" => CommandKind::Warp,
            "pha" | "phasers" => CommandKind::Phasers,
            "tor" | "torpedo" => CommandKind::Torpedo,
            "she" | "shields" => CommandKind::Shields,
            "com" | "computer" => CommandKind::Computer,
            other => return Err(GameError::UnknownCommand(other.to_string())),
        };
        Ok(kind)
    }
}

impl Command {
    /// Build a command from its kind and raw parameter text.
    ///
    /// Numbers that do not parse are passed on as NaN, which the engine
    /// rejects with a log line. A warp direction that does not parse holds
    /// position.
    pub fn from_parts(kind: CommandKind, param: Option<&str>) -> Command {
        let number = || {
            param
                .and_then(|p| p.trim().parse::<f64>().ok())
                .unwrap_or(f64::NAN)
        };
        match kind {
            CommandKind::ShortRangeScan => Command::ShortRangeScan,
            CommandKind::LongRangeScan => Command::LongRangeScan,
            CommandKind::Warp => Command::Warp {
                direction: param
                    .and_then(|p| p.trim().parse::<i32>().ok())
                    .unwrap_or(5),
            },
            CommandKind::Phasers => Command::Phasers { amount: number() },
            CommandKind::Torpedo => Command::Torpedo { heading: number() },
            CommandKind::Shields => Command::Shields,
            CommandKind::Computer => Command::Computer,
        }
    }

    pub fn kind(&self) -> CommandKind {
        match self {
            Command::ShortRangeScan => CommandKind::ShortRangeScan,
            Command::LongRangeScan => CommandKind::LongRangeScan,
            Command::Warp { .. } => CommandKind::Warp,
            Command::Phasers { .. } => CommandKind::Phasers,
            Command::Torpedo { .. } => CommandKind::Torpedo,
            Command::Shields => CommandKind::Shields,
            Command::Computer => CommandKind::Computer,
        }
    }
}

impl FromStr for Command {
    type Err = GameError;

    /// Parse a typed line such as `pha 300` or `warp 6`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let name = parts
            .next()
            .ok_or_else(|| GameError::ParseError("empty command".to_string()))?;
        let kind: CommandKind = name.parse()?;
        Ok(Command::from_parts(kind, parts.next()))
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Command::ShortRangeScan => write!(f, "srs"),
            Command::LongRangeScan => write!(f, "lrs"),
            Command::Warp { direction } => write!(f, "warp {}", direction),
            Command::Phasers { amount } => write!(f, "pha {}", amount),
            Command::Torpedo { heading } => write!(f, "tor {}", heading),
            Command::Shields => write!(f, "she"),
            Command::Computer => write!(f, "com"),
        }
    }
}

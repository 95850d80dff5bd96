use std::fmt;

/// Errors raised outside the turn engine: configuration, terminal I/O and
/// typed command parsing. The engine itself reports rejected actions
/// through the captain's log instead.
#[derive(Debug)]
pub enum GameError {
    /// Failed to parse user input
    ParseError(String),
    /// Input that names no known command
    UnknownCommand(String),
    /// Configuration file missing, malformed or inconsistent
    ConfigError(String),
    /// I/O error occurred
    IoError(std::io::Error),
}

/// Type alias for Results using GameError
pub type GameResult<T> = Result<T, GameError>;

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            GameError::UnknownCommand(cmd) => write!(f, "Unknown command: {}", cmd),
            GameError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            GameError::IoError(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GameError {
    fn from(err: std::io::Error) -> Self {
        GameError::IoError(err)
    }
}

impl From<serde_json::Error> for GameError {
    fn from(err: serde_json::Error) -> Self {
        GameError::ConfigError(err.to_string())
    }
}

impl From<std::num::ParseFloatError> for GameError {
    fn from(err: std::num::ParseFloatError) -> Self {
        GameError::ParseError(err.to_string())
    }
}

impl From<std::num::ParseIntError> for GameError {
    fn from(err: std::num::ParseIntError) -> Self {
        GameError::ParseError(err.to_string())
    }
}

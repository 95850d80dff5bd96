//! Type-safe wrappers for navigation values

use std::fmt;

/// One-sector course laid out like a numeric keypad:
///
/// ```text
/// 7 8 9      NW  N  NE
/// 4 5 6  =>   W  .  E
/// 1 2 3      SW  S  SE
/// ```
///
/// 5, and anything that is not a keypad digit, means hold position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Course {
    Hold,
    Step { dx: i32, dy: i32 },
}

impl Course {
    pub fn from_keypad(code: i32) -> Self {
        let dy = match code {
            7..=9 => -1,
            1..=3 => 1,
            _ => 0,
        };
        let dx = match code {
            7 | 4 | 1 => -1,
            9 | 6 | 3 => 1,
            _ => 0,
        };
        if dx == 0 && dy == 0 {
            Course::Hold
        } else {
            Course::Step { dx, dy }
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            Course::Hold => "HOLD",
            Course::Step { dx: 0, dy: -1 } => "N",
            Course::Step { dx: 1, dy: -1 } => "NE",
            Course::Step { dx: 1, dy: 0 } => "E",
            Course::Step { dx: 1, dy: 1 } => "SE",
            Course::Step { dx: 0, dy: 1 } => "S",
            Course::Step { dx: -1, dy: 1 } => "SW",
            Course::Step { dx: -1, dy: 0 } => "W",
            Course::Step { .. } => "NW",
        };
        f.write_str(name)
    }
}

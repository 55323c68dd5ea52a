//! Game modes: how many stones each pit starts with.
//!
//! The board geometry is otherwise fixed — six pits per side — so the mode
//! is the only construction-time knob. Three-stone games are short, six-stone
//! games are the tournament standard.

use serde::{Deserialize, Serialize};

/// Initial stones-per-pit configuration.
///
/// ## Example
///
/// ```
/// use kalah::Mode;
///
/// assert_eq!(Mode::ThreeStones.stones(), 3);
/// assert_eq!(Mode::SixStones.stones(), 6);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// 3-stone Kalah.
    ThreeStones,
    /// 4-stone Kalah.
    FourStones,
    /// 6-stone Kalah.
    SixStones,
}

impl Mode {
    /// Number of stones each pit holds at the start of the game.
    #[must_use]
    pub const fn stones(self) -> u32 {
        match self {
            Mode::ThreeStones => 3,
            Mode::FourStones => 4,
            Mode::SixStones => 6,
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-stone", self.stones())
    }
}

impl std::str::FromStr for Mode {
    type Err = String;

    /// Parse a mode from its stone count (`"3"`, `"4"`, or `"6"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "3" => Ok(Mode::ThreeStones),
            "4" => Ok(Mode::FourStones),
            "6" => Ok(Mode::SixStones),
            other => Err(format!("unknown mode {other:?}, expected 3, 4 or 6")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_stones() {
        assert_eq!(Mode::ThreeStones.stones(), 3);
        assert_eq!(Mode::FourStones.stones(), 4);
        assert_eq!(Mode::SixStones.stones(), 6);
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(format!("{}", Mode::FourStones), "4-stone");
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("3".parse::<Mode>(), Ok(Mode::ThreeStones));
        assert_eq!(" 6 ".parse::<Mode>(), Ok(Mode::SixStones));
        assert!("5".parse::<Mode>().is_err());
        assert!("".parse::<Mode>().is_err());
    }

    #[test]
    fn test_mode_serialization() {
        let mode = Mode::FourStones;
        let json = serde_json::to_string(&mode).unwrap();
        let deserialized: Mode = serde_json::from_str(&json).unwrap();
        assert_eq!(mode, deserialized);
    }
}

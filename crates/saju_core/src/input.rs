//! Birth moment input.

use serde::{Deserialize, Serialize};

/// A birth moment as supplied by the caller. Unvalidated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BirthInput {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    #[serde(default)]
    pub hour: u32,
    #[serde(default)]
    pub minute: u32,
    /// `year`/`month`/`day` are a lunar date to be converted first.
    #[serde(default)]
    pub is_lunar: bool,
}

impl BirthInput {
    /// Gregorian date at 00:00.
    pub const fn solar(year: i32, month: u32, day: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour: 0,
            minute: 0,
            is_lunar: false,
        }
    }

    /// Lunar date at 00:00.
    pub const fn lunar(year: i32, month: u32, day: u32) -> Self {
        Self {
            is_lunar: true,
            ..Self::solar(year, month, day)
        }
    }

    /// Same date at `hour:minute`.
    pub const fn at(self, hour: u32, minute: u32) -> Self {
        Self {
            hour,
            minute,
            ..self
        }
    }
}

//! Plain calendar date values exchanged with a [`CalendarService`](crate::CalendarService).

use serde::{Deserialize, Serialize};

use crate::gregorian::days_in_month;

/// A Gregorian (solar) calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SolarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl SolarDate {
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Whether the date exists in the Gregorian calendar.
    pub fn is_valid(&self) -> bool {
        days_in_month(self.year, self.month).is_some_and(|max| (1..=max).contains(&self.day))
    }
}

impl std::fmt::Display for SolarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// A Chinese lunisolar calendar date (non-leap month).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LunarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl LunarDate {
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }
}

impl std::fmt::Display for LunarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "L{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

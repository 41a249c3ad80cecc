//! Error types for the saju engine.

use saju_calendar::CalendarError;
use thiserror::Error;

/// Errors from [`SajuEngine::compute`](crate::SajuEngine::compute) and engine setup.
///
/// Validation variants are reported fail-fast in the order year, month,
/// day, hour, minute. None of these errors is transient.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SajuError {
    #[error("year {year} is out of range ({min}..={max})")]
    YearOutOfRange { year: i32, min: i32, max: i32 },

    #[error("invalid month {month}: expected 1..=12")]
    InvalidMonth { month: u32 },

    #[error("invalid day {day} for {year:04}-{month:02}: expected 1..={max_day}")]
    InvalidDayForMonth {
        year: i32,
        month: u32,
        day: u32,
        max_day: u32,
    },

    #[error("hour {hour} is out of range: expected 0..=23")]
    HourOutOfRange { hour: u32 },

    #[error("minute {minute} is out of range: expected 0..=59")]
    MinuteOutOfRange { minute: u32 },

    /// The calendar collaborator could not resolve an otherwise valid date.
    #[error("calendar resolution failed: {0}")]
    CalendarResolution(#[from] CalendarError),

    #[error("invalid engine config: {0}")]
    InvalidConfig(&'static str),
}

//! Error types for calendar resolution.

use thiserror::Error;

/// Errors from a [`CalendarService`](crate::CalendarService).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CalendarError {
    /// The date does not exist in the calendar it was given in.
    #[error("invalid date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    /// The year lies outside the range the collaborator can resolve.
    #[error("year {year} is outside the supported calendar range")]
    OutOfRange { year: i32 },
    /// The collaborator does not implement the requested operation.
    #[error("unsupported calendar operation: {0}")]
    Unsupported(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_date_is_zero_padded() {
        let e = CalendarError::InvalidDate {
            year: 2023,
            month: 2,
            day: 29,
        };
        assert_eq!(e.to_string(), "invalid date 2023-02-29");
    }

    #[test]
    fn display_unsupported() {
        let e = CalendarError::Unsupported("lunar to solar conversion");
        assert_eq!(
            e.to_string(),
            "unsupported calendar operation: lunar to solar conversion"
        );
    }
}

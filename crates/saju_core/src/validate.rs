//! Fail-fast validation of a [`BirthInput`].

use saju_calendar::{CalendarService, days_in_month};

use crate::config::EngineConfig;
use crate::error::SajuError;
use crate::input::BirthInput;

/// Longest possible lunar month, used when the calendar cannot say.
pub const LUNAR_MONTH_MAX_DAYS: u32 = 30;

/// Check `input` in the order year → month → day → hour → minute and
/// report only the first violation.
///
/// Day limits follow the input's own calendar: Gregorian month lengths
/// for solar input; the collaborator's lunar month length (or 30) for
/// lunar input.
pub fn validate_birth_input<C: CalendarService>(
    input: &BirthInput,
    config: &EngineConfig,
    calendar: &C,
) -> Result<(), SajuError> {
    let max_year = config.resolved_max_year();
    if !(config.min_year..=max_year).contains(&input.year) {
        return Err(SajuError::YearOutOfRange {
            year: input.year,
            min: config.min_year,
            max: max_year,
        });
    }

    let month_days = if input.is_lunar {
        (1..=12).contains(&input.month).then(|| {
            calendar
                .lunar_month_days(input.year, input.month)
                .unwrap_or(LUNAR_MONTH_MAX_DAYS)
        })
    } else {
        days_in_month(input.year, input.month)
    };
    let Some(max_day) = month_days else {
        return Err(SajuError::InvalidMonth { month: input.month });
    };

    if !(1..=max_day).contains(&input.day) {
        return Err(SajuError::InvalidDayForMonth {
            year: input.year,
            month: input.month,
            day: input.day,
            max_day,
        });
    }
    if input.hour > 23 {
        return Err(SajuError::HourOutOfRange { hour: input.hour });
    }
    if input.minute > 59 {
        return Err(SajuError::MinuteOutOfRange {
            minute: input.minute,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use saju_calendar::FixedTermCalendar;

    const CONFIG: EngineConfig = EngineConfig::with_year_range(1900, 2026);

    fn check(input: BirthInput) -> Result<(), SajuError> {
        validate_birth_input(&input, &CONFIG, &FixedTermCalendar::new())
    }

    #[test]
    fn valid_input_passes() {
        assert!(check(BirthInput::solar(1990, 5, 15).at(23, 59)).is_ok());
    }

    #[test]
    fn year_bounds() {
        assert!(check(BirthInput::solar(1900, 1, 1)).is_ok());
        assert!(check(BirthInput::solar(2026, 12, 31)).is_ok());
        assert_eq!(
            check(BirthInput::solar(1899, 12, 31)),
            Err(SajuError::YearOutOfRange {
                year: 1899,
                min: 1900,
                max: 2026
            })
        );
        assert!(matches!(
            check(BirthInput::solar(2027, 1, 1)),
            Err(SajuError::YearOutOfRange { year: 2027, .. })
        ));
    }

    #[test]
    fn month_bounds() {
        assert_eq!(
            check(BirthInput::solar(1990, 0, 1)),
            Err(SajuError::InvalidMonth { month: 0 })
        );
        assert_eq!(
            check(BirthInput::lunar(1990, 13, 1)),
            Err(SajuError::InvalidMonth { month: 13 })
        );
    }

    #[test]
    fn gregorian_leap_day() {
        assert!(check(BirthInput::solar(2024, 2, 29)).is_ok());
        assert_eq!(
            check(BirthInput::solar(2023, 2, 29)),
            Err(SajuError::InvalidDayForMonth {
                year: 2023,
                month: 2,
                day: 29,
                max_day: 28
            })
        );
        assert!(check(BirthInput::solar(1900, 2, 29)).is_err());
    }

    #[test]
    fn lunar_day_limit_without_calendar_knowledge() {
        assert!(check(BirthInput::lunar(2023, 2, 30)).is_ok());
        assert!(matches!(
            check(BirthInput::lunar(2023, 2, 31)),
            Err(SajuError::InvalidDayForMonth { max_day: 30, .. })
        ));
    }

    #[test]
    fn hour_and_minute_bounds() {
        assert_eq!(
            check(BirthInput::solar(1990, 5, 15).at(24, 0)),
            Err(SajuError::HourOutOfRange { hour: 24 })
        );
        assert_eq!(
            check(BirthInput::solar(1990, 5, 15).at(0, 60)),
            Err(SajuError::MinuteOutOfRange { minute: 60 })
        );
    }

    #[test]
    fn first_violation_wins() {
        // Every field is invalid: only the year is reported.
        let all_bad = BirthInput {
            year: 1800,
            month: 13,
            day: 40,
            hour: 25,
            minute: 61,
            is_lunar: false,
        };
        assert!(matches!(check(all_bad), Err(SajuError::YearOutOfRange { .. })));

        // Month and later invalid: month is reported.
        let from_month = BirthInput { year: 1990, ..all_bad };
        assert!(matches!(check(from_month), Err(SajuError::InvalidMonth { .. })));

        let from_day = BirthInput { month: 1, ..from_month };
        assert!(matches!(check(from_day), Err(SajuError::InvalidDayForMonth { .. })));

        let from_hour = BirthInput { day: 1, ..from_day };
        assert!(matches!(check(from_hour), Err(SajuError::HourOutOfRange { .. })));

        let from_minute = BirthInput { hour: 0, ..from_hour };
        assert!(matches!(check(from_minute), Err(SajuError::MinuteOutOfRange { .. })));
    }
}

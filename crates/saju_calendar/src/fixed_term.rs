//! Arithmetic reference calendar with fixed section-term days.
//!
//! Year, month and day indices are derived without astronomy:
//! - day: continuous 60-day count from the Julian Day Number
//! - year: changes on 4 February ("start of spring")
//! - month: branch changes on a fixed day per Gregorian month; the stem
//!   follows the "Five-Tiger" rule from the year stem
//!
//! True solar terms drift by up to a day around these fixed days, so
//! charts born on a boundary day can differ from an astronomical
//! calendar. Lunar conversion is not supported.

use tracing::trace;

use crate::date::{LunarDate, SolarDate};
use crate::error::CalendarError;
use crate::gregorian::gregorian_to_jdn;
use crate::service::{CalendarService, CycleIndices};

/// Earliest year this calendar resolves.
pub const MIN_YEAR: i32 = 1;
/// Latest year this calendar resolves.
pub const MAX_YEAR: i32 = 9999;

/// Offset aligning JDN with the day cycle: JDN 2415021 (1900-01-01) is 甲戌 (10).
const DAY_CYCLE_OFFSET: i64 = 49;

/// Gregorian year whose sexagenary year is 甲子 (0).
const CYCLE_EPOCH_YEAR: i32 = 4;

/// Start of spring as (month, day).
const SPRING_START: (u32, u32) = (2, 4);

/// Branch index of the 寅 (Tiger) month, the first month of the sexagenary year.
const TIGER_BRANCH: u8 = 2;

/// Fixed section-term day and the branch it starts, per Gregorian month (Jan..Dec).
const SECTION_TERMS: [(u32, u8); 12] = [
    (6, 1),  // 小寒 → 丑
    (4, 2),  // 立春 → 寅
    (6, 3),  // 驚蟄 → 卯
    (5, 4),  // 清明 → 辰
    (6, 5),  // 立夏 → 巳
    (6, 6),  // 芒種 → 午
    (7, 7),  // 小暑 → 未
    (8, 8),  // 立秋 → 申
    (8, 9),  // 白露 → 酉
    (8, 10), // 寒露 → 戌
    (7, 11), // 立冬 → 亥
    (7, 0),  // 大雪 → 子
];

/// Calendar collaborator with fixed term days and no lunar support.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedTermCalendar;

impl FixedTermCalendar {
    pub const fn new() -> Self {
        Self
    }

    /// Gregorian year in which the sexagenary year containing `date` began.
    pub fn sexagenary_year(date: SolarDate) -> i32 {
        if (date.month, date.day) < SPRING_START {
            date.year - 1
        } else {
            date.year
        }
    }

    /// Month branch index (0 = 子 .. 11 = 亥) in effect on `date`.
    pub fn month_branch(date: SolarDate) -> u8 {
        let (term_day, branch) = SECTION_TERMS[(date.month - 1) as usize];
        if date.day >= term_day {
            branch
        } else {
            (branch + 11) % 12
        }
    }

    fn check(date: SolarDate) -> Result<(), CalendarError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&date.year) {
            return Err(CalendarError::OutOfRange { year: date.year });
        }
        if !date.is_valid() {
            return Err(CalendarError::InvalidDate {
                year: date.year,
                month: date.month,
                day: date.day,
            });
        }
        Ok(())
    }
}

impl CalendarService for FixedTermCalendar {
    fn year_indices(&self, date: SolarDate) -> Result<CycleIndices, CalendarError> {
        Self::check(date)?;
        let year = Self::sexagenary_year(date);
        Ok(CycleIndices::from_cycle_offset((year - CYCLE_EPOCH_YEAR) as i64))
    }

    fn month_indices(&self, date: SolarDate) -> Result<CycleIndices, CalendarError> {
        let year = self.year_indices(date)?;
        let branch = Self::month_branch(date);
        let months_since_tiger = (branch + 12 - TIGER_BRANCH) % 12;
        // Five-Tiger: the 寅 month of a year with stem s sits at cycle
        // position 12·s + 2, i.e. stem [2,4,6,8,0][s mod 5].
        let offset = 12 * year.stem() as i64 + TIGER_BRANCH as i64 + months_since_tiger as i64;
        let month = CycleIndices::from_cycle_offset(offset);
        trace!(%date, branch, cycle = month.cycle_index(), "fixed-term month resolved");
        Ok(month)
    }

    fn day_indices(&self, date: SolarDate) -> Result<CycleIndices, CalendarError> {
        Self::check(date)?;
        let jdn = gregorian_to_jdn(date.year, date.month, date.day);
        Ok(CycleIndices::from_cycle_offset(jdn + DAY_CYCLE_OFFSET))
    }

    fn lunar_to_solar(&self, _date: LunarDate) -> Result<SolarDate, CalendarError> {
        Err(CalendarError::Unsupported("lunar to solar conversion"))
    }

    fn solar_to_lunar(&self, _date: SolarDate) -> Result<LunarDate, CalendarError> {
        Err(CalendarError::Unsupported("solar to lunar conversion"))
    }
}

//! The calendar collaborator contract.
//!
//! The saju engine does not know how solar terms or lunar months are
//! computed. It asks a [`CalendarService`] for sexagenary indices and
//! date conversions, and trusts the answers. Trust is safe because a
//! [`CycleIndices`] can only be built from a valid stem/branch pair.

use serde::Serialize;

use crate::date::{LunarDate, SolarDate};
use crate::error::CalendarError;

/// Number of heavenly stems.
pub const STEM_COUNT: u8 = 10;
/// Number of earthly branches.
pub const BRANCH_COUNT: u8 = 12;
/// Length of the sexagenary cycle.
pub const CYCLE_LENGTH: u8 = 60;

/// A stem/branch index pair from the sexagenary cycle.
///
/// Invariant: `stem < 10`, `branch < 12`, `stem % 2 == branch % 2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CycleIndices {
    stem: u8,
    branch: u8,
}

impl CycleIndices {
    /// Pair a stem and branch index, rejecting out-of-range or
    /// mixed-polarity combinations.
    pub const fn new(stem: u8, branch: u8) -> Option<Self> {
        if stem >= STEM_COUNT || branch >= BRANCH_COUNT || stem % 2 != branch % 2 {
            return None;
        }
        Some(Self { stem, branch })
    }

    /// Indices at position `index` (0 = 甲子 .. 59 = 癸亥) of the cycle.
    pub const fn from_cycle_index(index: u8) -> Option<Self> {
        if index >= CYCLE_LENGTH {
            return None;
        }
        Some(Self {
            stem: index % STEM_COUNT,
            branch: index % BRANCH_COUNT,
        })
    }

    /// Indices at an arbitrary (possibly negative) offset, wrapped into the cycle.
    pub const fn from_cycle_offset(offset: i64) -> Self {
        let index = offset.rem_euclid(CYCLE_LENGTH as i64) as u8;
        Self {
            stem: index % STEM_COUNT,
            branch: index % BRANCH_COUNT,
        }
    }

    pub const fn stem(self) -> u8 {
        self.stem
    }

    pub const fn branch(self) -> u8 {
        self.branch
    }

    /// Position in the 60-cycle (0..59).
    pub const fn cycle_index(self) -> u8 {
        // Unique solution of i ≡ stem (mod 10), i ≡ branch (mod 12).
        (6 * self.stem as i16 - 5 * self.branch as i16).rem_euclid(CYCLE_LENGTH as i16) as u8
    }
}

/// Sexagenary index resolution and solar↔lunar conversion.
///
/// Implementations must apply solar-term boundaries for years ("start of
/// spring") and months, and must treat the day cycle as continuous over
/// the Gregorian calendar.
pub trait CalendarService {
    /// Year pillar indices for a Gregorian date.
    fn year_indices(&self, date: SolarDate) -> Result<CycleIndices, CalendarError>;

    /// Month pillar indices for a Gregorian date.
    fn month_indices(&self, date: SolarDate) -> Result<CycleIndices, CalendarError>;

    /// Day pillar indices for a Gregorian date.
    fn day_indices(&self, date: SolarDate) -> Result<CycleIndices, CalendarError>;

    /// Convert a lunar date to its Gregorian equivalent.
    fn lunar_to_solar(&self, date: LunarDate) -> Result<SolarDate, CalendarError>;

    /// Convert a Gregorian date to its lunar equivalent.
    fn solar_to_lunar(&self, date: SolarDate) -> Result<LunarDate, CalendarError>;

    /// Length of a lunar month, when the collaborator knows it.
    fn lunar_month_days(&self, _year: i32, _month: u32) -> Option<u32> {
        None
    }
}

impl<C: CalendarService + ?Sized> CalendarService for &C {
    fn year_indices(&self, date: SolarDate) -> Result<CycleIndices, CalendarError> {
        (**self).year_indices(date)
    }

    fn month_indices(&self, date: SolarDate) -> Result<CycleIndices, CalendarError> {
        (**self).month_indices(date)
    }

    fn day_indices(&self, date: SolarDate) -> Result<CycleIndices, CalendarError> {
        (**self).day_indices(date)
    }

    fn lunar_to_solar(&self, date: LunarDate) -> Result<SolarDate, CalendarError> {
        (**self).lunar_to_solar(date)
    }

    fn solar_to_lunar(&self, date: SolarDate) -> Result<LunarDate, CalendarError> {
        (**self).solar_to_lunar(date)
    }

    fn lunar_month_days(&self, year: i32, month: u32) -> Option<u32> {
        (**self).lunar_month_days(year, month)
    }
}

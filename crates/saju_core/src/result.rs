//! The aggregate result of one engine computation.

use serde::Serialize;

use saju_base::{DayMaster, ElementDistribution, Fortune, FourPillars, UsefulElements};
use saju_calendar::SolarDate;

use crate::input::BirthInput;

/// Everything computed for one birth moment. Built fresh per call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SajuResult {
    /// The input as given.
    pub input: BirthInput,
    /// Gregorian date fed to the calendar (converted first for lunar input).
    pub solar_date: SolarDate,
    pub pillars: FourPillars,
    pub elements: ElementDistribution,
    pub day_master: DayMaster,
    pub useful: UsefulElements,
    pub fortune: Fortune,
}

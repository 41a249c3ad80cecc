//! Pillars (stem + branch pairs) and their construction.
//!
//! Year, month and day pillars come straight from the calendar
//! collaborator. The hour pillar is computed here: the hour selects a
//! two-hour branch slot, and the day stem selects the stem that opens
//! the day's 12-slot cycle ("Five-Rat" rule).

use serde::ser::{Serialize, SerializeStruct, Serializer};
use tracing::debug;

use saju_calendar::{CalendarError, CalendarService, CycleIndices, SolarDate};

use crate::branch::{ALL_BRANCHES, EarthlyBranch};
use crate::stem::{ALL_STEMS, HeavenlyStem};

/// Opening hour stem of the 子 slot, indexed by `day_stem mod 5`.
const FIVE_RAT_START: [u8; 5] = [0, 2, 4, 6, 8];

/// A stem/branch pair of equal polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pillar {
    stem: HeavenlyStem,
    branch: EarthlyBranch,
}

impl Pillar {
    /// Pair a stem and a branch. Mixed polarity never occurs in the
    /// sexagenary cycle and is rejected.
    pub const fn new(stem: HeavenlyStem, branch: EarthlyBranch) -> Option<Self> {
        if stem.index() % 2 != branch.index() % 2 {
            return None;
        }
        Some(Self { stem, branch })
    }

    /// Pillar from raw indices (stem 0..9, branch 0..11).
    pub const fn from_indices(stem: u8, branch: u8) -> Option<Self> {
        match (HeavenlyStem::from_index(stem), EarthlyBranch::from_index(branch)) {
            (Some(s), Some(b)) => Self::new(s, b),
            _ => None,
        }
    }

    /// Pillar at position `index` (0 = 甲子 .. 59 = 癸亥) of the cycle.
    pub const fn from_cycle_index(index: u8) -> Option<Self> {
        if index >= 60 {
            return None;
        }
        Self::from_indices(index % 10, index % 12)
    }

    pub const fn stem(self) -> HeavenlyStem {
        self.stem
    }

    pub const fn branch(self) -> EarthlyBranch {
        self.branch
    }

    pub const fn stem_index(self) -> u8 {
        self.stem.index()
    }

    pub const fn branch_index(self) -> u8 {
        self.branch.index()
    }

    /// Position in the 60-cycle (0..59).
    pub const fn cycle_index(self) -> u8 {
        (6 * self.stem_index() as i16 - 5 * self.branch_index() as i16).rem_euclid(60) as u8
    }

    /// Chinese name, e.g. `甲子`.
    pub fn name(self) -> String {
        [self.stem.character(), self.branch.character()]
            .iter()
            .collect()
    }

    /// Korean name, e.g. `갑자`.
    pub fn korean(self) -> String {
        [self.stem.korean(), self.branch.korean()].iter().collect()
    }
}

impl From<CycleIndices> for Pillar {
    fn from(idx: CycleIndices) -> Self {
        // CycleIndices guarantees range and equal polarity.
        Self {
            stem: ALL_STEMS[idx.stem() as usize],
            branch: ALL_BRANCHES[idx.branch() as usize],
        }
    }
}

impl std::fmt::Display for Pillar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.character(), self.branch.character())
    }
}

impl Serialize for Pillar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Pillar", 5)?;
        s.serialize_field("stem_index", &self.stem_index())?;
        s.serialize_field("branch_index", &self.branch_index())?;
        s.serialize_field("stem", &self.stem)?;
        s.serialize_field("branch", &self.branch)?;
        s.serialize_field("name", &self.name())?;
        s.end()
    }
}

/// The four pillars of a birth moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl FourPillars {
    /// Pillars in year, month, day, hour order.
    pub const fn pillars(&self) -> [Pillar; 4] {
        [self.year, self.month, self.day, self.hour]
    }

    /// The day stem, anchor of the day-master evaluation.
    pub const fn day_stem(&self) -> HeavenlyStem {
        self.day.stem
    }

    /// Zodiac animal of the (sexagenary) birth year.
    pub const fn zodiac_animal(&self) -> &'static str {
        self.year.branch.animal()
    }
}

impl std::fmt::Display for FourPillars {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} {}", self.year, self.month, self.day, self.hour)
    }
}

/// Year pillar from the calendar collaborator.
pub fn build_year_pillar<C: CalendarService>(
    calendar: &C,
    date: SolarDate,
) -> Result<Pillar, CalendarError> {
    let pillar = Pillar::from(calendar.year_indices(date)?);
    debug!(%date, pillar = %pillar, "year pillar");
    Ok(pillar)
}

/// Month pillar from the calendar collaborator.
pub fn build_month_pillar<C: CalendarService>(
    calendar: &C,
    date: SolarDate,
) -> Result<Pillar, CalendarError> {
    let pillar = Pillar::from(calendar.month_indices(date)?);
    debug!(%date, pillar = %pillar, "month pillar");
    Ok(pillar)
}

/// Day pillar from the calendar collaborator. `date` is always Gregorian.
pub fn build_day_pillar<C: CalendarService>(
    calendar: &C,
    date: SolarDate,
) -> Result<Pillar, CalendarError> {
    let pillar = Pillar::from(calendar.day_indices(date)?);
    debug!(%date, pillar = %pillar, "day pillar");
    Ok(pillar)
}

/// Branch owning `hour` (0..23). Hours 23 and 0 both map to 子.
pub const fn hour_branch(hour: u32) -> Option<EarthlyBranch> {
    if hour > 23 {
        return None;
    }
    EarthlyBranch::from_index((((hour + 1) / 2) % 12) as u8)
}

/// Stem of the 子 hour on a day with stem `day_stem` ("Five-Rat" rule).
///
/// 甲/己 → 甲, 乙/庚 → 丙, 丙/辛 → 戊, 丁/壬 → 庚, 戊/癸 → 壬.
pub const fn hour_start_stem(day_stem: HeavenlyStem) -> HeavenlyStem {
    ALL_STEMS[FIVE_RAT_START[(day_stem.index() % 5) as usize] as usize]
}

/// Hour pillar for `hour` (0..23) on a day with stem `day_stem`.
pub fn build_hour_pillar(day_stem: HeavenlyStem, hour: u32) -> Option<Pillar> {
    let branch = hour_branch(hour)?;
    let start = hour_start_stem(day_stem);
    let stem = ALL_STEMS[((start.index() + branch.index()) % 10) as usize];
    // Even start stem: stem parity follows branch parity.
    let pillar = Pillar { stem, branch };
    debug!(day_stem = %day_stem, hour, pillar = %pillar, "hour pillar");
    Some(pillar)
}

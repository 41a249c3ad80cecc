//! Four-pillars (saju) calculation engine.
//!
//! [`SajuEngine`] turns a [`BirthInput`] into a [`SajuResult`]: the four
//! pillars, the five-element distribution, the day-master strength,
//! useful-element advice and four fortune scores. Calendar knowledge is
//! delegated to a [`CalendarService`]; everything else is computed here
//! and is deterministic.
//!
//! # Quick start
//!
//! ```rust
//! use saju_core::{BirthInput, EngineConfig, FixedTermCalendar, SajuEngine};
//!
//! let engine = SajuEngine::new(
//!     FixedTermCalendar::new(),
//!     EngineConfig::with_year_range(1900, 2100),
//! )
//! .unwrap();
//! let result = engine.compute(&BirthInput::solar(1990, 5, 15).at(13, 30)).unwrap();
//! assert_eq!(result.elements.total(), 8);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod input;
pub mod result;
pub mod validate;

pub use config::{DEFAULT_MIN_YEAR, EngineConfig};
pub use engine::SajuEngine;
pub use error::SajuError;
pub use input::BirthInput;
pub use result::SajuResult;
pub use validate::{LUNAR_MONTH_MAX_DAYS, validate_birth_input};

// Re-export the building blocks so callers only need `saju_core`.
pub use saju_base::{
    ALL_BRANCHES, ALL_ELEMENTS, ALL_STEMS, Beneficial, DayMaster, EarthlyBranch, Element,
    ElementDistribution, ElementPercentages, ElementStatus, Fortune, FortuneField, FourPillars,
    Grade, HeavenlyStem, Pillar, Polarity, StrengthTier, UsefulElements, advise_useful_elements,
    build_hour_pillar, evaluate_day_master, hour_branch, hour_start_stem, score_fortune,
};
pub use saju_calendar::{
    CalendarError, CalendarService, CycleIndices, FixedTermCalendar, LunarDate, SolarDate,
};

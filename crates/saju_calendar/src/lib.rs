//! Calendar collaborator contract for the saju engine.
//!
//! This crate provides:
//! - [`CalendarService`], the contract the engine consumes to resolve
//!   sexagenary year/month/day indices and solar↔lunar conversion
//! - [`CycleIndices`], a stem/branch pair that is valid by construction
//! - Gregorian helpers (leap years, month lengths, Julian Day Numbers)
//! - [`FixedTermCalendar`], an arithmetic reference collaborator with
//!   fixed section-term days and no lunar support
//!
//! Astronomically exact solar terms and lunar conversion belong to other
//! `CalendarService` implementations.

pub mod date;
pub mod error;
pub mod fixed_term;
pub mod gregorian;
pub mod service;

pub use date::{LunarDate, SolarDate};
pub use error::CalendarError;
pub use fixed_term::FixedTermCalendar;
pub use gregorian::{days_in_month, gregorian_to_jdn, is_leap_year};
pub use service::{BRANCH_COUNT, CYCLE_LENGTH, CalendarService, CycleIndices, STEM_COUNT};

//! Four-pillars (saju) building blocks.
//!
//! This crate provides:
//! - The static stem/branch/element tables
//! - Pillar construction, including the locally computed hour pillar
//! - Five-element distribution, day-master strength, useful-element
//!   advice and fortune scoring over a set of four pillars
//!
//! Everything here is a pure function of its inputs. Calendar knowledge
//! enters only through [`saju_calendar::CalendarService`].

pub mod branch;
pub mod day_master;
pub mod element;
pub mod element_analysis;
pub mod fortune;
pub mod pillar;
pub mod stem;
pub mod useful_element;

pub use branch::{ALL_BRANCHES, EarthlyBranch};
pub use day_master::{DayMaster, StrengthTier, evaluate_day_master};
pub use element::{ALL_ELEMENTS, Element, Polarity};
pub use element_analysis::{ElementDistribution, ElementStatus, PILLAR_SLOTS};
pub use fortune::{ElementPercentages, Fortune, FortuneField, Grade, score_fortune};
pub use pillar::{
    FourPillars, Pillar, build_day_pillar, build_hour_pillar, build_month_pillar,
    build_year_pillar, hour_branch, hour_start_stem,
};
pub use stem::{ALL_STEMS, HeavenlyStem};
pub use useful_element::{Beneficial, UsefulElements, advise_useful_elements};

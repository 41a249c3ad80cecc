//! Engine configuration.

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::error::SajuError;

/// Earliest accepted birth year by default.
pub const DEFAULT_MIN_YEAR: i32 = 1900;

/// Engine configuration used at construction time.
///
/// `max_year = None` means "the current calendar year", looked up from
/// the local clock each time a birth input is validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub min_year: i32,
    pub max_year: Option<i32>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_year: DEFAULT_MIN_YEAR,
            max_year: None,
        }
    }
}

impl EngineConfig {
    /// Fixed, clock-independent year range.
    pub const fn with_year_range(min_year: i32, max_year: i32) -> Self {
        Self {
            min_year,
            max_year: Some(max_year),
        }
    }

    /// Upper year bound in effect now.
    pub fn resolved_max_year(&self) -> i32 {
        self.max_year
            .unwrap_or_else(|| chrono::Local::now().year())
    }

    pub fn validate(&self) -> Result<(), SajuError> {
        if self.min_year > self.resolved_max_year() {
            return Err(SajuError::InvalidConfig(
                "min_year must not exceed max_year",
            ));
        }
        Ok(())
    }
}

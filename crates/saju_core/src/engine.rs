//! The saju engine facade.

use tracing::{debug, warn};

use saju_base::{
    ElementDistribution, ElementPercentages, FourPillars, advise_useful_elements,
    build_day_pillar, build_hour_pillar, build_month_pillar, build_year_pillar,
    evaluate_day_master, score_fortune,
};
use saju_calendar::{CalendarError, CalendarService, LunarDate, SolarDate};

use crate::config::EngineConfig;
use crate::error::SajuError;
use crate::input::BirthInput;
use crate::result::SajuResult;
use crate::validate::validate_birth_input;

/// Stateless four-pillars engine over a calendar collaborator.
///
/// `compute` takes `&self` and shares nothing mutable, so one engine can
/// serve any number of concurrent callers.
#[derive(Debug, Clone)]
pub struct SajuEngine<C> {
    calendar: C,
    config: EngineConfig,
}

impl<C: CalendarService> SajuEngine<C> {
    /// Create an engine, validating `config`.
    pub fn new(calendar: C, config: EngineConfig) -> Result<Self, SajuError> {
        config.validate()?;
        Ok(Self { calendar, config })
    }

    /// Create an engine accepting years 1900 through the current year.
    pub fn with_default_config(calendar: C) -> Self {
        Self {
            calendar,
            config: EngineConfig::default(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn calendar(&self) -> &C {
        &self.calendar
    }

    /// Validate `input` and compute its full chart.
    pub fn compute(&self, input: &BirthInput) -> Result<SajuResult, SajuError> {
        validate_birth_input(input, &self.config, &self.calendar)?;
        let solar_date = self.resolve_solar_date(input)?;
        let pillars = self.build_pillars(solar_date, input.hour)?;
        debug!(%solar_date, %pillars, "pillars built");

        let elements = ElementDistribution::from_pillars(&pillars);
        let day_master = evaluate_day_master(&pillars, &elements);
        let useful = advise_useful_elements(&elements);
        let fortune = score_fortune(&ElementPercentages::from_distribution(&elements));

        Ok(SajuResult {
            input: *input,
            solar_date,
            pillars,
            elements,
            day_master,
            useful,
            fortune,
        })
    }

    /// Gregorian date of the birth; lunar input is converted first.
    fn resolve_solar_date(&self, input: &BirthInput) -> Result<SolarDate, SajuError> {
        if !input.is_lunar {
            return Ok(SolarDate::new(input.year, input.month, input.day));
        }
        let lunar = LunarDate::new(input.year, input.month, input.day);
        let solar = self
            .calendar
            .lunar_to_solar(lunar)
            .inspect_err(|e| warn!(%lunar, error = %e, "lunar conversion failed"))?;
        debug!(%lunar, %solar, "lunar date converted");
        Ok(solar)
    }

    fn build_pillars(&self, date: SolarDate, hour: u32) -> Result<FourPillars, SajuError> {
        let log_failure = |e: &CalendarError| warn!(%date, error = %e, "calendar resolution failed");
        let year = build_year_pillar(&self.calendar, date).inspect_err(log_failure)?;
        let month = build_month_pillar(&self.calendar, date).inspect_err(log_failure)?;
        let day = build_day_pillar(&self.calendar, date).inspect_err(log_failure)?;
        let hour = build_hour_pillar(day.stem(), hour).ok_or(SajuError::HourOutOfRange { hour })?;
        Ok(FourPillars {
            year,
            month,
            day,
            hour,
        })
    }
}

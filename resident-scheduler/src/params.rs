//! The parameters describing a scheduling problem instance.
//!
//! Parameters enter the crate as a [`RawParameters`] record of signed integers, which is how they
//! arrive from a command line or a configuration file. Converting it into [`SchedulingParams`]
//! validates every field; a [`SchedulingParams`] value is therefore always well-formed and never
//! changes after construction.

use thiserror::Error;

/// The number of hours in one week window.
pub const HOURS_PER_WEEK: usize = 168;
/// The number of hours in one day-off window.
pub const HOURS_PER_DAY: usize = 24;

/// Unvalidated scheduling parameters, as supplied by the caller.
///
/// All counts are signed so that out-of-range input can be reported rather than wrapped; see
/// [`SchedulingParams::try_from`] for the checks that are performed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawParameters {
    /// Total number of residents available.
    pub residents: i64,
    /// Length of the scheduling horizon in hours.
    pub horizon_hours: i64,
    /// Minimum number of residents on duty at every hour.
    pub min_on_duty: i64,
    /// Minimum number of rest hours after a shift ends.
    pub min_rest_hours: i64,
    /// Maximum length of an unbroken working run.
    pub max_consecutive_hours: i64,
    /// Maximum number of worked hours in a week window.
    pub max_weekly_hours: i64,
    /// Absolute hour indices which count as teaching time.
    pub teaching_hours: Vec<i64>,
    /// Minimum number of teaching hours each resident must work.
    pub min_teaching_hours: i64,
    /// Minimum length of any working run.
    pub min_shift_length: i64,
    /// Minimum number of disjoint 24-hour rest spans per week window.
    pub min_days_off_per_week: i64,
}

/// The reasons for which [`RawParameters`] can be rejected.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ParameterError {
    #[error("parameter '{parameter}' must be non-negative, got {value}")]
    Negative {
        parameter: &'static str,
        value: i64,
    },
    #[error("at least one resident is required")]
    NoResidents,
    #[error("the horizon must contain at least one hour")]
    EmptyHorizon,
    #[error("parameter '{parameter}' must be at least 1")]
    ZeroLength { parameter: &'static str },
    #[error("parameter '{parameter}' is too large ({value})")]
    TooLarge {
        parameter: &'static str,
        value: i64,
    },
    #[error("teaching hour {0} is negative")]
    NegativeTeachingHour(i64),
    #[error("teaching hour {0} is listed more than once")]
    DuplicateTeachingHour(i64),
}

/// A validated scheduling problem instance.
///
/// Weeks are fixed [`HOURS_PER_WEEK`]-hour windows starting at hour 0; the last week of the
/// horizon may be shorter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchedulingParams {
    residents: usize,
    horizon_hours: usize,
    min_on_duty: usize,
    min_rest_hours: usize,
    max_consecutive_hours: usize,
    max_weekly_hours: usize,
    teaching_hours: Vec<usize>,
    min_teaching_hours: usize,
    min_shift_length: usize,
    min_days_off_per_week: usize,
}

impl TryFrom<RawParameters> for SchedulingParams {
    type Error = ParameterError;

    fn try_from(raw: RawParameters) -> Result<Self, Self::Error> {
        let residents = count("residents", raw.residents)?;
        let horizon_hours = count("horizon_hours", raw.horizon_hours)?;
        let min_on_duty = count("min_on_duty", raw.min_on_duty)?;
        let min_rest_hours = count("min_rest_hours", raw.min_rest_hours)?;
        let max_consecutive_hours = count("max_consecutive_hours", raw.max_consecutive_hours)?;
        let max_weekly_hours = count("max_weekly_hours", raw.max_weekly_hours)?;
        let min_teaching_hours = count("min_teaching_hours", raw.min_teaching_hours)?;
        let min_shift_length = count("min_shift_length", raw.min_shift_length)?;
        let min_days_off_per_week = count("min_days_off_per_week", raw.min_days_off_per_week)?;

        if residents == 0 {
            return Err(ParameterError::NoResidents);
        }
        if horizon_hours == 0 {
            return Err(ParameterError::EmptyHorizon);
        }
        if max_consecutive_hours == 0 {
            return Err(ParameterError::ZeroLength {
                parameter: "max_consecutive_hours",
            });
        }
        if min_shift_length == 0 {
            return Err(ParameterError::ZeroLength {
                parameter: "min_shift_length",
            });
        }

        // Every grid variable ends up in the objective, so the grid must be addressable by the
        // engine's 32-bit arithmetic.
        let cells = raw.residents.saturating_mul(raw.horizon_hours);
        if i32::try_from(cells).is_err() {
            return Err(ParameterError::TooLarge {
                parameter: "residents * horizon_hours",
                value: cells,
            });
        }

        let mut teaching_hours = Vec::with_capacity(raw.teaching_hours.len());
        for &hour in &raw.teaching_hours {
            if hour < 0 {
                return Err(ParameterError::NegativeTeachingHour(hour));
            }
            teaching_hours.push(count("teaching_hours", hour)?);
        }
        teaching_hours.sort_unstable();
        if let Some(window) = teaching_hours.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(ParameterError::DuplicateTeachingHour(window[0] as i64));
        }

        Ok(SchedulingParams {
            residents,
            horizon_hours,
            min_on_duty,
            min_rest_hours,
            max_consecutive_hours,
            max_weekly_hours,
            teaching_hours,
            min_teaching_hours,
            min_shift_length,
            min_days_off_per_week,
        })
    }
}

/// Converts a signed count into an index type, rejecting negative values and values which do not
/// fit into the `i32` coefficients and bounds of the search engine.
fn count(parameter: &'static str, value: i64) -> Result<usize, ParameterError> {
    if value < 0 {
        return Err(ParameterError::Negative { parameter, value });
    }

    i32::try_from(value)
        .map(|value| value as usize)
        .map_err(|_| ParameterError::TooLarge { parameter, value })
}

impl SchedulingParams {
    pub fn residents(&self) -> usize {
        self.residents
    }

    pub fn horizon_hours(&self) -> usize {
        self.horizon_hours
    }

    pub fn min_on_duty(&self) -> usize {
        self.min_on_duty
    }

    pub fn min_rest_hours(&self) -> usize {
        self.min_rest_hours
    }

    pub fn max_consecutive_hours(&self) -> usize {
        self.max_consecutive_hours
    }

    pub fn max_weekly_hours(&self) -> usize {
        self.max_weekly_hours
    }

    /// All designated teaching hours in ascending order, including those beyond the horizon.
    pub fn teaching_hours(&self) -> &[usize] {
        &self.teaching_hours
    }

    /// The teaching hours which fall inside the horizon.
    pub fn effective_teaching_hours(&self) -> impl Iterator<Item = usize> + '_ {
        self.teaching_hours
            .iter()
            .copied()
            .take_while(|&hour| hour < self.horizon_hours)
    }

    pub fn min_teaching_hours(&self) -> usize {
        self.min_teaching_hours
    }

    pub fn min_shift_length(&self) -> usize {
        self.min_shift_length
    }

    pub fn min_days_off_per_week(&self) -> usize {
        self.min_days_off_per_week
    }
}

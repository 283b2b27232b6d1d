//! Translation of the scheduling rules into constraints over a [`DecisionGrid`].
//!
//! Every rule has its own encoder which adds linear constraints and implications to a shared
//! [`Model`]. The encoders are independent of each other; each only looks at a bounded window of
//! hours around the hour it constrains and silently skips hours outside the horizon.
mod consecutive;
mod coverage;
mod days_off;
mod grid;
mod rest;
mod shift_length;
mod teaching;
mod weekly;

use std::ops::Range;

pub use grid::DecisionGrid;

use crate::model::Model;
use crate::params::SchedulingParams;
use crate::params::HOURS_PER_WEEK;
use crate::rule::Rule;

/// Adds the constraints which enforce `rule` to `model`.
pub(crate) fn encode_rule(
    rule: Rule,
    grid: &DecisionGrid,
    params: &SchedulingParams,
    model: &mut Model,
) {
    match rule {
        Rule::Coverage => coverage::encode(grid, params, model),
        Rule::MinRest => rest::encode(grid, params, model),
        Rule::MaxConsecutive => consecutive::encode(grid, params, model),
        Rule::MaxWeekly => weekly::encode(grid, params, model),
        Rule::MinTeaching => teaching::encode(grid, params, model),
        Rule::MinShiftLength => shift_length::encode(grid, params, model),
        Rule::MinDaysOff => days_off::encode(grid, params, model),
    }
}

/// The week windows of a horizon, the last of which may be shorter than a week.
fn week_windows(horizon_hours: usize) -> impl Iterator<Item = Range<usize>> {
    (0..horizon_hours)
        .step_by(HOURS_PER_WEEK)
        .map(move |start| start..(start + HOURS_PER_WEEK).min(horizon_hours))
}

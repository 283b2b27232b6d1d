use std::time::Duration;
use std::time::Instant;

use log::info;
use log::warn;
use thiserror::Error;

use crate::assembly::ScheduleModel;
use crate::engine::PumpkinEngine;
use crate::engine::SearchEngine;
use crate::engine::Verdict;
use crate::model::Assignment;
use crate::params::SchedulingParams;
use crate::schedule::GridError;
use crate::schedule::Schedule;
use crate::verification::verify;
use crate::verification::Violation;

/// The failures of [`solve`] which are not caused by the scheduling instance itself.
#[derive(Debug, Error)]
pub enum SchedulingError {
    /// The engine returned a grid which breaks the scheduling rules.
    #[error("the engine returned a schedule with {} rule violations", .violations.len())]
    Inconsistent { violations: Vec<Violation> },
    /// The engine returned an assignment with the wrong number of variables.
    #[error("the engine assigned {actual} variables, but the model has {expected}")]
    MalformedAssignment { expected: usize, actual: usize },
    #[error("the engine returned an invalid grid: {0}")]
    InvalidGrid(#[from] GridError),
}

/// Solves the scheduling instance with a default [`PumpkinEngine`].
///
/// Returns `Ok(None)` if the instance is infeasible or if no schedule was found within
/// `time_budget`.
pub fn solve(
    params: &SchedulingParams,
    time_budget: Duration,
) -> Result<Option<Schedule>, SchedulingError> {
    solve_with(&mut PumpkinEngine::default(), params, time_budget)
}

/// Solves the scheduling instance with the given engine.
///
/// A schedule is only returned after it passes [`verify`]; a schedule that does not is reported
/// as [`SchedulingError::Inconsistent`].
pub fn solve_with(
    engine: &mut impl SearchEngine,
    params: &SchedulingParams,
    time_budget: Duration,
) -> Result<Option<Schedule>, SchedulingError> {
    let schedule_model = ScheduleModel::build(params);

    let start = Instant::now();
    let verdict = engine.solve(schedule_model.model(), time_budget);
    let elapsed = start.elapsed();

    let assignment = match verdict {
        Verdict::Optimal(assignment) => {
            info!("Found an optimal schedule in {elapsed:?}");
            assignment
        }
        Verdict::Feasible(assignment) => {
            warn!("Found a schedule in {elapsed:?}, but could not prove that it is optimal");
            assignment
        }
        Verdict::Infeasible => {
            info!("No schedule exists for these parameters (proven in {elapsed:?})");
            return Ok(None);
        }
        Verdict::Unknown => {
            info!("No schedule was found within the time budget of {time_budget:?}");
            return Ok(None);
        }
    };

    let schedule = read_schedule(&schedule_model, &assignment)?;
    info!(
        "The schedule has {} worked hours in total",
        schedule.total_worked_hours()
    );

    let violations = verify(&schedule);
    if !violations.is_empty() {
        return Err(SchedulingError::Inconsistent { violations });
    }

    Ok(Some(schedule))
}

fn read_schedule(
    schedule_model: &ScheduleModel,
    assignment: &Assignment,
) -> Result<Schedule, SchedulingError> {
    let expected = schedule_model.model().num_variables();
    if assignment.len() != expected {
        return Err(SchedulingError::MalformedAssignment {
            expected,
            actual: assignment.len(),
        });
    }

    let grid = schedule_model.grid();
    let rows = (0..grid.residents())
        .map(|resident| {
            grid.row(resident)
                .iter()
                .map(|&variable| u8::from(assignment.value(variable)))
                .collect()
        })
        .collect();

    Ok(Schedule::new(schedule_model.params().clone(), rows)?)
}

use super::DecisionGrid;
use crate::model::LinearConstraint;
use crate::model::Model;
use crate::model::Term;
use crate::params::SchedulingParams;
use crate::rule::Rule;

/// Every window of `max_consecutive_hours + 1` hours which lies inside the horizon contains at
/// least one free hour.
pub(super) fn encode(grid: &DecisionGrid, params: &SchedulingParams, model: &mut Model) {
    let limit = params.max_consecutive_hours();

    for resident in 0..grid.residents() {
        for window in grid.row(resident).windows(limit + 1) {
            let worked = window.iter().copied().map(Term::unit).collect::<Vec<_>>();
            model.add_linear(
                Rule::MaxConsecutive,
                LinearConstraint::less_than_or_equals(worked, limit as i32),
            );
        }
    }
}

use super::week_windows;
use super::DecisionGrid;
use crate::model::LinearConstraint;
use crate::model::Model;
use crate::model::Term;
use crate::params::SchedulingParams;
use crate::rule::Rule;

/// No resident works more than `max_weekly_hours` within one week window.
pub(super) fn encode(grid: &DecisionGrid, params: &SchedulingParams, model: &mut Model) {
    for resident in 0..grid.residents() {
        let row = grid.row(resident);

        for week in week_windows(grid.horizon_hours()) {
            let worked = row[week].iter().copied().map(Term::unit).collect::<Vec<_>>();
            model.add_linear(
                Rule::MaxWeekly,
                LinearConstraint::less_than_or_equals(worked, params.max_weekly_hours() as i32),
            );
        }
    }
}

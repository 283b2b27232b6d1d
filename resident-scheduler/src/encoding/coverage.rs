use super::DecisionGrid;
use crate::model::LinearConstraint;
use crate::model::Model;
use crate::model::Term;
use crate::params::SchedulingParams;
use crate::rule::Rule;

/// For every hour, at least `min_on_duty` residents work.
pub(super) fn encode(grid: &DecisionGrid, params: &SchedulingParams, model: &mut Model) {
    for hour in 0..grid.horizon_hours() {
        let on_duty = grid.column(hour).map(Term::unit).collect::<Vec<_>>();
        model.add_linear(
            Rule::Coverage,
            LinearConstraint::greater_than_or_equals(on_duty, params.min_on_duty() as i32),
        );
    }
}

use super::DecisionGrid;
use crate::model::LinearConstraint;
use crate::model::Model;
use crate::model::Term;
use crate::params::SchedulingParams;
use crate::rule::Rule;

/// Every resident works at least `min_teaching_hours` of the teaching hours inside the horizon.
///
/// Without teaching hours inside the horizon this is the constant constraint
/// `0 >= min_teaching_hours`.
pub(super) fn encode(grid: &DecisionGrid, params: &SchedulingParams, model: &mut Model) {
    for resident in 0..grid.residents() {
        let row = grid.row(resident);
        let attended = params
            .effective_teaching_hours()
            .map(|hour| Term::unit(row[hour]))
            .collect::<Vec<_>>();

        model.add_linear(
            Rule::MinTeaching,
            LinearConstraint::greater_than_or_equals(attended, params.min_teaching_hours() as i32),
        );
    }
}

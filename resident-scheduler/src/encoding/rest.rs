use super::DecisionGrid;
use crate::model::LinearConstraint;
use crate::model::Model;
use crate::model::Term;
use crate::params::SchedulingParams;
use crate::rule::Rule;

/// A shift ending at hour `t` (worked at `t`, free at `t + 1`) keeps the resident free up to and
/// including hour `t + min_rest_hours`:
///
/// `x[t + s] + x[t] - x[t + 1] <= 1` for every `s` in `[2, min_rest_hours]`.
pub(super) fn encode(grid: &DecisionGrid, params: &SchedulingParams, model: &mut Model) {
    let horizon = grid.horizon_hours();

    for resident in 0..grid.residents() {
        let row = grid.row(resident);

        for hour in 0..horizon.saturating_sub(1) {
            for offset in 2..=params.min_rest_hours() {
                let Some(&later) = row.get(hour + offset) else {
                    break;
                };

                model.add_linear(
                    Rule::MinRest,
                    LinearConstraint::less_than_or_equals(
                        [
                            Term::unit(later),
                            Term::unit(row[hour]),
                            Term::new(-1, row[hour + 1]),
                        ],
                        1,
                    ),
                );
            }
        }
    }
}
